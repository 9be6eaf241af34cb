/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the signed request pipeline and endpoints
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::sync::Arc;

use common::{TEST_SECRET_KEY, header_value, setup_mock_server, test_config};
use copper_client::http::sign;
use copper_client::{CopperApi, CopperClient, CopperError, FixedIdGenerator, MockTransport};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(CopperClient::new(test_config("https://api.testnet.copper.co")));
}

#[tokio::test]
async fn test_wire_signature_matches_timestamp_header() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/platform/deposit-targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "depositTargetId": "dt-1",
            "externalId": "ext-fixed",
            "address": "abc",
            "status": "enabled",
            "mainCurrency": "SOL"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(CopperClient::new(test_config(&server.uri())))
        .with_id_generator(Arc::new(FixedIdGenerator::new("ext-fixed")));
    let target = assert_ok!(client.create_deposit_target("SOL").await);
    assert_eq!(target.currency, "SOL");

    let received = server.received_requests().await.expect("request recording");
    assert_eq!(received.len(), 1);
    let request = &received[0];

    let timestamp: u64 = header_value(request, "x-timestamp")
        .parse()
        .expect("numeric timestamp");
    let expected = sign(
        TEST_SECRET_KEY,
        "POST",
        "/platform/deposit-targets",
        &request.body,
        timestamp,
    );
    assert_eq!(header_value(request, "x-signature"), expected);
    assert_eq!(header_value(request, "authorization"), "ApiKey test-api-key");
    assert_eq!(header_value(request, "content-type"), "application/json");

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["externalId"], "ext-fixed");
    assert_eq!(body["portfolioId"], "portfolio-1");
}

#[tokio::test]
async fn test_remote_error_passes_message_through() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/platform/orders"))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(r#"{"message":"bad request"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(CopperClient::new(test_config(&server.uri())));
    let err = client.get_orders_list(10, 0).await.unwrap_err();

    match err {
        CopperError::Remote { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad request");
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_orders_list_query_string() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/platform/orders"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orders": [
                {"orderId": "b", "status": "working", "orderType": "withdraw", "amount": "1", "baseCurrency": "SOL"},
                {"orderId": "a", "status": "executed", "orderType": "deposit", "amount": "2", "baseCurrency": "SOL"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(CopperClient::new(test_config(&server.uri())));
    let orders = assert_ok!(client.get_orders_list(10, 0).await);
    assert_eq!(orders[0].order_id, "b");
    assert_eq!(orders[1].order_id, "a");

    let received = server.received_requests().await.expect("request recording");
    assert_eq!(received[0].url.query(), Some("limit=10&offset=0"));
}

#[tokio::test]
async fn test_unsupported_currency_never_reaches_transport() {
    let transport = Arc::new(MockTransport::new(StatusCode::OK, "{}"));
    let client = assert_ok!(CopperClient::with_transport(
        test_config("https://api.testnet.copper.co"),
        transport.clone(),
    ));
    let api: &dyn CopperApi = &client;

    assert!(matches!(
        api.create_deposit_target("USD").await,
        Err(CopperError::UnsupportedCurrency(_))
    ));
    assert!(matches!(
        api.get_currency("USD").await,
        Err(CopperError::UnsupportedCurrency(_))
    ));
    assert!(matches!(
        api.create_withdraw_order("wd-1", "addr", "USD", Decimal::ONE).await,
        Err(CopperError::UnsupportedCurrency(_))
    ));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_withdraw_order_decimals_round_trip() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/platform/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": "ord-1",
            "externalOrderId": "wd-1",
            "status": "working",
            "orderType": "withdraw",
            "amount": "12.50",
            "baseCurrency": "SOL",
            "extra": {"toAddress": "addr", "feesPercent": "0.001"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(CopperClient::new(test_config(&server.uri())));
    let amount: Decimal = "12.50".parse().unwrap();
    let order = assert_ok!(client.create_withdraw_order("wd-1", "addr", "SOL", amount).await);

    assert_eq!(order.amount, amount);
    assert_eq!(order.fees_percent, "0.001".parse::<Decimal>().unwrap());

    let received = server.received_requests().await.expect("request recording");
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["amount"], "12.50");
}
