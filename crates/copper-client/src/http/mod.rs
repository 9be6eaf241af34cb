/*
[INPUT]:  Client configuration and Copper API endpoints
[OUTPUT]: Signed HTTP requests and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod currency;
pub mod deposit;
pub mod error;
pub mod ids;
pub mod orders;
pub mod request;
pub mod response;
pub mod signature;
pub mod transport;

pub use error::{CopperError, DecodeError, Result};
pub use ids::{FixedIdGenerator, IdGenerator, UuidGenerator};
pub use signature::{RequestSigner, sign};
pub use transport::{HttpRequest, HttpResponse, MockTransport, ReqwestTransport, Transport};

pub use client::{CopperClient, NO_BODY};
