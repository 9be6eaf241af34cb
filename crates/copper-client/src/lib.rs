/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Copper client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod config;
pub mod http;
pub mod types;

pub use api::CopperApi;

pub use config::{CURRENCY_SOL, CURRENCY_USD, CopperConfig, DEFAULT_BASE_URL};

// Re-export commonly used types from http
pub use http::{
    CopperClient,
    CopperError,
    DecodeError,
    FixedIdGenerator,
    IdGenerator,
    MockTransport,
    ReqwestTransport,
    RequestSigner,
    Result,
    Transport,
    UuidGenerator,
};

// Re-export all types
pub use types::*;
