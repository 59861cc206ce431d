/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskboard adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod gateway;
pub mod http;
pub mod types;

pub use gateway::RemoteGateway;
pub use reqwest::StatusCode;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    Operation,
    Result,
    TaskboardClient,
    TaskboardError,
};

// Re-export all types
pub use types::*;
