use thiserror::Error;

pub type RequestId = u64;

/// Event emitted by the client runtime when a request settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Settled {
        request_id: RequestId,
        result: Result<serde_json::Value, FetchFailure>,
    },
}

/// Why a fetch produced no JSON result.
///
/// The `Display` text is exactly what a frontend renders in place of the
/// JSON: the raw response body for an HTTP failure, the transport layer's
/// own description otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The response carried a status outside 200-299.
    #[error("{body}")]
    Status { code: u16, body: String },
    /// The transaction never produced a usable response.
    #[error("{0}")]
    Transport(String),
}
