//! Panel client: JSON fetch runner and the runtime that executes it.
mod fetch;
mod handle;
mod types;

pub use fetch::{ClientSettings, Fetcher, ReqwestFetcher};
pub use handle::ClientHandle;
pub use types::{ClientEvent, FetchFailure, RequestId};
