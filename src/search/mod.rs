//! Query state and page fetching against the remote image API.

pub mod client;
pub mod query_state;
pub mod transport;
pub mod worker;

pub use client::{ApiConfig, SearchClient};
pub use query_state::QueryState;
pub use transport::{HttpResponse, HttpTransport, ScriptedTransport, Transport};
pub use worker::{FetchExecutor, InlineExecutor, ThreadedExecutor};
