// ABOUTME: Async client for the upstream content API.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, FetchError and the normalized records.

//! playfeed-client fetches the media catalog and per-title detail documents
//! and returns them as stable [`Summary`] and [`Details`] records.
//!
//! # Example
//!
//! ```no_run
//! use playfeed_client::{Client, FetchError};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FetchError> {
//!     let client = Client::builder().build()?;
//!     let cancel = CancellationToken::new();
//!     let catalog = client.fetch_catalog(&cancel).await?;
//!     if let Some(first) = catalog.first() {
//!         let details = client.fetch_details(&first.url, &cancel, first).await?;
//!         println!("{}", details.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::FetchError;
pub use crate::options::{ClientBuilder, Options};
pub use playfeed_normalize::{Details, Fallback, Summary};
