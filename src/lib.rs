//! Hemmer Provider Client
//!
//! This crate is the host side of the Hemmer provider protocol: it connects
//! to a provider's gRPC server and drives it, the mirror image of the SDK
//! providers are built with. It follows the pattern established by
//! [terraform-plugin-go](https://github.com/hashicorp/terraform-plugin-go)
//! and the hosts that consume it.
//!
//! # Overview
//!
//! The client provides:
//!
//! - **Protocol Buffers types**: Pre-compiled Rust types from the canonical provider protocol
//! - **Schema types**: The provider's self-description, translated to host-side types
//! - **Provider trait**: Every provider operation over plain host-side records
//! - **GrpcProvider**: The wire-backed implementation, with schema caching and
//!   value translation
//! - **OfflineProvider**: A decorator restricting a provider to the operations
//!   that are safe before configuration
//! - **Logging**: Integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```ignore
//! use hemmer_provider_client::{
//!     init_logging, GrpcProvider, Provider,
//!     types::{ClientCapabilities, ConfigureProviderRequest, ReadResourceRequest},
//! };
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging();
//!
//!     let provider = GrpcProvider::connect("http://127.0.0.1:50051").await?;
//!
//!     let schemas = provider.schema().await;
//!     if schemas.diagnostics.has_errors() {
//!         for diag in &schemas.diagnostics {
//!             eprintln!("{}: {}", diag.summary, diag.detail);
//!         }
//!         return Ok(());
//!     }
//!
//!     let resp = provider
//!         .configure_provider(ConfigureProviderRequest {
//!             host_version: env!("CARGO_PKG_VERSION").to_string(),
//!             config: json!({"region": "eu-west-1"}),
//!             client_capabilities: ClientCapabilities::default(),
//!         })
//!         .await;
//!     assert!(!resp.diagnostics.has_errors());
//!
//!     let resp = provider
//!         .read_resource(ReadResourceRequest {
//!             type_name: "example_thing".to_string(),
//!             prior_state: json!({"id": "abc123"}),
//!             private: vec![],
//!             provider_meta: json!(null),
//!             client_capabilities: ClientCapabilities::default(),
//!             current_identity: json!(null),
//!         })
//!         .await;
//!     println!("current state: {}", resp.new_state);
//!
//!     provider.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Values and types
//!
//! Configuration and state move through the protocol as schema-typed dynamic
//! values: the provider's schema implies a structural type for every resource,
//! and values are encoded against it (MessagePack on the wire, JSON accepted
//! from providers that prefer it). The host-side representation is plain
//! [`serde_json::Value`]; the [`dynamic`] module does the translation and
//! rejects values that do not conform to the schema.
//!
//! # Diagnostics, not errors
//!
//! Provider operations report problems as [`Diagnostics`] on their responses
//! rather than failing: a response can carry several errors and warnings plus
//! partial results. Hard `Result` errors are reserved for the transport
//! lifecycle ([`Provider::stop`] and [`Provider::close`]).
//!
//! [`Diagnostics`]: diagnostics::Diagnostics
//! [`Provider::stop`]: provider::Provider::stop
//! [`Provider::close`]: provider::Provider::close

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod diagnostics;
pub mod dynamic;
pub mod error;
pub mod logging;
pub mod offline;
pub mod provider;
pub mod rpc;
pub mod schema;
pub mod testing;
pub mod types;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod proto;

// Re-export main types at crate root
pub use cache::{ProviderAddr, SchemaCache};
pub use client::{GrpcProvider, PluginHandle};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::ProviderError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use offline::OfflineProvider;
pub use provider::Provider;
pub use rpc::{GrpcTransport, ProviderRpc};
pub use schema::{ProviderSchema, Schema, ServerCapabilities, ValueType};
pub use types::{ClientCapabilities, Deferred, DeferredReason, RawState};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tonic;
pub use tracing;
