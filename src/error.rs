//! Error types for the Hemmer provider client.

use thiserror::Error;

/// Errors that can occur while driving a provider over gRPC.
///
/// Most per-operation problems (invalid configuration, unknown type names,
/// values the provider rejected) surface as [`Diagnostic`]s on the operation
/// response instead, mirroring how providers report problems on the wire.
/// `ProviderError` is reserved for failures of the client itself: transport
/// setup, lifecycle calls, and malformed schema data.
///
/// [`Diagnostic`]: crate::diagnostics::Diagnostic
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An RPC finished with a non-OK gRPC status.
    #[error("RPC error: {0}")]
    Rpc(#[from] tonic::Status),

    /// A gRPC transport error occurred.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The provider returned a schema the client cannot use.
    #[error("Invalid provider schema: {0}")]
    Schema(String),

    /// The provider reported a failure while shutting down.
    #[error("Provider stop failed: {0}")]
    Stop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Schema("missing provider block".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid provider schema: missing provider block"
        );

        let err = ProviderError::Stop("still busy".to_string());
        assert_eq!(format!("{}", err), "Provider stop failed: still busy");
    }

    #[test]
    fn test_from_status() {
        let status = tonic::Status::unavailable("plugin exited");
        let err: ProviderError = status.into();
        match err {
            ProviderError::Rpc(status) => {
                assert_eq!(status.code(), tonic::Code::Unavailable);
                assert_eq!(status.message(), "plugin exited");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ProviderError = parse_err.into();
        assert!(matches!(err, ProviderError::Serialization(_)));
    }
}
