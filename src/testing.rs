//! Testing utilities for code built on [`Provider`].
//!
//! [`MockTransport`] implements [`ProviderRpc`] over scripted wire responses,
//! so a [`GrpcProvider`] can be exercised without spinning up a gRPC server.
//! Every method replays the response scripted for it (or fails with
//! `Unimplemented` when none was) and counts its calls.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hemmer_provider_client::client::GrpcProvider;
//! use hemmer_provider_client::testing::MockTransport;
//!
//! #[tokio::test]
//! async fn test_my_host_logic() {
//!     let mock = Arc::new(MockTransport::default());
//!     mock.get_provider_schema.ok(my_schema_response());
//!
//!     let provider = GrpcProvider::new(mock.clone());
//!     // drive the provider...
//!     assert_eq!(mock.calls("get_provider_schema"), 1);
//! }
//! ```
//!
//! [`Provider`]: crate::provider::Provider
//! [`GrpcProvider`]: crate::client::GrpcProvider

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use futures::StreamExt;

use crate::proto;
use crate::rpc::{ProviderRpc, WireStream};

/// One scripted response, replayed on every call to its method.
pub struct Slot<T> {
    response: Mutex<Option<Result<T, tonic::Status>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            response: Mutex::new(None),
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Script a successful response.
    pub fn ok(&self, response: T) {
        self.set(Ok(response));
    }

    /// Script a failed call.
    pub fn err(&self, status: tonic::Status) {
        self.set(Err(status));
    }

    /// Script the call outcome, replacing any earlier script.
    pub fn set(&self, response: Result<T, tonic::Status>) {
        *self
            .response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    fn reply(&self, method: &'static str) -> Result<T, tonic::Status> {
        self.response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| Err(tonic::Status::unimplemented(method)))
    }
}

macro_rules! mock_transport {
    (
        unary { $($method:ident: $req:ident => $resp:ident),* $(,)? }
        streaming { $($stream:ident: $sreq:ident => $event:ident),* $(,)? }
    ) => {
        /// A scriptable [`ProviderRpc`] for tests.
        ///
        /// Each wire method has a [`Slot`] of the same name holding its
        /// scripted response. Streaming methods are scripted with the full
        /// list of events the stream should yield.
        #[derive(Default)]
        pub struct MockTransport {
            calls: Mutex<HashMap<&'static str, usize>>,
            $(
                #[doc = concat!("Scripted response for `", stringify!($method), "`.")]
                pub $method: Slot<proto::$resp>,
            )*
            $(
                #[doc = concat!("Scripted events for `", stringify!($stream), "`.")]
                pub $stream: Slot<Vec<Result<proto::$event, tonic::Status>>>,
            )*
        }

        #[async_trait]
        impl ProviderRpc for MockTransport {
            $(
                async fn $method(
                    &self,
                    _req: proto::$req,
                ) -> Result<proto::$resp, tonic::Status> {
                    self.record(stringify!($method));
                    self.$method.reply(stringify!($method))
                }
            )*
            $(
                async fn $stream(
                    &self,
                    _req: proto::$sreq,
                ) -> Result<WireStream<proto::$event>, tonic::Status> {
                    self.record(stringify!($stream));
                    let events = self.$stream.reply(stringify!($stream))?;
                    Ok(futures::stream::iter(events).boxed())
                }
            )*
        }
    };
}

mock_transport! {
    unary {
        get_provider_schema: GetProviderSchemaRequest => GetProviderSchemaResponse,
        get_resource_identity_schemas: GetResourceIdentitySchemasRequest => GetResourceIdentitySchemasResponse,
        validate_provider_config: ValidateProviderConfigRequest => ValidateProviderConfigResponse,
        validate_resource_config: ValidateResourceConfigRequest => ValidateResourceConfigResponse,
        validate_data_resource_config: ValidateDataResourceConfigRequest => ValidateDataResourceConfigResponse,
        validate_ephemeral_resource_config: ValidateEphemeralResourceConfigRequest => ValidateEphemeralResourceConfigResponse,
        validate_list_resource_config: ValidateListResourceConfigRequest => ValidateListResourceConfigResponse,
        validate_action_config: ValidateActionConfigRequest => ValidateActionConfigResponse,
        upgrade_resource_state: UpgradeResourceStateRequest => UpgradeResourceStateResponse,
        upgrade_resource_identity: UpgradeResourceIdentityRequest => UpgradeResourceIdentityResponse,
        configure_provider: ConfigureProviderRequest => ConfigureProviderResponse,
        stop_provider: StopProviderRequest => StopProviderResponse,
        read_resource: ReadResourceRequest => ReadResourceResponse,
        plan_resource_change: PlanResourceChangeRequest => PlanResourceChangeResponse,
        apply_resource_change: ApplyResourceChangeRequest => ApplyResourceChangeResponse,
        import_resource_state: ImportResourceStateRequest => ImportResourceStateResponse,
        move_resource_state: MoveResourceStateRequest => MoveResourceStateResponse,
        read_data_source: ReadDataSourceRequest => ReadDataSourceResponse,
        open_ephemeral_resource: OpenEphemeralResourceRequest => OpenEphemeralResourceResponse,
        renew_ephemeral_resource: RenewEphemeralResourceRequest => RenewEphemeralResourceResponse,
        close_ephemeral_resource: CloseEphemeralResourceRequest => CloseEphemeralResourceResponse,
        call_function: CallFunctionRequest => CallFunctionResponse,
        plan_action: PlanActionRequest => PlanActionResponse,
    }
    streaming {
        list_resource: ListResourceRequest => ListResourceEvent,
        invoke_action: InvokeActionRequest => InvokeActionEvent,
    }
}

impl MockTransport {
    /// Create a transport with nothing scripted; every call fails with
    /// `Unimplemented` until its slot is filled.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the named wire method was called, e.g.
    /// `"plan_resource_change"`.
    pub fn calls(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, method: &'static str) {
        *self
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(method)
            .or_insert(0) += 1;
    }
}

/// A MessagePack-encoded wire value, for building scripted responses.
pub fn wire_value(value: &serde_json::Value) -> proto::DynamicValue {
    proto::DynamicValue {
        // a literal JSON value always serializes
        msgpack: rmp_serde::to_vec_named(value).unwrap_or_default(),
        json: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_call_is_unimplemented() {
        let mock = MockTransport::new();
        let err = mock
            .read_resource(proto::ReadResourceRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unimplemented);
        assert_eq!(mock.calls("read_resource"), 1);
        assert_eq!(mock.calls("plan_resource_change"), 0);
    }

    #[tokio::test]
    async fn test_scripted_response_replays() {
        let mock = MockTransport::new();
        mock.stop_provider.ok(proto::StopProviderResponse {
            error: String::new(),
        });
        for _ in 0..2 {
            let reply = mock
                .stop_provider(proto::StopProviderRequest {})
                .await
                .unwrap();
            assert!(reply.error.is_empty());
        }
        assert_eq!(mock.calls("stop_provider"), 2);
    }
}
