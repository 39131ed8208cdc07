//! The transport seam between the protocol client and tonic.
//!
//! [`GrpcProvider`] talks to providers through the [`ProviderRpc`] trait
//! rather than the generated client directly, so tests can script responses
//! without opening a socket. [`GrpcTransport`] is the real implementation.
//!
//! [`GrpcProvider`]: crate::client::GrpcProvider

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use tonic::transport::{Channel, Endpoint};

use crate::proto;
use crate::proto::provider_client::ProviderClient;

/// Provider schemas can be very large, so the receive limit is far above
/// tonic's 4MB default.
pub const MAX_RECV_MESSAGE_SIZE: usize = 64 << 20;

/// A stream of wire messages from a server-streaming RPC.
pub type WireStream<T> = BoxStream<'static, Result<T, tonic::Status>>;

/// One method per provider RPC, in wire terms.
///
/// Method names and signatures mirror the wire service one-to-one, so the
/// individual methods carry no documentation of their own.
#[allow(missing_docs)]
#[async_trait]
pub trait ProviderRpc: Send + Sync {
    async fn get_provider_schema(
        &self,
        req: proto::GetProviderSchemaRequest,
    ) -> Result<proto::GetProviderSchemaResponse, tonic::Status>;

    async fn get_resource_identity_schemas(
        &self,
        req: proto::GetResourceIdentitySchemasRequest,
    ) -> Result<proto::GetResourceIdentitySchemasResponse, tonic::Status>;

    async fn validate_provider_config(
        &self,
        req: proto::ValidateProviderConfigRequest,
    ) -> Result<proto::ValidateProviderConfigResponse, tonic::Status>;

    async fn validate_resource_config(
        &self,
        req: proto::ValidateResourceConfigRequest,
    ) -> Result<proto::ValidateResourceConfigResponse, tonic::Status>;

    async fn validate_data_resource_config(
        &self,
        req: proto::ValidateDataResourceConfigRequest,
    ) -> Result<proto::ValidateDataResourceConfigResponse, tonic::Status>;

    async fn validate_ephemeral_resource_config(
        &self,
        req: proto::ValidateEphemeralResourceConfigRequest,
    ) -> Result<proto::ValidateEphemeralResourceConfigResponse, tonic::Status>;

    async fn validate_list_resource_config(
        &self,
        req: proto::ValidateListResourceConfigRequest,
    ) -> Result<proto::ValidateListResourceConfigResponse, tonic::Status>;

    async fn validate_action_config(
        &self,
        req: proto::ValidateActionConfigRequest,
    ) -> Result<proto::ValidateActionConfigResponse, tonic::Status>;

    async fn upgrade_resource_state(
        &self,
        req: proto::UpgradeResourceStateRequest,
    ) -> Result<proto::UpgradeResourceStateResponse, tonic::Status>;

    async fn upgrade_resource_identity(
        &self,
        req: proto::UpgradeResourceIdentityRequest,
    ) -> Result<proto::UpgradeResourceIdentityResponse, tonic::Status>;

    async fn configure_provider(
        &self,
        req: proto::ConfigureProviderRequest,
    ) -> Result<proto::ConfigureProviderResponse, tonic::Status>;

    async fn stop_provider(
        &self,
        req: proto::StopProviderRequest,
    ) -> Result<proto::StopProviderResponse, tonic::Status>;

    async fn read_resource(
        &self,
        req: proto::ReadResourceRequest,
    ) -> Result<proto::ReadResourceResponse, tonic::Status>;

    async fn plan_resource_change(
        &self,
        req: proto::PlanResourceChangeRequest,
    ) -> Result<proto::PlanResourceChangeResponse, tonic::Status>;

    async fn apply_resource_change(
        &self,
        req: proto::ApplyResourceChangeRequest,
    ) -> Result<proto::ApplyResourceChangeResponse, tonic::Status>;

    async fn import_resource_state(
        &self,
        req: proto::ImportResourceStateRequest,
    ) -> Result<proto::ImportResourceStateResponse, tonic::Status>;

    async fn move_resource_state(
        &self,
        req: proto::MoveResourceStateRequest,
    ) -> Result<proto::MoveResourceStateResponse, tonic::Status>;

    async fn read_data_source(
        &self,
        req: proto::ReadDataSourceRequest,
    ) -> Result<proto::ReadDataSourceResponse, tonic::Status>;

    async fn open_ephemeral_resource(
        &self,
        req: proto::OpenEphemeralResourceRequest,
    ) -> Result<proto::OpenEphemeralResourceResponse, tonic::Status>;

    async fn renew_ephemeral_resource(
        &self,
        req: proto::RenewEphemeralResourceRequest,
    ) -> Result<proto::RenewEphemeralResourceResponse, tonic::Status>;

    async fn close_ephemeral_resource(
        &self,
        req: proto::CloseEphemeralResourceRequest,
    ) -> Result<proto::CloseEphemeralResourceResponse, tonic::Status>;

    async fn call_function(
        &self,
        req: proto::CallFunctionRequest,
    ) -> Result<proto::CallFunctionResponse, tonic::Status>;

    async fn list_resource(
        &self,
        req: proto::ListResourceRequest,
    ) -> Result<WireStream<proto::ListResourceEvent>, tonic::Status>;

    async fn plan_action(
        &self,
        req: proto::PlanActionRequest,
    ) -> Result<proto::PlanActionResponse, tonic::Status>;

    async fn invoke_action(
        &self,
        req: proto::InvokeActionRequest,
    ) -> Result<WireStream<proto::InvokeActionEvent>, tonic::Status>;
}

/// The tonic-backed transport.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    client: ProviderClient<Channel>,
}

impl GrpcTransport {
    /// Connect to a provider listening at `endpoint`.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.into())?.connect().await?;
        Ok(Self::new(channel))
    }

    /// Wrap an already established channel.
    pub fn new(channel: Channel) -> Self {
        let client =
            ProviderClient::new(channel).max_decoding_message_size(MAX_RECV_MESSAGE_SIZE);
        Self { client }
    }
}

macro_rules! unary {
    ($self:ident, $method:ident, $req:ident) => {
        // cloning the generated client only clones the underlying channel
        // handle, so each call gets its own `&mut` receiver
        $self
            .client
            .clone()
            .$method($req)
            .await
            .map(tonic::Response::into_inner)
    };
}

#[async_trait]
impl ProviderRpc for GrpcTransport {
    async fn get_provider_schema(
        &self,
        req: proto::GetProviderSchemaRequest,
    ) -> Result<proto::GetProviderSchemaResponse, tonic::Status> {
        unary!(self, get_provider_schema, req)
    }

    async fn get_resource_identity_schemas(
        &self,
        req: proto::GetResourceIdentitySchemasRequest,
    ) -> Result<proto::GetResourceIdentitySchemasResponse, tonic::Status> {
        unary!(self, get_resource_identity_schemas, req)
    }

    async fn validate_provider_config(
        &self,
        req: proto::ValidateProviderConfigRequest,
    ) -> Result<proto::ValidateProviderConfigResponse, tonic::Status> {
        unary!(self, validate_provider_config, req)
    }

    async fn validate_resource_config(
        &self,
        req: proto::ValidateResourceConfigRequest,
    ) -> Result<proto::ValidateResourceConfigResponse, tonic::Status> {
        unary!(self, validate_resource_config, req)
    }

    async fn validate_data_resource_config(
        &self,
        req: proto::ValidateDataResourceConfigRequest,
    ) -> Result<proto::ValidateDataResourceConfigResponse, tonic::Status> {
        unary!(self, validate_data_resource_config, req)
    }

    async fn validate_ephemeral_resource_config(
        &self,
        req: proto::ValidateEphemeralResourceConfigRequest,
    ) -> Result<proto::ValidateEphemeralResourceConfigResponse, tonic::Status> {
        unary!(self, validate_ephemeral_resource_config, req)
    }

    async fn validate_list_resource_config(
        &self,
        req: proto::ValidateListResourceConfigRequest,
    ) -> Result<proto::ValidateListResourceConfigResponse, tonic::Status> {
        unary!(self, validate_list_resource_config, req)
    }

    async fn validate_action_config(
        &self,
        req: proto::ValidateActionConfigRequest,
    ) -> Result<proto::ValidateActionConfigResponse, tonic::Status> {
        unary!(self, validate_action_config, req)
    }

    async fn upgrade_resource_state(
        &self,
        req: proto::UpgradeResourceStateRequest,
    ) -> Result<proto::UpgradeResourceStateResponse, tonic::Status> {
        unary!(self, upgrade_resource_state, req)
    }

    async fn upgrade_resource_identity(
        &self,
        req: proto::UpgradeResourceIdentityRequest,
    ) -> Result<proto::UpgradeResourceIdentityResponse, tonic::Status> {
        unary!(self, upgrade_resource_identity, req)
    }

    async fn configure_provider(
        &self,
        req: proto::ConfigureProviderRequest,
    ) -> Result<proto::ConfigureProviderResponse, tonic::Status> {
        unary!(self, configure_provider, req)
    }

    async fn stop_provider(
        &self,
        req: proto::StopProviderRequest,
    ) -> Result<proto::StopProviderResponse, tonic::Status> {
        unary!(self, stop_provider, req)
    }

    async fn read_resource(
        &self,
        req: proto::ReadResourceRequest,
    ) -> Result<proto::ReadResourceResponse, tonic::Status> {
        unary!(self, read_resource, req)
    }

    async fn plan_resource_change(
        &self,
        req: proto::PlanResourceChangeRequest,
    ) -> Result<proto::PlanResourceChangeResponse, tonic::Status> {
        unary!(self, plan_resource_change, req)
    }

    async fn apply_resource_change(
        &self,
        req: proto::ApplyResourceChangeRequest,
    ) -> Result<proto::ApplyResourceChangeResponse, tonic::Status> {
        unary!(self, apply_resource_change, req)
    }

    async fn import_resource_state(
        &self,
        req: proto::ImportResourceStateRequest,
    ) -> Result<proto::ImportResourceStateResponse, tonic::Status> {
        unary!(self, import_resource_state, req)
    }

    async fn move_resource_state(
        &self,
        req: proto::MoveResourceStateRequest,
    ) -> Result<proto::MoveResourceStateResponse, tonic::Status> {
        unary!(self, move_resource_state, req)
    }

    async fn read_data_source(
        &self,
        req: proto::ReadDataSourceRequest,
    ) -> Result<proto::ReadDataSourceResponse, tonic::Status> {
        unary!(self, read_data_source, req)
    }

    async fn open_ephemeral_resource(
        &self,
        req: proto::OpenEphemeralResourceRequest,
    ) -> Result<proto::OpenEphemeralResourceResponse, tonic::Status> {
        unary!(self, open_ephemeral_resource, req)
    }

    async fn renew_ephemeral_resource(
        &self,
        req: proto::RenewEphemeralResourceRequest,
    ) -> Result<proto::RenewEphemeralResourceResponse, tonic::Status> {
        unary!(self, renew_ephemeral_resource, req)
    }

    async fn close_ephemeral_resource(
        &self,
        req: proto::CloseEphemeralResourceRequest,
    ) -> Result<proto::CloseEphemeralResourceResponse, tonic::Status> {
        unary!(self, close_ephemeral_resource, req)
    }

    async fn call_function(
        &self,
        req: proto::CallFunctionRequest,
    ) -> Result<proto::CallFunctionResponse, tonic::Status> {
        unary!(self, call_function, req)
    }

    async fn list_resource(
        &self,
        req: proto::ListResourceRequest,
    ) -> Result<WireStream<proto::ListResourceEvent>, tonic::Status> {
        let streaming = self.client.clone().list_resource(req).await?.into_inner();
        Ok(streaming.boxed())
    }

    async fn plan_action(
        &self,
        req: proto::PlanActionRequest,
    ) -> Result<proto::PlanActionResponse, tonic::Status> {
        unary!(self, plan_action, req)
    }

    async fn invoke_action(
        &self,
        req: proto::InvokeActionRequest,
    ) -> Result<WireStream<proto::InvokeActionEvent>, tonic::Status> {
        let streaming = self.client.clone().invoke_action(req).await?.into_inner();
        Ok(streaming.boxed())
    }
}
