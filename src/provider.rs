//! The host-side provider interface.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::schema::ProviderSchema;
use crate::types::*;

/// Everything a connected provider can do, expressed over host-side records.
///
/// The primary implementation is [`GrpcProvider`], which forwards each
/// operation over the wire. [`OfflineProvider`] wraps another implementation
/// to restrict it to the operations that are safe before configuration.
///
/// Operations report failure through the diagnostics on their response, not
/// through `Result`; only the lifecycle methods ([`stop`](Provider::stop) and
/// [`close`](Provider::close)) and the schema fetch return errors directly.
///
/// [`GrpcProvider`]: crate::client::GrpcProvider
/// [`OfflineProvider`]: crate::offline::OfflineProvider
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch (or return the cached copy of) everything the provider declared
    /// about itself.
    async fn schema(&self) -> Arc<ProviderSchema>;

    /// Fetch just the identity schemas for the provider's resource types.
    /// Providers from before resource identity report an empty set.
    async fn get_resource_identity_schemas(&self) -> GetResourceIdentitySchemasResponse;

    /// Validate the provider's own configuration.
    async fn validate_provider_config(
        &self,
        req: ValidateProviderConfigRequest,
    ) -> ValidateProviderConfigResponse;

    /// Validate a resource configuration.
    async fn validate_resource_config(
        &self,
        req: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse;

    /// Validate a data source configuration.
    async fn validate_data_source_config(
        &self,
        req: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse;

    /// Validate an ephemeral resource configuration.
    async fn validate_ephemeral_resource_config(
        &self,
        req: ValidateEphemeralResourceConfigRequest,
    ) -> ValidateEphemeralResourceConfigResponse;

    /// Validate a list resource configuration.
    async fn validate_list_resource_config(
        &self,
        req: ValidateListResourceConfigRequest,
    ) -> ValidateListResourceConfigResponse;

    /// Validate an action configuration and its linked resource configs.
    async fn validate_action_config(
        &self,
        req: ValidateActionConfigRequest,
    ) -> ValidateActionConfigResponse;

    /// Reshape stored state written by an older schema version.
    async fn upgrade_resource_state(
        &self,
        req: UpgradeResourceStateRequest,
    ) -> UpgradeResourceStateResponse;

    /// Reshape a stored identity written by an older identity schema version.
    async fn upgrade_resource_identity(
        &self,
        req: UpgradeResourceIdentityRequest,
    ) -> UpgradeResourceIdentityResponse;

    /// Configure the provider, unlocking the full operation surface.
    async fn configure_provider(&self, req: ConfigureProviderRequest)
        -> ConfigureProviderResponse;

    /// Refresh a resource against the real infrastructure.
    async fn read_resource(&self, req: ReadResourceRequest) -> ReadResourceResponse;

    /// Plan a change to a resource.
    async fn plan_resource_change(
        &self,
        req: PlanResourceChangeRequest,
    ) -> PlanResourceChangeResponse;

    /// Apply a previously planned change to a resource.
    async fn apply_resource_change(
        &self,
        req: ApplyResourceChangeRequest,
    ) -> ApplyResourceChangeResponse;

    /// Import existing infrastructure into resource state.
    async fn import_resource_state(
        &self,
        req: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse;

    /// Translate state from another provider or resource type into one of
    /// this provider's resource types.
    async fn move_resource_state(&self, req: MoveResourceStateRequest)
        -> MoveResourceStateResponse;

    /// Read a data source.
    async fn read_data_source(&self, req: ReadDataSourceRequest) -> ReadDataSourceResponse;

    /// Open an ephemeral resource.
    async fn open_ephemeral_resource(
        &self,
        req: OpenEphemeralResourceRequest,
    ) -> OpenEphemeralResourceResponse;

    /// Renew an ephemeral resource before it expires.
    async fn renew_ephemeral_resource(
        &self,
        req: RenewEphemeralResourceRequest,
    ) -> RenewEphemeralResourceResponse;

    /// Close an ephemeral resource.
    async fn close_ephemeral_resource(
        &self,
        req: CloseEphemeralResourceRequest,
    ) -> CloseEphemeralResourceResponse;

    /// Call a provider-defined function.
    async fn call_function(&self, req: CallFunctionRequest) -> CallFunctionResponse;

    /// Search the real infrastructure for resources of one type, collecting
    /// the results eagerly up to the request's limit.
    async fn list_resource(&self, req: ListResourceRequest) -> ListResourceResponse;

    /// Plan an action.
    async fn plan_action(&self, req: PlanActionRequest) -> PlanActionResponse;

    /// Invoke an action and return its event stream. The stream yields zero
    /// or more progress events and ends after exactly one completion event.
    async fn invoke_action(&self, req: InvokeActionRequest) -> InvokeActionEvents;

    /// Validate a state store configuration.
    async fn validate_state_store_config(
        &self,
        req: ValidateStateStoreConfigRequest,
    ) -> ValidateStateStoreConfigResponse;

    /// Configure a state store.
    async fn configure_state_store(
        &self,
        req: ConfigureStateStoreRequest,
    ) -> ConfigureStateStoreResponse;

    /// List the states held by a state store.
    async fn get_states(&self, req: GetStatesRequest) -> GetStatesResponse;

    /// Delete one state from a state store.
    async fn delete_state(&self, req: DeleteStateRequest) -> DeleteStateResponse;

    /// Ask the provider to interrupt in-flight work.
    async fn stop(&self) -> Result<(), ProviderError>;

    /// Shut the connection down. The provider must not be used afterwards.
    async fn close(&self) -> Result<(), ProviderError>;
}
