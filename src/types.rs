//! Request and response records for provider operations.
//!
//! Every provider operation takes a request record and returns a response
//! record. Responses carry their diagnostics inline rather than using a
//! `Result`: an operation can succeed with warnings or produce partial
//! results alongside errors, and callers decide what to do with them.

use std::collections::HashMap;
use std::time::SystemTime;

use futures::stream::BoxStream;

use crate::diagnostics::Diagnostics;
use crate::proto;
use crate::schema::IdentitySchema;

/// Optional protocol features this host supports, advertised to providers on
/// every capability-aware request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientCapabilities {
    /// The host can honor a [`Deferred`] response instead of failing.
    pub deferral_allowed: bool,
    /// The host understands write-only attributes and will never persist them.
    pub write_only_attributes_allowed: bool,
}

impl ClientCapabilities {
    pub(crate) fn to_wire(self) -> Option<proto::ClientCapabilities> {
        Some(proto::ClientCapabilities {
            deferral_allowed: self.deferral_allowed,
            write_only_attributes_allowed: self.write_only_attributes_allowed,
        })
    }
}

/// Why a provider deferred an operation instead of completing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredReason {
    /// The provider gave a reason this client does not recognize.
    Unknown,
    /// The resource configuration has unknown values.
    ResourceConfigUnknown,
    /// The provider configuration has unknown values.
    ProviderConfigUnknown,
    /// A prerequisite object does not exist yet.
    AbsentPrereq,
}

/// A provider's request to defer an operation to a later run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    /// Why the operation was deferred.
    pub reason: DeferredReason,
}

impl From<proto::Deferred> for Deferred {
    fn from(deferred: proto::Deferred) -> Self {
        let reason = match proto::deferred::Reason::try_from(deferred.reason) {
            Ok(proto::deferred::Reason::ResourceConfigUnknown) => {
                DeferredReason::ResourceConfigUnknown
            }
            Ok(proto::deferred::Reason::ProviderConfigUnknown) => {
                DeferredReason::ProviderConfigUnknown
            }
            Ok(proto::deferred::Reason::AbsentPrereq) => DeferredReason::AbsentPrereq,
            _ => DeferredReason::Unknown,
        };
        Self { reason }
    }
}

/// Serialized state from an earlier schema version, not yet decodable against
/// the current schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawState {
    /// JSON document form.
    pub json: Vec<u8>,
    /// Legacy flat key/value form.
    pub flatmap: HashMap<String, String>,
}

impl RawState {
    /// Raw state holding a JSON document.
    pub fn from_json(json: impl Into<Vec<u8>>) -> Self {
        Self {
            json: json.into(),
            flatmap: HashMap::new(),
        }
    }

    pub(crate) fn to_wire(&self) -> Option<proto::RawState> {
        Some(proto::RawState {
            json: self.json.clone(),
            flatmap: self.flatmap.clone(),
        })
    }
}

/// The outcome of [`Provider::get_resource_identity_schemas`].
///
/// [`Provider::get_resource_identity_schemas`]: crate::provider::Provider::get_resource_identity_schemas
#[derive(Debug, Default)]
pub struct GetResourceIdentitySchemasResponse {
    /// Identity schemas keyed by resource type name. Providers from before
    /// resource identity report none.
    pub identity_schemas: HashMap<String, IdentitySchema>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate its own configuration.
pub struct ValidateProviderConfigRequest {
    /// The configuration to validate.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateProviderConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateProviderConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate a resource configuration.
pub struct ValidateResourceConfigRequest {
    /// The resource type the configuration belongs to.
    pub type_name: String,
    /// The configuration to validate.
    pub config: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
}

/// The outcome of [`ValidateResourceConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateResourceConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate a data source configuration.
pub struct ValidateDataSourceConfigRequest {
    /// The data source type the configuration belongs to.
    pub type_name: String,
    /// The configuration to validate.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateDataSourceConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateDataSourceConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate an ephemeral resource configuration.
pub struct ValidateEphemeralResourceConfigRequest {
    /// The ephemeral resource type the configuration belongs to.
    pub type_name: String,
    /// The configuration to validate.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateEphemeralResourceConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateEphemeralResourceConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate a list resource configuration.
pub struct ValidateListResourceConfigRequest {
    /// The list resource type the configuration belongs to.
    pub type_name: String,
    /// The configuration to validate, as a value of the wrapped list schema.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateListResourceConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateListResourceConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to validate an action configuration.
pub struct ValidateActionConfigRequest {
    /// The action type the configuration belongs to.
    pub action_type: String,
    /// The action configuration to validate.
    pub config: serde_json::Value,
    /// The configurations of the resources linked to the action, in the
    /// order the action declares its slots.
    pub linked_resources: Vec<LinkedResourceConfig>,
}

/// Configuration of one resource linked to an action.
#[derive(Debug)]
pub struct LinkedResourceConfig {
    /// The resource type occupying the slot.
    pub type_name: String,
    /// The resource's configuration.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateActionConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateActionConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to reshape state written by an older schema version.
pub struct UpgradeResourceStateRequest {
    /// The resource type the state belongs to.
    pub type_name: String,
    /// The schema version the raw state was written with.
    pub version: i64,
    /// The stored state, raw because the current schema cannot decode it.
    pub raw_state: RawState,
}

/// The outcome of [`UpgradeResourceStateRequest`].
#[derive(Debug, Default)]
pub struct UpgradeResourceStateResponse {
    /// The state reshaped to the current schema version.
    pub upgraded_state: serde_json::Value,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to reshape an identity written by an older identity
/// schema version.
pub struct UpgradeResourceIdentityRequest {
    /// The resource type the identity belongs to.
    pub type_name: String,
    /// The identity schema version the raw identity was written with.
    pub version: i64,
    /// The stored identity, raw because the current schema cannot decode it.
    pub raw_identity: RawState,
}

/// The outcome of [`UpgradeResourceIdentityRequest`].
#[derive(Debug, Default)]
pub struct UpgradeResourceIdentityResponse {
    /// The identity reshaped to the current identity schema version.
    pub upgraded_identity: serde_json::Value,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Configure the provider, unlocking the full operation surface.
pub struct ConfigureProviderRequest {
    /// The host version, so providers can adjust behavior.
    pub host_version: String,
    /// The provider configuration.
    pub config: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
}

/// The outcome of [`ConfigureProviderRequest`].
#[derive(Debug, Default)]
pub struct ConfigureProviderResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Refresh a resource against the real infrastructure.
pub struct ReadResourceRequest {
    /// The resource type to read.
    pub type_name: String,
    /// The most recently stored state.
    pub prior_state: serde_json::Value,
    /// Provider-private data carried alongside the state, opaque to the host.
    pub private: Vec<u8>,
    /// Provider metadata attached by the host, if any.
    pub provider_meta: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
    /// The stored identity of the resource.
    pub current_identity: serde_json::Value,
}

/// The outcome of [`ReadResourceRequest`].
#[derive(Debug, Default)]
pub struct ReadResourceResponse {
    /// The refreshed state; null when the object no longer exists.
    pub new_state: serde_json::Value,
    /// Provider-private data to store with the new state.
    pub private: Vec<u8>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set when the provider deferred the read.
    pub deferred: Option<Deferred>,
    /// The refreshed identity of the resource.
    pub new_identity: serde_json::Value,
}

/// Ask the provider to plan a change to a resource.
pub struct PlanResourceChangeRequest {
    /// The resource type being changed.
    pub type_name: String,
    /// The stored state before the change; null when creating.
    pub prior_state: serde_json::Value,
    /// The state the host proposes; null when destroying.
    pub proposed_new_state: serde_json::Value,
    /// The configuration as written.
    pub config: serde_json::Value,
    /// Provider-private data stored with the prior state.
    pub prior_private: Vec<u8>,
    /// Provider metadata attached by the host, if any.
    pub provider_meta: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
    /// The stored identity of the resource.
    pub prior_identity: serde_json::Value,
}

/// The outcome of [`PlanResourceChangeRequest`].
#[derive(Debug, Default)]
pub struct PlanResourceChangeResponse {
    /// The state the provider expects the change to produce.
    pub planned_state: serde_json::Value,
    /// Dotted attribute paths whose change requires replacing the resource.
    pub requires_replace: Vec<String>,
    /// Provider-private data to carry to the apply.
    pub planned_private: Vec<u8>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set by providers built on the legacy SDK, whose plans are allowed to
    /// deviate from strict plan semantics.
    pub legacy_type_system: bool,
    /// Set when the provider deferred the plan.
    pub deferred: Option<Deferred>,
    /// The identity the provider expects the change to produce.
    pub planned_identity: serde_json::Value,
}

/// Apply a previously planned change to a resource.
pub struct ApplyResourceChangeRequest {
    /// The resource type being changed.
    pub type_name: String,
    /// The stored state before the change; null when creating.
    pub prior_state: serde_json::Value,
    /// The planned state to realize; null when destroying.
    pub planned_state: serde_json::Value,
    /// The configuration as written.
    pub config: serde_json::Value,
    /// Provider-private data carried from the plan.
    pub planned_private: Vec<u8>,
    /// Provider metadata attached by the host, if any.
    pub provider_meta: serde_json::Value,
    /// The identity carried from the plan.
    pub planned_identity: serde_json::Value,
}

/// The outcome of [`ApplyResourceChangeRequest`].
#[derive(Debug, Default)]
pub struct ApplyResourceChangeResponse {
    /// The state after the change; null when the object was destroyed.
    pub new_state: serde_json::Value,
    /// Provider-private data to store with the new state.
    pub private: Vec<u8>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set by providers built on the legacy SDK.
    pub legacy_type_system: bool,
    /// The identity after the change.
    pub new_identity: serde_json::Value,
}

/// Import existing infrastructure into resource state.
pub struct ImportResourceStateRequest {
    /// The resource type to import into.
    pub type_name: String,
    /// The user-supplied import identifier.
    pub id: String,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
    /// The identity to import by, when importing by identity.
    pub identity: serde_json::Value,
}

/// One resource produced by an import.
///
/// A single import can fan out into several resources, possibly of other
/// types than the one the import started from.
#[derive(Debug)]
pub struct ImportedResource {
    /// The type of the imported resource.
    pub type_name: String,
    /// The imported state.
    pub state: serde_json::Value,
    /// Provider-private data to store with the state.
    pub private: Vec<u8>,
    /// The identity of the imported resource.
    pub identity: serde_json::Value,
}

/// The outcome of [`ImportResourceStateRequest`].
#[derive(Debug, Default)]
pub struct ImportResourceStateResponse {
    /// The resources the import produced.
    pub imported_resources: Vec<ImportedResource>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set when the provider deferred the import.
    pub deferred: Option<Deferred>,
}

/// Ask the provider to translate state from another provider or resource
/// type into one of its own resource types.
pub struct MoveResourceStateRequest {
    /// The address of the provider the state is moving from.
    pub source_provider_address: String,
    /// The resource type the state is moving from.
    pub source_type_name: String,
    /// The source schema version the state was written with.
    pub source_schema_version: i64,
    /// The source state, kept raw because this provider has no schema for the
    /// source type.
    pub source_state: RawState,
    /// Provider-private data stored with the source state.
    pub source_private: Vec<u8>,
    /// The source identity, raw for the same reason as the state.
    pub source_identity: Option<RawState>,
    /// The resource type the state is moving to.
    pub target_type_name: String,
}

/// The outcome of [`MoveResourceStateRequest`].
#[derive(Debug, Default)]
pub struct MoveResourceStateResponse {
    /// The state translated to the target resource type.
    pub target_state: serde_json::Value,
    /// Provider-private data to store with the target state.
    pub target_private: Vec<u8>,
    /// The identity translated to the target resource type.
    pub target_identity: serde_json::Value,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Read a data source.
pub struct ReadDataSourceRequest {
    /// The data source type to read.
    pub type_name: String,
    /// The data source configuration.
    pub config: serde_json::Value,
    /// Provider metadata attached by the host, if any.
    pub provider_meta: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
}

/// The outcome of [`ReadDataSourceRequest`].
#[derive(Debug, Default)]
pub struct ReadDataSourceResponse {
    /// The data that was read.
    pub state: serde_json::Value,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set when the provider deferred the read.
    pub deferred: Option<Deferred>,
}

/// Open an ephemeral resource, producing a short-lived value.
pub struct OpenEphemeralResourceRequest {
    /// The ephemeral resource type to open.
    pub type_name: String,
    /// The ephemeral resource configuration.
    pub config: serde_json::Value,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
}

/// The outcome of [`OpenEphemeralResourceRequest`].
#[derive(Debug, Default)]
pub struct OpenEphemeralResourceResponse {
    /// The opened value.
    pub result: serde_json::Value,
    /// Provider-private data to pass to renew and close.
    pub private: Vec<u8>,
    /// When set, the host must call renew before this instant.
    pub renew_at: Option<SystemTime>,
    /// Set when the provider deferred the open.
    pub deferred: Option<Deferred>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Renew an ephemeral resource before it expires.
pub struct RenewEphemeralResourceRequest {
    /// The ephemeral resource type to renew.
    pub type_name: String,
    /// Provider-private data from the open or the previous renew.
    pub private: Vec<u8>,
}

/// The outcome of [`RenewEphemeralResourceRequest`].
#[derive(Debug, Default)]
pub struct RenewEphemeralResourceResponse {
    /// When set, the host must renew again before this instant.
    pub renew_at: Option<SystemTime>,
    /// Provider-private data to pass to the next renew or close.
    pub private: Vec<u8>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Close an ephemeral resource.
pub struct CloseEphemeralResourceRequest {
    /// The ephemeral resource type to close.
    pub type_name: String,
    /// Provider-private data from the open or the last renew.
    pub private: Vec<u8>,
}

/// The outcome of [`CloseEphemeralResourceRequest`].
#[derive(Debug, Default)]
pub struct CloseEphemeralResourceResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Call a provider-defined function.
pub struct CallFunctionRequest {
    /// The function name.
    pub name: String,
    /// The positional arguments.
    pub arguments: Vec<serde_json::Value>,
}

/// A function call failure, distinct from diagnostics so the caller can point
/// at the offending argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionError {
    /// What went wrong.
    pub text: String,
    /// Index into the call's arguments, when the error is argument-specific.
    pub function_argument: Option<i64>,
}

/// The outcome of [`CallFunctionRequest`].
#[derive(Debug, Default)]
pub struct CallFunctionResponse {
    /// The function result; null when the call failed.
    pub result: serde_json::Value,
    /// Set when the call failed.
    pub error: Option<FunctionError>,
}

/// Search the real infrastructure for resources of one type.
pub struct ListResourceRequest {
    /// The list resource type to query.
    pub type_name: String,
    /// A value of the wrapped list schema; only its `config` attribute is
    /// sent to the provider.
    pub config: serde_json::Value,
    /// Whether events should carry the full resource object, not just the
    /// identity.
    pub include_resource_object: bool,
    /// Stop after this many results.
    pub limit: i64,
}

/// The outcome of [`ListResourceRequest`].
#[derive(Debug, Default)]
pub struct ListResourceResponse {
    /// The accumulated results as a value of shape
    /// `{"data": [{display_name, state, identity}, ...], "config": ...}`.
    pub result: serde_json::Value,
    /// Problems the provider found, including per-event ones.
    pub diagnostics: Diagnostics,
}

/// Ask the provider to plan an action.
pub struct PlanActionRequest {
    /// The action type to plan.
    pub action_type: String,
    /// The action configuration.
    pub config: serde_json::Value,
    /// The resources linked to the action, in the order the action declares
    /// its slots.
    pub linked_resources: Vec<LinkedResourcePlan>,
    /// The host's capabilities.
    pub client_capabilities: ClientCapabilities,
}

/// The planning-time view of one resource linked to an action.
#[derive(Debug)]
pub struct LinkedResourcePlan {
    /// The stored state of the linked resource.
    pub prior_state: serde_json::Value,
    /// The state planned for the linked resource.
    pub planned_state: serde_json::Value,
    /// The linked resource's configuration.
    pub config: serde_json::Value,
    /// The stored identity of the linked resource.
    pub prior_identity: serde_json::Value,
}

/// The planned result for one linked resource.
#[derive(Debug)]
pub struct PlannedLinkedResource {
    /// The state the action expects to leave the resource in.
    pub planned_state: serde_json::Value,
    /// The identity the action expects to leave the resource with.
    pub planned_identity: serde_json::Value,
}

/// The outcome of [`PlanActionRequest`].
#[derive(Debug, Default)]
pub struct PlanActionResponse {
    /// The plan for each linked resource, in slot order.
    pub linked_resources: Vec<PlannedLinkedResource>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
    /// Set when the provider deferred the plan.
    pub deferred: Option<Deferred>,
}

/// Invoke a previously planned action.
pub struct InvokeActionRequest {
    /// The action type to invoke.
    pub action_type: String,
    /// The action configuration.
    pub config: serde_json::Value,
    /// The resources linked to the action, in the order the action declares
    /// its slots.
    pub linked_resources: Vec<LinkedResourceInvoke>,
}

/// The invocation-time view of one resource linked to an action.
#[derive(Debug)]
pub struct LinkedResourceInvoke {
    /// The stored state of the linked resource.
    pub prior_state: serde_json::Value,
    /// The state planned for the linked resource.
    pub planned_state: serde_json::Value,
    /// The linked resource's configuration.
    pub config: serde_json::Value,
    /// The identity planned for the linked resource.
    pub planned_identity: serde_json::Value,
}

/// The final state of one linked resource after an action ran.
#[derive(Debug)]
pub struct CompletedLinkedResource {
    /// The state the action left the resource in.
    pub new_state: serde_json::Value,
    /// The identity the action left the resource with.
    pub new_identity: serde_json::Value,
    /// The action changed the resource in a way that requires replacing it.
    pub requires_replace: bool,
}

/// An event from an action invocation.
///
/// Zero or more `Progress` events arrive first; the stream always ends with
/// exactly one `Completed` event.
#[derive(Debug)]
pub enum InvokeActionEvent {
    /// A human-readable progress update.
    Progress {
        /// The progress message, verbatim from the provider.
        message: String,
    },
    /// The action finished, successfully or not.
    Completed {
        /// The final state of each linked resource, in slot order.
        linked_resources: Vec<CompletedLinkedResource>,
        /// Problems the provider found.
        diagnostics: Diagnostics,
    },
}

/// The stream of events from an action invocation. Dropping the stream
/// abandons the invocation.
pub type InvokeActionEvents = BoxStream<'static, InvokeActionEvent>;

/// Ask the provider to validate a state store configuration.
pub struct ValidateStateStoreConfigRequest {
    /// The state store type the configuration belongs to.
    pub type_name: String,
    /// The configuration to validate.
    pub config: serde_json::Value,
}

/// The outcome of [`ValidateStateStoreConfigRequest`].
#[derive(Debug, Default)]
pub struct ValidateStateStoreConfigResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Configure a state store.
pub struct ConfigureStateStoreRequest {
    /// The state store type to configure.
    pub type_name: String,
    /// The state store configuration.
    pub config: serde_json::Value,
}

/// The outcome of [`ConfigureStateStoreRequest`].
#[derive(Debug, Default)]
pub struct ConfigureStateStoreResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// List the states held by a state store.
pub struct GetStatesRequest {
    /// The state store type to query.
    pub type_name: String,
}

/// The outcome of [`GetStatesRequest`].
#[derive(Debug, Default)]
pub struct GetStatesResponse {
    /// The identifiers of the states held by the store.
    pub state_ids: Vec<String>,
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

/// Delete one state from a state store.
pub struct DeleteStateRequest {
    /// The state store type holding the state.
    pub type_name: String,
    /// The identifier of the state to delete.
    pub state_id: String,
}

/// The outcome of [`DeleteStateRequest`].
#[derive(Debug, Default)]
pub struct DeleteStateResponse {
    /// Problems the provider found.
    pub diagnostics: Diagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deferred_reason_from_wire() {
        let deferred = Deferred::from(proto::Deferred {
            reason: proto::deferred::Reason::AbsentPrereq as i32,
        });
        assert_eq!(deferred.reason, DeferredReason::AbsentPrereq);

        // out-of-range reasons collapse to Unknown
        let deferred = Deferred::from(proto::Deferred { reason: 42 });
        assert_eq!(deferred.reason, DeferredReason::Unknown);
    }

    #[test]
    fn test_raw_state_from_json() {
        let raw = RawState::from_json(br#"{"id":"a"}"#.to_vec());
        assert!(raw.flatmap.is_empty());
        let wire = raw.to_wire().unwrap();
        assert_eq!(wire.json, br#"{"id":"a"}"#);
    }
}
