//! The gRPC-backed provider client.
//!
//! [`GrpcProvider`] implements [`Provider`] by translating each operation to
//! its wire form, calling the provider over the transport, and translating
//! the reply back. Every dynamic value is encoded and decoded against the
//! schema-implied type for the resource or data source involved, so the
//! schema is fetched (once) before any operation that carries values.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::SystemTime;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;
use tokio::sync::oneshot;
use tracing::{debug, trace};

use crate::cache::{ProviderAddr, SchemaCache};
use crate::diagnostics::{rpc_error, Diagnostic, Diagnostics};
use crate::dynamic;
use crate::error::ProviderError;
use crate::proto;
use crate::provider::Provider;
use crate::rpc::{GrpcTransport, ProviderRpc};
use crate::schema::{IdentitySchema, ProviderSchema, Schema, ValueType};
use crate::types::*;

/// Handle on the provider's child process. [`GrpcProvider::close`] terminates
/// the process through this handle when one was attached.
pub trait PluginHandle: Send {
    /// Kill the provider process.
    fn kill(&mut self);
}

/// A provider reached over gRPC.
///
/// The schema is fetched lazily on first use and held for the lifetime of
/// the connection. When a [`SchemaCache`] and provider address are attached,
/// the fetched schema is also shared with other connections to the same
/// provider, but only when the provider declares
/// `get_provider_schema_optional`: that capability is the provider's promise
/// that its schema is stable.
pub struct GrpcProvider {
    rpc: Arc<dyn ProviderRpc>,
    addr: Option<ProviderAddr>,
    shared_cache: Option<Arc<SchemaCache>>,
    schema: tokio::sync::Mutex<Option<Arc<ProviderSchema>>>,
    shutdown: StdMutex<Option<oneshot::Sender<()>>>,
    plugin: StdMutex<Option<Box<dyn PluginHandle>>>,
}

/// Fetch the schema and bail out of the operation with its diagnostics when
/// the fetch itself failed.
macro_rules! schema_or_bail {
    ($self:ident, $resp:ident) => {{
        let schemas = $self.schema().await;
        if schemas.diagnostics.has_errors() {
            $resp.diagnostics.extend(schemas.diagnostics.clone());
            return $resp;
        }
        schemas
    }};
}

/// Unwrap a result, or turn its error into a diagnostic on the response and
/// return the response as it stands.
macro_rules! try_diag {
    ($resp:ident, $result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                $resp.diagnostics.push(err.into());
                return $resp;
            }
        }
    };
}

impl GrpcProvider {
    /// Wrap an already constructed transport.
    pub fn new(rpc: Arc<dyn ProviderRpc>) -> Self {
        Self {
            rpc,
            addr: None,
            shared_cache: None,
            schema: tokio::sync::Mutex::new(None),
            shutdown: StdMutex::new(None),
            plugin: StdMutex::new(None),
        }
    }

    /// Connect to a provider listening at `endpoint`.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, ProviderError> {
        let transport = GrpcTransport::connect(endpoint).await?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Record the source address this provider was installed from, used as
    /// the shared schema cache key.
    pub fn with_addr(mut self, addr: impl Into<ProviderAddr>) -> Self {
        self.addr = Some(addr.into());
        self
    }

    /// Share fetched schemas with other connections through `cache`. Has no
    /// effect unless an address is attached too.
    pub fn with_schema_cache(mut self, cache: Arc<SchemaCache>) -> Self {
        self.shared_cache = Some(cache);
        self
    }

    /// Attach a handle on the provider process, killed on [`close`].
    ///
    /// [`close`]: Provider::close
    pub fn with_plugin_handle(mut self, plugin: Box<dyn PluginHandle>) -> Self {
        *self.plugin.get_mut().unwrap_or_else(PoisonError::into_inner) = Some(plugin);
        self
    }

    /// Attach a shutdown trigger for an in-process provider server, fired on
    /// [`close`].
    ///
    /// [`close`]: Provider::close
    pub fn with_shutdown(mut self, shutdown: oneshot::Sender<()>) -> Self {
        *self.shutdown.get_mut().unwrap_or_else(PoisonError::into_inner) = Some(shutdown);
        self
    }

    async fn fetch_schema(&self) -> ProviderSchema {
        trace!("GrpcProvider: GetProviderSchema");
        let resp = match self
            .rpc
            .get_provider_schema(proto::GetProviderSchemaRequest {})
            .await
        {
            Ok(resp) => resp,
            Err(status) => {
                return ProviderSchema {
                    diagnostics: rpc_error("GetProviderSchema", &status).into(),
                    ..Default::default()
                }
            }
        };

        let diagnostics = Diagnostics::from_proto(resp.diagnostics.clone());
        if diagnostics.has_errors() {
            return ProviderSchema {
                diagnostics,
                ..Default::default()
            };
        }
        if resp.provider.is_none() {
            let mut diagnostics = diagnostics;
            diagnostics.push(Diagnostic::error("missing provider schema").with_detail(
                "The provider did not return a schema for its own configuration. \
                 This is always a bug in the provider.",
            ));
            return ProviderSchema {
                diagnostics,
                ..Default::default()
            };
        }

        let mut schemas = match ProviderSchema::from_wire(resp) {
            Ok(schemas) => schemas,
            Err(err) => {
                return ProviderSchema {
                    diagnostics: Diagnostic::error("invalid provider schema")
                        .with_detail(err.to_string())
                        .into(),
                    ..Default::default()
                }
            }
        };

        trace!("GrpcProvider: GetResourceIdentitySchemas");
        match self
            .rpc
            .get_resource_identity_schemas(proto::GetResourceIdentitySchemasRequest {})
            .await
        {
            Ok(identities) => {
                if let Err(err) = schemas.attach_identities(identities) {
                    schemas.diagnostics.push(
                        Diagnostic::error("invalid resource identity schema")
                            .with_detail(err.to_string()),
                    );
                }
            }
            // Providers from before resource identity do not implement the
            // RPC at all; that is not an error.
            Err(status) if status.code() == tonic::Code::Unimplemented => {}
            Err(status) => schemas
                .diagnostics
                .push(rpc_error("GetResourceIdentitySchemas", &status)),
        }

        schemas
    }
}

fn unknown_type(kind: &str, type_name: &str) -> Diagnostic {
    Diagnostic::error(format!("unknown {kind} type {type_name:?}"))
}

fn missing_identity_schema(type_name: &str) -> Diagnostic {
    Diagnostic::error(format!(
        "identity schema not found for resource type {type_name:?}",
    ))
}

fn resource_schema<'a>(
    schemas: &'a ProviderSchema,
    type_name: &str,
) -> Result<&'a Schema, Diagnostic> {
    schemas
        .resource_types
        .get(type_name)
        .ok_or_else(|| unknown_type("resource", type_name))
}

/// Encode a host identity value, absent when null. Requires the resource
/// type to declare an identity schema.
fn encode_identity(
    schema: &Schema,
    type_name: &str,
    value: &serde_json::Value,
) -> Result<Option<proto::ResourceIdentityData>, Diagnostic> {
    if value.is_null() {
        return Ok(None);
    }
    let Some(identity) = &schema.identity else {
        return Err(missing_identity_schema(type_name));
    };
    let data = dynamic::encode(value, &identity.implied_type()).map_err(Diagnostic::from)?;
    Ok(Some(proto::ResourceIdentityData {
        identity_data: Some(data),
    }))
}

/// Decode a wire identity, null when the provider sent none.
fn decode_identity(
    schema: &Schema,
    type_name: &str,
    wire: Option<proto::ResourceIdentityData>,
) -> Result<serde_json::Value, Diagnostic> {
    let Some(data) = wire.and_then(|d| d.identity_data) else {
        return Ok(serde_json::Value::Null);
    };
    let Some(identity) = &schema.identity else {
        return Err(missing_identity_schema(type_name));
    };
    dynamic::decode(Some(&data), &identity.implied_type()).map_err(Diagnostic::from)
}

/// Encode the host's provider metadata, absent when the provider declared no
/// metadata schema.
fn encode_provider_meta(
    schemas: &ProviderSchema,
    value: &serde_json::Value,
) -> Result<Option<proto::DynamicValue>, Diagnostic> {
    match &schemas.provider_meta {
        Some(schema) => {
            let encoded = dynamic::encode(value, &schema.implied_type()).map_err(Diagnostic::from)?;
            Ok(Some(encoded))
        }
        None => Ok(None),
    }
}

fn renew_time(ts: Option<prost_types::Timestamp>) -> Option<SystemTime> {
    ts.and_then(|ts| SystemTime::try_from(ts).ok())
}

/// The types each of an action's linked resource slots encodes and decodes
/// against, resolved once per call.
struct LinkedSlot {
    state_type: ValueType,
    identity_type: Option<ValueType>,
    type_name: String,
}

fn linked_slots(
    schemas: &ProviderSchema,
    action_type: &str,
    provided: usize,
) -> Result<Vec<LinkedSlot>, Diagnostic> {
    let action = schemas
        .actions
        .get(action_type)
        .ok_or_else(|| unknown_type("action", action_type))?;
    if provided != action.linked_resources.len() {
        return Err(Diagnostic::error(format!(
            "action {action_type:?} expects {} linked resources, got {provided}",
            action.linked_resources.len(),
        )));
    }
    action
        .linked_resources
        .iter()
        .map(|slot| {
            let schema = resource_schema(schemas, &slot.type_name)?;
            Ok(LinkedSlot {
                state_type: schema.implied_type(),
                identity_type: schema.identity.as_ref().map(|i| i.implied_type()),
                type_name: slot.type_name.clone(),
            })
        })
        .collect()
}

#[async_trait]
impl Provider for GrpcProvider {
    async fn schema(&self) -> Arc<ProviderSchema> {
        let mut local = self.schema.lock().await;
        if let Some(schemas) = local.as_ref() {
            return Arc::clone(schemas);
        }

        // A shared entry is only usable when the provider promised a stable
        // schema; entries are only written under the same condition, but the
        // capability is re-checked in case the provider was replaced.
        if let (Some(addr), Some(cache)) = (&self.addr, &self.shared_cache) {
            if let Some(schemas) = cache.get(addr) {
                if schemas.server_capabilities.get_provider_schema_optional {
                    *local = Some(Arc::clone(&schemas));
                    return schemas;
                }
            }
        }

        let schemas = Arc::new(self.fetch_schema().await);
        if !schemas.diagnostics.has_errors()
            && schemas.server_capabilities.get_provider_schema_optional
        {
            if let (Some(addr), Some(cache)) = (&self.addr, &self.shared_cache) {
                cache.set(addr.clone(), Arc::clone(&schemas));
            }
        }
        *local = Some(Arc::clone(&schemas));
        schemas
    }

    async fn get_resource_identity_schemas(&self) -> GetResourceIdentitySchemasResponse {
        trace!("GrpcProvider: GetResourceIdentitySchemas");
        let mut resp = GetResourceIdentitySchemasResponse::default();
        let reply = match self
            .rpc
            .get_resource_identity_schemas(proto::GetResourceIdentitySchemasRequest {})
            .await
        {
            Ok(reply) => reply,
            // Providers from before resource identity do not implement the
            // RPC at all; they simply have no identity schemas.
            Err(status) if status.code() == tonic::Code::Unimplemented => return resp,
            Err(status) => {
                resp.diagnostics
                    .push(rpc_error("GetResourceIdentitySchemas", &status));
                return resp;
            }
        };
        resp.diagnostics.extend_proto(reply.diagnostics);
        for (type_name, wire) in reply.identity_schemas {
            match IdentitySchema::from_wire(wire) {
                Ok(identity) => {
                    resp.identity_schemas.insert(type_name, identity);
                }
                Err(err) => resp.diagnostics.push(
                    Diagnostic::error("invalid resource identity schema")
                        .with_detail(err.to_string()),
                ),
            }
        }
        resp
    }

    async fn validate_provider_config(
        &self,
        req: ValidateProviderConfigRequest,
    ) -> ValidateProviderConfigResponse {
        trace!("GrpcProvider: ValidateProviderConfig");
        let mut resp = ValidateProviderConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let config = try_diag!(
            resp,
            dynamic::encode(&req.config, &schemas.provider.implied_type())
        );
        let reply = try_diag!(
            resp,
            self.rpc
                .validate_provider_config(proto::ValidateProviderConfigRequest {
                    config: Some(config),
                })
                .await
                .map_err(|s| rpc_error("ValidateProviderConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn validate_resource_config(
        &self,
        req: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        trace!("GrpcProvider: ValidateResourceConfig");
        let mut resp = ValidateResourceConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let config = try_diag!(resp, dynamic::encode(&req.config, &schema.implied_type()));
        let reply = try_diag!(
            resp,
            self.rpc
                .validate_resource_config(proto::ValidateResourceConfigRequest {
                    type_name: req.type_name,
                    config: Some(config),
                    client_capabilities: req.client_capabilities.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("ValidateResourceConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn validate_data_source_config(
        &self,
        req: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        trace!("GrpcProvider: ValidateDataSourceConfig");
        let mut resp = ValidateDataSourceConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .data_sources
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("data source", &req.type_name))
        );
        let config = try_diag!(resp, dynamic::encode(&req.config, &schema.implied_type()));
        let reply = try_diag!(
            resp,
            self.rpc
                .validate_data_resource_config(proto::ValidateDataResourceConfigRequest {
                    type_name: req.type_name,
                    config: Some(config),
                })
                .await
                .map_err(|s| rpc_error("ValidateDataSourceConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn validate_ephemeral_resource_config(
        &self,
        req: ValidateEphemeralResourceConfigRequest,
    ) -> ValidateEphemeralResourceConfigResponse {
        trace!("GrpcProvider: ValidateEphemeralResourceConfig");
        let mut resp = ValidateEphemeralResourceConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .ephemeral_resource_types
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("ephemeral resource", &req.type_name))
        );
        let config = try_diag!(resp, dynamic::encode(&req.config, &schema.implied_type()));
        let reply = try_diag!(
            resp,
            self.rpc
                .validate_ephemeral_resource_config(
                    proto::ValidateEphemeralResourceConfigRequest {
                        type_name: req.type_name,
                        config: Some(config),
                    }
                )
                .await
                .map_err(|s| rpc_error("ValidateEphemeralResourceConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn validate_list_resource_config(
        &self,
        req: ValidateListResourceConfigRequest,
    ) -> ValidateListResourceConfigResponse {
        trace!("GrpcProvider: ValidateListResourceConfig");
        let mut resp = ValidateListResourceConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .list_resource_types
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("list resource", &req.type_name))
        );
        let config = try_diag!(resp, dynamic::encode(&req.config, &schema.implied_type()));
        let reply = try_diag!(
            resp,
            self.rpc
                .validate_list_resource_config(proto::ValidateListResourceConfigRequest {
                    type_name: req.type_name,
                    config: Some(config),
                })
                .await
                .map_err(|s| rpc_error("ValidateListResourceConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn validate_action_config(
        &self,
        req: ValidateActionConfigRequest,
    ) -> ValidateActionConfigResponse {
        trace!("GrpcProvider: ValidateActionConfig");
        let mut resp = ValidateActionConfigResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let action = try_diag!(
            resp,
            schemas
                .actions
                .get(&req.action_type)
                .ok_or_else(|| unknown_type("action", &req.action_type))
        );
        let config = try_diag!(
            resp,
            dynamic::encode(&req.config, &action.config.implied_type())
        );

        let mut linked = Vec::with_capacity(req.linked_resources.len());
        for lr in &req.linked_resources {
            let schema = try_diag!(resp, resource_schema(&schemas, &lr.type_name));
            let config = try_diag!(resp, dynamic::encode(&lr.config, &schema.implied_type()));
            linked.push(proto::LinkedResourceConfig {
                type_name: lr.type_name.clone(),
                config: Some(config),
            });
        }

        let reply = try_diag!(
            resp,
            self.rpc
                .validate_action_config(proto::ValidateActionConfigRequest {
                    type_name: req.action_type,
                    config: Some(config),
                    linked_resources: linked,
                })
                .await
                .map_err(|s| rpc_error("ValidateActionConfig", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn upgrade_resource_state(
        &self,
        req: UpgradeResourceStateRequest,
    ) -> UpgradeResourceStateResponse {
        trace!("GrpcProvider: UpgradeResourceState");
        let mut resp = UpgradeResourceStateResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let reply = try_diag!(
            resp,
            self.rpc
                .upgrade_resource_state(proto::UpgradeResourceStateRequest {
                    type_name: req.type_name,
                    version: req.version,
                    raw_state: req.raw_state.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("UpgradeResourceState", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.upgraded_state = try_diag!(
            resp,
            dynamic::decode(reply.upgraded_state.as_ref(), &schema.implied_type())
        );
        resp
    }

    async fn upgrade_resource_identity(
        &self,
        req: UpgradeResourceIdentityRequest,
    ) -> UpgradeResourceIdentityResponse {
        trace!("GrpcProvider: UpgradeResourceIdentity");
        let mut resp = UpgradeResourceIdentityResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let reply = try_diag!(
            resp,
            self.rpc
                .upgrade_resource_identity(proto::UpgradeResourceIdentityRequest {
                    type_name: req.type_name.clone(),
                    version: req.version,
                    raw_identity: req.raw_identity.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("UpgradeResourceIdentity", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.upgraded_identity = try_diag!(
            resp,
            decode_identity(schema, &req.type_name, reply.upgraded_identity)
        );
        resp
    }

    async fn configure_provider(
        &self,
        req: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse {
        trace!("GrpcProvider: ConfigureProvider");
        let mut resp = ConfigureProviderResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let config = try_diag!(
            resp,
            dynamic::encode(&req.config, &schemas.provider.implied_type())
        );
        let reply = try_diag!(
            resp,
            self.rpc
                .configure_provider(proto::ConfigureProviderRequest {
                    host_version: req.host_version,
                    config: Some(config),
                    client_capabilities: req.client_capabilities.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("ConfigureProvider", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn read_resource(&self, req: ReadResourceRequest) -> ReadResourceResponse {
        trace!("GrpcProvider: ReadResource");
        let mut resp = ReadResourceResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let ty = schema.implied_type();
        let current_state = try_diag!(resp, dynamic::encode(&req.prior_state, &ty));
        let provider_meta = try_diag!(resp, encode_provider_meta(&schemas, &req.provider_meta));
        let current_identity = try_diag!(
            resp,
            encode_identity(schema, &req.type_name, &req.current_identity)
        );

        let reply = try_diag!(
            resp,
            self.rpc
                .read_resource(proto::ReadResourceRequest {
                    type_name: req.type_name.clone(),
                    current_state: Some(current_state),
                    private: req.private,
                    provider_meta,
                    client_capabilities: req.client_capabilities.to_wire(),
                    current_identity,
                })
                .await
                .map_err(|s| rpc_error("ReadResource", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.new_state = try_diag!(resp, dynamic::decode(reply.new_state.as_ref(), &ty));
        resp.private = reply.private;
        resp.deferred = reply.deferred.map(Into::into);
        resp.new_identity = try_diag!(
            resp,
            decode_identity(schema, &req.type_name, reply.new_identity)
        );
        resp
    }

    async fn plan_resource_change(
        &self,
        req: PlanResourceChangeRequest,
    ) -> PlanResourceChangeResponse {
        trace!("GrpcProvider: PlanResourceChange");
        let mut resp = PlanResourceChangeResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let ty = schema.implied_type();

        // Providers that cannot plan a destroy get the trivial plan built
        // for them: the proposed (null) state passes through verbatim, along
        // with the private data the destroy will need.
        if req.proposed_new_state.is_null() && !schemas.server_capabilities.plan_destroy {
            resp.planned_state = req.proposed_new_state;
            resp.planned_private = req.prior_private;
            return resp;
        }

        let prior_state = try_diag!(resp, dynamic::encode(&req.prior_state, &ty));
        let proposed_new_state = try_diag!(resp, dynamic::encode(&req.proposed_new_state, &ty));
        let config = try_diag!(resp, dynamic::encode(&req.config, &ty));
        let provider_meta = try_diag!(resp, encode_provider_meta(&schemas, &req.provider_meta));
        let prior_identity = try_diag!(
            resp,
            encode_identity(schema, &req.type_name, &req.prior_identity)
        );

        let reply = try_diag!(
            resp,
            self.rpc
                .plan_resource_change(proto::PlanResourceChangeRequest {
                    type_name: req.type_name.clone(),
                    prior_state: Some(prior_state),
                    proposed_new_state: Some(proposed_new_state),
                    config: Some(config),
                    prior_private: req.prior_private,
                    provider_meta,
                    client_capabilities: req.client_capabilities.to_wire(),
                    prior_identity,
                })
                .await
                .map_err(|s| rpc_error("PlanResourceChange", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.planned_state = try_diag!(resp, dynamic::decode(reply.planned_state.as_ref(), &ty));
        resp.requires_replace = reply.requires_replace;
        resp.planned_private = reply.planned_private;
        resp.legacy_type_system = reply.legacy_type_system;
        resp.deferred = reply.deferred.map(Into::into);
        resp.planned_identity = try_diag!(
            resp,
            decode_identity(schema, &req.type_name, reply.planned_identity)
        );
        resp
    }

    async fn apply_resource_change(
        &self,
        req: ApplyResourceChangeRequest,
    ) -> ApplyResourceChangeResponse {
        trace!("GrpcProvider: ApplyResourceChange");
        let mut resp = ApplyResourceChangeResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let ty = schema.implied_type();
        let prior_state = try_diag!(resp, dynamic::encode(&req.prior_state, &ty));
        let planned_state = try_diag!(resp, dynamic::encode(&req.planned_state, &ty));
        let config = try_diag!(resp, dynamic::encode(&req.config, &ty));
        let provider_meta = try_diag!(resp, encode_provider_meta(&schemas, &req.provider_meta));
        let planned_identity = try_diag!(
            resp,
            encode_identity(schema, &req.type_name, &req.planned_identity)
        );

        let reply = try_diag!(
            resp,
            self.rpc
                .apply_resource_change(proto::ApplyResourceChangeRequest {
                    type_name: req.type_name.clone(),
                    prior_state: Some(prior_state),
                    planned_state: Some(planned_state),
                    config: Some(config),
                    planned_private: req.planned_private,
                    provider_meta,
                    planned_identity,
                })
                .await
                .map_err(|s| rpc_error("ApplyResourceChange", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.new_state = try_diag!(resp, dynamic::decode(reply.new_state.as_ref(), &ty));
        resp.private = reply.private;
        resp.legacy_type_system = reply.legacy_type_system;
        resp.new_identity = try_diag!(
            resp,
            decode_identity(schema, &req.type_name, reply.new_identity)
        );
        resp
    }

    async fn import_resource_state(
        &self,
        req: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse {
        trace!("GrpcProvider: ImportResourceState");
        let mut resp = ImportResourceStateResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(resp, resource_schema(&schemas, &req.type_name));
        let identity = try_diag!(resp, encode_identity(schema, &req.type_name, &req.identity));

        let reply = try_diag!(
            resp,
            self.rpc
                .import_resource_state(proto::ImportResourceStateRequest {
                    type_name: req.type_name,
                    id: req.id,
                    client_capabilities: req.client_capabilities.to_wire(),
                    identity,
                })
                .await
                .map_err(|s| rpc_error("ImportResourceState", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.deferred = reply.deferred.map(Into::into);

        // An import may fan out into resources of other types, so each one
        // is decoded against the schema for the type it reports. A type this
        // host has no schema for taints that one resource, not the rest.
        for imported in reply.imported_resources {
            let schema = match schemas.resource_types.get(&imported.type_name) {
                Some(schema) => schema,
                None => {
                    resp.diagnostics
                        .push(unknown_type("resource", &imported.type_name));
                    continue;
                }
            };
            let state = match dynamic::decode(imported.state.as_ref(), &schema.implied_type()) {
                Ok(state) => state,
                Err(err) => {
                    resp.diagnostics.push(err.into());
                    continue;
                }
            };
            let identity = match decode_identity(schema, &imported.type_name, imported.identity) {
                Ok(identity) => identity,
                Err(diag) => {
                    resp.diagnostics.push(diag);
                    continue;
                }
            };
            resp.imported_resources.push(ImportedResource {
                type_name: imported.type_name,
                state,
                private: imported.private,
                identity,
            });
        }
        resp
    }

    async fn move_resource_state(
        &self,
        req: MoveResourceStateRequest,
    ) -> MoveResourceStateResponse {
        trace!("GrpcProvider: MoveResourceState");
        let mut resp = MoveResourceStateResponse::default();

        // The source state stays raw because this provider has no schema for
        // the source type; only the reply needs schema-typed decoding.
        let target_type_name = req.target_type_name.clone();
        let reply = try_diag!(
            resp,
            self.rpc
                .move_resource_state(proto::MoveResourceStateRequest {
                    source_provider_address: req.source_provider_address,
                    source_type_name: req.source_type_name,
                    source_schema_version: req.source_schema_version,
                    source_state: req.source_state.to_wire(),
                    source_private: req.source_private,
                    source_identity: req.source_identity.as_ref().and_then(RawState::to_wire),
                    target_type_name: req.target_type_name,
                })
                .await
                .map_err(|s| rpc_error("MoveResourceState", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);

        let schemas = schema_or_bail!(self, resp);
        let schema = try_diag!(
            resp,
            schemas.resource_types.get(&target_type_name).ok_or_else(|| {
                unknown_type("resource", &target_type_name).with_detail(
                    "A move targeted a resource type this host has no schema for. \
                     This is a bug, please report it.",
                )
            })
        );
        resp.target_state = try_diag!(
            resp,
            dynamic::decode(reply.target_state.as_ref(), &schema.implied_type())
        );
        resp.target_private = reply.target_private;
        resp.target_identity = try_diag!(
            resp,
            decode_identity(schema, &target_type_name, reply.target_identity)
        );
        resp
    }

    async fn read_data_source(&self, req: ReadDataSourceRequest) -> ReadDataSourceResponse {
        trace!("GrpcProvider: ReadDataSource");
        let mut resp = ReadDataSourceResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .data_sources
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("data source", &req.type_name))
        );
        let ty = schema.implied_type();
        let config = try_diag!(resp, dynamic::encode(&req.config, &ty));
        let provider_meta = try_diag!(resp, encode_provider_meta(&schemas, &req.provider_meta));

        let reply = try_diag!(
            resp,
            self.rpc
                .read_data_source(proto::ReadDataSourceRequest {
                    type_name: req.type_name,
                    config: Some(config),
                    provider_meta,
                    client_capabilities: req.client_capabilities.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("ReadDataSource", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.state = try_diag!(resp, dynamic::decode(reply.state.as_ref(), &ty));
        resp.deferred = reply.deferred.map(Into::into);
        resp
    }

    async fn open_ephemeral_resource(
        &self,
        req: OpenEphemeralResourceRequest,
    ) -> OpenEphemeralResourceResponse {
        trace!("GrpcProvider: OpenEphemeralResource");
        let mut resp = OpenEphemeralResourceResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .ephemeral_resource_types
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("ephemeral resource", &req.type_name))
        );
        let ty = schema.implied_type();
        let config = try_diag!(resp, dynamic::encode(&req.config, &ty));

        let reply = try_diag!(
            resp,
            self.rpc
                .open_ephemeral_resource(proto::OpenEphemeralResourceRequest {
                    type_name: req.type_name,
                    config: Some(config),
                    client_capabilities: req.client_capabilities.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("OpenEphemeralResource", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.result = try_diag!(resp, dynamic::decode(reply.result.as_ref(), &ty));
        resp.private = reply.private;
        resp.renew_at = renew_time(reply.renew_at);
        resp.deferred = reply.deferred.map(Into::into);
        resp
    }

    async fn renew_ephemeral_resource(
        &self,
        req: RenewEphemeralResourceRequest,
    ) -> RenewEphemeralResourceResponse {
        trace!("GrpcProvider: RenewEphemeralResource");
        let mut resp = RenewEphemeralResourceResponse::default();
        let reply = try_diag!(
            resp,
            self.rpc
                .renew_ephemeral_resource(proto::RenewEphemeralResourceRequest {
                    type_name: req.type_name,
                    private: req.private,
                })
                .await
                .map_err(|s| rpc_error("RenewEphemeralResource", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.renew_at = renew_time(reply.renew_at);
        resp.private = reply.private;
        resp
    }

    async fn close_ephemeral_resource(
        &self,
        req: CloseEphemeralResourceRequest,
    ) -> CloseEphemeralResourceResponse {
        trace!("GrpcProvider: CloseEphemeralResource");
        let mut resp = CloseEphemeralResourceResponse::default();
        let reply = try_diag!(
            resp,
            self.rpc
                .close_ephemeral_resource(proto::CloseEphemeralResourceRequest {
                    type_name: req.type_name,
                    private: req.private,
                })
                .await
                .map_err(|s| rpc_error("CloseEphemeralResource", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp
    }

    async fn call_function(&self, req: CallFunctionRequest) -> CallFunctionResponse {
        trace!("GrpcProvider: CallFunction");
        let mut resp = CallFunctionResponse::default();
        let schemas = self.schema().await;
        if schemas.diagnostics.has_errors() {
            resp.error = Some(FunctionError {
                text: schemas
                    .diagnostics
                    .iter()
                    .map(|d| d.summary.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
                function_argument: None,
            });
            return resp;
        }

        let Some(decl) = schemas.functions.get(&req.name) else {
            resp.error = Some(FunctionError {
                text: format!("unknown function {:?}", req.name),
                function_argument: None,
            });
            return resp;
        };

        // Arity is checked host-side so a malformed call never reaches the
        // provider.
        if req.arguments.len() < decl.parameters.len() {
            resp.error = Some(FunctionError {
                text: format!(
                    "not enough arguments for function {:?}: expected {}, got {}",
                    req.name,
                    decl.parameters.len(),
                    req.arguments.len(),
                ),
                function_argument: None,
            });
            return resp;
        }
        if decl.variadic_parameter.is_none() && req.arguments.len() > decl.parameters.len() {
            resp.error = Some(FunctionError {
                text: format!(
                    "too many arguments for function {:?}: expected {}, got {}",
                    req.name,
                    decl.parameters.len(),
                    req.arguments.len(),
                ),
                function_argument: None,
            });
            return resp;
        }

        let mut arguments = Vec::with_capacity(req.arguments.len());
        for (i, value) in req.arguments.iter().enumerate() {
            // Arguments past the declared parameters all take the variadic
            // parameter's type.
            let Some(param) = decl.parameters.get(i).or(decl.variadic_parameter.as_ref()) else {
                break;
            };
            match dynamic::encode(value, &param.value_type) {
                Ok(arg) => arguments.push(arg),
                Err(err) => {
                    resp.error = Some(FunctionError {
                        text: format!("invalid value for parameter {:?}: {err}", param.name),
                        function_argument: Some(i as i64),
                    });
                    return resp;
                }
            }
        }

        let reply = match self
            .rpc
            .call_function(proto::CallFunctionRequest {
                name: req.name,
                arguments,
            })
            .await
        {
            Ok(reply) => reply,
            Err(status) => {
                resp.error = Some(FunctionError {
                    text: status.to_string(),
                    function_argument: None,
                });
                return resp;
            }
        };
        if let Some(err) = reply.error {
            resp.error = Some(FunctionError {
                text: err.text,
                function_argument: err.function_argument,
            });
            return resp;
        }
        match dynamic::decode(reply.result.as_ref(), &decl.return_type) {
            Ok(result) => resp.result = result,
            Err(err) => {
                resp.error = Some(FunctionError {
                    text: format!("invalid function result: {err}"),
                    function_argument: None,
                });
            }
        }
        resp
    }

    async fn list_resource(&self, req: ListResourceRequest) -> ListResourceResponse {
        trace!("GrpcProvider: ListResource");
        let mut resp = ListResourceResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let schema = try_diag!(
            resp,
            schemas
                .list_resource_types
                .get(&req.type_name)
                .ok_or_else(|| unknown_type("list resource", &req.type_name))
        );

        // The stored schema is the synthetic wrapper; only the provider's own
        // config block goes on the wire.
        let config_type = schema
            .block
            .blocks
            .get("config")
            .map(|nested| nested.block.implied_type())
            .unwrap_or(ValueType::Dynamic);
        let config_value = req
            .config
            .get("config")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        let config = try_diag!(resp, dynamic::encode(&config_value, &config_type));

        // Identities and resource objects in events belong to the managed
        // resource type of the same name.
        let resource = schemas.resource_types.get(&req.type_name);
        let identity_type = resource
            .and_then(|s| s.identity.as_ref())
            .map(|i| i.implied_type());
        let object_type = resource
            .map(Schema::implied_type)
            .unwrap_or(ValueType::Dynamic);

        let mut stream = try_diag!(
            resp,
            self.rpc
                .list_resource(proto::ListResourceRequest {
                    type_name: req.type_name.clone(),
                    config: Some(config),
                    include_resource_object: req.include_resource_object,
                    limit: req.limit,
                })
                .await
                .map_err(|s| rpc_error("ListResource", &s))
        );

        let mut results = Vec::new();
        while (results.len() as i64) < req.limit {
            let Some(event) = stream.next().await else {
                break;
            };
            let event = match event {
                Ok(event) => event,
                Err(status) => {
                    resp.diagnostics.push(rpc_error("ListResource", &status));
                    break;
                }
            };

            let event_diags = Diagnostics::from_proto(event.diagnostics);
            let failed = event_diags.has_errors();
            resp.diagnostics.extend(event_diags);
            if failed {
                break;
            }

            // Every result must carry an identity; a provider that omits one
            // is misbehaving, so the collection stops here like it does for
            // any other error-bearing event.
            let Some(identity_wire) = event.identity else {
                resp.diagnostics.push(
                    Diagnostic::error("missing resource identity").with_detail(format!(
                        "The provider returned a {:?} list result without an identity.",
                        req.type_name,
                    )),
                );
                break;
            };
            let Some(identity_type) = &identity_type else {
                resp.diagnostics.push(missing_identity_schema(&req.type_name));
                break;
            };
            let identity = match dynamic::decode(
                identity_wire.identity_data.as_ref(),
                identity_type,
            ) {
                Ok(identity) => identity,
                Err(err) => {
                    resp.diagnostics.push(Diagnostic::from(err));
                    continue;
                }
            };

            let mut record = json!({
                "display_name": event.display_name,
                "identity": identity,
            });
            if req.include_resource_object {
                if let Some(object) = event.resource_object {
                    match dynamic::decode(Some(&object), &object_type) {
                        Ok(state) => {
                            record["state"] = state;
                        }
                        Err(err) => {
                            resp.diagnostics.push(Diagnostic::from(err));
                            continue;
                        }
                    }
                }
            }
            results.push(record);
        }
        // Dropping the stream here cancels the RPC when the provider is
        // still producing events past the limit.

        resp.result = json!({
            "data": results,
            "config": config_value,
        });
        resp
    }

    async fn plan_action(&self, req: PlanActionRequest) -> PlanActionResponse {
        trace!("GrpcProvider: PlanAction");
        let mut resp = PlanActionResponse::default();
        let schemas = schema_or_bail!(self, resp);

        let action = try_diag!(
            resp,
            schemas
                .actions
                .get(&req.action_type)
                .ok_or_else(|| unknown_type("action", &req.action_type))
        );
        let config = try_diag!(
            resp,
            dynamic::encode(&req.config, &action.config.implied_type())
        );
        let slots = try_diag!(
            resp,
            linked_slots(&schemas, &req.action_type, req.linked_resources.len())
        );

        let mut linked = Vec::with_capacity(req.linked_resources.len());
        for (lr, slot) in req.linked_resources.iter().zip(&slots) {
            let prior_state = try_diag!(resp, dynamic::encode(&lr.prior_state, &slot.state_type));
            let planned_state =
                try_diag!(resp, dynamic::encode(&lr.planned_state, &slot.state_type));
            let lr_config = try_diag!(resp, dynamic::encode(&lr.config, &slot.state_type));
            let prior_identity = try_diag!(
                resp,
                encode_slot_identity(slot, &lr.prior_identity)
            );
            linked.push(proto::PlanActionLinkedResource {
                prior_state: Some(prior_state),
                planned_state: Some(planned_state),
                config: Some(lr_config),
                prior_identity,
            });
        }

        let reply = try_diag!(
            resp,
            self.rpc
                .plan_action(proto::PlanActionRequest {
                    action_type: req.action_type.clone(),
                    config: Some(config),
                    linked_resources: linked,
                    client_capabilities: req.client_capabilities.to_wire(),
                })
                .await
                .map_err(|s| rpc_error("PlanAction", &s))
        );
        resp.diagnostics.extend_proto(reply.diagnostics);
        resp.deferred = reply.deferred.map(Into::into);

        if reply.linked_resources.len() != slots.len() {
            resp.diagnostics.push(Diagnostic::error(format!(
                "action {:?} plan returned {} linked resources, expected {}",
                req.action_type,
                reply.linked_resources.len(),
                slots.len(),
            )));
            return resp;
        }
        for (planned, slot) in reply.linked_resources.into_iter().zip(&slots) {
            let planned_state = try_diag!(
                resp,
                dynamic::decode(planned.planned_state.as_ref(), &slot.state_type)
            );
            let planned_identity = try_diag!(
                resp,
                decode_slot_identity(slot, planned.planned_identity)
            );
            resp.linked_resources.push(PlannedLinkedResource {
                planned_state,
                planned_identity,
            });
        }
        resp
    }

    async fn invoke_action(&self, req: InvokeActionRequest) -> InvokeActionEvents {
        trace!("GrpcProvider: InvokeAction");

        fn failed(diagnostics: Diagnostics) -> InvokeActionEvents {
            futures::stream::once(async move {
                InvokeActionEvent::Completed {
                    linked_resources: Vec::new(),
                    diagnostics,
                }
            })
            .boxed()
        }
        macro_rules! try_fail {
            ($result:expr) => {
                match $result {
                    Ok(value) => value,
                    Err(err) => return failed(Diagnostic::from(err).into()),
                }
            };
        }

        let schemas = self.schema().await;
        if schemas.diagnostics.has_errors() {
            return failed(schemas.diagnostics.clone());
        }
        let Some(action) = schemas.actions.get(&req.action_type) else {
            return failed(unknown_type("action", &req.action_type).into());
        };
        let config = try_fail!(dynamic::encode(&req.config, &action.config.implied_type()));
        let slots = try_fail!(linked_slots(
            &schemas,
            &req.action_type,
            req.linked_resources.len(),
        ));

        let mut linked = Vec::with_capacity(req.linked_resources.len());
        for (lr, slot) in req.linked_resources.iter().zip(&slots) {
            let prior_state = try_fail!(dynamic::encode(&lr.prior_state, &slot.state_type));
            let planned_state = try_fail!(dynamic::encode(&lr.planned_state, &slot.state_type));
            let lr_config = try_fail!(dynamic::encode(&lr.config, &slot.state_type));
            let planned_identity = try_fail!(encode_slot_identity(slot, &lr.planned_identity));
            linked.push(proto::InvokeActionLinkedResource {
                prior_state: Some(prior_state),
                planned_state: Some(planned_state),
                config: Some(lr_config),
                planned_identity,
            });
        }

        let mut stream = match self
            .rpc
            .invoke_action(proto::InvokeActionRequest {
                action_type: req.action_type,
                config: Some(config),
                linked_resources: linked,
            })
            .await
        {
            Ok(stream) => stream,
            Err(status) => return failed(rpc_error("InvokeAction", &status).into()),
        };

        // The returned stream owns everything it decodes with; dropping it
        // drops the wire stream and cancels the invocation.
        let events = async_stream::stream! {
            loop {
                let Some(event) = stream.next().await else {
                    yield InvokeActionEvent::Completed {
                        linked_resources: Vec::new(),
                        diagnostics: Diagnostic::error(
                            "provider closed the action stream without a completion event",
                        )
                        .into(),
                    };
                    break;
                };
                let event = match event {
                    Ok(event) => event,
                    Err(status) => {
                        yield InvokeActionEvent::Completed {
                            linked_resources: Vec::new(),
                            diagnostics: rpc_error("InvokeAction", &status).into(),
                        };
                        break;
                    }
                };
                match event.r#type {
                    Some(proto::invoke_action_event::Type::Progress(progress)) => {
                        yield InvokeActionEvent::Progress {
                            message: progress.message,
                        };
                    }
                    Some(proto::invoke_action_event::Type::Completed(completed)) => {
                        let mut diagnostics = Diagnostics::from_proto(completed.diagnostics);
                        let mut linked_resources = Vec::new();
                        if completed.linked_resources.len() != slots.len() {
                            diagnostics.push(Diagnostic::error(format!(
                                "action completed with {} linked resources, expected {}",
                                completed.linked_resources.len(),
                                slots.len(),
                            )));
                        } else {
                            for (lr, slot) in completed.linked_resources.into_iter().zip(&slots) {
                                let new_state =
                                    match dynamic::decode(lr.new_state.as_ref(), &slot.state_type) {
                                        Ok(state) => state,
                                        Err(err) => {
                                            diagnostics.push(err.into());
                                            continue;
                                        }
                                    };
                                let new_identity = match decode_slot_identity(slot, lr.new_identity)
                                {
                                    Ok(identity) => identity,
                                    Err(diag) => {
                                        diagnostics.push(diag);
                                        continue;
                                    }
                                };
                                linked_resources.push(CompletedLinkedResource {
                                    new_state,
                                    new_identity,
                                    requires_replace: lr.requires_replace,
                                });
                            }
                        }
                        yield InvokeActionEvent::Completed {
                            linked_resources,
                            diagnostics,
                        };
                        break;
                    }
                    None => {
                        yield InvokeActionEvent::Completed {
                            linked_resources: Vec::new(),
                            diagnostics: Diagnostic::error(
                                "provider sent an action event with no payload",
                            )
                            .into(),
                        };
                        break;
                    }
                }
            }
        };
        events.boxed()
    }

    async fn validate_state_store_config(
        &self,
        _req: ValidateStateStoreConfigRequest,
    ) -> ValidateStateStoreConfigResponse {
        // State storage is declared in schemas but has no wire operations
        // yet.
        unimplemented!("state storage is not implemented")
    }

    async fn configure_state_store(
        &self,
        _req: ConfigureStateStoreRequest,
    ) -> ConfigureStateStoreResponse {
        unimplemented!("state storage is not implemented")
    }

    async fn get_states(&self, _req: GetStatesRequest) -> GetStatesResponse {
        unimplemented!("state storage is not implemented")
    }

    async fn delete_state(&self, _req: DeleteStateRequest) -> DeleteStateResponse {
        unimplemented!("state storage is not implemented")
    }

    async fn stop(&self) -> Result<(), ProviderError> {
        trace!("GrpcProvider: StopProvider");
        let reply = self.rpc.stop_provider(proto::StopProviderRequest {}).await?;
        if reply.error.is_empty() {
            Ok(())
        } else {
            Err(ProviderError::Stop(reply.error))
        }
    }

    async fn close(&self) -> Result<(), ProviderError> {
        trace!("GrpcProvider: closing");
        let shutdown = self
            .shutdown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(shutdown) = shutdown {
            // The server may already be gone; that is what we wanted anyway.
            let _ = shutdown.send(());
        }
        let plugin = self
            .plugin
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match plugin {
            Some(mut plugin) => plugin.kill(),
            None => debug!("GrpcProvider: no plugin handle to close"),
        }
        Ok(())
    }
}

fn encode_slot_identity(
    slot: &LinkedSlot,
    value: &serde_json::Value,
) -> Result<Option<proto::ResourceIdentityData>, Diagnostic> {
    if value.is_null() {
        return Ok(None);
    }
    let Some(identity_type) = &slot.identity_type else {
        return Err(missing_identity_schema(&slot.type_name));
    };
    let data = dynamic::encode(value, identity_type).map_err(Diagnostic::from)?;
    Ok(Some(proto::ResourceIdentityData {
        identity_data: Some(data),
    }))
}

fn decode_slot_identity(
    slot: &LinkedSlot,
    wire: Option<proto::ResourceIdentityData>,
) -> Result<serde_json::Value, Diagnostic> {
    let Some(data) = wire.and_then(|d| d.identity_data) else {
        return Ok(serde_json::Value::Null);
    };
    let Some(identity_type) = &slot.identity_type else {
        return Err(missing_identity_schema(&slot.type_name));
    };
    dynamic::decode(Some(&data), identity_type).map_err(Diagnostic::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ServerCapabilities;
    use crate::testing::{wire_value, MockTransport};
    use serde_json::json;
    use std::collections::HashMap;

    fn string_attr(name: &str) -> proto::Attribute {
        proto::Attribute {
            name: name.to_string(),
            r#type: b"\"string\"".to_vec(),
            optional: true,
            ..Default::default()
        }
    }

    fn wire_schema(attrs: Vec<proto::Attribute>) -> proto::Schema {
        proto::Schema {
            version: 0,
            block: Some(proto::Block {
                attributes: attrs,
                block_types: vec![],
                description: String::new(),
            }),
        }
    }

    fn schema_response() -> proto::GetProviderSchemaResponse {
        proto::GetProviderSchemaResponse {
            provider: Some(wire_schema(vec![string_attr("endpoint")])),
            resource_schemas: HashMap::from([(
                "null_thing".to_string(),
                wire_schema(vec![string_attr("id")]),
            )]),
            server_capabilities: Some(proto::ServerCapabilities {
                plan_destroy: false,
                get_provider_schema_optional: true,
                move_resource_state: true,
            }),
            ..Default::default()
        }
    }

    fn identity_response() -> proto::GetResourceIdentitySchemasResponse {
        proto::GetResourceIdentitySchemasResponse {
            identity_schemas: HashMap::from([(
                "null_thing".to_string(),
                proto::ResourceIdentitySchema {
                    version: 0,
                    identity_attributes: vec![proto::IdentityAttribute {
                        name: "id".to_string(),
                        r#type: b"\"string\"".to_vec(),
                        required_for_import: true,
                        optional_for_import: false,
                        description: String::new(),
                    }],
                },
            )]),
            diagnostics: vec![],
        }
    }

    fn provider(mock: &Arc<MockTransport>) -> GrpcProvider {
        let rpc: Arc<dyn ProviderRpc> = mock.clone();
        GrpcProvider::new(rpc)
    }

    #[tokio::test]
    async fn test_schema_fetched_once() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        let p = provider(&mock);

        let first = p.schema().await;
        assert!(!first.diagnostics.has_errors());
        assert!(first.resource_types.contains_key("null_thing"));

        let second = p.schema().await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(mock.calls("get_provider_schema"), 1);
    }

    #[tokio::test]
    async fn test_identity_unimplemented_is_tolerated() {
        // The mock leaves GetResourceIdentitySchemas unscripted, so it fails
        // with Unimplemented, as providers from before identity do.
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        let p = provider(&mock);

        let schemas = p.schema().await;
        assert!(!schemas.diagnostics.has_errors());
        assert!(schemas.resource_types["null_thing"].identity.is_none());
    }

    #[tokio::test]
    async fn test_identity_schemas_fetched_standalone() {
        let mock = Arc::new(MockTransport::new());
        mock.get_resource_identity_schemas.ok(identity_response());
        let p = provider(&mock);

        let resp = p.get_resource_identity_schemas().await;
        assert!(!resp.diagnostics.has_errors());
        assert_eq!(
            resp.identity_schemas["null_thing"].implied_type(),
            ValueType::object(HashMap::from([("id".to_string(), ValueType::String)])),
        );
        // fetched directly, without the composite schema
        assert_eq!(mock.calls("get_provider_schema"), 0);
        assert_eq!(mock.calls("get_resource_identity_schemas"), 1);
    }

    #[tokio::test]
    async fn test_identity_schemas_empty_on_old_plugins() {
        // The unscripted mock answers with Unimplemented, as providers from
        // before resource identity do.
        let mock = Arc::new(MockTransport::new());
        let p = provider(&mock);

        let resp = p.get_resource_identity_schemas().await;
        assert!(resp.diagnostics.is_empty());
        assert!(resp.identity_schemas.is_empty());
    }

    #[tokio::test]
    async fn test_shared_cache_needs_capability() {
        let mut resp = schema_response();
        resp.server_capabilities = Some(proto::ServerCapabilities {
            get_provider_schema_optional: false,
            ..Default::default()
        });
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(resp);

        let cache = Arc::new(SchemaCache::new());
        let p = provider(&mock)
            .with_addr("registry.hemmer.io/hemmer/null")
            .with_schema_cache(Arc::clone(&cache));
        p.schema().await;
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_shared_cache_populated_when_capable() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());

        let cache = Arc::new(SchemaCache::new());
        let addr = ProviderAddr::from("registry.hemmer.io/hemmer/null");
        let p = provider(&mock)
            .with_addr(addr.clone())
            .with_schema_cache(Arc::clone(&cache));

        let schemas = p.schema().await;
        assert!(Arc::ptr_eq(&cache.get(&addr).unwrap(), &schemas));
    }

    #[tokio::test]
    async fn test_shared_cache_hit_skips_fetch() {
        let addr = ProviderAddr::from("registry.hemmer.io/hemmer/null");
        let cache = Arc::new(SchemaCache::new());
        cache.set(
            addr.clone(),
            Arc::new(ProviderSchema {
                server_capabilities: ServerCapabilities {
                    get_provider_schema_optional: true,
                    ..Default::default()
                },
                ..Default::default()
            }),
        );

        // Nothing scripted: any wire call would fail the assertions below.
        let mock = Arc::new(MockTransport::new());
        let p = provider(&mock)
            .with_addr(addr)
            .with_schema_cache(Arc::clone(&cache));

        let schemas = p.schema().await;
        assert!(!schemas.diagnostics.has_errors());
        assert_eq!(mock.calls("get_provider_schema"), 0);
    }

    #[tokio::test]
    async fn test_schema_failure_blocks_operations() {
        let mock = Arc::new(MockTransport::new());
        let p = provider(&mock);

        let resp = p
            .read_resource(ReadResourceRequest {
                type_name: "null_thing".to_string(),
                prior_state: json!(null),
                private: vec![],
                provider_meta: json!(null),
                client_capabilities: ClientCapabilities::default(),
                current_identity: json!(null),
            })
            .await;
        assert!(resp.diagnostics.has_errors());
        assert_eq!(mock.calls("read_resource"), 0);
    }

    #[tokio::test]
    async fn test_unknown_resource_type() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        let p = provider(&mock);

        let resp = p
            .read_resource(ReadResourceRequest {
                type_name: "ghost_thing".to_string(),
                prior_state: json!(null),
                private: vec![],
                provider_meta: json!(null),
                client_capabilities: ClientCapabilities::default(),
                current_identity: json!(null),
            })
            .await;
        assert!(resp.diagnostics.has_errors());
        assert!(resp
            .diagnostics
            .iter()
            .any(|d| d.summary.contains("ghost_thing")));
        assert_eq!(mock.calls("read_resource"), 0);
    }

    #[tokio::test]
    async fn test_read_resource_decodes_state() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        mock.read_resource.ok(proto::ReadResourceResponse {
            new_state: Some(wire_value(&json!({"id": "b"}))),
            private: b"opaque".to_vec(),
            ..Default::default()
        });
        let p = provider(&mock);

        let resp = p
            .read_resource(ReadResourceRequest {
                type_name: "null_thing".to_string(),
                prior_state: json!({"id": "a"}),
                private: vec![],
                provider_meta: json!(null),
                client_capabilities: ClientCapabilities::default(),
                current_identity: json!(null),
            })
            .await;
        assert!(!resp.diagnostics.has_errors());
        assert_eq!(resp.new_state, json!({"id": "b"}));
        assert_eq!(resp.private, b"opaque".to_vec());
    }

    #[tokio::test]
    async fn test_plan_destroy_short_circuit() {
        // plan_destroy is off in the fixture schema, so planning a destroy
        // never reaches the provider.
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        let p = provider(&mock);

        let resp = p
            .plan_resource_change(PlanResourceChangeRequest {
                type_name: "null_thing".to_string(),
                prior_state: json!({"id": "a"}),
                proposed_new_state: json!(null),
                config: json!(null),
                prior_private: b"keep".to_vec(),
                provider_meta: json!(null),
                client_capabilities: ClientCapabilities::default(),
                prior_identity: json!(null),
            })
            .await;
        assert!(resp.diagnostics.is_empty());
        assert!(resp.planned_state.is_null());
        assert_eq!(resp.planned_private, b"keep".to_vec());
        assert_eq!(mock.calls("plan_resource_change"), 0);
    }

    #[tokio::test]
    async fn test_plan_destroy_forwarded_when_capable() {
        let mut schema_resp = schema_response();
        schema_resp.server_capabilities = Some(proto::ServerCapabilities {
            plan_destroy: true,
            get_provider_schema_optional: true,
            move_resource_state: true,
        });
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_resp);
        mock.plan_resource_change
            .ok(proto::PlanResourceChangeResponse::default());
        let p = provider(&mock);

        let resp = p
            .plan_resource_change(PlanResourceChangeRequest {
                type_name: "null_thing".to_string(),
                prior_state: json!({"id": "a"}),
                proposed_new_state: json!(null),
                config: json!(null),
                prior_private: vec![],
                provider_meta: json!(null),
                client_capabilities: ClientCapabilities::default(),
                prior_identity: json!(null),
            })
            .await;
        assert!(!resp.diagnostics.has_errors());
        assert_eq!(mock.calls("plan_resource_change"), 1);
    }

    fn function_response(variadic: bool) -> proto::GetProviderSchemaResponse {
        let mut resp = schema_response();
        resp.functions = HashMap::from([(
            "upper".to_string(),
            proto::Function {
                parameters: vec![proto::function::Parameter {
                    name: "input".to_string(),
                    r#type: b"\"string\"".to_vec(),
                    allow_null_value: false,
                    description: String::new(),
                }],
                variadic_parameter: variadic.then(|| proto::function::Parameter {
                    name: "rest".to_string(),
                    r#type: b"\"number\"".to_vec(),
                    allow_null_value: false,
                    description: String::new(),
                }),
                return_type: b"\"string\"".to_vec(),
                summary: String::new(),
                description: String::new(),
            },
        )]);
        resp
    }

    #[tokio::test]
    async fn test_call_function_arity_checked_locally() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(function_response(false));
        let p = provider(&mock);

        let resp = p
            .call_function(CallFunctionRequest {
                name: "upper".to_string(),
                arguments: vec![],
            })
            .await;
        assert!(resp.error.as_ref().unwrap().text.contains("not enough arguments"));

        let resp = p
            .call_function(CallFunctionRequest {
                name: "upper".to_string(),
                arguments: vec![json!("a"), json!("b")],
            })
            .await;
        assert!(resp.error.as_ref().unwrap().text.contains("too many arguments"));

        let resp = p
            .call_function(CallFunctionRequest {
                name: "lower".to_string(),
                arguments: vec![],
            })
            .await;
        assert!(resp.error.as_ref().unwrap().text.contains("unknown function"));

        assert_eq!(mock.calls("call_function"), 0);
    }

    #[tokio::test]
    async fn test_call_function_variadic() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(function_response(true));
        mock.call_function.ok(proto::CallFunctionResponse {
            result: Some(wire_value(&json!("OK"))),
            error: None,
        });
        let p = provider(&mock);

        // extra arguments all take the variadic parameter's type
        let resp = p
            .call_function(CallFunctionRequest {
                name: "upper".to_string(),
                arguments: vec![json!("a"), json!(1), json!(2)],
            })
            .await;
        assert!(resp.error.is_none());
        assert_eq!(resp.result, json!("OK"));
        assert_eq!(mock.calls("call_function"), 1);

        let resp = p
            .call_function(CallFunctionRequest {
                name: "upper".to_string(),
                arguments: vec![json!("a"), json!("not a number")],
            })
            .await;
        let err = resp.error.unwrap();
        assert_eq!(err.function_argument, Some(1));
        assert_eq!(mock.calls("call_function"), 1);
    }

    fn list_response() -> proto::GetProviderSchemaResponse {
        let mut resp = schema_response();
        resp.list_resource_schemas = HashMap::from([(
            "null_thing".to_string(),
            wire_schema(vec![string_attr("prefix")]),
        )]);
        resp
    }

    fn list_event(i: usize) -> proto::ListResourceEvent {
        proto::ListResourceEvent {
            display_name: format!("thing {i}"),
            resource_object: Some(wire_value(&json!({"id": i.to_string()}))),
            identity: Some(proto::ResourceIdentityData {
                identity_data: Some(wire_value(&json!({"id": i.to_string()}))),
            }),
            diagnostics: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_resource_stops_at_limit() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(list_response());
        mock.get_resource_identity_schemas.ok(identity_response());
        mock.list_resource.ok((0..10).map(|i| Ok(list_event(i))).collect());
        let p = provider(&mock);

        let resp = p
            .list_resource(ListResourceRequest {
                type_name: "null_thing".to_string(),
                config: json!({"config": {"prefix": "t"}}),
                include_resource_object: false,
                limit: 3,
            })
            .await;
        assert!(resp.diagnostics.is_empty());
        let data = resp.result["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["identity"], json!({"id": "0"}));
        assert_eq!(data[0]["display_name"], json!("thing 0"));
        // resource objects were not requested
        assert!(data[0].get("state").is_none());
        assert_eq!(resp.result["config"], json!({"prefix": "t"}));
    }

    #[tokio::test]
    async fn test_list_resource_includes_objects_when_asked() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(list_response());
        mock.get_resource_identity_schemas.ok(identity_response());
        mock.list_resource.ok(vec![Ok(list_event(0))]);
        let p = provider(&mock);

        let resp = p
            .list_resource(ListResourceRequest {
                type_name: "null_thing".to_string(),
                config: json!({"config": null}),
                include_resource_object: true,
                limit: 10,
            })
            .await;
        assert!(resp.diagnostics.is_empty());
        assert_eq!(resp.result["data"][0]["state"], json!({"id": "0"}));
    }

    #[tokio::test]
    async fn test_list_resource_requires_identity() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(list_response());
        mock.get_resource_identity_schemas.ok(identity_response());
        let mut missing = list_event(1);
        missing.identity = None;
        mock.list_resource
            .ok(vec![Ok(list_event(0)), Ok(missing), Ok(list_event(2))]);
        let p = provider(&mock);

        let resp = p
            .list_resource(ListResourceRequest {
                type_name: "null_thing".to_string(),
                config: json!({"config": null}),
                include_resource_object: false,
                limit: 10,
            })
            .await;
        // the bad event is reported and ends the collection; results before
        // it are kept, results after it are never consumed
        assert!(resp.diagnostics.has_errors());
        let data = resp.result["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["identity"], json!({"id": "0"}));
    }

    #[tokio::test]
    async fn test_import_skips_unknown_types() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(schema_response());
        mock.import_resource_state.ok(proto::ImportResourceStateResponse {
            imported_resources: vec![
                proto::ImportedResource {
                    type_name: "null_thing".to_string(),
                    state: Some(wire_value(&json!({"id": "a"}))),
                    private: vec![],
                    identity: None,
                },
                proto::ImportedResource {
                    type_name: "ghost_thing".to_string(),
                    state: Some(wire_value(&json!({"id": "b"}))),
                    private: vec![],
                    identity: None,
                },
            ],
            diagnostics: vec![],
            deferred: None,
        });
        let p = provider(&mock);

        let resp = p
            .import_resource_state(ImportResourceStateRequest {
                type_name: "null_thing".to_string(),
                id: "a".to_string(),
                client_capabilities: ClientCapabilities::default(),
                identity: json!(null),
            })
            .await;
        assert_eq!(resp.imported_resources.len(), 1);
        assert_eq!(resp.imported_resources[0].state, json!({"id": "a"}));
        assert!(resp.diagnostics.has_errors());
    }

    fn action_response() -> proto::GetProviderSchemaResponse {
        let mut resp = schema_response();
        resp.action_schemas = HashMap::from([(
            "reboot".to_string(),
            proto::ActionSchema {
                schema: Some(wire_schema(vec![])),
                linked_resources: vec![],
            },
        )]);
        resp
    }

    fn progress_event(message: &str) -> proto::InvokeActionEvent {
        proto::InvokeActionEvent {
            r#type: Some(proto::invoke_action_event::Type::Progress(
                proto::invoke_action_event::Progress {
                    message: message.to_string(),
                },
            )),
        }
    }

    fn completed_event() -> proto::InvokeActionEvent {
        proto::InvokeActionEvent {
            r#type: Some(proto::invoke_action_event::Type::Completed(
                proto::invoke_action_event::Completed {
                    diagnostics: vec![],
                    linked_resources: vec![],
                },
            )),
        }
    }

    #[tokio::test]
    async fn test_invoke_action_event_sequence() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(action_response());
        mock.invoke_action
            .ok(vec![Ok(progress_event("working")), Ok(completed_event())]);
        let p = provider(&mock);

        let mut events = p
            .invoke_action(InvokeActionRequest {
                action_type: "reboot".to_string(),
                config: json!(null),
                linked_resources: vec![],
            })
            .await;

        match events.next().await.unwrap() {
            InvokeActionEvent::Progress { message } => assert_eq!(message, "working"),
            other => panic!("expected a progress event, got {other:?}"),
        }
        match events.next().await.unwrap() {
            InvokeActionEvent::Completed { diagnostics, .. } => {
                assert!(!diagnostics.has_errors())
            }
            other => panic!("expected a completed event, got {other:?}"),
        }
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_invoke_action_transport_error_completes() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(action_response());
        mock.invoke_action.err(tonic::Status::unavailable("gone"));
        let p = provider(&mock);

        let mut events = p
            .invoke_action(InvokeActionRequest {
                action_type: "reboot".to_string(),
                config: json!(null),
                linked_resources: vec![],
            })
            .await;
        match events.next().await.unwrap() {
            InvokeActionEvent::Completed { diagnostics, .. } => {
                assert!(diagnostics.has_errors())
            }
            other => panic!("expected a completed event, got {other:?}"),
        }
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_invoke_action_unknown_action() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(action_response());
        let p = provider(&mock);

        let mut events = p
            .invoke_action(InvokeActionRequest {
                action_type: "launch".to_string(),
                config: json!(null),
                linked_resources: vec![],
            })
            .await;
        match events.next().await.unwrap() {
            InvokeActionEvent::Completed { diagnostics, .. } => {
                assert!(diagnostics.has_errors())
            }
            other => panic!("expected a completed event, got {other:?}"),
        }
        assert_eq!(mock.calls("invoke_action"), 0);
    }

    #[tokio::test]
    async fn test_stop_surfaces_provider_error() {
        let mock = Arc::new(MockTransport::new());
        mock.stop_provider.ok(proto::StopProviderResponse {
            error: String::new(),
        });
        let p = provider(&mock);
        assert!(p.stop().await.is_ok());

        mock.stop_provider.ok(proto::StopProviderResponse {
            error: "still applying".to_string(),
        });
        let err = p.stop().await.unwrap_err();
        assert!(matches!(err, ProviderError::Stop(msg) if msg == "still applying"));
    }

    #[tokio::test]
    async fn test_close_fires_shutdown() {
        let mock = Arc::new(MockTransport::new());
        let (tx, rx) = oneshot::channel();
        let p = provider(&mock).with_shutdown(tx);
        p.close().await.unwrap();
        assert!(rx.await.is_ok());
    }
}
