//! A decorator restricting a provider to its pre-configuration surface.
//!
//! Some providers are only ever held in their unconfigured state: their
//! schema feeds function calls and cross-provider state moves, but nothing
//! should ever read or change real infrastructure through them.
//! [`OfflineProvider`] wraps such a provider and forwards only the operations
//! that are safe without configuration; everything else answers with an
//! error diagnostic instead of reaching the wire, because reaching this
//! point means the caller picked the wrong provider instance.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;

use crate::diagnostics::Diagnostic;
use crate::error::ProviderError;
use crate::provider::Provider;
use crate::schema::ProviderSchema;
use crate::types::*;

/// A provider that refuses every operation requiring configuration.
///
/// Wraps an unconfigured provider, usually a
/// [`GrpcProvider`](crate::client::GrpcProvider), and delegates only the
/// schema fetches, function calls, state moves, and lifecycle teardown.
pub struct OfflineProvider<P> {
    unconfigured: P,
}

impl<P: Provider> OfflineProvider<P> {
    /// Wrap an unconfigured provider.
    pub fn new(unconfigured: P) -> Self {
        Self { unconfigured }
    }
}

fn unconfigured(operation: &str, action: &str) -> Diagnostic {
    Diagnostic::error(format!("Called {operation} on an unconfigured provider")).with_detail(
        format!("{action} because this provider is not configured. This is a bug, please report it."),
    )
}

#[async_trait]
impl<P: Provider> Provider for OfflineProvider<P> {
    async fn schema(&self) -> Arc<ProviderSchema> {
        // The schema decides which functions exist and whether state moves
        // are supported, so it stays available.
        self.unconfigured.schema().await
    }

    async fn get_resource_identity_schemas(&self) -> GetResourceIdentitySchemasResponse {
        self.unconfigured.get_resource_identity_schemas().await
    }

    async fn validate_provider_config(
        &self,
        _req: ValidateProviderConfigRequest,
    ) -> ValidateProviderConfigResponse {
        ValidateProviderConfigResponse {
            diagnostics: unconfigured(
                "ValidateProviderConfig",
                "Cannot validate provider configuration",
            )
            .into(),
        }
    }

    async fn validate_resource_config(
        &self,
        _req: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        ValidateResourceConfigResponse {
            diagnostics: unconfigured(
                "ValidateResourceConfig",
                "Cannot validate resource configuration",
            )
            .into(),
        }
    }

    async fn validate_data_source_config(
        &self,
        _req: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        ValidateDataSourceConfigResponse {
            diagnostics: unconfigured(
                "ValidateDataSourceConfig",
                "Cannot validate data source configuration",
            )
            .into(),
        }
    }

    async fn validate_ephemeral_resource_config(
        &self,
        _req: ValidateEphemeralResourceConfigRequest,
    ) -> ValidateEphemeralResourceConfigResponse {
        ValidateEphemeralResourceConfigResponse {
            diagnostics: unconfigured(
                "ValidateEphemeralResourceConfig",
                "Cannot validate this resource configuration",
            )
            .into(),
        }
    }

    async fn validate_list_resource_config(
        &self,
        _req: ValidateListResourceConfigRequest,
    ) -> ValidateListResourceConfigResponse {
        ValidateListResourceConfigResponse {
            diagnostics: unconfigured(
                "ValidateListResourceConfig",
                "Cannot validate this resource configuration",
            )
            .into(),
        }
    }

    async fn validate_action_config(
        &self,
        _req: ValidateActionConfigRequest,
    ) -> ValidateActionConfigResponse {
        ValidateActionConfigResponse {
            diagnostics: unconfigured(
                "ValidateActionConfig",
                "Cannot validate this action configuration",
            )
            .into(),
        }
    }

    async fn upgrade_resource_state(
        &self,
        _req: UpgradeResourceStateRequest,
    ) -> UpgradeResourceStateResponse {
        UpgradeResourceStateResponse {
            diagnostics: unconfigured(
                "UpgradeResourceState",
                "Cannot upgrade the state of this resource",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn upgrade_resource_identity(
        &self,
        _req: UpgradeResourceIdentityRequest,
    ) -> UpgradeResourceIdentityResponse {
        UpgradeResourceIdentityResponse {
            diagnostics: unconfigured(
                "UpgradeResourceIdentity",
                "Cannot upgrade the identity of this resource",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn configure_provider(
        &self,
        _req: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse {
        ConfigureProviderResponse {
            diagnostics: unconfigured("ConfigureProvider", "Cannot configure this provider").into(),
        }
    }

    async fn read_resource(&self, _req: ReadResourceRequest) -> ReadResourceResponse {
        ReadResourceResponse {
            diagnostics: unconfigured("ReadResource", "Cannot read from this resource").into(),
            ..Default::default()
        }
    }

    async fn plan_resource_change(
        &self,
        _req: PlanResourceChangeRequest,
    ) -> PlanResourceChangeResponse {
        PlanResourceChangeResponse {
            diagnostics: unconfigured("PlanResourceChange", "Cannot plan changes to this resource")
                .into(),
            ..Default::default()
        }
    }

    async fn apply_resource_change(
        &self,
        _req: ApplyResourceChangeRequest,
    ) -> ApplyResourceChangeResponse {
        ApplyResourceChangeResponse {
            diagnostics: unconfigured(
                "ApplyResourceChange",
                "Cannot apply changes to this resource",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn import_resource_state(
        &self,
        _req: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse {
        ImportResourceStateResponse {
            diagnostics: unconfigured(
                "ImportResourceState",
                "Cannot import an existing object into this resource",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn move_resource_state(
        &self,
        req: MoveResourceStateRequest,
    ) -> MoveResourceStateResponse {
        // Moves translate state between providers and are explicitly
        // supported on unconfigured providers.
        self.unconfigured.move_resource_state(req).await
    }

    async fn read_data_source(&self, _req: ReadDataSourceRequest) -> ReadDataSourceResponse {
        ReadDataSourceResponse {
            diagnostics: unconfigured("ReadDataSource", "Cannot read from this data source").into(),
            ..Default::default()
        }
    }

    async fn open_ephemeral_resource(
        &self,
        _req: OpenEphemeralResourceRequest,
    ) -> OpenEphemeralResourceResponse {
        OpenEphemeralResourceResponse {
            diagnostics: unconfigured(
                "OpenEphemeralResource",
                "Cannot open this resource instance",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn renew_ephemeral_resource(
        &self,
        _req: RenewEphemeralResourceRequest,
    ) -> RenewEphemeralResourceResponse {
        // Nothing was ever opened, so there is nothing to renew.
        RenewEphemeralResourceResponse::default()
    }

    async fn close_ephemeral_resource(
        &self,
        _req: CloseEphemeralResourceRequest,
    ) -> CloseEphemeralResourceResponse {
        // Nothing was ever opened, so there is nothing to close.
        CloseEphemeralResourceResponse::default()
    }

    async fn call_function(&self, req: CallFunctionRequest) -> CallFunctionResponse {
        // Provider functions are pure and never need configuration.
        self.unconfigured.call_function(req).await
    }

    async fn list_resource(&self, _req: ListResourceRequest) -> ListResourceResponse {
        ListResourceResponse {
            diagnostics: unconfigured("ListResource", "Cannot list this resource").into(),
            ..Default::default()
        }
    }

    async fn plan_action(&self, _req: PlanActionRequest) -> PlanActionResponse {
        PlanActionResponse {
            diagnostics: unconfigured("PlanAction", "Cannot plan this action").into(),
            ..Default::default()
        }
    }

    async fn invoke_action(&self, _req: InvokeActionRequest) -> InvokeActionEvents {
        futures::stream::once(async {
            InvokeActionEvent::Completed {
                linked_resources: Vec::new(),
                diagnostics: unconfigured("InvokeAction", "Cannot invoke this action").into(),
            }
        })
        .boxed()
    }

    async fn validate_state_store_config(
        &self,
        _req: ValidateStateStoreConfigRequest,
    ) -> ValidateStateStoreConfigResponse {
        ValidateStateStoreConfigResponse {
            diagnostics: unconfigured("ValidateStateStoreConfig", "Cannot validate state store")
                .into(),
        }
    }

    async fn configure_state_store(
        &self,
        _req: ConfigureStateStoreRequest,
    ) -> ConfigureStateStoreResponse {
        ConfigureStateStoreResponse {
            diagnostics: unconfigured("ConfigureStateStore", "Cannot configure state store").into(),
        }
    }

    async fn get_states(&self, _req: GetStatesRequest) -> GetStatesResponse {
        GetStatesResponse {
            diagnostics: unconfigured(
                "GetStates",
                "Cannot list states managed by this state store",
            )
            .into(),
            ..Default::default()
        }
    }

    async fn delete_state(&self, _req: DeleteStateRequest) -> DeleteStateResponse {
        DeleteStateResponse {
            diagnostics: unconfigured(
                "DeleteState",
                "Cannot use this state store to delete a state",
            )
            .into(),
        }
    }

    async fn stop(&self) -> Result<(), ProviderError> {
        self.unconfigured.stop().await
    }

    async fn close(&self) -> Result<(), ProviderError> {
        self.unconfigured.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GrpcProvider;
    use crate::proto;
    use crate::rpc::ProviderRpc;
    use crate::testing::{wire_value, MockTransport};
    use serde_json::json;
    use std::collections::HashMap;

    fn offline(mock: &Arc<MockTransport>) -> OfflineProvider<GrpcProvider> {
        let rpc: Arc<dyn ProviderRpc> = mock.clone();
        OfflineProvider::new(GrpcProvider::new(rpc))
    }

    #[tokio::test]
    async fn test_read_resource_refused_without_wire_call() {
        let mock = Arc::new(MockTransport::new());
        let p = offline(&mock);

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
        assert_eq!(resp.diagnostics.len(), 1);
        assert!(resp.diagnostics.has_errors());
        assert!(resp
            .diagnostics
            .iter()
            .any(|d| d.summary.contains("unconfigured provider")));
        // nothing reached the wire, not even the schema fetch
        assert_eq!(mock.calls("get_provider_schema"), 0);
        assert_eq!(mock.calls("read_resource"), 0);
    }

    #[tokio::test]
    async fn test_move_resource_state_delegates() {
        let mock = Arc::new(MockTransport::new());
        mock.get_provider_schema.ok(proto::GetProviderSchemaResponse {
            provider: Some(proto::Schema {
                version: 0,
                block: Some(proto::Block::default()),
            }),
            resource_schemas: HashMap::from([(
                "null_thing".to_string(),
                proto::Schema {
                    version: 0,
                    block: Some(proto::Block {
                        attributes: vec![proto::Attribute {
                            name: "id".to_string(),
                            r#type: b"\"string\"".to_vec(),
                            optional: true,
                            ..Default::default()
                        }],
                        block_types: vec![],
                        description: String::new(),
                    }),
                },
            )]),
            server_capabilities: Some(proto::ServerCapabilities {
                move_resource_state: true,
                ..Default::default()
            }),
            ..Default::default()
        });
        mock.move_resource_state.ok(proto::MoveResourceStateResponse {
            target_state: Some(wire_value(&json!({"id": "moved"}))),
            ..Default::default()
        });
        let p = offline(&mock);

        let resp = p
            .move_resource_state(MoveResourceStateRequest {
                source_provider_address: "registry.hemmer.io/hemmer/old".to_string(),
                source_type_name: "old_thing".to_string(),
                source_schema_version: 1,
                source_state: RawState::from_json(br#"{"id":"moved"}"#.to_vec()),
                source_private: vec![],
                source_identity: None,
                target_type_name: "null_thing".to_string(),
            })
            .await;
        assert!(!resp.diagnostics.has_errors());
        assert_eq!(resp.target_state, json!({"id": "moved"}));
        assert_eq!(mock.calls("move_resource_state"), 1);
    }

    #[tokio::test]
    async fn test_identity_schema_fetch_delegates() {
        let mock = Arc::new(MockTransport::new());
        mock.get_resource_identity_schemas
            .ok(proto::GetResourceIdentitySchemasResponse {
                identity_schemas: HashMap::from([(
                    "null_thing".to_string(),
                    proto::ResourceIdentitySchema {
                        version: 0,
                        identity_attributes: vec![],
                    },
                )]),
                diagnostics: vec![],
            });
        let p = offline(&mock);

        let resp = p.get_resource_identity_schemas().await;
        assert!(!resp.diagnostics.has_errors());
        assert!(resp.identity_schemas.contains_key("null_thing"));
        assert_eq!(mock.calls("get_resource_identity_schemas"), 1);
    }

    #[tokio::test]
    async fn test_renew_and_close_ephemeral_succeed_quietly() {
        let mock = Arc::new(MockTransport::new());
        let p = offline(&mock);

        let resp = p
            .renew_ephemeral_resource(RenewEphemeralResourceRequest {
                type_name: "null_secret".to_string(),
                private: vec![],
            })
            .await;
        assert!(resp.diagnostics.is_empty());

        let resp = p
            .close_ephemeral_resource(CloseEphemeralResourceRequest {
                type_name: "null_secret".to_string(),
                private: vec![],
            })
            .await;
        assert!(resp.diagnostics.is_empty());
        assert_eq!(mock.calls("renew_ephemeral_resource"), 0);
        assert_eq!(mock.calls("close_ephemeral_resource"), 0);
    }

    #[tokio::test]
    async fn test_invoke_action_refused_with_single_completion() {
        let mock = Arc::new(MockTransport::new());
        let p = offline(&mock);

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
        assert_eq!(mock.calls("invoke_action"), 0);
    }
}
