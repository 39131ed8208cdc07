//! Schema types describing provider, resource, and data source structure.
//!
//! Providers describe the shape of their configuration and state with schemas.
//! The client uses them for two things: deriving the structural type every
//! dynamic value is encoded against, and validating values before they go on
//! the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::ProviderError;
use crate::proto;

/// The structural type of a value.
///
/// Wire schemas carry types as a compact JSON encoding: primitives as bare
/// strings (`"string"`), collections as two-element arrays
/// (`["list", "string"]`, `["object", {...}]`).
#[derive(Debug, Clone, PartialEq)]
pub enum ValueType {
    /// A string value.
    String,
    /// An arbitrary-precision number.
    Number,
    /// A boolean value.
    Bool,
    /// A list of values of a single type.
    List(Box<ValueType>),
    /// A set of unique values of a single type.
    Set(Box<ValueType>),
    /// A map from string keys to values of a single type.
    Map(Box<ValueType>),
    /// An object with a fixed set of attributes.
    Object(HashMap<String, ValueType>),
    /// A sequence of values with per-position types.
    Tuple(Vec<ValueType>),
    /// A type decided at runtime; any value conforms.
    Dynamic,
}

impl ValueType {
    /// Create a list type.
    pub fn list(element_type: ValueType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// Create a set type.
    pub fn set(element_type: ValueType) -> Self {
        Self::Set(Box::new(element_type))
    }

    /// Create a map type.
    pub fn map(element_type: ValueType) -> Self {
        Self::Map(Box::new(element_type))
    }

    /// Create an object type.
    pub fn object(attributes: HashMap<String, ValueType>) -> Self {
        Self::Object(attributes)
    }

    /// Parse the JSON type encoding carried in wire schemas.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, ProviderError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::from_json(&value)
            .map_err(|msg| ProviderError::Schema(format!("unparseable type constraint: {msg}")))
    }

    /// Serialize to the JSON type encoding used in wire schemas.
    pub fn to_wire(&self) -> Vec<u8> {
        // to_json only produces strings, arrays, and objects, which always
        // serialize cleanly.
        serde_json::to_vec(&self.to_json()).unwrap_or_default()
    }

    fn from_json(value: &serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::String(name) => match name.as_str() {
                "string" => Ok(Self::String),
                "number" => Ok(Self::Number),
                "bool" => Ok(Self::Bool),
                "dynamic" => Ok(Self::Dynamic),
                other => Err(format!("unknown primitive type {other:?}")),
            },
            serde_json::Value::Array(parts) => {
                let (kind, arg) = match parts.as_slice() {
                    [serde_json::Value::String(kind), arg, ..] => (kind.as_str(), arg),
                    _ => return Err("malformed compound type".to_string()),
                };
                match kind {
                    "list" => Ok(Self::list(Self::from_json(arg)?)),
                    "set" => Ok(Self::set(Self::from_json(arg)?)),
                    "map" => Ok(Self::map(Self::from_json(arg)?)),
                    "object" => {
                        let fields = arg
                            .as_object()
                            .ok_or_else(|| "object type needs an attribute map".to_string())?;
                        let mut attrs = HashMap::with_capacity(fields.len());
                        for (name, ty) in fields {
                            attrs.insert(name.clone(), Self::from_json(ty)?);
                        }
                        Ok(Self::Object(attrs))
                    }
                    "tuple" => {
                        let elems = arg
                            .as_array()
                            .ok_or_else(|| "tuple type needs an element list".to_string())?;
                        let types = elems
                            .iter()
                            .map(Self::from_json)
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(Self::Tuple(types))
                    }
                    other => Err(format!("unknown compound type {other:?}")),
                }
            }
            other => Err(format!("unexpected type encoding: {other}")),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        use serde_json::{json, Value};
        match self {
            Self::String => json!("string"),
            Self::Number => json!("number"),
            Self::Bool => json!("bool"),
            Self::Dynamic => json!("dynamic"),
            Self::List(elem) => json!(["list", elem.to_json()]),
            Self::Set(elem) => json!(["set", elem.to_json()]),
            Self::Map(elem) => json!(["map", elem.to_json()]),
            Self::Object(attrs) => {
                let fields: serde_json::Map<String, Value> = attrs
                    .iter()
                    .map(|(name, ty)| (name.clone(), ty.to_json()))
                    .collect();
                json!(["object", fields])
            }
            Self::Tuple(elems) => {
                let types: Vec<Value> = elems.iter().map(Self::to_json).collect();
                json!(["tuple", types])
            }
        }
    }

    /// Whether `value` conforms to this type.
    ///
    /// Null conforms to every type; dynamic accepts every value. For objects,
    /// present attributes must be declared and conform, while absent declared
    /// attributes read as null.
    pub fn conforms(&self, value: &serde_json::Value) -> bool {
        use serde_json::Value;
        if value.is_null() {
            return true;
        }
        match self {
            Self::Dynamic => true,
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::List(elem) | Self::Set(elem) => match value {
                Value::Array(items) => items.iter().all(|item| elem.conforms(item)),
                _ => false,
            },
            Self::Map(elem) => match value {
                Value::Object(entries) => entries.values().all(|item| elem.conforms(item)),
                _ => false,
            },
            Self::Object(attrs) => match value {
                Value::Object(entries) => entries.iter().all(|(name, item)| {
                    attrs.get(name).is_some_and(|ty| ty.conforms(item))
                }),
                _ => false,
            },
            Self::Tuple(elems) => match value {
                Value::Array(items) => {
                    items.len() == elems.len()
                        && elems.iter().zip(items).all(|(ty, item)| ty.conforms(item))
                }
                _ => false,
            },
        }
    }
}

/// A single attribute in a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The type of the attribute.
    pub value_type: ValueType,
    /// The attribute is required in configuration.
    pub required: bool,
    /// The attribute is optional in configuration.
    pub optional: bool,
    /// The attribute is computed by the provider (read-only).
    pub computed: bool,
    /// The attribute is sensitive and should be hidden in logs/UI.
    pub sensitive: bool,
    /// The attribute is accepted but never persisted to state.
    pub write_only: bool,
    /// Human-readable description of the attribute.
    pub description: Option<String>,
}

impl Attribute {
    /// Create a required attribute of the given type.
    pub fn required(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
            write_only: false,
            description: None,
        }
    }

    /// Create an optional attribute of the given type.
    pub fn optional(value_type: ValueType) -> Self {
        Self {
            optional: true,
            required: false,
            ..Self::required(value_type)
        }
    }

    /// Create a computed attribute of the given type.
    pub fn computed(value_type: ValueType) -> Self {
        Self {
            computed: true,
            required: false,
            ..Self::required(value_type)
        }
    }

    /// Mark this attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Set the description for this attribute.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn from_wire(attr: proto::Attribute) -> Result<(String, Self), ProviderError> {
        let value_type = ValueType::from_wire(&attr.r#type)?;
        Ok((
            attr.name,
            Self {
                value_type,
                required: attr.required,
                optional: attr.optional,
                computed: attr.computed,
                sensitive: attr.sensitive,
                write_only: attr.write_only,
                description: if attr.description.is_empty() {
                    None
                } else {
                    Some(attr.description)
                },
            },
        ))
    }
}

/// The nesting mode for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockNestingMode {
    /// A single nested block (at most one).
    #[default]
    Single,
    /// A list of nested blocks (zero or more, ordered).
    List,
    /// A set of nested blocks (zero or more, unordered, unique).
    Set,
    /// A map of nested blocks keyed by string.
    Map,
}

/// A block of attributes and nested blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The attributes within this block.
    pub attributes: HashMap<String, Attribute>,
    /// Nested blocks within this block.
    pub blocks: HashMap<String, NestedBlock>,
    /// Human-readable description of the block.
    pub description: Option<String>,
}

impl Block {
    /// Create a new empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to this block.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Add a nested block to this block.
    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.blocks.insert(name.into(), block);
        self
    }

    /// The object type a value of this block decodes to.
    ///
    /// Attributes contribute their declared type; nested blocks contribute an
    /// object type wrapped according to their nesting mode.
    pub fn implied_type(&self) -> ValueType {
        let mut attrs: HashMap<String, ValueType> = self
            .attributes
            .iter()
            .map(|(name, attr)| (name.clone(), attr.value_type.clone()))
            .collect();
        for (name, nested) in &self.blocks {
            let inner = nested.block.implied_type();
            let ty = match nested.nesting_mode {
                BlockNestingMode::Single => inner,
                BlockNestingMode::List => ValueType::list(inner),
                BlockNestingMode::Set => ValueType::set(inner),
                BlockNestingMode::Map => ValueType::map(inner),
            };
            attrs.insert(name.clone(), ty);
        }
        ValueType::Object(attrs)
    }

    fn from_wire(block: proto::Block) -> Result<Self, ProviderError> {
        let mut attributes = HashMap::with_capacity(block.attributes.len());
        for attr in block.attributes {
            let (name, attr) = Attribute::from_wire(attr)?;
            attributes.insert(name, attr);
        }
        let mut blocks = HashMap::with_capacity(block.block_types.len());
        for nested in block.block_types {
            let nesting_mode = match proto::nested_block::NestingMode::try_from(nested.nesting_mode)
            {
                Ok(proto::nested_block::NestingMode::Single) => BlockNestingMode::Single,
                Ok(proto::nested_block::NestingMode::List) => BlockNestingMode::List,
                Ok(proto::nested_block::NestingMode::Set) => BlockNestingMode::Set,
                Ok(proto::nested_block::NestingMode::Map) => BlockNestingMode::Map,
                _ => {
                    return Err(ProviderError::Schema(format!(
                        "block {:?} has an unsupported nesting mode",
                        nested.type_name,
                    )))
                }
            };
            let inner = nested
                .block
                .map(|b| Self::from_wire(*b))
                .transpose()?
                .unwrap_or_default();
            blocks.insert(
                nested.type_name,
                NestedBlock {
                    block: inner,
                    nesting_mode,
                    min_items: nested.min_items.max(0) as u32,
                    max_items: nested.max_items.max(0) as u32,
                },
            );
        }
        Ok(Self {
            attributes,
            blocks,
            description: if block.description.is_empty() {
                None
            } else {
                Some(block.description)
            },
        })
    }
}

/// A nested block with its nesting mode and constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedBlock {
    /// The block definition.
    pub block: Block,
    /// How the block is nested (single, list, set, map).
    pub nesting_mode: BlockNestingMode,
    /// Minimum number of blocks required.
    pub min_items: u32,
    /// Maximum number of blocks allowed (0 = unlimited).
    pub max_items: u32,
}

impl NestedBlock {
    /// Create a single nested block (0 or 1 allowed).
    pub fn single(block: Block) -> Self {
        Self {
            block,
            nesting_mode: BlockNestingMode::Single,
            min_items: 0,
            max_items: 1,
        }
    }

    /// Create a list of nested blocks.
    pub fn list(block: Block) -> Self {
        Self {
            block,
            nesting_mode: BlockNestingMode::List,
            min_items: 0,
            max_items: 0,
        }
    }
}

/// Schema for a resource, data source, or other schema-bearing object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    /// The version of this schema (for state upgrades).
    pub version: i64,
    /// The root block containing all attributes and nested blocks.
    pub block: Block,
    /// The identity schema, for resource types that support identity.
    pub identity: Option<IdentitySchema>,
}

impl Schema {
    /// Create a new schema with the given version.
    pub fn new(version: i64) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Create a schema at version 0.
    pub fn v0() -> Self {
        Self::new(0)
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.block.attributes.insert(name.into(), attr);
        self
    }

    /// Add a nested block to the schema.
    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.block.blocks.insert(name.into(), block);
        self
    }

    /// The object type values of this schema decode to.
    pub fn implied_type(&self) -> ValueType {
        self.block.implied_type()
    }

    pub(crate) fn from_wire(schema: proto::Schema) -> Result<Self, ProviderError> {
        let block = schema
            .block
            .map(Block::from_wire)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            version: schema.version,
            block,
            identity: None,
        })
    }

    /// Wrap a list resource's config schema into the shape list results use.
    ///
    /// Providers only describe the config block for list resources. Results
    /// are exposed under a synthetic root: a computed `data` attribute holding
    /// the found resources, plus the provider's block as a single `config`
    /// nested block.
    pub(crate) fn into_list_wrapper(self) -> Self {
        Self {
            version: self.version,
            block: Block::new()
                .with_attribute("data", Attribute::computed(ValueType::Dynamic))
                .with_block("config", NestedBlock::single(self.block)),
            identity: self.identity,
        }
    }
}

/// The identity schema of a resource type.
///
/// Identity values are flat objects; attributes cannot nest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentitySchema {
    /// The version of the identity schema (for identity upgrades).
    pub version: i64,
    /// The attributes of the identity object.
    pub attributes: HashMap<String, IdentityAttribute>,
}

impl IdentitySchema {
    /// The object type identity values decode to.
    pub fn implied_type(&self) -> ValueType {
        ValueType::Object(
            self.attributes
                .iter()
                .map(|(name, attr)| (name.clone(), attr.value_type.clone()))
                .collect(),
        )
    }

    pub(crate) fn from_wire(schema: proto::ResourceIdentitySchema) -> Result<Self, ProviderError> {
        let mut attributes = HashMap::with_capacity(schema.identity_attributes.len());
        for attr in schema.identity_attributes {
            attributes.insert(
                attr.name,
                IdentityAttribute {
                    value_type: ValueType::from_wire(&attr.r#type)?,
                    required_for_import: attr.required_for_import,
                    optional_for_import: attr.optional_for_import,
                    description: if attr.description.is_empty() {
                        None
                    } else {
                        Some(attr.description)
                    },
                },
            );
        }
        Ok(Self {
            version: schema.version,
            attributes,
        })
    }
}

/// A single attribute of an identity schema.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityAttribute {
    /// The type of the attribute.
    pub value_type: ValueType,
    /// The attribute must be supplied when importing by identity.
    pub required_for_import: bool,
    /// The attribute may be supplied when importing by identity.
    pub optional_for_import: bool,
    /// Human-readable description of the attribute.
    pub description: Option<String>,
}

/// A parameter of a provider-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    /// The parameter name, used in error messages.
    pub name: String,
    /// The type arguments for this parameter are encoded against.
    pub value_type: ValueType,
    /// Whether a null argument is acceptable.
    pub allow_null: bool,
}

impl FunctionParam {
    fn from_wire(param: proto::function::Parameter) -> Result<Self, ProviderError> {
        Ok(Self {
            name: param.name,
            value_type: ValueType::from_wire(&param.r#type)?,
            allow_null: param.allow_null_value,
        })
    }
}

/// The declaration of a provider-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The positional parameters.
    pub parameters: Vec<FunctionParam>,
    /// If set, the function accepts any number of extra arguments, all
    /// encoded against this parameter's type.
    pub variadic_parameter: Option<FunctionParam>,
    /// The type the result is decoded against.
    pub return_type: ValueType,
    /// Short description of the function.
    pub summary: String,
    /// Longer description of the function.
    pub description: String,
}

impl FunctionDecl {
    fn from_wire(func: proto::Function) -> Result<Self, ProviderError> {
        Ok(Self {
            parameters: func
                .parameters
                .into_iter()
                .map(FunctionParam::from_wire)
                .collect::<Result<_, _>>()?,
            variadic_parameter: func
                .variadic_parameter
                .map(FunctionParam::from_wire)
                .transpose()?,
            return_type: ValueType::from_wire(&func.return_type)?,
            summary: func.summary,
            description: func.description,
        })
    }
}

/// The schema of an action, plus the resource types it may be linked to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionSchema {
    /// Schema for the action's configuration.
    pub config: Schema,
    /// The resource types this action can operate on, in declaration order.
    pub linked_resources: Vec<LinkedResourceSchema>,
}

/// One linked resource slot declared by an action.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedResourceSchema {
    /// The resource type that may occupy this slot.
    pub type_name: String,
    /// Human-readable description of the slot.
    pub description: String,
}

impl ActionSchema {
    fn from_wire(action: proto::ActionSchema) -> Result<Self, ProviderError> {
        let config = action
            .schema
            .map(Schema::from_wire)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            config,
            linked_resources: action
                .linked_resources
                .into_iter()
                .map(|l| LinkedResourceSchema {
                    type_name: l.type_name,
                    description: l.description,
                })
                .collect(),
        })
    }
}

/// What optional protocol features a provider supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerCapabilities {
    /// The provider can plan destroy operations.
    pub plan_destroy: bool,
    /// The provider's schema is stable for its lifetime, so a fetched schema
    /// may be reused across connections to the same provider.
    pub get_provider_schema_optional: bool,
    /// The provider supports `MoveResourceState`.
    pub move_resource_state: bool,
}

impl From<proto::ServerCapabilities> for ServerCapabilities {
    fn from(caps: proto::ServerCapabilities) -> Self {
        Self {
            plan_destroy: caps.plan_destroy,
            get_provider_schema_optional: caps.get_provider_schema_optional,
            move_resource_state: caps.move_resource_state,
        }
    }
}

/// Everything a provider declared about itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderSchema {
    /// Schema for provider configuration.
    pub provider: Schema,
    /// Schema for provider metadata attached to requests, if declared.
    pub provider_meta: Option<Schema>,
    /// Schemas for each managed resource type.
    pub resource_types: HashMap<String, Schema>,
    /// Schemas for each data source type.
    pub data_sources: HashMap<String, Schema>,
    /// Schemas for each ephemeral resource type.
    pub ephemeral_resource_types: HashMap<String, Schema>,
    /// Schemas for each list resource type, already wrapped into the
    /// `data`/`config` result shape.
    pub list_resource_types: HashMap<String, Schema>,
    /// Schemas for each state store type.
    pub state_stores: HashMap<String, Schema>,
    /// Schemas for each action type.
    pub actions: HashMap<String, ActionSchema>,
    /// Declarations of provider-defined functions.
    pub functions: HashMap<String, FunctionDecl>,
    /// The optional protocol features this provider supports.
    pub server_capabilities: ServerCapabilities,
    /// Diagnostics the provider attached to its schema response.
    pub diagnostics: Diagnostics,
}

impl ProviderSchema {
    pub(crate) fn from_wire(resp: proto::GetProviderSchemaResponse) -> Result<Self, ProviderError> {
        fn schema_map(
            wire: HashMap<String, proto::Schema>,
        ) -> Result<HashMap<String, Schema>, ProviderError> {
            wire.into_iter()
                .map(|(name, schema)| Ok((name, Schema::from_wire(schema)?)))
                .collect()
        }

        let provider = resp
            .provider
            .map(Schema::from_wire)
            .transpose()?
            .unwrap_or_default();
        let provider_meta = resp.provider_meta.map(Schema::from_wire).transpose()?;
        let list_resource_types = schema_map(resp.list_resource_schemas)?
            .into_iter()
            .map(|(name, schema)| (name, schema.into_list_wrapper()))
            .collect();
        let actions = resp
            .action_schemas
            .into_iter()
            .map(|(name, action)| Ok((name, ActionSchema::from_wire(action)?)))
            .collect::<Result<_, ProviderError>>()?;
        let functions = resp
            .functions
            .into_iter()
            .map(|(name, func)| Ok((name, FunctionDecl::from_wire(func)?)))
            .collect::<Result<_, ProviderError>>()?;

        Ok(Self {
            provider,
            provider_meta,
            resource_types: schema_map(resp.resource_schemas)?,
            data_sources: schema_map(resp.data_source_schemas)?,
            ephemeral_resource_types: schema_map(resp.ephemeral_resource_schemas)?,
            list_resource_types,
            state_stores: schema_map(resp.state_store_schemas)?,
            actions,
            functions,
            server_capabilities: resp.server_capabilities.map(Into::into).unwrap_or_default(),
            diagnostics: Diagnostics::from_proto(resp.diagnostics),
        })
    }

    /// Merge the identity schemas fetched separately into the resource
    /// schemas. Identity schemas for unknown resource types are ignored.
    pub(crate) fn attach_identities(
        &mut self,
        resp: proto::GetResourceIdentitySchemasResponse,
    ) -> Result<(), ProviderError> {
        for (type_name, identity) in resp.identity_schemas {
            if let Some(schema) = self.resource_types.get_mut(&type_name) {
                schema.identity = Some(IdentitySchema::from_wire(identity)?);
            }
        }
        self.diagnostics.extend_proto(resp.diagnostics);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_wire_round_trip() {
        let ty = ValueType::object(HashMap::from([
            ("name".to_string(), ValueType::String),
            ("count".to_string(), ValueType::Number),
            ("tags".to_string(), ValueType::map(ValueType::String)),
            (
                "endpoints".to_string(),
                ValueType::list(ValueType::object(HashMap::from([(
                    "port".to_string(),
                    ValueType::Number,
                )]))),
            ),
        ]));
        let wire = ty.to_wire();
        assert_eq!(ValueType::from_wire(&wire).unwrap(), ty);
    }

    #[test]
    fn test_type_wire_primitives() {
        assert_eq!(ValueType::from_wire(b"\"string\"").unwrap(), ValueType::String);
        assert_eq!(
            ValueType::from_wire(br#"["list","number"]"#).unwrap(),
            ValueType::list(ValueType::Number),
        );
        assert!(ValueType::from_wire(b"\"uuid\"").is_err());
        assert!(ValueType::from_wire(b"not json").is_err());
    }

    #[test]
    fn test_conforms_null_and_dynamic() {
        assert!(ValueType::String.conforms(&json!(null)));
        assert!(ValueType::Dynamic.conforms(&json!({"anything": [1, 2, 3]})));
        assert!(!ValueType::String.conforms(&json!(5)));
    }

    #[test]
    fn test_conforms_object() {
        let ty = ValueType::object(HashMap::from([
            ("name".to_string(), ValueType::String),
            ("port".to_string(), ValueType::Number),
        ]));
        assert!(ty.conforms(&json!({"name": "web", "port": 80})));
        // absent attributes read as null
        assert!(ty.conforms(&json!({"name": "web"})));
        // undeclared attributes do not conform
        assert!(!ty.conforms(&json!({"name": "web", "proto": "tcp"})));
        assert!(!ty.conforms(&json!({"name": 5})));
    }

    #[test]
    fn test_implied_type_wraps_blocks() {
        let schema = Schema::v0()
            .with_attribute("name", Attribute::required(ValueType::String))
            .with_block(
                "rule",
                NestedBlock::list(
                    Block::new().with_attribute("port", Attribute::optional(ValueType::Number)),
                ),
            );
        let ValueType::Object(attrs) = schema.implied_type() else {
            panic!("implied type must be an object");
        };
        assert_eq!(attrs["name"], ValueType::String);
        assert_eq!(
            attrs["rule"],
            ValueType::list(ValueType::object(HashMap::from([(
                "port".to_string(),
                ValueType::Number,
            )]))),
        );
    }

    #[test]
    fn test_list_wrapper_shape() {
        let config = Schema::v0().with_attribute("prefix", Attribute::optional(ValueType::String));
        let wrapped = config.into_list_wrapper();
        let data = &wrapped.block.attributes["data"];
        assert!(data.computed);
        assert_eq!(data.value_type, ValueType::Dynamic);
        let config_block = &wrapped.block.blocks["config"];
        assert_eq!(config_block.nesting_mode, BlockNestingMode::Single);
        assert!(config_block.block.attributes.contains_key("prefix"));
    }

    #[test]
    fn test_schema_from_wire() {
        let wire = proto::Schema {
            version: 3,
            block: Some(proto::Block {
                attributes: vec![proto::Attribute {
                    name: "region".to_string(),
                    r#type: b"\"string\"".to_vec(),
                    required: true,
                    ..Default::default()
                }],
                block_types: vec![proto::NestedBlock {
                    type_name: "timeouts".to_string(),
                    block: Some(Box::new(proto::Block::default())),
                    nesting_mode: proto::nested_block::NestingMode::Single as i32,
                    min_items: 0,
                    max_items: 1,
                }],
                description: String::new(),
            }),
        };
        let schema = Schema::from_wire(wire).unwrap();
        assert_eq!(schema.version, 3);
        assert!(schema.block.attributes["region"].required);
        assert_eq!(
            schema.block.blocks["timeouts"].nesting_mode,
            BlockNestingMode::Single,
        );
    }

    #[test]
    fn test_attach_identities() {
        let mut schemas = ProviderSchema {
            resource_types: HashMap::from([("example_thing".to_string(), Schema::v0())]),
            ..Default::default()
        };
        let resp = proto::GetResourceIdentitySchemasResponse {
            identity_schemas: HashMap::from([
                (
                    "example_thing".to_string(),
                    proto::ResourceIdentitySchema {
                        version: 1,
                        identity_attributes: vec![proto::IdentityAttribute {
                            name: "id".to_string(),
                            r#type: b"\"string\"".to_vec(),
                            required_for_import: true,
                            optional_for_import: false,
                            description: String::new(),
                        }],
                    },
                ),
                (
                    "unknown_thing".to_string(),
                    proto::ResourceIdentitySchema::default(),
                ),
            ]),
            diagnostics: vec![],
        };
        schemas.attach_identities(resp).unwrap();
        let identity = schemas.resource_types["example_thing"].identity.as_ref().unwrap();
        assert_eq!(identity.version, 1);
        assert!(identity.attributes["id"].required_for_import);
    }
}
