//! Generator configuration
//!
//! Every template the generator uses is a named field here, compiled for the
//! number of arguments its call site supplies. The defaults produce
//! protobuf-annotated C# contracts plus `IXxxAggregate` and
//! `IXxxAggregateState` interfaces per entity.

use crate::error::CodegenResult;
use crate::template::Template;
use serde::{Deserialize, Serialize};

/// Region name wrapped around generated output by default
pub const DEFAULT_REGION: &str = "Generated by Code DSL";

/// Templates and wrappers for one [`TemplatedGenerator`](crate::TemplatedGenerator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Class declaration; `{0}` is the message name
    pub class_header: Template<1>,

    /// Field declaration; `{0}` is the 1-based position, `{1}` the type,
    /// `{2}` the member-case name
    pub member: Template<3>,

    /// Parameterless constructor; `{0}` is the message name
    pub private_ctor: Template<1>,

    /// Namespace wrapped around the output; empty means none
    pub namespace: Option<String>,

    /// `#region` wrapped around the output; empty means none
    pub region: Option<String>,

    /// Interface body line; `{0}` is the message name
    pub interface_member: Template<1>,

    /// Entity interfaces, emitted in this order for each entity
    pub interfaces: Vec<InterfaceKind>,
}

/// One kind of interface derived from an entity's messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceKind {
    /// Interface declaration; `{0}` is the entity name
    pub name: Template<1>,

    /// A message joins this interface when any of its modifier identifiers
    /// is listed here
    pub tags: Vec<String>,
}

impl InterfaceKind {
    pub fn new(name: Template<1>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for GeneratorConfig {
    #[allow(clippy::unwrap_used)] // Safe: the stock templates are known to compile
    fn default() -> Self {
        Self {
            class_header: Template::parse("\n[ProtoContract]\npublic sealed class {0}").unwrap(),
            member: Template::parse("[ProtoMember({0})] public readonly {1} {2};").unwrap(),
            private_ctor: Template::parse("\nprivate {0} () {{}}").unwrap(),
            namespace: None,
            region: Some(DEFAULT_REGION.to_string()),
            interface_member: Template::parse("void When({0} c);").unwrap(),
            interfaces: vec![
                InterfaceKind::new(
                    Template::parse("public interface I{0}Aggregate").unwrap(),
                    ["?"],
                ),
                InterfaceKind::new(
                    Template::parse("public interface I{0}AggregateState").unwrap(),
                    ["!"],
                ),
            ],
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Missing fields keep their defaults; empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> CodegenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn without_region(mut self) -> Self {
        self.region = None;
        self
    }

    /// Namespace to open, if one is configured and non-empty
    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|n| !n.is_empty())
    }

    /// Region to open, if one is configured and non-empty
    pub fn region_name(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }
}
