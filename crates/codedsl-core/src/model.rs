//! Contract model handed over by the DSL parser
//!
//! The generator only reads these types. They carry no behavior beyond
//! builders, and serde support so a parser running out of process can hand
//! a model over as JSON.

use serde::{Deserialize, Serialize};

/// Entity name the parser uses when an entity block has no name
pub const UNNAMED_ENTITY: &str = "null";

/// Everything one generation pass emits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Contracts, emitted as classes in this order
    #[serde(default)]
    pub contracts: Vec<Message>,

    /// Entities, emitted as aggregate interfaces in this order
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a context from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn with_contract(mut self, message: Message) -> Self {
        self.contracts.push(message);
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }
}

/// One generated value type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Whether any modifier on this message carries one of `tags`
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.modifiers
            .iter()
            .any(|m| tags.iter().any(|t| t.as_ref() == m.identifier))
    }
}

/// A field of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Type reference, emitted verbatim
    #[serde(rename = "type")]
    pub ty: String,

    /// Raw identifier, cased by the naming style
    pub name: String,
}

impl Member {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Tag attached to a message
///
/// `identifier` selects the entity interfaces the message joins, `interface`
/// is added to the message's own base list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub identifier: String,
    pub interface: String,
}

impl Modifier {
    pub fn new(identifier: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            interface: interface.into(),
        }
    }
}

/// Named group of messages that become aggregate interfaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Entity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            messages: Vec::new(),
        }
    }

    /// An entity block without a name
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Name to emit, or `None` when the entity is skipped
    pub fn emitted_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| *n != UNNAMED_ENTITY)
    }
}
