//! codedsl-core - Template-driven contract emitter
//!
//! This crate turns a parsed contract model into source text:
//! - [`Context`] and friends describe the contracts and entities to emit
//! - [`IndentedSink`] is the indentation-aware output the text lands in
//! - [`CodeWriter`] adds template substitution and multi-line writes
//! - [`TemplatedGenerator`] walks the model, driven by a [`GeneratorConfig`]
//!
//! # Example
//!
//! ```
//! use codedsl_core::{Context, Entity, Member, Message, Modifier, TemplatedGenerator};
//!
//! let deposited = Message::new("Deposited")
//!     .with_member(Member::new("decimal", "amount"))
//!     .with_modifier(Modifier::new("?", "IAccountCommand"));
//!
//! let context = Context::new()
//!     .with_contract(Message::new("Deposited").with_member(Member::new("decimal", "amount")))
//!     .with_entity(Entity::named("Account").with_message(deposited));
//!
//! let source = TemplatedGenerator::default().render_to_string(&context).unwrap();
//!
//! assert!(source.contains("public sealed class Deposited"));
//! assert!(source.contains("public interface IAccountAggregate"));
//! assert!(!source.contains("IAccountAggregateState"));
//! ```

mod config;
mod error;
mod generator;
mod model;
pub mod naming;
mod sink;
mod template;
mod writer;

pub use config::{DEFAULT_REGION, GeneratorConfig, InterfaceKind};
pub use error::{CodegenError, CodegenResult, TemplateError};
pub use generator::{GenerationSummary, TemplatedGenerator};
pub use model::{Context, Entity, Member, Message, Modifier, UNNAMED_ENTITY};
pub use naming::{CSharpNaming, NamingStyle};
pub use sink::{DEFAULT_INDENT_UNIT, IndentedSink, IndentedTextWriter};
pub use template::Template;
pub use writer::CodeWriter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CSharpNaming, CodeWriter, CodegenError, CodegenResult, Context, Entity, GeneratorConfig,
        IndentedSink, IndentedTextWriter, InterfaceKind, Member, Message, Modifier, NamingStyle,
        Template, TemplatedGenerator,
    };
}
