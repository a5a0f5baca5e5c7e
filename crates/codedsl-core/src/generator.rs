//! Contract and aggregate interface generation
//!
//! One pass over a [`Context`] produces, in order:
//!
//! ```text
//! namespace <ns>            (when configured)
//! {
//!     #region <region>      (when configured)
//!     <one class per contract>
//!     <aggregate interfaces per named entity>
//!     #endregion
//! }
//! ```
//!
//! Each class gets its members, a private parameterless constructor and a
//! public constructor assigning every member, all in declaration order.
//! Classes without members get neither constructor.

use crate::config::GeneratorConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::model::{Context, Entity, Message};
use crate::naming::{CSharpNaming, NamingStyle};
use crate::sink::{IndentedSink, IndentedTextWriter};
use crate::writer::CodeWriter;
use std::io;
use tracing::{debug, info, trace};

/// Counts reported by one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Classes emitted
    pub contracts: usize,

    /// Entity interfaces emitted
    pub interfaces: usize,

    /// Entities skipped for lacking a name
    pub skipped_entities: usize,
}

/// Renders a [`Context`] through the templates of a [`GeneratorConfig`]
///
/// The generator holds no per-pass state; one instance can serve any number
/// of passes, including concurrent ones on separate sinks.
#[derive(Debug, Clone)]
pub struct TemplatedGenerator<N: NamingStyle = CSharpNaming> {
    config: GeneratorConfig,
    naming: N,
}

impl TemplatedGenerator<CSharpNaming> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_naming(config, CSharpNaming)
    }
}

impl Default for TemplatedGenerator<CSharpNaming> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<N: NamingStyle> TemplatedGenerator<N> {
    pub fn with_naming(config: GeneratorConfig, naming: N) -> Self {
        Self { config, naming }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Write the whole context to `sink`
    ///
    /// A sink error stops the pass; whatever the sink already accepted stays
    /// written.
    ///
    /// The body is indented one level only inside a namespace. Without one it
    /// starts at the sink's current indent, so clearing the namespace shifts
    /// the body left by one level.
    pub fn generate<S: IndentedSink + ?Sized>(
        &self,
        context: &Context,
        sink: &mut S,
    ) -> CodegenResult<GenerationSummary> {
        let mut writer = CodeWriter::new(sink);
        let namespace = self.config.namespace_name();
        let region = self.config.region_name();

        if let Some(namespace) = namespace {
            writer.write_line_text(&format!("namespace {namespace}"))?;
            writer.write_line_text("{")?;
            writer.push_indent();
        }
        if let Some(region) = region {
            writer.write_line_text(&format!("#region {region}"))?;
        }

        let summary = self.write_context(&mut writer, context)?;

        if region.is_some() {
            writer.write_line_text("#endregion")?;
        }
        if namespace.is_some() {
            writer.pop_indent();
            writer.write_line_text("}")?;
        }

        info!(
            contracts = summary.contracts,
            interfaces = summary.interfaces,
            skipped_entities = summary.skipped_entities,
            "generation finished"
        );
        Ok(summary)
    }

    /// Generate into a string with the default sink settings
    pub fn render_to_string(&self, context: &Context) -> CodegenResult<String> {
        let mut sink = IndentedTextWriter::new(Vec::new());
        self.generate(context, &mut sink)?;
        String::from_utf8(sink.into_inner())
            .map_err(|e| CodegenError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write_context<S: IndentedSink + ?Sized>(
        &self,
        writer: &mut CodeWriter<'_, S>,
        context: &Context,
    ) -> CodegenResult<GenerationSummary> {
        let mut summary = GenerationSummary::default();

        for contract in &context.contracts {
            self.write_contract(writer, contract)?;
            summary.contracts += 1;
        }

        for entity in &context.entities {
            let Some(name) = entity.emitted_name() else {
                trace!("skipping unnamed entity");
                summary.skipped_entities += 1;
                continue;
            };
            summary.interfaces += self.write_entity_interfaces(writer, name, entity)?;
        }

        Ok(summary)
    }

    fn write_contract<S: IndentedSink + ?Sized>(
        &self,
        writer: &mut CodeWriter<'_, S>,
        contract: &Message,
    ) -> CodegenResult<()> {
        debug!(
            contract = %contract.name,
            members = contract.members.len(),
            modifiers = contract.modifiers.len(),
            "emitting contract"
        );

        writer.write(&self.config.class_header, [&contract.name])?;
        if !contract.modifiers.is_empty() {
            let interfaces: Vec<&str> = contract
                .modifiers
                .iter()
                .map(|m| m.interface.as_str())
                .collect();
            writer.write_text(&format!(" : {}", interfaces.join(", ")))?;
        }
        writer.write_line()?;

        writer.write_line_text("{")?;
        writer.push_indent();

        if !contract.members.is_empty() {
            self.write_members(writer, contract)?;
            writer.write_line_with(&self.config.private_ctor, [&contract.name])?;

            writer.write_text(&format!("public {} (", contract.name))?;
            writer.write_text(&self.parameter_list(contract))?;
            writer.write_line_text(")")?;
            writer.write_line_text("{")?;
            writer.push_indent();
            self.write_assignments(writer, contract)?;
            writer.pop_indent();
            writer.write_line_text("}")?;
        }

        writer.pop_indent();
        writer.write_line_text("}")?;
        Ok(())
    }

    fn write_members<S: IndentedSink + ?Sized>(
        &self,
        writer: &mut CodeWriter<'_, S>,
        contract: &Message,
    ) -> CodegenResult<()> {
        for (position, member) in contract.members.iter().enumerate() {
            let index = position + 1;
            let name = self.naming.member_case(&member.name);
            writer.write_line_with(&self.config.member, [&index, &member.ty, &name])?;
        }
        Ok(())
    }

    fn parameter_list(&self, contract: &Message) -> String {
        contract
            .members
            .iter()
            .map(|m| format!("{} {}", m.ty, self.naming.parameter_case(&m.name)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_assignments<S: IndentedSink + ?Sized>(
        &self,
        writer: &mut CodeWriter<'_, S>,
        contract: &Message,
    ) -> CodegenResult<()> {
        for member in &contract.members {
            writer.write_line_text(&format!(
                "{} = {};",
                self.naming.member_case(&member.name),
                self.naming.parameter_case(&member.name)
            ))?;
        }
        Ok(())
    }

    /// Emit each configured interface kind that has at least one message
    fn write_entity_interfaces<S: IndentedSink + ?Sized>(
        &self,
        writer: &mut CodeWriter<'_, S>,
        name: &str,
        entity: &Entity,
    ) -> CodegenResult<usize> {
        let mut emitted = 0;

        for kind in &self.config.interfaces {
            let matches: Vec<&Message> = entity
                .messages
                .iter()
                .filter(|m| m.has_any_tag(kind.tags.as_slice()))
                .collect();
            if matches.is_empty() {
                continue;
            }

            debug!(
                entity = name,
                interface = %kind.name.render([&name]),
                messages = matches.len(),
                "emitting entity interface"
            );

            writer.write_line()?;
            writer.write_line_with(&kind.name, [&name])?;
            writer.write_line_text("{")?;
            writer.push_indent();
            for message in matches {
                writer.write_line_with(&self.config.interface_member, [&message.name])?;
            }
            writer.pop_indent();
            writer.write_line_text("}")?;
            emitted += 1;
        }

        Ok(emitted)
    }
}
