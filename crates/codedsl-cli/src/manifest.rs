//! Manifest parsing and validation
//!
//! `codedsl.toml` holds the generator templates and the output layout:
//!
//! ```toml
//! [generator]
//! namespace = "Bank.Contracts"
//! region = ""                  # empty disables the #region wrapper
//!
//! [[generator.interfaces]]
//! name = "public interface I{0}Aggregate"
//! tags = ["?"]
//!
//! [output]
//! indent = "\t"
//! line_ending = "crlf"
//! ```

use anyhow::{Context, Result};
use codedsl_core::{DEFAULT_INDENT_UNIT, GeneratorConfig, IndentedTextWriter};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Manifest looked up in the working directory when none is given
pub const DEFAULT_MANIFEST: &str = "codedsl.toml";

/// codedsl.toml manifest structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Text written once per indent level
    #[serde(default = "default_indent")]
    pub indent: String,

    #[serde(default)]
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

fn default_indent() -> String {
    DEFAULT_INDENT_UNIT.to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            line_ending: LineEnding::default(),
        }
    }
}

impl OutputSection {
    /// Wrap `inner` in a sink laid out per this section
    pub fn sink<W: Write>(&self, inner: W) -> IndentedTextWriter<W> {
        IndentedTextWriter::new(inner)
            .with_unit(self.indent.clone())
            .with_newline(self.line_ending.as_str())
    }
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Load the given manifest, or `codedsl.toml` if present, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let manifest = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_MANIFEST).exists() => Self::from_file(DEFAULT_MANIFEST)?,
            None => {
                debug!("no manifest found, using defaults");
                Self::default()
            }
        };
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the manifest
    ///
    /// Templates are already checked while parsing; this covers the rest.
    pub fn validate(&self) -> Result<()> {
        if !self.output.indent.chars().all(|c| c == ' ' || c == '\t') {
            anyhow::bail!(
                "Output indent must be spaces or tabs, got {:?}",
                self.output.indent
            );
        }

        for kind in &self.generator.interfaces {
            if kind.tags.is_empty() {
                anyhow::bail!(
                    "Interface '{}' has no tags and would never be emitted",
                    kind.name
                );
            }
            if kind.tags.iter().any(|t| t.is_empty()) {
                anyhow::bail!("Interface '{}' has an empty tag", kind.name);
            }
        }

        Ok(())
    }

    /// Render the manifest back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize manifest")
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<&Path>) -> Result<()> {
    let path = manifest_path.unwrap_or(Path::new(DEFAULT_MANIFEST));

    println!("Checking manifest: {}", path.display());

    let manifest = Manifest::from_file(path)?;
    manifest.validate()?;

    let generator = &manifest.generator;
    println!(
        "✓ Namespace: {}",
        generator.namespace_name().unwrap_or("(none)")
    );
    println!("✓ Region: {}", generator.region_name().unwrap_or("(none)"));
    println!("✓ Interfaces: {}", generator.interfaces.len());
    for kind in &generator.interfaces {
        println!("    {} <- [{}]", kind.name, kind.tags.join(", "));
    }
    println!("\nManifest is valid!");

    Ok(())
}

/// Defaults command implementation
pub fn print_defaults() -> Result<()> {
    print!("{}", Manifest::default().to_toml()?);
    Ok(())
}
