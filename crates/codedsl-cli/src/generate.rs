//! Generate command: model JSON in, source text out

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use codedsl_core::{GenerationSummary, TemplatedGenerator};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Generate command implementation
pub fn run(
    model: &Path,
    manifest: Option<&Path>,
    output: Option<&Path>,
) -> Result<GenerationSummary> {
    let manifest = Manifest::load(manifest)?;
    let context = load_model(model)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            let summary = render(&context, &manifest, BufWriter::new(file))?;
            info!(output = %path.display(), "wrote generated source");
            Ok(summary)
        }
        None => render(&context, &manifest, std::io::stdout().lock()),
    }
}

/// Read a model produced by the DSL parser
pub fn load_model(path: &Path) -> Result<codedsl_core::Context> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read model: {path:?}"))?;
    codedsl_core::Context::from_json(&bytes)
        .with_context(|| format!("Failed to parse model: {path:?}"))
}

/// Generate `context` into `out` and flush it
pub fn render<W: Write>(
    context: &codedsl_core::Context,
    manifest: &Manifest,
    out: W,
) -> Result<GenerationSummary> {
    let generator = TemplatedGenerator::new(manifest.generator.clone());
    let mut sink = manifest.output.sink(out);

    let summary = generator
        .generate(context, &mut sink)
        .context("Failed to write generated source")?;
    sink.flush().context("Failed to flush generated source")?;

    Ok(summary)
}
