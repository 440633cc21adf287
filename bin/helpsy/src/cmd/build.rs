//! Build command - runs the pipeline and writes the route manifest

use std::{fs, path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use helpsy_core::Options;
use helpsy_generator::{
    PageDescriptor, Pipeline, Template,
    pages::{component_roots, resolve_component},
};

/// Run the build command.
///
/// Drives the full pipeline and writes the resulting page descriptors as a
/// JSON route manifest for the downstream renderer.
pub fn run(
    config_path: &Path,
    content_dir: &Path,
    base_path: Option<&str>,
    manifest: &Path,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?content_dir, ?base_path, "Starting build");

    // Load options; an absent file falls back to defaults.
    let mut options =
        Options::load_or_default(config_path).wrap_err("Failed to load options")?;

    // Override base_path if specified via CLI
    if let Some(bp) = base_path {
        tracing::info!(base_path = bp, "Overriding base path from CLI");
        options.base_path = bp.to_string();
    }

    tracing::debug!(?options, "Loaded options");

    // The site's template root, when configured, shadows the theme's own.
    let roots = component_roots(Path::new("."), options.templates.as_deref());

    let pipeline = Pipeline::new(options, content_dir);

    let mut pages: Vec<PageDescriptor> = Vec::new();
    let mut sink = |page: PageDescriptor| pages.push(page);
    let stats = pipeline.run(&mut sink).wrap_err("Build failed")?;

    // Write the route manifest: the resolved template components plus one
    // entry per registered page.
    let components: serde_json::Map<String, serde_json::Value> =
        [Template::Home, Template::Category, Template::Article]
            .into_iter()
            .map(|template| {
                let resolved = resolve_component(&roots, template);
                (
                    template.name().to_string(),
                    serde_json::Value::String(resolved.display().to_string()),
                )
            })
            .collect();

    if let Some(parent) = manifest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "components": components,
        "routes": pages,
    }))?;
    fs::write(manifest, json).wrap_err("Failed to write route manifest")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Documents:      {}", stats.documents);
    println!("  Categories:     {}", stats.categories);
    println!("  Index pages:    {}", stats.pages.index_pages);
    println!("  Category pages: {}", stats.pages.category_pages);
    println!("  Article pages:  {}", stats.pages.article_pages);
    println!();
    println!("  Duration:       {:.2}s", duration.as_secs_f64());
    println!("  Manifest:       {}", manifest.display());
    println!();

    tracing::info!(?duration, "Build completed successfully");

    Ok(())
}
