//! Check command - validates options and content without generating pages

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use helpsy_core::{Options, node::SourceNode};
use helpsy_generator::{Store, ingest};

/// Run the check command.
///
/// Loads options and content, registers categories against the schema, and
/// reports warnings. No pages are generated. With `strict`, warnings fail
/// the check.
pub fn run(config_path: &Path, content_dir: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?content_dir, strict, "Checking site");

    let options = Options::load_or_default(config_path).wrap_err("Failed to load options")?;

    let nodes = if content_dir.exists() {
        ingest::ingest(content_dir).wrap_err("Failed to ingest content")?
    } else {
        Vec::new()
    };

    let warnings = collect_warnings(&options, &nodes, content_dir);

    let mut store = Store::new();
    store.ingest(nodes).wrap_err("Category data is invalid")?;

    println!();
    println!("  Documents:  {}", store.documents().len());
    println!("  Categories: {}", store.categories().len());
    println!();

    if warnings.is_empty() {
        println!("  No warnings.");
        println!();
        return Ok(());
    }

    println!("  Warnings:");
    for warn in &warnings {
        println!("  ⚠ {warn}");
    }
    println!();

    if strict {
        return Err(eyre!("{} warning(s) in strict mode", warnings.len()));
    }

    Ok(())
}

/// Gather non-fatal findings about the options and content.
fn collect_warnings(options: &Options, nodes: &[SourceNode], content_dir: &Path) -> Vec<String> {
    let mut warnings = Vec::new();

    if !options.base_path.starts_with('/') || !options.base_path.ends_with('/') {
        warnings.push(format!(
            "base_path {:?} should carry a leading and a trailing slash",
            options.base_path
        ));
    }

    if !content_dir.exists() {
        warnings.push(format!(
            "content directory {} does not exist yet",
            content_dir.display()
        ));
    }

    for node in nodes {
        if let SourceNode::Document(doc) = node
            && doc.frontmatter.title.is_none()
        {
            warnings.push(format!("{} has no frontmatter title", doc.rel_path.display()));
        }
    }

    warnings
}
