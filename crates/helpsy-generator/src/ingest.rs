//! Content ingestion.
//!
//! Walks the content directory and turns each recognized file into a source
//! node. Route fields are attached to documents as they are created; a node
//! is never touched again after this pass.

use std::{
    fs,
    path::{Path, PathBuf},
};

use helpsy_core::{
    frontmatter::parse_frontmatter,
    node::{self, DataNode, DocumentNode, SourceKind, SourceNode},
};
use thiserror::Error;
use tracing::{debug, info};

/// Ingestion errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be turned into a node.
    #[error("document error in {path}: {message}")]
    Document { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Ingest every recognized file under the content directory.
///
/// Files are enumerated in sorted path order, which is the stable order the
/// data layer exposes to queries. Unrecognized files are skipped.
pub fn ingest(content_dir: &Path) -> Result<Vec<SourceNode>> {
    info!(dir = %content_dir.display(), "ingesting content");

    let mut files = Vec::new();
    walk_dir(content_dir, &mut files)?;
    files.sort();

    let mut nodes = Vec::new();
    for path in files {
        let Some(kind) = classify(&path) else {
            debug!(path = %path.display(), "skipping unrecognized file");
            continue;
        };

        match kind {
            SourceKind::Document => {
                let rel_path = path.strip_prefix(content_dir).unwrap_or(&path);
                nodes.push(ingest_document(&path, rel_path)?);
            }
            SourceKind::Data => {
                debug!(path = %path.display(), "ingesting data file");
                nodes.push(SourceNode::Data(DataNode { path }));
            }
        }
    }

    info!(count = nodes.len(), "ingestion complete");
    Ok(nodes)
}

/// Turn one content file into a document node with its route fields
/// attached.
fn ingest_document(path: &Path, rel_path: &Path) -> Result<SourceNode> {
    debug!(path = %path.display(), "ingesting document");

    let raw = fs::read_to_string(path)?;
    let (frontmatter, body) =
        parse_frontmatter(&raw, rel_path).map_err(|e| IngestError::Document {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut node = SourceNode::Document(DocumentNode::new(rel_path, frontmatter, body));
    node::augment(&mut node).map_err(|e| IngestError::Document {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(node)
}

/// Classify a file by extension into the closed source-kind set.
fn classify(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?;
    SourceKind::from_extension(ext)
}

/// Recursively collect files, skipping hidden directories and files.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let hidden = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if hidden {
            continue;
        }

        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write file");
    }

    #[test]
    fn test_ingest_missing_directory_is_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let nodes = ingest(&dir.path().join("absent")).expect("ingest");
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_ingest_attaches_slugs_once() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "welcome.mdx", "---\ntitle: Welcome\n---\n\nHi.");
        write(dir.path(), "billing/refunds.md", "Refund steps.");

        let nodes = ingest(dir.path()).expect("ingest");
        assert_eq!(nodes.len(), 2);

        let slugs: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                SourceNode::Document(doc) => doc.fields.slug.clone(),
                SourceNode::Data(_) => None,
            })
            .collect();
        assert_eq!(slugs, vec!["/articles/billing/refunds/", "/articles/welcome/"]);
    }

    #[test]
    fn test_ingest_order_is_stable_sorted_paths() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "zeta.md", "z");
        write(dir.path(), "alpha.md", "a");
        write(dir.path(), "beta/index.md", "b");

        let nodes = ingest(dir.path()).expect("ingest");
        let ids: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                SourceNode::Document(doc) => Some(doc.id.clone()),
                SourceNode::Data(_) => None,
            })
            .collect();
        assert_eq!(ids, vec!["mdx:alpha.md", "mdx:beta/index.md", "mdx:zeta.md"]);
    }

    #[test]
    fn test_ingest_skips_unrecognized_and_hidden_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "notes.txt", "not content");
        write(dir.path(), ".hidden/secret.md", "hidden");
        write(dir.path(), ".draft.md", "hidden file");
        write(dir.path(), "visible.md", "content");

        let nodes = ingest(dir.path()).expect("ingest");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_ingest_collects_data_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "categories.yml", "[]");

        let nodes = ingest(dir.path()).expect("ingest");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], SourceNode::Data(_)));
    }

    #[test]
    fn test_ingest_bad_frontmatter_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "broken.md", "---\ntitle: [unclosed\n---\n\nBody");

        let result = ingest(dir.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("broken.md"));
    }
}
