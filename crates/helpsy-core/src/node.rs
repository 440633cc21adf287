//! Ingested source nodes and route derivation.
//!
//! Everything ingestion can produce is one variant of [`SourceNode`], a
//! closed set. Only the `Document` variant carries derived route fields;
//! the augmentation pass is an explicit no-op for every other variant.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::frontmatter::Frontmatter;

/// Route prefix under which all article pages are nested.
pub const ARTICLES_PREFIX: &str = "/articles";

/// Kind of source file recognized by ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Markdown/MDX content document.
    Document,
    /// Structured data file (category records).
    Data,
}

impl SourceKind {
    /// Determine the source kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "mdx" | "markdown" => Some(Self::Document),
            "yml" | "yaml" | "json" => Some(Self::Data),
            _ => None,
        }
    }
}

/// One ingested source node.
#[derive(Debug, Clone)]
pub enum SourceNode {
    /// A parsed content document.
    Document(DocumentNode),
    /// A structured data file, consumed later by the category loader.
    Data(DataNode),
}

/// Namespaced container for derived fields.
///
/// Derived values are kept apart from the frontmatter so they can never
/// collide with author-supplied metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeFields {
    /// Derived route path of the document.
    pub slug: Option<String>,
}

/// One parsed Markdown/MDX document.
#[derive(Debug, Clone)]
pub struct DocumentNode {
    /// Opaque stable identity.
    pub id: String,

    /// File path relative to the content root.
    pub rel_path: PathBuf,

    /// Author-supplied metadata.
    pub frontmatter: Frontmatter,

    /// Raw document text after the frontmatter.
    pub body: String,

    /// Derived fields, written exactly once by [`augment`].
    pub fields: NodeFields,
}

impl DocumentNode {
    /// Create a document node from its content-relative path and parsed
    /// parts. Derived fields start empty.
    pub fn new(rel_path: impl Into<PathBuf>, frontmatter: Frontmatter, body: String) -> Self {
        let rel_path = rel_path.into();
        Self {
            id: Self::node_id(&rel_path),
            rel_path,
            frontmatter,
            body,
            fields: NodeFields::default(),
        }
    }

    /// Stable identity derived from the content-relative path.
    pub fn node_id(rel_path: &Path) -> String {
        let joined = rel_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(os) => Some(os.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("mdx:{joined}")
    }
}

/// One structured data file.
#[derive(Debug, Clone)]
pub struct DataNode {
    /// Absolute path of the data file.
    pub path: PathBuf,
}

/// Derive the public file path for a content-relative path.
///
/// The extension is stripped, `index` files collapse onto their parent
/// directory, and the result carries a leading and trailing slash:
/// `getting-started/install.mdx` becomes `/getting-started/install/`.
pub fn file_route(rel_path: &Path) -> String {
    let stem = rel_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parent = rel_path.parent().unwrap_or_else(|| Path::new(""));
    let mut segments: Vec<String> = parent
        .components()
        .filter_map(|c| match c {
            Component::Normal(os) => Some(os.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if !stem.is_empty() && stem != "index" {
        segments.push(stem);
    }

    if segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}/", segments.join("/"))
}

/// The public route of an article: the articles prefix plus the derived
/// file path.
pub fn article_slug(rel_path: &Path) -> String {
    format!("{ARTICLES_PREFIX}{}", file_route(rel_path))
}

/// Attach derived route fields to a freshly created node.
///
/// Runs once per node as ingestion creates it. Documents receive their slug
/// in the namespaced field container; every other variant passes through
/// untouched. A second augmentation of the same document is a contract
/// violation.
pub fn augment(node: &mut SourceNode) -> Result<()> {
    match node {
        SourceNode::Document(doc) => {
            if doc.fields.slug.is_some() {
                return Err(CoreError::node(&doc.id, "slug already derived"));
            }
            doc.fields.slug = Some(article_slug(&doc.rel_path));
            Ok(())
        }
        SourceNode::Data(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(rel_path: &str) -> SourceNode {
        SourceNode::Document(DocumentNode::new(
            rel_path,
            Frontmatter::default(),
            String::new(),
        ))
    }

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_extension("md"), Some(SourceKind::Document));
        assert_eq!(SourceKind::from_extension("mdx"), Some(SourceKind::Document));
        assert_eq!(SourceKind::from_extension("MDX"), Some(SourceKind::Document));
        assert_eq!(SourceKind::from_extension("yml"), Some(SourceKind::Data));
        assert_eq!(SourceKind::from_extension("json"), Some(SourceKind::Data));
        assert_eq!(SourceKind::from_extension("txt"), None);
    }

    #[test]
    fn test_file_route_simple() {
        assert_eq!(file_route(Path::new("welcome.mdx")), "/welcome/");
    }

    #[test]
    fn test_file_route_nested() {
        assert_eq!(
            file_route(Path::new("getting-started/install.mdx")),
            "/getting-started/install/"
        );
    }

    #[test]
    fn test_file_route_index_collapses() {
        assert_eq!(file_route(Path::new("billing/index.md")), "/billing/");
        assert_eq!(file_route(Path::new("index.md")), "/");
    }

    #[test]
    fn test_article_slug_is_prefix_plus_file_route() {
        let rel = Path::new("billing/refunds.mdx");
        assert_eq!(
            article_slug(rel),
            format!("{ARTICLES_PREFIX}{}", file_route(rel))
        );
        assert_eq!(article_slug(rel), "/articles/billing/refunds/");
    }

    #[test]
    fn test_node_id_is_stable_and_slash_separated() {
        let id = DocumentNode::node_id(Path::new("billing/refunds.mdx"));
        assert_eq!(id, "mdx:billing/refunds.mdx");
        assert_eq!(id, DocumentNode::node_id(Path::new("billing/refunds.mdx")));
    }

    #[test]
    fn test_augment_writes_only_the_namespaced_field() {
        let mut node = document("billing/refunds.mdx");
        augment(&mut node).expect("augment");

        let SourceNode::Document(doc) = &node else {
            panic!("expected document");
        };
        assert_eq!(doc.fields.slug.as_deref(), Some("/articles/billing/refunds/"));
        // Author-supplied metadata stays untouched.
        assert_eq!(doc.frontmatter, Frontmatter::default());
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_augment_is_exactly_once() {
        let mut node = document("welcome.mdx");
        augment(&mut node).expect("first augment");

        let result = augment(&mut node);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already derived"));
    }

    #[test]
    fn test_augment_ignores_data_nodes() {
        let mut node = SourceNode::Data(DataNode {
            path: PathBuf::from("categories.yml"),
        });
        augment(&mut node).expect("augment is a no-op for data nodes");
    }
}
