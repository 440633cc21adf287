//! The data layer.
//!
//! Owns ingested documents and registered categories, and answers the one
//! combined query the page driver issues. Categories must be registered
//! before the query runs; the pipeline enforces that ordering.

use std::{fs, path::Path};

use helpsy_core::{
    Category, CoreError, DocumentNode,
    category::parse_categories,
    node::SourceNode,
};
use thiserror::Error;
use tracing::{debug, info};

/// Data-layer population errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The authored category data does not match the declared schema.
    #[error("category data error: {0}")]
    Category(#[from] CoreError),
}

/// Query execution errors. Any of these is fatal to page generation.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A document reached the query without its derived slug.
    #[error("document {id} has no derived slug")]
    MissingSlug { id: String },

    /// The underlying query engine failed.
    #[error("query execution failed: {0}")]
    Execution(String),
}

/// Category fields selected by the combined page query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPageEntry {
    pub id: String,
    pub slug: String,
}

/// Document fields selected by the combined page query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePageEntry {
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
}

/// Result of the combined page query: all categories ascending by `order`,
/// all documents in the layer's stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub categories: Vec<CategoryPageEntry>,
    pub articles: Vec<ArticlePageEntry>,
}

/// The seam standing in for the host query engine.
pub trait QuerySource {
    /// Execute the combined page query.
    fn page_query(&self) -> Result<PageQuery, QueryError>;
}

/// In-memory data layer populated from ingested nodes.
#[derive(Debug, Default)]
pub struct Store {
    documents: Vec<DocumentNode>,
    categories: Vec<Category>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of ingested nodes.
    ///
    /// Documents keep their ingestion order. Data nodes holding category
    /// records are parsed against the declared schema here, before any
    /// query can reference them; a malformed file is fatal.
    pub fn ingest(&mut self, nodes: Vec<SourceNode>) -> Result<(), DataError> {
        for node in nodes {
            match node {
                SourceNode::Document(doc) => self.documents.push(doc),
                SourceNode::Data(data) => self.register_category_data(&data.path)?,
            }
        }

        info!(
            documents = self.documents.len(),
            categories = self.categories.len(),
            "data layer populated"
        );
        Ok(())
    }

    /// Register category records from one authored data file.
    ///
    /// Only files named `categories` feed the category set; other data
    /// files belong to collaborators and are ignored here.
    fn register_category_data(&mut self, path: &Path) -> Result<(), DataError> {
        let is_category_data = path
            .file_stem()
            .is_some_and(|stem| stem.eq_ignore_ascii_case("categories"));
        if !is_category_data {
            debug!(path = %path.display(), "ignoring unrelated data file");
            return Ok(());
        }

        let raw = fs::read_to_string(path)?;
        let records = parse_categories(&raw, path)?;
        debug!(path = %path.display(), count = records.len(), "registered categories");
        self.categories.extend(records);
        Ok(())
    }

    /// Ingested documents, in the layer's stable order.
    pub fn documents(&self) -> &[DocumentNode] {
        &self.documents
    }

    /// Registered categories, in authored order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl QuerySource for Store {
    fn page_query(&self) -> Result<PageQuery, QueryError> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        sorted.sort_by_key(|c| c.order);

        let categories = sorted
            .into_iter()
            .map(|c| CategoryPageEntry {
                id: c.id.clone(),
                slug: c.slug.clone(),
            })
            .collect();

        let articles = self
            .documents
            .iter()
            .map(|doc| {
                let slug = doc
                    .fields
                    .slug
                    .clone()
                    .ok_or_else(|| QueryError::MissingSlug { id: doc.id.clone() })?;
                Ok(ArticlePageEntry {
                    id: doc.id.clone(),
                    slug,
                    title: doc.frontmatter.title.clone(),
                })
            })
            .collect::<Result<_, QueryError>>()?;

        Ok(PageQuery {
            categories,
            articles,
        })
    }
}
