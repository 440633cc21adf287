//! Page descriptors and the page-generation driver.
//!
//! The driver runs once per build, after ingestion completes: it registers
//! the index page, executes the combined query, and registers one page per
//! category and per article. A query error is fatal; pages already handed
//! to the sink are not rolled back.

use std::path::{Path, PathBuf};

use helpsy_core::Options;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::store::{QueryError, QuerySource};

/// Page-generation errors.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The combined page query failed.
    #[error("failed to load data to create pages: {0}")]
    Query(#[from] QueryError),
}

/// Template components, named relative to the theme source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Help-center landing page.
    Home,
    /// Category detail page.
    Category,
    /// Article detail page.
    Article,
}

impl Template {
    /// Stable lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Category => "category",
            Self::Article => "article",
        }
    }

    /// Component file path relative to a resolution root.
    pub fn component(&self) -> &'static str {
        match self {
            Self::Home => "templates/home.html",
            Self::Category => "templates/category.html",
            Self::Article => "templates/article.html",
        }
    }
}

/// Ordered component-resolution roots.
///
/// The site's own root, when configured, comes first so it shadows the
/// theme's source tree.
pub fn component_roots(theme_root: &Path, site_root: Option<&Path>) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(site) = site_root {
        roots.push(site.to_path_buf());
    }
    roots.push(theme_root.to_path_buf());
    roots
}

/// Resolve a template component against the first root containing it,
/// falling back to the theme root when no root has it on disk yet.
pub fn resolve_component(roots: &[PathBuf], template: Template) -> PathBuf {
    for root in roots {
        let candidate = root.join(template.component());
        if candidate.exists() {
            return candidate;
        }
    }

    match roots.last() {
        Some(root) => root.join(template.component()),
        None => PathBuf::from(template.component()),
    }
}

/// Routing context passed through to the downstream template, carrying the
/// entity id so the template can re-query full details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageContext {
    /// No context (the index page).
    None,
    /// Category detail context.
    Category { id: String },
    /// Article detail context.
    Article { id: String },
}

/// The (path, template, context) triple instructing the host to
/// materialize one rendered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

/// Receives page descriptors; the host materializes routes from them.
pub trait PageSink {
    fn create_page(&mut self, page: PageDescriptor);
}

impl<F: FnMut(PageDescriptor)> PageSink for F {
    fn create_page(&mut self, page: PageDescriptor) {
        self(page)
    }
}

/// Counts of pages handed to the sink, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub index_pages: usize,
    pub category_pages: usize,
    pub article_pages: usize,
}

impl GenerateStats {
    /// Total pages handed to the sink.
    pub fn total(&self) -> usize {
        self.index_pages + self.category_pages + self.article_pages
    }
}

/// Generate every page descriptor for the site.
///
/// Category pages come out in ascending `order`; article pages follow the
/// query's stable order, with one diagnostic log entry per article page.
pub fn generate(
    source: &impl QuerySource,
    options: &Options,
    sink: &mut dyn PageSink,
) -> Result<GenerateStats, GenerateError> {
    let mut stats = GenerateStats::default();

    // The index page goes first; it stays registered even when the query
    // below fails.
    sink.create_page(PageDescriptor {
        path: options.index_route().to_string(),
        template: Template::Home,
        context: PageContext::None,
    });
    stats.index_pages += 1;

    let query = match source.page_query() {
        Ok(query) => query,
        Err(e) => {
            error!(error = %e, "failed to load data to create pages");
            return Err(e.into());
        }
    };

    for category in &query.categories {
        sink.create_page(PageDescriptor {
            path: options.category_route(&category.slug),
            template: Template::Category,
            context: PageContext::Category {
                id: category.id.clone(),
            },
        });
        stats.category_pages += 1;
    }

    for article in &query.articles {
        debug!(path = %article.slug, id = %article.id, "registering article page");
        sink.create_page(PageDescriptor {
            path: article.slug.clone(),
            template: Template::Article,
            context: PageContext::Article {
                id: article.id.clone(),
            },
        });
        stats.article_pages += 1;
    }

    info!(
        categories = stats.category_pages,
        articles = stats.article_pages,
        "page generation complete"
    );

    Ok(stats)
}
