//! Pipeline orchestration.
//!
//! Drives the ordered stages of one build: bootstrap, ingest, category
//! registration, page generation. Each stage runs to completion before the
//! next begins and consumes the previous stage's output; any stage failure
//! halts the run without undoing stages already executed.

use std::{path::PathBuf, time::Instant};

use helpsy_core::Options;
use thiserror::Error;
use tracing::info;

use crate::{
    bootstrap,
    ingest::{self, IngestError},
    pages::{self, GenerateError, GenerateStats, PageSink},
    store::{DataError, Store},
};

/// Pipeline errors, one variant per failing stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Bootstrap filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ingestion error.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Data-layer population error.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Page-generation error.
    #[error("page generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Statistics for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Documents ingested.
    pub documents: usize,

    /// Categories registered.
    pub categories: usize,

    /// Pages handed to the sink.
    pub pages: GenerateStats,

    /// Run duration in milliseconds.
    pub duration_ms: u64,
}

/// One build of the help-center site.
#[derive(Debug)]
pub struct Pipeline {
    options: Options,
    content_dir: PathBuf,
}

impl Pipeline {
    /// Create a pipeline over a content directory.
    #[must_use]
    pub fn new(options: Options, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            options,
            content_dir: content_dir.into(),
        }
    }

    /// Run every stage once, handing page descriptors to the sink.
    pub fn run(&self, sink: &mut dyn PageSink) -> Result<PipelineStats> {
        let start = Instant::now();
        let mut stats = PipelineStats::default();

        info!(
            content = %self.content_dir.display(),
            base_path = %self.options.base_path,
            "starting pipeline"
        );

        // 1. Make sure the scan root exists.
        bootstrap::ensure_content_dir(&self.content_dir)?;

        // 2. Ingest source nodes; documents get their route fields here.
        let nodes = ingest::ingest(&self.content_dir)?;

        // 3. Register categories with the data layer before any query runs.
        let mut store = Store::new();
        store.ingest(nodes)?;
        stats.documents = store.documents().len();
        stats.categories = store.categories().len();

        // 4. Generate page descriptors.
        stats.pages = pages::generate(&store, &self.options, sink)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            documents = stats.documents,
            categories = stats.categories,
            pages = stats.pages.total(),
            duration_ms = stats.duration_ms,
            "pipeline complete"
        );

        Ok(stats)
    }
}
