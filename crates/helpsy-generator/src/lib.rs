//! Helpsy Generator Library
//!
//! Page-generation engine for the Helpsy help-center pipeline.
//!
//! # Modules
//!
//! - [`bootstrap`] - content directory pre-flight check
//! - [`ingest`] - content ingestion and node augmentation
//! - [`store`] - the data layer and its query contract
//! - [`pages`] - page descriptors and the generation driver
//! - [`pipeline`] - stage orchestration

pub mod bootstrap;
pub mod ingest;
pub mod pages;
pub mod pipeline;
pub mod store;

pub use pages::{GenerateStats, PageContext, PageDescriptor, PageSink, Template};
pub use pipeline::{Pipeline, PipelineError, PipelineStats};
pub use store::{ArticlePageEntry, CategoryPageEntry, PageQuery, QuerySource, Store};
