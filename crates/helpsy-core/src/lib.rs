//! Helpsy Core Library
//!
//! Core types, configuration, and error handling for the Helpsy help-center
//! pipeline: plugin options, the ingested-node model with derived route
//! fields, the category schema, and frontmatter parsing.

pub mod category;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod node;

pub use category::Category;
pub use config::Options;
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use node::{DataNode, DocumentNode, NodeFields, SourceKind, SourceNode};
