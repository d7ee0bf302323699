//! Glossplit - split a Markdown glossary into one file per term
//!
//! Glossplit takes a glossary whose entries start with `[[def: Term, alias]]`,
//! writes one Markdown file per term, and rewrites the `specs.json` manifest so
//! the new files replace the glossary in the document's render order.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (split, check, preview, restore)
//! - **core**: Core functionality (parser, splice, splitter, backup guard, gate)
//! - **models**: Data structures (config, manifest, split plan)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{GlossplitError, Result};
