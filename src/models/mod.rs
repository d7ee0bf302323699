pub mod config;
pub mod glossary;
pub mod manifest;

pub use config::*;
pub use glossary::*;
pub use manifest::*;
