pub mod backup;
pub mod config;
pub mod fixer;
pub mod gate;
pub mod parser;
pub mod project;
pub mod splice;
pub mod splitter;

pub use backup::*;
pub use config::*;
pub use fixer::*;
pub use gate::*;
pub use parser::*;
pub use project::*;
pub use splice::*;
pub use splitter::*;
