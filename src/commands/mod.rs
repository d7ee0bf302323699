pub mod check;
pub mod preview;
pub mod prompt;
pub mod restore;
pub mod split;

pub use check::*;
pub use preview::*;
pub use prompt::*;
pub use restore::*;
pub use split::*;
