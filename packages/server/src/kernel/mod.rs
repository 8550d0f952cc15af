//! Kernel module - server infrastructure and external collaborators.

pub mod script_extractor;
pub mod test_dependencies;
pub mod traits;
pub mod wordpress;

pub use script_extractor::ScriptExtractor;
pub use test_dependencies::MockEventExtractor;
pub use traits::*;
pub use wordpress::{PostCreated, WordPressClient};
