// HTTP routes
pub mod health;
pub mod publish;
pub mod scrape;

pub use health::*;
pub use publish::*;
pub use scrape::*;
