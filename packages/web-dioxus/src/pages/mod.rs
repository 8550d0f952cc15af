// Pages
pub mod import;

pub use import::Import;
