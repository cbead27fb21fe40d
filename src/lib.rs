//! Renders a single-page restaurant website from a JSON content document.
//!
//! The content document is loaded once per page build, bound into the slots
//! of an HTML template, and the result is either served over HTTP or written
//! to disk.

pub mod config;
pub mod content;
pub mod frontend;
pub mod loader;
pub mod metrics;
pub mod nav;
pub mod page;
pub mod render;
pub mod site;

pub use config::Settings;
pub use content::ContentDocument;
pub use loader::{ContentLoader, ContentSource, FetchError, LoadError};
pub use page::Page;
pub use site::{build_page, render_page, PageOptions, PageOutcome};
