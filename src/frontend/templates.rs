use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Template used when no override is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/index.html");

/// Reads the page template once at startup.
pub fn load_template(path: Option<&Path>) -> std::io::Result<Arc<str>> {
    match path {
        Some(path) => {
            info!("Loading page template from {}", path.display());
            let html = std::fs::read_to_string(path)?;
            Ok(Arc::from(html))
        }
        None => Ok(Arc::from(DEFAULT_TEMPLATE)),
    }
}
