mod settings;
mod validation;

pub use settings::{ApplicationSettings, Settings, SiteSettings};
pub use validation::validate_site_settings;
