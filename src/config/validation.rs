use anyhow::{anyhow, Result};
use url::Url;

use crate::config::Settings;
use crate::loader::ContentSource;

pub fn validate_site_settings(settings: &Settings) -> Result<()> {
    let base = Url::parse(&settings.site.base_url)
        .map_err(|e| anyhow!("site.base_url ({}) is not a valid URL: {}", settings.site.base_url, e))?;

    if base.cannot_be_a_base() {
        return Err(anyhow!(
            "site.base_url ({}) cannot be used as a base URL",
            settings.site.base_url
        ));
    }

    ContentSource::parse(&settings.site.content_url, Some(&base)).map_err(|e| {
        anyhow!(
            "site.content_url ({}) does not resolve against {}: {}",
            settings.site.content_url,
            base,
            e
        )
    })?;

    if settings.application.port == 0 {
        return Err(anyhow!("application.port must be non-zero"));
    }

    Ok(())
}
