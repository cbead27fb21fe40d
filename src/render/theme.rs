use tracing::warn;

use crate::content::Theme;
use crate::page::{Page, Slot};

/// Writes the theme into CSS custom properties on the document element.
///
/// Only properties the theme defines are touched; the stylesheet defaults
/// stay in effect for everything else.
pub fn apply_theme(page: &Page, theme: Option<&Theme>) {
    let (Some(theme), Some(root)) = (theme, page.root()) else {
        return;
    };

    for (key, value) in &theme.colors {
        set_property(&root, &format!("--color-{}", key), value);
    }

    if let Some(fonts) = &theme.fonts {
        if let Some(heading) = &fonts.heading {
            set_property(&root, "--font-heading", heading);
        }
        if let Some(body) = &fonts.body {
            set_property(&root, "--font-body", body);
        }
    }
    if let Some(radius) = &theme.radius {
        set_property(&root, "--radius", radius);
    }
    if let Some(shadow) = &theme.shadow {
        set_property(&root, "--shadow", shadow);
    }
}

/// Theme entries that are not a single well-formed declaration are skipped.
fn set_property(root: &Slot<'_>, name: &str, value: &str) {
    if !root.set_style_property(name, value) {
        warn!("Skipping theme property {}: invalid name or value {:?}", name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &str =
        r#"<html style="--color-accent: gold"><head><title>t</title></head><body></body></html>"#;

    fn theme(value: serde_json::Value) -> Theme {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_color_becomes_custom_property() {
        let page = Page::parse(TEMPLATE);
        apply_theme(&page, Some(&theme(json!({ "colors": { "primary": "#ff0000" } }))));

        let style = page.root().unwrap().style();
        assert_eq!(style.get("--color-primary"), Some("#ff0000"));
        assert_eq!(style.get("--color-accent"), Some("gold"));
        assert_eq!(style.get("--radius"), None);
        assert_eq!(style.get("--font-heading"), None);
    }

    #[test]
    fn test_fonts_radius_shadow() {
        let page = Page::parse(TEMPLATE);
        apply_theme(
            &page,
            Some(&theme(json!({
                "fonts": { "heading": "'Playfair Display', serif" },
                "radius": "18px",
                "shadow": "0 10px 30px rgba(0, 0, 0, 0.1)"
            }))),
        );

        let style = page.root().unwrap().style();
        assert_eq!(style.get("--font-heading"), Some("'Playfair Display', serif"));
        assert_eq!(style.get("--font-body"), None);
        assert_eq!(style.get("--radius"), Some("18px"));
        assert_eq!(style.get("--shadow"), Some("0 10px 30px rgba(0, 0, 0, 0.1)"));
    }

    #[test]
    fn test_values_cannot_inject_declarations() {
        let page = Page::parse(TEMPLATE);
        apply_theme(
            &page,
            Some(&theme(json!({
                "colors": {
                    "primary": "#f00; display: none",
                    "bad key": "blue",
                    "secondary": "#00ff00"
                },
                "radius": "4px} html{display:none"
            }))),
        );

        let root = page.root().unwrap();
        let style = root.style();
        assert_eq!(style.get("--color-primary"), None);
        assert_eq!(style.get("--color-bad key"), None);
        assert_eq!(style.get("--radius"), None);
        assert_eq!(style.get("display"), None);
        assert!(!root.is_hidden());
        assert_eq!(
            root.attr("style").as_deref(),
            Some("--color-accent: gold; --color-secondary: #00ff00;")
        );
    }

    #[test]
    fn test_absent_theme_changes_nothing() {
        let page = Page::parse(TEMPLATE);
        let before = page.html();
        apply_theme(&page, None);
        assert_eq!(page.html(), before);
    }
}
