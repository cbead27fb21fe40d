//! Content document model.
//!
//! The document is authored as JSON with camelCase keys. Every field is
//! optional: a missing field is never an error, the renderer simply leaves the
//! corresponding slot alone.

mod text;

use serde::Deserialize;
use std::collections::BTreeMap;

pub use text::DisplayText;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub theme: Option<Theme>,
    pub restaurant: Option<Restaurant>,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub menu: Option<Menu>,
    pub specials: Option<CardSection>,
    pub gallery: Option<Gallery>,
    pub testimonials: Option<Testimonials>,
    pub events: Option<CardSection>,
    pub contact: Option<Contact>,
    pub navigation: Option<Vec<NavLink>>,
    pub footer_links: Option<Vec<NavLink>>,
    pub actions: Option<Actions>,
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: BTreeMap<String, String>,
    pub fonts: Option<Fonts>,
    pub radius: Option<String>,
    pub shadow: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    pub name: Option<String>,
    pub tagline: Option<String>,
}

/// A `{link, label}` pair used by buttons and call-to-actions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Action {
    pub link: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub primary_cta: Option<Action>,
    pub secondary_cta: Option<Action>,
    pub stats: Option<Vec<Stat>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: DisplayText,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct About {
    pub description: Option<String>,
    pub image: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub description: Option<String>,
    pub pdf: Option<Action>,
    pub categories: Option<Vec<MenuCategory>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: DisplayText,
}

/// Specials and events share one shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardSection {
    pub description: Option<String>,
    pub items: Option<Vec<Card>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gallery {
    pub description: Option<String>,
    pub images: Option<Vec<GalleryImage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Testimonials {
    pub description: Option<String>,
    pub items: Option<Vec<Testimonial>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_link: Option<String>,
    pub hours: Option<Vec<OpeningHours>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub day: Option<String>,
    pub hours: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub href: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Actions {
    pub order_online: Option<Action>,
    pub reserve: Option<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_a_valid_document() {
        let doc: ContentDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.restaurant.is_none());
        assert!(doc.navigation.is_none());
    }

    #[test]
    fn test_camel_case_keys() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "hero": { "primaryCta": { "link": "#menu", "label": "See menu" } },
            "contact": { "mapLink": "https://maps.example.com" },
            "footerLinks": [{ "href": "/privacy", "label": "Privacy" }],
            "actions": { "orderOnline": { "link": "https://order.example.com" } },
            "footerNote": "Est. 1998"
        }))
        .unwrap();

        let cta = doc.hero.unwrap().primary_cta.unwrap();
        assert_eq!(cta.link.as_deref(), Some("#menu"));
        assert_eq!(
            doc.contact.unwrap().map_link.as_deref(),
            Some("https://maps.example.com")
        );
        assert_eq!(doc.footer_links.unwrap().len(), 1);
        assert!(doc.actions.unwrap().order_online.is_some());
        assert_eq!(doc.footer_note.as_deref(), Some("Est. 1998"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "restaurant": { "name": "Joe's Diner", "founded": 1998 },
            "analytics": { "id": "UA-1" }
        }))
        .unwrap();
        assert_eq!(doc.restaurant.unwrap().name.as_deref(), Some("Joe's Diner"));
    }

    #[test]
    fn test_theme_colors_keep_every_entry() {
        let theme: Theme = serde_json::from_value(json!({
            "colors": { "primary": "#ff0000", "surface": "#fafafa" },
            "radius": "12px"
        }))
        .unwrap();
        assert_eq!(theme.colors.len(), 2);
        assert_eq!(theme.colors["primary"], "#ff0000");
        assert!(theme.fonts.is_none());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = serde_json::from_value::<ContentDocument>(json!({
            "navigation": "home"
        }));
        assert!(result.is_err());
    }
}
