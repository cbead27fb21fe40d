//! Parsed HTML page and the slots the renderer binds into.
//!
//! A slot is an element found by its `id`. Lookups return `Option<Slot>` and
//! every binding primitive in [`bind`] is a no-op on `None`, so a template
//! that lacks a slot is simply left alone.

pub mod bind;
pub mod node;
pub mod style;

use dom_query::{Document, Selection};

pub use node::{Child, Element};
pub use style::StyleDeclaration;

pub struct Page {
    document: Document,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Document::from(html),
        }
    }

    /// Looks up the element with the given `id`.
    pub fn slot(&self, id: &str) -> Option<Slot<'_>> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        self.select(&format!("#{}", id))
    }

    /// The document element, carrier of the theme's custom properties.
    pub fn root(&self) -> Option<Slot<'_>> {
        self.select("html")
    }

    pub fn title(&self) -> Option<String> {
        self.select("title").map(|title| title.text())
    }

    pub fn set_title(&self, title: &str) {
        if let Some(slot) = self.select("title") {
            slot.set_text(title);
        }
    }

    pub fn html(&self) -> String {
        self.document.html().to_string()
    }

    fn select(&self, selector: &str) -> Option<Slot<'_>> {
        self.document
            .try_select(selector)
            .map(|selection| Slot {
                selection: selection.first(),
            })
    }
}

/// One element of the page.
pub struct Slot<'a> {
    selection: Selection<'a>,
}

impl<'a> Slot<'a> {
    pub fn text(&self) -> String {
        self.selection.text().to_string()
    }

    /// Replaces the element's content with a single text node.
    pub fn set_text(&self, text: &str) {
        self.selection.set_text(text);
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.selection.attr(name).map(|value| value.to_string())
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.selection.set_attr(name, value);
    }

    pub fn remove_attr(&self, name: &str) {
        self.selection.remove_attr(name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.selection.has_class(class)
    }

    pub fn add_class(&self, class: &str) {
        self.selection.add_class(class);
    }

    pub fn remove_class(&self, class: &str) {
        self.selection.remove_class(class);
    }

    pub fn style(&self) -> StyleDeclaration {
        StyleDeclaration::parse(&self.attr("style").unwrap_or_default())
    }

    /// Returns `false` when the declaration was rejected and nothing changed.
    pub fn set_style_property(&self, name: &str, value: &str) -> bool {
        let mut style = self.style();
        if !style.set(name, value) {
            return false;
        }
        self.write_style(&style);
        true
    }

    pub fn remove_style_property(&self, name: &str) {
        let mut style = self.style();
        if style.remove(name).is_some() {
            self.write_style(&style);
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.style().get("display") == Some("none")
    }

    pub fn clear_children(&self) {
        for node in self.selection.nodes() {
            node.remove_children();
        }
    }

    pub fn append(&self, element: &Element) {
        if let Some(parent) = self.selection.nodes().first() {
            parent.append_child(&element.build(parent.tree));
        }
    }

    pub fn children(&self) -> Selection<'a> {
        self.selection.children()
    }

    pub fn inner_html(&self) -> String {
        self.selection.inner_html().to_string()
    }

    fn write_style(&self, style: &StyleDeclaration) {
        if style.is_empty() {
            self.selection.remove_attr("style");
        } else {
            self.selection.set_attr("style", &style.to_string());
        }
    }
}
