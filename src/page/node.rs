//! Structured element construction for list binds.
//!
//! Children appended to list containers are described as a small tree of
//! typed elements and created directly as nodes of the page's document.
//! Content strings only ever become text nodes or attribute values, so they
//! can never introduce markup.

use dom_query::{NodeRef, Tree};

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Child>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Adds the attribute only when a value is present.
    pub fn attr_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text node. Absent text adds nothing.
    pub fn text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text {
            self.children.push(Child::Text(text.to_string()));
        }
        self
    }

    /// Creates the element and its descendants in `tree`, detached.
    pub(crate) fn build<'t>(&self, tree: &'t Tree) -> NodeRef<'t> {
        let node = tree.new_element(self.tag);
        for (name, value) in &self.attrs {
            node.set_attr(name, value);
        }

        for child in &self.children {
            match child {
                Child::Element(element) => node.append_child(&element.build(tree)),
                Child::Text(text) => node.append_child(&tree.new_text(text.as_str())),
            }
        }

        node
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

/// Serializes an element the way it ends up in a page.
#[cfg(test)]
pub(crate) fn markup(element: &Element) -> String {
    let page = super::Page::parse(r#"<div id="out"></div>"#);
    let out = page.slot("out").unwrap();
    out.append(element);
    out.inner_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_markup() {
        let card = Element::new("article")
            .class("special-card")
            .child(Element::new("h3").text(Some("Taco Tuesday")))
            .child(Element::new("p").text(None));

        assert_eq!(
            markup(&card),
            r#"<article class="special-card"><h3>Taco Tuesday</h3><p></p></article>"#
        );
    }

    #[test]
    fn test_text_cannot_inject_markup() {
        let pill = Element::new("span").text(Some("<script>alert(1)</script> & more"));
        assert_eq!(
            markup(&pill),
            "<span>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</span>"
        );
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        let img = Element::new("img")
            .attr("src", "/a.jpg")
            .attr_opt("alt", Some(r#"say "cheese""#));
        assert_eq!(markup(&img), r#"<img src="/a.jpg" alt="say &quot;cheese&quot;">"#);
    }

    #[test]
    fn test_text_and_elements_keep_order() {
        let stat = Element::new("div")
            .child(Element::new("span").text(Some("25")))
            .text(Some("Years"));
        assert_eq!(markup(&stat), "<div><span>25</span>Years</div>");
    }
}
