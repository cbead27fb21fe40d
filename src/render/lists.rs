use crate::content::{Card, GalleryImage, MenuCategory, MenuItem, NavLink, OpeningHours, Stat, Testimonial};
use crate::page::Element;

pub fn pill(text: &str) -> Element {
    Element::new("span").class("pill").text(Some(text))
}

pub fn menu_card(category: &MenuCategory) -> Element {
    let card = Element::new("article")
        .class("menu-card")
        .child(Element::new("h3").text(category.name.as_deref()))
        .child(Element::new("p").text(category.description.as_deref()));

    category
        .items
        .iter()
        .fold(card, |card, item| card.child(menu_item(item)))
}

fn menu_item(item: &MenuItem) -> Element {
    Element::new("div")
        .class("menu-item")
        .child(
            Element::new("div")
                .child(Element::new("strong").text(item.name.as_deref()))
                .child(Element::new("br"))
                .child(Element::new("small").text(item.description.as_deref())),
        )
        .child(Element::new("span").text(item.price.as_deref()))
}

/// Title/description/detail card shared by specials and events.
pub fn card(class: &str, item: &Card) -> Element {
    Element::new("article")
        .class(class)
        .child(Element::new("h3").text(item.title.as_deref()))
        .child(Element::new("p").text(item.description.as_deref()))
        .child(Element::new("span").text(item.detail.as_deref()))
}

pub fn gallery_item(image: &GalleryImage) -> Element {
    Element::new("div").class("gallery__item").child(
        Element::new("img")
            .attr_opt("src", image.url.as_deref())
            .attr("alt", image.alt.as_deref().unwrap_or_default()),
    )
}

pub fn testimonial(item: &Testimonial) -> Element {
    let quote = item.quote.as_deref().map(|quote| format!("\u{201c}{}\u{201d}", quote));

    Element::new("article")
        .class("testimonial-card")
        .child(Element::new("p").text(quote.as_deref()))
        .child(Element::new("span").text(item.name.as_deref()))
        .child(Element::new("small").text(item.title.as_deref()))
}

pub fn hours_row(day: &OpeningHours) -> Element {
    Element::new("div")
        .class("menu-item")
        .child(Element::new("div").text(day.day.as_deref()))
        .child(Element::new("span").text(day.hours.as_deref()))
}

pub fn stat(stat: &Stat) -> Element {
    Element::new("div")
        .class("stat")
        .child(Element::new("span").text(stat.value.as_deref()))
        .text(stat.label.as_deref())
}

pub fn nav_link(link: &NavLink) -> Element {
    Element::new("a")
        .attr_opt("href", link.href.as_deref())
        .text(link.label.as_deref())
}

pub fn footer_link(link: &NavLink) -> Element {
    Element::new("a")
        .attr_opt("href", link.href.as_deref())
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .text(link.label.as_deref())
}
