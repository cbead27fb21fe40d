use super::style::css_url;
use super::{Element, Slot};

/// Sets visible text. Absent or empty values keep the authored text.
pub fn set_text(slot: Option<Slot<'_>>, value: Option<&str>) {
    let (Some(slot), Some(value)) = (slot, value) else {
        return;
    };
    if value.is_empty() {
        return;
    }
    slot.set_text(value);
}

/// Points a link at `href` and opens it in a new browsing context without
/// an opener. A link without an href is hidden.
pub fn set_link(slot: Option<Slot<'_>>, href: Option<&str>, label: Option<&str>) {
    let Some(slot) = slot else {
        return;
    };

    let href = match href {
        Some(href) if !href.is_empty() => href,
        _ => {
            slot.set_style_property("display", "none");
            return;
        }
    };

    if let Some(label) = label.filter(|label| !label.is_empty()) {
        slot.set_text(label);
    }
    slot.set_attr("href", href);
    slot.set_attr("target", "_blank");
    slot.set_attr("rel", "noopener");

    // A previous render may have hidden it.
    if slot.is_hidden() {
        slot.remove_style_property("display");
    }
}

pub fn set_background_image(slot: Option<Slot<'_>>, url: Option<&str>) {
    let (Some(slot), Some(url)) = (slot, url) else {
        return;
    };
    if url.is_empty() {
        return;
    }
    slot.set_style_property("background-image", &css_url(url));
}

pub fn hide(slot: Option<Slot<'_>>) {
    if let Some(slot) = slot {
        slot.set_style_property("display", "none");
    }
}

/// Clears the container and appends one built child per item, in order.
///
/// An absent list leaves the container as authored; a present but empty list
/// empties it.
pub fn replace_children<T>(
    slot: Option<Slot<'_>>,
    items: Option<&[T]>,
    build: impl Fn(&T) -> Element,
) {
    let (Some(slot), Some(items)) = (slot, items) else {
        return;
    };

    slot.clear_children();
    for item in items {
        slot.append(&build(item));
    }
}
