//! Binds a content document into the page's slots.
//!
//! Rendering is synchronous and repeatable: every list container is cleared
//! before it is repopulated, so rendering a second document over the same
//! page replaces the first one's lists instead of adding to them.

mod lists;
pub mod slots;
mod theme;

use tracing::debug;

use crate::content::{Action, ContentDocument};
use crate::page::bind::{hide, replace_children, set_background_image, set_link, set_text};
use crate::page::Page;

pub use theme::apply_theme;

const TITLE_SEPARATOR: char = '|';
const MAP_LINK_LABEL: &str = "Get Directions";

pub fn render(page: &Page, doc: &ContentDocument) {
    apply_theme(page, doc.theme.as_ref());
    render_identity(page, doc);
    render_hero(page, doc);
    render_about(page, doc);
    render_menu(page, doc);
    render_sections(page, doc);
    render_contact(page, doc);
    render_navigation(page, doc);
    render_actions(page, doc);

    debug!("Rendered content into page");
}

/// Keeps the static title's suffix and puts the restaurant name in front.
pub fn page_title(static_title: &str, name: &str) -> String {
    let suffix = match static_title.split_once(TITLE_SEPARATOR) {
        Some((_, suffix)) => suffix.trim(),
        None => static_title.trim(),
    };

    if suffix.is_empty() {
        name.to_string()
    } else {
        format!("{} {} {}", name, TITLE_SEPARATOR, suffix)
    }
}

fn render_identity(page: &Page, doc: &ContentDocument) {
    let Some(restaurant) = &doc.restaurant else {
        return;
    };
    let name = restaurant.name.as_deref();
    let tagline = restaurant.tagline.as_deref();

    if let Some(name) = name.filter(|name| !name.is_empty()) {
        let current = page.title().unwrap_or_default();
        page.set_title(&page_title(&current, name));
    }

    set_text(page.slot(slots::SITE_NAME), name);
    set_text(page.slot(slots::SITE_TAGLINE), tagline);
    set_text(page.slot(slots::FOOTER_NAME), name);
    set_text(page.slot(slots::FOOTER_TAGLINE), tagline);
}

fn render_hero(page: &Page, doc: &ContentDocument) {
    let Some(hero) = &doc.hero else {
        return;
    };

    set_text(page.slot(slots::HERO_EYEBROW), hero.eyebrow.as_deref());
    set_text(page.slot(slots::HERO_TITLE), hero.title.as_deref());
    set_text(page.slot(slots::HERO_SUBTITLE), hero.subtitle.as_deref());
    bind_action(page, slots::HERO_PRIMARY, hero.primary_cta.as_ref());
    bind_action(page, slots::HERO_SECONDARY, hero.secondary_cta.as_ref());
    set_background_image(page.slot(slots::HERO_IMAGE), hero.image.as_deref());
    replace_children(page.slot(slots::HERO_STATS), hero.stats.as_deref(), lists::stat);
}

fn render_about(page: &Page, doc: &ContentDocument) {
    let Some(about) = &doc.about else {
        return;
    };

    set_text(page.slot(slots::ABOUT_DESCRIPTION), about.description.as_deref());
    set_background_image(page.slot(slots::ABOUT_IMAGE), about.image.as_deref());
    replace_children(
        page.slot(slots::ABOUT_PILLS),
        about.highlights.as_deref(),
        |highlight| lists::pill(highlight),
    );
}

fn render_menu(page: &Page, doc: &ContentDocument) {
    let menu = doc.menu.as_ref();

    set_text(
        page.slot(slots::MENU_DESCRIPTION),
        menu.and_then(|menu| menu.description.as_deref()),
    );

    match menu.and_then(|menu| menu.pdf.as_ref()) {
        Some(pdf) => set_link(
            page.slot(slots::MENU_PDF),
            pdf.link.as_deref(),
            pdf.label.as_deref(),
        ),
        None => hide(page.slot(slots::MENU_PDF)),
    }

    replace_children(
        page.slot(slots::MENU_GRID),
        menu.and_then(|menu| menu.categories.as_deref()),
        lists::menu_card,
    );
}

fn render_sections(page: &Page, doc: &ContentDocument) {
    if let Some(specials) = &doc.specials {
        set_text(page.slot(slots::SPECIALS_DESCRIPTION), specials.description.as_deref());
        replace_children(page.slot(slots::SPECIALS_GRID), specials.items.as_deref(), |item| {
            lists::card("special-card", item)
        });
    }

    if let Some(gallery) = &doc.gallery {
        set_text(page.slot(slots::GALLERY_DESCRIPTION), gallery.description.as_deref());
        replace_children(
            page.slot(slots::GALLERY_GRID),
            gallery.images.as_deref(),
            lists::gallery_item,
        );
    }

    if let Some(testimonials) = &doc.testimonials {
        set_text(
            page.slot(slots::TESTIMONIAL_DESCRIPTION),
            testimonials.description.as_deref(),
        );
        replace_children(
            page.slot(slots::TESTIMONIALS_GRID),
            testimonials.items.as_deref(),
            lists::testimonial,
        );
    }

    if let Some(events) = &doc.events {
        set_text(page.slot(slots::EVENTS_DESCRIPTION), events.description.as_deref());
        replace_children(page.slot(slots::EVENTS_GRID), events.items.as_deref(), |item| {
            lists::card("event-card", item)
        });
    }
}

fn render_contact(page: &Page, doc: &ContentDocument) {
    let Some(contact) = &doc.contact else {
        return;
    };

    set_text(page.slot(slots::CONTACT_DESCRIPTION), contact.description.as_deref());
    set_text(page.slot(slots::CONTACT_ADDRESS), contact.address.as_deref());
    set_text(page.slot(slots::CONTACT_PHONE), contact.phone.as_deref());
    set_text(page.slot(slots::CONTACT_EMAIL), contact.email.as_deref());
    set_link(
        page.slot(slots::MAP_LINK),
        contact.map_link.as_deref(),
        Some(MAP_LINK_LABEL),
    );
    replace_children(page.slot(slots::HOURS_LIST), contact.hours.as_deref(), lists::hours_row);
}

fn render_navigation(page: &Page, doc: &ContentDocument) {
    replace_children(page.slot(slots::NAV_LINKS), doc.navigation.as_deref(), lists::nav_link);
    replace_children(
        page.slot(slots::FOOTER_LINKS),
        doc.footer_links.as_deref(),
        lists::footer_link,
    );
}

fn render_actions(page: &Page, doc: &ContentDocument) {
    if let Some(actions) = &doc.actions {
        bind_action(page, slots::ORDER_LINK, actions.order_online.as_ref());
        bind_action(page, slots::RESERVE_LINK, actions.reserve.as_ref());
    }
    set_text(page.slot(slots::FOOTER_NOTE), doc.footer_note.as_deref());
}

/// A missing action hides its button, like an action without a link.
fn bind_action(page: &Page, id: &str, action: Option<&Action>) {
    set_link(
        page.slot(id),
        action.and_then(|action| action.link.as_deref()),
        action.and_then(|action| action.label.as_deref()),
    );
}
