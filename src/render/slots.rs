//! Element ids the renderer expects in the template.

pub const SITE_NAME: &str = "site-name";
pub const SITE_TAGLINE: &str = "site-tagline";
pub const FOOTER_NAME: &str = "footer-name";
pub const FOOTER_TAGLINE: &str = "footer-tagline";

pub const HERO_EYEBROW: &str = "hero-eyebrow";
pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_PRIMARY: &str = "hero-primary";
pub const HERO_SECONDARY: &str = "hero-secondary";
pub const HERO_IMAGE: &str = "hero-image";
pub const HERO_STATS: &str = "hero-stats";

pub const ABOUT_DESCRIPTION: &str = "about-description";
pub const ABOUT_IMAGE: &str = "about-image";
pub const ABOUT_PILLS: &str = "about-pills";

pub const MENU_DESCRIPTION: &str = "menu-description";
pub const MENU_PDF: &str = "menu-pdf";
pub const MENU_GRID: &str = "menu-grid";

pub const SPECIALS_DESCRIPTION: &str = "specials-description";
pub const SPECIALS_GRID: &str = "specials-grid";

pub const GALLERY_DESCRIPTION: &str = "gallery-description";
pub const GALLERY_GRID: &str = "gallery-grid";

pub const TESTIMONIAL_DESCRIPTION: &str = "testimonial-description";
pub const TESTIMONIALS_GRID: &str = "testimonials-grid";

pub const EVENTS_DESCRIPTION: &str = "events-description";
pub const EVENTS_GRID: &str = "events-grid";

pub const CONTACT_DESCRIPTION: &str = "contact-description";
pub const CONTACT_ADDRESS: &str = "contact-address";
pub const CONTACT_PHONE: &str = "contact-phone";
pub const CONTACT_EMAIL: &str = "contact-email";
pub const MAP_LINK: &str = "map-link";
pub const HOURS_LIST: &str = "hours-list";

pub const NAV_TOGGLE: &str = "nav-toggle";
pub const NAV_LINKS: &str = "nav-links";
pub const FOOTER_LINKS: &str = "footer-links";

pub const ORDER_LINK: &str = "order-link";
pub const RESERVE_LINK: &str = "reserve-link";
pub const FOOTER_NOTE: &str = "footer-note";
