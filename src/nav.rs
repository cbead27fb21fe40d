use crate::page::{Page, Slot};
use crate::render::slots;

pub const OPEN_CLASS: &str = "is-open";

/// Holds the navigation toggle and the links container of one page.
pub struct PageController<'a> {
    toggle: Option<Slot<'a>>,
    links: Option<Slot<'a>>,
}

impl<'a> PageController<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self {
            toggle: page.slot(slots::NAV_TOGGLE),
            links: page.slot(slots::NAV_LINKS),
        }
    }

    pub fn is_nav_open(&self) -> bool {
        self.links
            .as_ref()
            .map(|links| links.has_class(OPEN_CLASS))
            .unwrap_or(false)
    }

    /// Flips the open state and mirrors it into `aria-expanded`.
    ///
    /// Returns the new state, or `None` when the page lacks either element.
    pub fn toggle_nav(&self) -> Option<bool> {
        let (toggle, links) = (self.toggle.as_ref()?, self.links.as_ref()?);

        let open = !links.has_class(OPEN_CLASS);
        if open {
            links.add_class(OPEN_CLASS);
        } else {
            links.remove_class(OPEN_CLASS);
        }
        toggle.set_attr("aria-expanded", if open { "true" } else { "false" });

        Some(open)
    }
}
