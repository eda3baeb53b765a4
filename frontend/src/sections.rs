use log::{debug, warn};

use crate::context::PageContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// In nav order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Element id of the section, also used as the `#fragment` of its nav link.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smooth-scrolls to the element with `id`. Returns whether a scroll was requested.
pub fn scroll_to_section(ctx: &dyn PageContext, id: &str) -> bool {
    if !ctx.has_element(id) {
        debug!("No section with id '{}', ignoring scroll request", id);
        return false;
    }
    if let Err(e) = ctx.smooth_scroll_to(id) {
        warn!("Smooth scroll to '{}' failed: {}", id, e);
    }
    true
}
