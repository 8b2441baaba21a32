/// In-page anchors, in the order the header lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::About,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::Projects => "Projects",
            Anchor::Skills => "Skills",
            Anchor::About => "About",
            Anchor::Contact => "Contact",
        }
    }
}

pub fn scroll_to(anchor: Anchor) -> bool {
    scroll_to_id(anchor.id())
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
///
/// Returns `false` without touching the page when nothing has that id.
#[cfg(feature = "hydrate")]
pub fn scroll_to_id(id: &str) -> bool {
    use leptos::prelude::document;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let el = if let Some(el) = document().get_element_by_id(id) {
        el
    } else {
        log::debug!("no element with id '{id}', not scrolling");
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_id(id: &str) -> bool {
    // no document to scroll outside the browser
    log::debug!("ignoring scroll to '{id}' outside the browser");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_are_unique() {
        let mut ids = Anchor::ALL.map(Anchor::id).to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn test_labels_capitalise_ids() {
        for anchor in Anchor::ALL {
            let id = anchor.id();
            let expected = format!("{}{}", id[..1].to_uppercase(), &id[1..]);
            assert_eq!(anchor.label(), expected);
        }
    }

    #[test]
    fn test_header_order() {
        let ids = Anchor::ALL.map(Anchor::id);
        assert_eq!(ids, ["home", "projects", "skills", "about", "contact"]);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_scroll_is_noop_without_document() {
        assert!(!scroll_to_id("missing"));
        assert!(!scroll_to(Anchor::About));
    }
}
