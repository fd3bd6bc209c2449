use tracing::{debug, instrument};

use crate::section::SectionId;

// Viewport
//
// the document boundary: find a section and move the viewport.  offsets are in
// document coordinates (pixels from the top of the page)
pub trait Viewport {
    // None when the current view does not contain the section
    fn section_top(&self, id: SectionId) -> Option<f64>;

    // starts a smooth scroll; a later call retargets any scroll still in flight
    fn scroll_to(&mut self, top: f64);
}

// ScrollNavigator
//
// every navigation action on the page goes through go_to().  the header offset
// keeps the section heading from sliding underneath the sticky header
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollNavigator {
    header_offset: f64,
}

impl ScrollNavigator {
    pub const DEFAULT_HEADER_OFFSET: f64 = 96.0;

    pub fn new(header_offset: f64) -> Self {
        ScrollNavigator { header_offset }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    // a missing section is a silent no-op, not an error
    #[instrument(level = "debug", skip(self, viewport))]
    pub fn go_to<V: Viewport + ?Sized>(&self, viewport: &mut V, id: SectionId) {
        match viewport.section_top(id) {
            Some(top) => {
                let target = (top - self.header_offset).max(0.0);
                debug!(offset = target, "scrolling to section");
                viewport.scroll_to(target);
            }
            None => debug!("section not present in view, ignoring"),
        }
    }

    #[cfg(test)]
    pub fn go_to_str<V: Viewport + ?Sized>(&self, viewport: &mut V, id: &str) {
        match id.parse::<SectionId>() {
            Ok(id) => self.go_to(viewport, id),
            Err(err) => debug!("ignoring navigation: {err}"),
        }
    }
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        ScrollNavigator::new(Self::DEFAULT_HEADER_OFFSET)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    // a page with fixed section positions that records every scroll request
    #[derive(Default)]
    pub(crate) struct FakePage {
        pub sections: HashMap<SectionId, f64>,
        pub position: f64,
        pub scrolls: Vec<f64>,
    }

    impl FakePage {
        pub(crate) fn with_sections(sections: &[(SectionId, f64)]) -> Self {
            FakePage {
                sections: sections.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakePage {
        fn section_top(&self, id: SectionId) -> Option<f64> {
            self.sections.get(&id).copied()
        }

        fn scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
            self.position = top;
        }
    }

    fn page() -> FakePage {
        FakePage::with_sections(&[
            (SectionId::Home, 0.0),
            (SectionId::About, 900.0),
            (SectionId::Contact, 4200.0),
        ])
    }

    #[test]
    fn aligns_section_under_header() {
        let mut page = page();
        ScrollNavigator::default().go_to(&mut page, SectionId::About);

        assert_eq!(page.position, 900.0 - ScrollNavigator::DEFAULT_HEADER_OFFSET);
    }

    #[test]
    fn never_scrolls_above_the_page() {
        let mut page = page();
        page.position = 500.0;
        ScrollNavigator::default().go_to(&mut page, SectionId::Home);

        assert_eq!(page.position, 0.0);
    }

    #[test]
    fn last_call_wins() {
        let mut page = page();
        let nav = ScrollNavigator::new(0.0);
        nav.go_to(&mut page, SectionId::Home);
        nav.go_to(&mut page, SectionId::Contact);

        assert_eq!(page.position, 4200.0);
        assert_eq!(page.scrolls, vec![0.0, 4200.0]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let mut page = page();
        page.position = 1234.0;
        let nav = ScrollNavigator::default();

        nav.go_to(&mut page, SectionId::Careers);
        nav.go_to_str(&mut page, "does-not-exist");

        assert_eq!(page.position, 1234.0);
        assert!(page.scrolls.is_empty());
    }

    #[test]
    fn string_ids_navigate() {
        let mut page = page();
        ScrollNavigator::new(0.0).go_to_str(&mut page, "contact");

        assert_eq!(page.scrolls, vec![4200.0]);
    }
}
