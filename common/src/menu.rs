use tracing::debug;

use crate::{
    nav::{ScrollNavigator, Viewport},
    section::SectionId,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

// off-canvas navigation panel for narrow screens
//
// selecting an entry always leaves the menu closed, so the panel never covers
// the content that was just scrolled into view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    pub fn select<V: Viewport + ?Sized>(
        &mut self,
        navigator: &ScrollNavigator,
        viewport: &mut V,
        id: SectionId,
    ) {
        if self.is_open() {
            debug!(section = %id, "closing menu for navigation");
        }
        self.close();
        navigator.go_to(viewport, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::tests::FakePage;

    #[test]
    fn open_and_close() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.state(), MenuState::Closed);

        menu.open();
        assert!(menu.is_open());
        menu.open();
        assert!(menu.is_open());

        menu.close();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn selecting_closes_and_scrolls() {
        let mut page = FakePage::with_sections(&[(SectionId::Careers, 3000.0)]);
        let nav = ScrollNavigator::new(100.0);

        for id in SectionId::all() {
            let mut menu = MobileMenu::new();
            menu.open();
            menu.select(&nav, &mut page, id);
            assert_eq!(menu.state(), MenuState::Closed, "after selecting {id}");
        }

        // only the section that exists was scrolled to
        assert_eq!(page.scrolls, vec![2900.0]);
    }

    #[test]
    fn selecting_while_closed_still_navigates() {
        let mut page = FakePage::with_sections(&[(SectionId::Contact, 500.0)]);
        let mut menu = MobileMenu::new();

        menu.select(&ScrollNavigator::new(0.0), &mut page, SectionId::Contact);

        assert!(!menu.is_open());
        assert_eq!(page.position, 500.0);
    }
}
