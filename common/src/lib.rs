// shared behaviour and content for the omniverse sites
//
// nothing in this crate touches the DOM: the page boundary is expressed as the
// Viewport and ModeIndicator traits, which the webapp implements and the tests
// fake

pub mod config;
pub mod content;
pub mod disclosure;
pub mod menu;
pub mod nav;
pub mod section;
pub mod theme;
