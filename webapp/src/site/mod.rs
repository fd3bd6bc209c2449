mod about;
mod careers;
mod contact;
mod divisions;
mod footer;
mod header;
mod hero;
mod layout;
mod menu;
mod news;
mod roots;

pub use about::AboutSection;
pub use careers::{CareersSection, JobList};
pub use contact::ContactSection;
pub use divisions::{DivisionGrid, DivisionsSection};
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use layout::{Pill, Section, StatCard};
pub use menu::MobileMenuPanel;
pub use news::{NewsList, NewsSection};
pub use roots::{FaqItem, RootsSection};

#[cfg(test)]
mod tests;
