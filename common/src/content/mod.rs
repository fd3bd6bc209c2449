use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::SectionId;

mod bishnoi;
mod haxxyverse;

pub use bishnoi::BISHNOI;
pub use haxxyverse::HAXXYVERSE;

// which of the two sites is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteVariant {
    #[default]
    Bishnoi,
    Haxxyverse,
}

impl SiteVariant {
    pub fn content(self) -> &'static SiteContent {
        match self {
            Self::Bishnoi => &BISHNOI,
            Self::Haxxyverse => &HAXXYVERSE,
        }
    }

    // root class used to pick the accent palette
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Bishnoi => "site-bishnoi",
            Self::Haxxyverse => "site-haxxyverse",
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content().name)
    }
}

// static records
//
// everything below is authored as constants and never changes during a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Division {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootsCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub cta: &'static str,
    pub target: SectionId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub kind: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub role: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Office {
    pub region: &'static str,
    pub city: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub lead: &'static str,
    pub primary_cta: NavEntry,
    pub secondary_cta: NavEntry,
    pub image_url: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct About {
    pub heading: &'static str,
    pub body: &'static str,
    pub values: &'static [&'static str],
    pub leaders_heading: &'static str,
    pub leaders: &'static [Leader],
    pub leaders_note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roots {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: &'static [RootsCard],
    pub timeline: &'static [TimelineEntry],
    pub faqs: &'static [Faq],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Careers {
    pub intro: &'static str,
    pub jobs: &'static [Job],
    pub perks_heading: &'static str,
    pub perks: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub offices: &'static [Office],
    pub partnership_note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footer {
    pub blurb: &'static str,
    pub explore: &'static [NavEntry],
    pub legal: &'static [&'static str],
    pub emails: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub name: &'static str,
    pub brand: &'static str,
    pub brand_suffix: &'static str,
    pub tagline: &'static str,
    pub nav: &'static [NavEntry],
    pub hero: Hero,
    pub stats: &'static [Stat],
    pub about: About,
    pub roots: Roots,
    pub divisions_heading: &'static str,
    pub divisions: &'static [Division],
    pub division_pills: &'static [&'static str],
    pub news_heading: &'static str,
    pub news: &'static [NewsItem],
    pub careers: Careers,
    pub contact: Contact,
    pub footer: Footer,
    // only the second site ships the off-canvas menu
    pub mobile_menu: bool,
}

impl SiteContent {
    // every section a navigation entry or card in this site can point at
    #[cfg(test)]
    pub fn nav_targets(&self) -> Vec<SectionId> {
        let mut targets = Vec::new();

        let all = self
            .nav
            .iter()
            .chain(self.footer.explore.iter())
            .map(|entry| entry.target)
            .chain([self.hero.primary_cta.target, self.hero.secondary_cta.target])
            .chain(self.roots.cards.iter().map(|card| card.target));

        for target in all {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bishnoi_content_counts() {
        let site = SiteVariant::Bishnoi.content();

        assert_eq!(site.nav.len(), 7);
        assert_eq!(site.stats.len(), 4);
        assert_eq!(site.divisions.len(), 5);
        assert_eq!(site.roots.cards.len(), 3);
        assert_eq!(site.roots.timeline.len(), 3);
        assert_eq!(site.roots.faqs.len(), 4);
        assert_eq!(site.news.len(), 3);
        assert_eq!(site.careers.jobs.len(), 3);
        assert!(!site.mobile_menu);
    }

    #[test]
    fn haxxyverse_has_mobile_menu() {
        let site = SiteVariant::Haxxyverse.content();

        assert!(site.mobile_menu);
        assert!(!site.divisions.is_empty());
        assert!(!site.careers.jobs.is_empty());
    }

    #[test]
    fn division_ids_are_unique() {
        for variant in [SiteVariant::Bishnoi, SiteVariant::Haxxyverse] {
            let site = variant.content();
            let ids: HashSet<_> = site.divisions.iter().map(|d| d.id).collect();
            assert_eq!(ids.len(), site.divisions.len(), "{variant}");
        }
    }

    #[test]
    fn header_covers_home_and_contact() {
        for variant in [SiteVariant::Bishnoi, SiteVariant::Haxxyverse] {
            let targets = variant.content().nav_targets();
            assert!(targets.contains(&SectionId::Home), "{variant}");
            assert!(targets.contains(&SectionId::Contact), "{variant}");
        }
    }

    #[test]
    fn variant_names() {
        assert_eq!(SiteVariant::Bishnoi.to_string(), "Bishnoi Omniverse");
        assert_eq!(SiteVariant::Haxxyverse.to_string(), "Haxxyverse");
        assert_eq!(SiteVariant::default(), SiteVariant::Bishnoi);
    }
}
