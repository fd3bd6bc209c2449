use std::{fmt, str::FromStr};

// named, scrollable regions of the page
//
// the string form doubles as the DOM id of the region, so it must stay stable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Roots,
    RootsTimeline,
    Divisions,
    News,
    Careers,
    Contact,
}

impl SectionId {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::About,
            Self::Roots,
            Self::RootsTimeline,
            Self::Divisions,
            Self::News,
            Self::Careers,
            Self::Contact,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Roots => "roots",
            Self::RootsTimeline => "roots-timeline",
            Self::Divisions => "divisions",
            Self::News => "news",
            Self::Careers => "careers",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for id in SectionId::all() {
            assert_eq!(id.as_str().parse::<SectionId>().ok(), Some(id));
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!("does-not-exist".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }
}
