// collapsible question/answer unit
//
// every panel owns its own flag; there is no accordion behaviour, so any number
// of panels may be expanded at once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Collapsed => "+",
            Self::Expanded => "\u{2212}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosurePanel {
    question: String,
    answer: String,
    state: DisclosureState,
}

impl DisclosurePanel {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        DisclosurePanel {
            question: question.into(),
            answer: answer.into(),
            state: DisclosureState::default(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn toggle(&mut self) -> DisclosureState {
        self.state = self.state.toggled();
        self.state
    }

    // the answer is only part of the rendered output while expanded
    pub fn visible_answer(&self) -> Option<&str> {
        match self.state {
            DisclosureState::Expanded => Some(&self.answer),
            DisclosureState::Collapsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<DisclosurePanel> {
        (0..4)
            .map(|i| DisclosurePanel::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn starts_collapsed_without_answer() {
        let panel = DisclosurePanel::new("Who?", "Them.");

        assert_eq!(panel.state(), DisclosureState::Collapsed);
        assert_eq!(panel.visible_answer(), None);
        assert_eq!(panel.state().indicator(), "+");
    }

    #[test]
    fn toggle_reveals_then_hides() {
        let mut panel = DisclosurePanel::new("Who?", "Them.");

        assert_eq!(panel.toggle(), DisclosureState::Expanded);
        assert_eq!(panel.visible_answer(), Some("Them."));
        assert_eq!(panel.state().indicator(), "\u{2212}");

        assert_eq!(panel.toggle(), DisclosureState::Collapsed);
        assert_eq!(panel.visible_answer(), None);
    }

    #[test]
    fn siblings_are_independent() {
        let mut panels = panels();

        for target in 0..panels.len() {
            let before: Vec<_> = panels.iter().map(|p| p.state()).collect();
            panels[target].toggle();

            for (i, panel) in panels.iter().enumerate() {
                if i == target {
                    assert_ne!(panel.state(), before[i]);
                } else {
                    assert_eq!(panel.state(), before[i]);
                }
            }
        }

        // every panel was toggled once, so all are open at the same time
        assert!(panels.iter().all(|p| p.state().is_expanded()));
    }
}
