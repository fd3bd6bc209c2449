use std::fmt;

use tracing::debug;

// presentation mode
//
// a two-state machine: the only transition is toggled(), and the initial state
// (Default) is Light.  nothing here is persisted across sessions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    // class applied to the root view
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    // hover text for the toggle button, which describes the *next* mode
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

// ModeIndicator
//
// the presentation-side marker that reflects the current mode.  the controller
// calls apply() once at construction and again after every toggle, so an
// implementation never needs to read the controller back
pub trait ModeIndicator {
    fn apply(&mut self, mode: ThemeMode);
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeController<I: ModeIndicator> {
    mode: ThemeMode,
    indicator: I,
}

impl<I: ModeIndicator> ThemeController<I> {
    pub fn new(mut indicator: I) -> Self {
        let mode = ThemeMode::default();
        indicator.apply(mode);

        ThemeController { mode, indicator }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        debug!(mode = %self.mode, "theme toggled");

        self.indicator.apply(self.mode);
        self.mode
    }

    #[cfg(test)]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // records every mode it is told about
    #[derive(Default)]
    struct Recorder {
        applied: Vec<ThemeMode>,
    }

    impl ModeIndicator for Recorder {
        fn apply(&mut self, mode: ThemeMode) {
            self.applied.push(mode);
        }
    }

    #[test]
    fn starts_light_and_applies_on_mount() {
        let controller = ThemeController::new(Recorder::default());

        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.indicator().applied, vec![ThemeMode::Light]);
    }

    #[test]
    fn toggles_strictly_alternate() {
        let mut controller = ThemeController::new(Recorder::default());

        for n in 1..=9 {
            let mode = controller.toggle();
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(mode, expected, "after {n} toggles");
            assert_eq!(controller.mode(), expected);
        }
    }

    #[test]
    fn indicator_tracks_every_change() {
        let mut controller = ThemeController::new(Recorder::default());
        controller.toggle();
        controller.toggle();
        controller.toggle();

        assert_eq!(
            controller.indicator().applied,
            vec![
                ThemeMode::Light,
                ThemeMode::Dark,
                ThemeMode::Light,
                ThemeMode::Dark
            ]
        );
        assert_eq!(
            controller.indicator().applied.last(),
            Some(&controller.mode())
        );
    }

    #[test]
    fn presentation_strings() {
        assert_eq!(ThemeMode::Light.css_class(), "theme-light");
        assert_eq!(ThemeMode::Dark.css_class(), "theme-dark");
        assert_eq!(ThemeMode::Light.toggle_title(), "Switch to dark mode");
        assert_eq!(ThemeMode::Dark.toggle_title(), "Switch to light mode");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
