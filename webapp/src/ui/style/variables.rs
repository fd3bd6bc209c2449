pub const CSS_VARIABLES: &str = r#"
.theme-light {
  /* Background and Surface Colors */
  --background-from: #FFFBEB;
  --background-via: #FFFFFF;
  --background-to: #ECFDF5;
  --surface: #FFFFFF;
  --surface-translucent: rgba(255, 255, 255, 0.7);
  --surface-muted: var(--neutral-50);
  --band: rgba(255, 255, 255, 0.6);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);

  /* Border Colors */
  --border: #F3F4F6;
  --border-strong: var(--neutral-300);

  /* Accents */
  --link: #4338CA;
  --link-hover: #312E81;
  --pill-bg: #ECFDF5;
  --pill-text: #047857;
  --pill-border: #A7F3D0;
  --timeline-bg: #FFFBEB;
  --timeline-border: #FDE68A;
  --timeline-year: #B45309;
  --perks-bg: #EEF2FF;
  --perks-border: #E0E7FF;
  --toggle-icon: var(--neutral-600);
}

.theme-dark {
  --background-from: #111827;
  --background-via: #1F2937;
  --background-to: #111827;
  --surface: #1F2937;
  --surface-translucent: rgba(17, 24, 39, 0.7);
  --surface-muted: #111827;
  --band: rgba(31, 41, 55, 0.6);

  --text-primary: #FFFFFF;
  --text-secondary: #D1D5DB;
  --text-tertiary: #9CA3AF;

  --border: #374151;
  --border-strong: #4B5563;

  --link: #818CF8;
  --link-hover: #A5B4FC;
  --pill-bg: rgba(6, 78, 59, 0.2);
  --pill-text: #6EE7B7;
  --pill-border: #065F46;
  --timeline-bg: rgba(120, 53, 15, 0.2);
  --timeline-border: #92400E;
  --timeline-year: #FBBF24;
  --perks-bg: rgba(49, 46, 129, 0.2);
  --perks-border: #3730A3;
  --toggle-icon: #EAB308;
}

.site-root {
  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Buttons keep the same indigo in both modes */
  --button: #4F46E5;
  --button-hover: #4338CA;

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 12px;
  --radius-lg: 16px;
  --radius-xl: 24px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Brand palettes */
.site-bishnoi {
  --brand-from: #F97316;
  --brand-via: #F59E0B;
  --brand-to: #16A34A;
  --dot-1: #F97316;
  --dot-3: #16A34A;
}

.site-haxxyverse {
  --brand-from: #22D3EE;
  --brand-via: #A855F7;
  --brand-to: #EC4899;
  --dot-1: #22D3EE;
  --dot-3: #EC4899;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    // custom property names declared in the first block for the selector
    fn declared(selector: &str) -> Vec<&'static str> {
        let start = CSS_VARIABLES
            .find(&format!("{selector} {{"))
            .unwrap_or_else(|| panic!("no block for {selector}"));
        let block = &CSS_VARIABLES[start..];
        let block = &block[..block.find('}').unwrap()];

        block
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("--"))
            .map(|line| line[2..line.find(':').unwrap()].trim())
            .collect()
    }

    #[test]
    fn dark_mode_defines_every_light_property() {
        let light = declared(".theme-light");
        let dark = declared(".theme-dark");
        let shared = declared(".site-root");

        let missing: Vec<_> = light
            .iter()
            .filter(|name| !dark.contains(*name) && !shared.contains(*name))
            .collect();

        assert!(!light.is_empty());
        assert!(missing.is_empty(), "undefined in dark mode: {missing:?}");
    }

    #[test]
    fn buttons_and_neutrals_are_mode_independent() {
        let shared = declared(".site-root");

        for name in ["button", "button-hover", "neutral-50", "neutral-900"] {
            assert!(shared.contains(&name), "{name}");
        }
    }
}
