use constcat::concat;

mod components;
mod page;
mod variables;

pub use components::BASE_COMPONENTS;
pub use page::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

h1, h2, h3 {
  letter-spacing: -0.01em;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES
);
