use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{content::SiteVariant, nav::ScrollNavigator};

// site configuration
//
// every field has a default, so an empty [config] table yields the first site
// with the stock header offset
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub variant: SiteVariant,

    // pixels reserved for the sticky header when scrolling to a section
    pub header_offset: f64,

    // one of TRACE, DEBUG, INFO, WARN, ERROR
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            variant: SiteVariant::default(),
            header_offset: ScrollNavigator::DEFAULT_HEADER_OFFSET,
            log_level: String::from("INFO"),
        }
    }
}

impl SiteConfig {
    pub fn navigator(&self) -> ScrollNavigator {
        ScrollNavigator::new(self.header_offset)
    }

    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow::Error::msg(format!("invalid log level: {}", self.log_level)))
    }

    fn validate(self) -> Result<Self> {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(anyhow::Error::msg(format!(
                "header_offset must be a non-negative number, got {}",
                self.header_offset
            )));
        }

        self.level()?;

        Ok(self)
    }
}

// the config table is a subtable of the root node, so that the file can grow
// other tables later without breaking this one
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)?;
    let config = data.config.validate()?;

    debug!(variant = %config.variant, "successfully parsed site config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let config = parse_config(
            r#"
            [config]
            variant = "Haxxyverse"
            header_offset = 72.0
            log_level = "DEBUG"
            "#,
        )
        .unwrap();

        assert_eq!(config.variant, SiteVariant::Haxxyverse);
        assert_eq!(config.header_offset, 72.0);
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.navigator().header_offset(), 72.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config("[config]\n").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.variant, SiteVariant::Bishnoi);
        assert_eq!(config.header_offset, 96.0);
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(parse_config("").is_err());
        assert!(parse_config("[config]\nvariant = \"Elsewhere\"\n").is_err());
        assert!(parse_config("[config]\nheader_offset = -4.0\n").is_err());
        assert!(parse_config("[config]\nlog_level = \"LOUD\"\n").is_err());
    }

    #[test]
    fn embedded_site_file_parses() {
        let doc = include_str!("../../webapp/site.toml");
        assert!(parse_config(doc).is_ok());
    }
}
