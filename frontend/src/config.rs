use serde::Deserialize;

use crate::error::PageError;
use crate::reveal::RevealConfig;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://senstech.id"
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

const EMBEDDED_SITE: &str = include_str!("../site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_type: String,
    pub assets: Assets,
    pub reveal: RevealConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Assets {
    pub logo: String,
    pub hero_background: String,
    pub about_illustration: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Senstech".to_string(),
            description: String::new(),
            og_title: "Senstech".to_string(),
            og_type: "website".to_string(),
            assets: Assets::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            logo: "/images/main/logo.png".to_string(),
            hero_background: "/images/main/banner/hero.png".to_string(),
            about_illustration: "/images/main/banner/about.png".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))
    }

    /// The configuration compiled into the bundle from `site.json`.
    pub fn embedded() -> Result<Self, PageError> {
        Self::from_json(EMBEDDED_SITE)
    }
}
