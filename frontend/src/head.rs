use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    /// The identifying attribute pair, e.g. `("property", "og:title")`.
    pub fn attribute(self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(name) => ("name", name),
            MetaKey::Property(property) => ("property", property),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

/// Document title plus the description and Open Graph tags used by crawlers
/// and link previews.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_url: String,
    pub og_type: String,
}

impl PageMeta {
    pub fn from_config(config: &SiteConfig, site_url: &str) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            og_title: config.og_title.clone(),
            og_url: site_url.to_string(),
            og_type: config.og_type.clone(),
        }
    }

    pub fn tags(&self) -> Vec<MetaTag> {
        let tag = |key, content: &str| MetaTag {
            key,
            content: content.to_string(),
        };
        vec![
            tag(MetaKey::Name("description"), &self.description),
            tag(MetaKey::Property("og:title"), &self.og_title),
            tag(MetaKey::Property("og:description"), &self.description),
            tag(MetaKey::Property("og:url"), &self.og_url),
            tag(MetaKey::Property("og:type"), &self.og_type),
        ]
    }
}
