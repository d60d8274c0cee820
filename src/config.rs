//! Site configuration document types.
//!
//! The types mirror the shape the static-site renderer consumes: a
//! locale-independent section plus a locale map keyed by `root` and the
//! additional locale prefixes. Field names serialize in the renderer's
//! camelCase form; the longer descriptive names are accepted as aliases when
//! a document is loaded from YAML.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Locale key acting as the default language of the site.
pub const ROOT_LOCALE: &str = "root";

/// Root configuration object handed to the site renderer.
///
/// # Examples
///
/// ```
/// use pastemd_site::SiteConfiguration;
///
/// let yaml = r#"
/// title: PasteMD
/// locales:
///   root:
///     label: 简体中文
///     lang: zh-CN
///     nav:
///       - text: 指南
///         link: /guide/introduction
/// "#;
/// let site: SiteConfiguration = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert!(site.root_locale().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration
{
    /// Site title shown in the header and the document title suffix.
    pub title: String,

    /// Extra tags injected into every page's `<head>`.
    #[serde(default)]
    pub head: Vec<HeadEntry,>,

    /// Show the last-updated timestamp of each page.
    #[serde(default, alias = "last_updated")]
    pub last_updated: bool,

    /// Serve pages without the `.html` suffix.
    #[serde(default, alias = "clean_urls")]
    pub clean_urls: bool,

    /// Tolerate links to pages that do not exist.
    #[serde(default, alias = "ignore_dead_links")]
    pub ignore_dead_links: bool,

    /// Header icon shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String,>,

    /// Links rendered as icons on the right of the navigation bar.
    #[serde(default, alias = "social_links")]
    pub social_links: Vec<SocialLink,>,

    /// Search provider settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig,>,

    /// Per-locale configuration keyed by locale prefix.
    pub locales: BTreeMap<String, LocaleConfig,>,
}

impl SiteConfiguration
{
    /// Returns the default-language configuration.
    pub fn root_locale(&self,) -> Option<&LocaleConfig,>
    {
        self.locales.get(ROOT_LOCALE,)
    }

    /// Returns the configuration for `key`, which may be [`ROOT_LOCALE`].
    pub fn locale(&self, key: &str,) -> Option<&LocaleConfig,>
    {
        self.locales.get(key,)
    }
}

/// One language variant of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig
{
    /// Name displayed in the language switcher.
    pub label: String,

    /// BCP 47 language tag, e.g. `zh-CN`.
    #[serde(rename = "lang", alias = "language_tag", alias = "languageTag")]
    pub language_tag: String,

    /// Meta description of the locale's pages.
    #[serde(default)]
    pub description: String,

    /// Ordered top navigation items.
    #[serde(default, rename = "nav", alias = "navigation_items", alias = "navigationItems")]
    pub navigation_items: Vec<NavItem,>,

    /// Sidebar groups keyed by the URL path prefix they apply to.
    #[serde(default, rename = "sidebar", alias = "sidebar_groups", alias = "sidebarGroups")]
    pub sidebar_groups: BTreeMap<String, Vec<SidebarGroup,>,>,

    /// Footer shown at the bottom of home and content pages.
    #[serde(default)]
    pub footer: Footer,

    /// Localized UI labels keyed by renderer label key.
    #[serde(
        default,
        rename = "translations",
        alias = "translation_strings",
        alias = "translationStrings"
    )]
    pub translation_strings: BTreeMap<String, String,>,
}

impl LocaleConfig
{
    /// Looks up a localized UI label.
    pub fn translate(&self, key: &str,) -> Option<&str,>
    {
        self.translation_strings.get(key,).map(String::as_str,)
    }

    /// Sidebar prefixes that no navigation item points into.
    ///
    /// A prefix is reachable when a navigation target equals it (with or
    /// without the trailing slash) or starts with it.
    pub fn dead_sidebar_prefixes(&self,) -> Vec<&str,>
    {
        self.sidebar_groups
            .keys()
            .filter(|prefix| {
                let bare = prefix.trim_end_matches('/',);
                !self.navigation_items.iter().any(|item| {
                    item.link.starts_with(prefix.as_str(),) || item.link == bare
                },)
            },)
            .map(String::as_str,)
            .collect()
    }
}

/// Link with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct NavItem
{
    /// Text shown for the link.
    #[serde(alias = "label")]
    pub text: String,
    /// Path or absolute URL the link points to.
    #[serde(alias = "target")]
    pub link: String,
}

impl NavItem
{
    /// Creates a link item.
    pub fn new(text: &str, link: &str,) -> Self
    {
        Self {
            text: text.to_owned(), link: link.to_owned(),
        }
    }

    /// Returns `true` when the link leaves the site.
    pub fn is_external(&self,) -> bool
    {
        self.link.starts_with("http://",) || self.link.starts_with("https://",)
    }
}

/// Named, ordered collection of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct SidebarGroup
{
    /// Group heading.
    #[serde(alias = "name")]
    pub text:      String,
    /// Whether the group can be collapsed, and its initial state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool,>,
    /// Links in display order.
    #[serde(default)]
    pub items:     Vec<NavItem,>,
}

/// Footer text of a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct Footer
{
    /// License or attribution message.
    #[serde(default)]
    pub message:   String,
    /// Copyright line.
    #[serde(default)]
    pub copyright: String,
}

/// Icon link in the navigation bar, e.g. to the source repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct SocialLink
{
    /// Icon identifier understood by the renderer (`github`, `discord`, ...).
    pub icon: String,
    /// Link target.
    pub link: String,
}

/// `[tag, attributes]` pair injected into the page head.
///
/// Serializes as a two-element array, the form the renderer expects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct HeadEntry(pub String, pub BTreeMap<String, String,>,);

impl HeadEntry
{
    /// Creates a head entry from a tag name and attribute pairs.
    pub fn new(tag: &str, attributes: &[(&str, &str,)],) -> Self
    {
        Self(
            tag.to_owned(),
            attributes.iter().map(|(key, value,)| ((*key).to_owned(), (*value).to_owned(),),).collect(),
        )
    }

    /// HTML tag name.
    pub fn tag(&self,) -> &str
    {
        &self.0
    }

    /// Attribute value for `key`.
    pub fn attribute(&self, key: &str,) -> Option<&str,>
    {
        self.1.get(key,).map(String::as_str,)
    }
}

/// Search provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct SearchConfig
{
    /// Provider implementation.
    pub provider: SearchProvider,
    /// UI string overrides, only for the locales that need them.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locales:  BTreeMap<String, SearchLocale,>,
}

/// Search providers supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum SearchProvider
{
    /// In-browser index built at render time.
    Local,
    /// Hosted Algolia DocSearch.
    Algolia,
}

/// Search UI strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct SearchLocale
{
    /// Label key (dotted path such as `modal.noResultsText`) to text.
    #[serde(default)]
    pub translations: BTreeMap<String, String,>,
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn locale_with(nav: &[(&str, &str,)], prefixes: &[&str],) -> LocaleConfig
    {
        LocaleConfig {
            label:               "English".to_owned(),
            language_tag:        "en-US".to_owned(),
            description:         String::new(),
            navigation_items:    nav.iter().map(|(text, link,)| NavItem::new(text, link,),).collect(),
            sidebar_groups:      prefixes
                .iter()
                .map(|prefix| {
                    ((*prefix).to_owned(), vec![SidebarGroup {
                        text:      "Group".to_owned(),
                        collapsed: None,
                        items:     vec![NavItem::new("Page", &format!("{prefix}page"),)],
                    }],)
                },)
                .collect(),
            footer:              Footer::default(),
            translation_strings: BTreeMap::new(),
        }
    }

    #[test]
    fn dead_sidebar_prefixes_accepts_nested_and_bare_targets()
    {
        let locale = locale_with(
            &[("Guide", "/en/guide/introduction",), ("Config", "/en/config",)],
            &["/en/guide/", "/en/config/"],
        );
        assert!(locale.dead_sidebar_prefixes().is_empty());
    }

    #[test]
    fn dead_sidebar_prefixes_reports_unreachable_groups()
    {
        let locale = locale_with(&[("Guide", "/guide/introduction",)], &["/guide/", "/api/"],);
        assert_eq!(locale.dead_sidebar_prefixes(), vec!["/api/"]);
    }

    #[test]
    fn locale_deserializes_descriptive_aliases()
    {
        let yaml = r#"
            label: English
            languageTag: en-US
            navigationItems:
              - label: Guide
                target: /en/guide/introduction
            sidebarGroups:
              /en/guide/:
                - name: Start
                  items:
                    - text: Introduction
                      link: /en/guide/introduction
            translationStrings:
              outline.label: On this page
        "#;

        let locale: LocaleConfig = serde_yaml::from_str(yaml,).expect("expected locale to parse",);
        assert_eq!(locale.language_tag, "en-US");
        assert_eq!(locale.navigation_items, vec![NavItem::new("Guide", "/en/guide/introduction")]);
        assert_eq!(locale.sidebar_groups["/en/guide/"][0].text, "Start");
        assert_eq!(locale.translate("outline.label"), Some("On this page"));
        assert_eq!(locale.footer, Footer::default());
    }

    #[test]
    fn locale_serializes_renderer_field_names()
    {
        let locale = locale_with(&[("Guide", "/guide/introduction",)], &["/guide/"],);
        let value = serde_json::to_value(&locale,).expect("serialization failed",);

        assert_eq!(value["lang"], "en-US");
        assert_eq!(value["nav"][0]["link"], "/guide/introduction");
        assert_eq!(value["sidebar"]["/guide/"][0]["items"][0]["link"], "/guide/page");
        assert!(value["sidebar"]["/guide/"][0].get("collapsed").is_none());
        assert!(value.get("navigationItems").is_none());
    }

    #[test]
    fn head_entry_serializes_as_tag_attribute_pair()
    {
        let entry = HeadEntry::new("link", &[("rel", "icon",), ("href", "/logo.svg",)],);
        assert_eq!(entry.tag(), "link");
        assert_eq!(entry.attribute("href"), Some("/logo.svg"));

        let json = serde_json::to_string(&entry,).expect("serialization failed",);
        assert_eq!(json, r#"["link",{"href":"/logo.svg","rel":"icon"}]"#);
    }

    #[test]
    fn search_provider_uses_snake_case()
    {
        let config: SearchConfig =
            serde_yaml::from_str("provider: local",).expect("expected search config to parse",);
        assert_eq!(config.provider, SearchProvider::Local);
        assert!(config.locales.is_empty());
    }

    #[test]
    fn nav_item_detects_external_links()
    {
        assert!(NavItem::new("Releases", "https://github.com/RichQAQ/PasteMD/releases").is_external());
        assert!(!NavItem::new("Guide", "/guide/introduction").is_external());
    }
}
