//! Loading, validation and export of site configuration documents.
//!
//! The built-in site is assembled in code, but alternate deployments can
//! describe the same structure in YAML. Either way the document passes
//! through [`validate_site`] before it is handed to the renderer as JSON.

use std::{collections::HashSet, fs, io, path::Path};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::{ROOT_LOCALE, SiteConfiguration},
    error::{self, Error},
};

/// Sidebar prefix that no navigation item in its locale points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct DeadSidebarPrefix
{
    /// Locale key owning the sidebar.
    pub locale: String,
    /// Unreachable sidebar path prefix.
    pub prefix: String,
}

/// Loads a site configuration from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the document violates the structural invariants checked
/// by [`validate_site`].
pub fn load_site(path: &Path,) -> Result<SiteConfiguration, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    debug!("Loaded site configuration from {}", path.display());
    parse_site(&contents,)
}

/// Parses a site configuration from a YAML document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when invariants are violated.
pub fn parse_site(contents: &str,) -> Result<SiteConfiguration, Error,>
{
    let site: SiteConfiguration = serde_yaml::from_str(contents,)?;
    validate_site(&site,)?;
    Ok(site,)
}

/// Checks the invariants the renderer relies on.
///
/// * the locale map contains [`ROOT_LOCALE`];
/// * every locale has a language tag and at least one navigation item;
/// * every navigation and sidebar link is non-blank;
/// * no two locales share a language tag.
///
/// Sidebar prefixes without a navigation entry are not an error here; see
/// [`find_dead_sidebar_prefixes`].
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) describing the first
/// violation found.
pub fn validate_site(site: &SiteConfiguration,) -> Result<(), Error,>
{
    if site.title.trim().is_empty() {
        return Err(Error::validation("site title must not be empty",),);
    }
    if site.root_locale().is_none() {
        return Err(Error::validation(format!("locale '{ROOT_LOCALE}' is required"),),);
    }

    let mut seen_tags = HashSet::with_capacity(site.locales.len(),);

    for (key, locale,) in &site.locales {
        if locale.language_tag.trim().is_empty() {
            return Err(Error::validation(format!("locale '{key}' has no language tag"),),);
        }
        if !seen_tags.insert(locale.language_tag.as_str(),) {
            return Err(Error::validation(format!(
                "duplicate language tag '{}'",
                locale.language_tag
            ),),);
        }
        if locale.navigation_items.is_empty() {
            return Err(Error::validation(format!(
                "locale '{key}' must include at least one navigation item"
            ),),);
        }
        if let Some(item,) = locale.navigation_items.iter().find(|item| item.link.trim().is_empty(),)
        {
            return Err(Error::validation(format!(
                "navigation item '{}' in locale '{key}' has no link",
                item.text
            ),),);
        }

        for (prefix, groups,) in &locale.sidebar_groups {
            let blank = groups
                .iter()
                .flat_map(|group| group.items.iter(),)
                .find(|item| item.link.trim().is_empty(),);
            if let Some(item,) = blank {
                return Err(Error::validation(format!(
                    "sidebar item '{}' under '{prefix}' in locale '{key}' has no link",
                    item.text
                ),),);
            }
        }
    }

    Ok((),)
}

/// Lists sidebar prefixes that would render as dead navigation.
pub fn find_dead_sidebar_prefixes(site: &SiteConfiguration,) -> Vec<DeadSidebarPrefix,>
{
    site.locales
        .iter()
        .flat_map(|(key, locale,)| {
            locale.dead_sidebar_prefixes().into_iter().map(move |prefix| DeadSidebarPrefix {
                locale: key.clone(),
                prefix: prefix.to_owned(),
            },)
        },)
        .collect()
}

/// Serializes the configuration in the renderer's JSON shape.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when encoding fails.
pub fn write_site_json<W: io::Write,>(
    writer: &mut W,
    site: &SiteConfiguration,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, site,)?;
    } else {
        serde_json::to_writer(writer, site,)?;
    }

    info!("Exported site configuration with {} locales", site.locales.len());
    Ok((),)
}
