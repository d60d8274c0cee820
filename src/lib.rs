// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core of the PasteMD documentation site.
//!
//! The crate provides the locale-keyed site configuration consumed by the
//! static-site renderer, and the navigation bar badge that displays the
//! repository's GitHub star count. The two parts share no state: the
//! configuration is built once and read by the renderer, while each mounted
//! badge performs its own single best-effort metadata request.

mod badge;
mod config;
mod error;
mod loader;
mod pastemd;
mod stars;
mod theme;

pub use badge::{FetchOutcome, MountedBadge, PLACEHOLDER, StarBadge, StarState};
pub use config::{
    Footer, HeadEntry, LocaleConfig, NavItem, ROOT_LOCALE, SearchConfig, SearchLocale,
    SearchProvider, SidebarGroup, SiteConfiguration, SocialLink,
};
pub use error::{Error, StarFetchError, io_error};
pub use loader::{
    DeadSidebarPrefix, find_dead_sidebar_prefixes, load_site, parse_site, validate_site,
    write_site_json,
};
pub use pastemd::pastemd;
pub use stars::{
    DEFAULT_REPOSITORY, GitHubClient, RepositoryClient, RepositoryRef, RepositoryResponse,
    StarCount, extract_star_count, fetch_star_count, format_stars,
};
pub use theme::{NAV_BAR_CONTENT_AFTER, SlotContent, Theme};
