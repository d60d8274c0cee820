// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Navigation bar widget showing a repository's star count.
//!
//! Mounting a [`StarBadge`] renders a placeholder immediately and spawns one
//! background fetch. The fetch writes into a single-assignment cell, guarded
//! by a mount flag so a response that arrives after the widget was
//! unmounted is dropped. Every failure leaves the placeholder in place.

use std::{
    borrow::Cow,
    fmt::Write as _,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError}
};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    error::StarFetchError,
    stars::{RepositoryClient, RepositoryRef, StarCount, fetch_star_count, format_stars}
};

/// Glyph shown while the star count is unknown.
pub const PLACEHOLDER: &str = "\u{2014}";

const STAR_LABEL: &str = "Star";

/// Factory for mounted star badges bound to one repository and client.
#[derive(Debug)]
pub struct StarBadge<C> {
    client:     Arc<C>,
    repository: RepositoryRef
}

impl<C> Clone for StarBadge<C> {
    fn clone(&self) -> Self {
        Self {
            client:     Arc::clone(&self.client),
            repository: self.repository.clone()
        }
    }
}

impl<C: RepositoryClient> StarBadge<C> {
    /// Creates a badge for `repository` that fetches through `client`.
    pub fn new(client: Arc<C>, repository: RepositoryRef) -> Self {
        Self {
            client,
            repository
        }
    }

    /// Repository whose stars are displayed.
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Mounts a fresh widget instance.
    ///
    /// The returned badge starts in [`StarCount::Unknown`] and exactly one
    /// metadata request is spawned on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn mount(&self) -> MountedBadge {
        let state = StarState::default();
        let alive = Arc::new(Liveness::new());

        let task = tokio::spawn(run_fetch(
            Arc::clone(&self.client),
            self.repository.clone(),
            state.clone(),
            Arc::clone(&alive)
        ));

        MountedBadge {
            repository: self.repository.clone(),
            state,
            alive,
            task: Some(task)
        }
    }
}

/// Shared single-assignment cell holding a badge's star count.
#[derive(Debug, Clone, Default)]
pub struct StarState {
    cell: Arc<OnceLock<u64>>
}

impl StarState {
    /// Current display state.
    pub fn count(&self) -> StarCount {
        self.cell
            .get()
            .map_or(StarCount::Unknown, |count| StarCount::Known(*count))
    }

    /// Stores `count` unless a value is already present. Returns `true` when
    /// the value was stored.
    fn assign(&self, count: u64) -> bool {
        self.cell.set(count).is_ok()
    }
}

/// Mount flag shared between a badge and its fetch task.
///
/// Checking the flag and writing the count happen under the same lock, so an
/// unmount either precedes the write entirely or follows it.
#[derive(Debug)]
struct Liveness {
    mounted: Mutex<bool>
}

impl Liveness {
    fn new() -> Self {
        Self {
            mounted: Mutex::new(true)
        }
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.mounted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_mounted(&self) -> bool {
        *self.lock()
    }

    fn end(&self) {
        *self.lock() = false;
    }

    /// Stores `count` while still mounted. Returns `None` after unmount,
    /// otherwise whether the cell accepted the value.
    fn commit(&self, state: &StarState, count: u64) -> Option<bool> {
        let mounted = self.lock();
        if !*mounted {
            return None;
        }
        Some(state.assign(count))
    }
}

/// Result of a badge's background fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The count was stored and is now displayed.
    Applied(u64),
    /// The fetch failed; the placeholder stays.
    Absorbed(StarFetchError),
    /// The widget was unmounted before the response arrived.
    Discarded
}

async fn run_fetch<C: RepositoryClient>(
    client: Arc<C>,
    repository: RepositoryRef,
    state: StarState,
    alive: Arc<Liveness>
) -> FetchOutcome {
    match fetch_star_count(client.as_ref(), &repository).await {
        Ok(count) => match alive.commit(&state, count) {
            Some(stored) => {
                if stored {
                    debug!("Star count for {} is {}", repository, count);
                }
                FetchOutcome::Applied(count)
            }
            None => {
                debug!("Dropping star count for {} after unmount", repository);
                FetchOutcome::Discarded
            }
        },
        Err(_) if !alive.is_mounted() => FetchOutcome::Discarded,
        Err(error) => {
            debug!("Keeping star placeholder for {}: {}", repository, error);
            FetchOutcome::Absorbed(error)
        }
    }
}

/// A mounted badge instance.
///
/// Dropping the value unmounts it.
#[derive(Debug)]
pub struct MountedBadge {
    repository: RepositoryRef,
    state:      StarState,
    alive:      Arc<Liveness>,
    task:       Option<JoinHandle<FetchOutcome>>
}

impl MountedBadge {
    /// Current display state.
    pub fn count(&self) -> StarCount {
        self.state.count()
    }

    /// Handle on the state cell, usable after the badge is unmounted.
    pub fn state(&self) -> StarState {
        self.state.clone()
    }

    /// Text shown in the count slot: the placeholder or the formatted count.
    pub fn count_label(&self) -> Cow<'static, str> {
        match self.count() {
            StarCount::Unknown => Cow::Borrowed(PLACEHOLDER),
            StarCount::Known(count) => Cow::Owned(format_stars(count))
        }
    }

    /// Renders the badge markup for the navigation bar.
    pub fn render(&self) -> String {
        build_badge_markup(&self.repository.html_url(), &self.count_label())
    }

    /// Waits for the background fetch to finish.
    ///
    /// Returns `None` when the outcome was already collected or the task
    /// did not complete.
    pub async fn settled(&mut self) -> Option<FetchOutcome> {
        let task = self.task.take()?;
        task.await.ok()
    }

    /// Unmounts the widget. The background fetch is not cancelled; its
    /// result is discarded when it arrives. The returned handle may be
    /// awaited or dropped.
    pub fn unmount(mut self) -> Option<JoinHandle<FetchOutcome>> {
        self.alive.end();
        self.task.take()
    }
}

impl Drop for MountedBadge {
    fn drop(&mut self) {
        self.alive.end();
    }
}

fn build_badge_markup(href: &str, count: &str) -> String {
    let mut buffer = String::with_capacity(320);
    let _ = write!(
        buffer,
        "<a class=\"nav-bar-github-stars\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\" aria-label=\"GitHub Stars\">",
        escape_xml(href)
    );
    let _ = write!(
        buffer,
        "<span class=\"nav-bar-github-stars-label\" aria-hidden=\"true\">{}</span>",
        escape_xml(STAR_LABEL)
    );
    let _ = write!(
        buffer,
        "<span class=\"nav-bar-github-stars-count\">{}</span></a>",
        escape_xml(count)
    );
    buffer
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}
