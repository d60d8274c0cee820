// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Layout slots of the renderer's page shell.

use std::collections::BTreeMap;

use crate::badge::MountedBadge;

/// Slot rendered once per page right after the primary navigation content.
pub const NAV_BAR_CONTENT_AFTER: &str = "nav-bar-content-after";

/// Content that can fill a layout slot.
pub trait SlotContent
{
    /// Markup for the slot's current state.
    fn render(&self,) -> String;
}

impl SlotContent for MountedBadge
{
    fn render(&self,) -> String
    {
        MountedBadge::render(self,)
    }
}

/// Named layout slots and their contents.
#[derive(Default,)]
pub struct Theme
{
    slots: BTreeMap<&'static str, Box<dyn SlotContent,>,>,
}

impl Theme
{
    /// Theme with `badge` registered in [`NAV_BAR_CONTENT_AFTER`].
    pub fn with_star_badge(badge: MountedBadge,) -> Self
    {
        let mut theme = Self::default();
        theme.register(NAV_BAR_CONTENT_AFTER, badge,);
        theme
    }

    /// Places `content` into `slot`, replacing and unmounting any previous
    /// content.
    pub fn register<S,>(&mut self, slot: &'static str, content: S,)
    where
        S: SlotContent + 'static,
    {
        self.slots.insert(slot, Box::new(content,),);
    }

    /// Renders the content of `slot`, or `None` when the slot is empty.
    pub fn render_slot(&self, slot: &str,) -> Option<String,>
    {
        self.slots.get(slot,).map(|content| content.render(),)
    }

    /// Names of the occupied slots in sorted order.
    pub fn slots(&self,) -> impl Iterator<Item = &'static str,> + '_
    {
        self.slots.keys().copied()
    }
}

impl std::fmt::Debug for Theme
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("Theme",).field("slots", &self.slots.keys().collect::<Vec<_,>>(),).finish()
    }
}
