// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Moderation ledger.
//!
//! Tracks which videos have been flagged and why. A flagged video is hidden
//! from discovery (search and random play) but can still be listed and looked
//! up directly.

use std::collections::HashMap;

use crate::{error::VideoError, model::Video};

/// Reason recorded when a video is flagged without one.
pub const REASON_NOT_SUPPLIED: &str = "Not supplied";

#[derive(Debug, Default, Clone)]
pub struct ModerationLedger {
    flagged: HashMap<String, String>,
}

impl ModerationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.flagged.contains_key(id)
    }

    pub fn reason(&self, id: &str) -> Option<&str> {
        self.flagged.get(id).map(String::as_str)
    }

    /// Whether a video may surface in search results and random play.
    ///
    /// This is the only visibility predicate; every discovery path goes
    /// through it.
    pub fn is_discoverable(&self, video: &Video) -> bool {
        !self.is_flagged(&video.id)
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Records a flag and returns the stored reason.
    ///
    /// A missing or blank reason is stored as [`REASON_NOT_SUPPLIED`].
    pub(crate) fn flag(&mut self, id: &str, reason: Option<&str>) -> Result<&str, VideoError> {
        if self.is_flagged(id) {
            return Err(VideoError::AlreadyFlagged);
        }

        let reason = match reason {
            Some(r) if !r.trim().is_empty() => r.to_string(),
            _ => REASON_NOT_SUPPLIED.to_string(),
        };

        Ok(self.flagged.entry(id.to_string()).or_insert(reason).as_str())
    }

    /// Removes a flag, returning the reason it was flagged with.
    pub(crate) fn allow(&mut self, id: &str) -> Result<String, VideoError> {
        self.flagged.remove(id).ok_or(VideoError::NotFlagged)
    }
}
