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

//! Named playlists.
//!
//! A playlist keeps an ordered list of catalog videos with no repeats. Names
//! keep the case they were created with for display but are matched without
//! regard to case, so `Cats` and `cats` are the same playlist.

use std::{collections::BTreeMap, sync::Arc};

use crate::{error::PlaylistError, model::Video};

#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    videos: Vec<Arc<Video>>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            videos: Vec::new(),
        }
    }

    /// The name as originally supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn videos(&self) -> &[Arc<Video>] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v.id == id)
    }

    pub(crate) fn push(&mut self, video: Arc<Video>) -> Result<(), PlaylistError> {
        if self.contains(&video.id) {
            return Err(PlaylistError::AlreadyInPlaylist);
        }

        self.videos.push(video);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Arc<Video>> {
        let idx = self.videos.iter().position(|v| v.id == id)?;
        Some(self.videos.remove(idx))
    }

    pub(crate) fn clear(&mut self) {
        self.videos.clear();
    }
}

/// Checks that a name can be used for a new playlist.
pub fn validate_name(name: &str) -> Result<(), PlaylistError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(PlaylistError::InvalidName);
    }

    Ok(())
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

/// Every playlist in a session, keyed by lower-cased name.
#[derive(Debug, Default, Clone)]
pub struct PlaylistLibrary {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&key(name))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&key(name))
    }

    pub(crate) fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        validate_name(name)?;

        let key = key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::AlreadyExists);
        }

        let playlist: &Playlist = self.playlists.entry(key).or_insert_with(|| Playlist::new(name));
        Ok(playlist)
    }

    pub(crate) fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        self.playlists.remove(&key(name)).ok_or(PlaylistError::NotFound)
    }

    /// All playlists ordered by name ignoring case, then by the name as
    /// written.
    pub fn sorted(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| key(&a.name).cmp(&key(&b.name)).then_with(|| a.name.cmp(&b.name)));
        playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
