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

//! Session controller.
//!
//! A [`Session`] owns all mutable state for one user: the moderation ledger,
//! the playlists and the playback slot. It consults its [`VideoCatalog`] to
//! resolve identifiers and returns every result, including failures, as data.

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    error::{PlaylistError, VideoError},
    model::{
        Video,
        catalog::{VideoCatalog, VideoLibrary},
        moderation::ModerationLedger,
        playlist::{Playlist, PlaylistLibrary},
        search::{SearchQuery, SearchResults},
    },
    player::{PlayOutcome, PlaybackSlot, PlaybackStatus},
};

/// A video together with its flag reason, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedVideo {
    pub video: Arc<Video>,
    pub flag: Option<String>,
}

/// Result of flagging a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: Arc<Video>,
    pub reason: String,
    /// Set when the flagged video was in the playback slot.
    pub stopped: Option<Arc<Video>>,
}

/// Owns the moderation ledger, the playlists and the playback slot of one
/// user, resolving video identifiers through a [`VideoCatalog`].
pub struct Session<C: VideoCatalog = VideoLibrary> {
    catalog: C,
    ledger: ModerationLedger,
    playlists: PlaylistLibrary,
    slot: PlaybackSlot,
    rng: StdRng,
}

impl<C: VideoCatalog> Session<C> {
    /// Creates an empty session over `catalog` with a randomly seeded
    /// generator for random play.
    pub fn new(catalog: C) -> Self {
        Self::with_seed(catalog, rand::random())
    }

    /// Creates a session whose random play is reproducible.
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self {
            catalog,
            ledger: ModerationLedger::new(),
            playlists: PlaylistLibrary::new(),
            slot: PlaybackSlot::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of videos in the catalog, flagged ones included.
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video, flagged ones included, sorted by title then id.
    pub fn show_all_videos(&self) -> Vec<ListedVideo> {
        let mut videos = self.catalog.all_videos();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        videos.into_iter().map(|v| self.listed(v)).collect()
    }

    fn listed(&self, video: Arc<Video>) -> ListedVideo {
        let flag = self.ledger.reason(&video.id).map(str::to_string);
        ListedVideo { video, flag }
    }

    /// Catalog videos that may appear in search results and random play.
    fn discoverable(&self) -> Vec<Arc<Video>> {
        self.catalog
            .all_videos()
            .into_iter()
            .filter(|v| self.ledger.is_discoverable(v))
            .collect()
    }

    fn flagged(&self, id: &str) -> Option<String> {
        self.ledger.reason(id).map(str::to_string)
    }

    // Playback

    /// Plays a video, stopping whatever was in the slot.
    ///
    /// # Arguments
    ///
    /// * `id` - The exact identifier of a catalog video.
    ///
    /// # Errors
    ///
    /// [`VideoError::NotFound`] for an unknown identifier, then
    /// [`VideoError::Flagged`] if the video is flagged.
    pub fn play(&mut self, id: &str) -> Result<PlayOutcome, VideoError> {
        let video = self.catalog.lookup(id).ok_or(VideoError::NotFound)?;

        if let Some(reason) = self.flagged(id) {
            return Err(VideoError::Flagged { reason });
        }

        Ok(self.slot.play(video))
    }

    /// Stops the current video, paused or not, and returns it.
    ///
    /// # Errors
    ///
    /// [`VideoError::NothingPlaying`] if the slot is empty.
    pub fn stop(&mut self) -> Result<Arc<Video>, VideoError> {
        self.slot.stop()
    }

    /// Plays a video picked uniformly from those that are not flagged.
    ///
    /// # Errors
    ///
    /// [`VideoError::CatalogEmpty`] if no unflagged video exists.
    pub fn play_random(&mut self) -> Result<PlayOutcome, VideoError> {
        let candidates = self.discoverable();
        let video = candidates
            .choose(&mut self.rng)
            .cloned()
            .ok_or(VideoError::CatalogEmpty)?;

        debug!(id = %video.id, candidates = candidates.len(), "Picked random video");
        Ok(self.slot.play(video))
    }

    /// Pauses the current video.
    ///
    /// # Errors
    ///
    /// [`VideoError::NothingPlaying`] if the slot is empty and
    /// [`VideoError::AlreadyPaused`] if it is already paused, leaving the
    /// state unchanged.
    pub fn pause(&mut self) -> Result<Arc<Video>, VideoError> {
        self.slot.pause()
    }

    /// Continues a paused video.
    ///
    /// # Errors
    ///
    /// [`VideoError::NothingPlaying`] if the slot is empty and
    /// [`VideoError::NotPaused`] if the video is playing.
    pub fn resume(&mut self) -> Result<Arc<Video>, VideoError> {
        self.slot.resume()
    }

    /// What the slot holds right now.
    pub fn status(&self) -> PlaybackStatus {
        self.slot.status()
    }

    // Moderation

    /// Flags a video, stopping it first if it is in the playback slot.
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> Result<FlagOutcome, VideoError> {
        let video = self.catalog.lookup(id).ok_or(VideoError::NotFound)?;
        let reason = self.ledger.flag(id, reason)?.to_string();

        let stopped = if self.slot.is_current(id) {
            self.slot.stop().ok()
        } else {
            None
        };

        debug!(%id, %reason, stopped = stopped.is_some(), "Flagged video");
        Ok(FlagOutcome {
            video,
            reason,
            stopped,
        })
    }

    /// Removes the flag from a video.
    ///
    /// # Errors
    ///
    /// [`VideoError::NotFound`] for an unknown identifier, then
    /// [`VideoError::NotFlagged`] if the video carries no flag.
    pub fn allow(&mut self, id: &str) -> Result<Arc<Video>, VideoError> {
        let video = self.catalog.lookup(id).ok_or(VideoError::NotFound)?;
        self.ledger.allow(id)?;

        debug!(%id, "Removed flag");
        Ok(video)
    }

    // Playlists

    /// Creates an empty playlist, keeping `name` as typed for display.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::InvalidName`] for an empty name or one containing
    /// whitespace, then [`PlaylistError::AlreadyExists`] if a playlist of
    /// that name exists ignoring case.
    pub fn create_playlist(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.playlists.create(name)?;

        debug!(%name, "Created playlist");
        Ok(())
    }

    /// Appends a video to the end of a playlist.
    ///
    /// # Arguments
    ///
    /// * `name` - The playlist name, matched ignoring case.
    /// * `id` - The exact identifier of a catalog video.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`PlaylistError::NotFound`],
    /// [`PlaylistError::VideoNotFound`], [`PlaylistError::Flagged`] and
    /// [`PlaylistError::AlreadyInPlaylist`].
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<Arc<Video>, PlaylistError> {
        if self.playlists.get(name).is_none() {
            return Err(PlaylistError::NotFound);
        }

        let video = self.catalog.lookup(id).ok_or(PlaylistError::VideoNotFound)?;

        if let Some(reason) = self.flagged(id) {
            return Err(PlaylistError::Flagged { reason });
        }

        let playlist = self.playlists.get_mut(name).ok_or(PlaylistError::NotFound)?;
        playlist.push(Arc::clone(&video))?;

        debug!(playlist = %name, %id, "Added video to playlist");
        Ok(video)
    }

    /// Removes a video from a playlist and returns it.
    ///
    /// # Arguments
    ///
    /// * `name` - The playlist name, matched ignoring case.
    /// * `id` - The exact identifier of a catalog video.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`PlaylistError::NotFound`],
    /// [`PlaylistError::VideoNotFound`] for an identifier unknown to the
    /// catalog and [`PlaylistError::NotInPlaylist`].
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Result<Arc<Video>, PlaylistError> {
        if self.playlists.get(name).is_none() {
            return Err(PlaylistError::NotFound);
        }

        if self.catalog.lookup(id).is_none() {
            return Err(PlaylistError::VideoNotFound);
        }

        let playlist = self.playlists.get_mut(name).ok_or(PlaylistError::NotFound)?;
        let video = playlist.remove(id).ok_or(PlaylistError::NotInPlaylist)?;

        debug!(playlist = %name, %id, "Removed video from playlist");
        Ok(video)
    }

    /// Empties a playlist; the playlist itself remains.
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.playlists
            .get_mut(name)
            .ok_or(PlaylistError::NotFound)?
            .clear();

        debug!(%name, "Cleared playlist");
        Ok(())
    }

    /// Deletes a playlist and returns it.
    pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        let playlist = self.playlists.delete(name)?;

        debug!(%name, "Deleted playlist");
        Ok(playlist)
    }

    /// All playlists, ordered by name ignoring case.
    pub fn list_playlists(&self) -> Vec<&Playlist> {
        self.playlists.sorted()
    }

    /// The videos of a playlist in insertion order, each with its flag.
    ///
    /// Flagged videos are listed; an empty playlist yields an empty list.
    pub fn show_playlist(&self, name: &str) -> Result<Vec<ListedVideo>, PlaylistError> {
        let playlist = self.playlists.get(name).ok_or(PlaylistError::NotFound)?;

        Ok(playlist
            .videos()
            .iter()
            .map(|v| self.listed(Arc::clone(v)))
            .collect())
    }

    // Search

    /// Runs a query over the unflagged videos.
    ///
    /// # Errors
    ///
    /// [`VideoError::NoResults`] when nothing matches.
    pub fn search(&self, query: SearchQuery) -> Result<SearchResults, VideoError> {
        let hits: Vec<Arc<Video>> = self
            .discoverable()
            .into_iter()
            .filter(|v| query.matches(v))
            .collect();

        debug!(term = %query.term, field = ?query.field, hits = hits.len(), "Searched catalog");

        if hits.is_empty() {
            return Err(VideoError::NoResults { term: query.term });
        }

        Ok(SearchResults::new(query, hits))
    }

    /// Videos whose title contains `term`, ignoring case.
    pub fn search_videos(&self, term: &str) -> Result<SearchResults, VideoError> {
        self.search(SearchQuery::for_title(term))
    }

    /// Videos carrying `tag`, ignoring case.
    pub fn search_videos_with_tag(&self, tag: &str) -> Result<SearchResults, VideoError> {
        self.search(SearchQuery::for_tag(tag))
    }
}
