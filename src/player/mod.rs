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

//! Playback state.
//!
//! This module models the single playback device of a session. The
//! [`PlaybackSlot`] holds at most one video and whether it is paused, and
//! enforces the play, stop, pause and continue transitions between
//! [`PlayerState`]s.

use std::sync::Arc;

use tracing::debug;

use crate::{error::VideoError, model::Video};

/// Represents the current playback status of the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Snapshot of the slot for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing(Arc<Video>),
    Paused(Arc<Video>),
}

/// Result of starting a video, including whatever it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<Arc<Video>>,
    pub playing: Arc<Video>,
}

#[derive(Debug, Default, Clone)]
pub struct PlaybackSlot {
    current: Option<Arc<Video>>,
    paused: bool,
}

impl PlaybackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        match self.current {
            None => PlayerState::Stopped,
            Some(_) if self.paused => PlayerState::Paused,
            Some(_) => PlayerState::Playing,
        }
    }

    pub fn current(&self) -> Option<&Arc<Video>> {
        self.current.as_ref()
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|v| v.id == id)
    }

    pub fn status(&self) -> PlaybackStatus {
        match &self.current {
            None => PlaybackStatus::Stopped,
            Some(video) if self.paused => PlaybackStatus::Paused(Arc::clone(video)),
            Some(video) => PlaybackStatus::Playing(Arc::clone(video)),
        }
    }

    /// Starts a video, stopping any video already in the slot.
    ///
    /// Playing always succeeds; eligibility is checked by the caller.
    pub(crate) fn play(&mut self, video: Arc<Video>) -> PlayOutcome {
        let stopped = self.stop().ok();

        debug!(id = %video.id, "Playing video");
        self.current = Some(Arc::clone(&video));
        self.paused = false;

        PlayOutcome {
            stopped,
            playing: video,
        }
    }

    pub(crate) fn stop(&mut self) -> Result<Arc<Video>, VideoError> {
        let video = self.current.take().ok_or(VideoError::NothingPlaying)?;
        self.paused = false;

        debug!(id = %video.id, "Stopped video");
        Ok(video)
    }

    pub(crate) fn pause(&mut self) -> Result<Arc<Video>, VideoError> {
        let video = self.current.as_ref().ok_or(VideoError::NothingPlaying)?;

        if self.paused {
            return Err(VideoError::AlreadyPaused {
                title: video.title.clone(),
            });
        }

        self.paused = true;
        debug!(id = %video.id, "Paused video");
        Ok(Arc::clone(video))
    }

    pub(crate) fn resume(&mut self) -> Result<Arc<Video>, VideoError> {
        let video = self.current.as_ref().ok_or(VideoError::NothingPlaying)?;

        if !self.paused {
            return Err(VideoError::NotPaused);
        }

        self.paused = false;
        debug!(id = %video.id, "Continued video");
        Ok(Arc::clone(video))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Arc<Video> {
        Arc::new(Video::new(format!("Title {id}"), id, ["#tag"]))
    }

    #[test]
    fn starts_stopped() {
        let slot = PlaybackSlot::new();
        assert_eq!(slot.state(), PlayerState::Stopped);
        assert_eq!(slot.status(), PlaybackStatus::Stopped);
        assert!(slot.current().is_none());
    }

    #[test]
    fn play_replaces_current_video() {
        let mut slot = PlaybackSlot::new();

        let first = slot.play(video("a"));
        assert!(first.stopped.is_none());

        let second = slot.play(video("b"));
        assert_eq!(second.stopped.unwrap().id, "a");
        assert_eq!(second.playing.id, "b");
        assert!(slot.is_current("b"));
        assert_eq!(slot.state(), PlayerState::Playing);
    }

    #[test]
    fn play_clears_pause() {
        let mut slot = PlaybackSlot::new();
        slot.play(video("a"));
        slot.pause().unwrap();

        slot.play(video("b"));
        assert_eq!(slot.state(), PlayerState::Playing);
    }

    #[test]
    fn stop_requires_a_video() {
        let mut slot = PlaybackSlot::new();
        assert_eq!(slot.stop(), Err(VideoError::NothingPlaying));

        slot.play(video("a"));
        slot.pause().unwrap();
        assert_eq!(slot.stop().unwrap().id, "a");
        assert_eq!(slot.state(), PlayerState::Stopped);
        assert_eq!(slot.stop(), Err(VideoError::NothingPlaying));
    }

    #[test]
    fn second_pause_is_rejected_without_change() {
        let mut slot = PlaybackSlot::new();
        assert_eq!(slot.pause(), Err(VideoError::NothingPlaying));

        slot.play(video("a"));
        assert_eq!(slot.pause().unwrap().id, "a");
        assert_eq!(
            slot.pause(),
            Err(VideoError::AlreadyPaused {
                title: "Title a".to_string()
            })
        );
        assert_eq!(slot.state(), PlayerState::Paused);
        assert_eq!(slot.status(), PlaybackStatus::Paused(video("a")));
    }

    #[test]
    fn resume_only_from_paused() {
        let mut slot = PlaybackSlot::new();
        assert_eq!(slot.resume(), Err(VideoError::NothingPlaying));

        slot.play(video("a"));
        assert_eq!(slot.resume(), Err(VideoError::NotPaused));

        slot.pause().unwrap();
        assert_eq!(slot.resume().unwrap().id, "a");
        assert_eq!(slot.state(), PlayerState::Playing);
    }
}
