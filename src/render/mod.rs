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

//! Console rendering logic.
//!
//! This module turns session results into the lines printed at the prompt.
//! Each function takes the outcome of one command, success or failure, and
//! returns the lines to show for it. The session never formats text itself.

use std::sync::Arc;

use crate::{
    error::{PlaylistError, VideoError},
    model::{Video, playlist::Playlist, search::SearchResults},
    player::{PlayOutcome, PlaybackStatus},
    session::{FlagOutcome, ListedVideo},
    util::format::{format_flag, format_tags},
};

const INDENT: &str = "  ";

/// `Title (id) [tags]`
pub fn video_line(video: &Video) -> String {
    format!("{} ({}) {}", video.title, video.id, format_tags(&video.tags))
}

fn listed_line(entry: &ListedVideo) -> String {
    match &entry.flag {
        Some(reason) => format!("{}{}", video_line(&entry.video), format_flag(reason)),
        None => video_line(&entry.video),
    }
}

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{count} videos in the library")]
}

pub fn all_videos(entries: &[ListedVideo]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(entries.iter().map(|e| format!("{INDENT}{}", listed_line(e))));
    lines
}

fn play_lines(outcome: &PlayOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(stopped) = &outcome.stopped {
        lines.push(format!("Stopping video: {}", stopped.title));
    }
    lines.push(format!("Playing video: {}", outcome.playing.title));
    lines
}

pub fn play(result: &Result<PlayOutcome, VideoError>) -> Vec<String> {
    match result {
        Ok(outcome) => play_lines(outcome),
        Err(e) => vec![format!("Cannot play video: {e}")],
    }
}

pub fn play_random(result: &Result<PlayOutcome, VideoError>) -> Vec<String> {
    match result {
        Ok(outcome) => play_lines(outcome),
        Err(e) => vec![e.to_string()],
    }
}

pub fn stop(result: &Result<Arc<Video>, VideoError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Stopping video: {}", video.title)],
        Err(e) => vec![format!("Cannot stop video: {e}")],
    }
}

pub fn pause(result: &Result<Arc<Video>, VideoError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Pausing video: {}", video.title)],
        Err(e @ VideoError::AlreadyPaused { .. }) => vec![e.to_string()],
        Err(e) => vec![format!("Cannot pause video: {e}")],
    }
}

pub fn resume(result: &Result<Arc<Video>, VideoError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title)],
        Err(e) => vec![format!("Cannot continue video: {e}")],
    }
}

pub fn status(status: &PlaybackStatus) -> Vec<String> {
    match status {
        PlaybackStatus::Stopped => vec!["No video is currently playing".to_string()],
        PlaybackStatus::Playing(video) => vec![format!("Currently playing: {}", video_line(video))],
        PlaybackStatus::Paused(video) => {
            vec![format!("Currently playing: {} - PAUSED", video_line(video))]
        }
    }
}

pub fn flag(result: &Result<FlagOutcome, VideoError>) -> Vec<String> {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::new();
            if let Some(stopped) = &outcome.stopped {
                lines.push(format!("Stopping video: {}", stopped.title));
            }
            lines.push(format!(
                "Successfully flagged video: {} (reason: {})",
                outcome.video.title, outcome.reason
            ));
            lines
        }
        Err(e) => vec![format!("Cannot flag video: {e}")],
    }
}

pub fn allow(result: &Result<Arc<Video>, VideoError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Successfully removed flag from video: {}", video.title)],
        Err(e) => vec![format!("Cannot remove flag from video: {e}")],
    }
}

pub fn create_playlist(name: &str, result: &Result<(), PlaylistError>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully created new playlist: {name}")],
        Err(e) => vec![format!("Cannot create playlist: {e}")],
    }
}

pub fn add_to_playlist(name: &str, result: &Result<Arc<Video>, PlaylistError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Added video to {name}: {}", video.title)],
        Err(e) => vec![format!("Cannot add video to {name}: {e}")],
    }
}

pub fn remove_from_playlist(name: &str, result: &Result<Arc<Video>, PlaylistError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Removed video from {name}: {}", video.title)],
        Err(e) => vec![format!("Cannot remove video from {name}: {e}")],
    }
}

pub fn clear_playlist(name: &str, result: &Result<(), PlaylistError>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully removed all videos from {name}")],
        Err(e) => vec![format!("Cannot clear playlist {name}: {e}")],
    }
}

pub fn delete_playlist(name: &str, result: &Result<Playlist, PlaylistError>) -> Vec<String> {
    match result {
        Ok(_) => vec![format!("Deleted playlist: {name}")],
        Err(e) => vec![format!("Cannot delete playlist {name}: {e}")],
    }
}

pub fn all_playlists(playlists: &[&Playlist]) -> Vec<String> {
    if playlists.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }

    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(playlists.iter().map(|p| format!("{INDENT}{}", p.name())));
    lines
}

pub fn show_playlist(name: &str, result: &Result<Vec<ListedVideo>, PlaylistError>) -> Vec<String> {
    match result {
        Ok(entries) => {
            let mut lines = vec![format!("Showing playlist: {name}")];
            if entries.is_empty() {
                lines.push(format!("{INDENT}No videos here yet"));
            } else {
                lines.extend(entries.iter().map(|e| format!("{INDENT}{}", listed_line(e))));
            }
            lines
        }
        Err(e) => vec![format!("Cannot show playlist {name}: {e}")],
    }
}

/// Lists search hits and, when there are any, asks which one to play.
pub fn search(result: &Result<SearchResults, VideoError>) -> Vec<String> {
    match result {
        Ok(results) => {
            let mut lines = vec![format!("Here are the results for {}:", results.query().term)];
            lines.extend(
                results
                    .numbered()
                    .map(|(n, video)| format!("{INDENT}{n}) {}", video_line(video))),
            );
            lines.push(
                "Would you like to play any of the above? If yes, specify the number of the video."
                    .to_string(),
            );
            lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
            lines
        }
        Err(e) => vec![e.to_string()],
    }
}
