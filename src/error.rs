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

//! Failure conditions reported by the session.
//!
//! Every operation on a [`Session`](crate::session::Session) resolves its
//! failures locally and hands them back as one of these values. None of them
//! are fatal; the command layer renders each one and carries on.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by playback, moderation and search operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    #[error("Video does not exist")]
    NotFound,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No videos available")]
    CatalogEmpty,

    #[error("No search results for {term}")]
    NoResults { term: String },
}

/// Failures raised by playlist management.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("Playlist name cannot contain whitespace")]
    InvalidName,

    #[error("A playlist with the same name already exists")]
    AlreadyExists,

    #[error("Playlist does not exist")]
    NotFound,

    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,
}

/// Failures while building a video catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("line {line}: expected `title | video_id | tags`")]
    Malformed { line: usize },

    #[error("line {line}: duplicate video id `{id}`")]
    DuplicateId { line: usize, id: String },

    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A line typed at the prompt that does not map to a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0} takes no arguments")]
    UnexpectedArguments(String),
}
