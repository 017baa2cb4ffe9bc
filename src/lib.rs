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

//! # Video catalogue and playlist simulator.
//!
//! An in-memory model of a small video service: a fixed catalog of videos, a
//! single "now playing" slot with pause state, named playlists and per-video
//! moderation flags.
//!
//! ## Architecture
//!
//! * [`model`]: videos, the catalog, playlists, the moderation ledger and
//!   search queries.
//! * [`player`]: the playback slot state machine.
//! * [`session`]: the controller that owns all state and exposes every
//!   operation, returning failures as [`error`] values.
//! * [`commander`] and [`render`]: the command prompt that drives a session
//!   and turns its results into text.

pub mod commander;
pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod render;
pub mod session;
pub mod util;

pub use error::{CatalogError, CommandError, PlaylistError, VideoError};
pub use model::{
    Video,
    catalog::{VideoCatalog, VideoLibrary},
};
pub use session::Session;
