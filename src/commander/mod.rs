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

//! Command-line input logic.
//!
//! This module implements the command prompt: it parses each typed line into
//! an [`AppCommand`], runs it against the [`Session`] and writes the rendered
//! result to a [`Console`]. After a search with results it reads one more
//! line, the number of the video to play.

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    error::{CommandError, VideoError},
    model::{catalog::VideoCatalog, search::SearchResults},
    render,
    session::Session,
};

const HELP: &[&str] = &[
    "Available commands:",
    "  NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
    "  SHOW_ALL_VIDEOS - Lists all videos from the library.",
    "  PLAY <video_id> - Plays specified video.",
    "  PLAY_RANDOM - Plays a random video from the library.",
    "  STOP - Stop the current video.",
    "  PAUSE - Pause the current video.",
    "  CONTINUE - Resume the current paused video.",
    "  SHOW_PLAYING - Displays the title, video_id and tags of the current video.",
    "  CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
    "  ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
    "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.",
    "  CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.",
    "  DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
    "  SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
    "  SHOW_ALL_PLAYLISTS - Display all the available playlists.",
    "  SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
    "  SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
    "  FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.",
    "  ALLOW_VIDEO <video_id> - Removes a flag from a video.",
    "  HELP - Displays help.",
    "  EXIT - Terminates the program execution.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, Option<String>),
    AllowVideo(String),
    Help,
    Exit,
}

impl AppCommand {
    /// Parses one typed line.
    ///
    /// Returns `Ok(None)` for a blank line. Keywords ignore case; arguments
    /// are taken as typed.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        let Some((keyword, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match (keyword.to_uppercase().as_str(), args) {
            ("NUMBER_OF_VIDEOS", []) => Self::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Self::ShowAllVideos,
            ("PLAY", [id]) => Self::Play(id.to_string()),
            ("PLAY", _) => return Err(CommandError::Usage("PLAY <video_id>")),
            ("PLAY_RANDOM", []) => Self::PlayRandom,
            ("STOP", []) => Self::Stop,
            ("PAUSE", []) => Self::Pause,
            ("CONTINUE", []) => Self::Continue,
            ("SHOW_PLAYING", []) => Self::ShowPlaying,

            // Joined so that a name with spaces reaches the session and is
            // rejected there.
            ("CREATE_PLAYLIST", [_, ..]) => Self::CreatePlaylist(args.join(" ")),
            ("CREATE_PLAYLIST", []) => {
                return Err(CommandError::Usage("CREATE_PLAYLIST <playlist_name>"));
            }
            ("ADD_TO_PLAYLIST", [name, id]) => Self::AddToPlaylist(name.to_string(), id.to_string()),
            ("ADD_TO_PLAYLIST", _) => {
                return Err(CommandError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"));
            }
            ("REMOVE_FROM_PLAYLIST", [name, id]) => {
                Self::RemoveFromPlaylist(name.to_string(), id.to_string())
            }
            ("REMOVE_FROM_PLAYLIST", _) => {
                return Err(CommandError::Usage("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>"));
            }
            ("CLEAR_PLAYLIST", [name]) => Self::ClearPlaylist(name.to_string()),
            ("CLEAR_PLAYLIST", _) => return Err(CommandError::Usage("CLEAR_PLAYLIST <playlist_name>")),
            ("DELETE_PLAYLIST", [name]) => Self::DeletePlaylist(name.to_string()),
            ("DELETE_PLAYLIST", _) => {
                return Err(CommandError::Usage("DELETE_PLAYLIST <playlist_name>"));
            }
            ("SHOW_PLAYLIST", [name]) => Self::ShowPlaylist(name.to_string()),
            ("SHOW_PLAYLIST", _) => return Err(CommandError::Usage("SHOW_PLAYLIST <playlist_name>")),
            ("SHOW_ALL_PLAYLISTS", []) => Self::ShowAllPlaylists,

            ("SEARCH_VIDEOS", [_, ..]) => Self::SearchVideos(args.join(" ")),
            ("SEARCH_VIDEOS", []) => return Err(CommandError::Usage("SEARCH_VIDEOS <search_term>")),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Self::SearchVideosWithTag(tag.to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", _) => {
                return Err(CommandError::Usage("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
            }

            ("FLAG_VIDEO", [id]) => Self::FlagVideo(id.to_string(), None),
            ("FLAG_VIDEO", [id, reason @ ..]) => {
                Self::FlagVideo(id.to_string(), Some(reason.join(" ")))
            }
            ("FLAG_VIDEO", []) => return Err(CommandError::Usage("FLAG_VIDEO <video_id> [flag_reason]")),
            ("ALLOW_VIDEO", [id]) => Self::AllowVideo(id.to_string()),
            ("ALLOW_VIDEO", _) => return Err(CommandError::Usage("ALLOW_VIDEO <video_id>")),

            ("HELP", _) => Self::Help,
            ("EXIT", _) => Self::Exit,

            (
                "NUMBER_OF_VIDEOS" | "SHOW_ALL_VIDEOS" | "PLAY_RANDOM" | "STOP" | "PAUSE" | "CONTINUE"
                | "SHOW_PLAYING" | "SHOW_ALL_PLAYLISTS",
                _,
            ) => return Err(CommandError::UnexpectedArguments(keyword.to_uppercase())),

            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

/// Line-based input and output for the command prompt.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Shows `prompt` and reads one line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Commander {
    prompt: String,
}

impl Commander {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Reads and runs commands until `EXIT` or end of input.
    pub fn run<C: VideoCatalog>(&self, session: &mut Session<C>, console: &mut impl Console) -> Result<()> {
        while let Some(line) = console.read_line(&self.prompt)? {
            if self.handle_line(session, &line, console)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Parses and runs a single line.
    pub fn handle_line<C: VideoCatalog>(
        &self,
        session: &mut Session<C>,
        line: &str,
        console: &mut impl Console,
    ) -> Result<Flow> {
        match AppCommand::parse(line) {
            Ok(Some(command)) => self.run_command(session, command, console),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                warn!(%line, error = %e, "Rejected command");
                console.write_line(&e.to_string())?;
                console.write_line("Type HELP for a list of available commands.")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn run_command<C: VideoCatalog>(
        &self,
        session: &mut Session<C>,
        command: AppCommand,
        console: &mut impl Console,
    ) -> Result<Flow> {
        debug!(?command, "Running command");

        let lines = match command {
            AppCommand::NumberOfVideos => render::number_of_videos(session.number_of_videos()),
            AppCommand::ShowAllVideos => render::all_videos(&session.show_all_videos()),
            AppCommand::Play(id) => render::play(&session.play(&id)),
            AppCommand::PlayRandom => render::play_random(&session.play_random()),
            AppCommand::Stop => render::stop(&session.stop()),
            AppCommand::Pause => render::pause(&session.pause()),
            AppCommand::Continue => render::resume(&session.resume()),
            AppCommand::ShowPlaying => render::status(&session.status()),

            AppCommand::CreatePlaylist(name) => {
                render::create_playlist(&name, &session.create_playlist(&name))
            }
            AppCommand::AddToPlaylist(name, id) => {
                render::add_to_playlist(&name, &session.add_to_playlist(&name, &id))
            }
            AppCommand::RemoveFromPlaylist(name, id) => {
                render::remove_from_playlist(&name, &session.remove_from_playlist(&name, &id))
            }
            AppCommand::ClearPlaylist(name) => {
                render::clear_playlist(&name, &session.clear_playlist(&name))
            }
            AppCommand::DeletePlaylist(name) => {
                render::delete_playlist(&name, &session.delete_playlist(&name))
            }
            AppCommand::ShowPlaylist(name) => render::show_playlist(&name, &session.show_playlist(&name)),
            AppCommand::ShowAllPlaylists => render::all_playlists(&session.list_playlists()),

            AppCommand::SearchVideos(term) => {
                let result = session.search_videos(&term);
                return self.offer_selection(session, result, console);
            }
            AppCommand::SearchVideosWithTag(tag) => {
                let result = session.search_videos_with_tag(&tag);
                return self.offer_selection(session, result, console);
            }

            AppCommand::FlagVideo(id, reason) => render::flag(&session.flag(&id, reason.as_deref())),
            AppCommand::AllowVideo(id) => render::allow(&session.allow(&id)),

            AppCommand::Help => HELP.iter().map(|l| l.to_string()).collect(),
            AppCommand::Exit => return Ok(Flow::Exit),
        };

        write_lines(console, &lines)?;
        Ok(Flow::Continue)
    }

    // Lists the hits, then plays the one whose number is typed back.
    fn offer_selection<C: VideoCatalog>(
        &self,
        session: &mut Session<C>,
        result: Result<SearchResults, VideoError>,
        console: &mut impl Console,
    ) -> Result<Flow> {
        write_lines(console, &render::search(&result))?;

        let Ok(results) = result else {
            return Ok(Flow::Continue);
        };

        let Some(answer) = console.read_line("")? else {
            return Ok(Flow::Exit);
        };

        if let Some(video) = results.select(&answer) {
            let id = video.id.clone();
            write_lines(console, &render::play(&session.play(&id)))?;
        }

        Ok(Flow::Continue)
    }
}

fn write_lines(console: &mut impl Console, lines: &[String]) -> Result<()> {
    for line in lines {
        console.write_line(line)?;
    }
    Ok(())
}
