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

//! Drives the command prompt with scripted input.

use std::collections::VecDeque;

use anyhow::Result;
use clipdeck::{
    Session, VideoLibrary,
    commander::{Commander, Console},
};

struct Script {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl Script {
    fn run(lines: &[&str]) -> Vec<String> {
        let mut script = Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        };

        let mut session = Session::with_seed(VideoLibrary::builtin(), 0);
        Commander::new("> ").run(&mut session, &mut script).unwrap();

        script.output
    }
}

impl Console for Script {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

#[test]
fn playlist_session() {
    let output = Script::run(&[
        "CREATE_PLAYLIST my_PLAYlist",
        "CREATE_PLAYLIST my_playlist",
        "ADD_TO_PLAYLIST MY_playlist amazing_cats_video_id",
        "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id",
        "FLAG_VIDEO amazing_cats_video_id dont_like_cats",
        "SHOW_PLAYLIST my_playlist",
        "SHOW_ALL_PLAYLISTS",
    ]);

    assert_eq!(
        output,
        vec![
            "Successfully created new playlist: my_PLAYlist",
            "Cannot create playlist: A playlist with the same name already exists",
            "Added video to MY_playlist: Amazing Cats",
            "Cannot add video to my_playlist: Video already added",
            "Successfully flagged video: Amazing Cats (reason: dont_like_cats)",
            "Showing playlist: my_playlist",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)",
            "Showing all playlists:",
            "  my_PLAYlist",
        ]
    );
}

#[test]
fn playback_session() {
    let output = Script::run(&[
        "PLAY amazing_cats_video_id",
        "PLAY funny_dogs_video_id",
        "PAUSE",
        "PAUSE",
        "SHOW_PLAYING",
        "CONTINUE",
        "CONTINUE",
        "FLAG_VIDEO funny_dogs_video_id",
        "STOP",
        "PLAY funny_dogs_video_id",
        "PLAY nope",
    ]);

    assert_eq!(
        output,
        vec![
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Playing video: Funny Dogs",
            "Pausing video: Funny Dogs",
            "Video already paused: Funny Dogs",
            "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED",
            "Continuing video: Funny Dogs",
            "Cannot continue video: Video is not paused",
            "Stopping video: Funny Dogs",
            "Successfully flagged video: Funny Dogs (reason: Not supplied)",
            "Cannot stop video: No video is currently playing",
            "Cannot play video: Video is currently flagged (reason: Not supplied)",
            "Cannot play video: Video does not exist",
        ]
    );
}

#[test]
fn listing_and_search_session() {
    let output = Script::run(&[
        "NUMBER_OF_VIDEOS",
        "FLAG_VIDEO nothing_video_id boring",
        "SHOW_ALL_VIDEOS",
        "SEARCH_VIDEOS nothing",
        "SEARCH_VIDEOS_WITH_TAG #CAT",
        "1",
    ]);

    assert_eq!(
        output,
        vec![
            "5 videos in the library",
            "Successfully flagged video: Video about nothing (reason: boring)",
            "Here's a list of all available videos:",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Video about nothing (nothing_video_id) [] - FLAGGED (reason: boring)",
            "No search results for nothing",
            "Here are the results for #CAT:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Amazing Cats",
        ]
    );
}
