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

//! End-to-end scenarios against the public session API.

use clipdeck::{
    PlaylistError, Session, Video, VideoError, VideoLibrary,
    player::PlaybackStatus,
};

fn cat_catalog() -> VideoLibrary {
    VideoLibrary::new(vec![
        Video::new("Amazing Cat Video", "V1", ["cat", "video"]),
        Video::new("Another Cat Video", "V2", ["cat"]),
    ])
    .unwrap()
}

fn session() -> Session {
    Session::with_seed(cat_catalog(), 42)
}

#[test]
fn flagged_video_stays_listed_but_leaves_search() {
    let mut session = session();

    session.create_playlist("cats").unwrap();
    session.add_to_playlist("cats", "V1").unwrap();
    session.play("V1").unwrap();

    let outcome = session.flag("V1", Some("spam")).unwrap();
    assert_eq!(outcome.stopped.unwrap().id, "V1");
    assert_eq!(session.status(), PlaybackStatus::Stopped);

    let shown = session.show_playlist("cats").unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].video.id, "V1");
    assert_eq!(shown[0].flag.as_deref(), Some("spam"));

    let results = session.search_videos_with_tag("cat").unwrap();
    let ids: Vec<&str> = results.videos().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["V2"]);

    let listed = session.show_all_videos();
    assert!(listed.iter().any(|e| e.video.id == "V1" && e.flag.is_some()));

    for _ in 0..10 {
        assert_eq!(session.play_random().unwrap().playing.id, "V2");
    }
}

#[test]
fn missing_playlist_and_invalid_name() {
    let mut session = session();

    assert_eq!(session.show_playlist("x"), Err(PlaylistError::NotFound));
    assert_eq!(session.create_playlist("x y"), Err(PlaylistError::InvalidName));
    assert!(session.list_playlists().is_empty());
}

#[test]
fn play_replaces_current_video() {
    let mut session = session();

    session.play("V1").unwrap();
    let outcome = session.play("V2").unwrap();

    assert_eq!(outcome.stopped.unwrap().id, "V1");
    assert!(matches!(session.status(), PlaybackStatus::Playing(v) if v.id == "V2"));
}

#[test]
fn flagged_video_cannot_be_played_again() {
    let mut session = session();

    session.play("V2").unwrap();
    session.flag("V2", None).unwrap();

    assert_eq!(
        session.play("V2"),
        Err(VideoError::Flagged {
            reason: "Not supplied".to_string()
        })
    );
    assert_eq!(session.stop(), Err(VideoError::NothingPlaying));
}

#[test]
fn pause_twice_then_continue() {
    let mut session = session();
    session.play("V1").unwrap();

    session.pause().unwrap();
    assert_eq!(
        session.pause(),
        Err(VideoError::AlreadyPaused {
            title: "Amazing Cat Video".to_string()
        })
    );
    assert!(matches!(session.status(), PlaybackStatus::Paused(v) if v.id == "V1"));

    session.resume().unwrap();
    assert_eq!(session.resume(), Err(VideoError::NotPaused));
}

#[test]
fn playlist_names_stay_unique_across_create_and_delete() {
    let mut session = session();
    let names = ["Mix", "mix", "MIX", "other", "Other"];

    for round in 0..3 {
        for name in names {
            let _ = session.create_playlist(name);
        }

        let mut keys: Vec<String> = session
            .list_playlists()
            .iter()
            .map(|p| p.name().to_lowercase())
            .collect();
        let total = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 2);

        if round % 2 == 0 {
            session.delete_playlist("mIx").unwrap();
        }
    }
}
