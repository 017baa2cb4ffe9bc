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

//! Video catalog.
//!
//! The catalog is the read-only source of [`Video`] records for a session. It
//! is consulted by identifier for every play, flag and playlist operation and
//! enumerated in full for listings, searches and random play.
//!
//! # Catalog file format
//!
//! A catalog file holds one video per line:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! The tag column is optional. Blank lines are skipped.

use std::{collections::HashSet, fs, path::Path, sync::Arc};

use tracing::debug;

use crate::{error::CatalogError, model::Video};

/// Read access to a set of videos.
pub trait VideoCatalog {
    /// Looks up a video by its exact identifier.
    fn lookup(&self, id: &str) -> Option<Arc<Video>>;

    /// Every video in the catalog, in no particular order.
    fn all_videos(&self) -> Vec<Arc<Video>>;

    fn len(&self) -> usize {
        self.all_videos().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const BUILTIN_CATALOG: &[(&str, &str, &[&str])] = &[
    ("Funny Dogs", "funny_dogs_video_id", &["#dog", "#animal"]),
    ("Amazing Cats", "amazing_cats_video_id", &["#cat", "#animal"]),
    ("Another Cat Video", "another_cat_video_id", &["#cat", "#animal"]),
    ("Life at Google", "life_at_google_video_id", &["#google", "#career"]),
    ("Video about nothing", "nothing_video_id", &[]),
];

/// In-memory catalog, kept in load order.
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: Vec<Arc<Video>>,
}

impl VideoLibrary {
    /// Builds a catalog from a list of videos.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two videos share an
    /// identifier, where `line` is the 1-based position of the second one.
    pub fn new(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for (idx, video) in videos.iter().enumerate() {
            if !seen.insert(video.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    line: idx + 1,
                    id: video.id.clone(),
                });
            }
        }

        Ok(Self {
            videos: videos.into_iter().map(Arc::new).collect(),
        })
    }

    /// The catalog compiled into the binary, used when no file is configured.
    pub fn builtin() -> Self {
        let videos = BUILTIN_CATALOG
            .iter()
            .map(|(title, id, tags)| Arc::new(Video::new(*title, *id, tags.iter().copied())))
            .collect();

        Self { videos }
    }

    /// Parses catalog text in the `title | video_id | tags` format.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for a line without a title and an
    /// identifier, and [`CatalogError::DuplicateId`] for a repeated
    /// identifier.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut videos = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let video = parse_line(raw).ok_or(CatalogError::Malformed { line })?;
            if !seen.insert(video.id.clone()) {
                return Err(CatalogError::DuplicateId { line, id: video.id });
            }

            videos.push(Arc::new(video));
        }

        Ok(Self { videos })
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let library = Self::parse(&text)?;
        debug!(path = %path.display(), videos = library.videos.len(), "Loaded catalog");

        Ok(library)
    }
}

fn parse_line(raw: &str) -> Option<Video> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();

    let (title, id, tags) = match parts.as_slice() {
        [title, id] => (*title, *id, ""),
        [title, id, tags] => (*title, *id, *tags),
        _ => return None,
    };

    if title.is_empty() || id.is_empty() {
        return None;
    }

    let tags = tags.split(',').map(str::trim).filter(|t| !t.is_empty());

    Some(Video::new(title, id, tags))
}

impl VideoCatalog for VideoLibrary {
    fn lookup(&self, id: &str) -> Option<Arc<Video>> {
        self.videos.iter().find(|v| v.id == id).cloned()
    }

    fn all_videos(&self) -> Vec<Arc<Video>> {
        self.videos.clone()
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_lines_with_and_without_tags() {
        let library = VideoLibrary::parse(
            "Funny Dogs | funny_dogs_video_id | #dog , #animal\n\
             \n\
             Video about nothing | nothing_video_id |\n\
             Bare | bare_id\n",
        )
        .unwrap();

        assert_eq!(library.len(), 3);

        let dogs = library.lookup("funny_dogs_video_id").unwrap();
        assert_eq!(dogs.title, "Funny Dogs");
        assert_eq!(dogs.tags, vec!["#dog", "#animal"]);

        assert!(library.lookup("nothing_video_id").unwrap().tags.is_empty());
        assert!(library.lookup("bare_id").unwrap().tags.is_empty());
    }

    #[test]
    fn blank_text_is_an_empty_catalog() {
        let library = VideoLibrary::parse("\n   \n").unwrap();
        assert!(library.is_empty());
        assert!(!VideoLibrary::builtin().is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = VideoLibrary::parse("Good | good_id |\njust a title\n").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: 2 }));

        let err = VideoLibrary::parse(" | missing_title | #x").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: 1 }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = VideoLibrary::parse("A | same |\nB | same |\n").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { line: 2, ref id } if id == "same"));

        let err = VideoLibrary::new(vec![
            Video::new("A", "same", Vec::<String>::new()),
            Video::new("B", "same", Vec::<String>::new()),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { line: 2, .. }));
    }

    #[test]
    fn lookup_is_exact() {
        let library = VideoLibrary::builtin();
        assert!(library.lookup("amazing_cats_video_id").is_some());
        assert!(library.lookup("AMAZING_CATS_VIDEO_ID").is_none());
        assert!(library.lookup("amazing_cats").is_none());
    }

    #[test]
    fn lookup_shares_the_catalog_record() {
        let library = VideoLibrary::builtin();
        let a = library.lookup("funny_dogs_video_id").unwrap();
        let b = library.lookup("funny_dogs_video_id").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Amazing Cats | cats_id | #cat").unwrap();
        writeln!(file, "Funny Dogs | dogs_id | #dog").unwrap();

        let library = VideoLibrary::load(file.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.lookup("dogs_id").unwrap().title, "Funny Dogs");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VideoLibrary::load(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
