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

//! Catalog search.
//!
//! A [`SearchQuery`] picks videos by title or by tag. The session applies the
//! moderation filter and hands back [`SearchResults`], ordered by title and
//! numbered from 1 so a caller can pick one by number.

use std::sync::Arc;

use crate::model::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: SearchField,
    pub term: String,
}

impl SearchQuery {
    pub fn for_title(term: impl Into<String>) -> Self {
        Self {
            field: SearchField::Title,
            term: term.into(),
        }
    }

    pub fn for_tag(tag: impl Into<String>) -> Self {
        Self {
            field: SearchField::Tag,
            term: tag.into(),
        }
    }

    pub fn matches(&self, video: &Video) -> bool {
        match self.field {
            SearchField::Title => video.title_contains(&self.term),
            SearchField::Tag => video.has_tag(&self.term),
        }
    }
}

/// Non-empty, title-ordered search hits.
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: SearchQuery,
    videos: Vec<Arc<Video>>,
}

impl SearchResults {
    /// Sorts the hits by title. The sort is stable, so equal titles keep
    /// catalog order.
    pub(crate) fn new(query: SearchQuery, mut videos: Vec<Arc<Video>>) -> Self {
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        Self { query, videos }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn videos(&self) -> &[Arc<Video>] {
        &self.videos
    }

    /// Hits paired with their 1-based number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Arc<Video>)> {
        self.videos.iter().enumerate().map(|(idx, v)| (idx + 1, v))
    }

    /// Resolves a typed answer to a hit.
    ///
    /// Anything that is not a number between 1 and the number of hits means
    /// no selection.
    pub fn select(&self, answer: &str) -> Option<&Arc<Video>> {
        let number: usize = answer.trim().parse().ok()?;
        number.checked_sub(1).and_then(|idx| self.videos.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> SearchResults {
        let videos = vec![
            Arc::new(Video::new("Zebra", "z", ["#animal"])),
            Arc::new(Video::new("Amazing Cats", "a", ["#cat"])),
            Arc::new(Video::new("Amazing Cats", "a2", ["#cat"])),
        ];
        SearchResults::new(SearchQuery::for_title("a"), videos)
    }

    #[test]
    fn hits_are_sorted_by_title_stably() {
        let results = results();
        let ids: Vec<&str> = results.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a2", "z"]);
    }

    #[test]
    fn numbering_starts_at_one() {
        let results = results();
        let numbers: Vec<usize> = results.numbered().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn select_accepts_only_valid_numbers() {
        let results = results();
        assert_eq!(results.select("1").unwrap().id, "a");
        assert_eq!(results.select(" 3 ").unwrap().id, "z");
        assert!(results.select("0").is_none());
        assert!(results.select("4").is_none());
        assert!(results.select("-1").is_none());
        assert!(results.select("two").is_none());
        assert!(results.select("").is_none());
    }

    #[test]
    fn query_matches_by_field() {
        let video = Video::new("Amazing Cats", "a", ["#cat"]);
        assert!(SearchQuery::for_title("CATS").matches(&video));
        assert!(!SearchQuery::for_title("#cat").matches(&video));
        assert!(SearchQuery::for_tag("#CAT").matches(&video));
        assert!(!SearchQuery::for_tag("cats").matches(&video));
    }
}
