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

/// Formats a tag list the way it is shown next to a video, e.g. `[#cat #animal]`.
///
/// # Examples
///
/// ```
/// use clipdeck::util::format::format_tags;
///
/// assert_eq!(format_tags(&["#cat".to_string(), "#animal".to_string()]), "[#cat #animal]");
/// assert_eq!(format_tags(&[]), "[]");
/// ```
pub fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(" "))
}

/// Formats the suffix appended to a flagged video.
pub fn format_flag(reason: &str) -> String {
    format!(" - FLAGGED (reason: {reason})")
}
