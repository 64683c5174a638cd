//! Gallery grouping and ordering
//!
//! Partitions a flat album list into named groups for display:
//! - `EVENT`: keyed by trimmed event name (`Miscellaneous` when blank),
//!   members ordered by name
//! - `DATE`: keyed by "<Month> <Year>" of the effective date (`No Date`
//!   when absent), members ordered newest first
//!
//! Group keys are always iterated in plain lexicographic order, so
//! `Miscellaneous` is not pinned last and month groups are alphabetical
//! ("April 2024" before "January 2024"). Sorting is stable: equal names or
//! equal dates keep their source order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use gallery_common::time::month_year_label;
use gallery_common::Album;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::api::SortMode;

/// Group key for albums without an event
pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Group key for albums without any date
pub const NO_DATE: &str = "No Date";

/// Group key → ordered albums, keys in lexicographic order
pub type GroupedAlbums<'a> = BTreeMap<String, Vec<&'a Album>>;

/// Key of the group an album belongs to under `mode`
pub fn group_key(album: &Album, mode: SortMode) -> String {
    match mode {
        SortMode::Event => album
            .trimmed_event()
            .unwrap_or(MISCELLANEOUS)
            .to_string(),
        SortMode::Date => album
            .effective_date()
            .map(|d| month_year_label(&d))
            .unwrap_or_else(|| NO_DATE.to_string()),
    }
}

/// Group and order albums for the gallery view
///
/// Pure function of its inputs; an empty list yields an empty map.
pub fn group_albums(albums: &[Album], mode: SortMode) -> GroupedAlbums<'_> {
    let mut grouped: GroupedAlbums<'_> = BTreeMap::new();

    for album in albums {
        grouped.entry(group_key(album, mode)).or_default().push(album);
    }

    for members in grouped.values_mut() {
        match mode {
            SortMode::Event => members.sort_by(|a, b| collate(&a.name, &b.name)),
            SortMode::Date => members.sort_by(|a, b| b.effective_date().cmp(&a.effective_date())),
        }
    }

    grouped
}

/// Locale-style name comparison
///
/// Compares base letters first, ignoring accents and case ("Émile" sorts
/// with the e's). Ties break on accents, then case: lowercase sorts first.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

/// Lowercased characters with combining marks removed after NFD
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}
