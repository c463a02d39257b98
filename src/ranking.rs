// src/ranking.rs

//! Leaderboard ordering: score descending, then username ascending.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::models::leaderboard::LeaderboardEntry;

/// Compares two usernames the way a root-locale collator would for the
/// names people actually type.
///
/// Three levels, each consulted only on a tie at the previous one:
/// base letters (accents stripped, case folded), then accents, then case.
/// So `"émile"` sorts before `"zoe"`, `"bob"` sorts between `"Alice"` and
/// `"Carol"`, `"e"` sorts before `"é"`, and lowercase precedes uppercase.
pub fn compare_usernames(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| compare_case(a, b))
}

/// Decomposed, case-folded letters with combining marks removed.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Decomposed, case-folded letters with combining marks kept.
fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or_else(|| a.nfd().count().cmp(&b.nfd().count()))
}

/// Total order over entries used for the leaderboard listing.
pub fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| compare_usernames(&a.username, &b.username))
}

/// Sorts entries in place into leaderboard order.
///
/// Entries with the same score and username keep no particular relative order.
pub fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(compare_entries);
}
