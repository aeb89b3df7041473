//! Pure search, filter, and sort helpers over the flat code list.
//!
//! Every helper takes a slice, allocates its result, and never fails:
//! absent or malformed optional fields degrade per the rules documented on
//! each function instead of raising errors.

use crate::model::{CodeType, GameCode};
use chrono::{DateTime, NaiveDate, NaiveTime};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Code-type filter accepted by [`filter_by_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Permanent,
    Limited,
}

/// Sort orders accepted by [`sort_codes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Newest publish date first.
    Latest,
    /// Highest credibility score first.
    Credibility,
    /// Soonest expiry first; codes without an expiry date sort last.
    Expiring,
}

/// Case-insensitive substring search across game name, code string, and
/// reward description. A query that is empty after trimming returns the
/// input unchanged.
pub fn search_codes(codes: &[GameCode], query: &str) -> Vec<GameCode> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return codes.to_vec();
    }

    codes
        .iter()
        .filter(|c| {
            c.game_name.to_lowercase().contains(&query)
                || c.code.to_lowercase().contains(&query)
                || c.reward_description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Keeps codes whose game name matches `game` exactly (case-sensitive).
/// `None` or an empty name returns the input unchanged.
pub fn filter_by_game(codes: &[GameCode], game: Option<&str>) -> Vec<GameCode> {
    match game {
        None | Some("") => codes.to_vec(),
        Some(game) => codes.iter().filter(|c| c.game_name == game).cloned().collect(),
    }
}

/// Keeps codes of the given type; [`TypeFilter::All`] returns the input
/// unchanged.
pub fn filter_by_type(codes: &[GameCode], filter: TypeFilter) -> Vec<GameCode> {
    let wanted = match filter {
        TypeFilter::All => return codes.to_vec(),
        TypeFilter::Permanent => CodeType::Permanent,
        TypeFilter::Limited => CodeType::Limited,
    };
    codes
        .iter()
        .filter(|c| c.code_type == wanted)
        .cloned()
        .collect()
}

/// Distinct game names, ascending lexicographic order regardless of input
/// order.
pub fn game_list(codes: &[GameCode]) -> Vec<String> {
    let games: BTreeSet<&str> = codes.iter().map(|c| c.game_name.as_str()).collect();
    games.into_iter().map(String::from).collect()
}

/// Returns a newly ordered copy of `codes`; the input is not mutated.
/// All sorts are stable, so ties keep their relative input order.
pub fn sort_codes(codes: &[GameCode], sort_by: SortBy) -> Vec<GameCode> {
    let mut sorted = codes.to_vec();

    match sort_by {
        SortBy::Latest => {
            sorted.sort_by_key(|c| Reverse(parse_timestamp(&c.publish_date)));
        }
        SortBy::Credibility => {
            sorted.sort_by_key(|c| Reverse(c.credibility_score));
        }
        SortBy::Expiring => {
            // Undated (permanent) codes sort after every dated one
            sorted.sort_by_key(|c| match c.expire_date.as_deref() {
                Some(date) => (0u8, parse_timestamp(date)),
                None => (1, 0),
            });
        }
    }

    sorted
}

/// Best-effort date parsing for sort keys: RFC 3339 first, then a bare
/// `YYYY-MM-DD` at midnight UTC. Missing or unparseable dates collapse to
/// the epoch, which sinks them in the `latest` order.
fn parse_timestamp(raw: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_time(NaiveTime::MIN).and_utc().timestamp();
    }
    0
}
