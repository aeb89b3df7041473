//! Flattens the nested feed into one record per code and scores each record.

use crate::model::{CodeStatus, CodeType, Feed, GameCode, RawCode};

/// Platform-name markers that add credibility when they appear anywhere in
/// the source platform string.
const TRUSTED_PLATFORM_MARKERS: [&str; 3] = ["TapTap论坛", "Bilibili", "官方"];

/// Denormalizes the feed into a flat code list. Pure: games are walked in
/// feed order, codes in per-game order, so output order matches input
/// nesting. Unsorted queries downstream preserve this order.
pub fn flatten(feed: &Feed) -> Vec<GameCode> {
    let mut codes = Vec::new();

    for game in &feed.games {
        for raw in &game.codes {
            codes.push(GameCode {
                game_name: game.game_name.clone(),
                code: raw.code.clone(),
                reward_description: raw.reward_description.clone(),
                source_platform: raw.source_platform.clone(),
                source_url: raw.source_url.clone(),
                expire_date: raw.expire_date.clone(),
                status: CodeStatus::from_raw(&raw.status),
                code_type: CodeType::from_raw(&raw.code_type),
                publish_date: raw.publish_date.clone(),
                verification_count: raw.verification_count,
                review_status: raw.review_status.clone(),
                credibility_score: credibility_score(raw),
            });
        }
    }

    codes
}

/// Heuristic trustworthiness estimate for one raw entry.
///
/// Base 50, plus up to 30 from verifications (5 each), plus 10 for a
/// trusted source platform, plus 10 for an approved review, capped at 100.
/// The floor is 50 by construction.
pub fn credibility_score(raw: &RawCode) -> u8 {
    let mut score: u32 = 50;

    score += raw.verification_count.saturating_mul(5).min(30);

    if TRUSTED_PLATFORM_MARKERS
        .iter()
        .any(|marker| raw.source_platform.contains(marker))
    {
        score += 10;
    }

    if raw.review_status == "approved" {
        score += 10;
    }

    score.min(100) as u8
}
