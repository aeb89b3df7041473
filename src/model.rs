//! Shared data model: the wire shape of the feed and the flat domain record.

use serde::{Deserialize, Serialize};

/// Root structure of the `GameCodeBase.json` feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    /// Feed schema version string.
    pub version: String,
    /// ISO 8601 timestamp of the last upstream update.
    pub last_updated: String,
    /// Declared total code count. Informational only; never validated
    /// against the actual list lengths.
    pub total_codes: u32,
    /// Code groups, one per game, in feed order.
    pub games: Vec<GameGroup>,
}

/// All codes published for a single game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameGroup {
    pub game_name: String,
    /// Declared per-game code count. Informational only.
    pub code_count: u32,
    pub codes: Vec<RawCode>,
}

/// One code entry as it appears on the wire. `status` and `code_type` are
/// open strings here; they are narrowed during flattening.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCode {
    pub code: String,
    pub reward_description: String,
    pub source_platform: String,
    pub source_url: String,
    pub expire_date: Option<String>,
    pub status: String,
    pub code_type: String,
    pub publish_date: String,
    pub verification_count: u32,
    pub review_status: String,
}

/// Whether a code is still redeemable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    Active,
    Expired,
}

impl CodeStatus {
    /// Narrows a raw status string. Anything other than the literal
    /// `"active"` counts as expired.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "active" {
            CodeStatus::Active
        } else {
            CodeStatus::Expired
        }
    }
}

/// Whether a code stays valid indefinitely or until its expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    Permanent,
    Limited,
}

impl CodeType {
    /// Narrows a raw type string. Anything other than the literal
    /// `"permanent"` counts as limited.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "permanent" {
            CodeType::Permanent
        } else {
            CodeType::Limited
        }
    }
}

/// One redemption code with its game context, after denormalizing the
/// nested feed. Immutable value object; built only by [`crate::transform::flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCode {
    pub game_name: String,
    pub code: String,
    pub reward_description: String,
    pub source_platform: String,
    pub source_url: String,
    pub expire_date: Option<String>,
    pub status: CodeStatus,
    pub code_type: CodeType,
    pub publish_date: String,
    pub verification_count: u32,
    pub review_status: String,
    /// Derived trustworthiness estimate, always in `0..=100`.
    pub credibility_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_narrowing_is_total() {
        assert_eq!(CodeStatus::from_raw("active"), CodeStatus::Active);
        assert_eq!(CodeStatus::from_raw("expired"), CodeStatus::Expired);
        // No third value survives
        assert_eq!(CodeStatus::from_raw(""), CodeStatus::Expired);
        assert_eq!(CodeStatus::from_raw("Active"), CodeStatus::Expired);
        assert_eq!(CodeStatus::from_raw("pending"), CodeStatus::Expired);
    }

    #[test]
    fn test_type_narrowing_is_total() {
        assert_eq!(CodeType::from_raw("permanent"), CodeType::Permanent);
        assert_eq!(CodeType::from_raw("limited"), CodeType::Limited);
        assert_eq!(CodeType::from_raw(""), CodeType::Limited);
        assert_eq!(CodeType::from_raw("PERMANENT"), CodeType::Limited);
        assert_eq!(CodeType::from_raw("one-time"), CodeType::Limited);
    }

    #[test]
    fn test_feed_deserializes_camel_case() {
        let json = r#"{
            "version": "1.0",
            "lastUpdated": "2024-06-01T00:00:00Z",
            "totalCodes": 1,
            "games": [{
                "gameName": "原神",
                "codeCount": 1,
                "codes": [{
                    "code": "GENSHINGIFT",
                    "rewardDescription": "60原石",
                    "sourcePlatform": "官方",
                    "sourceUrl": "https://example.com/post/1",
                    "expireDate": null,
                    "status": "active",
                    "codeType": "permanent",
                    "publishDate": "2024-05-20",
                    "verificationCount": 3,
                    "reviewStatus": "approved"
                }]
            }]
        }"#;

        let feed: Feed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.total_codes, 1);
        assert_eq!(feed.games.len(), 1);
        assert_eq!(feed.games[0].game_name, "原神");
        assert_eq!(feed.games[0].codes[0].code, "GENSHINGIFT");
        assert_eq!(feed.games[0].codes[0].expire_date, None);
        assert_eq!(feed.games[0].codes[0].verification_count, 3);
    }
}
