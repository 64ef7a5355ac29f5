//! The structured reply the narrative service produces every turn.

use serde::{Deserialize, Serialize};

use crate::error::{ReplyError, ReplyResult};
use crate::stats::GameStats;

/// Maximum number of suggested actions shown to the player.
pub const MAX_CHOICES: usize = 3;

/// One turn of structured game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameResponse {
    /// What happened, with optional `**bold**` markup.
    pub narrative: String,
    /// Stats after this turn. Replaces the previous stats wholesale.
    pub stats: GameStats,
    /// Suggested next actions, in display order.
    pub choices: Vec<String>,
    /// The professor has lost.
    pub game_over: bool,
    /// The professor has won.
    pub victory: bool,
    /// Why the game ended, if it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GameResponse {
    /// Parse raw reply text into a response.
    ///
    /// The text must be a single JSON object matching the response schema
    /// with nothing around it. Missing fields, unknown fields and type
    /// mismatches are all rejected; nothing is coerced.
    pub fn from_reply(text: &str) -> ReplyResult<Self> {
        if text.trim().is_empty() {
            return Err(ReplyError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// How the game stands after this turn. Losing wins over winning.
    pub fn outcome(&self) -> Outcome {
        if self.game_over {
            Outcome::Lost {
                reason: self.reason.clone(),
            }
        } else if self.victory {
            Outcome::Won {
                reason: self.reason.clone(),
            }
        } else {
            Outcome::Playing
        }
    }

    /// The choices that fit on screen.
    pub fn visible_choices(&self) -> &[String] {
        &self.choices[..self.choices.len().min(MAX_CHOICES)]
    }
}

/// The result of a turn, derived from the `gameOver`/`victory` flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The semester goes on.
    Playing,
    /// Authority or energy ran out.
    Lost {
        /// Reason given by the game master.
        reason: Option<String>,
    },
    /// The semester was survived.
    Won {
        /// Reason given by the game master.
        reason: Option<String>,
    },
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_ONE: &str = r#"{
        "narrative": "Day one.",
        "stats": {"motivation": 50, "authority": 80, "energy": 100},
        "choices": ["Teach calmly", "Crack a joke", "Give a pop quiz"],
        "gameOver": false,
        "victory": false
    }"#;

    fn response(game_over: bool, victory: bool) -> GameResponse {
        GameResponse {
            narrative: "The bell rings.".to_string(),
            stats: GameStats::INITIAL,
            choices: vec![],
            game_over,
            victory,
            reason: Some("Final exam".to_string()),
        }
    }

    #[test]
    fn parse_valid_reply() {
        let r = GameResponse::from_reply(DAY_ONE).unwrap();
        assert_eq!(r.narrative, "Day one.");
        assert_eq!(r.stats, GameStats::new(50, 80, 100));
        assert_eq!(
            r.choices,
            vec!["Teach calmly", "Crack a joke", "Give a pop quiz"]
        );
        assert!(!r.game_over);
        assert!(!r.victory);
        assert_eq!(r.reason, None);
        assert_eq!(r.outcome(), Outcome::Playing);
    }

    #[test]
    fn parse_with_reason() {
        let text = r#"{"narrative":"Out of coffee.","stats":{"motivation":10,"authority":0,"energy":0},
            "choices":[],"gameOver":true,"victory":false,"reason":"You fainted."}"#;
        let r = GameResponse::from_reply(text).unwrap();
        assert_eq!(
            r.outcome(),
            Outcome::Lost {
                reason: Some("You fainted.".to_string())
            }
        );
    }

    #[test]
    fn parse_keeps_out_of_range_stats() {
        let text = r#"{"narrative":"x","stats":{"motivation":-20,"authority":140,"energy":5},
            "choices":[],"gameOver":false,"victory":false}"#;
        let r = GameResponse::from_reply(text).unwrap();
        assert_eq!(r.stats.motivation, -20);
        assert_eq!(r.stats.clamped().authority, 100);
    }

    #[test]
    fn empty_reply() {
        assert!(matches!(GameResponse::from_reply(""), Err(ReplyError::Empty)));
        assert!(matches!(
            GameResponse::from_reply("  \n"),
            Err(ReplyError::Empty)
        ));
    }

    #[test]
    fn not_json() {
        let err = GameResponse::from_reply("The students stare at you.").unwrap_err();
        assert!(matches!(err, ReplyError::Malformed(_)));
    }

    #[test]
    fn fenced_json_rejected() {
        let fenced = format!("```json\n{DAY_ONE}\n```");
        assert!(GameResponse::from_reply(&fenced).is_err());
    }

    #[test]
    fn missing_required_field() {
        let text = r#"{"narrative":"x","stats":{"motivation":1,"authority":1,"energy":1},
            "choices":[],"victory":false}"#;
        assert!(GameResponse::from_reply(text).is_err());
    }

    #[test]
    fn wrong_type_not_coerced() {
        let text = r#"{"narrative":"x","stats":{"motivation":"50","authority":1,"energy":1},
            "choices":[],"gameOver":false,"victory":false}"#;
        assert!(GameResponse::from_reply(text).is_err());

        let text = r#"{"narrative":"x","stats":{"motivation":50,"authority":1,"energy":1},
            "choices":[],"gameOver":"false","victory":false}"#;
        assert!(GameResponse::from_reply(text).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let text = r#"{"narrative":"x","stats":{"motivation":50,"authority":1,"energy":1},
            "choices":[],"gameOver":false,"victory":false,"mood":"grumpy"}"#;
        assert!(GameResponse::from_reply(text).is_err());
    }

    #[test]
    fn game_over_wins_over_victory() {
        assert!(matches!(response(true, true).outcome(), Outcome::Lost { .. }));
        assert!(matches!(response(true, false).outcome(), Outcome::Lost { .. }));
    }

    #[test]
    fn victory_without_game_over() {
        assert_eq!(
            response(false, true).outcome(),
            Outcome::Won {
                reason: Some("Final exam".to_string())
            }
        );
    }

    #[test]
    fn terminal_outcomes() {
        assert!(!Outcome::Playing.is_terminal());
        assert!(response(true, false).outcome().is_terminal());
        assert!(response(false, true).outcome().is_terminal());
    }

    #[test]
    fn visible_choices_capped() {
        let mut r = response(false, false);
        r.choices = (1..=5).map(|i| format!("Option {i}")).collect();
        assert_eq!(r.visible_choices().len(), MAX_CHOICES);
        assert_eq!(r.visible_choices()[2], "Option 3");

        r.choices.truncate(1);
        assert_eq!(r.visible_choices(), ["Option 1".to_string()]);
    }

    #[test]
    fn serializes_wire_names() {
        let json = serde_json::to_value(response(true, false)).unwrap();
        assert_eq!(json["gameOver"], true);
        assert_eq!(json["reason"], "Final exam");
    }
}
