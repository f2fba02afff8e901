//! Deck configuration.
//!
//! `DeckConfig` collects the tunables the engine reads at startup:
//! - hand limit and storage key
//! - RNG seed (entropy when unset)
//! - draw rules for each seeker question
//! - reset slider threshold

use serde::{Deserialize, Serialize};

/// Default maximum number of cards held in hand.
pub const DEFAULT_MAX_HAND_SIZE: usize = 6;

/// Default key the game snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "glenwood_state";

/// Seeker questions that reward the hider with a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Radar,
    Thermometer,
    Measuring,
    Photos,
    Oddball,
    /// Manual "draw one" button.
    Draw,
}

impl QuestionKind {
    /// All question kinds in button order.
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::Radar,
        QuestionKind::Thermometer,
        QuestionKind::Measuring,
        QuestionKind::Photos,
        QuestionKind::Oddball,
        QuestionKind::Draw,
    ];
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuestionKind::Radar => "radar",
            QuestionKind::Thermometer => "thermometer",
            QuestionKind::Measuring => "measuring",
            QuestionKind::Photos => "photos",
            QuestionKind::Oddball => "oddball",
            QuestionKind::Draw => "draw",
        };
        f.write_str(name)
    }
}

/// How many cards a question draws and how many of them the hider keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRule {
    pub question: QuestionKind,
    pub draw: usize,
    pub keep: usize,
}

impl DrawRule {
    #[must_use]
    pub const fn new(question: QuestionKind, draw: usize, keep: usize) -> Self {
        Self { question, draw, keep }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Hand limit enforced at the end of every draw flow.
    pub max_hand_size: usize,

    /// Key the snapshot is stored under.
    pub storage_key: String,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Draw/keep counts per seeker question.
    pub draw_rules: Vec<DrawRule>,

    /// Fraction of the slider travel that unlocks a factory reset.
    pub reset_threshold: f32,

    /// Width of the reset slider thumb, in the same units as the track.
    pub reset_thumb_width: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
            draw_rules: vec![
                DrawRule::new(QuestionKind::Radar, 3, 1),
                DrawRule::new(QuestionKind::Thermometer, 2, 1),
                DrawRule::new(QuestionKind::Measuring, 1, 1),
                DrawRule::new(QuestionKind::Photos, 1, 1),
                DrawRule::new(QuestionKind::Oddball, 2, 1),
                DrawRule::new(QuestionKind::Draw, 1, 1),
            ],
            reset_threshold: 0.9,
            reset_thumb_width: 50.0,
        }
    }
}

impl DeckConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Add or replace the draw rule for a question.
    #[must_use]
    pub fn with_draw_rule(mut self, rule: DrawRule) -> Self {
        self.draw_rules.retain(|r| r.question != rule.question);
        self.draw_rules.push(rule);
        self
    }

    /// Set the reset slider threshold (0.0..=1.0).
    #[must_use]
    pub fn with_reset_threshold(mut self, threshold: f32) -> Self {
        self.reset_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Look up the draw rule for a question.
    #[must_use]
    pub fn draw_rule(&self, question: QuestionKind) -> Option<DrawRule> {
        self.draw_rules.iter().copied().find(|r| r.question == question)
    }
}
