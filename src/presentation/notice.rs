//! One-shot user messages.

use serde::{Deserialize, Serialize};

/// A message shown once to the player (title + body).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The draw pile and discard pile are both exhausted.
    #[must_use]
    pub fn deck_empty() -> Self {
        Self::new("Deck Empty", "No more cards in the draw pile!")
    }

    /// Not enough other hand cards to pay a discard cost.
    #[must_use]
    pub fn not_enough_cards() -> Self {
        Self::new("Cannot Cast", "Not enough cards to discard!")
    }

    /// Time bonus cards stay in hand.
    #[must_use]
    pub fn passive_card(title: &str) -> Self {
        Self::new("Cannot Cast", format!("{title} is a time bonus and cannot be cast."))
    }

    /// A card was cast successfully.
    #[must_use]
    pub fn card_played(title: &str) -> Self {
        Self::new("Card Played", format!("You activated: {title}"))
    }

    /// Even roll under an even-fizzles policy.
    #[must_use]
    pub fn cast_fizzled(roll: u8) -> Self {
        Self::new(
            "Cast Failed",
            format!("Rolled {roll} (Even). The curse fizzles and is discarded!"),
        )
    }

    /// Odd roll under an even-fizzles policy.
    #[must_use]
    pub fn cast_succeeded(roll: u8, title: &str) -> Self {
        Self::new("Cast Success", format!("Rolled {roll} (Odd). {title} activated!"))
    }

    /// Any roll under an informational policy.
    #[must_use]
    pub fn rolled_and_played(roll: u8, title: &str) -> Self {
        Self::new("Card Played", format!("Rolled {roll}. {title} Activated."))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::deck_empty().to_string(),
            "Deck Empty: No more cards in the draw pile!"
        );
    }

    #[test]
    fn test_roll_messages() {
        assert!(Notice::cast_fizzled(4).body.contains("Rolled 4 (Even)"));
        assert!(Notice::cast_succeeded(3, "Bench").body.contains("Bench activated"));
        assert_eq!(
            Notice::rolled_and_played(6, "Greed").body,
            "Rolled 6. Greed Activated."
        );
    }
}
