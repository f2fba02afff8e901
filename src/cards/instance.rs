//! Card instances - physical copies of a template.
//!
//! A template with `count: 5` becomes five `CardInstance`s when the deck is
//! built, each with its own `CardUid`. Instances never change after they are
//! created; they only move between piles.

use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::core::rng::GameRng;

/// Length of a generated uid.
pub const UID_LEN: usize = 9;

/// Unique identifier of one physical card.
///
/// Generated uids are nine lowercase base-36 characters. Uids read from a
/// snapshot are kept as stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardUid(String);

impl CardUid {
    /// Generate a random uid.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self(rng.gen_base36(UID_LEN))
    }

    /// Get the uid as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardUid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardUid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One physical card.
///
/// Serializes flat: the template fields followed by `uid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// The card's static data.
    #[serde(flatten)]
    pub template: CardTemplate,

    /// Unique id of this copy.
    pub uid: CardUid,
}

impl CardInstance {
    #[must_use]
    pub fn new(template: CardTemplate, uid: CardUid) -> Self {
        Self { template, uid }
    }

    /// Template id shortcut.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.template.id
    }

    /// Title shortcut.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.template.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Cost};

    fn bench() -> CardTemplate {
        CardTemplate::new("curse_bench", CardKind::Curse, "Curse of the Waiting Bench")
            .with_description("Seekers must sit on a bench for 5 mins.")
            .with_cost_text("Discard 1 card")
    }

    #[test]
    fn test_random_uid_shape() {
        let mut rng = GameRng::new(42);
        let uid = CardUid::random(&mut rng);
        assert_eq!(uid.as_str().len(), UID_LEN);

        let other = CardUid::random(&mut rng);
        assert_ne!(uid, other);
    }

    #[test]
    fn test_uid_display() {
        let uid = CardUid::from("k3j2h1g0f");
        assert_eq!(format!("{}", uid), "k3j2h1g0f");
    }

    #[test]
    fn test_instance_accessors() {
        let card = CardInstance::new(bench(), CardUid::from("abc"));
        assert_eq!(card.id(), "curse_bench");
        assert_eq!(card.title(), "Curse of the Waiting Bench");
        assert_eq!(card.template.cost, Cost::Discard(1));
    }

    #[test]
    fn test_instance_serializes_flat() {
        let card = CardInstance::new(bench(), CardUid::from("abc123xyz"));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], "curse_bench");
        assert_eq!(json["type"], "Curse");
        assert_eq!(json["cost"], "Discard 1 card");
        assert_eq!(json["count"], 1);
        assert_eq!(json["uid"], "abc123xyz");
        assert!(json.get("template").is_none());
    }

    #[test]
    fn test_instance_serialization() {
        let card = CardInstance::new(bench(), CardUid::from("abc123xyz"));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
