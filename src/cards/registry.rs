//! Card catalog: the templates a deck is built from.
//!
//! The `CardCatalog` stores templates in registration order and provides
//! lookup by id. `CardCatalog::standard()` is the 45-card hider deck.

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{CardKind, CardTemplate};
use super::instance::{CardInstance, CardUid};
use crate::core::rng::GameRng;

/// Catalog of card templates.
///
/// ## Example
///
/// ```
/// use hider_deck::cards::{CardCatalog, CardKind, CardTemplate};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardTemplate::new("bonus_5", CardKind::TimeBonus, "5 Minute Bonus").with_count(10),
/// );
///
/// assert_eq!(catalog.total_cards(), 10);
/// assert_eq!(catalog.get("bonus_5").unwrap().title, "5 Minute Bonus");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: Vec<CardTemplate>,
    by_id: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Panics if a template with the same id already exists.
    pub fn register(&mut self, template: CardTemplate) {
        if self.by_id.contains_key(&template.id) {
            panic!("Card template {:?} already registered", template.id);
        }
        self.by_id.insert(template.id.clone(), self.templates.len());
        self.templates.push(template);
    }

    /// Register a template (builder pattern).
    #[must_use]
    pub fn with(mut self, template: CardTemplate) -> Self {
        self.register(template);
        self
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardTemplate> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Number of physical cards a fresh deck holds.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.templates.iter().map(|t| t.count as usize).sum()
    }

    /// Iterate over templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter()
    }

    /// Find templates by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter().filter(move |t| t.kind == kind)
    }

    /// Create one instance per copy of every template, in catalog order.
    ///
    /// Uids are unique within the returned deck. The deck is not shuffled.
    pub fn inflate(&self, rng: &mut GameRng) -> Vec<CardInstance> {
        let mut seen = FxHashSet::default();
        let mut deck = Vec::with_capacity(self.total_cards());

        for template in &self.templates {
            for _ in 0..template.count {
                let uid = loop {
                    let uid = CardUid::random(rng);
                    if seen.insert(uid.clone()) {
                        break uid;
                    }
                };
                deck.push(CardInstance::new(template.clone(), uid));
            }
        }

        deck
    }

    /// The standard hider deck: 10 curses, 16 actions, 19 time bonuses.
    #[must_use]
    pub fn standard() -> Self {
        let curse = |id: &str, title: &str, description: &str, cost: &str| {
            CardTemplate::new(id, CardKind::Curse, title)
                .with_description(description)
                .with_cost_text(cost)
        };

        Self::new()
            .with(curse(
                "curse_wandering",
                "Curse of the Wandering Streets",
                "Seekers cannot enter new streets without rolling 7+ on 2 dice. If fail, wait 5 mins.",
                "Discard 3 cards",
            ))
            .with(curse(
                "curse_relocation",
                "Curse of the Unexpected Relocation",
                "Choose a public place within 100m of seekers. They must go there and wait 5 mins.",
                "Choose a location",
            ))
            .with(curse(
                "curse_twisted",
                "Curse of the Twisted Path",
                "For the next 15 minutes, seekers must roll the die to see what direction to go.",
                "Next seeker question is free",
            ))
            .with(curse(
                "curse_luxury",
                "Curse of the Luxury Hunt",
                "Take a photo of a car. Seekers must find a more expensive one.",
                "A photo of a car",
            ))
            .with(curse(
                "curse_bird",
                "Curse of the Watchful Bird",
                "Seekers must watch a bird for 20s. If it flies, restart.",
                "Watch a bird for 15s",
            ))
            .with(curse(
                "curse_stagnant",
                "Curse of the Stagnant Steps",
                "Seekers roll dice for steps. Roll 5 -> Take 5 steps.",
                "Seekers must be within 100m",
            ))
            .with(curse(
                "curse_bench",
                "Curse of the Waiting Bench",
                "Seekers must sit on a bench for 5 mins.",
                "Discard 1 card",
            ))
            .with(curse(
                "curse_number",
                "Curse of the Hidden Number",
                "Seekers must find mailbox with number 7. Fail 5m -> Stop 10m.",
                "Discard 1 card",
            ))
            .with(curse(
                "curse_white",
                "Curse of the White Vehicle",
                "Seekers go opposite direction until they see a white Mazda.",
                "Discard 2 cards",
            ))
            .with(curse(
                "curse_red_light",
                "Curse of the Red Light",
                "Seekers must stop for 2 minutes at the next intersection.",
                "Discard 1 card",
            ))
            .with(
                CardTemplate::new("action_greed", CardKind::Action, "Greed")
                    .with_description("Discard 2 cards to Draw 3 cards.")
                    .with_cost_text("Discard 2 cards")
                    .with_count(5),
            )
            .with(
                CardTemplate::new("action_barter", CardKind::Action, "Barter")
                    .with_description("Discard 1 card to Draw 2 cards.")
                    .with_cost_text("Discard 1 card")
                    .with_count(10),
            )
            .with(
                CardTemplate::new("bonus_5", CardKind::TimeBonus, "5 Minute Bonus")
                    .with_description("Extends hidden time by 5 minutes.")
                    .with_cost_text("Free")
                    .with_count(10),
            )
            .with(
                CardTemplate::new("bonus_10", CardKind::TimeBonus, "10 Minute Bonus")
                    .with_description("Extends hidden time by 10 minutes.")
                    .with_cost_text("Free")
                    .with_count(6),
            )
            .with(
                CardTemplate::new("bonus_15", CardKind::TimeBonus, "15 Minute Bonus")
                    .with_description("Extends hidden time by 15 minutes.")
                    .with_cost_text("Free")
                    .with_count(3),
            )
            .with(
                CardTemplate::new("action_move", CardKind::Action, "15 Minute Move")
                    .with_description("Relocate to a new spot (15 mins pause).")
                    .with_cost_text("Free")
                    .with_count(1),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Cost;

    #[test]
    fn test_standard_deck_composition() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.total_cards(), 45);
        assert_eq!(catalog.find_by_kind(CardKind::Curse).count(), 10);

        let bonuses: u32 = catalog
            .find_by_kind(CardKind::TimeBonus)
            .map(|t| t.count)
            .sum();
        assert_eq!(bonuses, 19);
    }

    #[test]
    fn test_standard_costs() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.get("curse_wandering").unwrap().cost, Cost::Discard(3));
        assert_eq!(catalog.get("curse_white").unwrap().cost, Cost::Discard(2));
        assert_eq!(catalog.get("action_barter").unwrap().cost, Cost::Discard(1));
        assert_eq!(catalog.get("curse_luxury").unwrap().cost, Cost::Free);
        assert_eq!(catalog.get("bonus_15").unwrap().cost, Cost::Free);
    }

    #[test]
    fn test_lookup() {
        let catalog = CardCatalog::standard();
        assert!(catalog.contains("curse_bench"));
        assert!(!catalog.contains("curse_missing"));
        assert!(catalog.get("curse_missing").is_none());
    }

    #[test]
    fn test_inflate_unique_uids() {
        let catalog = CardCatalog::standard();
        let mut rng = GameRng::new(42);

        let deck = catalog.inflate(&mut rng);
        assert_eq!(deck.len(), 45);

        let uids: FxHashSet<_> = deck.iter().map(|c| c.uid.clone()).collect();
        assert_eq!(uids.len(), 45);

        let greed = deck.iter().filter(|c| c.id() == "action_greed").count();
        assert_eq!(greed, 5);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let _ = CardCatalog::new()
            .with(CardTemplate::new("x", CardKind::Action, "X"))
            .with(CardTemplate::new("x", CardKind::Action, "X again"));
    }
}
