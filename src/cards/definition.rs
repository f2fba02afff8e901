//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: what it is,
//! what it says, and what it costs to play. How many physical copies exist
//! is part of the template too (`count`).
//!
//! ## Costs
//!
//! Printed costs are free text ("Discard 2 cards", "Free"). The structured
//! `Cost` is derived from that text once, when the template is defined, and
//! can be overridden with `with_cost`. Flows only ever look at `Cost`.

use serde::{Deserialize, Serialize};

/// Card ids whose dice cost fizzles on an even roll.
const EVEN_FIZZLE_CARDS: &[&str] = &["curse_bench"];

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Curse,
    Action,
    /// Passive time bonus. Held in hand, never cast.
    #[serde(rename = "Time Bonus")]
    TimeBonus,
}

impl CardKind {
    /// Can a card of this kind be cast from hand?
    #[must_use]
    pub const fn is_castable(self) -> bool {
        !matches!(self, CardKind::TimeBonus)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Curse => "Curse",
            CardKind::Action => "Action",
            CardKind::TimeBonus => "Time Bonus",
        };
        f.write_str(name)
    }
}

/// What playing a card costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cost {
    /// Discard this many other cards from hand.
    Discard(usize),
    /// Roll a die; the outcome depends on the card's `RollPolicy`.
    Roll,
    /// No cost.
    Free,
}

impl Cost {
    /// Derive a cost from printed cost text.
    ///
    /// Text mentioning "discard" costs 3 if it contains the digit 3, 2 if it
    /// contains the digit 2, and 1 otherwise. Text mentioning "roll" is a
    /// dice cost. Anything else is free.
    ///
    /// ```
    /// use hider_deck::cards::Cost;
    ///
    /// assert_eq!(Cost::parse("Discard 2 cards"), Cost::Discard(2));
    /// assert_eq!(Cost::parse("Roll a die"), Cost::Roll);
    /// assert_eq!(Cost::parse("A photo of a car"), Cost::Free);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("discard") {
            let amount = if lower.contains('3') {
                3
            } else if lower.contains('2') {
                2
            } else {
                1
            };
            return Cost::Discard(amount);
        }
        if lower.contains("roll") {
            return Cost::Roll;
        }
        Cost::Free
    }
}

/// How a dice cost resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollPolicy {
    /// Even roll: the card fizzles. Odd roll: the card takes effect.
    EvenFizzles,
    /// The roll is informational; the card always takes effect.
    Informational,
}

impl RollPolicy {
    /// Resolve the policy for a card id and its cost text.
    #[must_use]
    pub fn for_card(id: &str, cost_text: &str) -> Self {
        if EVEN_FIZZLE_CARDS.contains(&id) || cost_text.to_lowercase().contains("even") {
            RollPolicy::EvenFizzles
        } else {
            RollPolicy::Informational
        }
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use hider_deck::cards::{CardKind, CardTemplate, Cost};
///
/// let greed = CardTemplate::new("action_greed", CardKind::Action, "Greed")
///     .with_description("Discard 2 cards to Draw 3 cards.")
///     .with_cost_text("Discard 2 cards")
///     .with_count(5);
///
/// assert_eq!(greed.cost, Cost::Discard(2));
/// assert_eq!(greed.count, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TemplateRecord", into = "TemplateRecord")]
pub struct CardTemplate {
    /// Unique template id (e.g. `curse_bench`).
    pub id: String,

    /// Card category.
    pub kind: CardKind,

    /// Display title.
    pub title: String,

    /// Rules text.
    pub description: String,

    /// Printed cost.
    pub cost_text: String,

    /// Number of physical copies in a fresh deck.
    pub count: u32,

    /// Structured cost, derived from `cost_text` unless overridden.
    pub cost: Cost,

    /// Dice resolution for `Cost::Roll`.
    pub roll_policy: RollPolicy,
}

impl CardTemplate {
    /// Create a template with one copy and a free cost.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: CardKind, title: impl Into<String>) -> Self {
        let id = id.into();
        let roll_policy = RollPolicy::for_card(&id, "");
        Self {
            id,
            kind,
            title: title.into(),
            description: String::new(),
            cost_text: String::new(),
            count: 1,
            cost: Cost::Free,
            roll_policy,
        }
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the printed cost, deriving the structured cost and roll policy.
    #[must_use]
    pub fn with_cost_text(mut self, text: impl Into<String>) -> Self {
        self.cost_text = text.into();
        self.cost = Cost::parse(&self.cost_text);
        self.roll_policy = RollPolicy::for_card(&self.id, &self.cost_text);
        self
    }

    /// Override the structured cost.
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// Override the dice resolution.
    #[must_use]
    pub fn with_roll_policy(mut self, policy: RollPolicy) -> Self {
        self.roll_policy = policy;
        self
    }

    /// Set the number of copies.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Wire form of a template. The structured cost is not stored; it is
/// derived again from the text on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TemplateRecord {
    id: String,
    #[serde(rename = "type")]
    kind: CardKind,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cost: String,
    #[serde(default = "one")]
    count: u32,
}

fn one() -> u32 {
    1
}

impl From<TemplateRecord> for CardTemplate {
    fn from(record: TemplateRecord) -> Self {
        CardTemplate::new(record.id, record.kind, record.title)
            .with_description(record.description)
            .with_cost_text(record.cost)
            .with_count(record.count)
    }
}

impl From<CardTemplate> for TemplateRecord {
    fn from(template: CardTemplate) -> Self {
        Self {
            id: template.id,
            kind: template.kind,
            title: template.title,
            description: template.description,
            cost: template.cost_text,
            count: template.count,
        }
    }
}
