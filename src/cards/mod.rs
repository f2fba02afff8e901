//! Card system: templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Static card data (kind, text, cost, copy count)
//! - `Cost`: Structured cost derived from the printed cost text
//! - `RollPolicy`: How a dice cost resolves for a given card
//! - `CardInstance`: One physical copy, identified by a `CardUid`
//! - `CardCatalog`: Template registry and deck inflation

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardKind, CardTemplate, Cost, RollPolicy};
pub use instance::{CardInstance, CardUid};
pub use registry::CardCatalog;
