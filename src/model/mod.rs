//! Championship data model
//!
//! - [`RaceResult`]: one driver's outcome in one event, validated on construction
//! - [`Event`]: one Grand Prix, owning its results in parse order
//! - [`Driver`]: one participant, referencing their results across events

pub mod driver;
pub mod event;
pub mod race_result;

pub use driver::Driver;
pub use event::Event;
pub use race_result::{FieldUpdate, RaceResult, RaceResultFields};
