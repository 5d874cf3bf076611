//! Ingestion of timing exports
//!
//! Decoders turn an export into a fresh [`Championship`](crate::Championship).
//! Every parse rebuilds the whole model; there is no incremental update.

pub mod cockpit_xp;

pub use cockpit_xp::{CockpitXpParser, Line, decode_line};
