pub mod air_quality;
pub mod normalize;
pub mod rules;
pub mod walk_check;

pub use air_quality::classify;
pub use rules::RulesEngine;
pub use walk_check::{CheckResponse, Clock, FixedClock, SystemClock, WalkCheckService};
