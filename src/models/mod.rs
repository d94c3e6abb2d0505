pub mod air_quality;
pub mod recommendation;
pub mod weather;

pub use air_quality::*;
pub use recommendation::*;
pub use weather::*;
