//! Star systems assembled from catalog planets
//!
//! Planets are grouped by host star in first-seen order, scored, and
//! summarized into the per-system values the star map draws: mean
//! habitability for color and largest planet radius for marker size.

pub mod encoding;
pub mod system;

// Re-export main types at crate root
pub use encoding::{
    ColorScale, MARKER_RADIUS_RANGE, SqrtScale, SystemEncoding, encode_systems, planet_color,
};
pub use system::{StarSystem, UNKNOWN_STAR_NAME, aggregate, aggregate_with, rank_by_habitability};
