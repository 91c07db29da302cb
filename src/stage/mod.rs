// Stage module
// Dancers, keyframe tracks, and the bounded render surface

pub mod dancer;
pub mod roster;
pub mod track;

pub use dancer::{Dancer, DancerId};
pub use roster::Roster;
pub use track::{time_key_for, Position, PositionTrack, TimeKey};

/// Marker colors assigned to dancers round-robin by ordinal
pub const PALETTE: [&str; 7] = [
    "#ff4d4f", "#40a9ff", "#73d13d", "#9254de", "#fa8c16", "#ff85c0", "#36cfc9",
];

/// The bounded 2D render surface dancers are positioned on
///
/// The logical size is fixed; drag gestures arrive as surface-relative
/// coordinates. Positions carry no bounds invariant.
#[derive(Debug, Clone, Copy)]
pub struct Stage;

impl Stage {
    pub const WIDTH: f64 = 800.0;
    pub const HEIGHT: f64 = 400.0;

    /// Palette color for a dancer ordinal (1-indexed)
    pub fn palette_color(ordinal: u32) -> &'static str {
        let idx = (ordinal.saturating_sub(1)) as usize % PALETTE.len();
        PALETTE[idx]
    }

    /// Default seed placement for a newly added dancer: staggered diagonally
    /// from (100, 100) by 20px per ordinal so markers don't stack
    pub fn default_seed_position(ordinal: u32) -> Position {
        let offset = 20.0 * ordinal as f64;
        Position::new(100.0 + offset, 100.0 + offset)
    }

    /// Whether a position lies on the stage surface
    pub fn contains(pos: Position) -> bool {
        pos.x >= 0.0 && pos.x <= Self::WIDTH && pos.y >= 0.0 && pos.y <= Self::HEIGHT
    }
}
