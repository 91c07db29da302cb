// Dancer roster
// Collection of all dancers with monotonic id issuance

use serde::{Deserialize, Serialize};

use super::dancer::{Dancer, DancerId};
use super::track::Position;
use super::Stage;

/// The set of all dancers in an editor session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    dancers: Vec<Dancer>,

    /// Next ordinal to hand out; never decremented, so ids are never reused
    next_ordinal: u32,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            dancers: Vec::new(),
            next_ordinal: 1,
        }
    }

    /// Create a new dancer seeded with one keyframe at `floor(seed_time)`
    ///
    /// The marker color is assigned round-robin from the stage palette.
    /// Cannot fail; returns the issued id.
    pub fn add_dancer(&mut self, seed_time: f64, seed_pos: Position) -> DancerId {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        let id = DancerId(ordinal);
        let color = Stage::palette_color(ordinal).to_string();
        self.dancers.push(Dancer::new(id, color, seed_time, seed_pos));
        id
    }

    pub fn get(&self, id: DancerId) -> Option<&Dancer> {
        self.dancers.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: DancerId) -> Option<&mut Dancer> {
        self.dancers.iter_mut().find(|d| d.id == id)
    }

    /// Iterate dancers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Dancer> {
        self.dancers.iter()
    }

    pub fn len(&self) -> usize {
        self.dancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dancers.is_empty()
    }

    /// Ordinal the next added dancer will receive
    pub fn next_ordinal(&self) -> u32 {
        self.next_ordinal
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
