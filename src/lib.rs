// Choreo - Keyframe choreography editor core
// Module declarations

pub mod audio;
pub mod session;
pub mod stage;
pub mod timeline;

pub use audio::{AudioClip, AudioOutput, ClipInfo, IngestError, PlaybackError};
pub use session::{EditorSession, Marker, SessionError};
pub use stage::{Dancer, DancerId, Position, PositionTrack, Roster, Stage};
pub use timeline::{ClockSnapshot, FrameSampler, PlaybackClock, Transport};
