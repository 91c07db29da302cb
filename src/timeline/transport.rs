// Transport seam
// The externally owned audio playback source the clock follows while playing

/// An external audio playback source
///
/// The transport is the authoritative "now" while playing; the session only
/// reads its position and forwards play/pause/seek. Implementations must be
/// shareable with the sampler worker thread.
pub trait Transport: Send + Sync {
    /// Current playback position in seconds
    fn position_secs(&self) -> f64;

    /// Move the playback position to `secs`
    fn seek_to(&self, secs: f64);

    /// Resume playback
    fn play(&self);

    /// Suspend playback, holding the current position
    fn pause(&self);
}
