/// Abstraction over the feedback sounder.
/// Implementations: ConsoleSounder (log-backed), SounderRecorder (testing),
/// NullSounder (audio disabled).
pub trait Sounder {
    /// Emit one pulse of roughly `duration_ms`. Fire and forget; the
    /// controller never waits for a pulse to finish.
    fn pulse(&mut self, duration_ms: u32);
}

/// Sounder that discards every pulse. Used when audio feedback is turned
/// off in the settings.
pub struct NullSounder;

impl Sounder for NullSounder {
    fn pulse(&mut self, _duration_ms: u32) {}
}
