//! Progress notification port
//!
//! Defines the interface for reporting phase transitions during generation.

use querywright_domain::GenerationPhase;

/// Callback for progress updates during query generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait GenerationProgress: Send + Sync {
    /// Called when the generation enters a new phase
    fn on_phase(&self, phase: GenerationPhase);

    /// Called once when the generation fails, after `on_phase(Failed)`
    fn on_failure(&self, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_phase(&self, _phase: GenerationPhase) {}
}
