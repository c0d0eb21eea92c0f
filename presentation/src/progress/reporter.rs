//! Progress reporting for query generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use querywright_application::ports::progress::GenerationProgress;
use querywright_domain::GenerationPhase;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new(model: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix(model.to_string());
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_message(phase: GenerationPhase) -> &'static str {
        match phase {
            GenerationPhase::Idle => "Waiting...",
            GenerationPhase::Requesting => "Asking the model...",
            GenerationPhase::Validating => "Checking the response...",
            GenerationPhase::Cleaning => "Extracting the query...",
            GenerationPhase::Done => "Done",
            GenerationPhase::Failed => "Failed",
        }
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_phase(&self, phase: GenerationPhase) {
        match phase {
            GenerationPhase::Requesting => {
                self.spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner.set_message(Self::phase_message(phase));
            }
            // The error itself is printed by the caller.
            GenerationPhase::Done | GenerationPhase::Failed => self.spinner.finish_and_clear(),
            _ => self.spinner.set_message(Self::phase_message(phase)),
        }
    }
}

/// Simple text-based progress (no spinner), one line per phase on stderr
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_phase(&self, phase: GenerationPhase) {
        if phase.is_terminal() {
            return;
        }
        eprintln!("{} {}", "->".cyan(), ProgressReporter::phase_message(phase));
    }

    fn on_failure(&self, reason: &str) {
        eprintln!("  {} {}", "x".red(), reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_a_message() {
        for phase in [
            GenerationPhase::Idle,
            GenerationPhase::Requesting,
            GenerationPhase::Validating,
            GenerationPhase::Cleaning,
            GenerationPhase::Done,
            GenerationPhase::Failed,
        ] {
            assert!(!ProgressReporter::phase_message(phase).is_empty());
        }
    }

    #[test]
    fn test_reporter_runs_through_phases() {
        let reporter = ProgressReporter::new("claude-sonnet-4-5");
        reporter.spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        for phase in [
            GenerationPhase::Requesting,
            GenerationPhase::Validating,
            GenerationPhase::Cleaning,
            GenerationPhase::Done,
        ] {
            reporter.on_phase(phase);
        }
        assert!(reporter.spinner.is_finished());
    }
}
