//! Generation phase value object

use serde::{Deserialize, Serialize};

/// States of one generation call.
///
/// `Idle → Requesting → Validating → Cleaning → Done`, or `Failed` from any
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    Idle,
    /// Waiting on the text-generation service.
    Requesting,
    /// Cheap keyword check on the raw response.
    Validating,
    /// Extraction, normalization and the final validation.
    Cleaning,
    Done,
    Failed,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Requesting => "requesting",
            GenerationPhase::Validating => "validating",
            GenerationPhase::Cleaning => "cleaning",
            GenerationPhase::Done => "done",
            GenerationPhase::Failed => "failed",
        }
    }

    /// Whether no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Done | GenerationPhase::Failed)
    }

    /// The phase that follows on success, if any.
    pub fn next(&self) -> Option<GenerationPhase> {
        match self {
            GenerationPhase::Idle => Some(GenerationPhase::Requesting),
            GenerationPhase::Requesting => Some(GenerationPhase::Validating),
            GenerationPhase::Validating => Some(GenerationPhase::Cleaning),
            GenerationPhase::Cleaning => Some(GenerationPhase::Done),
            GenerationPhase::Done | GenerationPhase::Failed => None,
        }
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_order() {
        let mut phase = GenerationPhase::Idle;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            phase = next;
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                GenerationPhase::Idle,
                GenerationPhase::Requesting,
                GenerationPhase::Validating,
                GenerationPhase::Cleaning,
                GenerationPhase::Done,
            ]
        );
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GenerationPhase::Done.is_terminal());
        assert!(GenerationPhase::Failed.is_terminal());
        assert!(!GenerationPhase::Cleaning.is_terminal());
        assert_eq!(GenerationPhase::Failed.next(), None);
    }
}
