//! RPN Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all RPN crates.

/// Input limits enforced by the calling layer before evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitConfig {
    /// Maximum length of the trimmed expression, in bytes
    pub max_input_len: usize,
    /// Maximum number of whitespace-separated tokens
    pub max_tokens: usize,
}

/// Evaluation phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Tokenizer,
    Validator,
    Evaluator,
    Recorder,
}

impl Phase {
    /// All phases, in evaluation order
    pub const ALL: [Phase; 4] = [
        Phase::Tokenizer,
        Phase::Validator,
        Phase::Evaluator,
        Phase::Recorder,
    ];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Tokenizer => "tokenizer",
            Phase::Validator => "validator",
            Phase::Evaluator => "evaluator",
            Phase::Recorder => "recorder",
        }
    }

    /// Get the log target name for this phase
    ///
    /// `const` so the core can use it for `tracing` targets, which must be
    /// compile-time constants.
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Tokenizer => "rpn::tokenizer",
            Phase::Validator => "rpn::validator",
            Phase::Evaluator => "rpn::evaluator",
            Phase::Recorder => "rpn::recorder",
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_input_len: 1000,
            max_tokens: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_config() {
        let cfg = LimitConfig::default();
        assert_eq!(cfg.max_input_len, 1000);
        assert_eq!(cfg.max_tokens, 500);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Tokenizer.as_str(), "tokenizer");
        assert_eq!(Phase::Evaluator.target(), "rpn::evaluator");
    }

    #[test]
    fn test_phase_target_matches_name() {
        for phase in Phase::ALL {
            assert_eq!(phase.target(), format!("rpn::{}", phase.as_str()));
        }
    }

    #[test]
    fn test_phase_all_is_ordered() {
        let names: Vec<&str> = Phase::ALL.iter().map(Phase::as_str).collect();
        assert_eq!(names, ["tokenizer", "validator", "evaluator", "recorder"]);
    }
}
