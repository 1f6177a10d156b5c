//! RPN Core - Reverse Polish Notation evaluator (pure logic, no IO)
//!
//! Contains the tokenizer, validator, stack-machine evaluator, and the
//! verbose-mode step recorder.
//! Only operates on caller-owned input; no global state, no file IO or
//! terminal output. Every call to [`evaluate`] is independent.
//!
//! # Quick Start
//!
//! ```
//! use rpn_core::{evaluate, CalculationError};
//!
//! assert_eq!(evaluate("3 4 +", false).unwrap().result, 7.0);
//! assert_eq!(evaluate("5 0 /", false), Err(CalculationError::DivisionByZero));
//! ```

pub mod calculator;
pub mod error;
pub mod evaluator;
pub mod steps;
pub mod token;
pub mod tokenizer;
pub mod validator;

// Re-export common types
pub use calculator::{evaluate, CalculationResult};
pub use error::CalculationError;
pub use steps::{NoopSink, Step, StepRecorder, StepSink};
pub use token::{Operator, Token};
pub use tokenizer::tokenize;
pub use validator::{validate, Validated};

// Re-export config types from rpn-config
pub use rpn_config::{LimitConfig, Phase};
