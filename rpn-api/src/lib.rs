//! RPN API - Calling layer around the evaluator core
//!
//! Provides a unified execution interface, including:
//! - Input limits (RunConfig)
//! - Unified error handling (RpnError) and structured reports (ErrorReport)
//! - Calculator metadata (CalculatorInfo)
//!
//! For CLI convenience, this crate provides a global singleton config.
//! For library use, prefer the explicit `run(expression, &config)` API.

use tracing::{debug, info, instrument, warn};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod error;
pub mod types;
pub use error::{CalculationError, ErrorReport, RpnError};
pub use types::{calculator_info, CalculatorInfo};

// Re-export core and config types
pub use rpn_config::{self, LimitConfig, Phase};
pub use rpn_core::{CalculationResult, Operator, Step};

/// Evaluate with explicit configuration
///
/// This is the recommended API for library users.
///
/// # Errors
/// `RpnError::InputTooLong` / `RpnError::TooManyTokens` when the input exceeds
/// `config.limits`; otherwise whatever the evaluator reports.
#[instrument(target = "rpn::api", skip(expression, config), fields(len = expression.len(), verbose = config.verbose))]
pub fn run(expression: &str, config: &RunConfig) -> Result<CalculationResult, RpnError> {
    check_limits(expression, config)?;

    let output = rpn_core::evaluate(expression, config.verbose).inspect_err(|e| {
        warn!(target: "rpn::api", kind = e.kind(), error = %e, "calculation failed");
    })?;

    info!(target: "rpn::api", result = output.result, "calculation completed");
    Ok(output)
}

/// Reject input exceeding the configured limits before evaluation
fn check_limits(expression: &str, config: &RunConfig) -> Result<(), RpnError> {
    let limits = &config.limits;
    let trimmed = expression.trim();

    if trimmed.len() > limits.max_input_len {
        return Err(RpnError::InputTooLong {
            len: trimmed.len(),
            max: limits.max_input_len,
        });
    }

    let count = trimmed.split_whitespace().count();
    if count > limits.max_tokens {
        return Err(RpnError::TooManyTokens {
            count,
            max: limits.max_tokens,
        });
    }

    debug!(target: "rpn::api", len = trimmed.len(), tokens = count, "limits ok");
    Ok(())
}

/// Evaluate using the global config
pub fn calculate(expression: &str) -> Result<CalculationResult, RpnError> {
    run(expression, get_config())
}

/// Quick evaluation with default limits, ignoring the global config
pub fn quick_run(expression: &str, verbose: bool) -> Result<CalculationResult, RpnError> {
    run(expression, &RunConfig::with_verbose(verbose))
}
