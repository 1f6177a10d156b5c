//! CLI 配置
//!
//! CLI 特有的配置：按阶段划分的日志级别

use rpn_api::Phase;
use tracing::level_filters::LevelFilter;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub tokenizer: Option<LevelFilter>,
    pub validator: Option<LevelFilter>,
    pub evaluator: Option<LevelFilter>,
    pub recorder: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LevelFilter::WARN,
            tokenizer: None,
            validator: None,
            evaluator: None,
            recorder: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        let specific = match phase {
            Phase::Tokenizer => self.tokenizer,
            Phase::Validator => self.validator,
            Phase::Evaluator => self.evaluator,
            Phase::Recorder => self.recorder,
        };
        specific.unwrap_or(self.global)
    }
}
