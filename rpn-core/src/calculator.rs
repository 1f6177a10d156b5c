//! 计算入口
//!
//! `evaluate` 把分词、校验、求值和（可选的）步骤记录串起来。
//! 每次调用都是独立的纯计算，没有任何跨调用的共享状态。

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::CalculationError;
use crate::evaluator::execute;
use crate::steps::{NoopSink, Step, StepRecorder};
use crate::tokenizer::tokenize;
use crate::validator::validate_tokens;
use rpn_config::Phase;

const TARGET: &str = Phase::Evaluator.target();

/// 一次成功计算的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// 去掉首尾空白后的表达式
    pub expression: String,
    /// 计算结果
    pub result: f64,
    /// 求值步骤，当且仅当请求了 verbose 模式时存在
    pub steps: Option<Vec<Step>>,
    /// 完成时间，Unix 毫秒时间戳
    ///
    /// 注意不是 ISO-8601 字符串；需要日期格式的调用方自行转换。
    pub timestamp: u64,
}

/// 计算 RPN 表达式
///
/// `verbose` 为真时在结果中附带逐步的栈快照。两种模式执行同一条求值路径，
/// 所以对相同输入返回相同的结果或相同的错误；失败时不返回部分步骤。
///
/// # Example
/// ```
/// let output = rpn_core::evaluate("5 1 2 + 4 * + 3 -", false).unwrap();
/// assert_eq!(output.result, 14.0);
/// assert!(output.steps.is_none());
/// ```
pub fn evaluate(expression: &str, verbose: bool) -> Result<CalculationResult, CalculationError> {
    let raw = tokenize(expression)?;
    let validated = validate_tokens(&raw)?;

    let (result, steps) = if verbose {
        let mut recorder = StepRecorder::new();
        let result = execute(&raw, &validated.tokens, &mut recorder)?;
        (result, Some(recorder.into_steps()))
    } else {
        (execute(&raw, &validated.tokens, &mut NoopSink)?, None)
    };

    debug!(target: TARGET, result, verbose, "evaluation completed");

    Ok(CalculationResult {
        expression: expression.trim().to_string(),
        result,
        steps,
        timestamp: current_timestamp_ms(),
    })
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
