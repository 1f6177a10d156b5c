//! 求值器
//!
//! 对校验后的 token 序列做一次从左到右的栈机执行。
//! 栈只属于一次调用，开始时为空，结束时丢弃。

use tracing::{debug, trace};

use crate::error::CalculationError;
use crate::steps::StepSink;
use crate::token::Token;
use rpn_config::Phase;

const TARGET: &str = Phase::Evaluator.target();

/// 求值工作栈
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 压栈
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// 弹出两个值 (先弹出的是右操作数)，返回 `(a, b)`
    #[inline]
    pub fn pop_two(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let b = self.values.pop()?;
        let a = self.values.pop()?;
        Some((a, b))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// 消费栈，取出唯一剩余的值
    ///
    /// # Errors
    /// 栈上不是恰好一个值时返回 `CalculationError::MalformedExpression`
    pub fn into_result(self) -> Result<f64, CalculationError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(CalculationError::MalformedExpression),
        }
    }
}

/// 执行栈机
///
/// `raw` 与 `tokens` 一一对应，`raw` 仅用于向 `sink` 报告原始 token 文本。
/// 任何错误都立即返回，不做恢复。
pub fn execute<S: StepSink>(
    raw: &[&str],
    tokens: &[Token],
    sink: &mut S,
) -> Result<f64, CalculationError> {
    debug_assert_eq!(raw.len(), tokens.len());

    let mut stack = Stack::new();

    for (text, token) in raw.iter().zip(tokens) {
        match *token {
            Token::Operand(value) => {
                stack.push(value);
                trace!(target: TARGET, value, depth = stack.len(), "push");
                sink.on_push(text, value, stack.as_slice());
            }
            Token::Operator(op) => {
                let (a, b) = stack.pop_two().ok_or_else(|| {
                    debug!(target: TARGET, operator = %op, depth = stack.len(), "stack underflow");
                    CalculationError::InsufficientOperands(op)
                })?;
                let result = op.apply(a, b)?;
                stack.push(result);
                trace!(target: TARGET, a, operator = %op, b, result, "apply");
                sink.on_operation(op, a, b, result, stack.as_slice());
            }
        }
    }

    debug!(target: TARGET, depth = stack.len(), "all tokens consumed");
    stack.into_result()
}
