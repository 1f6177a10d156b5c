//! 步骤记录（verbose 模式）
//!
//! 求值器在每次压栈和每次运算后通知一个 [`StepSink`]。
//! 普通求值使用 [`NoopSink`]，verbose 模式使用 [`StepRecorder`]，
//! 两者走的是同一条求值路径，因此结果和错误完全一致。

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::token::Operator;
use rpn_config::Phase;

const TARGET: &str = Phase::Recorder.target();

/// 单个求值步骤，创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// 数字入栈
    Push {
        /// 原始 token 文本
        token: String,
        /// 解析后的值
        value: f64,
        /// 入栈后的栈快照
        stack: Vec<f64>,
    },
    /// 运算符应用
    Operation {
        operator: Operator,
        /// `[a, b]`，`a` 先入栈
        operands: [f64; 2],
        result: f64,
        /// 结果入栈后的栈快照
        stack: Vec<f64>,
    },
}

impl Step {
    /// 该步骤之后的栈快照
    pub fn stack(&self) -> &[f64] {
        match self {
            Step::Push { stack, .. } | Step::Operation { stack, .. } => stack,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Push { value, stack, .. } => {
                write!(f, "push {} -> {}", value, StackDisplay(stack))
            }
            Step::Operation {
                operator,
                operands: [a, b],
                result,
                stack,
            } => write!(
                f,
                "{} {} {} = {} -> {}",
                a,
                operator,
                b,
                result,
                StackDisplay(stack)
            ),
        }
    }
}

/// 栈的显示格式: `[3, 4.5]`
pub struct StackDisplay<'a>(pub &'a [f64]);

impl fmt::Display for StackDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// 求值事件的接收者
pub trait StepSink {
    /// 数字已入栈，`stack` 为入栈后的状态
    fn on_push(&mut self, token: &str, value: f64, stack: &[f64]) {
        let _ = (token, value, stack);
    }

    /// 运算已完成，`stack` 为结果入栈后的状态
    fn on_operation(&mut self, operator: Operator, a: f64, b: f64, result: f64, stack: &[f64]) {
        let _ = (operator, a, b, result, stack);
    }
}

/// 忽略所有事件
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl StepSink for NoopSink {}

/// 把每个事件记录为带栈快照的 [`Step`]
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的步骤
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl StepSink for StepRecorder {
    fn on_push(&mut self, token: &str, value: f64, stack: &[f64]) {
        let step = Step::Push {
            token: token.to_string(),
            value,
            stack: stack.to_vec(),
        };
        trace!(target: TARGET, step = %step, "recorded");
        self.steps.push(step);
    }

    fn on_operation(&mut self, operator: Operator, a: f64, b: f64, result: f64, stack: &[f64]) {
        let step = Step::Operation {
            operator,
            operands: [a, b],
            result,
            stack: stack.to_vec(),
        };
        trace!(target: TARGET, step = %step, "recorded");
        self.steps.push(step);
    }
}
