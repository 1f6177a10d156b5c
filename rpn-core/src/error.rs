//! 计算错误类型
//!
//! 每个错误都在其产生的位置同步返回，不做恢复，也不返回部分结果。

use thiserror::Error;

use crate::token::Operator;

/// RPN 计算错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// 输入为空或只有空白
    #[error("Expression cannot be empty")]
    EmptyExpression,

    /// 既不是数字也不是运算符的 token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 没有任何数字 token
    #[error("Expression must contain at least one number")]
    NoOperand,

    /// 静态预检：运算符数量过多
    #[error("Invalid RPN expression: too many operators")]
    TooManyOperators,

    /// 遇到运算符时栈上不足两个值
    #[error("Insufficient operands for operator '{0}'")]
    InsufficientOperands(Operator),

    /// `/` 的右操作数恰好为零
    #[error("Division by zero")]
    DivisionByZero,

    /// 全部 token 消费完后栈上不是恰好一个值
    #[error("Malformed expression: elements remaining in stack")]
    MalformedExpression,
}

impl CalculationError {
    /// 稳定的错误类型名（可用于程序化处理）
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationError::EmptyExpression => "EmptyExpression",
            CalculationError::InvalidToken(_) => "InvalidToken",
            CalculationError::NoOperand => "NoOperand",
            CalculationError::TooManyOperators => "TooManyOperators",
            CalculationError::InsufficientOperands(_) => "InsufficientOperands",
            CalculationError::DivisionByZero => "DivisionByZero",
            CalculationError::MalformedExpression => "MalformedExpression",
        }
    }

    /// 错误所指向的 token 文本（如果有）
    pub fn token(&self) -> Option<String> {
        match self {
            CalculationError::InvalidToken(token) => Some(token.clone()),
            CalculationError::InsufficientOperands(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }
}
