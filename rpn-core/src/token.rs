//! Token 与运算符定义
//!
//! 校验阶段把每个 token 字符串分类一次，求值阶段只消费分类结果，
//! 不会在求值过程中重新解析字符串。

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::CalculationError;

/// 二元运算符（封闭集合 `+ - * / ^`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// 加法: `a b +`
    Add,
    /// 减法: `a b -`
    Sub,
    /// 乘法: `a b *`
    Mul,
    /// 除法: `a b /`
    Div,
    /// 乘方: `a b ^`
    Pow,
}

impl Operator {
    /// 全部支持的运算符
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// 从符号解析运算符（必须完全匹配）
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            _ => None,
        }
    }

    /// 获取运算符的符号表示
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    /// 对 `a` (先入栈) 和 `b` (栈顶) 应用运算符
    ///
    /// 除法在计算前检查 `b == 0`，不依赖 IEEE 无穷大传播。
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalculationError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operator::Pow => Ok(a.powf(b)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// 分类后的 token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// 有限的双精度数
    Operand(f64),
    /// 二元运算符
    Operator(Operator),
}

impl Token {
    /// 对单个 token 字符串分类
    ///
    /// 运算符优先匹配，因此 `-` 是运算符，而 `-3` 是数字。
    /// 非有限值（`inf`、`NaN`、溢出的字面量）视为非法 token。
    pub fn classify(text: &str) -> Result<Self, CalculationError> {
        if let Some(op) = Operator::from_symbol(text) {
            return Ok(Token::Operator(op));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Operand(value)),
            _ => Err(CalculationError::InvalidToken(text.to_string())),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }
}
