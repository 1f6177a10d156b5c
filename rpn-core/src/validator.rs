//! 校验器
//!
//! 对 token 分类并做基于计数的静态检查。这里不做任何算术。

use tracing::debug;

use crate::error::CalculationError;
use crate::token::Token;
use crate::tokenizer::tokenize;
use rpn_config::Phase;

const TARGET: &str = Phase::Validator.target();

/// 校验结果：分类后的 token 以及计数
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// 按输入顺序排列的 token
    pub tokens: Vec<Token>,
    /// 数字 token 数量
    pub operand_count: usize,
    /// 运算符 token 数量
    pub operator_count: usize,
}

/// 对已切分的 token 分类并做静态检查
///
/// 检查顺序：非法 token → 没有数字 → 运算符过多。
///
/// 运算符过多的预检在 `operator_count >= operand_count` 时拒绝，所以 `3 +`
/// 在这里就失败。它只是快速拒绝，不是语法检查：`1 + 2` 能通过，
/// 由求值器报告缺少操作数。
pub fn validate_tokens(raw: &[&str]) -> Result<Validated, CalculationError> {
    let tokens = raw
        .iter()
        .map(|text| Token::classify(text))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| debug!(target: TARGET, error = %e, "classification failed"))?;

    let operand_count = tokens.iter().filter(|t| t.is_operand()).count();
    let operator_count = tokens.len() - operand_count;

    debug!(target: TARGET, operand_count, operator_count, "tokens classified");

    if operand_count == 0 {
        return Err(CalculationError::NoOperand);
    }

    if operator_count >= operand_count {
        return Err(CalculationError::TooManyOperators);
    }

    Ok(Validated {
        tokens,
        operand_count,
        operator_count,
    })
}

/// 分词并校验
pub fn validate(expression: &str) -> Result<Validated, CalculationError> {
    let raw = tokenize(expression)?;
    validate_tokens(&raw)
}
