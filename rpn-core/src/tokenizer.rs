//! 分词器
//!
//! 去掉首尾空白后按一个或多个空白字符切分。纯函数，无副作用。

use tracing::{debug, trace};

use crate::error::CalculationError;
use rpn_config::Phase;

const TARGET: &str = Phase::Tokenizer.target();

/// 把原始输入切分为非空 token 序列
///
/// # Errors
/// 输入为空或只有空白时返回 `CalculationError::EmptyExpression`
pub fn tokenize(expression: &str) -> Result<Vec<&str>, CalculationError> {
    let tokens: Vec<&str> = expression.trim().split_whitespace().collect();

    if tokens.is_empty() {
        debug!(target: TARGET, "empty expression");
        return Err(CalculationError::EmptyExpression);
    }

    for (index, token) in tokens.iter().enumerate() {
        trace!(target: TARGET, index, token, "produced token");
    }
    debug!(target: TARGET, count = tokens.len(), "tokenizer completed");

    Ok(tokens)
}
