//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use rpn_core::{evaluate, CalculationError, Step};

/// 计算表达式并返回结果值
pub fn calc(expression: &str) -> Result<f64, CalculationError> {
    evaluate(expression, false).map(|output| output.result)
}

/// 以 verbose 模式计算并返回 (结果, 步骤)
pub fn calc_verbose(expression: &str) -> Result<(f64, Vec<Step>), CalculationError> {
    let output = evaluate(expression, true)?;
    let steps = output.steps.unwrap_or_default();
    Ok((output.result, steps))
}

/// 获取计算错误（表达式必须失败）
pub fn calc_err(expression: &str) -> CalculationError {
    match evaluate(expression, false) {
        Ok(output) => panic!(
            "expected '{}' to fail, got result {}",
            expression, output.result
        ),
        Err(e) => e,
    }
}
