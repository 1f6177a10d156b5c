//! API 类型定义
//!
//! 计算器服务的元信息。

use rpn_core::Operator;
use serde::Serialize;

/// 计算器信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// 支持的运算符符号
    pub supported_operators: Vec<&'static str>,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

/// 对外公布的服务版本，与 crate 版本无关
pub const SERVICE_VERSION: &str = "1.0.0";

/// 获取计算器信息
pub fn calculator_info() -> CalculatorInfo {
    CalculatorInfo {
        name: "RPN Calculator Service",
        version: SERVICE_VERSION,
        supported_operators: Operator::ALL.iter().map(Operator::symbol).collect(),
        description: "Reverse Polish Notation calculator",
        features: vec![
            "Basic arithmetic operations",
            "Exponentiation",
            "Step-by-step verbose mode",
            "Input validation",
            "Error handling",
        ],
    }
}
