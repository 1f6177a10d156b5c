//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 计算错误（核心层）
pub use rpn_core::CalculationError;

/// RPN API 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RpnError {
    /// 核心计算错误
    #[error("{0}")]
    Calculation(#[from] CalculationError),

    /// 输入超过长度限制
    #[error("Expression too long: {len} bytes (max {max})")]
    InputTooLong { len: usize, max: usize },

    /// token 数量超过限制
    #[error("Too many tokens: {count} (max {max})")]
    TooManyTokens { count: usize, max: usize },
}

impl RpnError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            RpnError::Calculation(e) => match e {
                CalculationError::EmptyExpression => "tokenizer",
                CalculationError::InvalidToken(_)
                | CalculationError::NoOperand
                | CalculationError::TooManyOperators => "validator",
                CalculationError::InsufficientOperands(_)
                | CalculationError::DivisionByZero
                | CalculationError::MalformedExpression => "evaluator",
            },
            RpnError::InputTooLong { .. } | RpnError::TooManyTokens { .. } => "limits",
        }
    }

    /// 错误类型名
    pub fn kind(&self) -> &'static str {
        match self {
            RpnError::Calculation(e) => e.kind(),
            RpnError::InputTooLong { .. } => "InputTooLong",
            RpnError::TooManyTokens { .. } => "TooManyTokens",
        }
    }

    /// 错误所指向的 token（如果有）
    pub fn token(&self) -> Option<String> {
        match self {
            RpnError::Calculation(e) => e.token(),
            _ => None,
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于 Web API 等需要结构化数据的场景。
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            error_kind: self.kind(),
            message: self.to_string(),
            token: self.token(),
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、Web）可以根据自己的需求格式化，但不应改变错误分类。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: tokenizer, validator, evaluator, limits
    pub phase: &'static str,
    /// 错误类型（可用于程序化处理）
    pub error_kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
    /// 相关 token（非法 token 或缺少操作数的运算符）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.phase, self.error_kind, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（Web API 使用）
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| fallback_json(self.phase, &e.to_string()))
    }

    /// 简洁格式（与原 Web 服务的错误消息一致）
    pub fn to_short(&self) -> String {
        format!("Calculation error: {}", self.message)
    }
}

/// 序列化失败时的最小报告，字段仍经过 JSON 转义
fn fallback_json(phase: &str, message: &str) -> String {
    serde_json::json!({
        "phase": phase,
        "error_kind": "SerializeError",
        "message": message,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpn_core::Operator;

    #[test]
    fn test_calculation_error_phase() {
        let err = RpnError::from(CalculationError::EmptyExpression);
        assert_eq!(err.phase(), "tokenizer");

        let err = RpnError::from(CalculationError::InvalidToken("x".into()));
        assert_eq!(err.phase(), "validator");

        let err = RpnError::from(CalculationError::DivisionByZero);
        assert_eq!(err.phase(), "evaluator");
    }

    #[test]
    fn test_limit_error_phase() {
        let err = RpnError::InputTooLong { len: 2000, max: 1000 };
        assert_eq!(err.phase(), "limits");
        assert_eq!(err.kind(), "InputTooLong");
        assert_eq!(err.to_string(), "Expression too long: 2000 bytes (max 1000)");
    }

    #[test]
    fn test_calculation_error_display_is_transparent() {
        let err = RpnError::from(CalculationError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_to_report() {
        let err = RpnError::from(CalculationError::InsufficientOperands(Operator::Sub));
        let report = err.to_report();

        assert_eq!(report.phase, "evaluator");
        assert_eq!(report.error_kind, "InsufficientOperands");
        assert_eq!(report.message, "Insufficient operands for operator '-'");
        assert_eq!(report.token.as_deref(), Some("-"));
    }

    #[test]
    fn test_error_report_display() {
        let report = RpnError::from(CalculationError::MalformedExpression).to_report();
        let display = format!("{}", report);
        assert!(display.contains("[evaluator]"));
        assert!(display.contains("MalformedExpression"));
        assert!(display.contains("Malformed expression"));
    }

    #[test]
    fn test_error_report_to_json() {
        let report = RpnError::from(CalculationError::InvalidToken("a\"b".into())).to_report();
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        assert_eq!(json["phase"], "validator");
        assert_eq!(json["error_kind"], "InvalidToken");
        assert_eq!(json["message"], "Invalid token: a\"b");
        assert_eq!(json["token"], "a\"b");
    }

    #[test]
    fn test_error_report_to_json_without_token() {
        let report = RpnError::from(CalculationError::NoOperand).to_report();
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert!(json.get("token").is_none());
    }

    #[test]
    fn test_error_report_to_short() {
        let report = RpnError::from(CalculationError::DivisionByZero).to_report();
        assert_eq!(report.to_short(), "Calculation error: Division by zero");
    }

    #[test]
    fn test_fallback_json_escapes_message() {
        let text = fallback_json("validator", "bad \"quote\" and \\ slash");
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error_kind"], "SerializeError");
        assert_eq!(json["message"], "bad \"quote\" and \\ slash");
    }
}
