//! CLI 格式化输出
//!
//! 提供命令行友好的结果、步骤和错误显示。

use std::io::{self, Write};

use rpn_api::{quick_run, CalculationError, CalculationResult, CalculatorInfo, Operator, RpnError};

/// 演示用表达式及其期望结果
pub const EXAMPLES: [(&str, f64); 5] = [
    ("3 4 + 5 *", 35.0),
    ("5 1 2 + 4 * + 3 -", 14.0),
    ("15 7 1 1 + - / 3 * 2 1 1 + + -", 5.0),
    ("1 2 + 3 4 + *", 21.0),
    ("4 2 + 3 5 1 - * +", 18.0),
];

/// 打印计算结果（verbose 模式下先逐行打印步骤）
pub fn write_result<W: Write>(out: &mut W, output: &CalculationResult, json: bool) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(output).map_err(io::Error::other)?;
        return writeln!(out, "{}", text);
    }

    if let Some(steps) = &output.steps {
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, step)?;
        }
        return writeln!(out, "Result: {}", output.result);
    }

    writeln!(out, "{}", output.result)
}

/// 打印错误，并在能定位时用 `^` 标出出错的 token
pub fn write_error<W: Write>(out: &mut W, e: &RpnError, expression: &str, json: bool) -> io::Result<()> {
    if json {
        return writeln!(out, "{}", e.to_report().to_json());
    }

    writeln!(out, "Error: {}", e)?;

    if let Some(col) = error_column(e, expression) {
        let marker: String = std::iter::repeat(' ').take(col).collect();
        writeln!(out, "  {}", expression.trim())?;
        writeln!(out, "  {}^", marker)?;
    }
    Ok(())
}

/// 打印计算器信息
pub fn write_info<W: Write>(out: &mut W, info: &CalculatorInfo, json: bool) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(info).map_err(io::Error::other)?;
        return writeln!(out, "{}", text);
    }

    writeln!(out, "{} v{}", info.name, info.version)?;
    writeln!(out, "{}", info.description)?;
    writeln!(out, "Operators: {}", info.supported_operators.join(" "))?;
    writeln!(out, "Features:")?;
    for feature in &info.features {
        writeln!(out, "  - {}", feature)?;
    }
    Ok(())
}

/// 计算并打印全部演示表达式
pub fn write_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Examples:")?;
    for (expression, _) in EXAMPLES {
        match quick_run(expression, false) {
            Ok(output) => writeln!(out, "  {:<32} = {}", expression, output.result)?,
            Err(e) => writeln!(out, "  {:<32} ! {}", expression, e)?,
        }
    }
    Ok(())
}

/// 出错 token 在去掉首尾空白后的表达式中的列号（按字符计）
///
/// 非法 token 取第一次出现的位置；操作数不足时取第一个让栈深度不够的运算符。
pub fn error_column(e: &RpnError, expression: &str) -> Option<usize> {
    let token = e.token()?;
    let trimmed = expression.trim();

    let offset = match e {
        RpnError::Calculation(CalculationError::InsufficientOperands(_)) => underflow_offset(trimmed)?,
        _ => token_offsets(trimmed)
            .find(|(_, text)| *text == token)
            .map(|(offset, _)| offset)?,
    };

    Some(trimmed[..offset].chars().count())
}

/// 每个 token 的字节偏移和文本
fn token_offsets(s: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    s.split_whitespace()
        .map(move |text| (text.as_ptr() as usize - s.as_ptr() as usize, text))
}

fn underflow_offset(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, text) in token_offsets(s) {
        if Operator::from_symbol(text).is_some() {
            if depth < 2 {
                return Some(offset);
            }
            depth -= 1;
        } else {
            depth += 1;
        }
    }
    None
}
