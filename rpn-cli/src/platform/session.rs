//! 交互式会话
//!
//! 每行读取一个表达式，直到 EOF 或 `quit` / `exit`。
//! 以 `:v ` 开头的行按 verbose 模式计算。

use std::io::{self, BufRead, Write};

use rpn_api::{run, RunConfig};
use tracing::debug;

use super::cli::{write_error, write_examples, write_result};

const PROMPT: &str = "rpn> ";
const HELP: &str = "\
Enter an RPN expression, e.g. `3 4 + 5 *`.
  :v <expr>   evaluate with step-by-step output
  :examples   show worked examples
  :help       show this help
  quit, exit  leave the session";

/// 运行交互式会话
///
/// 结果和错误都写到 `out`，单个表达式出错不会结束会话。
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &RunConfig,
    json: bool,
) -> io::Result<()> {
    writeln!(out, "RPN calculator. Type :help for commands, quit to exit.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            ":help" => writeln!(out, "{}", HELP)?,
            ":examples" => write_examples(out)?,
            _ => {
                let (expression, verbose) = match line.strip_prefix(":v ") {
                    Some(rest) => (rest, true),
                    None => (line, config.verbose),
                };
                debug!(target: "rpn::cli", expression, verbose, "session input");

                let line_config = RunConfig {
                    verbose,
                    limits: config.limits.clone(),
                };
                match run(expression, &line_config) {
                    Ok(output) => write_result(out, &output, json)?,
                    Err(e) => write_error(out, &e, expression, json)?,
                }
            }
        }
    }
    Ok(())
}
