//! RPN CLI - 命令行入口
//!
//! 纯前端，无业务逻辑。只负责参数解析、日志初始化和调用 API。

mod config;
mod logging;
mod platform;

use clap::Parser;
use std::io;
use std::process;
use tracing::level_filters::LevelFilter;

use config::LogConfig;
use logging::{init_with_file, LogFormat};
use platform::{run_session, write_error, write_examples, write_info, write_result};
use rpn_api::{calculate, calculator_info, get_config, init_config, LimitConfig, RunConfig};

#[derive(Parser)]
#[command(
    name = "rpn",
    about = "Reverse Polish Notation calculator",
    version
)]
struct Cli {
    /// 要计算的表达式；省略时进入交互模式
    expression: Option<String>,

    /// 显示逐步的栈变化
    #[arg(long)]
    verbose: bool,

    /// 以 JSON 输出结果或错误报告
    #[arg(long)]
    json: bool,

    /// 显示示例表达式
    #[arg(long)]
    examples: bool,

    /// 显示计算器信息
    #[arg(long)]
    info: bool,

    /// 日志级别 (-v=info, -vv=debug, -vvv=trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_verbosity: u8,

    /// Tokenizer 日志级别
    #[arg(long, value_enum)]
    log_tokenizer: Option<LogLevelArg>,

    /// Validator 日志级别
    #[arg(long, value_enum)]
    log_validator: Option<LogLevelArg>,

    /// Evaluator 日志级别
    #[arg(long, value_enum)]
    log_evaluator: Option<LogLevelArg>,

    /// Recorder 日志级别
    #[arg(long, value_enum)]
    log_recorder: Option<LogLevelArg>,

    /// 日志输出格式
    #[arg(long, value_enum, default_value = "compact")]
    format: LogFormatArg,

    /// 日志输出到文件
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// 表达式最大长度（字节）
    #[arg(long, value_name = "BYTES")]
    max_input_len: Option<usize>,

    /// 最大 token 数
    #[arg(long, value_name = "COUNT")]
    max_tokens: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let format = match cli.format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    if let Err(e) = init_with_file(&build_log_config(&cli), format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot initialize logging: {}", e);
        process::exit(1);
    }

    init_config(build_run_config(&cli));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = if cli.info {
        write_info(&mut out, &calculator_info(), cli.json)
    } else if cli.examples {
        write_examples(&mut out)
    } else if let Some(expression) = &cli.expression {
        handle_expression(&mut out, expression, cli.json)
    } else {
        tracing::info!(target: "rpn::cli", "starting interactive session");
        run_session(io::stdin().lock(), &mut out, get_config(), cli.json)
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_expression<W: io::Write>(out: &mut W, expression: &str, json: bool) -> io::Result<()> {
    match calculate(expression) {
        Ok(output) => write_result(out, &output, json),
        Err(e) => {
            // JSON 报告走 stdout 方便工具解析，文本错误走 stderr
            if json {
                write_error(out, &e, expression, true)?;
            } else {
                write_error(&mut io::stderr().lock(), &e, expression, false)?;
            }
            out.flush()?;
            process::exit(1);
        }
    }
}

fn build_run_config(cli: &Cli) -> RunConfig {
    let defaults = LimitConfig::default();
    RunConfig {
        verbose: cli.verbose,
        limits: LimitConfig {
            max_input_len: cli.max_input_len.unwrap_or(defaults.max_input_len),
            max_tokens: cli.max_tokens.unwrap_or(defaults.max_tokens),
        },
    }
}

fn build_log_config(cli: &Cli) -> LogConfig {
    // 根据 -v 次数确定全局级别
    let global = match cli.log_verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    LogConfig {
        global,
        tokenizer: cli.log_tokenizer.map(to_level_filter),
        validator: cli.log_validator.map(to_level_filter),
        evaluator: cli.log_evaluator.map(to_level_filter),
        recorder: cli.log_recorder.map(to_level_filter),
    }
}

fn to_level_filter(level: LogLevelArg) -> LevelFilter {
    match level {
        LogLevelArg::Off => LevelFilter::OFF,
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    }
}
