//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。
//! 日志写到 stderr，stdout 只留给计算结果。

use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;
use rpn_api::Phase;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 构建各阶段的目标过滤器
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(*phase))
        })
        .with_target("rpn::api", log_config.global)
        .with_target("rpn::cli", log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 指定文件时同时输出到 stderr 和文件。
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = build_targets(log_config);
    let stderr_layer = create_format_layer(format).with_filter(targets.clone());

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .try_init()
            .map_err(io::Error::other)
    } else {
        tracing_subscriber::registry()
            .with(stderr_layer)
            .try_init()
            .map_err(io::Error::other)
    }
}

/// Create formatter layer based on format
fn create_format_layer(format: LogFormat) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(io::stderr)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;
    use tracing::Level;

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }

    #[test]
    fn test_targets_per_phase() {
        let cfg = LogConfig {
            global: LevelFilter::WARN,
            evaluator: Some(LevelFilter::TRACE),
            ..Default::default()
        };
        let targets = build_targets(&cfg);

        assert!(targets.would_enable("rpn::evaluator", &Level::TRACE));
        assert!(!targets.would_enable("rpn::tokenizer", &Level::DEBUG));
        assert!(targets.would_enable("rpn::tokenizer", &Level::WARN));
        assert!(!targets.would_enable("rpn::api", &Level::INFO));
    }

    #[test]
    fn test_targets_off() {
        let cfg = LogConfig {
            global: LevelFilter::OFF,
            ..Default::default()
        };
        let targets = build_targets(&cfg);
        assert!(!targets.would_enable("rpn::validator", &Level::ERROR));
    }
}
