//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use rpn_config::LimitConfig;

/// Execution configuration
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Whether to record evaluation steps
    pub verbose: bool,
    /// Input limits
    pub limits: LimitConfig,
}

impl RunConfig {
    /// Default configuration with verbose mode switched on or off
    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Returns `false` (and keeps the existing value) if already initialized.
pub fn init(config: RunConfig) -> bool {
    GLOBAL_CONFIG.set(config).is_ok()
}

/// Get global config reference, initializing defaults on first use
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.verbose);
        assert_eq!(cfg.limits.max_input_len, 1000);
        assert_eq!(cfg.limits.max_tokens, 500);
    }

    #[test]
    fn test_with_verbose() {
        let cfg = RunConfig::with_verbose(true);
        assert!(cfg.verbose);
        assert_eq!(cfg.limits, LimitConfig::default());
    }

    #[test]
    fn test_run_config_debug() {
        let cfg = RunConfig::default();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("verbose"));
        assert!(debug_str.contains("limits"));
    }

    #[test]
    fn test_global_config_get() {
        // 全局状态在测试间共享：只检查 config() 之后一定已初始化
        let _ = config();
        assert!(is_initialized());
        assert!(!init(RunConfig::with_verbose(true)) || config().verbose);
    }
}
