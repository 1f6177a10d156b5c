//! 平台相关的输出和交互

pub mod cli;
pub mod session;

pub use cli::{write_error, write_examples, write_info, write_result};
pub use session::run_session;
