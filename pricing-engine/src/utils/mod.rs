//! 工具模块 - logging setup and date helpers

pub mod logger;
pub mod time;
