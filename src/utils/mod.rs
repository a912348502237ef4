//! # 常用工具模块
//!
//! 分类流程中用到的辅助工具：配置加载、日志、归档解压、计时、文件删除，
//! 以及按名称构建层的注册表。

mod archive;
mod config;
mod error;
mod fs;
mod logger;
mod registry;
mod timer;

#[cfg(test)]
mod tests;

pub mod macro_for_unit_test;

pub use archive::{expand_user, extract_to};
pub use config::{Config, DEFAULT_CONFIG_PATH, load_config, load_config_as};
pub use error::UtilError;
pub use fs::delete_if_exists;
pub use logger::{
    DEFAULT_LOGGER_NAME, LOG_ENV, Logger, default_logger, get_logger,
    is_default_logger_initialized, is_sink_installed, reset_default_logger,
};
pub use registry::{LayerFactory, LayerRegistry};
pub use timer::{Timer, TimerGuard, time};
