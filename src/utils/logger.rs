//! 日志
//!
//! 所有日志都经由`log`门面输出，具名日志器（[`Logger`]）只是以其名称作为 target 的轻量句柄。
//! 默认日志器在首次使用时才创建，并在进程内唯一地安装`env_logger`输出端：
//! - 输出到 stderr，格式为`<时间> <名称> <级别> <消息>`
//! - 默认级别为 INFO，可通过环境变量`WILDCAT_LOG`覆盖（语法同`RUST_LOG`）
//!
//! [`reset_default_logger`]仅用于测试隔离：它丢弃进程内的默认日志器句柄，
//! 下次调用[`default_logger`]时重新创建；`log`的全局输出端一经安装便不会卸载。

use std::fmt::Display;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter};
use once_cell::sync::{Lazy, OnceCell};

/// 默认日志器的名称
pub const DEFAULT_LOGGER_NAME: &str = "ALL";
/// 覆盖日志过滤规则的环境变量
pub const LOG_ENV: &str = "WILDCAT_LOG";

static DEFAULT_LOGGER: Lazy<Mutex<Option<Logger>>> = Lazy::new(|| Mutex::new(None));
static SINK_INSTALLED: OnceCell<bool> = OnceCell::new();

/// 具名日志器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.name(), level)
    }

    pub fn log(&self, level: Level, message: impl Display) {
        log::log!(target: self.name(), level, "{message}");
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }
}

/// 获取名为`name`的日志器
pub fn get_logger(name: &str) -> Logger {
    Logger {
        name: name.to_string(),
    }
}

/// 获取默认日志器（名称为`ALL`），首次调用时安装日志输出端
pub fn default_logger() -> Logger {
    let mut slot = DEFAULT_LOGGER
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    slot.get_or_insert_with(|| {
        install_sink();
        get_logger(DEFAULT_LOGGER_NAME)
    })
    .clone()
}

/// 丢弃默认日志器句柄，使下次`default_logger()`重新创建它
pub fn reset_default_logger() {
    DEFAULT_LOGGER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}

pub fn is_default_logger_initialized() -> bool {
    DEFAULT_LOGGER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// 本库的输出端是否装上了（若宿主程序先装了别的`log`实现，则为`false`）
pub fn is_sink_installed() -> bool {
    SINK_INSTALLED.get().copied().unwrap_or(false)
}

fn install_sink() {
    SINK_INSTALLED.get_or_init(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_env(LOG_ENV)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {} {}",
                    buf.timestamp_millis(),
                    record.target(),
                    record.level(),
                    record.args()
                )
            })
            .try_init()
            .is_ok()
    });
}
