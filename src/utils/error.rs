//! 辅助工具（配置、归档、文件、模块注册表）的错误类型定义

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON 解析或反序列化错误
    #[error("JSON 错误: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 配置文件顶层不是 JSON 对象
    #[error("配置的顶层须为 JSON 对象")]
    ConfigNotObject,

    /// 配置项缺失
    #[error("配置项缺失: {0}")]
    MissingKey(String),

    /// 归档中的条目会被解压到目标目录之外
    #[error("归档条目试图越出解压目录（路径穿越）: {entry:?}")]
    PathTraversal { entry: PathBuf },

    /// 注册表中没有该名称的模块
    #[error("未注册的模块: {0}")]
    UnknownModule(String),
}
