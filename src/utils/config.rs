//! JSON 配置文件的加载

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::UtilError;

/// 未指定路径时加载的配置文件
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// 顶层为 JSON 对象的配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: Map<String, Value>,
}

impl Config {
    pub fn from_value(value: Value) -> Result<Self, UtilError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(UtilError::ConfigNotObject),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// 将某一配置项反序列化为`T`，配置项不存在时返回`UtilError::MissingKey`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, UtilError> {
        let value = self
            .get(key)
            .ok_or_else(|| UtilError::MissingKey(key.to_string()))?;
        Ok(T::deserialize(value)?)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// 加载配置文件，`path`为`None`时加载当前目录下的`config.json`
pub fn load_config(path: Option<&Path>) -> Result<Config, UtilError> {
    let value = read_json(path)?;
    Config::from_value(value)
}

/// 加载配置文件并整体反序列化为`T`
pub fn load_config_as<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, UtilError> {
    let value = read_json(path)?;
    Ok(serde_json::from_value(value)?)
}

fn read_json(path: Option<&Path>) -> Result<Value, UtilError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    if !path.is_file() {
        return Err(UtilError::FileNotFound(path.to_path_buf()));
    }
    log::debug!("加载配置文件: {path:?}");
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
