//! 按名称构建层的注册表
//!
//! 每个名称对应一个工厂函数，工厂以 JSON 参数构建出一个`Box<dyn Layer>`。
//! 内置的三个名称与层的默认名称一致：`class_pool`、`spatial_pool`、`wildcat_head`。
//!
//! ```ignore
//! let registry = LayerRegistry::with_builtins();
//! let head = registry.load_module("wildcat_head", &json!({"m": 4, "k": 3, "alpha": 0.7}))?;
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::error::UtilError;
use crate::nn::{ClassWisePool, Layer, SpatialPool, WildcatHead, WildcatHeadConfig};

pub type LayerFactory = Box<dyn Fn(&Value) -> Result<Box<dyn Layer>, UtilError> + Send + Sync>;

#[derive(Default)]
pub struct LayerRegistry {
    factories: BTreeMap<String, LayerFactory>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册了全部内置层的注册表
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ClassWisePool::DEFAULT_NAME, build_class_pool);
        registry.register(SpatialPool::DEFAULT_NAME, build_spatial_pool);
        registry.register(WildcatHead::DEFAULT_NAME, build_wildcat_head);
        registry
    }

    /// 注册（或替换）名为`name`的工厂，返回被替换掉的旧工厂
    pub fn register<F>(&mut self, name: &str, factory: F) -> Option<LayerFactory>
    where
        F: Fn(&Value) -> Result<Box<dyn Layer>, UtilError> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 已注册的名称（按字典序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// 以`params`构建名为`name`的层
    pub fn load_module(&self, name: &str, params: &Value) -> Result<Box<dyn Layer>, UtilError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| UtilError::UnknownModule(name.to_string()))?;
        factory(params)
    }
}

#[derive(Deserialize)]
struct ClassPoolParams {
    m: usize,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct SpatialPoolParams {
    k: usize,
    #[serde(default)]
    alpha: Option<f32>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct HeadParams {
    #[serde(flatten)]
    config: WildcatHeadConfig,
    #[serde(default)]
    name: Option<String>,
}

fn build_class_pool(params: &Value) -> Result<Box<dyn Layer>, UtilError> {
    let params = ClassPoolParams::deserialize(params)?;
    let layer = ClassWisePool::new(params.m);
    Ok(match params.name {
        Some(name) => Box::new(layer.with_name(&name)),
        None => Box::new(layer),
    })
}

fn build_spatial_pool(params: &Value) -> Result<Box<dyn Layer>, UtilError> {
    let params = SpatialPoolParams::deserialize(params)?;
    let layer = SpatialPool::new(params.k, params.alpha);
    Ok(match params.name {
        Some(name) => Box::new(layer.with_name(&name)),
        None => Box::new(layer),
    })
}

fn build_wildcat_head(params: &Value) -> Result<Box<dyn Layer>, UtilError> {
    let params = HeadParams::deserialize(params)?;
    let layer = WildcatHead::from_config(&params.config);
    Ok(match params.name {
        Some(name) => Box::new(layer.with_name(&name)),
        None => Box::new(layer),
    })
}
