/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : WildcatHead - 类别池化 + 空间池化组成的分类头
 *
 * - 输入格式：[batch, h, w, m*c]（卷积主干输出的特征图）
 * - 输出格式：[batch, c]（每个类别的得分）
 */

use serde::{Deserialize, Serialize};

use crate::errors::TensorError;
use crate::nn::{ClassWisePool, Layer, SpatialPool};
use crate::tensor::Tensor;

/// 分类头的配置，通常作为`config.json`中的一节
///
/// ```json
/// { "m": 4, "k": 3, "alpha": 0.7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildcatHeadConfig {
    pub m: usize,
    pub k: usize,
    #[serde(default)]
    pub alpha: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WildcatHead {
    class_pool: ClassWisePool,
    spatial_pool: SpatialPool,
    name: String,
}

impl WildcatHead {
    pub const DEFAULT_NAME: &'static str = "wildcat_head";

    pub fn new(m: usize, k: usize, alpha: Option<f32>) -> Self {
        Self {
            class_pool: ClassWisePool::new(m),
            spatial_pool: SpatialPool::new(k, alpha),
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn from_config(config: &WildcatHeadConfig) -> Self {
        Self::new(config.m, config.k, config.alpha)
    }

    /// 设置名称，子层的名称随之变为`<name>/class_pool`与`<name>/spatial_pool`
    pub fn with_name(self, name: &str) -> Self {
        Self {
            class_pool: self
                .class_pool
                .with_name(&format!("{name}/{}", ClassWisePool::DEFAULT_NAME)),
            spatial_pool: self
                .spatial_pool
                .with_name(&format!("{name}/{}", SpatialPool::DEFAULT_NAME)),
            name: name.to_string(),
        }
    }

    pub fn class_pool(&self) -> &ClassWisePool {
        &self.class_pool
    }

    pub fn spatial_pool(&self) -> &SpatialPool {
        &self.spatial_pool
    }
}

impl Layer for WildcatHead {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError> {
        let class_maps = self.class_pool.forward(x)?;
        self.spatial_pool.forward(&class_maps)
    }
}
