/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : SpatialPool（空间k-max/k-min池化）层
 *
 * - 输入格式：[batch, h, w, c]
 * - 输出格式：[batch, c]
 */

use crate::errors::TensorError;
use crate::nn::Layer;
use crate::nn::functional::spatial_pooling;
use crate::tensor::Tensor;

/// 空间池化层，默认名称为`spatial_pool`
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialPool {
    k: usize,
    alpha: Option<f32>,
    name: String,
}

impl SpatialPool {
    pub const DEFAULT_NAME: &'static str = "spatial_pool";

    /// * `k` - 参与平均的空间位置个数
    /// * `alpha` - kmin的混合系数，`None`表示只用kmax
    pub fn new(k: usize, alpha: Option<f32>) -> Self {
        Self {
            k,
            alpha,
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn alpha(&self) -> Option<f32> {
        self.alpha
    }
}

impl Layer for SpatialPool {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError> {
        let output = spatial_pooling(x, self.k, self.alpha)?;
        log::debug!(
            target: self.name(),
            "k={}, alpha={:?}: {:?} -> {:?}",
            self.k,
            self.alpha,
            x.shape(),
            output.shape()
        );
        Ok(output)
    }
}
