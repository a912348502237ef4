/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : ClassWisePool（类别池化）层
 *
 * - 输入格式：[batch, h, w, m*c]
 * - 输出格式：[batch, h, w, c]
 */

use crate::errors::TensorError;
use crate::nn::Layer;
use crate::nn::functional::class_wise_pooling;
use crate::tensor::Tensor;

/// 类别池化层，默认名称为`class_pool`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassWisePool {
    m: usize,
    name: String,
}

impl ClassWisePool {
    pub const DEFAULT_NAME: &'static str = "class_pool";

    /// * `m` - 每个类别对应的通道数
    pub fn new(m: usize) -> Self {
        Self {
            m,
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn m(&self) -> usize {
        self.m
    }
}

impl Layer for ClassWisePool {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError> {
        let output = class_wise_pooling(x, self.m)?;
        log::debug!(
            target: self.name(),
            "m={}: {:?} -> {:?}",
            self.m,
            x.shape(),
            output.shape()
        );
        Ok(output)
    }
}
