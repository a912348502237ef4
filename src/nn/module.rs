/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : Layer trait 定义
 */

use std::fmt::Debug;

use crate::errors::TensorError;
use crate::tensor::Tensor;

/// 无参数层的统一接口
///
/// # 设计原则
/// - `new()` **不是** trait 方法（参数各异）
/// - 池化层没有可学习参数，`forward()` 签名一致，故放入 trait
/// - `name()` 即原先的作用域名，用作日志 target 与注册表中的键
///
/// # 使用示例
///
/// ```ignore
/// use wildcat::nn::{ClassWisePool, Layer, SpatialPool};
///
/// let layers: Vec<Box<dyn Layer>> = vec![
///     Box::new(ClassWisePool::new(4)),
///     Box::new(SpatialPool::new(3, Some(0.7))),
/// ];
/// let mut x = features;
/// for layer in &layers {
///     x = layer.forward(&x)?;
/// }
/// ```
pub trait Layer: Debug + Send + Sync {
    /// 层（作用域）名称
    fn name(&self) -> &str;

    /// 前向计算，输入不满足前置条件时返回错误且不产生任何部分结果
    fn forward(&self, x: &Tensor) -> Result<Tensor, TensorError>;
}
