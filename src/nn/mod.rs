/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : WILDCAT分类头的池化运算：类别池化（class-wise pooling）与空间池化（spatial pooling）
 *
 * 两种池化均为纯函数：
 * - `functional` 提供无状态的函数形式
 * - `layer` 将其包装为带名称（作用域）的层，名称同时作为日志的 target
 */

pub mod functional;
pub mod layer;
mod module;

pub use functional::{class_wise_pooling, spatial_pooling};
pub use layer::{ClassWisePool, SpatialPool, WildcatHead, WildcatHeadConfig};
pub use module::Layer;

#[cfg(test)]
mod tests;
