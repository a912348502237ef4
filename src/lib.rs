//! # wildcat
//!
//! `wildcat`为WILDCAT风格的弱监督图像分类网络提供分类头的池化运算与配套工具：
//! - [`nn`]：类别池化（class-wise pooling）与空间k-max/k-min池化（spatial pooling）
//! - [`tensor`]：池化所依赖的张量类型（基于`ndarray`）
//! - [`utils`]：配置加载、日志、tar归档的安全解压、计时、模块注册表
//!

pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;

pub use errors::TensorError;
pub use tensor::Tensor;
