/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 张量与纯数的数乘，返回一个新的张量，形状不变。
 */

use crate::tensor::Tensor;
use std::ops::Mul;

impl Mul<f32> for Tensor {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            data: self.data * scalar,
        }
    }
}
