/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 张量的归约运算：沿某一维度求均值、沿最后一维选取前k大的值。
 *                 两者均按值进行计算，不依赖元素的原始排列顺序。
 */

use super::Tensor;
use crate::errors::{ComparisonOperator, TensorError};
use ndarray::{ArrayD, Axis, IxDyn};

impl Tensor {
    /// 对张量中的所有元素求和并返回一个形状为[1]的标量。
    pub fn sum(&self) -> Tensor {
        Tensor::from(self.data.sum())
    }

    /// 所有元素的均值（和除以个数），返回形状为[1]的标量；空张量返回`None`
    pub fn mean(&self) -> Option<Tensor> {
        self.data.mean().map(Tensor::from)
    }

    /// 沿`axis`维度求均值。
    /// * `keep_dims` - 为`true`时保留被归约的维度（长度为1），否则移除该维度。
    pub fn mean_axis(&self, axis: usize, keep_dims: bool) -> Result<Tensor, TensorError> {
        self.check_axis(axis)?;
        let reduced = self.data.mean_axis(Axis(axis)).ok_or_else(|| {
            TensorError::ValueMustSatisfyComparison {
                value_name: format!("第{axis}维的长度"),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
            }
        })?;
        let data = if keep_dims {
            reduced.insert_axis(Axis(axis))
        } else {
            reduced
        };
        Ok(Tensor { data })
    }

    /// 沿最后一个维度选出最大的`k`个值，返回形状为`[..., k]`的张量，每条向量内按降序排列。
    /// 并列的值之间的先后顺序不做保证。`k`须在`[1, <最后一维长度>]`内。
    pub fn top_k(&self, k: usize) -> Result<Tensor, TensorError> {
        let last = self
            .dimension()
            .checked_sub(1)
            .ok_or(TensorError::ValueMustSatisfyComparison {
                value_name: "top_k的张量维数".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
            })?;
        if k == 0 {
            return Err(TensorError::ValueMustSatisfyComparison {
                value_name: "k".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
            });
        }
        let available = self.shape()[last];
        if k > available {
            return Err(TensorError::TopKOutOfRange { k, available });
        }

        let mut out_shape = self.shape().to_vec();
        out_shape[last] = k;
        let mut data = ArrayD::<f32>::zeros(IxDyn(&out_shape));

        for (lane, mut out_lane) in self
            .data
            .lanes(Axis(last))
            .into_iter()
            .zip(data.lanes_mut(Axis(last)))
        {
            let mut values = lane.to_vec();
            // 按值降序；`total_cmp`让NaN也有确定的位置
            values.sort_unstable_by(|a, b| b.total_cmp(a));
            for (slot, value) in out_lane.iter_mut().zip(values) {
                *slot = value;
            }
        }
        Ok(Tensor { data })
    }
}
