use super::Tensor;
use crate::errors::{Operator, TensorError};
use ndarray::{Axis, IxDyn};
use std::collections::HashSet;

impl Tensor {
    /// 改变张量形状（元素按行优先顺序重新排布）。新旧形状的元素总数必须一致。
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let new_total_elements: usize = shape.iter().product();
        if self.size() != new_total_elements {
            return Err(TensorError::IncompatibleShape);
        }
        let data = self
            .data
            .as_standard_layout()
            .into_owned()
            .into_shape(IxDyn(shape))
            .map_err(|_| TensorError::IncompatibleShape)?;
        Ok(Self { data })
    }

    /// 按`axes`重新排列张量的各个维度，并将其返回（不影响原张量）。
    /// `axes`须是`[0, <张量维数>)`的一个排列。
    pub fn permute(&self, axes: &[usize]) -> Result<Self, TensorError> {
        // 检查axes中的所有元素必须是唯一且在[0, <张量维数>)范围内
        let unique_axes = axes.iter().copied().collect::<HashSet<_>>();
        if axes.len() != self.dimension()
            || unique_axes.len() != axes.len()
            || !unique_axes.iter().all(|&a| a < self.dimension())
        {
            return Err(TensorError::PermuteNeedUniqueAndInRange);
        }

        let permuted = self.data.view().permuted_axes(IxDyn(axes));
        Ok(Self {
            data: permuted.as_standard_layout().into_owned(),
        })
    }

    /// 沿`axis`维度拼接多个张量，除`axis`以外的各维度长度必须一致
    pub fn concat(tensors: &[&Self], axis: usize) -> Result<Self, TensorError> {
        let first = tensors.first().ok_or(TensorError::EmptyList)?;
        if axis >= first.dimension() {
            return Err(TensorError::AxisOutOfRange {
                axis,
                dimension: first.dimension(),
            });
        }

        let compatible = |t: &Self| {
            t.dimension() == first.dimension()
                && t.shape()
                    .iter()
                    .zip(first.shape())
                    .enumerate()
                    .all(|(i, (a, b))| i == axis || a == b)
        };
        if let Some(bad) = tensors.iter().find(|&&t| !compatible(t)) {
            return Err(TensorError::OperatorError {
                operator: Operator::Concat,
                tensor1_shape: first.shape().to_vec(),
                tensor2_shape: bad.shape().to_vec(),
            });
        }

        let views = tensors.iter().map(|t| t.data.view()).collect::<Vec<_>>();
        let data = ndarray::concatenate(Axis(axis), &views)
            .map_err(|_| TensorError::InconsitentShape)?;
        Ok(Self { data })
    }
}
