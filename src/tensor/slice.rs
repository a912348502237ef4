use super::Tensor;
use crate::errors::TensorError;
use ndarray::{Axis, Slice};
use std::ops::Range;

impl Tensor {
    /// 克隆式切片：取`axis`维度上`[range.start, range.end)`的部分，其余维度不变
    pub fn slice_axis(&self, axis: usize, range: Range<usize>) -> Result<Self, TensorError> {
        self.check_axis(axis)?;
        let len = self.shape()[axis];
        if range.start > range.end || range.end > len {
            return Err(TensorError::RangeOutOfBounds {
                axis,
                start: range.start,
                end: range.end,
                len,
            });
        }

        let data = self
            .data
            .slice_axis(Axis(axis), Slice::from(range))
            .to_owned();
        Ok(Self { data })
    }

    pub(crate) fn check_axis(&self, axis: usize) -> Result<(), TensorError> {
        if axis < self.dimension() {
            Ok(())
        } else {
            Err(TensorError::AxisOutOfRange {
                axis,
                dimension: self.dimension(),
            })
        }
    }
}
