use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 数字比较用
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
    },
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("{operation}需要{expected}阶张量，实际形状为{got:?}")]
    RankMismatch {
        operation: String,
        expected: usize,
        got: Vec<usize>,
    },
    #[error("通道数{channels}无法被每类通道数m={m}整除")]
    ChannelsNotDivisible { channels: usize, m: usize },
    #[error("k={k}超出了可选元素个数{available}")]
    TopKOutOfRange { k: usize, available: usize },
    #[error("维度{axis}超出范围，张量共有{dimension}个维度")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("区间[{start}, {end})超出维度{axis}的长度{len}")]
    RangeOutOfBounds {
        axis: usize,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("数据长度{data_len}与形状{shape:?}所需的元素个数不符")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },

    #[error("张量列表为空")]
    EmptyList,
    #[error("张量形状不一致")]
    InconsitentShape,
    #[error("张量形状不兼容")]
    IncompatibleShape,
    #[error("需要交换的维度必须是唯一且在[0, <张量维数>)范围内")]
    PermuteNeedUniqueAndInRange,
}
