//! 池化运算的函数形式
//!
//! 输入均为`[batch, h, w, c]`排布的4阶张量，所有前置条件在计算前统一校验，
//! 不满足时返回错误而不产生任何部分结果。

use crate::errors::{ComparisonOperator, TensorError};
use crate::tensor::Tensor;

/// 类别池化（class-wise pooling）
///
/// 将每`m`个相邻通道视为同一类别的特征图，对其求均值，得到每个类别一个通道。
///
/// * `x` - 形状为`[batch, h, w, m*c]`的张量
/// * `m` - 每个类别对应的通道数（即论文中的参数M）
///
/// 返回形状为`[batch, h, w, c]`的张量，第`i`个通道为输入通道`[m*i, m*(i+1))`的均值。
/// `m`为1时即恒等变换。
pub fn class_wise_pooling(x: &Tensor, m: usize) -> Result<Tensor, TensorError> {
    let [batch, h, w, channels] = dims4(x, "类别池化")?;
    if m == 0 {
        return Err(TensorError::ValueMustSatisfyComparison {
            value_name: "m".to_string(),
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: 1,
        });
    }
    if channels % m != 0 {
        return Err(TensorError::ChannelsNotDivisible { channels, m });
    }

    let n_classes = channels / m;
    if n_classes == 0 {
        return Ok(Tensor::zeros(&[batch, h, w, 0]));
    }
    let class_avgs = (0..n_classes)
        .map(|i| x.slice_axis(3, m * i..m * (i + 1))?.mean_axis(3, true))
        .collect::<Result<Vec<_>, _>>()?;
    let class_avgs = class_avgs.iter().collect::<Vec<_>>();
    Tensor::concat(&class_avgs, 3)
}

/// 空间池化（spatial pooling）
///
/// 对每个（样本，类别）的所有空间位置，取最大的`k`个值的均值作为该类别的得分；
/// 若给定`alpha`，再加上`alpha`倍的最小的`k`个值的均值。
///
/// * `x` - 形状为`[batch, h, w, c]`的张量
/// * `k` - 参与平均的空间位置个数，须在`[1, h*w]`内
/// * `alpha` - kmax与kmin的混合系数；为`None`或`0`时忽略kmin
///
/// 返回形状为`[batch, c]`的张量。
pub fn spatial_pooling(x: &Tensor, k: usize, alpha: Option<f32>) -> Result<Tensor, TensorError> {
    let [batch, h, w, n_classes] = dims4(x, "空间池化")?;

    // [batch, h, w, c] -> [batch, h*w, c] -> [batch, c, h*w]
    let x_flat = x.reshape(&[batch, h * w, n_classes])?;
    let x_transp = x_flat.permute(&[0, 2, 1])?;

    let k_maxs_mean = x_transp.top_k(k)?.mean_axis(2, false)?;
    match alpha {
        Some(alpha) if alpha != 0. => {
            // 对取反后的张量取top_k即得最小的k个值，再取反还原
            let k_mins = -(-&x_transp).top_k(k)?;
            let k_mins_mean = k_mins.mean_axis(2, false)?;
            Ok(k_maxs_mean + k_mins_mean * alpha)
        }
        _ => Ok(k_maxs_mean),
    }
}

fn dims4(x: &Tensor, operation: &str) -> Result<[usize; 4], TensorError> {
    <[usize; 4]>::try_from(x.shape()).map_err(|_| TensorError::RankMismatch {
        operation: operation.to_string(),
        expected: 4,
        got: x.shape().to_vec(),
    })
}
