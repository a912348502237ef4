use approx::assert_abs_diff_eq;

use crate::assert_err;
use crate::errors::TensorError;
use crate::nn::{ClassWisePool, Layer, class_wise_pooling};
use crate::tensor::Tensor;

#[test]
fn test_class_wise_pooling_averages_channel_groups() {
    // [1, 1, 2, 4]，m=2 -> 2个类别
    let x = Tensor::new(&[1., 3., 10., 20., 5., 7., -2., 2.], &[1, 1, 2, 4]);
    let y = class_wise_pooling(&x, 2).unwrap();
    assert_eq!(y, Tensor::new(&[2., 15., 6., 0.], &[1, 1, 2, 2]));
}

#[test]
fn test_class_wise_pooling_matches_direct_mean() {
    let shapes: &[(usize, usize, usize, usize, usize)] =
        &[(1, 3, 3, 4, 2), (2, 2, 5, 3, 3), (3, 4, 1, 1, 5)];
    for &(b, h, w, c, m) in shapes {
        let x = Tensor::new_random(-1., 1., &[b, h, w, m * c]);
        let y = class_wise_pooling(&x, m).unwrap();
        assert_eq!(y.shape(), &[b, h, w, c]);

        let xv = x.view();
        let yv = y.view();
        for bi in 0..b {
            for hi in 0..h {
                for wi in 0..w {
                    for i in 0..c {
                        let expected = (m * i..m * (i + 1))
                            .map(|ch| xv[[bi, hi, wi, ch].as_slice()])
                            .sum::<f32>()
                            / m as f32;
                        assert_abs_diff_eq!(
                            yv[[bi, hi, wi, i].as_slice()],
                            expected,
                            epsilon = 1e-6
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_class_wise_pooling_with_m_1_is_identity() {
    let x = Tensor::new_random(-5., 5., &[2, 3, 4, 6]);
    let y = class_wise_pooling(&x, 1).unwrap();
    assert_eq!(y, x);
}

#[test]
fn test_class_wise_pooling_with_all_channels_in_one_class() {
    let x = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[1, 1, 2, 3]);
    let y = class_wise_pooling(&x, 3).unwrap();
    assert_eq!(y, Tensor::new(&[2., 5.], &[1, 1, 2, 1]));
}

#[test]
fn test_class_wise_pooling_with_indivisible_channels() {
    let x = Tensor::zeros(&[1, 2, 2, 5]);
    assert_err!(
        class_wise_pooling(&x, 2),
        TensorError::ChannelsNotDivisible { channels: 5, m: 2 }
    );
}

#[test]
fn test_class_wise_pooling_with_invalid_m_or_rank() {
    let x = Tensor::zeros(&[1, 2, 2, 4]);
    assert_err!(
        class_wise_pooling(&x, 0),
        TensorError::ValueMustSatisfyComparison { threshold: 1, .. }
    );

    let x = Tensor::zeros(&[2, 2, 4]);
    assert_err!(
        class_wise_pooling(&x, 2),
        TensorError::RankMismatch { expected: 4, got, .. } if got == &[2, 2, 4]
    );
}

#[test]
fn test_class_wise_pool_layer() {
    let layer = ClassWisePool::new(2);
    assert_eq!(layer.name(), "class_pool");
    assert_eq!(layer.m(), 2);

    let layer = layer.with_name("head/cwp");
    assert_eq!(layer.name(), "head/cwp");

    let x = Tensor::new(&[1., 3., 10., 20.], &[1, 1, 1, 4]);
    assert_eq!(
        layer.forward(&x).unwrap(),
        Tensor::new(&[2., 15.], &[1, 1, 1, 2])
    );
}
