use approx::assert_abs_diff_eq;

use crate::assert_err;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_sum_and_mean() {
    let tensor = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    assert_eq!(tensor.sum(), Tensor::new(&[10.], &[1]));
    assert_eq!(tensor.mean().unwrap(), Tensor::new(&[2.5], &[1]));
    assert!(Tensor::zeros(&[0]).mean().is_none());
}

#[test]
fn test_mean_axis_keep_dims() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[1, 2, 3]);

    let kept = tensor.mean_axis(2, true).unwrap();
    assert_eq!(kept, Tensor::new(&[2., 5.], &[1, 2, 1]));

    let dropped = tensor.mean_axis(1, false).unwrap();
    assert_eq!(dropped, Tensor::new(&[2.5, 3.5, 4.5], &[1, 3]));

    assert_err!(
        tensor.mean_axis(3, true),
        TensorError::AxisOutOfRange { axis: 3, .. }
    );
}

#[test]
fn test_mean_axis_of_empty_axis() {
    let tensor = Tensor::zeros(&[2, 0]);
    assert_err!(
        tensor.mean_axis(1, false),
        TensorError::ValueMustSatisfyComparison { threshold: 1, .. }
    );
}

#[test]
fn test_top_k_selects_by_value() {
    let tensor = Tensor::new(&[3., 1., 4., 1., 5., 9., 2., 6.], &[2, 4]);
    let top = tensor.top_k(2).unwrap();
    assert_eq!(top, Tensor::new(&[4., 3., 9., 6.], &[2, 2]));

    let all = tensor.top_k(4).unwrap();
    assert_eq!(all.to_vec(), vec![4., 3., 1., 1., 9., 6., 5., 2.]);
}

#[test]
fn test_top_k_of_negated_gives_bottom_k() {
    let tensor = Tensor::new(&[3., -1., 4., 0.5], &[1, 4]);
    let bottom = -(-&tensor).top_k(2).unwrap();
    assert_abs_diff_eq!(bottom, Tensor::new(&[-1., 0.5], &[1, 2]));
}

#[test]
fn test_top_k_out_of_range() {
    let tensor = Tensor::zeros(&[1, 3]);
    assert_err!(
        tensor.top_k(4),
        TensorError::TopKOutOfRange {
            k: 4,
            available: 3
        }
    );
    assert_err!(
        tensor.top_k(0),
        TensorError::ValueMustSatisfyComparison { threshold: 1, .. }
    );
    assert_err!(
        Tensor::new(&[1.], &[]).top_k(1),
        TensorError::ValueMustSatisfyComparison { .. }
    );
}
