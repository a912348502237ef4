use serde_json::json;

use crate::assert_err;
use crate::errors::TensorError;
use crate::nn::{ClassWisePool, Layer};
use crate::tensor::Tensor;
use crate::utils::{LayerRegistry, UtilError};

#[test]
fn test_builtin_names() {
    let registry = LayerRegistry::with_builtins();
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["class_pool", "spatial_pool", "wildcat_head"]
    );
    assert!(registry.contains("spatial_pool"));
    assert!(!LayerRegistry::new().contains("spatial_pool"));
}

#[test]
fn test_load_builtin_modules() {
    let registry = LayerRegistry::with_builtins();
    let x = Tensor::new(&[1., 3., 2., 6.], &[1, 1, 1, 4]);

    let class_pool = registry.load_module("class_pool", &json!({"m": 2})).unwrap();
    assert_eq!(class_pool.name(), "class_pool");
    assert_eq!(
        class_pool.forward(&x).unwrap(),
        Tensor::new(&[2., 4.], &[1, 1, 1, 2])
    );

    let spatial_pool = registry
        .load_module("spatial_pool", &json!({"k": 1, "alpha": 1.0, "name": "sp"}))
        .unwrap();
    assert_eq!(spatial_pool.name(), "sp");
    assert_eq!(
        spatial_pool.forward(&x).unwrap(),
        Tensor::new(&[2., 6., 4., 12.], &[1, 4])
    );

    let head = registry
        .load_module("wildcat_head", &json!({"m": 4, "k": 1, "name": "head"}))
        .unwrap();
    assert_eq!(head.name(), "head");
    assert_eq!(head.forward(&x).unwrap(), Tensor::new(&[3.], &[1, 1]));
}

#[test]
fn test_load_module_errors() {
    let registry = LayerRegistry::with_builtins();
    assert_err!(
        registry.load_module("max_pool", &json!({})),
        UtilError::UnknownModule("max_pool")
    );
    assert_err!(
        registry.load_module("class_pool", &json!({"k": 2})),
        UtilError::JsonError(_)
    );
}

#[test]
fn test_register_custom_factory() {
    let mut registry = LayerRegistry::new();
    assert!(
        registry
            .register("group4", |_| Ok(Box::new(ClassWisePool::new(4).with_name("group4"))))
            .is_none()
    );
    assert!(
        registry
            .register("group4", |_| Ok(Box::new(ClassWisePool::new(2))))
            .is_some()
    );

    let layer = registry.load_module("group4", &json!(null)).unwrap();
    assert_eq!(layer.name(), "class_pool");
    assert_err!(
        layer.forward(&Tensor::zeros(&[1, 1, 1, 3])),
        TensorError::ChannelsNotDivisible { channels: 3, m: 2 }
    );
}
