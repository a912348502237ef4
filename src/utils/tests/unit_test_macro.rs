use crate::assert_err;
use crate::assert_panic;
use crate::utils::UtilError;

#[test]
fn test_assert_panic_macro() {
    assert_panic!(panic!("test panic"));
    assert_panic!(panic!("custom test panic msg"), "custom test panic msg");
}

#[test]
fn test_assert_err_macro() {
    let result: Result<(), UtilError> = Err(UtilError::UnknownModule("max_pool".to_string()));
    assert_err!(result);
    assert_err!(result, UtilError::UnknownModule("max_pool"));
    assert_err!(result, UtilError::UnknownModule(name) if name.starts_with("max"));
}
