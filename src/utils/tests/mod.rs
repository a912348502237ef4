mod registry;
mod unit_test_macro;
