//! Tests to verify that all public types are Send + Sync as required.

use iconsmith_core::traits::{AssetStore, SvgOptimizer};
use iconsmith_core::*;

const fn assert_send_sync<T: Send + Sync + ?Sized>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<AssetName>();
    assert_send_sync::<ExportName>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<GeneratorConfig>();
}

#[test]
fn test_error_types_are_send_sync() {
    assert_send_sync::<Error>();
    assert_send_sync::<AssetError>();
}

#[test]
fn test_trait_objects_are_send_sync() {
    assert_send_sync::<dyn AssetStore>();
    assert_send_sync::<dyn SvgOptimizer>();
}
