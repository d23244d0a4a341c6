// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn query_param_reads_seed() {
    assert_eq!(query_param("?seed=7", "seed"), Some("7"));
    assert_eq!(query_param("?a=1&seed=123&b=2", "seed"), Some("123"));
    assert_eq!(query_param("seed=9", "seed"), Some("9"));
}

#[test]
fn query_param_missing_or_empty() {
    assert_eq!(query_param("", "seed"), None);
    assert_eq!(query_param("?", "seed"), None);
    assert_eq!(query_param("?seeds=1", "seed"), None);
    assert_eq!(query_param("?seed", "seed"), Some(""));
}

#[test]
fn query_param_first_match_wins() {
    assert_eq!(query_param("?seed=1&seed=2", "seed"), Some("1"));
}

#[test]
fn viewport_from_window_caps_ratio_for_backing_store() {
    let vp = viewport_from_window(800.0, 600.0, 3.0);
    assert_eq!((vp.width, vp.height), (800, 600));
    assert_eq!(vp.render_pixel_ratio(), 2.0);
    assert_eq!(vp.physical_size(), (1600, 1200));
}

#[test]
fn viewport_from_window_clamps_negative_sizes() {
    let vp = viewport_from_window(-5.0, 10.0, 1.0);
    assert_eq!(vp.width, 0);
    assert!(vp.is_empty());
}
