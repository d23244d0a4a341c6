// Pure helpers shared by the DOM wiring; no web_sys here so host tests can
// include this file directly.

use app_core::Viewport;

/// Value of `key` in a location search string such as `?seed=7&x=1`.
/// The leading `?` is optional. The first match wins.
pub fn query_param<'q>(search: &'q str, key: &str) -> Option<&'q str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
}

/// Viewport for a window of `inner_width` x `inner_height` CSS pixels.
#[inline]
pub fn viewport_from_window(inner_width: f64, inner_height: f64, dpr: f64) -> Viewport {
    Viewport::new(
        inner_width.max(0.0) as u32,
        inner_height.max(0.0) as u32,
        dpr,
    )
}
