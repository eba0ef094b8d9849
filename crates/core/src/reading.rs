//! Reading-progress indicator math.
//!
//! Pure helpers; the caller supplies the scroll readout from whatever
//! surface hosts the article.

/// Percentage of the article scrolled past, in `[0, 100]`.
///
/// `scrollable_height` is the document height minus the viewport height.
/// A page that cannot scroll (non-positive or non-finite height) reports `0.0`.
#[must_use]
pub fn progress(scroll_offset: f64, scrollable_height: f64) -> f64 {
    if !scrollable_height.is_finite() || scrollable_height <= 0.0 || scroll_offset.is_nan() {
        return 0.0;
    }
    (scroll_offset / scrollable_height * 100.0).clamp(0.0, 100.0)
}

/// Scrollable height for a container with the given content and viewport heights.
#[must_use]
pub fn scrollable_height(content_height: f64, viewport_height: f64) -> f64 {
    (content_height - viewport_height).max(0.0)
}
