use nautilus_core::ScrollMetrics;

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.9} got {:.9} (delta {:.9})",
        expected,
        actual,
        delta
    );
}

#[test]
fn progress_is_share_of_scrollable_distance() {
    let document_height = 3400.0;
    let viewport_height = 900.0;
    let max_scroll = document_height - viewport_height;
    for scrolled in [0.0, 1.0, 250.0, 1249.5, 2000.0, max_scroll] {
        let metrics = ScrollMetrics::measure(scrolled, document_height, viewport_height);
        assert_close(metrics.progress, scrolled / max_scroll * 100.0);
        assert!((0.0..=100.0).contains(&metrics.progress));
    }
}

#[test]
fn unscrollable_document_reports_zero_progress() {
    for scrolled in [0.0, 15.0, 800.0] {
        assert_eq!(ScrollMetrics::measure(scrolled, 700.0, 900.0).progress, 0.0);
        assert_eq!(ScrollMetrics::measure(scrolled, 900.0, 900.0).progress, 0.0);
    }
}

#[test]
fn rotation_wraps_every_full_turn() {
    let at = |scrolled: f64| ScrollMetrics::measure(scrolled, 10_000.0, 800.0);
    assert_close(at(3600.0).display_rotation(), 0.0);
    assert_close(at(1800.0).display_rotation(), 180.0);
    assert_close(at(450.0).display_rotation(), 45.0);
    assert_close(at(4500.0).display_rotation(), 90.0);
    assert_close(at(4500.0).rotation_deg, 450.0);
}

#[test]
fn rotation_ignores_scrollability() {
    let metrics = ScrollMetrics::measure(1800.0, 500.0, 900.0);
    assert_eq!(metrics.progress, 0.0);
    assert_close(metrics.display_rotation(), 180.0);
}
