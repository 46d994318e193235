use approx::assert_abs_diff_eq;
use timeline_rs::core::{
    Activity, DEFAULT_BAND_PADDING, EMPTY_TIME_DOMAIN, LinearScale, Orientation, ResourceKey,
    View, ZoomTransform, configure_band_scale, configure_time_scale, nice_ticks, rescale_time,
    time_domain,
};

fn single_activity() -> Vec<Activity> {
    vec![Activity::new("a", 0.0, 10.0, "r1")]
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0));

    let original = 42.5;
    let px = scale.domain_to_pixel(original);
    let recovered = scale.pixel_to_domain(px);

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 80.0));
    assert_eq!(scale.domain_to_pixel(5.0), 40.0);
    assert_eq!(scale.domain_to_pixel(123.0), 40.0);
    assert_eq!(scale.pixels_per_unit(), 0.0);
}

#[test]
fn degenerate_range_inverts_to_domain_start() {
    let scale = LinearScale::new((3.0, 9.0), (0.0, 0.0));
    assert_eq!(scale.pixel_to_domain(17.0), 3.0);
}

#[test]
fn horizontal_time_scale_spans_view_width() {
    let scale = configure_time_scale(
        &single_activity(),
        View::new(100.0, 50.0),
        Orientation::Horizontal,
    );

    assert_eq!(scale.domain(), (0.0, 10.0));
    assert_eq!(scale.range(), (0.0, 100.0));
    assert_eq!(scale.time_to_pixel(0.0), 0.0);
    assert_eq!(scale.time_to_pixel(10.0), 100.0);
    assert_eq!(scale.transform(), ZoomTransform::IDENTITY);
}

#[test]
fn vertical_time_scale_spans_view_height() {
    let scale = configure_time_scale(
        &single_activity(),
        View::new(100.0, 50.0),
        Orientation::Vertical,
    );

    assert_eq!(scale.range(), (0.0, 50.0));
    assert_eq!(scale.time_to_pixel(10.0), 50.0);
    assert_eq!(scale.orientation(), Orientation::Vertical);
}

#[test]
fn single_band_fits_inside_resource_extent_minus_padding() {
    let band = configure_band_scale(
        &single_activity(),
        View::new(100.0, 50.0),
        Orientation::Vertical,
        DEFAULT_BAND_PADDING,
    );

    let start = band
        .band_start(&ResourceKey::from("r1"))
        .expect("r1 has a band");
    let end = start + band.bandwidth();

    assert!(start > 0.0);
    assert!(end < 50.0);
    assert_abs_diff_eq!(band.bandwidth(), 50.0 / 1.1 * 0.9, epsilon = 1e-9);
    // Centred: equal outer padding on both sides.
    assert_abs_diff_eq!(start, 50.0 - end, epsilon = 1e-9);
}

#[test]
fn time_domain_covers_min_start_to_max_finish() {
    let data = vec![
        Activity::new("a", 4.0, 9.0, "r1"),
        Activity::new("b", -2.0, 3.0, "r2"),
        Activity::new("c", 1.0, 14.0, "r1"),
    ];
    assert_eq!(time_domain(&data), (-2.0, 14.0));
}

#[test]
fn empty_data_uses_default_time_domain() {
    let scale = configure_time_scale(&[], View::new(200.0, 100.0), Orientation::Horizontal);
    assert_eq!(scale.domain(), EMPTY_TIME_DOMAIN);
    assert_eq!(scale.time_to_pixel(1.0), 200.0);
}

#[test]
fn zoom_doubles_pixels_per_time_unit_and_keeps_domain() {
    let data = single_activity();
    let view = View::new(100.0, 50.0);
    let scale = rescale_time(
        &data,
        view,
        Orientation::Horizontal,
        ZoomTransform::new(2.0, 0.0, 0.0),
    );

    assert_eq!(scale.domain(), (0.0, 10.0));
    assert_eq!(scale.time_to_pixel(10.0), 200.0);
    assert_eq!(scale.pixels_per_time_unit(), 20.0);
}

#[test]
fn zoom_translation_follows_time_axis() {
    let data = single_activity();
    let view = View::new(100.0, 50.0);
    let transform = ZoomTransform::new(1.0, 30.0, -7.0);

    let horizontal = rescale_time(&data, view, Orientation::Horizontal, transform);
    let vertical = rescale_time(&data, view, Orientation::Vertical, transform);

    assert_eq!(horizontal.time_to_pixel(0.0), 30.0);
    assert_eq!(vertical.time_to_pixel(0.0), -7.0);
}

#[test]
fn visible_window_tracks_zoom() {
    let data = single_activity();
    let scale = rescale_time(
        &data,
        View::new(100.0, 50.0),
        Orientation::Horizontal,
        ZoomTransform::new(2.0, -100.0, 0.0),
    );

    let (start, end) = scale.visible_window(100.0);
    assert_abs_diff_eq!(start, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 10.0, epsilon = 1e-9);
}

#[test]
fn nice_ticks_land_on_round_values() {
    assert_eq!(
        nice_ticks(0.0, 10.0, 5),
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
    );
    assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    assert!(nice_ticks(f64::NAN, 10.0, 4).is_empty());
}
