use approx::assert_abs_diff_eq;
use timeline_rs::core::{
    Activity, BandScale, Orientation, ResourceKey, View, configure_band_scale,
    inverse_band_scale, resource_bands, resource_domain,
};

fn lanes() -> Vec<Activity> {
    vec![
        Activity::new("a", 0.0, 1.0, "r2"),
        Activity::new("b", 0.0, 1.0, "r1"),
        Activity::new("c", 0.0, 1.0, "r2"),
        Activity::new("d", 0.0, 1.0, "r3"),
    ]
}

fn key(name: &str) -> ResourceKey {
    ResourceKey::from(name)
}

#[test]
fn domain_keeps_first_occurrence_order() {
    let keys = resource_domain(&lanes());
    let domain: Vec<&str> = keys.iter().map(ResourceKey::as_str).collect();
    assert_eq!(domain, vec!["r2", "r1", "r3"]);
}

#[test]
fn range_follows_resource_orientation() {
    let view = View::new(300.0, 90.0);
    let vertical = configure_band_scale(&lanes(), view, Orientation::Vertical, 0.0);
    let horizontal = configure_band_scale(&lanes(), view, Orientation::Horizontal, 0.0);

    assert_eq!(vertical.range(), (0.0, 90.0));
    assert_eq!(vertical.step(), 30.0);
    assert_eq!(horizontal.range(), (0.0, 300.0));
    assert_eq!(horizontal.step(), 100.0);
}

#[test]
fn padding_is_shared_between_inner_and_outer_gaps() {
    let band = configure_band_scale(&lanes(), View::new(0.0, 100.0), Orientation::Vertical, 0.2);

    // step = 100 / (3 - 0.2 + 0.4)
    let step = 100.0 / 3.2;
    assert_abs_diff_eq!(band.step(), step, epsilon = 1e-9);
    assert_abs_diff_eq!(band.bandwidth(), step * 0.8, epsilon = 1e-9);

    let first = band.band_start(&key("r2")).expect("r2 band");
    let second = band.band_start(&key("r1")).expect("r1 band");
    let third = band.band_start(&key("r3")).expect("r3 band");
    let inner_gap = second - (first + band.bandwidth());
    assert_abs_diff_eq!(inner_gap, step * 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(first, step * 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(100.0 - (third + band.bandwidth()), step * 0.2, epsilon = 1e-9);
}

#[test]
fn inversion_clamps_outside_the_range() {
    let band = configure_band_scale(&lanes(), View::new(0.0, 90.0), Orientation::Vertical, 0.1);
    let invert = inverse_band_scale(&band);

    assert_eq!(invert(-500.0), Some(key("r2")));
    assert_eq!(invert(500.0), Some(key("r3")));
    assert_eq!(invert(45.0), Some(key("r1")));
    assert_eq!(invert(f64::NAN), None);
}

#[test]
fn inverse_closure_outlives_the_scale() {
    let invert = {
        let band = configure_band_scale(&lanes(), View::new(0.0, 90.0), Orientation::Vertical, 0.0);
        inverse_band_scale(&band)
    };
    assert_eq!(invert(10.0), Some(key("r2")));
}

#[test]
fn empty_band_scale_has_no_bands() {
    let band = BandScale::default();
    assert!(band.domain().is_empty());
    assert_eq!(band.bands().count(), 0);
    assert_eq!(band.invert(0.0), None);
}

#[test]
fn resource_bands_span_the_time_axis() {
    let band = configure_band_scale(&lanes(), View::new(300.0, 90.0), Orientation::Vertical, 0.0);
    let bands = resource_bands(&band, 300.0);

    assert_eq!(bands.len(), 3);
    assert_eq!(bands[1].key, key("r1"));
    assert_eq!((bands[1].x, bands[1].y), (0.0, 30.0));
    assert_eq!((bands[1].width, bands[1].height), (300.0, 30.0));

    let band = configure_band_scale(&lanes(), View::new(300.0, 90.0), Orientation::Horizontal, 0.0);
    let bands = resource_bands(&band, 90.0);
    assert_eq!((bands[2].x, bands[2].y), (200.0, 0.0));
    assert_eq!((bands[2].width, bands[2].height), (100.0, 90.0));
}

#[test]
fn reordered_domain_is_a_different_scale() {
    let view = View::new(0.0, 90.0);
    let forward = configure_band_scale(&lanes(), view, Orientation::Vertical, 0.1);
    let mut reversed_data = lanes();
    reversed_data.reverse();
    let reversed = configure_band_scale(&reversed_data, view, Orientation::Vertical, 0.1);

    assert_ne!(forward, reversed);
    assert_eq!(forward, forward.clone());
}
