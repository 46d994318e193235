use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{
    Activity, Orientation, View, ZoomTransform, configure_band_scale, configure_time_scale,
    rescale_time,
};
use timeline_rs::render::NullRenderer;

fn generated_activities(count: usize, lanes: usize) -> Vec<Activity> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 1.5;
            let finish = start + 3.0 + (i % 7) as f64;
            Activity::new(format!("act-{i}"), start, finish, format!("lane-{}", i % lanes))
        })
        .collect()
}

fn bench_time_scale_round_trip(c: &mut Criterion) {
    let data = generated_activities(100, 8);
    let scale = rescale_time(
        &data,
        View::new(1920.0, 1080.0),
        Orientation::Horizontal,
        ZoomTransform::new(2.5, -300.0, 0.0),
    );

    c.bench_function("time_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.time_to_pixel(black_box(42.125));
            let _ = scale.pixel_to_time(px);
        })
    });
}

fn bench_configure_scales_10k(c: &mut Criterion) {
    let data = generated_activities(10_000, 64);
    let view = View::new(1920.0, 1080.0);

    c.bench_function("configure_scales_10k", |b| {
        b.iter(|| {
            let _ = configure_time_scale(black_box(&data), view, Orientation::Horizontal);
            let _ = configure_band_scale(black_box(&data), view, Orientation::Vertical, 0.1);
        })
    });
}

fn bench_zoom_rederive_scene_2k(c: &mut Criterion) {
    let config = TimelineConfig::new(View::new(1600.0, 900.0));
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");
    timeline.set_data(generated_activities(2_000, 32));

    let mut k = 1.0;
    c.bench_function("zoom_rederive_scene_2k", |b| {
        b.iter(|| {
            k = if k > 8.0 { 1.0 } else { k * 1.1 };
            timeline.zoom(ZoomTransform::new(k, 0.0, 0.0));
            let _ = black_box(timeline.scene());
        })
    });
}

fn bench_cached_scene_read_2k(c: &mut Criterion) {
    let config = TimelineConfig::new(View::new(1600.0, 900.0));
    let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");
    timeline.set_data(generated_activities(2_000, 32));
    let _ = timeline.scene();

    c.bench_function("cached_scene_read_2k", |b| {
        b.iter(|| {
            let _ = black_box(timeline.scene());
        })
    });
}

criterion_group!(
    benches,
    bench_time_scale_round_trip,
    bench_configure_scales_10k,
    bench_zoom_rederive_scene_2k,
    bench_cached_scene_read_2k
);
criterion_main!(benches);
