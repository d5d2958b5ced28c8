use criterion::{criterion_group, criterion_main, Criterion};

use chromatch::{ColorGroup, DistanceMetric, RgbColor};

/// Build a 256-entry group shaped like an indexed terminal palette: a 6x6x6
/// color cube bracketed by 16 base colors and a 24-step gray ramp.
fn indexed_palette() -> ColorGroup {
    let mut members = Vec::with_capacity(256);
    for index in 0..16_u32 {
        let level = if index < 8 { 128 } else { 255 };
        let channel = |bit: u32| if index >> bit & 1 == 1 { level } else { 0 };
        members.push((
            format!("base{}", index),
            RgbColor::with_channels(channel(0) as u8, channel(1) as u8, channel(2) as u8),
        ));
    }
    for index in 0..216_u32 {
        let level = |value: u32| if value == 0 { 0 } else { (55 + 40 * value) as u8 };
        members.push((
            format!("cube{}", index),
            RgbColor::with_channels(
                level(index / 36),
                level(index / 6 % 6),
                level(index % 6),
            ),
        ));
    }
    for index in 0..24_u32 {
        let gray = (8 + 10 * index) as u8;
        members.push((
            format!("gray{}", index),
            RgbColor::with_channels(gray, gray, gray),
        ));
    }
    ColorGroup::new("indexed", members)
}

pub fn run_benchmarks(c: &mut Criterion) {
    let palette = indexed_palette();
    // Queries that are no palette entries, so every lookup scans.
    let queries: Vec<RgbColor> = (0..512_u32)
        .map(|step| {
            RgbColor::with_channels(
                (step % 254 + 1) as u8,
                (step * 7 % 254 + 1) as u8,
                (step * 13 % 254 + 1) as u8,
            )
        })
        .filter(|color| palette.by_value(color).is_err())
        .collect();

    let mut group = c.benchmark_group("closest");

    group.bench_function("exact-match", |b| {
        let black = RgbColor::with_channels(0, 0, 0);
        b.iter(|| palette.closest(&black))
    });

    group.bench_function("cached-scan", |b| {
        let mauve = RgbColor::with_channels(199, 21, 133);
        b.iter(|| palette.closest(&mauve))
    });

    // Cycling through more distinct queries than the memo holds keeps every
    // lookup cold.
    group.bench_function("cold-scan-manhattan", |b| {
        let mut cursor = queries.iter().cycle();
        b.iter(|| {
            let query = cursor.next().expect("cycle never ends");
            palette.closest_with(query, DistanceMetric::Manhattan)
        })
    });

    group.bench_function("cold-scan-cmc", |b| {
        let mut cursor = queries.iter().cycle();
        b.iter(|| {
            let query = cursor.next().expect("cycle never ends");
            palette.closest_with(query, DistanceMetric::Cmc)
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
