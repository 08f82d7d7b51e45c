use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use jiff::civil::date;
use walkabout_itinerary::{Location, LocationId, NewLocation, segment};

fn create_locations(count: usize, break_every: usize) -> Vec<Location> {
    (0..count)
        .map(|index| {
            Location::new(
                LocationId::new(index as u64 + 1),
                date(2025, 5, 3),
                index as i64,
                NewLocation {
                    name: format!("Stop {index}"),
                    display_name: String::new(),
                    latitude: 50.8467 + index as f64 * 0.0001,
                    longitude: 4.3525,
                    break_after: index % break_every == break_every - 1,
                },
            )
            .unwrap()
        })
        .collect()
}

fn segmenter_benchmark(c: &mut Criterion) {
    let day = create_locations(30, 7);
    let long_day = create_locations(10_000, 7);

    c.bench_function("segment 30 locations", |b| {
        b.iter(|| segment(black_box(&day)))
    });

    c.bench_function("segment 10k locations", |b| {
        b.iter(|| segment(black_box(&long_day)))
    });

    c.bench_function("segment points 10k locations", |b| {
        b.iter(|| {
            segment(black_box(&long_day))
                .iter()
                .filter(|segment| segment.is_routable())
                .map(|segment| segment.points().len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, segmenter_benchmark);
criterion_main!(benches);
