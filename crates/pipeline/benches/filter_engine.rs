//! Benchmarks for the filter engine
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic listing set far larger than the shipped fixture.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Capacity, Listing};
use pipeline::{
    filter_listings, BedroomCriteria, CountFilter, FilterCriteria, PriceRange, RoomTypeSelection,
};

fn synthetic_listings(count: u32) -> Vec<Listing> {
    (0..count)
        .map(|id| {
            let room_type = if id % 3 == 0 { "house" } else { "room" };
            Listing::new(
                id,
                room_type,
                14_000 + u64::from(id % 60) * 10_000,
                Capacity {
                    bedrooms: Some(1 + id % 4),
                    beds: Some(1 + id % 5),
                    bathrooms: Some(1 + id % 3),
                },
            )
        })
        .collect()
}

fn bench_unrestricted(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);
    let criteria = FilterCriteria::unrestricted();

    c.bench_function("filter_listings_unrestricted", |b| {
        b.iter(|| black_box(filter_listings(black_box(&listings), black_box(&criteria))))
    });
}

fn bench_selective(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);
    let criteria = FilterCriteria {
        room_type: RoomTypeSelection::from(data_loader::RoomType::House),
        bedrooms: BedroomCriteria {
            bedrooms: CountFilter::Exactly(2),
            beds: CountFilter::Any,
            bathrooms: CountFilter::Exactly(1),
        },
        price_range: PriceRange::new(50_000, 300_000),
    };

    c.bench_function("filter_listings_selective", |b| {
        b.iter(|| black_box(filter_listings(black_box(&listings), black_box(&criteria))))
    });
}

criterion_group!(benches, bench_unrestricted, bench_selective);
criterion_main!(benches);
