// To run:
//
// $ cargo bench
//
// Inputs are a fixed pseudorandom sample of code points, either spread over
// the whole space or confined to ASCII, which dominates real documents.

#![allow(clippy::needless_pass_by_value)]

use criterion::{criterion_group, criterion_main, Criterion};
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;
use xml_name_char::{Classifier, Property};

fn gen_code_points(limit: u32) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1);
    let range = Uniform::new(0, limit).unwrap();
    (0..10_000).map(|_| rng.sample(range)).collect()
}

fn bench(c: &mut Criterion, group_name: &str, code_points: Vec<u32>) {
    let mut group = c.benchmark_group(group_name);
    group.measurement_time(Duration::from_secs(5));
    group.bench_function("baseline", |b| {
        b.iter(|| {
            for &cp in &code_points {
                black_box(cp);
            }
        });
    });
    for property in Property::ALL {
        for classifier in Classifier::all(property) {
            let id = format!("{}/{}", property.name(), classifier.name());
            group.bench_function(&id, |b| {
                b.iter(|| {
                    for &cp in &code_points {
                        black_box(classifier.classify(cp));
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_unicode(c: &mut Criterion) {
    bench(c, "unicode", gen_code_points(0x110000));
}

fn bench_ascii(c: &mut Criterion) {
    bench(c, "ascii", gen_code_points(0x80));
}

criterion_group!(benches, bench_unicode, bench_ascii);
criterion_main!(benches);
