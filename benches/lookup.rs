use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use chainmap::{HashTable, OnDuplicate};

fn filled(capacity: usize, entries: usize) -> HashTable<usize> {
    let mut table = HashTable::new(capacity).expect("capacity is non-zero");
    for i in 0..entries {
        table
            .add(format!("athlete{i}"), i, OnDuplicate::Fail)
            .expect("keys are distinct");
    }
    table
}

pub fn find(c: &mut Criterion) {
    c.bench_function("find_numeric", |b| {
        let mut table = HashTable::new(4096).expect("capacity is non-zero");
        for i in 0..4096usize {
            table.add(i, i, OnDuplicate::Fail).expect("keys are distinct");
        }
        b.iter(|| {
            for i in (0..4096usize).step_by(7) {
                black_box(table.find(i));
            }
        })
    });
}

// Fixed capacity with a growing entry count: chains lengthen, lookups slow.
pub fn load_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_factor");
    for entries in [256, 1024, 4096, 16384].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            entries,
            |b, &entries| {
                let table = filled(1024, entries);
                let keys: Vec<String> = (0..entries).step_by(13).map(|i| format!("athlete{i}")).collect();
                b.iter(|| {
                    for key in &keys {
                        black_box(table.find(key));
                    }
                })
            },
        );
    }
    group.finish()
}

criterion_group!(lookups, find, load_factor);
