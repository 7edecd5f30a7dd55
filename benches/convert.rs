use std::collections::HashMap;

use criterion::{black_box, criterion_group, Criterion};
use chainmap::{HashTable, OnDuplicate};

fn records(n: usize) -> Vec<HashMap<String, String>> {
    (0..n)
        .map(|i| {
            HashMap::from([
                (String::from("athlete_id"), i.to_string()),
                (String::from("edition"), format!("{} Summer Olympics", 1896 + 4 * (i % 32))),
            ])
        })
        .collect()
}

pub fn from_sequence(c: &mut Criterion) {
    c.bench_function("from_sequence_keyed", |b| {
        let rows = records(10_000);
        b.iter(|| {
            let table =
                HashTable::from_sequence(rows.iter().cloned(), None, Some("athlete_id"), OnDuplicate::Fail)
                    .expect("ids are unique");
            black_box(table.len())
        })
    });
    c.bench_function("to_sequence", |b| {
        let table = HashTable::from_values(0..10_000u32, None, OnDuplicate::Fail).expect("non-empty");
        b.iter(|| black_box(table.to_sequence()))
    });
}

criterion_group!(conversions, from_sequence);
