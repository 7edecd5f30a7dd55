mod convert;
mod lookup;

criterion::criterion_main!(lookup::lookups, convert::conversions);
