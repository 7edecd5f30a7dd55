pub mod bucket;
pub mod console;
pub mod convert;
pub mod error;
pub mod hasher;
pub mod hashmap;
pub mod key;
pub mod record;
pub mod session;

pub use crate::error::TableError;
pub use crate::hashmap::{HashTable, OnDuplicate};
pub use crate::key::TableKey;
pub use crate::record::Record;
