use std::borrow::Cow;

/// Anything that can address an entry. Keys compare by their string form,
/// so `7` and `"7"` name the same entry.
pub trait TableKey {
    fn key_str(&self) -> Cow<'_, str>;
}

impl TableKey for str {
    fn key_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TableKey for String {
    fn key_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TableKey for Cow<'_, str> {
    fn key_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<K: TableKey + ?Sized> TableKey for &K {
    fn key_str(&self) -> Cow<'_, str> {
        (**self).key_str()
    }
}

macro_rules! integer_keys {
    ($($ty:ty),*) => {
        $(
            impl TableKey for $ty {
                fn key_str(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

integer_keys!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
