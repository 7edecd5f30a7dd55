use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

/// A row whose fields can be looked up by name, such as a parsed CSV line.
pub trait Record {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

// Header/value pairs in column order
impl Record for Vec<(String, String)> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(header, _)| header == name)
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::record::*;

    #[test]
    fn lookup_by_name() {
        let row: Vec<(String, String)> = vec![
            (String::from("athlete_id"), String::from("65649")),
            (String::from("born"), String::from("10-Apr-99")),
        ];
        assert_eq!(row.field("born").as_deref(), Some("10-Apr-99"));
        assert_eq!(row.field("height"), None);

        let map: HashMap<String, String> = row.iter().cloned().collect();
        assert_eq!(map.field("athlete_id").as_deref(), Some("65649"));
        let tree: BTreeMap<String, String> = row.into_iter().collect();
        assert_eq!((&tree).field("athlete_id").as_deref(), Some("65649"));
    }
}
