use std::collections::BTreeMap;
use std::fmt;

/// In-memory phone book mapping a contact name to a phone number.
///
/// Names are case-sensitive and unique. Phone numbers are opaque strings and
/// are never validated. Iteration order is sorted by name, which keeps the
/// rendering produced by [`fmt::Display`] stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: BTreeMap<String, String>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. Returns the previous phone, if any.
    pub fn upsert(&mut self, name: impl Into<String>, phone: impl Into<String>) -> Option<String> {
        self.contacts.insert(name.into(), phone.into())
    }

    /// Overwrite the phone of an existing contact.
    ///
    /// Returns `false` and leaves the store untouched when `name` is unknown.
    pub fn update(&mut self, name: &str, phone: impl Into<String>) -> bool {
        match self.contacts.get_mut(name) {
            Some(current) => {
                *current = phone.into();
                true
            }
            None => false,
        }
    }

    pub fn phone(&self, name: &str) -> Option<&str> {
        self.contacts.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contacts.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }
}

/// One `name: phone` pair per line, no trailing newline.
impl fmt::Display for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, phone)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name}: {phone}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_overwrites_silently() {
        let mut store = ContactStore::new();
        assert_eq!(store.upsert("John", "123456"), None);
        assert_eq!(store.upsert("John", "098765"), Some("123456".to_string()));
        assert_eq!(store.phone("John"), Some("098765"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_requires_existing_name() {
        let mut store = ContactStore::new();
        assert!(!store.update("Bob", "555"));
        assert!(store.is_empty());

        store.upsert("Bob", "111");
        assert!(store.update("Bob", "555"));
        assert_eq!(store.phone("Bob"), Some("555"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = ContactStore::new();
        store.upsert("john", "1");
        assert_eq!(store.phone("John"), None);
        assert_eq!(store.phone("john"), Some("1"));
    }

    #[test]
    fn test_display_is_sorted_by_name() {
        let mut store = ContactStore::new();
        store.upsert("B", "2");
        store.upsert("A", "1");
        assert_eq!(store.to_string(), "A: 1\nB: 2");
        assert_eq!(ContactStore::new().to_string(), "");
    }
}
