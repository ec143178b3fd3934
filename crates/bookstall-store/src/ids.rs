//! # Identifier Generation
//!
//! Every book, sale and loan gets an id from an [`IdGenerator`] owned by
//! the store. Ids are never derived from the clock, so two records created
//! within the same millisecond still get distinct ids.

use std::fmt;

use uuid::Uuid;

/// Source of unique record identifiers.
pub trait IdGenerator: Send + fmt::Debug {
    /// Returns an id never returned before by this generator.
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `prefix-1`, `prefix-2`, ... ids.
///
/// Handy for demos and tests where readable, predictable ids matter.
///
/// ```rust
/// use bookstall_store::{IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::new("rec");
/// assert_eq!(ids.next_id(), "rec-1");
/// assert_eq!(ids.next_id(), "rec-2");
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn test_uuid_ids_parse_back() {
        let id = UuidIds.next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "id-1");
        assert_eq!(ids.next_id(), "id-2");
        assert_eq!(ids.next_id(), "id-3");
    }
}
