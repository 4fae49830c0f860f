use std::fmt::Debug;

/// Identifier of a record inside its own store
pub trait RecordId: Clone + PartialEq + Eq + Debug + Send + Sync + 'static {
    /// String form used for DOM keys and element ids
    fn as_string(&self) -> String;
}

/// Identifiers that are allocated as `max(existing) + 1`
pub trait SequentialId: RecordId + Ord {
    /// Id to use for the very first record of an empty store
    fn first() -> Self;

    /// Id following the current maximum, `None` once the id space is used up
    fn next_after(max: &Self) -> Option<Self>;
}

impl RecordId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}

impl SequentialId for u32 {
    fn first() -> Self {
        1
    }

    fn next_after(max: &Self) -> Option<Self> {
        max.checked_add(1)
    }
}

impl RecordId for String {
    fn as_string(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_string_form() {
        assert_eq!(42u32.as_string(), "42");
        assert_eq!("INV-1".to_string().as_string(), "INV-1");
    }

    #[test]
    fn test_next_after_stops_at_max() {
        assert_eq!(u32::next_after(&3), Some(4));
        assert_eq!(u32::next_after(&(u32::MAX - 1)), Some(u32::MAX));
        assert_eq!(u32::next_after(&u32::MAX), None);
    }
}
