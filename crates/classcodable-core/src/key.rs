///
/// CodingKey
///
/// Closed vocabulary of serialized keys for one generated type.
/// `ALL` lists every key in field declaration order.
///

pub trait CodingKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// The serialized key.
    fn as_str(self) -> &'static str;

    /// Resolve a serialized key back to its case.
    #[must_use]
    fn from_str_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

///
/// TESTS
///
