/// Insertion-ordered query-parameter collection.
///
/// Entries keep the order in which they were added; entries pushed with an
/// absent value ([`push_opt`](QueryParams::push_opt) with `None`) are kept
/// in the collection but dropped entirely at URL construction, so an absent
/// filter never produces an empty `key=` pair on the wire.
///
/// # Example
///
/// ```rust
/// use paywise_core::http_client::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.push("limit", 10);
/// params.push_opt("offset", None::<u32>);
/// params.push("status", "open");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.push((key.into(), Some(value.to_string())));
    }

    /// Appends an optional parameter; `None` is dropped at URL construction.
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.entries
            .push((key.into(), value.map(|v| v.to_string())));
    }

    /// Builder-style variant of [`push`](QueryParams::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Builder-style variant of [`push_opt`](QueryParams::push_opt).
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Returns true if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries, including absent ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn entries(&self) -> &[(String, Option<String>)] {
        &self.entries
    }
}
