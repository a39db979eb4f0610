//! Name matching used by the storage backends.
//!
//! Two comparisons, both case-insensitive:
//!
//! - **Exact**: the whole name equals the query.
//! - **Substring**: the query occurs anywhere inside the name.
//!
//! There is no tokenization, fuzzy matching or ranking. Callers keep matches
//! in the backend's enumeration order.

/// A lowercased name query, folded once and reused for every candidate.
///
/// # Examples
///
/// ```
/// use spotfinder::storage::NameQuery;
///
/// let query = NameQuery::new("TOWER");
/// assert!(query.is_contained_in("CN Tower"));
/// assert!(!query.matches_exactly("CN Tower"));
/// assert!(NameQuery::new("cn tower").matches_exactly("CN Tower"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    folded: String,
}

impl NameQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            folded: query.to_lowercase(),
        }
    }

    /// Case-insensitive equality with the full name.
    #[must_use]
    pub fn matches_exactly(&self, name: &str) -> bool {
        name.to_lowercase() == self.folded
    }

    /// Case-insensitive containment in the name.
    ///
    /// An empty query is contained in every name.
    #[must_use]
    pub fn is_contained_in(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.folded)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_does_not_matter() {
        for query in ["toronto", "TORONTO", "ToRoNtO"] {
            let query = NameQuery::new(query);
            assert!(query.is_contained_in("Toronto Zoo"));
            assert!(query.is_contained_in("University of Toronto"));
            assert!(!query.is_contained_in("Casa Loma"));
        }
    }

    #[test]
    fn exact_needs_the_whole_name() {
        let query = NameQuery::new("cn tower");
        assert!(query.matches_exactly("CN Tower"));
        assert!(!query.matches_exactly("CN Tower Restaurant"));
        assert!(!NameQuery::new("tower").matches_exactly("CN Tower"));
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(!NameQuery::new("cntower").is_contained_in("CN Tower"));
        assert!(!NameQuery::new("xyz").is_contained_in("CN Tower"));
    }

    #[test]
    fn empty_query_matches_any_name() {
        let query = NameQuery::new("");
        assert!(query.is_empty());
        assert!(query.is_contained_in("anything"));
    }
}
