//! Active-key selection for one selectable UI group.

/// Which entry of a catalog collection is currently shown.
///
/// `select` swaps the key unconditionally; resolving it against the catalog
/// is the caller's job.
///
/// ```rust
/// use wdf_content::Selection;
///
/// let mut weeks = Selection::new("week1");
/// weeks.select("week2");
/// assert!(weeks.is_active("week2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    active: String,
}

impl Selection {
    pub fn new(default_key: impl Into<String>) -> Self {
        Self {
            active: default_key.into(),
        }
    }

    /// Start on the first key of a collection.
    ///
    /// An empty collection yields an empty key, which no lookup resolves.
    pub fn first_of<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(keys.into_iter().next().unwrap_or_default())
    }

    pub fn select(&mut self, key: impl Into<String>) {
        self.active = key.into();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_picks_first_key() {
        let selection = Selection::first_of(["a", "b", "c"]);
        assert_eq!(selection.active(), "a");
    }

    #[test]
    fn first_of_empty_is_empty() {
        let selection = Selection::first_of(Vec::<&str>::new());
        assert_eq!(selection.active(), "");
    }

    #[test]
    fn select_does_not_validate() {
        let mut selection = Selection::new("week1");
        selection.select("week9");
        assert_eq!(selection.active(), "week9");
        assert!(!selection.is_active("week1"));
    }
}
