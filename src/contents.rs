//! Version-spec pick list contents
//!
//! The build-parameter machinery that consumes this crate presents parsed
//! records as a key/display pick list keyed by changeset version or label
//! name. The list preserves the order the records had in the tool output;
//! there is no deduplication and no sorting.

use crate::model::{ChangesetEntry, LabelEntry};
use crate::tf::TfError;

/// Which record kind a pick list is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSpecKind {
    Changeset,
    Label,
}

/// Insertion-ordered key/display pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSpecContents {
    entries: Vec<(String, String)>,
}

impl VersionSpecContents {
    pub fn from_changesets(entries: &[ChangesetEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| (e.version.clone(), e.display_value()))
                .collect(),
        }
    }

    pub fn from_labels(entries: &[LabelEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| (e.label.clone(), e.display_value()))
                .collect(),
        }
    }

    /// Display string for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key/display pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One cached pick list per (kind, project path)
///
/// The fetch closure runs only when the cache is cold; switching kind or
/// project path, or calling [`invalidate`], clears the cached list. The
/// project path always comes in from the caller.
///
/// [`invalidate`]: ContentsCache::invalidate
#[derive(Debug)]
pub struct ContentsCache {
    kind: VersionSpecKind,
    project_path: String,
    contents: Option<VersionSpecContents>,
}

impl ContentsCache {
    pub fn new(kind: VersionSpecKind, project_path: impl Into<String>) -> Self {
        Self {
            kind,
            project_path: project_path.into(),
            contents: None,
        }
    }

    pub fn kind(&self) -> VersionSpecKind {
        self.kind
    }

    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    /// Switch record kind; a change drops the cached list
    pub fn set_kind(&mut self, kind: VersionSpecKind) {
        if self.kind != kind {
            self.kind = kind;
            self.contents = None;
        }
    }

    /// Switch project path; a change drops the cached list
    pub fn set_project_path(&mut self, project_path: impl Into<String>) {
        let project_path = project_path.into();
        if self.project_path != project_path {
            self.project_path = project_path;
            self.contents = None;
        }
    }

    pub fn invalidate(&mut self) {
        self.contents = None;
    }

    /// Return the cached list, fetching it first if the cache is cold
    pub fn get_or_fetch(
        &mut self,
        fetch: impl FnOnce(VersionSpecKind, &str) -> Result<VersionSpecContents, TfError>,
    ) -> Result<&VersionSpecContents, TfError> {
        match &mut self.contents {
            Some(contents) => Ok(contents),
            slot => Ok(slot.insert(fetch(self.kind, &self.project_path)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_changesets() -> Vec<ChangesetEntry> {
        vec![
            ChangesetEntry {
                version: "43".to_string(),
                author: "bob".to_string(),
                date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                message: String::new(),
            },
            ChangesetEntry {
                version: "42".to_string(),
                author: "alice".to_string(),
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                message: "Initial import".to_string(),
            },
        ]
    }

    #[test]
    fn test_contents_preserve_input_order() {
        let contents = VersionSpecContents::from_changesets(&sample_changesets());
        let keys: Vec<&str> = contents.iter().map(|(k, _)| k).collect();
        // Tool output order, not sorted
        assert_eq!(keys, vec!["43", "42"]);
        assert_eq!(contents.get("42"), Some("42 - Jan 1, 2020 - Initial import"));
        assert_eq!(contents.get("44"), None);
    }

    #[test]
    fn test_cache_fetches_once() {
        let mut cache = ContentsCache::new(VersionSpecKind::Changeset, "$/Proj");
        let mut calls = 0;
        for _ in 0..3 {
            let contents = cache
                .get_or_fetch(|_, _| {
                    calls += 1;
                    Ok(VersionSpecContents::from_changesets(&sample_changesets()))
                })
                .unwrap();
            assert_eq!(contents.len(), 2);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cache_invalidate_refetches() {
        let mut cache = ContentsCache::new(VersionSpecKind::Changeset, "$/Proj");
        let mut calls = 0;
        let mut fetch = |_: VersionSpecKind, _: &str| {
            calls += 1;
            Ok(VersionSpecContents::default())
        };
        cache.get_or_fetch(&mut fetch).unwrap();
        cache.invalidate();
        cache.get_or_fetch(&mut fetch).unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_cache_drops_on_kind_or_path_change() {
        let mut cache = ContentsCache::new(VersionSpecKind::Changeset, "$/Proj");
        cache
            .get_or_fetch(|_, _| Ok(VersionSpecContents::default()))
            .unwrap();

        cache.set_kind(VersionSpecKind::Changeset);
        let contents = cache.get_or_fetch(|_, _| panic!("cache should be warm"));
        assert!(contents.is_ok());

        cache.set_kind(VersionSpecKind::Label);
        let mut fetched = false;
        cache
            .get_or_fetch(|kind, _| {
                fetched = true;
                assert_eq!(kind, VersionSpecKind::Label);
                Ok(VersionSpecContents::default())
            })
            .unwrap();
        assert!(fetched);

        cache.set_project_path("$/Other");
        let mut fetched = false;
        cache
            .get_or_fetch(|_, path| {
                fetched = true;
                assert_eq!(path, "$/Other");
                Ok(VersionSpecContents::default())
            })
            .unwrap();
        assert!(fetched);
    }

    #[test]
    fn test_cache_fetch_error_stays_cold() {
        let mut cache = ContentsCache::new(VersionSpecKind::Label, "$/Proj");
        let result = cache.get_or_fetch(|_, _| {
            Err(TfError::DateFormat {
                value: "bogus".to_string(),
            })
        });
        assert!(result.is_err());

        let mut fetched = false;
        cache
            .get_or_fetch(|_, _| {
                fetched = true;
                Ok(VersionSpecContents::default())
            })
            .unwrap();
        assert!(fetched);
    }
}
