use thiserror::Error;

/// Sentinel tag meaning "no filter applied".
pub const ALL_TAG: &str = "All";

/// Tag extraction contract for anything a [`Catalog`] can hold.
///
/// The catalog never looks at the rest of the item; projects, certifications,
/// and blog posts all go through the same filter by implementing this.
pub trait Tagged {
    fn tags(&self) -> &[String];

    /// Items flagged featured are grouped first by
    /// [`Catalog::visible_partitioned`]. Purely presentational.
    fn featured(&self) -> bool {
        false
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tag not in index: {0}")]
    UnknownTag(String),
}

/// A fixed, ordered collection of tagged items plus the currently selected
/// filter tag.
///
/// The tag index is derived once at construction: the [`ALL_TAG`] sentinel
/// followed by the union of all item tags, deduplicated, in first-seen order.
/// Items themselves are immutable after construction; only the selection
/// changes.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    tag_index: Vec<String>,
    selected: String,
}

impl<T: Tagged> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut tag_index = vec![ALL_TAG.to_string()];
        for item in &items {
            for tag in item.tags() {
                if !tag_index.iter().any(|t| t == tag) {
                    tag_index.push(tag.clone());
                }
            }
        }
        Self {
            items,
            tag_index,
            selected: ALL_TAG.to_string(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// All filter choices, [`ALL_TAG`] first, then first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tag_index
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected
    }

    /// Set the active filter. Selecting a tag that is not in the index leaves
    /// the current selection untouched and reports the bad tag.
    pub fn select_tag(&mut self, tag: &str) -> Result<(), CatalogError> {
        if !self.tag_index.iter().any(|t| t == tag) {
            return Err(CatalogError::UnknownTag(tag.to_string()));
        }
        self.selected = tag.to_string();
        Ok(())
    }

    /// The currently visible subset, preserving the catalog's original
    /// relative order. With [`ALL_TAG`] selected this is every item.
    pub fn visible(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| {
                self.selected == ALL_TAG || item.tags().iter().any(|t| *t == self.selected)
            })
            .collect()
    }

    /// The visible subset split into (featured, regular) groups.
    ///
    /// This regroups the exact items [`Self::visible`] returns; it never
    /// changes which items are included.
    pub fn visible_partitioned(&self) -> (Vec<&T>, Vec<&T>) {
        self.visible().into_iter().partition(|item| item.featured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        tags: Vec<String>,
        featured: bool,
    }

    impl Entry {
        fn new(name: &'static str, tags: &[&str], featured: bool) -> Self {
            Self {
                name,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                featured,
            }
        }
    }

    impl Tagged for Entry {
        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn featured(&self) -> bool {
            self.featured
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("anomaly-detection", &["AI"], true),
            Entry::new("dashboard", &["AI", "Web"], true),
            Entry::new("zero-trust", &["Security"], false),
        ]
    }

    fn names(items: &[&Entry]) -> Vec<String> {
        items.iter().map(|e| e.name.to_string()).collect()
    }

    #[test]
    fn test_all_tag_returns_every_item_in_order() {
        let catalog = Catalog::new(sample());
        assert_eq!(catalog.selected_tag(), ALL_TAG);
        assert_eq!(
            names(&catalog.visible()),
            vec!["anomaly-detection", "dashboard", "zero-trust"]
        );
    }

    #[test]
    fn test_tag_index_is_deterministic_and_order_preserving() {
        let first = Catalog::new(sample());
        let second = Catalog::new(sample());
        assert_eq!(first.tags(), &["All", "AI", "Web", "Security"]);
        assert_eq!(first.tags(), second.tags());
    }

    #[test]
    fn test_shared_tags_appear_once() {
        let catalog = Catalog::new(vec![
            Entry::new("a", &["Web", "AI"], false),
            Entry::new("b", &["AI", "Web"], false),
            Entry::new("c", &["Web"], false),
        ]);
        assert_eq!(catalog.tags(), &["All", "Web", "AI"]);
    }

    #[test]
    fn test_empty_catalog_has_only_the_sentinel() {
        let catalog = Catalog::<Entry>::new(Vec::new());
        assert_eq!(catalog.tags(), &[ALL_TAG]);
        assert!(catalog.visible().is_empty());
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let items = sample();
        let mut catalog = Catalog::new(items.clone());
        for tag in catalog.tags().to_vec() {
            if tag == ALL_TAG {
                continue;
            }
            catalog.select_tag(&tag).unwrap();
            let visible = catalog.visible();
            // soundness: everything shown carries the tag
            assert!(visible.iter().all(|e| e.tags.contains(&tag)));
            // completeness: everything carrying the tag is shown
            let expected = items.iter().filter(|e| e.tags.contains(&tag)).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn test_spec_scenario_ai_security_all() {
        let mut catalog = Catalog::new(sample());

        catalog.select_tag("AI").unwrap();
        assert_eq!(
            names(&catalog.visible()),
            vec!["anomaly-detection", "dashboard"]
        );

        catalog.select_tag("Security").unwrap();
        assert_eq!(names(&catalog.visible()), vec!["zero-trust"]);

        catalog.select_tag("All").unwrap();
        assert_eq!(
            names(&catalog.visible()),
            vec!["anomaly-detection", "dashboard", "zero-trust"]
        );
    }

    #[test]
    fn test_select_tag_is_idempotent() {
        let mut catalog = Catalog::new(sample());
        catalog.select_tag("AI").unwrap();
        let once = names(&catalog.visible());
        catalog.select_tag("AI").unwrap();
        assert_eq!(names(&catalog.visible()), once);
    }

    #[test]
    fn test_unknown_tag_is_rejected_without_state_change() {
        let mut catalog = Catalog::new(sample());
        catalog.select_tag("Web").unwrap();

        let err = catalog.select_tag("Blockchain").unwrap_err();
        assert_eq!(err, CatalogError::UnknownTag("Blockchain".to_string()));
        assert_eq!(catalog.selected_tag(), "Web");
        assert_eq!(names(&catalog.visible()), vec!["dashboard"]);
    }

    #[test]
    fn test_partition_regroups_without_changing_membership() {
        let mut catalog = Catalog::new(sample());
        catalog.select_tag("AI").unwrap();

        let visible = names(&catalog.visible());
        let (featured, regular) = catalog.visible_partitioned();
        assert_eq!(names(&featured), vec!["anomaly-detection", "dashboard"]);
        assert!(regular.is_empty());

        let mut recombined = names(&featured);
        recombined.extend(names(&regular));
        recombined.sort();
        let mut expected = visible;
        expected.sort();
        assert_eq!(recombined, expected);
    }

    #[test]
    fn test_partition_keeps_relative_order_within_groups() {
        let catalog = Catalog::new(vec![
            Entry::new("first-regular", &["Web"], false),
            Entry::new("first-featured", &["Web"], true),
            Entry::new("second-regular", &["Web"], false),
            Entry::new("second-featured", &["Web"], true),
        ]);
        let (featured, regular) = catalog.visible_partitioned();
        assert_eq!(names(&featured), vec!["first-featured", "second-featured"]);
        assert_eq!(names(&regular), vec!["first-regular", "second-regular"]);
    }
}
