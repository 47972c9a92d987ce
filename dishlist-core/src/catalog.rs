//! Deduplicated collection of cleaned dish names.

use rustc_hash::FxHashSet;

/// Set of accepted dishes, built incrementally during a run.
///
/// Insertion order is irrelevant; [`DishCatalog::into_sorted`] renders the
/// final list in ascending byte order so repeated runs produce identical
/// output.
#[derive(Debug, Default, Clone)]
pub struct DishCatalog {
    dishes: FxHashSet<String>,
}

impl DishCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dish. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, dish: &str) -> bool {
        if self.dishes.contains(dish) {
            return false;
        }
        self.dishes.insert(dish.to_owned())
    }

    /// True if `dish` has been accepted.
    #[inline]
    pub fn contains(&self, dish: &str) -> bool {
        self.dishes.contains(dish)
    }

    /// Number of unique dishes.
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// True if no dish has been accepted.
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Consumes the catalog, returning the dishes sorted ascending.
    pub fn into_sorted(self) -> Vec<String> {
        let mut dishes: Vec<String> = self.dishes.into_iter().collect();
        dishes.sort_unstable();
        dishes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mut catalog = DishCatalog::new();
        assert!(catalog.insert("pizza margherita"));
        assert!(!catalog.insert("pizza margherita"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("pizza margherita"));
    }

    #[test]
    fn sorted_output() {
        let mut catalog = DishCatalog::new();
        for dish in ["spaghetti bolognese", "soup", "pizza margherita"] {
            catalog.insert(dish);
        }
        assert_eq!(
            catalog.into_sorted(),
            ["pizza margherita", "soup", "spaghetti bolognese"]
        );
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        let mut catalog = DishCatalog::new();
        catalog.insert("ham steak");
        catalog.insert("ham");
        catalog.insert("ham and eggs");
        assert_eq!(catalog.into_sorted(), ["ham", "ham and eggs", "ham steak"]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = DishCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.into_sorted().is_empty());
    }
}
