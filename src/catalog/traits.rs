//! Common lookup trait for id-keyed collections.

/// Read-only lookup of items by id.
///
/// # Example
///
/// ```
/// use avatarkit::catalog::{Catalog, Registry};
/// use avatarkit::models::{Category, Part};
///
/// let catalog = Catalog::from_parts(vec![Part::new("hair_red_bob", Category::Hair, "hair/red_bob.png")]);
///
/// assert!(catalog.contains("hair_red_bob"));
/// assert_eq!(catalog.len(), 1);
/// ```
pub trait Registry<V> {
    /// Check if an item with the given id exists.
    fn contains(&self, id: &str) -> bool;

    /// Get an item by id.
    fn get(&self, id: &str) -> Option<&V>;

    /// Get the number of items.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an iterator over all ids, in insertion order.
    fn ids(&self) -> Box<dyn Iterator<Item = &String> + '_>;
}
