//! Collection Helpers

/// Keep the items matching `predicate`, in order
pub fn grep<T, I, F>(items: I, mut predicate: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}
