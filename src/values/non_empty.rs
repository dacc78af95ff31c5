//! Lists that CSS requires to hold at least one item.

use std::ops::Deref;

use crate::error::{Error, Result};

/// A list with at least one item.
///
/// Derefs to a slice, so it is read like a `&[T]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Fails with [`Error::EmptyList`] naming `what` when `items` is empty.
    pub fn new(what: &'static str, items: impl IntoIterator<Item = T>) -> Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(Error::EmptyList(what));
        }
        Ok(NonEmpty(items))
    }

    pub fn single(item: T) -> Self {
        NonEmpty(vec![item])
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            NonEmpty::<u8>::new("numbers", []),
            Err(Error::EmptyList("numbers"))
        );
    }

    #[test]
    fn test_keeps_order() {
        let mut list = NonEmpty::new("numbers", [3, 1]).unwrap();
        list.push(2);
        assert_eq!(&*list, &[3, 1, 2]);
        assert_eq!(*list.first(), 3);
        assert_eq!(NonEmpty::single('a').into_vec(), vec!['a']);
    }
}
