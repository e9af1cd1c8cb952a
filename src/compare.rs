//! Caller-supplied payload ordering.
//!
//! A graph never looks at `Eq`, `Hash` or `Ord` on its payloads directly. All
//! identity decisions go through a [`Comparator`], and two payloads are the
//! same node exactly when the comparator returns [`Ordering::Equal`].
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparator, so closures work out of the
//! box:
//!
//! ```
//! use trellis::Graph;
//!
//! let mut graph = Graph::new(|a: &String, b: &String| {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! });
//! let first = graph.add_node("Alpha".to_string());
//! let again = graph.add_node("ALPHA".to_string());
//! assert_eq!(first, again);
//! ```

use core::cmp::Ordering;

/// A total order over payload values.
///
/// Implementations must be consistent for the lifetime of the graph that
/// uses them: reflexive, antisymmetric and transitive. A comparator that
/// breaks these rules cannot cause memory unsafety or panics, but lookups may
/// then miss nodes that are present.
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` when `a` and `b` denote the same node.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders payloads by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders payloads by a projected key.
///
/// ```
/// use trellis::{ByKey, Graph};
///
/// #[derive(Debug)]
/// struct Post {
///     title: &'static str,
/// }
///
/// let mut graph = Graph::new(ByKey::new(|p: &Post| p.title));
/// graph.add_edge(Post { title: "A" }, Post { title: "B" });
/// graph.add_node(Post { title: "A" });
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Wraps a key projection.
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Reverses another comparator.
///
/// Equality is unchanged, so this only affects code that cares about order,
/// such as iteration over the sorted payload index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(a: &i32, b: &i32) -> Ordering {
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[test]
    fn fn_item_is_a_comparator() {
        assert_eq!(numeric.compare(&1, &2), Ordering::Less);
        assert!(numeric.equal(&3, &3));
        assert!(!numeric.equal(&3, &4));
    }

    #[test]
    fn natural_uses_ord() {
        assert_eq!(Natural.compare("a", "b"), Ordering::Less);
        assert_eq!(Natural.compare(&5u8, &5u8), Ordering::Equal);
    }

    #[test]
    fn by_key_ignores_other_fields() {
        let cmp = ByKey::new(|pair: &(u32, char)| pair.0);
        assert!(cmp.equal(&(1, 'x'), &(1, 'y')));
        assert_eq!(cmp.compare(&(2, 'a'), &(1, 'z')), Ordering::Greater);
    }

    #[test]
    fn reverse_flips_order_but_not_equality() {
        let cmp = Reverse(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert!(cmp.equal(&7, &7));
    }
}
