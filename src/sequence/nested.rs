//! Arbitrarily nested sequences and flattening.
//!
//! A [`Nested`] value is either a single leaf element or a list of further
//! nested values. The [`nested!`](crate::nested) macro builds literal trees:
//!
//! ```rust
//! use lambars_lists::nested;
//!
//! let tree = nested![1, [2, [3]], []];
//! assert_eq!(tree.leaf_count(), 3);
//! assert_eq!(tree.to_flat(), vec![1, 2, 3]);
//! ```

/// A leaf element or a list of nested values.
///
/// Dropping a tree does not recurse per nesting level, so trees of any depth
/// can be built, flattened and dropped. The derived `Clone`, `PartialEq`,
/// `Hash` and `Debug` impls, and [`Nested::map`], do recurse per level.
///
/// # Serde
///
/// With the `serde` feature a tree is stored untagged: a leaf as its bare
/// value and a list as a sequence. Deserialization tries `Leaf` first, so
/// `T` must not itself deserialize from a sequence. For a `T` such as
/// `serde_json::Value`, a serialized list comes back as a single leaf.
///
/// # Type Parameters
///
/// * `T` - The type of the leaf elements
///
/// # Examples
///
/// ```rust
/// use lambars_lists::sequence::Nested;
///
/// let tree = Nested::List(vec![Nested::Leaf(1), Nested::List(vec![Nested::Leaf(2)])]);
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.leaf_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A list of nested values, possibly empty.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Counts the leaves of the tree.
    ///
    /// Equal to `flatten(&[tree]).len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::nested;
    ///
    /// assert_eq!(nested![1, [2, [3, 4]], [[]]].leaf_count(), 4);
    /// ```
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Leaf(_) => count += 1,
                Self::List(children) => pending.extend(children),
            }
        }
        count
    }

    /// Returns the nesting depth.
    ///
    /// A leaf has depth 0; a list has depth one more than its deepest
    /// child, so an empty list has depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::nested;
    /// use lambars_lists::sequence::Nested;
    ///
    /// assert_eq!(Nested::Leaf(1).depth(), 0);
    /// assert_eq!(nested![1, 2].depth(), 1);
    /// assert_eq!(nested![1, [2, [3]]].depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];
        while let Some((node, level)) = pending.pop() {
            match node {
                Self::Leaf(_) => deepest = deepest.max(level),
                Self::List(children) => {
                    deepest = deepest.max(level + 1);
                    pending.extend(children.iter().map(|child| (child, level + 1)));
                }
            }
        }
        deepest
    }

    /// Applies a function to every leaf, keeping the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::nested;
    ///
    /// let doubled = nested![1, [2, [3]]].map(|x| x * 2);
    /// assert_eq!(doubled, nested![2, [4, [6]]]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> Nested<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map_with(&mut function)
    }

    fn map_with<B, F>(&self, function: &mut F) -> Nested<B>
    where
        F: FnMut(&T) -> B,
    {
        match self {
            Self::Leaf(element) => Nested::Leaf(function(element)),
            Self::List(children) => Nested::List(
                children
                    .iter()
                    .map(|child| child.map_with(function))
                    .collect(),
            ),
        }
    }

    /// Returns the leaves of this tree in depth-first order.
    ///
    /// Equivalent to `flatten(std::slice::from_ref(self))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_lists::nested;
    ///
    /// let words = nested![["a"], ["b", ["c"]]];
    /// assert_eq!(words.to_flat(), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn to_flat(&self) -> Vec<T>
    where
        T: Clone,
    {
        flatten(std::slice::from_ref(self))
    }
}

impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let Self::List(children) = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Self::List(grandchildren) = &mut node {
                pending.append(grandchildren);
            }
            // `node` now holds at most a leaf and drops without recursing
        }
    }
}

/// Flattens a sequence of nested values into a single flat sequence.
///
/// Leaves are emitted in left-to-right, depth-first order; empty nested
/// lists contribute nothing. The traversal keeps its own work stack, so the
/// nesting depth is not limited by the call stack.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::nested;
/// use lambars_lists::sequence::{Nested, flatten};
///
/// let tree = nested![[1], [2, [3]]];
/// let Nested::List(elements) = &tree else { unreachable!() };
/// assert_eq!(flatten(elements), vec![1, 2, 3]);
///
/// assert_eq!(flatten::<i32>(&[]), Vec::<i32>::new());
/// ```
#[must_use]
pub fn flatten<T: Clone>(elements: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    let mut pending = vec![elements.iter()];
    while let Some(cursor) = pending.last_mut() {
        match cursor.next() {
            Some(Nested::Leaf(element)) => result.push(element.clone()),
            Some(Nested::List(children)) => pending.push(children.iter()),
            None => {
                pending.pop();
            }
        }
    }
    result
}

/// Builds a [`Nested`] list from a bracketed literal.
///
/// Every item is either a bracketed sub-list or a single token tree used as
/// a leaf (a literal, an identifier, or a parenthesized expression). The
/// whole invocation is always a `Nested::List`.
///
/// # Examples
///
/// ```rust
/// use lambars_lists::nested;
/// use lambars_lists::sequence::Nested;
///
/// let tree = nested![1, [2, [3]]];
/// assert_eq!(
///     tree,
///     Nested::List(vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
///     ])
/// );
///
/// let negative = nested![(-1), [(2 * 3)]];
/// assert_eq!(negative.to_flat(), vec![-1, 6]);
///
/// let empty: Nested<i32> = nested![];
/// assert_eq!(empty, Nested::List(vec![]));
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt),*]) => {
        $crate::nested![$($inner),*]
    };
    (@item $leaf:tt) => {
        $crate::sequence::Nested::Leaf($leaf)
    };
    () => {
        $crate::sequence::Nested::List(::std::vec::Vec::new())
    };
    ($($item:tt),+ $(,)?) => {
        $crate::sequence::Nested::List(::std::vec![$($crate::nested!(@item $item)),+])
    };
}

static_assertions::assert_impl_all!(Nested<String>: Send, Sync, Clone);
