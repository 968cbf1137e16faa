//! Collection envelopes: paginated [`Listing`]s and cursor-less [`FlatList`]s.

use crate::thing::Kind;

/// One page of a paginated collection.
///
/// `before` and `after` are opaque fullname tokens, not indices. `None` means
/// there is no page in that direction; an empty string is kept as
/// `Some("")` so the two stay distinguishable.
///
/// # Examples
///
/// ```
/// use redwire::Listing;
///
/// let page: Listing<u32> = Listing::new(vec![1, 2, 3]);
/// assert!(!page.has_next());
/// assert_eq!(page.iter().sum::<u32>(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    /// Fullname of the item preceding this page.
    pub before: Option<String>,
    /// Fullname of the item following this page.
    pub after: Option<String>,
    /// Number of children Reddit reports for this page.
    pub dist: Option<u64>,
    /// Anti-CSRF token sent along with some listings.
    pub modhash: Option<String>,
    /// The decoded children, in the order Reddit sent them.
    pub children: Vec<T>,
}

impl<T> Listing<T> {
    /// Creates a single page with no cursors.
    pub fn new(children: Vec<T>) -> Self {
        Self {
            before: None,
            after: None,
            dist: None,
            modhash: None,
            children,
        }
    }

    /// `true` if Reddit supplied an `after` cursor for a following page.
    pub fn has_next(&self) -> bool {
        self.after.is_some()
    }

    /// `true` if Reddit supplied a `before` cursor for a preceding page.
    pub fn has_previous(&self) -> bool {
        self.before.is_some()
    }

    /// Number of children on this page.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// `true` if the page has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }

    /// Transforms every child while keeping the cursors.
    pub fn map<U, F>(self, f: F) -> Listing<U>
    where
        F: FnMut(T) -> U,
    {
        Listing {
            before: self.before,
            after: self.after,
            dist: self.dist,
            modhash: self.modhash,
            children: self.children.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Listing<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// A non-paginated list of flat records, such as `UserList`, `KarmaList` or
/// `TrophyList`. It never carries cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatList<T> {
    kind: Kind,
    items: Vec<T>,
}

impl<T> FlatList<T> {
    /// Wraps already decoded items under the given envelope kind.
    pub fn new(kind: Kind, items: Vec<T>) -> Self {
        Self { kind, items }
    }

    /// The envelope kind this list was decoded from.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The items, in the order Reddit sent them.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> std::ops::Deref for FlatList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for FlatList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
