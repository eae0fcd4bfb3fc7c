use crate::entry::Entry;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::red_black_tree::{Error, Result};
use log::{debug, trace};
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree where every link is colored either red
/// or black. A left-leaning red black tree additionally requires that red links lean left and that
/// no two red links appear in a row, which makes it isomorphic to a 2-3 tree. Every path from the
/// root to an empty subtree crosses the same number of black links, so the height of the tree is
/// at most `2 * log2(n + 1)`. Each node also stores the size of its subtree, which allows
/// `rank` and `select` queries in logarithmic time.
///
/// # Examples
///
/// ```
/// use llrb_tree::red_black_tree::{Error, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Ok(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
/// assert_eq!(map.rank(&3), 1);
/// assert_eq!(map.select(2), Err(Error::InvalidRank { rank: 2, len: 2 }));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let RedBlackMap { ref mut tree } = self;
        let ret = tree::insert(tree, Node::new(key, value));
        tree::blacken_root(tree);
        if ret.is_some() {
            trace!("replaced an existing entry");
        }
        ret.map(Entry::into_pair)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            trace!("remove of a missing key is a no-op");
            return None;
        }

        let RedBlackMap { ref mut tree } = self;
        tree::redden_root(tree);
        let ret = tree::remove(tree, key);
        tree::blacken_root(tree);
        ret.map(Entry::into_pair)
    }

    /// Removes the key-value pair with the minimum key from the map. Returns `Error::Underflow` if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.remove_min(), Err(Error::Underflow));
    ///
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.min(), Ok(&3));
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            debug!("remove_min called on an empty map");
            return Err(Error::Underflow);
        }

        let RedBlackMap { ref mut tree } = self;
        tree::redden_root(tree);
        let node = tree::remove_min(tree);
        tree::blacken_root(tree);
        let Node { entry, .. } = *node;
        Ok(entry.into_pair())
    }

    /// Removes the key-value pair with the maximum key from the map. Returns `Error::Underflow` if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.remove_max(), Err(Error::Underflow));
    ///
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Ok((3, 3)));
    /// assert_eq!(map.max(), Ok(&1));
    /// ```
    pub fn remove_max(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            debug!("remove_max called on an empty map");
            return Err(Error::Underflow);
        }

        let RedBlackMap { ref mut tree } = self;
        tree::redden_root(tree);
        let node = tree::remove_max(tree);
        tree::blacken_root(tree);
        let Node { entry, .. } = *node;
        Ok(entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the height of the tree, the number of links on the longest path from the root to a
    /// node. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.height(), None);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), Some(0));
    /// map.insert(2, 2);
    /// assert_eq!(map.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len());
        self.tree = None;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `Error::Underflow` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.tree).map(|entry| &entry.key).ok_or_else(|| {
            debug!("min called on an empty map");
            Error::Underflow
        })
    }

    /// Returns the maximum key of the map. Returns `Error::Underflow` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.tree).map(|entry| &entry.key).ok_or_else(|| {
            debug!("max called on an empty map");
            Error::Underflow
        })
    }

    /// Returns the number of keys in the map that are strictly less than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.rank(&0), 0);
    /// assert_eq!(map.rank(&3), 1);
    /// assert_eq!(map.rank(&4), 2);
    /// ```
    pub fn rank<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::rank(&self.tree, key)
    }

    /// Returns the key with a particular 0-based rank. Returns `Error::InvalidRank` if the rank is
    /// not less than the length of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.select(1), Ok(&3));
    /// assert_eq!(map.select(2), Err(Error::InvalidRank { rank: 2, len: 2 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<&T> {
        let len = self.len();
        tree::select(&self.tree, rank)
            .map(|entry| &entry.key)
            .ok_or_else(|| {
                debug!("select called with rank {} on a map of length {}", rank, len);
                Error::InvalidRank { rank, len }
            })
    }

    /// Returns `true` if the keys of the tree are in symmetric order.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        tree::is_bst(&self.tree)
    }

    /// Returns `true` if the tree has no red right links and no two red links in a row.
    pub fn is_23(&self) -> bool {
        tree::is_23(&self.tree)
    }

    /// Returns `true` if every path from the root to an empty subtree has the same number of black
    /// links.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns `true` if every subtree size is one more than the sum of its children's sizes.
    pub fn is_size_consistent(&self) -> bool {
        tree::is_size_consistent(&self.tree)
    }

    /// Returns `true` if all structural invariants of the tree hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert!(map.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        self.is_bst() && self.is_23() && self.is_balanced() && self.is_size_consistent()
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> RedBlackMapIterMut<'_, T, U> {
        RedBlackMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order. Every call starts a new
    /// traversal from the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 1);
    /// map.insert(1, 2);
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> RedBlackMapKeys<'_, T, U> {
        RedBlackMapKeys {
            map_iter: self.iter(),
        }
    }

    /// Returns an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 1);
    /// map.insert(1, 2);
    /// assert_eq!(map.values().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn values(&self) -> RedBlackMapValues<'_, T, U> {
        RedBlackMapValues {
            map_iter: self.iter(),
        }
    }

    /// Returns an iterator over the keys of the map in level order: the root first, then every
    /// node of depth one from left to right, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.level_order().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn level_order(&self) -> RedBlackMapLevelOrder<'_, T, U> {
        let mut queue = VecDeque::new();
        if let Some(ref node) = self.tree {
            queue.push_back(&**node);
        }
        RedBlackMapLevelOrder { queue }
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = Option<(&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>)>;
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let RedBlackMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while current.is_some() {
            stack.push(current.take().map(|node| {
                *current = node.left.as_mut().map(|node| &mut **node);
                (&mut node.entry, node.right.as_mut().map(|node| &mut **node))
            }));
        }
        stack.pop().and_then(|pair_opt| {
            match pair_opt {
                Some(pair) => {
                    let (entry, right) = pair;
                    let Entry {
                        ref key,
                        ref mut value,
                    } = entry;
                    *current = right;
                    Some((key, value))
                },
                None => None,
            }
        })
    }
}

/// An iterator over the keys of a `RedBlackMap<T, U>` in ascending order.
pub struct RedBlackMapKeys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    map_iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for RedBlackMapKeys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator over the values of a `RedBlackMap<T, U>` ordered by key.
pub struct RedBlackMapValues<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    map_iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for RedBlackMapValues<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.1)
    }
}

/// A breadth-first iterator over the keys of a `RedBlackMap<T, U>`.
pub struct RedBlackMapLevelOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    queue: VecDeque<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapLevelOrder<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            if let Some(ref left) = node.left {
                self.queue.push_back(&**left);
            }
            if let Some(ref right) = node.right {
                self.queue.push_back(&**right);
            }
            &node.entry.key
        })
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::red_black_tree::Error;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), None);
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), Err(Error::Underflow));
        assert_eq!(map.max(), Err(Error::Underflow));
    }

    #[test]
    fn test_remove_min_max_empty() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.remove_min(), Err(Error::Underflow));
        assert_eq!(map.remove_max(), Err(Error::Underflow));
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
        assert!(map.is_valid());
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 2);
        assert!(map.is_valid());
    }

    #[test]
    fn test_remove_min_max() {
        let mut map = RedBlackMap::new();
        for key in &[5, 2, 8, 1, 9, 3] {
            map.insert(*key, *key);
        }

        assert_eq!(map.remove_min(), Ok((1, 1)));
        assert!(map.is_valid());
        assert_eq!(map.remove_max(), Ok((9, 9)));
        assert!(map.is_valid());
        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&2, &3, &5, &8]);
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Ok(&1));
        assert_eq!(map.max(), Ok(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_borrowed_key() {
        let mut map = RedBlackMap::new();
        map.insert(String::from("b"), 2);
        map.insert(String::from("a"), 1);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.rank("b"), 1);
        assert_eq!(map.remove("a"), Some((String::from("a"), 1)));
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_rank_select() {
        let mut map = RedBlackMap::new();
        for key in &[40, 10, 30, 20] {
            map.insert(*key, ());
        }

        assert_eq!(map.rank(&5), 0);
        assert_eq!(map.rank(&20), 1);
        assert_eq!(map.rank(&25), 2);
        assert_eq!(map.rank(&50), 4);

        assert_eq!(map.select(0), Ok(&10));
        assert_eq!(map.select(3), Ok(&40));
        assert_eq!(map.select(4), Err(Error::InvalidRank { rank: 4, len: 4 }));
    }

    #[test]
    fn test_level_order() {
        let mut map = RedBlackMap::new();
        for key in &[10, 20, 30, 40, 50, 60, 70] {
            map.insert(*key, ());
        }

        assert_eq!(
            map.level_order().collect::<Vec<&u32>>(),
            vec![&40, &20, &60, &10, &30, &50, &70],
        );
    }

    #[test]
    fn test_keys_restart() {
        let mut map = RedBlackMap::new();
        map.insert(2, ());
        map.insert(1, ());

        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    }

    #[test]
    fn test_clear() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.min(), Err(Error::Underflow));
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }
}
