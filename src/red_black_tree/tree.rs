use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// A black node whose left link is also black has no red link to descend through.
fn is_two_node<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Black && !is_red(&node.left),
    }
}

pub fn len<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.len,
    }
}

pub fn height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    tree.as_ref().map(|node| {
        match (height(&node.left), height(&node.right)) {
            (None, None) => 0,
            (Some(h), None) | (None, Some(h)) => h + 1,
            (Some(l), Some(r)) => cmp::max(l, r) + 1,
        }
    })
}

// Gives the root a red link to borrow when both of its children are black.
pub fn redden_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => {
                    let Node { ref mut entry, .. } = &mut **node;
                    return Some(mem::replace(entry, new_node.entry));
                },
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = match node.left {
        Some(ref child) => child.color == Color::Red && is_red(&child.left),
        None => false,
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    node.update();

    ret
}

// precondition: the tree is not empty
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if is_two_node(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: the tree is not empty
pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if node.right.is_some() {
            if is_two_node(&node.right) {
                node.move_red_right();
            }

            let ret = remove_max(&mut node.right);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

// precondition: the key exists in the tree
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return None,
    };

    let ret = if key < node.entry.key.borrow() {
        if is_two_node(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key == node.entry.key.borrow() && node.right.is_none() {
            let Node { entry, left, .. } = *node;
            *tree = left;
            return Some(entry);
        }

        if is_two_node(&node.right) {
            node.move_red_right();
        }

        if key == node.entry.key.borrow() {
            let successor = remove_min(&mut node.right);
            let Node { entry, .. } = *successor;
            Some(mem::replace(&mut node.entry, entry))
        } else {
            remove(&mut node.right, key)
        }
    };

    node.balance();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn rank<T, U, V>(tree: &Tree<T, U>, key: &V) -> usize
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = 0;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret += len(&node.left) + 1;
                curr = &node.right;
            },
            Ordering::Equal => return ret + len(&node.left),
        }
    }
    ret
}

pub fn select<T, U>(tree: &Tree<T, U>, mut rank: usize) -> Option<&Entry<T, U>> {
    let mut curr = tree;
    while let Some(ref node) = curr {
        let left_len = len(&node.left);
        match rank.cmp(&left_len) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                rank -= left_len + 1;
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn is_bst<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    fn is_bst_within<'a, T, U>(tree: &'a Tree<T, U>, lo: Option<&'a T>, hi: Option<&'a T>) -> bool
    where
        T: Ord,
    {
        match tree {
            None => true,
            Some(ref node) => {
                let key = &node.entry.key;
                if lo.map_or(false, |lo| key <= lo) || hi.map_or(false, |hi| key >= hi) {
                    return false;
                }
                is_bst_within(&node.left, lo, Some(key)) && is_bst_within(&node.right, Some(key), hi)
            },
        }
    }

    is_bst_within(tree, None, None)
}

pub fn is_23<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            if is_red(&node.right) {
                return false;
            }
            if node.color == Color::Red && is_red(&node.left) {
                return false;
            }
            is_23(&node.left) && is_23(&node.right)
        },
    }
}

pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    fn check<T, U>(tree: &Tree<T, U>, blacks: usize) -> bool {
        match tree {
            None => blacks == 0,
            Some(ref node) => {
                let blacks = match node.color {
                    Color::Black if blacks == 0 => return false,
                    Color::Black => blacks - 1,
                    Color::Red => blacks,
                };
                check(&node.left, blacks) && check(&node.right, blacks)
            },
        }
    }

    let mut blacks = 0;
    let mut curr = tree;
    while let Some(ref node) = curr {
        if node.color == Color::Black {
            blacks += 1;
        }
        curr = &node.left;
    }
    check(tree, blacks)
}

pub fn is_size_consistent<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.len == 1 + len(&node.left) + len(&node.right)
                && is_size_consistent(&node.left)
                && is_size_consistent(&node.right)
        },
    }
}
