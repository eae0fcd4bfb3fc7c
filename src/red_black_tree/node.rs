use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub len: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1 + tree::len(left) + tree::len(right);
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // precondition: the right child exists
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.left = Some(child);
        self.update();
    }

    // precondition: the left child exists
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.right = Some(child);
        self.update();
    }

    pub fn balance(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }

        let should_rotate = match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        };
        if should_rotate {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }

        self.update();
    }

    // Makes the left child or one of its children red when both are black.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        let should_borrow = match self.right {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if should_borrow {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    // Makes the right child or one of its children red when both are black.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        let should_borrow = match self.left {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if should_borrow {
            self.rotate_right();
            self.flip_colors();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Node};

    type TestNode = Node<u32, ()>;

    fn black(key: u32, left: Option<TestNode>, right: Option<TestNode>) -> TestNode {
        let mut node = Node::new(key, ());
        node.color = Color::Black;
        node.left = left.map(Box::new);
        node.right = right.map(Box::new);
        node.update();
        node
    }

    fn red(key: u32, left: Option<TestNode>, right: Option<TestNode>) -> TestNode {
        let mut node = black(key, left, right);
        node.color = Color::Red;
        node
    }

    fn key_of(tree: &Option<Box<TestNode>>) -> Option<u32> {
        tree.as_ref().map(|node| node.entry.key)
    }

    #[test]
    fn test_color_flip() {
        assert_eq!(Color::Red.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::Red);
    }

    #[test]
    fn test_update() {
        let node = black(
            2,
            Some(black(1, None, None)),
            Some(black(3, None, Some(red(4, None, None)))),
        );
        assert_eq!(node.len, 4);
    }

    #[test]
    fn test_rotate_left() {
        let mut node = black(
            2,
            Some(black(1, None, None)),
            Some(red(4, Some(black(3, None, None)), Some(black(5, None, None)))),
        );
        node.rotate_left();

        assert_eq!(node.entry.key, 4);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.len, 5);
        assert_eq!(key_of(&node.right), Some(5));

        let left = node.left.as_ref().unwrap();
        assert_eq!(left.entry.key, 2);
        assert_eq!(left.color, Color::Red);
        assert_eq!(left.len, 3);
        assert_eq!(key_of(&left.left), Some(1));
        assert_eq!(key_of(&left.right), Some(3));
    }

    #[test]
    fn test_rotate_right() {
        let mut node = black(
            4,
            Some(red(2, Some(black(1, None, None)), Some(black(3, None, None)))),
            Some(black(5, None, None)),
        );
        node.rotate_right();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.len, 5);
        assert_eq!(key_of(&node.left), Some(1));

        let right = node.right.as_ref().unwrap();
        assert_eq!(right.entry.key, 4);
        assert_eq!(right.color, Color::Red);
        assert_eq!(right.len, 3);
        assert_eq!(key_of(&right.left), Some(3));
        assert_eq!(key_of(&right.right), Some(5));
    }

    #[test]
    fn test_flip_colors() {
        let mut node = black(2, Some(red(1, None, None)), Some(red(3, None, None)));
        node.flip_colors();

        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_balance_right_leaning() {
        let mut node = black(1, None, Some(red(2, None, None)));
        node.balance();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert!(node.right.is_none());
    }

    #[test]
    fn test_balance_two_reds_in_a_row() {
        let mut node = black(3, Some(red(2, Some(red(1, None, None)), None)), None);
        node.balance();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.len, 3);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_move_red_left_borrows_from_sibling() {
        let mut node = red(
            2,
            Some(black(1, None, None)),
            Some(black(4, Some(red(3, None, None)), None)),
        );
        node.move_red_left();

        assert_eq!(node.entry.key, 3);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.len, 4);

        let left = node.left.as_ref().unwrap();
        assert_eq!(left.entry.key, 2);
        assert_eq!(left.color, Color::Black);
        assert_eq!(left.left.as_ref().unwrap().color, Color::Red);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_move_red_left_merges() {
        let mut node = red(2, Some(black(1, None, None)), Some(black(3, None, None)));
        node.move_red_left();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Red);
    }

    #[test]
    fn test_move_red_right_borrows_from_sibling() {
        let mut node = red(
            3,
            Some(black(2, Some(red(1, None, None)), None)),
            Some(black(4, None, None)),
        );
        node.move_red_right();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.len, 4);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);

        let right = node.right.as_ref().unwrap();
        assert_eq!(right.entry.key, 3);
        assert_eq!(right.color, Color::Black);
        assert_eq!(right.right.as_ref().unwrap().color, Color::Red);
    }
}
