use std::fmt::Display;

use arbor_common::NodeAddress;
use serde::{Deserialize, Serialize};

/// One of the two child slots of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The slot holding values strictly less than the node's value
    Left,
    /// The slot holding values greater than or equal to the node's value
    Right,
}

impl Direction {
    /// The slot a value descends into when compared against `pivot`.
    /// Equal values route right.
    #[inline]
    pub fn of(value: u64, pivot: u64) -> Self {
        if value < pivot {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// A stored node record.
///
/// Child links are addresses into the same store; [`NodeAddress::EMPTY`] marks
/// a missing child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The value held by this node
    pub value: u64,
    /// Address of the left child, or [`NodeAddress::EMPTY`]
    pub left: NodeAddress,
    /// Address of the right child, or [`NodeAddress::EMPTY`]
    pub right: NodeAddress,
}

impl Node {
    /// The all-zero record read back for any address that holds nothing.
    pub const SENTINEL: Node = Node {
        value: 0,
        left: NodeAddress::EMPTY,
        right: NodeAddress::EMPTY,
    };

    /// A childless node holding `value`.
    pub fn leaf(value: u64) -> Self {
        Node {
            value,
            ..Node::SENTINEL
        }
    }

    /// True when both child links are empty.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The address stored in the given child slot.
    #[inline]
    pub fn child(&self, direction: Direction) -> NodeAddress {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Overwrite the given child slot.
    #[inline]
    pub fn set_child(&mut self, direction: Direction, address: NodeAddress) {
        match direction {
            Direction::Left => self.left = address,
            Direction::Right => self.right = address,
        }
    }

    /// The slot that links to `address`, if either does.
    pub fn slot_of(&self, address: &NodeAddress) -> Option<Direction> {
        if self.left == *address {
            Some(Direction::Left)
        } else if self.right == *address {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Swap the left and right links.
    pub fn mirror(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [L {}, R {}]", self.value, self.left, self.right)
    }
}
