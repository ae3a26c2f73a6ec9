//! LIFO container returned by [`OrderProcessor::explode_dominant_group`](crate::processor::OrderProcessor::explode_dominant_group).

use crate::model::Order;

/// A stack of borrowed orders. The last pushed order is the top.
///
/// Iteration and indexing go from the top down, so position `0` is the most
/// recently pushed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStack<'a> {
    items: Vec<&'a Order>,
}

impl<'a> OrderStack<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, order: &'a Order) {
        self.items.push(order);
    }

    pub fn pop(&mut self) -> Option<&'a Order> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&'a Order> {
        self.items.last().copied()
    }

    /// Returns the order `depth` positions below the top.
    pub fn get(&self, depth: usize) -> Option<&'a Order> {
        self.items.iter().rev().nth(depth).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a Order> + '_ {
        self.items.iter().rev().copied()
    }

    /// Orders in push order, bottom first.
    pub fn as_pushed(&self) -> &[&'a Order] {
        &self.items
    }
}

impl<'a> FromIterator<&'a Order> for OrderStack<'a> {
    /// Pushes every order in iteration order.
    fn from_iter<I: IntoIterator<Item = &'a Order>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for OrderStack<'a> {
    type Item = &'a Order;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<&'a Order>>;

    /// Drains from the top of the stack to the bottom.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}
