// SPDX-License-Identifier: PMPL-1.0-or-later
//! FIFO worklist of element references for breadth-first traversal.

use scraper::ElementRef;
use std::collections::VecDeque;

/// A FIFO queue of element references.
///
/// Holds references into the document tree, never owning nodes. Created
/// fresh per detection call and discarded when the call returns. Popping
/// an empty queue yields `None`; there is no placeholder element.
#[derive(Debug, Default)]
pub struct TraversalQueue<'a> {
    elements: VecDeque<ElementRef<'a>>,
}

impl<'a> TraversalQueue<'a> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the back
    pub fn push(&mut self, element: ElementRef<'a>) {
        self.elements.push_back(element);
    }

    /// Remove and return the front element, or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<ElementRef<'a>> {
        self.elements.pop_front()
    }

    /// Whether any elements remain
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
