//! Storage cell of a [`Chain`](super::Chain).

/// Owning edge to the next node, or `None` at the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single storage cell holding one value and an owning edge to its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Payload.
    pub(crate) value: T,

    /// Successor, exclusively owned by this node.
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node.
    pub(crate) const fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

/// Unlinks every node reachable from `link` whose value satisfies `matches`.
///
/// First collapses the matching run at `link` itself, then walks a cursor
/// that inspects its successor: a matching successor is spliced out and
/// dropped without advancing, otherwise the cursor moves on. The cursor
/// only ever refers to a node that is still chained.
///
/// Returns the number of nodes released.
pub(crate) fn splice_matching<T>(link: &mut Link<T>, mut matches: impl FnMut(&T) -> bool) -> usize {
    let mut removed = 0;

    while let Some(mut node) = link.take_if(|node| matches(&node.value)) {
        *link = node.next.take();
        removed += 1;
    }

    let mut cursor = link.as_deref_mut();
    while let Some(node) = cursor {
        if let Some(mut doomed) = node.next.take_if(|next| matches(&next.value)) {
            node.next = doomed.next.take();
            removed += 1;
            cursor = Some(node);
        } else {
            cursor = node.next.as_deref_mut();
        }
    }

    removed
}
