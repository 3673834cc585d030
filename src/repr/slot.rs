use crate::{edge::ConnectionType, node::Node};

/// State of one cell of the packed matrix, ie. of one canonical pair `lo < hi` of internal indices.
///
/// Arcs are stored relative to the internal index order of their endpoints: `Forward` is an arc
/// `lo -> hi`, `Reversed` is an arc `hi -> lo`. Readers must translate back into the orientation
/// they were asked about, see [`SlotState::relative_to`] and [`SlotState::oriented`].
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Undirected,
    Forward,
    Reversed,
}

impl SlotState {
    /// The state storing an arc `tail -> head` (given as internal indices)
    #[inline]
    pub fn arc(tail: Node, head: Node) -> Self {
        debug_assert_ne!(tail, head);
        if tail < head {
            SlotState::Forward
        } else {
            SlotState::Reversed
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == SlotState::Empty
    }

    #[inline]
    pub fn is_arc(self) -> bool {
        matches!(self, SlotState::Forward | SlotState::Reversed)
    }

    /// Translates the stored state into the connection between `from` and `to` as seen from
    /// `from` (both internal indices of the pair this slot belongs to, in any order)
    pub fn relative_to(self, from: Node, to: Node) -> ConnectionType {
        match self {
            SlotState::Empty => ConnectionType::Disconnected,
            SlotState::Undirected => ConnectionType::Undirected,
            arc if arc == SlotState::arc(from, to) => ConnectionType::Directed,
            _ => ConnectionType::Reversed,
        }
    }

    /// For an arc stored in the slot of the canonical pair `(lo, hi)`, returns `(tail, head)`.
    /// Returns `None` for all other states.
    pub fn oriented(self, lo: Node, hi: Node) -> Option<(Node, Node)> {
        debug_assert!(lo < hi);
        match self {
            SlotState::Forward => Some((lo, hi)),
            SlotState::Reversed => Some((hi, lo)),
            _ => None,
        }
    }
}
