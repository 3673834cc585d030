/*!
# Vertex Representation

Vertices are identified by **external ids** chosen by the caller. Any type that is
`Clone + Eq + Hash + Debug` works as an id, see [`VertexId`].

Internally, every vertex is additionally assigned a dense **internal index** of type [`Node`]
the first time it is referenced. Internal indices are handed out in order of first appearance,
starting at `0`, and are never reassigned. They address the packed adjacency matrix and define
the canonical order of a vertex pair.

We choose `Node = u32` as graphs stored in a dense matrix never come close to `2^32` vertices.
*/

use std::{fmt::Debug, hash::Hash};

/// Internal index of a vertex: `0..capacity`
pub type Node = u32;

/// Number of vertices (or capacity) of a graph
pub type NumNodes = Node;

/// Trait alias for everything that can identify a vertex.
///
/// `Debug` is required so that errors can name the offending vertices.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}
