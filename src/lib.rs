/*!
`mixmat` is a small graph library for **mixed** graphs, i.e. graphs that contain both undirected
edges and directed arcs, stored in a dense adjacency matrix.

# Representation

Vertices are identified by arbitrary ids implementing [`VertexId`] (anything `Clone + Eq + Hash +
Debug`, e.g. `u32`, `char` or `&str`). Internally each vertex receives a dense index of type
[`Node`] in order of insertion.

Connections are written as a simple tuple-struct `Edge(u, v)`:

- For an **undirected edge**, `Edge(u, v)` is equivalent to `Edge(v, u)`.
- For an **arc**, `Edge(tail, head)` points from `tail` to `head`.

Every pair of distinct vertices carries at most one connection, described from the point of view
of a caller by [`ConnectionType`]. Loops are not supported.

See the [`repr`] module for the storage backend [`MixedMatrix`](crate::repr::MixedMatrix), which
stores one byte per unordered vertex pair up to a fixed capacity chosen at construction.

# Usage

- [`prelude`] includes definitions for vertices, edges, all graph operation traits, the
  representation and the views,
- [`view`] includes read-only views such as [`ArcFilter`](crate::view::ArcFilter) that hides some
  arcs of a wrapped graph,
- [`gens`] includes random generators for mixed graphs,
- [`error`] includes the error type returned by all fallible operations.

In most use-cases, `use mixmat::prelude::*;` suffices for your needs.

# Logging

Graph construction and views emit [`tracing`](https://docs.rs/tracing) events at `debug` level,
vertex insertions at `trace` level. Install any subscriber to see them.
*/

pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod view;

pub use edge::*;
pub use node::*;
pub use repr::MixedMatrix;

/// `mixmat::prelude` includes definitions for vertices and edges, all graph operation traits,
/// the mixed matrix representation and the views.
pub mod prelude {
    pub use super::{
        edge::*,
        error::GraphError,
        node::*,
        ops::*,
        repr::MixedMatrix,
        view::*,
    };
}
