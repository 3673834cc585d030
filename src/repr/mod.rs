/*!
# Graph Representations

The storage backend of this crate is [`MixedMatrix`], a packed triangular adjacency matrix for
mixed graphs with arbitrary hashable vertex ids. Its building blocks are public so they can be
reused and tested on their own:

- [`TriangularIndex`] maps unordered index pairs to positions in the packed matrix and back,
- [`SlotState`] is the content of a single matrix cell,
- [`VertexIndex`] is the bidirectional map between vertex ids and dense internal indices.
*/

mod mixed_matrix;
mod slot;
mod triangular;
mod vertex_index;

pub use mixed_matrix::*;
pub use slot::*;
pub use triangular::*;
pub use vertex_index::*;
