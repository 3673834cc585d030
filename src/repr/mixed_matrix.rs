/*!
# Mixed Matrix

[`MixedMatrix`] stores a mixed graph with a fixed maximum number of vertices (its *capacity*)
in a packed upper-triangular adjacency matrix: one [`SlotState`] per unordered pair of internal
indices, `capacity * (capacity - 1) / 2` bytes in total.

- Vertices are created explicitly via [`GraphVertexEditing::add_vertex`] or implicitly by the
  first edge/arc that touches them and receive internal indices in order of appearance.
- Every pair of distinct vertices carries at most one connection: nothing, an undirected edge
  or an arc in one of both directions. Loops are rejected.
- All queries on a pair are O(1) (expected, due to hashing the vertex ids).
- Vertices cannot be removed.

Every operation checks all its preconditions before touching the graph, so a failed call
leaves the graph unchanged.
*/

use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use super::{slot::SlotState, triangular::TriangularIndex, vertex_index::VertexIndex};
use crate::{
    error::{raise_error_unless, GraphError, Result},
    ops::*,
    *,
};

/// Name used when reporting unsupported operations
const REPR: &str = "MixedMatrix";

/// Mixed graph stored in a packed triangular adjacency matrix.
///
/// # Example
/// ```
/// use mixmat::prelude::*;
///
/// let mut graph = MixedMatrix::new(3)?;
/// graph.add_edge("a", "b")?;
/// graph.add_arc("c", "a")?;
///
/// assert!(graph.has_edge(&"b", &"a")?);
/// assert!(graph.has_arc(&"c", &"a")?);
/// assert!(!graph.has_arc(&"a", &"c")?);
/// assert_eq!(graph.connection_type(&"a", &"c")?, ConnectionType::Reversed);
/// assert_eq!(graph.number_of_connections(), 2);
///
/// // the graph is full
/// assert!(graph.add_vertex("d").is_err());
/// # Ok::<(), mixmat::error::GraphError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MixedMatrix<V: VertexId = Node> {
    slots: Vec<SlotState>,
    layout: TriangularIndex,
    index: VertexIndex<V>,
    num_edges: NumEdges,
    num_arcs: NumEdges,
}

/// A pair of vertices resolved to internal indices, in the order they were passed in
#[derive(Debug, Copy, Clone)]
struct Located {
    slot: usize,
    first: Node,
    second: Node,
}

impl<V: VertexId> fmt::Debug for MixedMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(REPR)
            .field("capacity", &self.capacity())
            .field("order", &self.number_of_vertices())
            .field("edges", &self.num_edges)
            .field("arcs", &self.num_arcs)
            .finish()
    }
}

impl<V: VertexId> MixedMatrix<V> {
    /// Creates an empty graph that can hold up to `capacity` vertices.
    /// Fails if `capacity == 0` or the matrix cannot be allocated.
    pub fn new(capacity: NumNodes) -> Result<Self> {
        const OP: &str = "new";

        raise_error_unless!(
            capacity > 0,
            GraphError::InvalidArgument {
                op: OP,
                reason: "capacity must be positive".into(),
            }
        );

        let layout = TriangularIndex::new(capacity).ok_or_else(|| GraphError::InvalidArgument {
            op: OP,
            reason: format!("capacity {capacity} cannot be addressed"),
        })?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(layout.len())
            .map_err(|_| GraphError::InvalidArgument {
                op: OP,
                reason: format!("cannot allocate {} slots", layout.len()),
            })?;
        slots.resize(layout.len(), SlotState::Empty);

        debug!(capacity, slots = layout.len(), "allocated mixed matrix");

        Ok(Self {
            slots,
            layout,
            index: VertexIndex::with_capacity(capacity),
            num_edges: 0,
            num_arcs: 0,
        })
    }

    /// Creates a graph with the given capacity and adds all edges, then all arcs.
    /// Fails with the first error encountered.
    pub fn from_connections<E, A>(
        capacity: NumNodes,
        edges: impl IntoIterator<Item = E>,
        arcs: impl IntoIterator<Item = A>,
    ) -> Result<Self>
    where
        E: Into<Edge<V>>,
        A: Into<Edge<V>>,
    {
        let mut graph = Self::new(capacity)?;
        graph.add_edges(edges)?;
        graph.add_arcs(arcs)?;
        Ok(graph)
    }

    /// Maximum number of vertices the graph can hold
    pub fn capacity(&self) -> NumNodes {
        self.layout.dimension()
    }

    /// Number of vertices that can still be created
    pub fn remaining_capacity(&self) -> NumNodes {
        self.capacity() - self.index.len()
    }

    /// Number of cells of the packed matrix, ie. `capacity * (capacity - 1) / 2`
    pub fn number_of_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the internal index assigned to `u`
    pub fn index_of(&self, u: &V) -> Option<Node> {
        self.index.index_of(u)
    }

    /// Returns the vertex with internal index `index`
    pub fn vertex_at(&self, index: Node) -> Option<&V> {
        self.index.get_id(index)
    }

    fn id(&self, u: Node) -> V {
        self.index.id_of(u).clone()
    }

    fn ensure_capacity(&self, op: &'static str, requested: NumNodes) -> Result<()> {
        raise_error_unless!(
            self.remaining_capacity() >= requested,
            GraphError::CapacityExceeded {
                op,
                capacity: self.capacity(),
                order: self.index.len(),
                requested,
            }
        );
        Ok(())
    }

    fn insert_vertex(&mut self, u: V) -> Node {
        let index = self.index.insert(u);
        trace!(index, vertex = ?self.index.id_of(index), "vertex mapped");
        index
    }

    /// Resolves the pair `(u, v)` without creating vertices
    fn locate(&self, op: &'static str, u: &V, v: &V) -> Result<Located> {
        raise_error_unless!(u != v, GraphError::equal_vertices(op, u));

        let first = self
            .index
            .index_of(u)
            .ok_or_else(|| GraphError::missing_vertex(op, u))?;
        let second = self
            .index
            .index_of(v)
            .ok_or_else(|| GraphError::missing_vertex(op, v))?;

        Ok(Located {
            slot: self.layout.slot_of_unordered(first, second),
            first,
            second,
        })
    }

    /// Resolves the pair `(u, v)`, creating missing vertices (`u` before `v`).
    /// Capacity is checked for both vertices before any of them is created.
    fn locate_or_insert(&mut self, op: &'static str, u: V, v: V) -> Result<Located> {
        raise_error_unless!(u != v, GraphError::equal_vertices(op, &u));

        let first = self.index.index_of(&u);
        let second = self.index.index_of(&v);
        self.ensure_capacity(
            op,
            first.is_none() as NumNodes + second.is_none() as NumNodes,
        )?;

        let first = first.unwrap_or_else(|| self.insert_vertex(u));
        let second = second.unwrap_or_else(|| self.insert_vertex(v));

        Ok(Located {
            slot: self.layout.slot_of_unordered(first, second),
            first,
            second,
        })
    }

    fn duplicate(&self, op: &'static str, at: Located) -> GraphError {
        GraphError::DuplicateConnection {
            op,
            first: format!("{:?}", self.index.id_of(at.first)),
            second: format!("{:?}", self.index.id_of(at.second)),
            existing: self.slots[at.slot].relative_to(at.first, at.second),
            slot: at.slot,
        }
    }

    fn missing_connection(&self, op: &'static str, what: &str, at: Located) -> GraphError {
        GraphError::NotFound {
            op,
            what: format!(
                "{what} ({:?}, {:?}) [slot {} holds {}]",
                self.index.id_of(at.first),
                self.index.id_of(at.second),
                at.slot,
                self.slots[at.slot].relative_to(at.first, at.second)
            ),
        }
    }

    /// Iterates over all non-empty slots as `(lo, hi, state)` in canonical order
    fn occupied(&self) -> impl Iterator<Item = (Node, Node, SlotState)> + '_ {
        let order = self.index.len();
        (0..order)
            .flat_map(move |lo| {
                let row = self.layout.row(lo, order);
                ((lo + 1)..order)
                    .zip(self.slots[row].iter().copied())
                    .map(move |(hi, state)| (lo, hi, state))
            })
            .filter(|&(_, _, state)| !state.is_empty())
    }

    /// Returns all vertices `w` for which the connection `(u, w)` seen from `u` is `wanted`
    fn adjacent(&self, op: &'static str, u: &V, wanted: ConnectionType) -> Result<Vec<V>> {
        let from = self
            .index
            .index_of(u)
            .ok_or_else(|| GraphError::missing_vertex(op, u))?;

        Ok((0..self.index.len())
            .filter(|&to| {
                to != from
                    && self.slots[self.layout.slot_of_unordered(from, to)].relative_to(from, to)
                        == wanted
            })
            .map(|to| self.id(to))
            .collect_vec())
    }
}

impl<V: VertexId> GraphVertexOrder for MixedMatrix<V> {
    type Vertex = V;

    fn number_of_vertices(&self) -> NumNodes {
        self.index.len()
    }

    fn has_vertex(&self, u: &V) -> bool {
        self.index.contains(u)
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.index.ids().cloned()
    }
}

impl<V: VertexId> GraphVertexEditing for MixedMatrix<V> {
    fn add_vertex(&mut self, u: V) -> Result<()> {
        const OP: &str = "add_vertex";

        raise_error_unless!(
            !self.index.contains(&u),
            GraphError::AlreadyExists {
                op: OP,
                vertex: format!("{u:?}"),
            }
        );
        self.ensure_capacity(OP, 1)?;

        self.insert_vertex(u);
        Ok(())
    }
}

impl<V: VertexId> GraphVertexRemoval for MixedMatrix<V> {
    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        debug!(vertex = ?u, "vertex removal requested");
        Err(GraphError::Unimplemented {
            op: "remove_vertex",
            repr: REPR,
        })
    }
}

impl<V: VertexId> UndirectedReader for MixedMatrix<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn has_edge(&self, u: &V, v: &V) -> Result<bool> {
        if u == v {
            return Ok(false);
        }

        let at = self.locate("has_edge", u, v)?;
        Ok(self.slots[at.slot] == SlotState::Undirected)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.occupied()
            .filter(|&(_, _, state)| state == SlotState::Undirected)
            .map(|(lo, hi, _)| Edge(self.id(lo), self.id(hi)))
    }

    fn neighbors_of(&self, u: &V) -> Result<Vec<V>> {
        self.adjacent("neighbors_of", u, ConnectionType::Undirected)
    }
}

impl<V: VertexId> GraphEdgeEditing for MixedMatrix<V> {
    fn add_edge(&mut self, u: V, v: V) -> Result<()> {
        const OP: &str = "add_edge";

        let at = self.locate_or_insert(OP, u, v)?;
        raise_error_unless!(self.slots[at.slot].is_empty(), self.duplicate(OP, at));

        self.slots[at.slot] = SlotState::Undirected;
        self.num_edges += 1;
        trace!(slot = at.slot, "edge stored");
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
        const OP: &str = "remove_edge";

        let at = self.locate(OP, u, v)?;
        raise_error_unless!(
            self.slots[at.slot] == SlotState::Undirected,
            self.missing_connection(OP, "edge", at)
        );

        self.slots[at.slot] = SlotState::Empty;
        self.num_edges -= 1;
        trace!(slot = at.slot, "edge cleared");
        Ok(())
    }
}

impl<V: VertexId> DirectedReader for MixedMatrix<V> {
    fn number_of_arcs(&self) -> NumEdges {
        self.num_arcs
    }

    fn has_arc(&self, tail: &V, head: &V) -> Result<bool> {
        if tail == head {
            return Ok(false);
        }

        let at = self.locate("has_arc", tail, head)?;
        Ok(self.slots[at.slot] == SlotState::arc(at.first, at.second))
    }

    fn arcs(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.occupied()
            .filter_map(|(lo, hi, state)| state.oriented(lo, hi))
            .map(|(tail, head)| Edge(self.id(tail), self.id(head)))
    }

    fn successors_of(&self, u: &V) -> Result<Vec<V>> {
        self.adjacent("successors_of", u, ConnectionType::Directed)
    }

    fn predecessors_of(&self, u: &V) -> Result<Vec<V>> {
        self.adjacent("predecessors_of", u, ConnectionType::Reversed)
    }
}

impl<V: VertexId> GraphArcEditing for MixedMatrix<V> {
    fn add_arc(&mut self, tail: V, head: V) -> Result<()> {
        const OP: &str = "add_arc";

        let at = self.locate_or_insert(OP, tail, head)?;
        raise_error_unless!(self.slots[at.slot].is_empty(), self.duplicate(OP, at));

        self.slots[at.slot] = SlotState::arc(at.first, at.second);
        self.num_arcs += 1;
        trace!(slot = at.slot, state = ?self.slots[at.slot], "arc stored");
        Ok(())
    }

    fn remove_arc(&mut self, tail: &V, head: &V) -> Result<()> {
        const OP: &str = "remove_arc";

        let at = self.locate(OP, tail, head)?;
        raise_error_unless!(
            self.slots[at.slot] == SlotState::arc(at.first, at.second),
            self.missing_connection(OP, "arc", at)
        );

        self.slots[at.slot] = SlotState::Empty;
        self.num_arcs -= 1;
        trace!(slot = at.slot, "arc cleared");
        Ok(())
    }
}

impl<V: VertexId> MixedReader for MixedMatrix<V> {
    fn connection_type(&self, u: &V, v: &V) -> Result<ConnectionType> {
        let at = self.locate("connection_type", u, v)?;
        Ok(self.slots[at.slot].relative_to(at.first, at.second))
    }

    fn connections(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.occupied()
            .map(|(lo, hi, _)| Edge(self.id(lo), self.id(hi)))
    }

    fn typed_connections(&self) -> impl Iterator<Item = TypedEdge<V>> + '_ {
        self.occupied()
            .map(|(lo, hi, state)| match state.oriented(lo, hi) {
                Some((tail, head)) => TypedEdge::arc(self.id(tail), self.id(head)),
                None => TypedEdge::undirected(self.id(lo), self.id(hi)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, testing::assert_consistent_mixed};
    use fxhash::FxHashMap;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn abcd() -> MixedMatrix<&'static str> {
        let mut graph = MixedMatrix::new(4).unwrap();
        graph.add_vertices(["A", "B", "C", "D"]).unwrap();
        graph
    }

    fn occupied_slots<V: VertexId>(graph: &MixedMatrix<V>) -> usize {
        graph.slots.iter().filter(|s| !s.is_empty()).count()
    }

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = MixedMatrix::<Node>::new(n).unwrap();

            assert_eq!(graph.number_of_vertices(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_arcs(), 0);
            assert_eq!(graph.number_of_connections(), 0);
            assert_eq!(graph.capacity(), n);
            assert_eq!(graph.number_of_slots(), (n * (n - 1) / 2) as usize);
            assert!(graph.is_empty());
            assert_eq!(graph.vertices().count(), 0);
            assert_eq!(graph.connections().count(), 0);
        }

        let err = MixedMatrix::<Node>::new(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn vertex_editing() {
        let mut graph = MixedMatrix::new(2).unwrap();
        graph.add_vertex("x").unwrap();

        let err = graph.add_vertex("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);

        graph.add_vertex("y").unwrap();
        let err = graph.add_vertex("z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);

        assert_eq!(graph.number_of_vertices(), 2);
        assert!(graph.has_vertex(&"y"));
        assert!(!graph.has_vertex(&"z"));
        assert_eq!(graph.vertices().collect_vec(), vec!["x", "y"]);
        assert_eq!(graph.remaining_capacity(), 0);
    }

    #[test]
    fn vertex_removal_is_unsupported() {
        let mut graph = abcd();
        let err = graph.remove_vertex(&"A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unimplemented);
        assert!(graph.has_vertex(&"A"));
    }

    #[test]
    fn edges_are_symmetric() {
        let mut graph = abcd();
        graph.add_edge("B", "D").unwrap();

        assert!(graph.has_edge(&"B", &"D").unwrap());
        assert!(graph.has_edge(&"D", &"B").unwrap());
        assert!(!graph.has_arc(&"B", &"D").unwrap());
        assert!(!graph.has_arc(&"D", &"B").unwrap());
        assert!(!graph.has_edge(&"B", &"B").unwrap());

        for (u, v) in [("B", "D"), ("D", "B")] {
            assert_eq!(
                graph.connection_type(&u, &v).unwrap(),
                ConnectionType::Undirected
            );
        }

        assert_eq!(graph.edges().collect_vec(), vec![Edge("B", "D")]);
        assert_eq!(graph.neighbors_of(&"D").unwrap(), vec!["B"]);
        assert_eq!(graph.degree_of(&"A").unwrap(), 0);
        assert_eq!(graph.arcs().count(), 0);
        assert_consistent_mixed(&graph);
    }

    #[test]
    fn reversed_arc_scenario() {
        let mut graph = abcd();
        assert_eq!(
            ["A", "B", "C", "D"].map(|u| graph.index_of(&u)),
            [Some(0), Some(1), Some(2), Some(3)]
        );

        graph.add_arc("C", "A").unwrap();
        assert_eq!(
            graph.slots[graph.layout.slot_of(0, 2)],
            SlotState::Reversed
        );

        assert!(graph.has_arc(&"C", &"A").unwrap());
        assert!(!graph.has_arc(&"A", &"C").unwrap());
        assert!(!graph.has_edge(&"A", &"C").unwrap());
        assert_eq!(
            graph.connection_type(&"C", &"A").unwrap(),
            ConnectionType::Directed
        );
        assert_eq!(
            graph.connection_type(&"A", &"C").unwrap(),
            ConnectionType::Reversed
        );

        assert_eq!(graph.arcs().collect_vec(), vec![Edge("C", "A")]);
        assert_eq!(
            graph.typed_connections().collect_vec(),
            vec![TypedEdge::arc("C", "A")]
        );
        assert_eq!(graph.connections().collect_vec(), vec![Edge("A", "C")]);

        assert_eq!(graph.successors_of(&"C").unwrap(), vec!["A"]);
        assert_eq!(graph.predecessors_of(&"A").unwrap(), vec!["C"]);
        assert!(graph.successors_of(&"A").unwrap().is_empty());
        assert_eq!(graph.sources(), vec!["B", "C", "D"]);
        assert_eq!(graph.sinks(), vec!["A", "B", "D"]);

        let err = graph.remove_arc(&"A", &"C").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        graph.remove_arc(&"C", &"A").unwrap();
        assert_eq!(graph.number_of_arcs(), 0);
    }

    #[test]
    fn forward_arc() {
        let mut graph = abcd();
        graph.add_arc("A", "D").unwrap();

        assert_eq!(graph.slots[graph.layout.slot_of(0, 3)], SlotState::Forward);
        assert!(graph.has_arc(&"A", &"D").unwrap());
        assert!(!graph.has_arc(&"D", &"A").unwrap());
        assert_eq!(
            graph.connection_type(&"D", &"A").unwrap(),
            ConnectionType::Reversed
        );
        assert_eq!(graph.arcs().collect_vec(), vec![Edge("A", "D")]);
    }

    #[test]
    fn implicit_vertices() {
        let mut graph = MixedMatrix::new(3).unwrap();
        graph.add_arc(7u32, 3).unwrap();
        assert_eq!(graph.index_of(&7), Some(0));
        assert_eq!(graph.index_of(&3), Some(1));

        // would need two new vertices but only one is left
        let before = graph.clone();
        let err = graph.add_edge(1, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(graph, before);

        graph.add_edge(3, 1).unwrap();
        assert_eq!(graph.vertex_at(2), Some(&1));
        assert_eq!(graph.remaining_capacity(), 0);

        let err = graph.add_arc(1, 9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(graph.number_of_vertices(), 3);
    }

    #[test]
    fn loops_are_rejected() {
        let mut graph = abcd();
        let before = graph.clone();

        assert_eq!(
            graph.add_edge("A", "A").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            graph.add_arc("E", "E").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            graph.connection_type(&"B", &"B").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(!graph.has_arc(&"B", &"B").unwrap());
        assert_eq!(graph, before);
    }

    #[test]
    fn unknown_vertices() {
        let mut graph = abcd();
        graph.add_edge("A", "B").unwrap();
        let before = graph.clone();

        for err in [
            graph.has_edge(&"A", &"X").unwrap_err(),
            graph.has_arc(&"X", &"A").unwrap_err(),
            graph.connection_type(&"X", &"Y").unwrap_err(),
            graph.successors_of(&"X").unwrap_err(),
            graph.remove_edge(&"A", &"X").unwrap_err(),
            graph.remove_arc(&"X", &"A").unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }

        assert_eq!(graph, before);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut graph = abcd();
        graph.add_edge("A", "B").unwrap();
        graph.add_arc("C", "B").unwrap();
        let before = graph.clone();

        for err in [
            graph.add_edge("A", "B").unwrap_err(),
            graph.add_edge("B", "A").unwrap_err(),
            graph.add_arc("A", "B").unwrap_err(),
            graph.add_edge("B", "C").unwrap_err(),
            graph.add_arc("C", "B").unwrap_err(),
            graph.add_arc("B", "C").unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::DuplicateConnection);
        }

        match graph.add_edge("B", "C").unwrap_err() {
            GraphError::DuplicateConnection { existing, .. } => {
                assert_eq!(existing, ConnectionType::Reversed)
            }
            err => panic!("unexpected error {err}"),
        }

        assert_eq!(graph, before);
    }

    #[test]
    fn removal_round_trip() {
        let mut graph = abcd();
        graph.add_edge("A", "C").unwrap();
        let before = graph.clone();

        graph.add_edge("B", "D").unwrap();
        graph.remove_edge(&"D", &"B").unwrap();
        assert_eq!(graph, before);

        graph.add_arc("D", "B").unwrap();
        assert_eq!(
            graph.remove_edge(&"D", &"B").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        graph.remove_arc(&"D", &"B").unwrap();
        assert_eq!(graph, before);

        assert_eq!(
            graph.remove_arc(&"A", &"C").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            graph.remove_edge(&"A", &"B").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn from_connections() {
        let graph: MixedMatrix<u32> =
            MixedMatrix::from_connections(5, [(1, 2), (2, 3)], [(4, 1), (3, 5)]).unwrap();

        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_arcs(), 2);
        assert_eq!(
            graph.typed_connections().collect_vec(),
            vec![
                TypedEdge::undirected(1, 2),
                TypedEdge::arc(4, 1),
                TypedEdge::undirected(2, 3),
                TypedEdge::arc(3, 5),
            ]
        );

        let err = MixedMatrix::<u32>::from_connections(3, [(1, 2)], [(2, 1)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateConnection);
        assert_eq!(err.operation(), "add_arc");
    }

    #[test]
    fn random_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 5, 10, 30] {
            let mut graph = MixedMatrix::new(n).unwrap();
            // connections keyed by normalized pair, type as seen from the smaller id
            let mut model: FxHashMap<(Node, Node), ConnectionType> = FxHashMap::default();

            for _ in 0..(n * n * 4) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                let key = (u.min(v), u.max(v));
                let existing = model.get(&key).copied().unwrap_or_default();
                let before = graph.clone();

                let result = match rng.random_range(0..4) {
                    0 => graph.add_edge(u, v).map(|_| {
                        model.insert(key, ConnectionType::Undirected);
                    }),
                    1 => graph.add_arc(u, v).map(|_| {
                        let ct = if u < v {
                            ConnectionType::Directed
                        } else {
                            ConnectionType::Reversed
                        };
                        model.insert(key, ct);
                    }),
                    2 => graph.remove_edge(&u, &v).map(|_| {
                        model.remove(&key);
                    }),
                    _ => graph.remove_arc(&u, &v).map(|_| {
                        model.remove(&key);
                    }),
                };

                if u == v {
                    assert!(result.is_err());
                }
                if result.is_err() {
                    assert_eq!(graph, before);
                    assert_eq!(model.get(&key).copied().unwrap_or_default(), existing);
                }

                assert_eq!(
                    graph.number_of_connections(),
                    graph.number_of_edges() + graph.number_of_arcs()
                );
                assert_eq!(
                    occupied_slots(&graph),
                    graph.number_of_connections() as usize
                );
            }

            assert_eq!(graph.number_of_connections() as usize, model.len());
            for (&(lo, hi), &ct) in &model {
                assert_eq!(graph.connection_type(&lo, &hi).unwrap(), ct);
                assert_eq!(graph.connection_type(&hi, &lo).unwrap(), ct.flipped());
            }
            assert_consistent_mixed(&graph);
        }
    }
}
