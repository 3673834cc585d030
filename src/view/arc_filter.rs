use itertools::Itertools;
use tracing::debug;

use crate::{error::Result, ops::*, *};

/// Read-only view of a directed graph in which some arcs are hidden.
///
/// The view borrows the wrapped graph and never modifies it. Hidden arcs do not show up in
/// [`DirectedReader::successors_of`], [`DirectedReader::predecessors_of`],
/// [`DirectedReader::has_arc`] and [`DirectedReader::arcs`] (and everything derived from those
/// such as degrees and [`DirectedReader::number_of_arcs`]).
///
/// **Be careful**: [`DirectedReader::sources`] and [`DirectedReader::sinks`] are answered by the
/// wrapped graph and do **not** account for hidden arcs.
///
/// # Example
/// ```
/// use mixmat::prelude::*;
///
/// let graph: MixedMatrix<char> =
///     MixedMatrix::from_connections(3, Vec::<(char, char)>::new(), [('a', 'b'), ('b', 'c')])?;
/// let view = ArcFilter::single(&graph, 'a', 'b');
///
/// assert!(view.successors_of(&'a')?.is_empty());
/// assert!(!view.has_arc(&'a', &'b')?);
/// assert!(view.has_arc(&'b', &'c')?);
/// assert!(graph.has_arc(&'a', &'b')?);
/// # Ok::<(), mixmat::error::GraphError>(())
/// ```
pub struct ArcFilter<'a, G>
where
    G: DirectedReader,
{
    graph: &'a G,
    excluded: Vec<Edge<G::Vertex>>,
}

impl<'a, G> ArcFilter<'a, G>
where
    G: DirectedReader,
{
    /// Wraps `graph` hiding all arcs `Edge(tail, head)` in `arcs`.
    /// Arcs that do not exist in `graph` are allowed and have no effect.
    pub fn new(graph: &'a G, arcs: impl IntoIterator<Item = impl Into<Edge<G::Vertex>>>) -> Self {
        let excluded = arcs.into_iter().map(|a| a.into()).collect_vec();
        debug!(excluded = excluded.len(), "created arc filter");
        Self { graph, excluded }
    }

    /// Wraps `graph` hiding the single arc `tail -> head`
    pub fn single(graph: &'a G, tail: G::Vertex, head: G::Vertex) -> Self {
        Self::new(graph, [Edge(tail, head)])
    }

    /// Returns the wrapped graph
    pub fn inner(&self) -> &'a G {
        self.graph
    }

    /// Returns the hidden arcs as passed in
    pub fn excluded_arcs(&self) -> &[Edge<G::Vertex>] {
        &self.excluded
    }

    /// Returns *true* if the arc `tail -> head` is hidden (regardless of whether it exists)
    pub fn is_excluded(&self, tail: &G::Vertex, head: &G::Vertex) -> bool {
        self.excluded.iter().any(|Edge(t, h)| t == tail && h == head)
    }
}

/// Removes the first occurrence of `v` from `nodes`, if any
fn remove_once<V: PartialEq>(nodes: &mut Vec<V>, v: &V) {
    if let Some(pos) = nodes.iter().position(|w| w == v) {
        nodes.remove(pos);
    }
}

impl<G> GraphVertexOrder for ArcFilter<'_, G>
where
    G: DirectedReader,
{
    type Vertex = G::Vertex;

    fn number_of_vertices(&self) -> NumNodes {
        self.graph.number_of_vertices()
    }

    fn has_vertex(&self, u: &G::Vertex) -> bool {
        self.graph.has_vertex(u)
    }

    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.graph.vertices()
    }
}

impl<G> DirectedReader for ArcFilter<'_, G>
where
    G: DirectedReader,
{
    fn number_of_arcs(&self) -> NumEdges {
        let hidden = self
            .excluded
            .iter()
            .unique()
            .filter(|Edge(tail, head)| self.graph.has_arc(tail, head).unwrap_or(false))
            .count() as NumEdges;
        self.graph.number_of_arcs() - hidden
    }

    fn has_arc(&self, tail: &G::Vertex, head: &G::Vertex) -> Result<bool> {
        Ok(self.graph.has_arc(tail, head)? && !self.is_excluded(tail, head))
    }

    fn arcs(&self) -> impl Iterator<Item = Edge<G::Vertex>> + '_ {
        self.graph
            .arcs()
            .filter(|Edge(tail, head)| !self.is_excluded(tail, head))
    }

    fn successors_of(&self, u: &G::Vertex) -> Result<Vec<G::Vertex>> {
        let mut successors = self.graph.successors_of(u)?;
        for Edge(_, head) in self.excluded.iter().filter(|Edge(tail, _)| tail == u) {
            remove_once(&mut successors, head);
        }
        Ok(successors)
    }

    fn predecessors_of(&self, u: &G::Vertex) -> Result<Vec<G::Vertex>> {
        let mut predecessors = self.graph.predecessors_of(u)?;
        for Edge(tail, _) in self.excluded.iter().filter(|Edge(_, head)| head == u) {
            remove_once(&mut predecessors, tail);
        }
        Ok(predecessors)
    }

    fn sources(&self) -> Vec<G::Vertex> {
        self.graph.sources()
    }

    fn sinks(&self) -> Vec<G::Vertex> {
        self.graph.sinks()
    }
}

/// Undirected edges are never hidden
impl<G> UndirectedReader for ArcFilter<'_, G>
where
    G: DirectedReader + UndirectedReader,
{
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    fn has_edge(&self, u: &G::Vertex, v: &G::Vertex) -> Result<bool> {
        self.graph.has_edge(u, v)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<G::Vertex>> + '_ {
        self.graph.edges()
    }

    fn neighbors_of(&self, u: &G::Vertex) -> Result<Vec<G::Vertex>> {
        self.graph.neighbors_of(u)
    }
}

impl<G> MixedReader for ArcFilter<'_, G>
where
    G: MixedReader,
{
    fn connection_type(&self, u: &G::Vertex, v: &G::Vertex) -> Result<ConnectionType> {
        let connection = self.graph.connection_type(u, v)?;
        let hidden = match connection {
            ConnectionType::Directed => self.is_excluded(u, v),
            ConnectionType::Reversed => self.is_excluded(v, u),
            _ => false,
        };

        Ok(if hidden {
            ConnectionType::Disconnected
        } else {
            connection
        })
    }

    fn connections(&self) -> impl Iterator<Item = Edge<G::Vertex>> + '_ {
        self.typed_connections().map(|typed| typed.edge)
    }

    fn typed_connections(&self) -> impl Iterator<Item = TypedEdge<G::Vertex>> + '_ {
        self.graph.typed_connections().filter(|typed| {
            let Edge(tail, head) = &typed.edge;
            !(typed.is_arc() && self.is_excluded(tail, head))
        })
    }
}
