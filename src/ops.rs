/*!
# Graph Capabilities

Graphs are accessed exclusively through the traits in this module. Each trait describes one
capability (reading vertices, editing edges, reading arcs, ...) so that consumers can ask for
exactly what they need and decorators such as [`ArcFilter`](crate::view::ArcFilter) can wrap any
graph that provides it.

Vertex ids are passed by value when they may be stored (additions) and by reference otherwise.
*/

use itertools::Itertools;

use crate::{error::Result, *};

/// Provides getters pertaining to the vertices of a graph
pub trait GraphVertexOrder {
    /// Type of the external vertex ids
    type Vertex: VertexId;

    /// Returns the number of vertices of the graph (its order)
    fn number_of_vertices(&self) -> NumNodes;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no connections)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if the vertex is part of the graph
    fn has_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns an iterator over V
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;
}

/// Provides functions to insert vertices
pub trait GraphVertexEditing: GraphVertexOrder {
    /// Adds the vertex `u` to the graph.
    /// Fails if `u` already exists or the graph is full.
    fn add_vertex(&mut self, u: Self::Vertex) -> Result<()>;

    /// Adds all vertices in the collection, stopping at the first failure
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Self::Vertex>) -> Result<()> {
        vertices.into_iter().try_for_each(|u| self.add_vertex(u))
    }
}

/// Provides a function to delete vertices
pub trait GraphVertexRemoval: GraphVertexOrder {
    /// Removes `u` and all its connections from the graph
    fn remove_vertex(&mut self, u: &Self::Vertex) -> Result<()>;
}

/// Read access to the undirected edges of a graph
pub trait UndirectedReader: GraphVertexOrder {
    /// Returns the number of undirected edges
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the undirected edge `{u, v}` exists.
    /// Always *false* for `u == v`; fails if either vertex is unknown.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool>;

    /// Returns an iterator over all undirected edges, each reported once
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_;

    /// Returns all vertices connected to `u` by an undirected edge
    fn neighbors_of(&self, u: &Self::Vertex) -> Result<Vec<Self::Vertex>>;

    /// Returns the number of undirected edges at `u`
    fn degree_of(&self, u: &Self::Vertex) -> Result<NumNodes> {
        Ok(self.neighbors_of(u)?.len() as NumNodes)
    }
}

/// Provides functions to insert/delete undirected edges
pub trait GraphEdgeEditing: UndirectedReader {
    /// Adds the undirected edge `{u, v}`, creating missing vertices.
    /// Fails if `u == v`, the pair is already connected or there is no space for new vertices.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> Result<()>;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Edge<Self::Vertex>>>,
    ) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the undirected edge `{u, v}`.
    /// Fails if there is no such edge.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<()>;
}

/// Read access to the directed arcs of a graph
pub trait DirectedReader: GraphVertexOrder {
    /// Returns the number of arcs
    fn number_of_arcs(&self) -> NumEdges;

    /// Returns *true* if the arc `tail -> head` exists.
    /// Always *false* for `tail == head`; fails if either vertex is unknown.
    fn has_arc(&self, tail: &Self::Vertex, head: &Self::Vertex) -> Result<bool>;

    /// Returns an iterator over all arcs as `Edge(tail, head)`
    fn arcs(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_;

    /// Returns all `v` with an arc `u -> v`
    fn successors_of(&self, u: &Self::Vertex) -> Result<Vec<Self::Vertex>>;

    /// Returns all `v` with an arc `v -> u`
    fn predecessors_of(&self, u: &Self::Vertex) -> Result<Vec<Self::Vertex>>;

    /// Returns the number of arcs leaving `u`
    fn out_degree_of(&self, u: &Self::Vertex) -> Result<NumNodes> {
        Ok(self.successors_of(u)?.len() as NumNodes)
    }

    /// Returns the number of arcs entering `u`
    fn in_degree_of(&self, u: &Self::Vertex) -> Result<NumNodes> {
        Ok(self.predecessors_of(u)?.len() as NumNodes)
    }

    /// Returns all vertices without incoming arcs
    fn sources(&self) -> Vec<Self::Vertex> {
        self.vertices()
            .filter(|u| self.in_degree_of(u).is_ok_and(|d| d == 0))
            .collect_vec()
    }

    /// Returns all vertices without outgoing arcs
    fn sinks(&self) -> Vec<Self::Vertex> {
        self.vertices()
            .filter(|u| self.out_degree_of(u).is_ok_and(|d| d == 0))
            .collect_vec()
    }
}

/// Provides functions to insert/delete arcs
pub trait GraphArcEditing: DirectedReader {
    /// Adds the arc `tail -> head`, creating missing vertices.
    /// Fails if `tail == head`, the pair is already connected (in any way) or there is no
    /// space for new vertices.
    fn add_arc(&mut self, tail: Self::Vertex, head: Self::Vertex) -> Result<()>;

    /// Adds all arcs `Edge(tail, head)` in the collection, stopping at the first failure
    fn add_arcs(
        &mut self,
        arcs: impl IntoIterator<Item = impl Into<Edge<Self::Vertex>>>,
    ) -> Result<()> {
        for Edge(tail, head) in arcs.into_iter().map(|e| e.into()) {
            self.add_arc(tail, head)?;
        }
        Ok(())
    }

    /// Removes the arc `tail -> head`.
    /// Fails if there is no such arc; an arc `head -> tail` does not count.
    fn remove_arc(&mut self, tail: &Self::Vertex, head: &Self::Vertex) -> Result<()>;
}

/// Queries specific to mixed graphs
pub trait MixedReader: UndirectedReader + DirectedReader {
    /// Returns how `u` and `v` are connected, seen from `u`.
    /// Fails if `u == v` or either vertex is unknown.
    fn connection_type(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<ConnectionType>;

    /// Returns the number of edges plus the number of arcs
    fn number_of_connections(&self) -> NumEdges {
        self.number_of_edges() + self.number_of_arcs()
    }

    /// Returns an iterator over all connected pairs regardless of their kind.
    /// Each pair is reported once; the order of the endpoints carries no meaning.
    fn connections(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_;

    /// Returns an iterator over all connections tagged with their kind.
    /// Arcs are reported in their true direction.
    fn typed_connections(&self) -> impl Iterator<Item = TypedEdge<Self::Vertex>> + '_;
}
