use std::fmt::{Debug, Display};

/// A connection is defined by two vertices.
/// It is up to the context whether an Edge is directed (`Edge(tail, head)`) or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

/// We limit the number of edges and arcs to `2^32 - 1` each.
pub type NumEdges = u32;

impl<V: Debug> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V: Ord + Clone> Edge<V> {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1 {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl<V: Clone> Edge<V> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns true if both edges connect the same vertices, ignoring orientation
    pub fn same_endpoints(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}

/// The two kinds of connections a mixed graph can hold
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Undirected edge
    Edge,
    /// Directed arc
    Arc,
}

/// A connection tagged with its kind.
/// For arcs, `edge` is always `Edge(tail, head)` in the true direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedEdge<V> {
    pub edge: Edge<V>,
    pub kind: ConnectionKind,
}

impl<V> TypedEdge<V> {
    pub fn undirected(u: V, v: V) -> Self {
        Self {
            edge: Edge(u, v),
            kind: ConnectionKind::Edge,
        }
    }

    pub fn arc(tail: V, head: V) -> Self {
        Self {
            edge: Edge(tail, head),
            kind: ConnectionKind::Arc,
        }
    }

    pub fn is_arc(&self) -> bool {
        self.kind == ConnectionKind::Arc
    }
}

/// How two vertices `(u, v)` are connected, **seen from the order in which they were queried**.
///
/// `Directed` means there is an arc `u -> v`, `Reversed` means there is an arc `v -> u`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ConnectionType {
    #[default]
    Disconnected,
    Undirected,
    Directed,
    Reversed,
}

impl ConnectionType {
    /// Returns the same connection seen from the other endpoint
    pub fn flipped(self) -> Self {
        match self {
            ConnectionType::Directed => ConnectionType::Reversed,
            ConnectionType::Reversed => ConnectionType::Directed,
            other => other,
        }
    }

    pub fn is_connected(self) -> bool {
        self != ConnectionType::Disconnected
    }

    pub fn is_arc(self) -> bool {
        matches!(self, ConnectionType::Directed | ConnectionType::Reversed)
    }
}

impl Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConnectionType::Disconnected => "no connection",
            ConnectionType::Undirected => "undirected edge",
            ConnectionType::Directed => "arc",
            ConnectionType::Reversed => "reversed arc",
        })
    }
}
