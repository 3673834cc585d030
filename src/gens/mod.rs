/*!
# Random Mixed Graph Generators

Generators follow a builder pattern:

1. Create a generator instance (e.g., `MixedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).edge_prob(p).arc_prob(q)`).
3. Either stream the random connections via [`MixedGenerator::stream`] or build a complete
   [`MixedMatrix`] via [`MixedGenerator::generate`].

Generated graphs use the vertex ids `0..n`, which are added in increasing order so that ids and
internal indices coincide.
*/

use num::{One, Zero};
use rand::Rng;

use crate::{error::Result, ops::*, *};

mod gnp;

pub use gnp::*;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Trait for generators that allow setting the number of nodes
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator
    fn nodes(self, n: NumNodes) -> Self;
}

/// A configurable generator of random mixed graphs over the vertices `0..n`
pub trait MixedGenerator {
    /// Number of vertices of the generated graphs
    fn number_of_nodes(&self) -> NumNodes;

    /// Creates a lazy iterator over random connections.
    /// Each vertex pair is connected at most once and arcs are reported in their direction.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = TypedEdge<Node>>
    where
        R: Rng;

    /// Builds a [`MixedMatrix`] whose capacity equals the number of nodes and adds all vertices
    /// and streamed connections to it
    fn generate<R>(&self, rng: &mut R) -> Result<MixedMatrix<Node>>
    where
        R: Rng,
    {
        let n = self.number_of_nodes();
        let mut graph = MixedMatrix::new(n)?;
        graph.add_vertices(0..n)?;

        for TypedEdge {
            edge: Edge(u, v),
            kind,
        } in self.stream(rng)
        {
            match kind {
                ConnectionKind::Edge => graph.add_edge(u, v)?,
                ConnectionKind::Arc => graph.add_arc(u, v)?,
            }
        }

        Ok(graph)
    }
}
