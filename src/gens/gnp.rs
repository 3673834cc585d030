use crate::gens::*;

/// Mixed analogue of `G(n,p)`: every pair of distinct vertices independently becomes an
/// undirected edge with probability `edge_prob`, an arc with probability `arc_prob` (both
/// orientations equally likely) and stays disconnected otherwise.
#[derive(Debug, Copy, Clone, Default)]
pub struct MixedGnp {
    n: NumNodes,
    edge_prob: f64,
    arc_prob: f64,
}

impl MixedGnp {
    /// Creates a new generator without nodes and connections
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the probability of a pair being connected by an undirected edge
    pub fn edge_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.edge_prob = prob;
        self
    }

    /// Sets the probability of a pair being connected by an arc
    pub fn arc_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.arc_prob = prob;
        self
    }
}

impl NumNodesGen for MixedGnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl MixedGenerator for MixedGnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = TypedEdge<Node>> {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(
            (self.edge_prob + self.arc_prob).is_valid_probability(),
            "Edge and arc probabilities must not exceed 1 combined!"
        );

        let n = self.n;
        let (edge_prob, arc_prob) = (self.edge_prob, self.arc_prob);

        (0..n)
            .flat_map(move |lo| ((lo + 1)..n).map(move |hi| (lo, hi)))
            .filter_map(move |(lo, hi)| {
                let x: f64 = rng.random();
                if x < edge_prob {
                    Some(TypedEdge::undirected(lo, hi))
                } else if x < edge_prob + arc_prob {
                    Some(if rng.random_bool(0.5) {
                        TypedEdge::arc(lo, hi)
                    } else {
                        TypedEdge::arc(hi, lo)
                    })
                } else {
                    None
                }
            })
    }
}
