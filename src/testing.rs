//! Consistency checks shared by the tests of all graph readers.

use itertools::Itertools;

use crate::{ops::*, *};

/// Checks that arc iteration, arc counting, `has_arc` and the successor/predecessor queries of
/// a reader all describe the same set of arcs
pub(crate) fn assert_consistent_reader<G: DirectedReader>(graph: &G) {
    let arcs = graph.arcs().collect_vec();
    assert_eq!(arcs.len(), graph.number_of_arcs() as usize);
    assert_eq!(arcs.iter().unique().count(), arcs.len());

    for Edge(tail, head) in &arcs {
        assert!(graph.has_arc(tail, head).unwrap(), "{tail:?} -> {head:?}");
        assert!(graph.successors_of(tail).unwrap().contains(head));
        assert!(graph.predecessors_of(head).unwrap().contains(tail));
    }

    let mut out_total = 0;
    let mut in_total = 0;
    for u in graph.vertices() {
        let successors = graph.successors_of(&u).unwrap();
        let predecessors = graph.predecessors_of(&u).unwrap();

        for v in &successors {
            assert!(graph.has_arc(&u, v).unwrap(), "{u:?} -> {v:?}");
        }
        for v in &predecessors {
            assert!(graph.has_arc(v, &u).unwrap(), "{v:?} -> {u:?}");
        }

        out_total += successors.len();
        in_total += predecessors.len();
    }

    assert_eq!(out_total, arcs.len());
    assert_eq!(in_total, arcs.len());
}

/// Additionally checks that edges, typed connections and connection types agree
pub(crate) fn assert_consistent_mixed<G: MixedReader>(graph: &G) {
    assert_consistent_reader(graph);

    let edges = graph.edges().collect_vec();
    assert_eq!(edges.len(), graph.number_of_edges() as usize);

    let typed = graph.typed_connections().collect_vec();
    assert_eq!(typed.len(), graph.number_of_connections() as usize);
    assert_eq!(graph.connections().count(), typed.len());

    for TypedEdge { edge: Edge(u, v), kind } in &typed {
        let expected = match kind {
            ConnectionKind::Edge => {
                assert!(edges.iter().any(|e| e.same_endpoints(&Edge(u.clone(), v.clone()))));
                assert!(graph.has_edge(v, u).unwrap());
                ConnectionType::Undirected
            }
            ConnectionKind::Arc => {
                assert!(graph.has_arc(u, v).unwrap());
                ConnectionType::Directed
            }
        };

        assert_eq!(graph.connection_type(u, v).unwrap(), expected);
        assert_eq!(graph.connection_type(v, u).unwrap(), expected.flipped());
    }
}
