use std::collections::VecDeque;

use anyhow::Result;

use crate::network::{FlowNetwork, NodeId};

/// Outcome of one max-flow run.
pub struct MaxFlow {
    /// value of the maximum flow, equal to the directed s-t min-cut
    pub value: i64,
    /// nodes reachable from the source in the final residual graph; these
    /// form the source side of a minimum cut
    pub source_side: Vec<bool>,
}

/// Breadth-first search over positive-residual edges, recording the
/// predecessor edge of every reached node. The whole residual graph is
/// explored so the returned marking is a complete reachability map from
/// `source`, not just a path witness.
fn residual_bfs(
    network: &FlowNetwork,
    source: NodeId,
    pred: &mut [Option<usize>],
) -> Vec<bool> {
    pred.fill(None);
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();
    visited[source.index()] = true;
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for edge in network.edges_from(u) {
            let v = network.endpoints(edge).1;
            if !visited[v.index()] && network.residual(edge) > 0 {
                visited[v.index()] = true;
                pred[v.index()] = Some(edge);
                queue.push_back(v);
            }
        }
    }
    visited
}

/// Edmonds-Karp: repeated shortest augmenting paths.
///
/// Resets the network's flow, then augments along the fewest-edges path
/// found by BFS until the sink becomes unreachable. Postcondition: the
/// returned `source_side` is the residual reachability marking from
/// `source` of the terminating BFS round.
pub fn max_flow(network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> Result<MaxFlow> {
    network.reset_flow();
    let mut pred = vec![None; network.node_count()];
    let mut value = 0;
    loop {
        let visited = residual_bfs(network, source, &mut pred);
        if !visited[sink.index()] {
            return Ok(MaxFlow {
                value,
                source_side: visited,
            });
        }

        let mut bottleneck = i64::MAX;
        let mut w = sink;
        while let Some(edge) = pred[w.index()] {
            bottleneck = bottleneck.min(network.residual(edge));
            w = network.endpoints(edge).0;
        }

        let mut w = sink;
        while let Some(edge) = pred[w.index()] {
            network.push(edge, bottleneck)?;
            w = network.endpoints(edge).0;
        }

        value += bottleneck;
    }
}

/// Undirected min-cut between `s` and `t`.
///
/// Capacities are symmetric, so the two directed max-flow values agree in
/// the ideal case; both are still computed and the larger taken, so that a
/// saturation difference between directions can never under-report a cut.
pub fn min_cut(network: &mut FlowNetwork, s: NodeId, t: NodeId) -> Result<i64> {
    let forward = max_flow(network, s, t)?.value;
    let backward = max_flow(network, t, s)?.value;
    Ok(forward.max(backward))
}
