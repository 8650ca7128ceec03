use anyhow::Result;
use tracing::debug;

use crate::edmonds_karp::max_flow;
use crate::network::FlowNetwork;

/// Working state of one tree build: tentative parent of every node in the
/// tree under construction and the cut value towards that parent. Node 0
/// is the initial parent of everyone.
struct GusfieldState {
    parent: Vec<usize>,
    flow_to_parent: Vec<i64>,
}

impl GusfieldState {
    fn new(nodes: usize) -> Self {
        GusfieldState {
            parent: vec![0; nodes],
            flow_to_parent: vec![0; nodes],
        }
    }
}

/// Builds the Gomory-Hu tree of `network` with Gusfield's algorithm.
///
/// Runs n-1 max-flow computations on the original network. The returned
/// network has one doubled edge per tree edge, with capacity equal to the
/// cut value it realizes; it answers the same min-cut queries as the
/// original graph. Disconnected inputs yield a forest, since a zero cut
/// value produces no tree edge.
pub fn build_tree(network: &mut FlowNetwork) -> Result<FlowNetwork> {
    let n = network.node_count();
    let mut state = GusfieldState::new(n);
    let mut cut_tree = vec![vec![0i64; n]; n];

    for s in 1..n {
        let t = state.parent[s];
        let source = network.node(s)?;
        let sink = network.node(t)?;

        // the residual reachability from s doubles as the side-of-cut
        // marking used for the re-parenting below
        let outcome = max_flow(network, source, sink)?;
        state.flow_to_parent[s] = outcome.value;

        // every other child of t that landed on s's side of the cut is
        // separated from t together with s, so it follows s
        for i in 0..n {
            if i != s && state.parent[i] == t && outcome.source_side[i] {
                state.parent[i] = s;
            }
        }

        // cross-over: when t's own parent lands on s's side, s takes t's
        // place in the tree and t hangs below s, keeping the parent
        // pointers acyclic over the nodes processed so far
        if outcome.source_side[state.parent[t]] {
            state.parent[s] = state.parent[t];
            state.parent[t] = s;
            state.flow_to_parent[s] = state.flow_to_parent[t];
            state.flow_to_parent[t] = outcome.value;
        }

        debug!(s, t, cut = outcome.value, "gusfield iteration");

        // the parent array is final once the last node is processed
        if s == n - 1 {
            for i in 1..n {
                cut_tree[i][state.parent[i]] = state.flow_to_parent[i];
                cut_tree[state.parent[i]][i] = state.flow_to_parent[i];
            }
        }
    }

    let mut tree = FlowNetwork::new(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            let cap = cut_tree[i][j].max(cut_tree[j][i]);
            if cap > 0 {
                let u = tree.node(i)?;
                let v = tree.node(j)?;
                tree.add_edge(u, v, cap)?;
            }
        }
    }
    Ok(tree)
}
