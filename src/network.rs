use anyhow::{bail, ensure, Result};

/// Vertex handle into a [`FlowNetwork`]. Obtained through
/// [`FlowNetwork::node`], so it is always in range for the network that
/// produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

struct Edge {
    points: (NodeId, NodeId),
    cap: i64,
    flow: i64,
}

/// Directed doubled representation of an undirected capacitated graph.
///
/// An undirected edge occupies two consecutive slots in the edge arena,
/// one per direction, both carrying the full capacity. Each slot is the
/// reverse counterpart of the other; the pairing stays internal and all
/// flow updates go through [`FlowNetwork::push`].
pub struct FlowNetwork {
    /// map from node to edge ids
    adjacency: Vec<Vec<usize>>,
    /// edge storage
    edges: Vec<Edge>,
}

impl FlowNetwork {
    pub fn new(nodes: usize) -> Result<Self> {
        ensure!(nodes > 0, "a flow network needs at least one node");
        Ok(FlowNetwork {
            adjacency: vec![vec![]; nodes],
            edges: vec![],
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn node(&self, index: usize) -> Result<NodeId> {
        ensure!(
            index < self.adjacency.len(),
            "node index {} out of range for a network of {} nodes",
            index,
            self.adjacency.len()
        );
        Ok(NodeId(index))
    }

    /// Adds an undirected edge as two mutually reverse directed edges of
    /// equal capacity.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, cap: i64) -> Result<()> {
        ensure!(u != v, "self-loop on node {} rejected", u.index());
        ensure!(cap >= 0, "negative capacity {} rejected", cap);
        let m = self.edges.len();
        self.edges.push(Edge {
            points: (u, v),
            cap,
            flow: 0,
        });
        self.edges.push(Edge {
            points: (v, u),
            cap,
            flow: 0,
        });
        self.adjacency[u.index()].push(m);
        self.adjacency[v.index()].push(m + 1);
        Ok(())
    }

    pub fn undirected_edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Ids of the directed edges leaving `u`.
    pub fn edges_from(&self, u: NodeId) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u.index()].iter().copied()
    }

    pub fn endpoints(&self, edge: usize) -> (NodeId, NodeId) {
        self.edges[edge].points
    }

    pub fn capacity(&self, edge: usize) -> i64 {
        self.edges[edge].cap
    }

    pub fn residual(&self, edge: usize) -> i64 {
        self.edges[edge].cap - self.edges[edge].flow
    }

    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    /// The reverse counterpart of `edge`, if the arena slot pairing is a
    /// proper mirror.
    fn reverse(&self, edge: usize) -> Option<usize> {
        let rev = edge ^ 1;
        let (u, v) = self.edges.get(edge)?.points;
        let (ru, rv) = self.edges.get(rev)?.points;
        (ru == v && rv == u).then_some(rev)
    }

    /// Pushes `amount` units of flow along `edge`, cancelling the same
    /// amount on its reverse. A missing reverse means the network was not
    /// properly doubled and the computation must not proceed.
    pub fn push(&mut self, edge: usize, amount: i64) -> Result<()> {
        let Some(rev) = self.reverse(edge) else {
            let (u, v) = self.edges[edge].points;
            bail!(
                "edge {} -> {} has no reverse counterpart; network is not properly doubled",
                u.index(),
                v.index()
            );
        };
        self.edges[edge].flow += amount;
        self.edges[rev].flow -= amount;
        Ok(())
    }

    /// Net flow out of `v` (outgoing minus incoming). Zero for every node
    /// except the source and sink of the last max-flow run.
    pub fn net_outflow(&self, v: NodeId) -> i64 {
        self.adjacency[v.index()]
            .iter()
            .map(|&e| self.edges[e].flow)
            .sum()
    }

    /// Total capacity incident to `v`; an upper bound on any cut value
    /// separating `v` from the rest of the graph.
    pub fn capacity_around(&self, v: NodeId) -> i64 {
        self.adjacency[v.index()]
            .iter()
            .map(|&e| self.edges[e].cap)
            .sum()
    }

    /// One entry per undirected edge, with its capacity.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, i64)> + '_ {
        self.edges
            .iter()
            .step_by(2)
            .map(|edge| (edge.points.0, edge.points.1, edge.cap))
    }

    /// Test hook: appends a lone directed edge without its reverse,
    /// deliberately breaking the doubling invariant.
    #[cfg(test)]
    pub fn push_undoubled_edge(&mut self, u: NodeId, v: NodeId, cap: i64) {
        let m = self.edges.len();
        self.edges.push(Edge {
            points: (u, v),
            cap,
            flow: 0,
        });
        self.adjacency[u.index()].push(m);
    }
}
