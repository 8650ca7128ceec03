use std::fmt::Write;

use tracing::warn;

use crate::all_pairs::CutMatrix;
use crate::network::FlowNetwork;

/// Per-pair agreement between the brute-force reference and the values
/// read off the Gomory-Hu tree.
pub struct Agreement {
    pub matching: usize,
    pub differing: usize,
}

pub fn compare(reference: &CutMatrix, from_tree: &CutMatrix) -> Agreement {
    let mut agreement = Agreement {
        matching: 0,
        differing: 0,
    };
    for (i, row) in reference.iter().enumerate() {
        for (j, &expected) in row.iter().enumerate() {
            if i == j {
                continue;
            }
            let got = from_tree[i][j];
            if got == expected {
                agreement.matching += 1;
            } else {
                agreement.differing += 1;
                warn!(i, j, expected, got, "min-cut mismatch");
            }
        }
    }
    agreement
}

/// DOT rendering of the undirected edges with their capacities.
pub fn to_dot(network: &FlowNetwork) -> String {
    let mut out = String::from("graph G {\n");
    for (u, v, cap) in network.undirected_edges() {
        let _ = writeln!(out, "    {} -- {} [label={}]", u.index(), v.index(), cap);
    }
    out.push('}');
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn counts_matches_and_mismatches() {
        let reference = vec![vec![0, 3, 2], vec![3, 0, 4], vec![2, 4, 0]];
        let mut from_tree = reference.clone();
        let agreement = compare(&reference, &from_tree);
        assert_eq!(agreement.matching, 6);
        assert_eq!(agreement.differing, 0);

        from_tree[0][2] = 1;
        let agreement = compare(&reference, &from_tree);
        assert_eq!(agreement.matching, 5);
        assert_eq!(agreement.differing, 1);
    }

    #[test]
    fn dot_lists_each_undirected_edge_once() -> Result<()> {
        let mut net = FlowNetwork::new(3)?;
        net.add_edge(net.node(0)?, net.node(1)?, 4)?;
        net.add_edge(net.node(1)?, net.node(2)?, 6)?;
        let dot = to_dot(&net);
        assert!(dot.starts_with("graph G {"));
        assert!(dot.contains("0 -- 1 [label=4]"));
        assert!(dot.contains("1 -- 2 [label=6]"));
        assert_eq!(dot.matches("--").count(), 2);
        Ok(())
    }
}
