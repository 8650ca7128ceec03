use anyhow::Result;

use crate::edmonds_karp::min_cut;
use crate::network::FlowNetwork;

/// Symmetric matrix of min-cut values, zero on the diagonal.
pub type CutMatrix = Vec<Vec<i64>>;

/// Min-cut value for every ordered pair of nodes.
///
/// Works on the original graph (the brute-force baseline) and on a
/// Gomory-Hu tree alike; the tree's capacities already encode the cut
/// values, so running the same engine on it returns the same matrix.
pub fn all_pairs_min_cut(network: &mut FlowNetwork) -> Result<CutMatrix> {
    let n = network.node_count();
    let mut cuts = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let u = network.node(i)?;
            let v = network.node(j)?;
            cuts[i][j] = min_cut(network, u, v)?;
        }
    }
    Ok(cuts)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::random_network;
    use crate::gomory_hu::build_tree;

    #[test]
    fn tree_and_reference_agree_on_a_random_graph() {
        let mut net = random_network(12, 22, 10, Some(42)).unwrap();
        let reference = all_pairs_min_cut(&mut net).unwrap();
        let mut tree = build_tree(&mut net).unwrap();
        let from_tree = all_pairs_min_cut(&mut tree).unwrap();
        assert_eq!(reference, from_tree);
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal_and_bounded() {
        let mut net = random_network(10, 18, 7, Some(7)).unwrap();
        let cuts = all_pairs_min_cut(&mut net).unwrap();
        for i in 0..10 {
            assert_eq!(cuts[i][i], 0);
            let around_i = net.capacity_around(net.node(i).unwrap());
            for j in 0..10 {
                assert_eq!(cuts[i][j], cuts[j][i]);
                assert!(cuts[i][j] >= 0);
                let around_j = net.capacity_around(net.node(j).unwrap());
                assert!(cuts[i][j] <= around_i.min(around_j));
            }
        }
    }

    #[test]
    fn rebuilding_the_tree_changes_no_answer() {
        let mut net = random_network(9, 14, 6, Some(3)).unwrap();
        let mut first = build_tree(&mut net).unwrap();
        let mut second = build_tree(&mut net).unwrap();
        assert_eq!(
            all_pairs_min_cut(&mut first).unwrap(),
            all_pairs_min_cut(&mut second).unwrap()
        );
    }
}
