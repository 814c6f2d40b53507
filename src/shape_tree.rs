//! Read-only shape queries over externally built trees.

/// A node of a tree this crate only observes.
pub trait TreeNode {
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    fn children(&self) -> Self::Children<'_>;

    /// Contribution of this node alone to the tree's weight.
    fn weight(&self) -> u64 {
        1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub weight: u64,
    pub height: usize,
    pub leaves: usize,
    pub inner_nodes: usize,
}

impl TreeStats {
    pub fn nodes(&self) -> usize {
        self.inner_nodes + self.leaves
    }

    /// Mean number of children per inner node.
    pub fn avg_fanout(&self) -> f64 {
        if self.inner_nodes == 0 {
            return 0.0;
        }
        (self.nodes() - 1) as f64 / self.inner_nodes as f64
    }
}

/// View over a tree whose root may be absent.
#[derive(Clone, Debug, Default)]
pub struct ShapeTree<N> {
    root: Option<N>,
}

impl<N: TreeNode> ShapeTree<N> {
    pub fn new(root: Option<N>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sum of the weights of every node, saturating at `u64::MAX`; 0 for an empty tree.
    pub fn weight(&self) -> u64 {
        self.stats().weight
    }

    /// Number of levels on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.stats().height
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack: Vec<(&N, usize)> = self.root.iter().map(|root| (root, 1)).collect();

        while let Some((node, depth)) = stack.pop() {
            stats.weight = stats.weight.saturating_add(node.weight());
            stats.height = stats.height.max(depth);

            let before = stack.len();
            stack.extend(node.children().map(|child| (child, depth + 1)));
            if stack.len() == before {
                stats.leaves += 1;
            } else {
                stats.inner_nodes += 1;
            }
        }

        log::trace!("ShapeTree::stats {:?}", stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        weight: u64,
        children: Vec<Node>,
    }

    impl TreeNode for Node {
        type Children<'a> = std::slice::Iter<'a, Node>;

        fn children(&self) -> Self::Children<'_> {
            self.children.iter()
        }

        fn weight(&self) -> u64 {
            self.weight
        }
    }

    fn leaf(weight: u64) -> Node {
        Node {
            weight,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_tree_stats() {
        let tree = ShapeTree::new(Some(Node {
            weight: 1,
            children: vec![
                leaf(2),
                Node {
                    weight: 3,
                    children: vec![leaf(4), leaf(5)],
                },
            ],
        }));

        let stats = tree.stats();
        assert_eq!(stats.weight, 15);
        assert_eq!(stats.height, 3);
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.inner_nodes, 2);
        assert_eq!(stats.nodes(), 5);
        assert_eq!(stats.avg_fanout(), 2.0);
    }

    #[test]
    fn test_weight_saturates() {
        let tree = ShapeTree::new(Some(Node {
            weight: u64::MAX,
            children: vec![leaf(u64::MAX), leaf(1)],
        }));
        assert_eq!(tree.weight(), u64::MAX);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = ShapeTree::<Node>::new(None);
        assert!(empty.is_empty());
        assert_eq!(empty.weight(), 0);
        assert_eq!(empty.height(), 0);

        let single = ShapeTree::new(Some(leaf(1)));
        assert_eq!(single.weight(), 1);
        assert_eq!(single.height(), 1);
        assert_eq!(single.stats().avg_fanout(), 0.0);
    }
}
