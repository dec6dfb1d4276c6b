use std::cmp::Ordering;

/// Node of the coding tree: either a leaf carrying one symbol, or an
/// internal node owning exactly two children.
///
/// `order` is a creation stamp used as the tie-break when two nodes have
/// equal weight, so that tree construction is deterministic for a given
/// input. Leaves are stamped in ascending symbol order, merged nodes
/// continue the sequence.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HuffNode {
    Leaf {
        weight: usize,
        order: u64,
        symbol: char,
    },
    Internal {
        weight: usize,
        order: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    fn order(&self) -> u64 {
        match self {
            HuffNode::Leaf { order, .. } => *order,
            HuffNode::Internal { order, .. } => *order,
        }
    }

    pub fn merge(order: u64, left: HuffNode, right: HuffNode) -> HuffNode {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            order,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight(), self.order()).cmp(&(other.weight(), other.order()))
    }
}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::HuffNode;

    fn leaf(weight: usize, order: u64, symbol: char) -> HuffNode {
        HuffNode::Leaf {
            weight,
            order,
            symbol,
        }
    }

    #[test]
    fn test_nodes_order_by_weight() {
        assert!(leaf(1, 5, 'a') < leaf(3, 0, 'b'));
        assert!(leaf(4, 0, 'a') > leaf(2, 9, 'z'));
    }

    #[test]
    fn test_equal_weights_order_by_creation_stamp() {
        assert!(leaf(2, 0, 'x') < leaf(2, 1, 'y'));
        let merged = HuffNode::merge(2, leaf(1, 0, 'a'), leaf(1, 1, 'b'));
        assert!(leaf(2, 1, 'y') < merged);
    }

    #[test]
    fn test_merge_sums_weights() {
        let merged = HuffNode::merge(2, leaf(1, 0, 'a'), leaf(4, 1, 'b'));
        assert_eq!(merged.weight(), 5);
    }
}
