use std::cmp::Ordering;

use crate::types::{ArcId, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelState {
    /// Infinite cost, not in the queue.
    Unseen,
    /// Finite cost, in the queue.
    Reached,
    /// Cost is final.
    Marked,
}

/// Per-node search state of one run.
///
/// `estimate` is the heuristic lower bound of the remaining cost to the
/// destination. It is fixed when the label is created and is zero for plain
/// Dijkstra labels.
#[derive(Clone, Debug)]
pub struct Label {
    node: NodeId,
    cost: f64,
    estimate: f64,
    marked: bool,
    parent: Option<ArcId>,
}

impl Label {
    pub fn new(node: NodeId) -> Self {
        Label {
            node,
            cost: f64::INFINITY,
            estimate: 0.0,
            marked: false,
            parent: None,
        }
    }

    pub fn with_cost(node: NodeId, cost: f64, parent: Option<ArcId>) -> Self {
        Label {
            cost,
            parent,
            ..Label::new(node)
        }
    }

    pub fn with_estimate(mut self, estimate: f64) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn total_cost(&self) -> f64 {
        self.cost + self.estimate
    }

    pub fn parent(&self) -> Option<ArcId> {
        self.parent
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn mark(&mut self) {
        self.marked = true;
    }

    /// Moves the label to a cheaper path ending with `parent`.
    pub fn change_parent(&mut self, parent: ArcId, cost: f64) {
        debug_assert!(!self.marked, "label of node {} is already marked", self.node);
        debug_assert!(
            cost <= self.cost,
            "cost of node {} would grow from {} to {}",
            self.node,
            self.cost,
            cost
        );

        self.parent = Some(parent);
        self.cost = cost;
    }

    pub fn state(&self) -> LabelState {
        if self.marked {
            LabelState::Marked
        } else if self.cost.is_finite() {
            LabelState::Reached
        } else {
            LabelState::Unseen
        }
    }

    pub fn key(&self) -> LabelKey {
        LabelKey {
            total: self.total_cost(),
            estimate: self.estimate,
        }
    }
}

/// Queue priority of a label: total cost first, then the estimate, so that
/// among equal totals the label closest to the destination comes out first.
#[derive(Clone, Copy, Debug)]
pub struct LabelKey {
    total: f64,
    estimate: f64,
}

impl LabelKey {
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Ord for LabelKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .total_cmp(&other.total)
            .then_with(|| self.estimate.total_cmp(&other.estimate))
    }
}

impl PartialOrd for LabelKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LabelKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LabelKey {}
