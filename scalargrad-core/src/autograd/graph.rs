use crate::autograd::backward_op::{propagate, Op};
use crate::error::AutogradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::value::{Operand, Value};
use log::{debug, trace};
use num_traits::ToPrimitive;
use std::cell::{Ref, RefCell};
use std::fmt::Debug;

/// Integer handle of a node inside a [`Graph`] arena.
///
/// A handle is an arena index tagged with the graph epoch it was issued in.
/// It stays valid for as long as its node exists: once [`Graph::truncate`]
/// drops the node, the handle is rejected even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    epoch: u32,
}

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Arena slot: one scalar node of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Operand ids, always smaller than this node's own id.
    pub(crate) operands: Vec<NodeId>,
    /// Graph epoch at creation time.
    pub(crate) epoch: u32,
}

/// Arena length captured by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Arena holding every scalar node of a computation graph.
///
/// Operators only ever append a new node that references existing ones, so
/// the graph is acyclic by construction and the id order is already a valid
/// topological order. Interior mutability (`RefCell`) lets operators take
/// `&self`, which is what allows [`Value`] handles to be combined with the
/// standard arithmetic operators. The arena is single-threaded (`!Sync`).
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    /// Bumped by every truncation that drops nodes.
    epoch: u32,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
            epoch: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
            epoch: 0,
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` names a live node of this arena. Ids of nodes dropped by
    /// [`Graph::truncate`] are not live, even once their slot is reused.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .borrow()
            .get(id.index())
            .map_or(false, |node| node.epoch == id.epoch)
    }

    /// Creates a leaf node (no operands, zero gradient) holding `data`.
    pub fn leaf(&self, data: f64) -> Value<'_> {
        self.push(data, Op::Leaf, Vec::new())
    }

    /// Creates a leaf from any numeric value.
    ///
    /// # Errors
    /// Returns `AutogradError::TypeMismatch` when the value has no `f64`
    /// representation.
    pub fn try_leaf<N>(&self, value: N) -> Result<Value<'_>, AutogradError>
    where
        N: ToPrimitive + Debug,
    {
        match value.to_f64() {
            Some(data) => Ok(self.leaf(data)),
            None => Err(AutogradError::TypeMismatch {
                operation: "leaf".to_string(),
                expected: "a number representable as f64".to_string(),
                actual: format!("{:?}", value),
            }),
        }
    }

    /// Looks up the handle for `id`.
    ///
    /// # Errors
    /// Returns `AutogradError::UnknownNode` if `id` is not a live node of this
    /// arena.
    pub fn value(&self, id: NodeId) -> Result<Value<'_>, AutogradError> {
        if !self.contains(id) {
            return Err(AutogradError::UnknownNode {
                id: id.index(),
                len: self.len(),
            });
        }
        Ok(Value::new(self, id))
    }

    // --- Named operations ---

    pub fn add<'g>(&'g self, a: impl Into<Operand<'g>>, b: impl Into<Operand<'g>>) -> Value<'g> {
        add_op(self, a.into(), b.into())
    }

    pub fn multiply<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Value<'g> {
        mul_op(self, a.into(), b.into())
    }

    pub fn subtract<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Value<'g> {
        sub_op(self, a.into(), b.into())
    }

    pub fn divide<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Value<'g> {
        div_op(self, a.into(), b.into())
    }

    pub fn negate<'g>(&'g self, a: impl Into<Operand<'g>>) -> Value<'g> {
        neg_op(self, a.into())
    }

    /// Raises `base` to a constant `exponent`.
    ///
    /// # Errors
    /// Returns `AutogradError::TypeMismatch` if `exponent` is a graph node.
    pub fn power<'g>(
        &'g self,
        base: impl Into<Operand<'g>>,
        exponent: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, AutogradError> {
        pow_op(self, base.into(), exponent.into())
    }

    pub fn tanh<'g>(&'g self, a: impl Into<Operand<'g>>) -> Value<'g> {
        tanh_op(self, a.into())
    }

    pub fn relu<'g>(&'g self, a: impl Into<Operand<'g>>) -> Value<'g> {
        relu_op(self, a.into())
    }

    pub fn sigmoid<'g>(&'g self, a: impl Into<Operand<'g>>) -> Value<'g> {
        sigmoid_op(self, a.into())
    }

    // --- Reverse pass ---

    /// Computes the gradient of `root` with respect to every node it depends on.
    ///
    /// # Errors
    /// Returns `AutogradError::UnknownNode` if `root` is not in this arena.
    pub fn backward(&self, root: NodeId) -> Result<(), AutogradError> {
        self.value(root)?;
        self.backward_from(root);
        Ok(())
    }

    /// Reverse traversal from a node known to be in the arena.
    ///
    /// Seeds `root.grad = 1.0` and runs every reachable node's backward rule,
    /// consumers before producers. Unreachable nodes are left untouched.
    pub(crate) fn backward_from(&self, root: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let order = topological_sort(&nodes, root);
        debug!(
            "backward: root {:?} reaches {} of {} nodes",
            root,
            order.len(),
            nodes.len()
        );

        nodes[root.index()].grad = 1.0;
        for id in order {
            trace!("backward: propagating {:?} ({})", id, nodes[id.index()].op);
            propagate(&mut nodes, id);
        }
    }

    // --- Arena housekeeping ---

    /// Remembers the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.len())
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Typically used by a training loop to discard the previous forward
    /// graph while keeping the parameters created before the checkpoint.
    /// Ids of dropped nodes report `UnknownNode` from then on, including
    /// after their slot has been reused by a new node.
    pub fn truncate(&mut self, checkpoint: Checkpoint) {
        let nodes = self.nodes.get_mut();
        let before = nodes.len();
        nodes.truncate(checkpoint.0);
        if nodes.len() < before {
            self.epoch = self.epoch.wrapping_add(1);
        }
        debug!(
            "truncate: dropped {} nodes, {} left (epoch {})",
            before - nodes.len(),
            nodes.len(),
            self.epoch
        );
    }

    // --- Crate-internal accessors ---

    pub(crate) fn push(&self, data: f64, op: Op, operands: Vec<NodeId>) -> Value<'_> {
        debug_assert_eq!(operands.len(), op.arity(), "operand count for {:?}", op);
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId {
            index: nodes.len(),
            epoch: self.epoch,
        };
        nodes.push(Node {
            data,
            grad: 0.0,
            op,
            operands,
            epoch: self.epoch,
        });
        Value::new(self, id)
    }

    /// Turns an operand into a node of this graph, wrapping constants as leaves.
    ///
    /// # Panics
    /// Panics if the operand is a node of another graph.
    pub(crate) fn resolve<'g>(&'g self, operand: Operand<'g>) -> Value<'g> {
        match operand {
            Operand::Node(value) => {
                assert!(
                    std::ptr::eq(value.graph(), self),
                    "operand {:?} belongs to a different graph",
                    value.id()
                );
                value
            }
            Operand::Constant(data) => self.leaf(data),
        }
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn with_node_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut Node) -> R) -> R {
        let mut nodes = self.nodes.borrow_mut();
        f(&mut nodes[id.index()])
    }
}

/// Orders every node reachable from `root` consumers-first.
///
/// Depth-first post-order over the operands, marking nodes as visited so a
/// node reached through several paths (a diamond) is emitted and expanded only
/// once; the reversed post-order puts `root` first and every node before all
/// of its operands. Iterative so deep chains cannot overflow the stack.
pub(crate) fn topological_sort(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; root.index() + 1];
    let mut post_order = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            post_order.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        for &operand in nodes[id.index()].operands.iter().rev() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    post_order.reverse();
    post_order
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
