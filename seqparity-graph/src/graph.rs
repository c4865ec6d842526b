//! Lazy computation graph IR.
//!
//! Arrays are produced by nodes of this graph. Nodes are appended in
//! dependency order (inputs always precede their consumers), so insertion
//! order is a valid topological order.

use std::collections::HashMap;

use log::trace;

use crate::elem::ElemType;
use crate::error::GraphError;
use crate::Result;

/// Largest array length a node may produce.
pub const MAX_LEN: usize = 1 << 24;

/// Unique identifier for a node in the computation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Metadata about an array (known before materialization).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayMeta {
    pub len: usize,
    pub elem: ElemType,
}

/// The set of operations supported by the graph IR.
#[derive(Clone, Debug, PartialEq)]
pub enum OpKind {
    // ── Sources ─────────────────────────────────────────────────────────
    /// `0, 1, …, len - 1`.
    Iota,
    /// Evenly spaced points between `start` and `end`, computed from both
    /// ends so that the endpoints are exact.
    Mirror { start: f64, end: f64, delta: f64 },

    // ── Elementwise ─────────────────────────────────────────────────────
    Scale(f64),
    Shift(f64),
    /// Quantize to the element type, failing on overflow.
    Cast(ElemType),
}

impl OpKind {
    fn arity(&self) -> usize {
        match self {
            OpKind::Iota | OpKind::Mirror { .. } => 0,
            OpKind::Scale(_) | OpKind::Shift(_) | OpKind::Cast(_) => 1,
        }
    }
}

/// A node in the lazy computation graph.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub op: OpKind,
    pub inputs: Vec<NodeId>,
    pub meta: ArrayMeta,
}

#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    values: HashMap<NodeId, Vec<f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id. No evaluation happens here.
    pub fn add_op(&mut self, op: OpKind, inputs: &[NodeId], meta: ArrayMeta) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            op,
            inputs: inputs.to_vec(),
            meta,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value of an already evaluated node.
    pub fn value(&self, id: NodeId) -> Option<&[f64]> {
        self.values.get(&id).map(Vec::as_slice)
    }

    /// Static checks over the whole graph: arity, input ordering and length
    /// agreement between a node and its input.
    pub fn compile(&self) -> Result<()> {
        for node in &self.nodes {
            if node.inputs.len() != node.op.arity() {
                return Err(GraphError::Compile(format!(
                    "node {:?} ({:?}) expects {} inputs, got {}",
                    node.id,
                    node.op,
                    node.op.arity(),
                    node.inputs.len()
                )));
            }
            for input in &node.inputs {
                let src = self
                    .node(*input)
                    .filter(|src| src.id.0 < node.id.0)
                    .ok_or_else(|| {
                        GraphError::Compile(format!(
                            "node {:?} reads {:?}, which is not an earlier node",
                            node.id, input
                        ))
                    })?;
                if src.meta.len != node.meta.len {
                    return Err(GraphError::Compile(format!(
                        "node {:?} has length {} but its input {:?} has length {}",
                        node.id, node.meta.len, src.id, src.meta.len
                    )));
                }
            }
        }
        trace!("compiled graph with {} nodes", self.nodes.len());
        Ok(())
    }

    /// Evaluates one node whose inputs are already evaluated.
    pub fn eval_node(&mut self, id: NodeId) -> Result<()> {
        let node = self
            .node(id)
            .cloned()
            .ok_or(GraphError::MissingValue(id))?;
        let input = match node.inputs.first() {
            Some(src) => Some(self.value(*src).ok_or(GraphError::MissingValue(*src))?),
            None => None,
        };
        let len = node.meta.len;
        if len > MAX_LEN {
            return Err(GraphError::TooLarge {
                op: "eval",
                len: len as f64,
                max: MAX_LEN,
            });
        }
        let out: Vec<f64> = match (&node.op, input) {
            (OpKind::Iota, _) => (0..len).map(|i| i as f64).collect(),
            (OpKind::Mirror { start, end, delta }, _) => mirror(*start, *end, *delta, len),
            (OpKind::Scale(k), Some(x)) => x.iter().map(|v| v * k).collect(),
            (OpKind::Shift(k), Some(x)) => x.iter().map(|v| v + k).collect(),
            (OpKind::Cast(elem), Some(x)) => x
                .iter()
                .map(|v| elem.quantize(*v))
                .collect::<Result<Vec<f64>>>()?,
            (op, None) => {
                return Err(GraphError::Compile(format!("{op:?} evaluated without input")))
            }
        };
        trace!("eval {:?} {:?} -> {} values", id, node.op, out.len());
        self.values.insert(id, out);
        Ok(())
    }

    /// Evaluates every pending node in insertion order and returns the value of `output`.
    pub fn eval(&mut self, output: NodeId) -> Result<Vec<f64>> {
        for idx in 0..self.nodes.len() {
            let id = NodeId(idx);
            if !self.values.contains_key(&id) {
                self.eval_node(id)?;
            }
        }
        self.value(output)
            .map(<[f64]>::to_vec)
            .ok_or(GraphError::MissingValue(output))
    }
}

fn mirror(start: f64, end: f64, delta: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let half = len / 2;
            (0..len)
                .map(|i| {
                    if i < half {
                        start + delta * i as f64
                    } else {
                        end - delta * (len - 1 - i) as f64
                    }
                })
                .collect()
        }
    }
}
