//! Execution context: builds creation graphs and runs them per [`ExecMode`].

use std::fmt;

use log::debug;

use crate::array::GraphArray;
use crate::elem::ElemType;
use crate::error::GraphError;
use crate::graph::{ArrayMeta, Graph, NodeId, OpKind, MAX_LEN};
use crate::value::Value;
use crate::Result;

/// How a [`Context`] executes the graphs it builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ExecMode {
    /// Evaluate every node as soon as it is recorded.
    #[default]
    Eager,
    /// Record the whole graph, compile it, then run it.
    Compiled,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecMode::Eager => write!(f, "Eager"),
            ExecMode::Compiled => write!(f, "Compiled"),
        }
    }
}

/// Records nodes into a fresh graph, evaluating eagerly when asked to.
struct Recorder {
    graph: Graph,
    mode: ExecMode,
}

impl Recorder {
    fn new(mode: ExecMode) -> Self {
        Self {
            graph: Graph::new(),
            mode,
        }
    }

    fn record(&mut self, op: OpKind, inputs: &[NodeId], meta: ArrayMeta) -> Result<NodeId> {
        let id = self.graph.add_op(op, inputs, meta);
        if self.mode == ExecMode::Eager {
            self.graph.eval_node(id)?;
        }
        Ok(id)
    }

    fn finish(mut self, output: NodeId) -> Result<Vec<f64>> {
        if self.mode == ExecMode::Compiled {
            self.graph.compile()?;
        }
        self.graph.eval(output)
    }
}

/// Entry point for sequence construction.
///
/// A context is a plain value: two contexts with different modes can be used
/// side by side.
#[derive(Clone, Copy, Debug, Default)]
pub struct Context {
    mode: ExecMode,
}

fn number(op: &'static str, arg: &'static str, value: &Value) -> Result<f64> {
    let v = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        other => {
            return Err(GraphError::TypeError {
                op,
                arg,
                found: other.kind().to_string(),
            })
        }
    };
    if !v.is_finite() {
        return Err(GraphError::NotFinite { op, arg, value: v });
    }
    Ok(v)
}

/// Exact element count of an all-integer range.
fn int_range_len(start: i64, end: i64, step: i64) -> u128 {
    let (span, step) = (end as i128 - start as i128, step as i128);
    if span == 0 {
        return 0;
    }
    let adjust = if step > 0 { step - 1 } else { step + 1 };
    ((span + adjust) / step).max(0) as u128
}

/// Rejects lengths above [`MAX_LEN`] before anything is recorded.
fn bounded_len(op: &'static str, len: f64) -> Result<usize> {
    if len.is_nan() || len > MAX_LEN as f64 {
        return Err(GraphError::TooLarge {
            op,
            len,
            max: MAX_LEN,
        });
    }
    Ok(len as usize)
}

fn meta(len: usize, elem: ElemType) -> ArrayMeta {
    ArrayMeta { len, elem }
}

impl Context {
    pub fn new(mode: ExecMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ExecMode {
        self.mode
    }

    /// Values in `[start, end)` spaced by `step`.
    ///
    /// Element type defaults to `Int64` for all-integer arguments and
    /// `Float32` otherwise. `Bool` is rejected.
    pub fn arange(
        &self,
        start: &Value,
        end: &Value,
        step: &Value,
        elem: Option<ElemType>,
    ) -> Result<GraphArray> {
        let s = number("arange", "start", start)?;
        let e = number("arange", "end", end)?;
        let st = number("arange", "step", step)?;
        if st == 0.0 {
            return Err(GraphError::ZeroStep { op: "arange" });
        }
        if (st > 0.0 && s > e) || (st < 0.0 && s < e) {
            return Err(GraphError::RangeDirection {
                op: "arange",
                start: s,
                end: e,
                step: st,
            });
        }

        let raw_len = match (start, end, step) {
            (Value::Int(a), Value::Int(b), Value::Int(c)) => int_range_len(*a, *b, *c) as f64,
            _ => ((e - s) / st).ceil().max(0.0),
        };
        let elem = elem.unwrap_or(match (start, end, step) {
            (Value::Int(_), Value::Int(_), Value::Int(_)) => ElemType::Int64,
            _ => ElemType::Float32,
        });
        if elem == ElemType::Bool {
            return Err(GraphError::UnsupportedElemType { op: "arange", elem });
        }
        let len = bounded_len("arange", raw_len)?;
        debug!(
            "arange[{}] start={s} end={e} step={st} elem={elem} len={len}",
            self.mode
        );

        let mut rec = Recorder::new(self.mode);
        let iota = rec.record(OpKind::Iota, &[], meta(len, ElemType::Float64))?;
        let scaled = rec.record(OpKind::Scale(st), &[iota], meta(len, ElemType::Float64))?;
        let shifted = rec.record(OpKind::Shift(s), &[scaled], meta(len, ElemType::Float64))?;
        let out = rec.record(OpKind::Cast(elem), &[shifted], meta(len, elem))?;
        Ok(GraphArray::new(elem, rec.finish(out)?))
    }

    /// `steps` evenly spaced values from `start` to `end`, both included.
    ///
    /// Element type defaults to `Float32`. `Bool` is rejected.
    pub fn linspace(
        &self,
        start: &Value,
        end: &Value,
        steps: &Value,
        elem: Option<ElemType>,
    ) -> Result<GraphArray> {
        let s = number("linspace", "start", start)?;
        let e = number("linspace", "end", end)?;
        let steps = match steps {
            Value::Int(n) => *n,
            other => {
                return Err(GraphError::StepsNotInteger {
                    found: other.kind().to_string(),
                })
            }
        };
        if steps < 0 {
            return Err(GraphError::StepsNegative { steps });
        }
        let elem = elem.unwrap_or(ElemType::Float32);
        if elem == ElemType::Bool {
            return Err(GraphError::UnsupportedElemType { op: "linspace", elem });
        }

        let len = bounded_len("linspace", steps as f64)?;
        let delta = if len > 1 { (e - s) / (len - 1) as f64 } else { 0.0 };
        debug!(
            "linspace[{}] start={s} end={e} steps={len} elem={elem}",
            self.mode
        );

        let mut rec = Recorder::new(self.mode);
        let points = rec.record(
            OpKind::Mirror {
                start: s,
                end: e,
                delta,
            },
            &[],
            meta(len, ElemType::Float64),
        )?;
        let out = rec.record(OpKind::Cast(elem), &[points], meta(len, elem))?;
        Ok(GraphArray::new(elem, rec.finish(out)?))
    }
}
