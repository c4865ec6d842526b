//! Sequence construction on a small lazy op graph.
//!
//! A [`Context`] records `arange` / `linspace` as a chain of graph nodes
//! (`Iota`, `Scale`, `Shift`, `Mirror`, `Cast`) and evaluates it according to
//! its [`ExecMode`]:
//!
//! - `Eager`: every node is evaluated as soon as it is recorded.
//! - `Compiled`: the whole chain is recorded first, checked by a compile pass
//!   (shape inference, input ordering) and then run in one go.
//!
//! Element types are described by [`ElemType`]; values are kept as `f64`
//! already quantized to the element type.

pub mod array;
pub mod context;
pub mod elem;
pub mod error;
pub mod graph;
pub mod value;

pub use array::GraphArray;
pub use context::{Context, ExecMode};
pub use elem::ElemType;
pub use error::GraphError;
pub use graph::MAX_LEN;
pub use value::Value;

pub type Result<T> = std::result::Result<T, GraphError>;
