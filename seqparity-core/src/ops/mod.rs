//! # Tensor Operations Module
//!
//! Element-level kernels shared by the creation functions.
//!
//! ## Submodules
//!
//! - [`dtype`]: Operations related to data type conversion (cast).

pub mod dtype;
