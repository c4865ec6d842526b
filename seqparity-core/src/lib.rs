// Main modules of the crate
pub mod buffer;
pub mod ops;
pub mod scalar;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;

// Re-export the Tensor type so it is reachable as `seqparity_core::Tensor`
pub use tensor::Tensor;
pub use tensor::create::{arange, linspace};
pub use scalar::Scalar;
pub use types::DType;

pub mod error;
pub use error::SeqParityError;
