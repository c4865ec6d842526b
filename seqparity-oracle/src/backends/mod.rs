//! Adapters for the two shipped implementations and their dtype pairing.

mod graph;
mod tensor;

pub use self::graph::GraphBackend;
pub use self::tensor::CoreBackend;

use once_cell::sync::Lazy;
use seqparity_core::DType;
use seqparity_graph::ElemType;

use crate::config::OracleConfig;
use crate::correspondence::DtypeCorrespondence;
use crate::dtype::DtypeTag;
use crate::error::OracleError;
use crate::runner::DifferentialRunner;

static STANDARD: Lazy<Result<DtypeCorrespondence<DType, ElemType>, OracleError>> =
    Lazy::new(|| {
        DtypeCorrespondence::new(
            [
                (DtypeTag::Int8, DType::I8),
                (DtypeTag::Int16, DType::I16),
                (DtypeTag::Int32, DType::I32),
                (DtypeTag::Int64, DType::I64),
                (DtypeTag::UInt8, DType::U8),
                (DtypeTag::UInt16, DType::U16),
                (DtypeTag::UInt32, DType::U32),
                (DtypeTag::UInt64, DType::U64),
                (DtypeTag::Float16, DType::F16),
                (DtypeTag::Float32, DType::F32),
                (DtypeTag::Float64, DType::F64),
                (DtypeTag::BFloat16, DType::BF16),
                (DtypeTag::Bool, DType::Bool),
            ],
            [
                (DtypeTag::Int8, ElemType::Int8),
                (DtypeTag::Int16, ElemType::Int16),
                (DtypeTag::Int32, ElemType::Int32),
                (DtypeTag::Int64, ElemType::Int64),
                (DtypeTag::UInt8, ElemType::UInt8),
                (DtypeTag::UInt16, ElemType::UInt16),
                (DtypeTag::UInt32, ElemType::UInt32),
                (DtypeTag::UInt64, ElemType::UInt64),
                (DtypeTag::Float16, ElemType::Float16),
                (DtypeTag::Float32, ElemType::Float32),
                (DtypeTag::Float64, ElemType::Float64),
                (DtypeTag::BFloat16, ElemType::BFloat16),
                (DtypeTag::Bool, ElemType::Bool),
            ],
        )
    });

/// The validated pairing of `seqparity-core` and `seqparity-graph` dtypes.
///
/// Built once per process.
pub fn standard_correspondence(
) -> Result<&'static DtypeCorrespondence<DType, ElemType>, OracleError> {
    Lazy::force(&STANDARD).as_ref().map_err(Clone::clone)
}

/// A runner over the two shipped implementations.
pub fn standard_runner(
    config: OracleConfig,
) -> Result<DifferentialRunner<'static, CoreBackend, GraphBackend>, OracleError> {
    DifferentialRunner::new(CoreBackend, GraphBackend, standard_correspondence()?, config)
}
