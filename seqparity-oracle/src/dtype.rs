use std::fmt;

/// Neutral element-type tag used to pair the two implementations' dtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DtypeTag {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    BFloat16,
    Bool,
}

impl DtypeTag {
    /// Canonical iteration order of the dtype matrix.
    pub const ALL: [DtypeTag; 13] = [
        DtypeTag::Int8,
        DtypeTag::Int16,
        DtypeTag::Int32,
        DtypeTag::Int64,
        DtypeTag::UInt8,
        DtypeTag::UInt16,
        DtypeTag::UInt32,
        DtypeTag::UInt64,
        DtypeTag::Float16,
        DtypeTag::Float32,
        DtypeTag::Float64,
        DtypeTag::BFloat16,
        DtypeTag::Bool,
    ];
}

impl fmt::Display for DtypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which of the two implementations a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "implementation A"),
            Side::B => write!(f, "implementation B"),
        }
    }
}
