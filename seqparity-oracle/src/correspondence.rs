//! Explicit pairing of the two implementations' element types.

use std::collections::HashMap;

use crate::dtype::{DtypeTag, Side};
use crate::error::OracleError;

/// Maps every [`DtypeTag`] to one dtype of each implementation.
///
/// Construction checks that all tags are present exactly once on both sides,
/// so a pairing bug is reported before any case runs.
#[derive(Clone, Debug, PartialEq)]
pub struct DtypeCorrespondence<A, B> {
    entries: Vec<(DtypeTag, A, B)>,
}

fn index_side<T: Copy>(
    side: Side,
    pairs: impl IntoIterator<Item = (DtypeTag, T)>,
) -> Result<HashMap<DtypeTag, T>, OracleError> {
    let mut map = HashMap::new();
    for (tag, dtype) in pairs {
        if map.insert(tag, dtype).is_some() {
            return Err(OracleError::DuplicateCorrespondence { tag, side });
        }
    }
    Ok(map)
}

impl<A: Copy, B: Copy> DtypeCorrespondence<A, B> {
    pub fn new(
        side_a: impl IntoIterator<Item = (DtypeTag, A)>,
        side_b: impl IntoIterator<Item = (DtypeTag, B)>,
    ) -> Result<Self, OracleError> {
        let a = index_side(Side::A, side_a)?;
        let b = index_side(Side::B, side_b)?;
        let entries = DtypeTag::ALL
            .iter()
            .map(|&tag| {
                let da = a
                    .get(&tag)
                    .copied()
                    .ok_or(OracleError::MissingCorrespondence { tag, side: Side::A })?;
                let db = b
                    .get(&tag)
                    .copied()
                    .ok_or(OracleError::MissingCorrespondence { tag, side: Side::B })?;
                Ok((tag, da, db))
            })
            .collect::<Result<Vec<_>, OracleError>>()?;
        Ok(Self { entries })
    }

    /// Pairs in canonical tag order.
    pub fn pairs(&self) -> impl Iterator<Item = (DtypeTag, A, B)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, tag: DtypeTag) -> Option<(A, B)> {
        self.entries
            .iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, a, b)| (*a, *b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
