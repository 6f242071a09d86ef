use std::io::{Read, Write};

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::Result, vectorizer::{evaluate::{matrix::SimilarityMatrix, scoring::MatchReport}, table::VectorizedTable}};

/// CBOR snapshots of derived tables.
///
/// Lets a vectorized table or a similarity matrix be computed once and
/// reloaded later without recomputing statistics.
pub trait Snapshot: Serialize + DeserializeOwned {
    fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }

    fn write_cbor<W: Write>(&self, writer: W) -> Result<()> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    fn read_cbor<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_cbor::from_reader(reader)?)
    }
}

impl Snapshot for SimilarityMatrix {}
impl Snapshot for VectorizedTable {}
impl Snapshot for MatchReport {}
