//! Reference batch registry.
//!
//! Batches and their index-blob heights are written once through the
//! registration path and read many times by the challenge verifier; the
//! registry never mutates a record after creation.

use alloy_primitives::B256;
use kanoa_bindings::{BatchHeader, CommitmentRecord};
use kanoa_verifier::BatchRegistry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A registration that would overwrite an existing record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The batch hash already maps to a header.
    #[error("batch {0} is already registered")]
    DuplicateBatch(B256),
    /// The header's index blob already maps to a height.
    #[error("index blob {0} is already registered")]
    DuplicateIndexBlob(B256),
}

/// Map-backed registry of settlement batches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBatchRegistry {
    headers: HashMap<B256, BatchHeader>,
    canonical: HashSet<B256>,
    heights: HashMap<B256, u64>,
    commitments: HashMap<B256, CommitmentRecord>,
}

impl InMemoryBatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a batch header and binds its index blob to the height the
    /// header carries. Write-once: a second registration of either key is
    /// an error, headers are immutable once created.
    pub fn register_batch(
        &mut self,
        batch_hash: B256,
        header: BatchHeader,
    ) -> Result<(), RegistryError> {
        if self.headers.contains_key(&batch_hash) {
            return Err(RegistryError::DuplicateBatch(batch_hash));
        }
        if self.heights.contains_key(&header.index_blob_hash) {
            return Err(RegistryError::DuplicateIndexBlob(header.index_blob_hash));
        }

        debug!(%batch_hash, index_blob_hash = %header.index_blob_hash, height = header.index_blob_height, "registering batch");
        self.heights
            .insert(header.index_blob_hash, header.index_blob_height);
        self.headers.insert(batch_hash, header);
        Ok(())
    }

    /// Marks a registered batch as part of the canonical chain.
    pub fn mark_canonical(&mut self, batch_hash: B256) {
        self.canonical.insert(batch_hash);
    }

    /// Materializes a record for a blob commitment.
    pub fn record_commitment(&mut self, record: CommitmentRecord) {
        self.commitments.insert(record.commitment, record);
    }

    /// The materialized view for a commitment; the zeroed absent sentinel
    /// when nothing was ever recorded.
    pub fn commitment_of(&self, commitment: B256) -> CommitmentRecord {
        self.commitments
            .get(&commitment)
            .copied()
            .unwrap_or_else(CommitmentRecord::absent)
    }
}

impl BatchRegistry for InMemoryBatchRegistry {
    fn height_of(&self, index_blob_hash: B256) -> Option<u64> {
        self.heights.get(&index_blob_hash).copied()
    }

    fn is_canonical(&self, batch_hash: B256) -> bool {
        self.canonical.contains(&batch_hash)
    }

    fn header_of(&self, batch_hash: B256) -> Option<BatchHeader> {
        self.headers.get(&batch_hash).copied()
    }
}
