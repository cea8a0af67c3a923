//! # Memo Cells
//!
//! Write-once cache slots backing each lazily fetched group of a
//! [`Compound`](crate::Compound).
//!
//! ## Design Principles
//!
//! - A slot moves from unpopulated to populated exactly once and never back.
//! - A failed fetch stores nothing; the next read fetches again.
//! - Concurrent readers of an unpopulated slot block on a single fetch
//!   (`once_cell::sync::OnceCell::get_or_try_init`).
//! - Statistics are integer counters only.

use crate::Result;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// SLOT KINDS
// =============================================================================

/// Independently memoized groups of a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    BasicInfo,
    ExtendedInfo,
    Mol2d,
    Mol3d,
    Thumbnail,
}

impl Slot {
    /// All slots, in declaration order.
    pub const ALL: [Slot; 5] = [
        Slot::BasicInfo,
        Slot::ExtendedInfo,
        Slot::Mol2d,
        Slot::Mol3d,
        Slot::Thumbnail,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::ExtendedInfo => "extended_info",
            Self::Mol2d => "mol_2d",
            Self::Mol3d => "mol_3d",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MEMO CELL
// =============================================================================

/// A single write-once slot.
pub struct MemoCell<T> {
    cell: OnceCell<T>,
}

impl<T> Default for MemoCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoCell<T> {
    /// Create an unpopulated slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Create a slot that is already populated.
    #[must_use]
    pub fn seeded(value: T) -> Self {
        Self {
            cell: OnceCell::with_value(value),
        }
    }

    /// Cached value, without fetching.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.cell.get()
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached value, or run `fetch` and cache its result.
    ///
    /// `fetch` runs at most once across all successful calls. Its error is
    /// returned as is and leaves the slot unpopulated.
    pub fn get_or_fetch<F>(&self, counters: &CacheCounters, fetch: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.cell.get() {
            counters.hit();
            return Ok(value);
        }

        let mut fetched = false;
        let value = self.cell.get_or_try_init(|| {
            fetched = true;
            counters.miss();
            fetch()
        })?;
        // Another thread filled the slot while we waited.
        if !fetched {
            counters.hit();
        }
        Ok(value)
    }
}

impl<T> fmt::Debug for MemoCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCell")
            .field("populated", &self.is_populated())
            .finish()
    }
}

// =============================================================================
// COUNTERS
// =============================================================================

/// Hit/miss counters shared by all slots of one compound.
#[derive(Debug, Default)]
pub struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters together with slot occupancy.
    #[must_use]
    pub fn stats(&self, populated: usize, slots: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        CacheStats {
            populated,
            slots,
            hits,
            misses,
            hit_rate_percent: hit_rate_percent(hits, misses),
        }
    }
}

/// Calculate hit rate as integer percentage (0-100).
fn hit_rate_percent(hits: u64, misses: u64) -> u8 {
    let total = hits.saturating_add(misses);
    if total == 0 {
        0
    } else {
        ((hits.saturating_mul(100)) / total) as u8
    }
}

// =============================================================================
// CACHE STATISTICS
// =============================================================================

/// Statistics about cache usage of one compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Slots currently populated.
    pub populated: usize,

    /// Total number of slots.
    pub slots: usize,

    /// Reads served from a populated slot.
    pub hits: u64,

    /// Delegations to the client, failed ones included.
    pub misses: u64,

    /// Hit rate as integer percentage (0-100).
    pub hit_rate_percent: u8,
}

// =============================================================================
// TESTS
// =============================================================================
