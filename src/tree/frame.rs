//! Frame payload definitions for call-tree nodes.
//!
//! These types are the external data contract: an upstream profile parser
//! fills them in, the filter carries them through untouched, and the
//! renderer/tooltip layer reads them back out. The filter itself never
//! inspects a frame; only skip predicates do.

use serde::{Deserialize, Serialize};

/// Identity and metadata of a single executing unit (one stack entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Symbol or function name as resolved by the profiler
    pub name: String,

    /// Whether this frame belongs to application code (as opposed to
    /// system/library code). The most common skip predicate keys on this.
    pub is_application: bool,

    /// Source location hint (if debug symbols available)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source_hint: Option<SourceHint>,
}

impl Frame {
    /// Create a frame with an explicit application flag
    pub fn new(name: impl Into<String>, is_application: bool) -> Self {
        Self {
            name: name.into(),
            is_application,
            source_hint: None,
        }
    }

    /// Shorthand for an application frame
    pub fn application(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Shorthand for a system/library frame
    pub fn system(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Attach a source location hint
    pub fn with_source_hint(mut self, hint: SourceHint) -> Self {
        self.source_hint = Some(hint);
        self
    }
}

/// Source code location hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHint {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

/// Precomputed subtree weights for a call-tree node
///
/// Weights are established by the upstream aggregation stage. Filtering
/// never recomputes them; a caller that wants totals adjusted after hiding
/// frames must re-derive the forest from source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Total weight of the subtree rooted at this node (e.g. sampled time)
    pub total_weight: u64,

    /// Weight attributed to this node alone, excluding children
    pub self_weight: u64,
}

impl Aggregate {
    pub fn new(total_weight: u64, self_weight: u64) -> Self {
        Self {
            total_weight,
            self_weight,
        }
    }
}
