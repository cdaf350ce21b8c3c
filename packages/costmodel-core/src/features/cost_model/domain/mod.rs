//! Domain models for the kernel cost model
//!
//! Pure data with no evaluation logic. Costs are in abstract cycle units.

use crate::error::{CostModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smallest unroll factor the unroll table covers
pub const MIN_UNROLL: u32 = 1;

/// Largest unroll factor the unroll table covers
pub const MAX_UNROLL: u32 = 10;

const UNROLL_SLOTS: usize = (MAX_UNROLL - MIN_UNROLL + 1) as usize;

// ============================================================================
// Call-cost table
// ============================================================================

/// Per-invocation cost of external calls, keyed by call name
///
/// Supplied by the caller. Every call the model looks up must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallCostTable {
    costs: HashMap<String, f64>,
}

impl CallCostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, call: impl Into<String>, cycles: f64) -> Self {
        self.insert(call, cycles);
        self
    }

    pub fn insert(&mut self, call: impl Into<String>, cycles: f64) -> Option<f64> {
        self.costs.insert(call.into(), cycles)
    }

    /// Look up a call cost, failing with `MissingCallCost` when absent
    pub fn cost(&self, call: &str) -> Result<f64> {
        self.costs
            .get(call)
            .copied()
            .ok_or_else(|| CostModelError::missing_call_cost(call))
    }

    /// First call in `required` that has no entry
    pub fn missing<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required
            .iter()
            .copied()
            .find(|call| !self.costs.contains_key(*call))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CallCostTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Unroll-cost table
// ============================================================================

/// Cost of the unrolled inner segment, keyed by unroll factor (1..=10)
///
/// The looked-up value is the cost of one execution of the unrolled body;
/// it is amortized over the unroll factor by [`UnrollCostTable::segment_cost`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnrollCostTable {
    values: [f64; UNROLL_SLOTS],
}

impl UnrollCostTable {
    pub fn new(values: [f64; UNROLL_SLOTS]) -> Self {
        Self { values }
    }

    /// Segment 0 of loop 1.1 in the seqbaij kernel: no memory-op cycles at
    /// any unroll factor.
    pub fn seqbaij() -> Self {
        Self::new([0.0; UNROLL_SLOTS])
    }

    /// Raw table entry for `unroll`
    pub fn lookup(&self, unroll: u32) -> Result<f64> {
        if !(MIN_UNROLL..=MAX_UNROLL).contains(&unroll) {
            return Err(CostModelError::InvalidUnroll {
                value: unroll,
                min: MIN_UNROLL,
                max: MAX_UNROLL,
            });
        }
        Ok(self.values[(unroll - MIN_UNROLL) as usize])
    }

    /// Per-iteration segment cost: `table[unroll] / unroll`
    pub fn segment_cost(&self, unroll: u32) -> Result<f64> {
        Ok(self.lookup(unroll)? / f64::from(unroll))
    }

    /// Unroll factors covered by the table, ascending
    pub fn factors() -> impl Iterator<Item = u32> + Clone {
        MIN_UNROLL..=MAX_UNROLL
    }
}

impl Default for UnrollCostTable {
    fn default() -> Self {
        Self::seqbaij()
    }
}

// ============================================================================
// Block weights
// ============================================================================

/// Fixed cycle weights of structural basic-block regions
///
/// These are the costs not attributable to external calls or to the unrolled
/// segment. All zero for the seqbaij kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockWeights {
    /// Model prologue blocks, interleaved with the two setup calls
    pub model_entry: [f64; 3],
    /// Model epilogue blocks, interleaved with the two teardown calls
    pub model_exit: [f64; 3],
    /// Outer loop entry path
    pub loop_entry: f64,
    /// Outer loop exit path
    pub loop_exit: f64,
}

impl BlockWeights {
    pub fn weight(&self, region: CostRegion) -> f64 {
        match region {
            CostRegion::ModelEntry(i) => self.model_entry[usize::from(i.min(2))],
            CostRegion::ModelExit(i) => self.model_exit[usize::from(i.min(2))],
            CostRegion::LoopEntry => self.loop_entry,
            CostRegion::LoopExit => self.loop_exit,
            // Segment cost lives in the unroll table
            CostRegion::InnerSegment => 0.0,
        }
    }
}

// ============================================================================
// Regions
// ============================================================================

/// Structural region of the kernel's control-flow graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostRegion {
    /// Prologue block group 0..=2
    ModelEntry(u8),
    /// Epilogue block group 0..=2
    ModelExit(u8),
    /// Outer loop entry
    LoopEntry,
    /// Outer loop exit
    LoopExit,
    /// Unrolled inner-loop segment
    InnerSegment,
}

impl CostRegion {
    /// All regions in control-flow order
    pub const ALL: [CostRegion; 9] = [
        CostRegion::ModelEntry(0),
        CostRegion::ModelEntry(1),
        CostRegion::ModelEntry(2),
        CostRegion::LoopEntry,
        CostRegion::InnerSegment,
        CostRegion::LoopExit,
        CostRegion::ModelExit(0),
        CostRegion::ModelExit(1),
        CostRegion::ModelExit(2),
    ];

    /// Basic-block chain the region covers in the analysed binary
    pub fn block_path(&self) -> &'static str {
        match self {
            Self::ModelEntry(0) => "0",
            Self::ModelEntry(1) => "1->4",
            Self::ModelEntry(_) => "5->8->12->13->14",
            Self::LoopEntry => "15->16->17->18->19->20",
            Self::InnerSegment => "21",
            Self::LoopExit => "22->24->26->27",
            Self::ModelExit(0) => "28",
            Self::ModelExit(1) => "29->32",
            Self::ModelExit(_) => "33->36->37",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelEntry(0) => "base_entry_0",
            Self::ModelEntry(1) => "base_entry_1",
            Self::ModelEntry(_) => "base_entry_2",
            Self::LoopEntry => "loop1_entry",
            Self::InnerSegment => "loop1_1_seg_0",
            Self::LoopExit => "loop1_exit",
            Self::ModelExit(0) => "base_exit_0",
            Self::ModelExit(1) => "base_exit_1",
            Self::ModelExit(_) => "base_exit_2",
        }
    }
}

impl std::fmt::Display for CostRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.as_str(), self.block_path())
    }
}

// ============================================================================
// Result
// ============================================================================

/// Every named intermediate of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// `unroll_table[unroll] / unroll`
    pub segment_cost: f64,
    /// Inner loop body output (equals `segment_cost` for this kernel)
    pub inner_loop_output: f64,
    /// `loop1_1_its * inner_loop_output`
    pub inner_loop_total: f64,
    /// Loop entry + inner loop total + loop exit
    pub outer_loop_body: f64,
    /// Outer loop exit output (equals `outer_loop_body` for this kernel)
    pub outer_loop_output: f64,
    /// `loop1_its * outer_loop_body + outer_loop_output`
    pub outer_loop_total: f64,
    /// Entry block weights + setup call costs
    pub prologue: f64,
    /// Exit block weights + teardown call costs
    pub epilogue: f64,
    /// `prologue + outer_loop_total + epilogue`
    pub total: f64,
}

impl CostBreakdown {
    /// Fraction of the total spent in external setup/teardown calls and
    /// structural prologue/epilogue blocks. Zero when the total is zero.
    pub fn boundary_share(&self) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        (self.prologue + self.epilogue) / self.total
    }
}

/// Estimated cost at one unroll factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnrollEstimate {
    pub unroll: u32,
    pub cost: f64,
}
