//! Factoring run configuration.

use serde::{Deserialize, Serialize};

use qafactor_embed::{DEFAULT_DELAY_BASE, OffsetStrategy, SearchBounds};

use crate::decode::ChainBreakPolicy;

/// Default number of anneals per factoring request.
pub const DEFAULT_NUM_READS: u32 = 1000;

/// Settings of a [`Factorer`](crate::Factorer).
///
/// Every field has a default, so a partial YAML or JSON document is
/// enough:
///
/// ```yaml
/// num_reads: 500
/// offset_strategy: zeroed
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoringConfig {
    /// Anneals per request.
    pub num_reads: u32,
    /// Base of the chain delay function.
    pub delay_base: f64,
    /// How ideal advances are fitted into the offset ranges.
    pub offset_strategy: OffsetStrategy,
    /// What to do with reads whose chains disagree.
    pub chain_break: ChainBreakPolicy,
    /// Score placement candidates on the rayon pool.
    pub parallel_search: bool,
    /// Translation bounds; derived from the device shape when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_bounds: Option<SearchBounds>,
}

impl Default for FactoringConfig {
    fn default() -> Self {
        Self {
            num_reads: DEFAULT_NUM_READS,
            delay_base: DEFAULT_DELAY_BASE,
            offset_strategy: OffsetStrategy::Full,
            chain_break: ChainBreakPolicy::Discard,
            parallel_search: true,
            search_bounds: None,
        }
    }
}

impl FactoringConfig {
    /// Set the number of reads.
    pub fn with_num_reads(mut self, num_reads: u32) -> Self {
        self.num_reads = num_reads;
        self
    }

    /// Set the offset fitting strategy.
    pub fn with_offset_strategy(mut self, strategy: OffsetStrategy) -> Self {
        self.offset_strategy = strategy;
        self
    }

    /// Set the chain break policy.
    pub fn with_chain_break(mut self, policy: ChainBreakPolicy) -> Self {
        self.chain_break = policy;
        self
    }

    /// Set the translation bounds.
    pub fn with_search_bounds(mut self, bounds: SearchBounds) -> Self {
        self.search_bounds = Some(bounds);
        self
    }
}
