use blockscope_domain::{BlocklistSnapshot, Owner, OwnerCounts};
use std::net::IpAddr;
use tracing::{debug, instrument};

/// Result of checking one owner against one snapshot.
#[derive(Debug, Clone)]
pub struct OwnerEvaluation {
    /// Distinct matched addresses, ascending.
    pub matched: Vec<IpAddr>,
    pub counts: OwnerCounts,
}

/// Reconciles a blocklist snapshot with an owner's ranges.
///
/// Cost is O(|snapshot| × |ranges|) per owner. Totals come from range sizes,
/// so not-blocked addresses are never enumerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipEvaluator;

impl MembershipEvaluator {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(owner = %owner.code))]
    pub fn evaluate(&self, owner: &Owner, snapshot: &BlocklistSnapshot) -> OwnerEvaluation {
        // Snapshot addresses are unique and ordered, so `matched` is too.
        let matched: Vec<IpAddr> = snapshot
            .addresses()
            .filter(|ip| owner.owns(**ip))
            .copied()
            .collect();

        let counts = OwnerCounts::new(
            owner.code.clone(),
            owner.total_addresses(),
            matched.len() as u128,
        );

        debug!(
            ranges = owner.ranges.len(),
            candidates = snapshot.len(),
            blocked = %counts.blocked_count,
            total = %counts.total_addresses,
            "Owner evaluated"
        );

        OwnerEvaluation { matched, counts }
    }
}
