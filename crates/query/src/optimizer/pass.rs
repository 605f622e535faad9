//! Optimizer pass trait.

use crate::plan::PlanNode;

/// An optimization pass that rewrites a plan tree.
pub trait OptimizerPass {
    /// Rewrites the given plan.
    fn optimize(&self, plan: PlanNode) -> PlanNode;

    /// Returns the name of this pass.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
