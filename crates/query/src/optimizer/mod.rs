//! Query optimizer module.

mod order_by_index_scan;
mod pass;

pub use order_by_index_scan::OrderByIndexScan;
pub use pass::OptimizerPass;

use crate::catalog::Catalog;
use crate::plan::PlanNode;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Query optimizer that applies rewrite passes in order.
pub struct Optimizer<'a> {
    passes: Vec<Box<dyn OptimizerPass + 'a>>,
}

impl<'a> Optimizer<'a> {
    /// Creates a new optimizer with the default passes.
    ///
    /// The default pass list is:
    /// 1. OrderByIndexScan - Replace Sort over a full scan with a scan
    ///    through a matching index
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            passes: alloc::vec![Box::new(OrderByIndexScan::new(catalog))],
        }
    }

    /// Creates an optimizer with custom passes.
    pub fn with_passes(passes: Vec<Box<dyn OptimizerPass + 'a>>) -> Self {
        Self { passes }
    }

    /// Optimizes a plan by applying every pass in order.
    pub fn optimize(&self, mut plan: PlanNode) -> PlanNode {
        for pass in &self.passes {
            plan = pass.optimize(plan);
        }
        plan
    }
}
