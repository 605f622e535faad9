//! Order-by index scan pass - leverages indexes to avoid explicit sorting.
//!
//! This pass identifies Sort nodes over a full table scan where the sort key
//! columns match an index's key columns exactly, and replaces the whole
//! Sort + SeqScan subtree with an IndexScan that yields rows already in the
//! desired order.
//!
//! Example:
//! ```text
//! Sort(id ASC)             =>    IndexScan(idx_id)
//!      |                              |
//! SeqScan(users)                 (no Sort needed)
//! ```
//!
//! The rewrite applies only when:
//! 1. Every sort key is ascending (or direction-less, which sorts ascending)
//! 2. Every sort key is a plain column reference
//! 3. The sole child of the Sort is a full table scan
//! 4. Some index on the table has key columns equal to the sort key ordinals,
//!    same order and same count
//!
//! When several indexes qualify, the first one in catalog enumeration order
//! wins.

use crate::ast::{Expr, SortDirection};
use crate::catalog::{Catalog, IndexId, TableId};
use crate::optimizer::pass::OptimizerPass;
use crate::plan::{PlanKind, PlanNode};
use alloc::vec::Vec;

/// Pass that replaces Sort over a full scan with a scan through a matching
/// index.
pub struct OrderByIndexScan<'a> {
    catalog: &'a Catalog,
}

impl<'a> OrderByIndexScan<'a> {
    /// Creates a new OrderByIndexScan pass over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Rewrites the plan bottom-up, replacing every matching Sort + SeqScan
    /// subtree with an IndexScan.
    ///
    /// Nodes that don't match are still rebuilt with their rewritten
    /// children, so a match anywhere in the tree is never blocked by a
    /// mismatch above or below it.
    pub fn rewrite(&self, plan: PlanNode) -> PlanNode {
        let (kind, children, schema) = plan.into_parts();
        let children: Vec<PlanNode> = children.into_iter().map(|c| self.rewrite(c)).collect();
        let optimized = PlanNode::from_parts(kind, children, schema);

        let key_columns = match optimized.kind() {
            PlanKind::Sort { order_by } => match sort_key_columns(order_by) {
                Some(columns) => columns,
                // Descending or non-column key: keep the Sort.
                None => return optimized,
            },
            _ => return optimized,
        };

        // Invariant of the plan model; a violation means an upstream stage
        // produced a malformed tree.
        assert_eq!(
            optimized.children().len(),
            1,
            "Sort node must have exactly one child"
        );

        let replacement = match optimized.children()[0].kind() {
            PlanKind::SeqScan { table } => self
                .find_matching_index(*table, &key_columns)
                .map(|index| PlanNode::index_scan(optimized.schema().clone(), *table, index)),
            _ => None,
        };

        replacement.unwrap_or(optimized)
    }

    /// Finds the first index on `table` whose key-attribute ordinals equal
    /// `key_columns` exactly, in catalog enumeration order.
    fn find_matching_index(&self, table: TableId, key_columns: &[usize]) -> Option<IndexId> {
        let meta = self.catalog.table(table)?;
        meta.indexes()
            .iter()
            .find(|index| index.key_attrs() == key_columns)
            .map(|index| index.id())
    }
}

/// Extracts the column ordinals of the sort keys, in key order.
///
/// Returns None if any key is descending or is not a plain column reference.
/// Duplicate ordinals are kept; the index comparison is over the exact
/// sequence.
fn sort_key_columns(order_by: &[(SortDirection, Expr)]) -> Option<Vec<usize>> {
    let mut columns = Vec::with_capacity(order_by.len());
    for (direction, expr) in order_by {
        if !direction.is_ascending() {
            return None;
        }
        let col_ref = expr.as_column()?;
        columns.push(col_ref.index);
    }
    Some(columns)
}

impl OptimizerPass for OrderByIndexScan<'_> {
    fn optimize(&self, plan: PlanNode) -> PlanNode {
        self.rewrite(plan)
    }

    fn name(&self) -> &'static str {
        "order_by_index_scan"
    }
}
