//! Query plan node definitions.
//!
//! A plan is an immutable tree of [`PlanNode`]s. Each node pairs a
//! [`PlanKind`] (the operator tag with its kind-specific attributes) with an
//! ordered child list and an output schema. Rewrites produce new trees rather
//! than mutating in place; [`PlanNode::into_parts`] and
//! [`PlanNode::from_parts`] let a pass rebuild any node with a replaced child
//! list while preserving its kind and schema.

use crate::ast::{Expr, SortDirection};
use crate::catalog::{IndexId, TableId};
use alloc::vec::Vec;
use oryx_core::schema::Schema;

/// Operator kind of a plan node, with kind-specific attributes.
///
/// Children are not stored here; they live on [`PlanNode`] so that generic
/// tree rewrites can replace them without knowing the kind.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanKind {
    /// Full table scan.
    SeqScan { table: TableId },

    /// Scan through an index, yielding rows in index-key order.
    IndexScan { table: TableId, index: IndexId },

    /// Filter (WHERE clause).
    Filter { predicate: Expr },

    /// Projection (SELECT expressions).
    Projection { exprs: Vec<Expr> },

    /// Sort (ORDER BY). The keys are (direction, expression) pairs in
    /// significance order.
    Sort {
        order_by: Vec<(SortDirection, Expr)>,
    },

    /// Limit and offset.
    Limit { limit: usize, offset: usize },

    /// Nested loop join.
    NestedLoopJoin { predicate: Expr },
}

/// A node in a query plan tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanNode {
    kind: PlanKind,
    children: Vec<PlanNode>,
    schema: Schema,
}

impl PlanNode {
    /// Creates a full table scan node.
    pub fn seq_scan(schema: Schema, table: TableId) -> Self {
        Self {
            kind: PlanKind::SeqScan { table },
            children: Vec::new(),
            schema,
        }
    }

    /// Creates an index scan node.
    pub fn index_scan(schema: Schema, table: TableId, index: IndexId) -> Self {
        Self {
            kind: PlanKind::IndexScan { table, index },
            children: Vec::new(),
            schema,
        }
    }

    /// Creates a filter node.
    pub fn filter(schema: Schema, predicate: Expr, input: PlanNode) -> Self {
        Self {
            kind: PlanKind::Filter { predicate },
            children: alloc::vec![input],
            schema,
        }
    }

    /// Creates a projection node.
    pub fn projection(schema: Schema, exprs: Vec<Expr>, input: PlanNode) -> Self {
        Self {
            kind: PlanKind::Projection { exprs },
            children: alloc::vec![input],
            schema,
        }
    }

    /// Creates a sort node.
    pub fn sort(schema: Schema, order_by: Vec<(SortDirection, Expr)>, input: PlanNode) -> Self {
        Self {
            kind: PlanKind::Sort { order_by },
            children: alloc::vec![input],
            schema,
        }
    }

    /// Creates a limit node.
    pub fn limit(schema: Schema, limit: usize, offset: usize, input: PlanNode) -> Self {
        Self {
            kind: PlanKind::Limit { limit, offset },
            children: alloc::vec![input],
            schema,
        }
    }

    /// Creates a nested loop join node.
    pub fn nested_loop_join(
        schema: Schema,
        predicate: Expr,
        left: PlanNode,
        right: PlanNode,
    ) -> Self {
        Self {
            kind: PlanKind::NestedLoopJoin { predicate },
            children: alloc::vec![left, right],
            schema,
        }
    }

    /// Returns the operator kind of this node.
    #[inline]
    pub fn kind(&self) -> &PlanKind {
        &self.kind
    }

    /// Returns the children of this node, in order.
    #[inline]
    pub fn children(&self) -> &[PlanNode] {
        &self.children
    }

    /// Returns the output schema of this node.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Decomposes this node into its kind, children and schema.
    pub fn into_parts(self) -> (PlanKind, Vec<PlanNode>, Schema) {
        (self.kind, self.children, self.schema)
    }

    /// Reassembles a node from its parts.
    ///
    /// Together with [`PlanNode::into_parts`] this is the "clone with new
    /// children" operation: the kind-specific attributes and schema are
    /// preserved while the child list is replaced.
    pub fn from_parts(kind: PlanKind, children: Vec<PlanNode>, schema: Schema) -> Self {
        Self {
            kind,
            children,
            schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use oryx_core::schema::Column;
    use oryx_core::DataType;

    fn test_schema() -> Schema {
        Schema::new(vec![
            Column::new("id", DataType::Int64),
            Column::new("name", DataType::String),
        ])
    }

    #[test]
    fn test_plan_builders() {
        let scan = PlanNode::seq_scan(test_schema(), 0);
        assert!(matches!(scan.kind(), PlanKind::SeqScan { table: 0 }));
        assert!(scan.children().is_empty());

        let sort = PlanNode::sort(
            test_schema(),
            vec![(SortDirection::Asc, Expr::column("id", 0))],
            scan,
        );
        assert!(matches!(sort.kind(), PlanKind::Sort { .. }));
        assert_eq!(sort.children().len(), 1);
        assert_eq!(sort.schema(), &test_schema());
    }

    #[test]
    fn test_from_parts_replaces_children_only() {
        let scan = PlanNode::seq_scan(test_schema(), 0);
        let filter = PlanNode::filter(
            test_schema(),
            Expr::gt(Expr::column("id", 0), Expr::literal(10i64)),
            scan,
        );

        let (kind, _children, schema) = filter.into_parts();
        let replacement = PlanNode::index_scan(test_schema(), 0, 0);
        let rebuilt = PlanNode::from_parts(kind, vec![replacement], schema);

        assert!(matches!(rebuilt.kind(), PlanKind::Filter { .. }));
        assert!(matches!(
            rebuilt.children()[0].kind(),
            PlanKind::IndexScan { .. }
        ));
        assert_eq!(rebuilt.schema(), &test_schema());
    }

    #[test]
    fn test_join_has_two_children() {
        let left = PlanNode::seq_scan(test_schema(), 0);
        let right = PlanNode::seq_scan(test_schema(), 1);
        let join = PlanNode::nested_loop_join(
            test_schema(),
            Expr::eq(Expr::column("id", 0), Expr::column("id", 0)),
            left,
            right,
        );
        assert_eq!(join.children().len(), 2);
    }
}
