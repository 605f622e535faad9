//! Expression AST definitions.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use oryx_core::Value;

/// Reference to a column in the input tuple.
///
/// The ordinal `index` into the input schema is what identifies the column;
/// the name is carried for diagnostics only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Column name.
    pub name: String,
    /// Column index in the input schema (0-based).
    pub index: usize,
}

impl ColumnRef {
    /// Creates a new column reference.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

/// Sort direction for an ORDER BY key.
///
/// `Default` is the direction an ORDER BY key gets when the query does not
/// spell one out; it sorts ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Default,
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns whether this direction sorts ascending.
    ///
    /// `Default` counts as ascending.
    #[inline]
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Default | SortDirection::Asc)
    }
}

/// Expression AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Column reference.
    Column(ColumnRef),
    /// Literal value.
    Literal(Value),
    /// Binary operation.
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Function call.
    Function { name: String, args: Vec<Expr> },
}

impl Expr {
    /// Creates a column reference expression.
    pub fn column(name: impl Into<String>, index: usize) -> Self {
        Expr::Column(ColumnRef::new(name, index))
    }

    /// Creates a literal expression.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// Creates an equality expression.
    pub fn eq(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Eq, right)
    }

    /// Creates a greater-than expression.
    pub fn gt(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Gt, right)
    }

    /// Creates an addition expression.
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Add, right)
    }

    /// Creates a binary operation expression.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a function call expression.
    pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Function {
            name: name.into(),
            args,
        }
    }

    /// Returns the column reference if this expression is exactly a plain
    /// column reference, None for every other expression kind.
    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Expr::Column(col_ref) => Some(col_ref),
            _ => None,
        }
    }

    /// Returns whether this expression is a plain column reference.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.as_column().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_column() {
        let col = Expr::column("id", 0);
        assert_eq!(col.as_column().map(|c| c.index), Some(0));

        let lit = Expr::literal(1i64);
        assert!(lit.as_column().is_none());

        let sum = Expr::add(Expr::column("id", 0), Expr::literal(1i64));
        assert!(!sum.is_column());

        let call = Expr::function("lower", alloc::vec![Expr::column("name", 1)]);
        assert!(call.as_column().is_none());
    }

    #[test]
    fn test_sort_direction_default_is_ascending() {
        assert!(SortDirection::Default.is_ascending());
        assert!(SortDirection::Asc.is_ascending());
        assert!(!SortDirection::Desc.is_ascending());
        assert_eq!(SortDirection::default(), SortDirection::Default);
    }
}
