//! Query plan node model.

mod node;

pub use node::{PlanKind, PlanNode};
