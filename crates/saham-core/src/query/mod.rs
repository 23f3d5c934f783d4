//! Query language for screening records.
//!
//! A query is a conjunction of comparison conditions over numeric columns,
//! written as `PER < 12 AND ROE % > 15`. There is no disjunction, grouping
//! or nesting. Parsing is lenient: fragments that do not form a valid
//! condition are dropped from the conjunction rather than failing the query.

mod alias;
mod ast;
mod error;
mod parser;

pub use alias::AliasTable;
pub use ast::{CompareOp, Condition, Query, EQ_EPSILON};
pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
