//! This crate parses and combines mathematical intervals written in interval
//! notation, where an outward bracket means the bound is excluded:
//!
//!  |Text     |Description
//!  |---------|------------------------------
//!  | `[A,B]` |left-closed, right-closed
//!  | `[A,B[` |left-closed, right-open
//!  | `]A,B]` |left-open, right-closed
//!  | `]A,B[` |left-open, right-open
//!  | `[A,A]` |the single value A
//!  | `]0,0[` |empty
//!
//! Intervals can be combined into expressions with `or` (union) and `and`
//! (intersection), evaluated from left to right, and grouped with
//! parenthesis:
//! ```text
//!    [1,5] or [3,9] and (]10,20] or [0,1])
//! ```
//!
//! An [`Interval`] is in the integer domain (`[1,2]`) unless one of its
//! bounds was written with decimals (`[1.0,2]`), or it was combined with
//! such an interval.  In the integer domain, fractional values are never
//! contained in the interval.
//!
//! The union of two intervals is not always an interval:
//! ```text
//!      [---A---]   [----B----]
//!                                 Intersection (A & B) is empty
//!                                 Union is two intervals
//! ```
//! so an [`IntervalCollection`] is used to store the result of an expression,
//! as a set of disjoint intervals:
//! ```
//!    use intervals_lib::IntervalCollection;
//!    let c = IntervalCollection::parse("[1,5] or [8,9] or [3,6]").unwrap();
//!    assert_eq!(c.to_string(), "[1,6] or [8,9]");
//!    assert!(c.contains(8.0));
//!    assert!(!c.contains(7.0));
//! ```

pub mod collections;
pub mod errors;
pub mod intervals;
pub mod parser;

mod bounds;
mod numbers;

pub use crate::collections::{IntervalCollection, IntoCollection};
pub use crate::errors::{IntervalError, Result};
pub use crate::intervals::Interval;
