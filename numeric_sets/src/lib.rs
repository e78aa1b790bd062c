//! Sets of numeric values, represented as lists of intervals.
//!
//! An [`Interval`] has independent bounds, each of them open or closed:
//!
//!  |Interval|Description
//!  |--------|--------------------------
//!  | `[A,B]`|start-closed, end-closed
//!  | `[A,B)`|start-closed, end-open
//!  | `(A,B)`|start-open, end-open
//!  | `(A,B]`|start-open, end-closed
//!
//! A [`NumericSet`] is a normalized list of such intervals, and supports the
//! usual set operations:
//!
//! ```text
//!     A      [------]    (----]       [---)
//!     B           (---------)      [--------]
//!
//!     A | B  [----------------]    [--------]     union
//!     A & B       (-]    (--)         [---)       intersection
//!     A - B  [----]         [-]                   difference
//!     A ^ B  [----] (----]  [-]    [--)   [-]     symmetric difference
//! ```
//!
//! Any type that is `PartialOrd + Copy` can be used for the bounds.  Values
//! are seen as points on a continuum, so `(1, 2)` and `(2, 3)` remain two
//! separate intervals (2 is in neither), while `(1, 2]` and `(2, 3)` are
//! merged into `(1, 3)`.
//!
//! ```
//! use numeric_sets::{Interval, NumericSet};
//!
//! let mut set = NumericSet::new();
//! set.add("(0, 2]".parse::<Interval<f64>>()?);
//! set.add("[5, 6)".parse()?);
//! set.remove("[1, 5.5)".parse()?);
//! assert_eq!(set.to_string(), "{(0, 1), [5.5, 6)}");
//! # Ok::<(), numeric_sets::Error>(())
//! ```

pub mod errors;
pub mod formats;
pub mod intervals;
pub mod numeric_sets;

pub use crate::errors::{Error, Result};
pub use crate::intervals::Interval;
pub use crate::numeric_sets::NumericSet;
