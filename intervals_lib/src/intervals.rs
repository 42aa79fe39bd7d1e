use crate::bounds::Bound;
use crate::collections::IntervalCollection;
use crate::errors::{IntervalError, Result};
use crate::numbers::{canonical, format_number, is_whole, read_number};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A bounded interval of real numbers, like `[1,2]`, `]1,2]`, `[1.5,2[`...
///
/// The interval also records its domain: whether it was written with
/// fractional numbers (or combined with an interval that was).  The domain
/// changes how bounds are printed (`[1,2]` vs `[1.0,2.0]`) and whether
/// fractional values are accepted by [`Interval::contains()`].
///
/// There is a single representation for the empty interval, which displays
/// as `]0,0[` (or `]0.0,0.0[` in the float domain).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct Interval {
    lower: Bound,
    upper: Bound,
    allows_float: bool,
}

impl Interval {
    /// Returns the empty interval.
    #[must_use]
    pub fn empty(allows_float: bool) -> Self {
        Self {
            lower: Bound::lower(0.0, false),
            upper: Bound::upper(0.0, false),
            allows_float,
        }
    }

    /// Builds an interval, collapsing it to the canonical empty interval when
    /// no value lies between the two bounds.
    fn from_bounds(lower: Bound, upper: Bound, allows_float: bool) -> Self {
        if upper <= lower {
            Self::empty(allows_float)
        } else {
            Self {
                lower,
                upper,
                allows_float,
            }
        }
    }

    /// Parses an interval.
    ///
    /// Besides plain literals like `[1,2]`, any compound expression accepted
    /// by [`IntervalCollection::parse()`] is allowed, as long as it reduces
    /// to a single interval:
    /// ```
    ///    use intervals_lib::Interval;
    ///    let intv = Interval::parse("[1,5] or ]3,9[").unwrap();
    ///    assert_eq!(intv.to_string(), "[1,9[");
    ///    assert!(Interval::parse("[1,2] or [3,4]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let collection = IntervalCollection::parse(text)?;
        let first = collection.iter().next().copied();
        match (collection.count(), first) {
            (1, Some(intv)) => Ok(intv),
            _ => Err(IntervalError::NotAnInterval(text.to_string())),
        }
    }

    /// Builds an interval from the pieces of a literal that already matched
    /// the grammar.  `text` is the whole literal, for error messages.
    pub(crate) fn from_literal(
        text: &str,
        lower_inclusive: bool,
        lower: &str,
        upper: &str,
        upper_inclusive: bool,
    ) -> Result<Self> {
        let (lower, lower_fraction) = read_number(lower, text)?;
        let (upper, upper_fraction) = read_number(upper, text)?;
        if lower > upper {
            return Err(IntervalError::InvalidBounds(text.to_string()));
        }

        // [1,1] is a valid interval containing only 1.  ]1,1], [1,1[ and
        // ]1,1[ are all empty.
        Ok(Self::from_bounds(
            Bound::lower(lower, lower_inclusive),
            Bound::upper(upper, upper_inclusive),
            lower_fraction || upper_fraction,
        ))
    }

    /// The lower bound (0 for an empty interval)
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower.point
    }

    /// Whether the lower bound is part of the interval.
    /// Returns false for an empty interval.
    #[must_use]
    pub fn lower_inclusive(&self) -> bool {
        self.lower == Bound::lower(self.lower.point, true)
    }

    /// The upper bound (0 for an empty interval)
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper.point
    }

    /// Whether the upper bound is part of the interval.
    /// Returns false for an empty interval.
    #[must_use]
    pub fn upper_inclusive(&self) -> bool {
        self.upper == Bound::upper(self.upper.point, true)
    }

    /// Whether the interval is in the float domain
    #[must_use]
    pub fn allows_float(&self) -> bool {
        self.allows_float
    }

    /// True if the interval contains no value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }

    /// True if self is of the form `[A,A]`
    #[must_use]
    pub fn is_single(&self) -> bool {
        !self.is_empty() && self.lower.point == self.upper.point
    }

    /// Returns a copy of self, moved to the float domain if `allows_float`.
    #[must_use]
    pub(crate) fn widen(&self, allows_float: bool) -> Self {
        Self {
            allows_float: self.allows_float || allows_float,
            ..*self
        }
    }

    /// Whether value is contained in the interval.
    /// An interval in the integer domain never contains fractional values.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        !self.is_empty()
            && (self.allows_float || is_whole(value))
            && self.lower.left_of(value)
            && self.upper.right_of(value)
    }

    /// Same as [`Interval::contains()`], for a value given as text.  Returns
    /// false when the text is not a number.
    #[must_use]
    pub fn contains_str(&self, value: &str) -> bool {
        value
            .trim()
            .parse::<f64>()
            .is_ok_and(|v| self.contains(v))
    }

    /// If neither interval is empty, returns true if no value lies between
    /// them, so that they can be merged.  True if either of them is empty.
    ///
    /// ```text
    ///     [1,3]  [3,6]    contiguous  (3 in both)
    ///     [1,3[  [3,6]    contiguous  (3 in the second)
    ///     [1,3[  ]3,6]    not contiguous  (3 is missing)
    ///     [1,2]  [3,4]    not contiguous
    /// ```
    #[must_use]
    pub fn contiguous(&self, right: &Self) -> bool {
        if self.is_empty() || right.is_empty() {
            true
        } else {
            self.lower <= right.upper && right.lower <= self.upper
        }
    }

    /// Returns the union of the two intervals, if it can be represented as a
    /// single interval.  If the intervals are disjoint (or only touch at a
    /// point that neither of them includes), returns None.
    ///
    /// On equal bounds, the inclusive one wins.  The result is in the float
    /// domain if either interval is.
    #[must_use]
    pub fn union(&self, right: &Self) -> Option<Self> {
        let allows_float = self.allows_float || right.allows_float;
        if right.is_empty() {
            Some(self.widen(allows_float))
        } else if self.is_empty() {
            Some(right.widen(allows_float))
        } else if self.contiguous(right) {
            Some(Self::from_bounds(
                self.lower.min(right.lower),
                self.upper.max(right.upper),
                allows_float,
            ))
        } else {
            None
        }
    }

    /// Returns the intersection of the two intervals.  This is the same as
    /// the `&` operator.
    ///
    /// On equal bounds, the exclusive one wins.  The result is in the float
    /// domain if either interval is.
    ///
    /// ```text
    ///        [------ A ------]
    ///               [----- B -------]
    ///               [--------]            A & B
    ///
    ///        [-- A --]
    ///                [--- B ---]
    ///                [                    A & B is [p,p]
    ///
    ///        [-- A --[
    ///                [--- B ---]          A & B is empty
    /// ```
    #[must_use]
    pub fn intersection(&self, right: &Self) -> Self {
        let allows_float = self.allows_float || right.allows_float;
        if self.is_empty() || right.is_empty() {
            Self::empty(allows_float)
        } else {
            Self::from_bounds(
                self.lower.max(right.lower),
                self.upper.min(right.upper),
                allows_float,
            )
        }
    }
}

impl Default for Interval {
    /// Returns an empty interval
    fn default() -> Self {
        Self::empty(false)
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        Interval::parse(s)
    }
}

///  &Interval & &Interval
impl std::ops::BitAnd<&Interval> for &Interval {
    type Output = Interval;

    fn bitand(self, rhs: &Interval) -> Self::Output {
        self.intersection(rhs)
    }
}

///  Interval & Interval
impl std::ops::BitAnd<Interval> for Interval {
    type Output = Interval;

    fn bitand(self, rhs: Interval) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            if self.allows_float {
                write!(f, "]0.0,0.0[")
            } else {
                write!(f, "]0,0[")
            }
        } else {
            write!(
                f,
                "{}{},{}{}",
                if self.lower_inclusive() { '[' } else { ']' },
                format_number(self.lower(), self.allows_float),
                format_number(self.upper(), self.allows_float),
                if self.upper_inclusive() { ']' } else { '[' },
            )
        }
    }
}

/// The serialized form of an interval
#[derive(Serialize, Deserialize)]
struct RawInterval {
    lower: f64,
    lower_inclusive: bool,
    upper: f64,
    upper_inclusive: bool,
    allows_float: bool,
}

impl From<Interval> for RawInterval {
    fn from(intv: Interval) -> Self {
        RawInterval {
            lower: intv.lower(),
            lower_inclusive: intv.lower_inclusive(),
            upper: intv.upper(),
            upper_inclusive: intv.upper_inclusive(),
            allows_float: intv.allows_float(),
        }
    }
}

impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        let allows_float =
            raw.allows_float || !is_whole(raw.lower) || !is_whole(raw.upper);
        if !raw.lower.is_finite()
            || !raw.upper.is_finite()
            || raw.lower > raw.upper
        {
            return Err(IntervalError::InvalidBounds(format!(
                "{}{},{}{}",
                if raw.lower_inclusive { '[' } else { ']' },
                format_number(raw.lower, allows_float),
                format_number(raw.upper, allows_float),
                if raw.upper_inclusive { ']' } else { '[' },
            )));
        }
        Ok(Interval::from_bounds(
            Bound::lower(canonical(raw.lower), raw.lower_inclusive),
            Bound::upper(canonical(raw.upper), raw.upper_inclusive),
            allows_float,
        ))
    }
}
