use crate::errors::{IntervalError, Result};
use crate::intervals::Interval;
use crate::parser::{self, Expression, Operator, Term};
use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A set of disjoint intervals, like `[1,3] or ]7,10[`.
///
/// Members are kept in insertion and merge order, not sorted.  After every
/// operation, no two members could be merged into a single interval, and all
/// members share the same domain (float or integer).
///
/// The empty set is represented by a single empty interval, so a collection
/// always has at least one member.
///
/// ```
///    use intervals_lib::IntervalCollection;
///    let mut c = IntervalCollection::parse("[1,3]").unwrap();
///    c.union("[4,6]").unwrap().union("]2,4[").unwrap();
///    assert_eq!(c.to_string(), "[1,6]");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct IntervalCollection {
    intervals: Vec<Interval>,

    // The text this collection was parsed from
    expression: Option<String>,
}

/// Anything that can be combined with an [`IntervalCollection`]: an
/// expression to parse, an interval, or another collection.
pub trait IntoCollection {
    fn into_collection(self) -> Result<IntervalCollection>;
}

impl IntervalCollection {
    /// Parses and evaluates an expression.
    pub fn parse(text: &str) -> Result<Self> {
        let expr = parser::parse(text)?;
        let mut result = Self::from_expression(&expr);
        result.expression = Some(text.to_string());
        debug!("evaluated {text:?} to {result}");
        Ok(result)
    }

    /// Evaluates a parsed expression, from left to right.
    ///
    /// A group in parenthesis is first reduced to its canonical form, which
    /// then replaces the group in the chain.  So when a group reduces to
    /// several intervals, only the first one is combined with the operator
    /// before the group, and the others are added with `or`:
    /// ```text
    ///    [1,4] and ([2,3] or [5,6])   =>   [1,4] and [2,3] or [5,6]
    /// ```
    #[must_use]
    pub fn from_expression(expr: &Expression) -> Self {
        let mut result = Self::from_term(&expr.head);
        for (op, term) in &expr.tail {
            let operand = Self::from_term(term);
            trace!("{result} {op:?} {operand}");
            let Some((first, rest)) = operand.intervals.split_first() else {
                continue;
            };
            match op {
                Operator::Or => {
                    result.union_collection(std::slice::from_ref(first))
                }
                Operator::And => {
                    result.intersection_collection(std::slice::from_ref(first))
                }
            }
            for intv in rest {
                result.union_collection(std::slice::from_ref(intv));
            }
        }
        result
    }

    fn from_term(term: &Term) -> Self {
        match term {
            Term::Literal(intv) => Self::from(*intv),
            Term::Group(expr) => Self::from_expression(expr),
        }
    }

    /// The expression this collection was parsed from, if any.  It is not
    /// updated by later operations.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// Adds all values from `other` to self.
    ///
    /// If `other` is an expression that fails to parse, self is left
    /// unchanged.
    pub fn union<T: IntoCollection>(&mut self, other: T) -> Result<&mut Self> {
        let other = other.into_collection()?;
        self.union_collection(&other.intervals);
        Ok(self)
    }

    /// Only keeps the values of self that are also in `other`.
    ///
    /// If `other` is an expression that fails to parse, self is left
    /// unchanged.
    pub fn intersection<T: IntoCollection>(
        &mut self,
        other: T,
    ) -> Result<&mut Self> {
        let other = other.into_collection()?;
        self.intersection_collection(&other.intervals);
        Ok(self)
    }

    fn union_collection(&mut self, candidates: &[Interval]) {
        let mut unmerged = Vec::new();
        for candidate in candidates {
            let merged = self.intervals.iter_mut().any(|member| {
                match member.union(candidate) {
                    Some(u) => {
                        *member = u;
                        true
                    }
                    None => false,
                }
            });
            if !merged {
                unmerged.push(*candidate);
            }
        }
        self.intervals.extend(unmerged);
        self.normalize();
    }

    fn intersection_collection(&mut self, candidates: &[Interval]) {
        self.intervals = candidates
            .iter()
            .flat_map(|candidate| {
                self.intervals
                    .iter()
                    .map(move |member| member.intersection(candidate))
            })
            .collect();
        self.normalize();
    }

    /// Merges members until no two of them can be merged, and moves all of
    /// them to the same domain.
    fn normalize(&mut self) {
        let allows_float = self.intervals.iter().any(Interval::allows_float);
        for intv in &mut self.intervals {
            *intv = intv.widen(allows_float);
        }

        loop {
            let mergeable = self
                .intervals
                .iter()
                .enumerate()
                .tuple_combinations()
                .find_map(|((i, a), (j, b))| a.union(b).map(|u| (i, j, u)));
            let Some((i, j, merged)) = mergeable else {
                break;
            };
            trace!("merging members {i} and {j} into {merged}");
            if let Some(slot) = self.intervals.get_mut(i) {
                *slot = merged;
            }
            self.intervals.remove(j);
        }

        if self.intervals.is_empty() {
            self.intervals.push(Interval::empty(allows_float));
        }
    }

    /// True if any member contains the value
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.intervals.iter().any(|intv| intv.contains(value))
    }

    /// Same as [`IntervalCollection::contains()`], for a value given as text.
    /// Returns false when the text is not a number.
    #[must_use]
    pub fn contains_str(&self, value: &str) -> bool {
        self.intervals.iter().any(|intv| intv.contains_str(value))
    }

    /// True if the collection contains no value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.intervals.as_slice(), [single] if single.is_empty())
    }

    #[must_use]
    pub fn allows_float(&self) -> bool {
        self.intervals.first().is_some_and(Interval::allows_float)
    }

    /// Number of members.  The empty set has one member.
    #[must_use]
    pub fn count(&self) -> usize {
        self.intervals.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl Default for IntervalCollection {
    /// Returns the empty set
    fn default() -> Self {
        Self::from(Interval::default())
    }
}

impl PartialEq for IntervalCollection {
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl From<Interval> for IntervalCollection {
    fn from(intv: Interval) -> Self {
        IntervalCollection {
            intervals: vec![intv],
            expression: None,
        }
    }
}

impl From<Vec<Interval>> for IntervalCollection {
    fn from(intervals: Vec<Interval>) -> Self {
        let mut result = IntervalCollection {
            intervals,
            expression: None,
        };
        result.normalize();
        result
    }
}

impl From<IntervalCollection> for Vec<Interval> {
    fn from(collection: IntervalCollection) -> Self {
        collection.intervals
    }
}

impl FromStr for IntervalCollection {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        IntervalCollection::parse(s)
    }
}

impl std::fmt::Display for IntervalCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.intervals.iter().join(" or "))
    }
}

impl<'a> IntoIterator for &'a IntervalCollection {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl IntoCollection for &str {
    fn into_collection(self) -> Result<IntervalCollection> {
        IntervalCollection::parse(self)
    }
}

impl IntoCollection for &String {
    fn into_collection(self) -> Result<IntervalCollection> {
        IntervalCollection::parse(self)
    }
}

impl IntoCollection for Interval {
    fn into_collection(self) -> Result<IntervalCollection> {
        Ok(IntervalCollection::from(self))
    }
}

impl IntoCollection for &Interval {
    fn into_collection(self) -> Result<IntervalCollection> {
        Ok(IntervalCollection::from(*self))
    }
}

impl IntoCollection for IntervalCollection {
    fn into_collection(self) -> Result<IntervalCollection> {
        Ok(self)
    }
}

impl IntoCollection for &IntervalCollection {
    fn into_collection(self) -> Result<IntervalCollection> {
        Ok(self.clone())
    }
}
