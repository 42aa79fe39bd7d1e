use std::cmp::Ordering;

/// Left, applied to a point, represents a conceptual position halfway between
/// the point and the largest number smaller than it.
/// Likewise, Right represents a position halfway between the point and the
/// smallest number larger than it.
///
/// An inclusive lower bound `[A` is `Left` of A, an exclusive one `]A` is
/// `Right` of A.  An inclusive upper bound `B]` is `Right` of B, an exclusive
/// one `B[` is `Left` of B.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum OffsetSide {
    Left,
    Right,
}

/// One bound of an interval.
///
/// Bounds are totally ordered, first by point then by side.  With this
/// ordering, the tie-breaks between inclusive and exclusive bounds are just
/// `min` and `max`:
///
/// ```text
///     lower bounds:   [3  <  ]3        upper bounds:   3[  <  3]
///     union:          min(lowers), max(uppers)   => inclusive wins
///     intersection:   max(lowers), min(uppers)   => exclusive wins
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bound {
    pub point: f64,
    pub offset: OffsetSide,
}

impl Bound {
    pub fn lower(point: f64, inclusive: bool) -> Self {
        Self {
            point,
            offset: if inclusive {
                OffsetSide::Left
            } else {
                OffsetSide::Right
            },
        }
    }

    pub fn upper(point: f64, inclusive: bool) -> Self {
        Self {
            point,
            offset: if inclusive {
                OffsetSide::Right
            } else {
                OffsetSide::Left
            },
        }
    }

    /// True if the value is to the right of the bound
    pub fn left_of(&self, value: f64) -> bool {
        match self.offset {
            OffsetSide::Left => self.point <= value,
            OffsetSide::Right => self.point < value,
        }
    }

    /// True if the value is to the left of the bound
    pub fn right_of(&self, value: f64) -> bool {
        match self.offset {
            OffsetSide::Left => value < self.point,
            OffsetSide::Right => value <= self.point,
        }
    }
}

//  Points never hold NaN (they come from validated literals), and -0.0 is
//  folded into 0.0 when reading numbers, so total_cmp matches the numeric
//  order.
impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .total_cmp(&other.point)
            .then(self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bound {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ord() {
        let b1 = Bound::lower(3.0, true); //  [3
        let b2 = Bound::lower(3.0, false); //  ]3
        assert!(b1 != b2);
        assert!(b1 < b2);

        //  3] sits at the same position as ]3
        let b3 = Bound::upper(3.0, true);
        assert!(b3 == b2);
        assert!(b2 == b3);

        //  3[ sits at the same position as [3
        let b4 = Bound::upper(3.0, false);
        assert!(b4 == b1);
        assert!(b4 < b3);

        assert!(Bound::upper(2.0, true) < Bound::lower(3.0, true));
        assert_eq!(b1.min(b2), b1);
        assert_eq!(b3.max(b4), b3);
    }

    #[test]
    fn test_left_of() {
        let closed = Bound::lower(1.0, true);
        assert!(closed.left_of(1.0));
        assert!(closed.left_of(2.0));
        assert!(!closed.left_of(0.5));

        let open = Bound::lower(1.0, false);
        assert!(!open.left_of(1.0));
        assert!(open.left_of(1.5));

        let closed = Bound::upper(10.0, true);
        assert!(closed.right_of(10.0));
        assert!(!closed.right_of(10.5));

        let open = Bound::upper(10.0, false);
        assert!(!open.right_of(10.0));
        assert!(open.right_of(9.99));
        assert!(!open.right_of(f64::NAN));
    }
}
