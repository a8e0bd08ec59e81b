//! Grid directions as 8-bit sets
//!
//! Bit `n` is the direction rotated clockwise by `n * 45°` from `top`, with
//! +x to the right and +y downwards. [`Edges`] and [`Corners`] are views on
//! the cardinal and ordinal halves of the same bit layout: the neighbors of a
//! corner are the two edges flanking it, and vice versa.

use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Not, Sub};

/// Shared operations of [`Directions`], [`Edges`] and [`Corners`]
pub trait DirectionSet: Copy + Eq + Sized {
    /// The set type produced by [`DirectionSet::neighbors`]
    type Neighbors: DirectionSet;

    /// Every member direction of this kind
    const ALL: Self;

    fn from_bits(bits: u8) -> Self;
    fn bits(self) -> u8;

    fn empty() -> Self {
        Self::from_bits(0)
    }

    fn is_empty(self) -> bool {
        self.bits() == 0
    }

    fn contains(self, other: Self) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    /// Number of directions in the set
    fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// True for sets naming exactly one direction
    fn is_singular(self) -> bool {
        self.count() == 1
    }

    /// The same bits as a plain [`Directions`] set
    fn directions(self) -> Directions {
        Directions(self.bits())
    }

    /// All directions rotated clockwise by `eighths * 45°`
    fn rotate(self, eighths: i32) -> Self {
        Self::from_bits(self.bits().rotate_left(eighths.rem_euclid(8) as u32))
    }

    /// All directions rotated by 180°
    fn opposite(self) -> Self {
        self.rotate(4)
    }

    /// The directions immediately clockwise and counter-clockwise of each member
    fn neighbors(self) -> Self::Neighbors {
        Self::Neighbors::from_bits(self.rotate(1).bits() | self.rotate(-1).bits())
    }

    /// Reflect a single direction across the cell edge lying in `axis`
    ///
    /// This is how a corner of one cell appears from the neighbor on the
    /// other side of that edge: `TOP_RIGHT` mirrored in `RIGHT` is
    /// `TOP_LEFT`.
    ///
    /// # Panics
    ///
    /// Panics if either set does not name exactly one direction.
    fn mirror<A: DirectionSet>(self, axis: A) -> Self {
        assert!(self.is_singular(), "mirror is only defined for a single direction");
        assert!(axis.is_singular(), "mirror axis must be a single direction");
        let index = self.bits().trailing_zeros() as i32;
        let axis_index = axis.bits().trailing_zeros() as i32;
        Self::from_bits(1 << (2 * axis_index + 4 - index).rem_euclid(8))
    }

    /// Cell offset `(dx, dy)` towards a single direction
    ///
    /// # Panics
    ///
    /// Panics if the set does not name exactly one direction.
    fn offset(self) -> (i32, i32) {
        match self.directions() {
            Directions::TOP => (0, -1),
            Directions::TOP_RIGHT => (1, -1),
            Directions::RIGHT => (1, 0),
            Directions::BOTTOM_RIGHT => (1, 1),
            Directions::BOTTOM => (0, 1),
            Directions::BOTTOM_LEFT => (-1, 1),
            Directions::LEFT => (-1, 0),
            Directions::TOP_LEFT => (-1, -1),
            _ => panic!("offset is unavailable for multiple directions"),
        }
    }

    /// Iterate the single-direction members in bit order
    fn iter(self) -> DirectionIter<Self> {
        DirectionIter {
            remaining: self.bits(),
            marker: PhantomData,
        }
    }
}

/// Iterator over the members of a direction set, one direction at a time
#[derive(Debug, Clone)]
pub struct DirectionIter<S> {
    remaining: u8,
    marker: PhantomData<S>,
}

impl<S: DirectionSet> Iterator for DirectionIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.remaining == 0 {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= !lowest;
        Some(S::from_bits(lowest))
    }
}

macro_rules! direction_set {
    ($(#[$meta:meta])* $name:ident, neighbors = $neighbors:ident, all = $all:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(u8);

        impl DirectionSet for $name {
            type Neighbors = $neighbors;
            const ALL: Self = $name($all);

            fn from_bits(bits: u8) -> Self {
                $name(bits)
            }

            fn bits(self) -> u8 {
                self.0
            }
        }

        impl BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl BitAnd for $name {
            type Output = $name;

            fn bitand(self, rhs: $name) -> $name {
                $name(self.0 & rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 & !rhs.0)
            }
        }

        /// Complement within [`DirectionSet::ALL`]
        impl Not for $name {
            type Output = $name;

            fn not(self) -> $name {
                $name(!self.0 & $all)
            }
        }

        impl IntoIterator for $name {
            type Item = $name;
            type IntoIter = DirectionIter<$name>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

direction_set!(
    /// Any combination of the eight grid directions
    Directions,
    neighbors = Directions,
    all = 0xff
);

direction_set!(
    /// The four sides of a cell
    Edges,
    neighbors = Corners,
    all = 0b0101_0101
);

direction_set!(
    /// The four corners (quadrants) of a cell
    Corners,
    neighbors = Edges,
    all = 0b1010_1010
);

impl Directions {
    pub const TOP: Directions = Directions(1 << 0);
    pub const TOP_RIGHT: Directions = Directions(1 << 1);
    pub const RIGHT: Directions = Directions(1 << 2);
    pub const BOTTOM_RIGHT: Directions = Directions(1 << 3);
    pub const BOTTOM: Directions = Directions(1 << 4);
    pub const BOTTOM_LEFT: Directions = Directions(1 << 5);
    pub const LEFT: Directions = Directions(1 << 6);
    pub const TOP_LEFT: Directions = Directions(1 << 7);

    pub const CARDINAL: Directions = Directions(Edges::ALL.0);
    pub const ORDINAL: Directions = Directions(Corners::ALL.0);
}

impl Edges {
    pub const TOP: Edges = Edges(Directions::TOP.0);
    pub const RIGHT: Edges = Edges(Directions::RIGHT.0);
    pub const BOTTOM: Edges = Edges(Directions::BOTTOM.0);
    pub const LEFT: Edges = Edges(Directions::LEFT.0);
}

impl Corners {
    pub const TOP_RIGHT: Corners = Corners(Directions::TOP_RIGHT.0);
    pub const BOTTOM_RIGHT: Corners = Corners(Directions::BOTTOM_RIGHT.0);
    pub const BOTTOM_LEFT: Corners = Corners(Directions::BOTTOM_LEFT.0);
    pub const TOP_LEFT: Corners = Corners(Directions::TOP_LEFT.0);
}
