//! Exact fixed-point numbers for drawing-space coordinates
//!
//! Shared edges drawn by two neighboring cells must compare equal bit for
//! bit, so nothing in the geometry pipeline uses `f64`. A [`Fixed`] stores a
//! multiple of 10^-6. Style parameters are quantized to hundredths, which
//! keeps every derived coordinate (inset by `margin / 2`, corner radius
//! `radius * size / 2`) exactly representable.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

const SCALE: i64 = 1_000_000;
const FRACTION_DIGITS: usize = 6;
const HUNDREDTH: i64 = SCALE / 100;

/// A signed fixed-point number with six fractional decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);

    pub const fn from_int(value: i64) -> Self {
        Self(value * SCALE)
    }

    /// `percent / 100`, e.g. `from_percent(25) == 0.25`
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent as i64 * HUNDREDTH)
    }

    /// Nearest value on the hundredths grid, ties away from zero
    pub fn round_to_hundredths(self) -> Self {
        let half = HUNDREDTH / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / HUNDREDTH
        } else {
            (self.0 - half) / HUNDREDTH
        };
        Self(rounded * HUNDREDTH)
    }

    /// Clamp into `[0, 1]`
    pub fn clamp_unit(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }

    pub fn half(self) -> Self {
        Self(self.0 / 2)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_int(value as i64)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

/// Product truncated to six fractional digits (exact on the hundredths grid)
impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed((self.0 as i128 * rhs.0 as i128 / SCALE as i128) as i64)
    }
}

impl Mul<i32> for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0 * rhs as i64)
    }
}

/// Locale-independent, shortest form: `3`, `0.5`, `-1.25`
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let int = abs / SCALE as u64;
        let frac = abs % SCALE as u64;
        if frac == 0 {
            return write!(f, "{sign}{int}");
        }
        let digits = format!("{:0width$}", frac, width = FRACTION_DIGITS);
        write!(f, "{sign}{int}.{}", digits.trim_end_matches('0'))
    }
}

/// A point in drawing space with exact coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecimalPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl DecimalPoint {
    pub const ZERO: DecimalPoint = DecimalPoint {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    pub fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// The top-left corner of a grid cell
    pub fn from_int(x: i32, y: i32) -> Self {
        Self::new(x.into(), y.into())
    }

    pub fn offset_by(&self, dx: Fixed, dy: Fixed) -> DecimalPoint {
        DecimalPoint::new(self.x + dx, self.y + dy)
    }
}

/// Row-major order, like [`IntPoint`](super::IntPoint)
impl Ord for DecimalPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for DecimalPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DecimalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
