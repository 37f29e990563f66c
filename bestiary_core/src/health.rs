//! Health points - integer vitality shared by every mortal monster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Remaining vitality of a monster
///
/// A monster with health points is alive exactly when the value is strictly
/// greater than zero. Addition and subtraction saturate at the `i32` bounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HealthPoints(pub i32);

impl HealthPoints {
    /// The dead threshold and the floor for every resolved hit
    pub const ZERO: HealthPoints = HealthPoints(0);

    pub const fn new(value: i32) -> Self {
        HealthPoints(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this much health keeps a monster alive
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn max(self, other: HealthPoints) -> HealthPoints {
        HealthPoints(self.0.max(other.0))
    }

    pub fn min(self, other: HealthPoints) -> HealthPoints {
        HealthPoints(self.0.min(other.0))
    }

    /// Clamp to the zero floor
    pub fn clamp_to_floor(self) -> HealthPoints {
        self.max(HealthPoints::ZERO)
    }
}

impl From<i32> for HealthPoints {
    fn from(value: i32) -> Self {
        HealthPoints(value)
    }
}

impl Add for HealthPoints {
    type Output = HealthPoints;

    fn add(self, rhs: HealthPoints) -> HealthPoints {
        HealthPoints(self.0.saturating_add(rhs.0))
    }
}

impl Sub for HealthPoints {
    type Output = HealthPoints;

    fn sub(self, rhs: HealthPoints) -> HealthPoints {
        HealthPoints(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i32> for HealthPoints {
    type Output = HealthPoints;

    fn mul(self, rhs: i32) -> HealthPoints {
        HealthPoints(self.0.saturating_mul(rhs))
    }
}

impl Mul<HealthPoints> for i32 {
    type Output = HealthPoints;

    fn mul(self, rhs: HealthPoints) -> HealthPoints {
        rhs * self
    }
}

/// Truncating division (`45 / 2 == 22`)
///
/// Panics on a zero divisor, like `i32` division.
impl Div<i32> for HealthPoints {
    type Output = HealthPoints;

    fn div(self, rhs: i32) -> HealthPoints {
        HealthPoints(self.0 / rhs)
    }
}

impl fmt::Display for HealthPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
