//! # Unit Types
//!
//! Lightweight newtype wrappers for the metric quantities the estimator
//! reports. They serialize as bare numbers so JSON stays clean.
//!
//! Inputs arrive as raw `f64` values from the form layer; these wrappers are
//! used where a quantity leaves the engine (segment breakdowns, project
//! totals) so consumers cannot mix up square and linear meters.
//!
//! ## Example
//!
//! ```rust
//! use tablayeso_core::units::{Meters, SquareMeters};
//!
//! let area: SquareMeters = Meters(3.0) * Meters(2.4);
//! assert!((area.0 - 7.2).abs() < 1e-9);
//!
//! // Billing floor: anything under a meter counts as a full meter
//! assert_eq!(Meters::billing(Some(0.5)), Meters(1.0));
//! assert_eq!(Meters::billing(Some(-2.0)), Meters(0.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl Meters {
    /// Billing (metraje) value of a raw dimension.
    ///
    /// Missing or non-positive values contribute nothing; anything else is
    /// floored up to one full meter.
    pub fn billing(raw: Option<f64>) -> Meters {
        match raw {
            Some(v) if v > 0.0 => Meters(v.max(1.0)),
            _ => Meters(0.0),
        }
    }
}

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, rhs: Meters) {
        self.0 += rhs.0;
    }
}

impl Add for SquareMeters {
    type Output = SquareMeters;
    fn add(self, rhs: SquareMeters) -> SquareMeters {
        SquareMeters(self.0 + rhs.0)
    }
}

impl AddAssign for SquareMeters {
    fn add_assign(&mut self, rhs: SquareMeters) {
        self.0 += rhs.0;
    }
}

impl std::fmt::Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

impl std::fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m²", self.0)
    }
}
