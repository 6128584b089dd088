//! Stud SKUs.
//!
//! All studs share the 2 1/2" profile; they differ in bar length and gauge.
//! The bar length is informational only: splicing math always assumes the
//! longest (3.66 m) bar.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::normalize_label;

/// Stud SKUs stocked for wall framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StudType {
    /// 2 1/2" x 8' cal 26
    #[serde(rename = "8ft-cal26")]
    Ft8Cal26,
    /// 2 1/2" x 10' cal 26
    #[serde(rename = "10ft-cal26")]
    Ft10Cal26,
    /// 2 1/2" x 12' cal 26
    #[serde(rename = "12ft-cal26")]
    Ft12Cal26,
    /// 2 1/2" x 8' cal 20
    #[serde(rename = "8ft-cal20")]
    Ft8Cal20,
    /// 2 1/2" x 10' cal 20
    #[serde(rename = "10ft-cal20")]
    Ft10Cal20,
}

impl StudType {
    pub const ALL: [StudType; 5] = [
        StudType::Ft8Cal26,
        StudType::Ft10Cal26,
        StudType::Ft12Cal26,
        StudType::Ft8Cal20,
        StudType::Ft10Cal20,
    ];

    /// Short code (e.g., "8ft-cal26")
    pub fn code(&self) -> &'static str {
        match self {
            StudType::Ft8Cal26 => "8ft-cal26",
            StudType::Ft10Cal26 => "10ft-cal26",
            StudType::Ft12Cal26 => "12ft-cal26",
            StudType::Ft8Cal20 => "8ft-cal20",
            StudType::Ft10Cal20 => "10ft-cal20",
        }
    }

    /// Display name used as the material line label
    pub fn display_name(&self) -> &'static str {
        match self {
            StudType::Ft8Cal26 => "Stud 2 1/2\" x 8' cal 26",
            StudType::Ft10Cal26 => "Stud 2 1/2\" x 10' cal 26",
            StudType::Ft12Cal26 => "Stud 2 1/2\" x 12' cal 26",
            StudType::Ft8Cal20 => "Stud 2 1/2\" x 8' cal 20",
            StudType::Ft10Cal20 => "Stud 2 1/2\" x 10' cal 20",
        }
    }

    /// Trade label ("Poste ...")
    pub fn trade_label(&self) -> &'static str {
        match self {
            StudType::Ft8Cal26 => "Poste 2 1/2\" x 8' cal 26",
            StudType::Ft10Cal26 => "Poste 2 1/2\" x 10' cal 26",
            StudType::Ft12Cal26 => "Poste 2 1/2\" x 12' cal 26",
            StudType::Ft8Cal20 => "Poste 2 1/2\" x 8' cal 20",
            StudType::Ft10Cal20 => "Poste 2 1/2\" x 10' cal 20",
        }
    }

    /// Nominal bar length in meters
    pub fn bar_length_m(&self) -> f64 {
        match self {
            StudType::Ft8Cal26 | StudType::Ft8Cal20 => 2.44,
            StudType::Ft10Cal26 | StudType::Ft10Cal20 => 3.05,
            StudType::Ft12Cal26 => 3.66,
        }
    }

    /// Gauge (calibre)
    pub fn gauge(&self) -> u8 {
        match self {
            StudType::Ft8Cal26 | StudType::Ft10Cal26 | StudType::Ft12Cal26 => 26,
            StudType::Ft8Cal20 | StudType::Ft10Cal20 => 20,
        }
    }

    /// Parse from the code, display name or trade label
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = normalize_label(s);
        StudType::ALL
            .into_iter()
            .find(|t| {
                key == normalize_label(t.code())
                    || key == normalize_label(t.display_name())
                    || key == normalize_label(t.trade_label())
            })
            .ok_or_else(|| CalcError::unknown_option("stud type", s))
    }
}

impl std::fmt::Display for StudType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
