//! Predefined units of measure referenced by the EPSG geodetic dataset.

use crate::Unit;

/// Metres per international foot.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Metres per US survey foot (1200/3937, exact by definition).
pub const METRES_PER_US_SURVEY_FOOT: f64 = 1200.0 / 3937.0;

/// Provider of the predefined units (metre, degree, foot, grad, …) handed to
/// factories when synthesizing coordinate systems. Owned by the caller and
/// passed at construction; cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct Units;

impl Units {
    pub fn new() -> Self {
        Self
    }

    pub fn metre(&self) -> Unit {
        Unit::length("metre", 1.0)
    }

    pub fn foot(&self) -> Unit {
        Unit::length("foot", METRES_PER_FOOT)
    }

    pub fn us_survey_foot(&self) -> Unit {
        Unit::length("US survey foot", METRES_PER_US_SURVEY_FOOT)
    }

    pub fn degree(&self) -> Unit {
        Unit::angle("degree", std::f64::consts::PI / 180.0)
    }

    pub fn grad(&self) -> Unit {
        Unit::angle("grad", std::f64::consts::PI / 200.0)
    }
}
