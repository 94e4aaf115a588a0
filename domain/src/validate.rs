//! Conformance checks applied to constructed geodetic objects. Keep logic
//! minimal and deterministic; every failure maps to `FactoryError::Validation`
//! and propagates unchanged to the caller.

use crate::{
    Axis, AxisDirection, CartesianCs, CoordinateSystem, Ellipsoid, EllipsoidalCs, FactoryError,
    GeodeticDatum, GeographicCrs, PrimeMeridian, UnitKind, VerticalCs,
};

fn fail(msg: String) -> Result<(), FactoryError> {
    Err(FactoryError::Validation(msg))
}

/// Checks for datum-family objects (ellipsoids, prime meridians, datums).
#[derive(Clone, Copy, Debug)]
pub struct DatumValidator {
    pub enabled: bool,
}

impl DatumValidator {
    pub fn validate_ellipsoid(&self, e: &Ellipsoid) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        if e.unit.kind != UnitKind::Length {
            return fail(format!("ellipsoid {}: axis unit must be a length", e.properties.name));
        }
        if !(e.semi_major_axis.is_finite() && e.semi_major_axis > 0.0) {
            return fail(format!(
                "ellipsoid {}: semi-major axis must be finite and positive",
                e.properties.name
            ));
        }
        let b = e.semi_minor_axis();
        if !(b.is_finite() && b > 0.0) {
            return fail(format!(
                "ellipsoid {}: semi-minor axis must be finite and positive",
                e.properties.name
            ));
        }
        if b > e.semi_major_axis {
            return fail(format!(
                "ellipsoid {}: semi-minor axis exceeds semi-major axis",
                e.properties.name
            ));
        }
        if e.inverse_flattening() <= 0.0 {
            return fail(format!(
                "ellipsoid {}: inverse flattening must be positive",
                e.properties.name
            ));
        }
        Ok(())
    }

    pub fn validate_prime_meridian(&self, pm: &PrimeMeridian) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        if pm.unit.kind != UnitKind::Angle {
            return fail(format!(
                "prime meridian {}: longitude unit must be angular",
                pm.properties.name
            ));
        }
        let degrees = pm.longitude_degrees();
        if !(-180.0..=180.0).contains(&degrees) {
            return fail(format!(
                "prime meridian {}: Greenwich longitude {} out of [-180, 180] degrees",
                pm.properties.name, degrees
            ));
        }
        Ok(())
    }

    /// Validates the datum and both of its components.
    pub fn validate_geodetic_datum(&self, datum: &GeodeticDatum) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        self.validate_ellipsoid(&datum.ellipsoid)?;
        self.validate_prime_meridian(&datum.prime_meridian)
    }
}

/// Checks for coordinate systems and their axes.
#[derive(Clone, Copy, Debug)]
pub struct CsValidator {
    pub enabled: bool,
}

impl CsValidator {
    pub fn validate_axis(&self, axis: &Axis) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        if axis.properties.name.is_empty() {
            return fail("axis: name cannot be empty".to_string());
        }
        if !(axis.unit.to_base.is_finite() && axis.unit.to_base > 0.0) {
            return fail(format!(
                "axis {}: unit conversion factor must be finite and positive",
                axis.properties.name
            ));
        }
        Ok(())
    }

    fn check_directions(&self, name: &str, axes: &[Axis]) -> Result<(), FactoryError> {
        for (i, a) in axes.iter().enumerate() {
            for b in &axes[i + 1..] {
                if a.direction == b.direction {
                    return fail(format!("{}: duplicated axis direction {}", name, a.direction.as_str()));
                }
                if a.direction.is_opposite(&b.direction) {
                    return fail(format!(
                        "{}: axis directions {} and {} are colinear",
                        name,
                        a.direction.as_str(),
                        b.direction.as_str()
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn validate_cartesian_cs(&self, cs: &CartesianCs) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        let name = &cs.properties.name;
        if !(2..=3).contains(&cs.dimension()) {
            return fail(format!("Cartesian CS {}: expected 2 or 3 axes, got {}", name, cs.dimension()));
        }
        for axis in &cs.axes {
            self.validate_axis(axis)?;
            if axis.unit.kind != UnitKind::Length {
                return fail(format!(
                    "Cartesian CS {}: axis {} must use a length unit",
                    name, axis.properties.name
                ));
            }
        }
        self.check_directions(name, &cs.axes)
    }

    pub fn validate_ellipsoidal_cs(&self, cs: &EllipsoidalCs) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        let name = &cs.properties.name;
        if !(2..=3).contains(&cs.dimension()) {
            return fail(format!(
                "ellipsoidal CS {}: expected 2 or 3 axes, got {}",
                name,
                cs.dimension()
            ));
        }
        let mut north_south = 0;
        let mut east_west = 0;
        for axis in &cs.axes {
            self.validate_axis(axis)?;
            match axis.direction {
                AxisDirection::North | AxisDirection::South => {
                    north_south += 1;
                    if axis.unit.kind != UnitKind::Angle {
                        return fail(format!(
                            "ellipsoidal CS {}: latitude axis must use an angular unit",
                            name
                        ));
                    }
                }
                AxisDirection::East | AxisDirection::West => {
                    east_west += 1;
                    if axis.unit.kind != UnitKind::Angle {
                        return fail(format!(
                            "ellipsoidal CS {}: longitude axis must use an angular unit",
                            name
                        ));
                    }
                }
                AxisDirection::Up | AxisDirection::Down => {
                    if axis.unit.kind != UnitKind::Length {
                        return fail(format!(
                            "ellipsoidal CS {}: height axis must use a length unit",
                            name
                        ));
                    }
                }
                _ => {
                    return fail(format!(
                        "ellipsoidal CS {}: unexpected axis direction {}",
                        name,
                        axis.direction.as_str()
                    ));
                }
            }
        }
        if north_south != 1 || east_west != 1 {
            return fail(format!(
                "ellipsoidal CS {}: expected one latitude and one longitude axis",
                name
            ));
        }
        self.check_directions(name, &cs.axes)
    }

    pub fn validate_vertical_cs(&self, cs: &VerticalCs) -> Result<(), FactoryError> {
        if !self.enabled {
            return Ok(());
        }
        let name = &cs.properties.name;
        self.validate_axis(&cs.axis)?;
        if !matches!(cs.axis.direction, AxisDirection::Up | AxisDirection::Down) {
            return fail(format!("vertical CS {}: axis direction must be up or down", name));
        }
        if cs.axis.unit.kind != UnitKind::Length {
            return fail(format!("vertical CS {}: axis must use a length unit", name));
        }
        Ok(())
    }

    pub fn validate_coordinate_system(&self, cs: &CoordinateSystem) -> Result<(), FactoryError> {
        match cs {
            CoordinateSystem::Cartesian(cs) => self.validate_cartesian_cs(cs),
            CoordinateSystem::Ellipsoidal(cs) => self.validate_ellipsoidal_cs(cs),
            CoordinateSystem::Vertical(cs) => self.validate_vertical_cs(cs),
        }
    }
}

/// Checks for coordinate reference systems.
#[derive(Clone, Copy, Debug)]
pub struct CrsValidator {
    pub enabled: bool,
}

/// The bundle of validators applied to constructed objects. Callers hand one
/// to a factory at construction; `none()` is the empty bundle that accepts
/// everything.
#[derive(Clone, Copy, Debug)]
pub struct Validators {
    pub datum: DatumValidator,
    pub cs: CsValidator,
    pub crs: CrsValidator,
}

impl Validators {
    /// All conformance checks enabled.
    pub fn new() -> Self {
        Self {
            datum: DatumValidator { enabled: true },
            cs: CsValidator { enabled: true },
            crs: CrsValidator { enabled: true },
        }
    }

    /// The empty bundle: every check passes.
    pub fn none() -> Self {
        Self {
            datum: DatumValidator { enabled: false },
            cs: CsValidator { enabled: false },
            crs: CrsValidator { enabled: false },
        }
    }

    /// Validates the CRS and, recursively, its datum and coordinate system.
    pub fn validate_geographic_crs(&self, crs: &GeographicCrs) -> Result<(), FactoryError> {
        if !self.crs.enabled {
            return Ok(());
        }
        self.datum.validate_geodetic_datum(&crs.datum)?;
        self.cs.validate_ellipsoidal_cs(&crs.cs)
    }
}

impl Default for Validators {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;
    use crate::{EllipsoidShape, ObjectProperties};

    fn wgs84_ellipsoid() -> Ellipsoid {
        Ellipsoid {
            properties: ObjectProperties::epsg(7030, "WGS 84"),
            semi_major_axis: 6378137.0,
            shape: EllipsoidShape::InverseFlattening(298.257223563),
            unit: Units::new().metre(),
        }
    }

    fn axis(name: &str, abbr: &str, direction: AxisDirection, unit: crate::Unit) -> Axis {
        Axis {
            properties: ObjectProperties::named(name),
            abbreviation: abbr.to_string(),
            direction,
            unit,
        }
    }

    #[test]
    fn accepts_a_conformant_ellipsoid() {
        assert!(Validators::new().datum.validate_ellipsoid(&wgs84_ellipsoid()).is_ok());
    }

    #[test]
    fn rejects_ellipsoid_with_angular_unit() {
        let mut e = wgs84_ellipsoid();
        e.unit = Units::new().degree();
        let err = Validators::new().datum.validate_ellipsoid(&e).unwrap_err();
        assert!(matches!(err, FactoryError::Validation(_)));
    }

    #[test]
    fn rejects_ellipsoid_with_semi_minor_above_semi_major() {
        let mut e = wgs84_ellipsoid();
        e.shape = EllipsoidShape::SemiMinorAxis(7000000.0);
        assert!(Validators::new().datum.validate_ellipsoid(&e).is_err());
    }

    #[test]
    fn rejects_meridian_outside_longitude_range() {
        let pm = PrimeMeridian {
            properties: ObjectProperties::named("bogus"),
            greenwich_longitude: 181.0,
            unit: Units::new().degree(),
        };
        assert!(Validators::new().datum.validate_prime_meridian(&pm).is_err());
    }

    #[test]
    fn rejects_cartesian_cs_with_colinear_axes() {
        let units = Units::new();
        let cs = CartesianCs {
            properties: ObjectProperties::named("bad plane"),
            axes: vec![
                axis("Easting", "E", AxisDirection::East, units.metre()),
                axis("Westing", "W", AxisDirection::West, units.metre()),
            ],
        };
        assert!(Validators::new().cs.validate_cartesian_cs(&cs).is_err());
    }

    #[test]
    fn rejects_ellipsoidal_cs_with_two_latitude_axes() {
        let units = Units::new();
        let cs = EllipsoidalCs {
            properties: ObjectProperties::named("bad graticule"),
            axes: vec![
                axis("Geodetic latitude", "Lat", AxisDirection::North, units.degree()),
                axis("Geodetic latitude", "Lat", AxisDirection::South, units.degree()),
            ],
        };
        assert!(Validators::new().cs.validate_ellipsoidal_cs(&cs).is_err());
    }

    #[test]
    fn rejects_vertical_cs_with_horizontal_axis() {
        let units = Units::new();
        let cs = VerticalCs {
            properties: ObjectProperties::named("bad height"),
            axis: axis("Northing", "N", AxisDirection::North, units.metre()),
        };
        assert!(Validators::new().cs.validate_vertical_cs(&cs).is_err());
    }

    #[test]
    fn coordinate_system_dispatch_reaches_the_right_checks() {
        let units = Units::new();
        let cs = CoordinateSystem::Vertical(VerticalCs {
            properties: ObjectProperties::named("bad height"),
            axis: axis("Northing", "N", AxisDirection::North, units.metre()),
        });
        assert!(Validators::new().cs.validate_coordinate_system(&cs).is_err());
    }

    #[test]
    fn empty_bundle_accepts_everything() {
        let mut e = wgs84_ellipsoid();
        e.semi_major_axis = -1.0;
        assert!(Validators::none().datum.validate_ellipsoid(&e).is_ok());
    }
}
