//! Simple direct-construction factory for tests and demos. Builds the plain
//! domain structs after light sanity checks on the defining parameters.

use crate::{
    Axis, AxisDirection, CartesianCs, CrsFactory, CsFactory, DatumFactory, Ellipsoid,
    EllipsoidShape, EllipsoidalCs, FactoryError, GeodeticDatum, GeographicCrs, ObjectProperties,
    PrimeMeridian, Unit, VerticalCs,
};

/// Direct implementation of all three capability ports.
pub struct SimpleObjectFactory;

impl SimpleObjectFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleObjectFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn require_finite(what: &str, name: &str, value: f64) -> Result<(), FactoryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FactoryError::InvalidDefinition(format!(
            "{}: {} must be a finite number",
            name, what
        )))
    }
}

fn require_positive(what: &str, name: &str, value: f64) -> Result<(), FactoryError> {
    require_finite(what, name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FactoryError::InvalidDefinition(format!(
            "{}: {} must be positive",
            name, what
        )))
    }
}

impl DatumFactory for SimpleObjectFactory {
    fn create_ellipsoid(
        &self,
        properties: ObjectProperties,
        semi_major_axis: f64,
        shape: EllipsoidShape,
        unit: Unit,
    ) -> Result<Ellipsoid, FactoryError> {
        require_positive("semi-major axis", &properties.name, semi_major_axis)?;
        match shape {
            EllipsoidShape::SemiMinorAxis(b) => {
                require_positive("semi-minor axis", &properties.name, b)?;
            }
            EllipsoidShape::InverseFlattening(f) => {
                require_positive("inverse flattening", &properties.name, f)?;
            }
        }
        Ok(Ellipsoid {
            properties,
            semi_major_axis,
            shape,
            unit,
        })
    }

    fn create_prime_meridian(
        &self,
        properties: ObjectProperties,
        greenwich_longitude: f64,
        unit: Unit,
    ) -> Result<PrimeMeridian, FactoryError> {
        require_finite("Greenwich longitude", &properties.name, greenwich_longitude)?;
        Ok(PrimeMeridian {
            properties,
            greenwich_longitude,
            unit,
        })
    }

    fn create_geodetic_datum(
        &self,
        properties: ObjectProperties,
        ellipsoid: Ellipsoid,
        prime_meridian: PrimeMeridian,
    ) -> Result<GeodeticDatum, FactoryError> {
        Ok(GeodeticDatum {
            properties,
            ellipsoid,
            prime_meridian,
        })
    }
}

impl CsFactory for SimpleObjectFactory {
    fn create_axis(
        &self,
        properties: ObjectProperties,
        abbreviation: &str,
        direction: AxisDirection,
        unit: Unit,
    ) -> Result<Axis, FactoryError> {
        Ok(Axis {
            properties,
            abbreviation: abbreviation.to_string(),
            direction,
            unit,
        })
    }

    fn create_cartesian_cs(
        &self,
        properties: ObjectProperties,
        axes: Vec<Axis>,
    ) -> Result<CartesianCs, FactoryError> {
        if axes.is_empty() {
            return Err(FactoryError::InvalidDefinition(format!(
                "{}: a coordinate system needs at least one axis",
                properties.name
            )));
        }
        Ok(CartesianCs { properties, axes })
    }

    fn create_ellipsoidal_cs(
        &self,
        properties: ObjectProperties,
        axes: Vec<Axis>,
    ) -> Result<EllipsoidalCs, FactoryError> {
        if axes.is_empty() {
            return Err(FactoryError::InvalidDefinition(format!(
                "{}: a coordinate system needs at least one axis",
                properties.name
            )));
        }
        Ok(EllipsoidalCs { properties, axes })
    }

    fn create_vertical_cs(
        &self,
        properties: ObjectProperties,
        axis: Axis,
    ) -> Result<VerticalCs, FactoryError> {
        Ok(VerticalCs { properties, axis })
    }
}

impl CrsFactory for SimpleObjectFactory {
    fn create_geographic_crs(
        &self,
        properties: ObjectProperties,
        datum: GeodeticDatum,
        cs: EllipsoidalCs,
    ) -> Result<GeographicCrs, FactoryError> {
        Ok(GeographicCrs {
            properties,
            datum,
            cs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;

    #[test]
    fn builds_a_wgs84_ellipsoid() {
        let f = SimpleObjectFactory::new();
        let e = f
            .create_ellipsoid(
                ObjectProperties::epsg(7030, "WGS 84"),
                6378137.0,
                EllipsoidShape::InverseFlattening(298.257223563),
                Units::new().metre(),
            )
            .expect("valid ellipsoid");
        assert_eq!(e.properties.name, "WGS 84");
        assert!((e.semi_minor_axis() - 6356752.3142).abs() < 1e-3);
    }

    #[test]
    fn rejects_non_positive_semi_major() {
        let f = SimpleObjectFactory::new();
        let err = f
            .create_ellipsoid(
                ObjectProperties::named("degenerate"),
                0.0,
                EllipsoidShape::InverseFlattening(298.0),
                Units::new().metre(),
            )
            .unwrap_err();
        assert!(matches!(err, FactoryError::InvalidDefinition(_)));
    }

    #[test]
    fn rejects_nan_meridian_longitude() {
        let f = SimpleObjectFactory::new();
        let err = f
            .create_prime_meridian(
                ObjectProperties::named("nowhere"),
                f64::NAN,
                Units::new().degree(),
            )
            .unwrap_err();
        assert!(matches!(err, FactoryError::InvalidDefinition(_)));
    }

    #[test]
    fn rejects_empty_axis_list() {
        let f = SimpleObjectFactory::new();
        let err = f
            .create_cartesian_cs(ObjectProperties::named("empty"), Vec::new())
            .unwrap_err();
        assert!(matches!(err, FactoryError::InvalidDefinition(_)));
    }
}
