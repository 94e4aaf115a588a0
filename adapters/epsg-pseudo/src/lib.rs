//! epsg-pseudo — pseudo-factory for a hard-coded subset of the EPSG dataset.
//!
//! Purpose
//! - Synthesize standards-conformant geodetic objects (units, ellipsoids,
//!   prime meridians, datums, axes, coordinate systems, geographic CRS) for
//!   the EPSG codes a conformance dataset references but does not define.
//! - Construction is delegated to the capability objects (`DatumFactory`,
//!   `CsFactory`, `CrsFactory`) supplied by the caller; this crate only knows
//!   the registry values and the wiring.
//! - Every constructed object is passed through the caller's validator bundle
//!   before being returned.
//!
//! Notes
//! - Capability objects are optional. A missing one surfaces as
//!   `EpsgError::MissingCapability` when an operation needs it, never at
//!   factory construction time.
//! - Codes are accepted as `"4326"` or `"EPSG:4326"` (authority
//!   case-insensitive, surrounding whitespace tolerated).

use std::sync::Arc;

use domain::units::Units;
use domain::validate::Validators;
use domain::{
    Axis, AxisDirection, CartesianCs, CoordinateSystem, CrsFactory, CsFactory, DatumFactory,
    Ellipsoid, EllipsoidShape, EllipsoidalCs, FactoryError, GeodeticDatum, GeographicCrs,
    ObjectProperties, PrimeMeridian, Unit, VerticalCs,
};
use tracing::trace;

pub mod mock;

pub use mock::EpsgMock;

/// Errors raised while resolving an authority code.
#[derive(Debug, thiserror::Error)]
pub enum EpsgError {
    #[error("unsupported {authority:?} authority in code {code:?}")]
    UnknownAuthority { authority: String, code: String },
    #[error("unparseable EPSG code: {0:?}")]
    UnparseableCode(String),
    #[error("no definition for EPSG:{0}")]
    NoSuchCode(u32),
    #[error("no {0} was supplied to this factory")]
    MissingCapability(&'static str),
    #[error(transparent)]
    Factory(#[from] FactoryError),
}

/// Families of objects the registry can enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Unit,
    Ellipsoid,
    PrimeMeridian,
    GeodeticDatum,
    Axis,
    CartesianCs,
    EllipsoidalCs,
    VerticalCs,
    GeographicCrs,
}

impl ObjectKind {
    /// Every family, in registry order.
    pub const ALL: [ObjectKind; 9] = [
        ObjectKind::Unit,
        ObjectKind::Ellipsoid,
        ObjectKind::PrimeMeridian,
        ObjectKind::GeodeticDatum,
        ObjectKind::Axis,
        ObjectKind::CartesianCs,
        ObjectKind::EllipsoidalCs,
        ObjectKind::VerticalCs,
        ObjectKind::GeographicCrs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Unit => "unit",
            ObjectKind::Ellipsoid => "ellipsoid",
            ObjectKind::PrimeMeridian => "prime meridian",
            ObjectKind::GeodeticDatum => "geodetic datum",
            ObjectKind::Axis => "axis",
            ObjectKind::CartesianCs => "Cartesian CS",
            ObjectKind::EllipsoidalCs => "ellipsoidal CS",
            ObjectKind::VerticalCs => "vertical CS",
            ObjectKind::GeographicCrs => "geographic CRS",
        }
    }
}

/// Supported codes per object family, in registry order.
pub fn authority_codes(kind: ObjectKind) -> &'static [u32] {
    match kind {
        ObjectKind::Unit => &[9001, 9002, 9003, 9102, 9105, 9122],
        ObjectKind::Ellipsoid => &[7001, 7004, 7011, 7019, 7022, 7024, 7030],
        ObjectKind::PrimeMeridian => &[8901, 8903, 8908],
        ObjectKind::GeodeticDatum => &[6284, 6326],
        ObjectKind::Axis => &[
            1, 2, 33, 34, 37, 38, 39, 40, 41, 42, 43, 44, 47, 48, 51, 52, 58, 59, 106, 107, 108,
            109, 110, 112, 113, 114, 115, 116, 117, 122, 123, 183, 184, 214, 220, 221, 1082,
        ],
        ObjectKind::CartesianCs => &[4400, 4495, 4497, 4498, 4499, 4500, 4530, 4532, 4534, 6500, 6503],
        ObjectKind::EllipsoidalCs => &[6403, 6422, 6423, 6424],
        ObjectKind::VerticalCs => &[1030, 6495, 6497, 6498, 6499],
        ObjectKind::GeographicCrs => &[4284, 4326],
    }
}

/// Construction surface for datum-family objects, resolved by authority code.
pub trait DatumAuthority {
    /// Dispatches to the concrete datum kind for the given code.
    fn create_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError>;
    fn create_geodetic_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError>;
    fn create_ellipsoid(&self, code: &str) -> Result<Ellipsoid, EpsgError>;
    fn create_prime_meridian(&self, code: &str) -> Result<PrimeMeridian, EpsgError>;
}

/// Construction surface for coordinate systems, axes and units.
pub trait CsAuthority {
    fn create_unit(&self, code: &str) -> Result<Unit, EpsgError>;
    fn create_axis(&self, code: &str) -> Result<Axis, EpsgError>;
    /// Dispatches to the concrete coordinate system kind for the given code.
    fn create_coordinate_system(&self, code: &str) -> Result<CoordinateSystem, EpsgError>;
    fn create_cartesian_cs(&self, code: &str) -> Result<CartesianCs, EpsgError>;
    fn create_ellipsoidal_cs(&self, code: &str) -> Result<EllipsoidalCs, EpsgError>;
    fn create_vertical_cs(&self, code: &str) -> Result<VerticalCs, EpsgError>;
}

/// Construction surface for coordinate reference systems.
pub trait CrsAuthority {
    /// Dispatches to the concrete CRS kind for the given code.
    fn create_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError>;
    fn create_geographic_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError>;
}

/// Parse `"4326"` or `"EPSG:4326"` into the numeric code.
fn parse_code(code: &str) -> Result<u32, EpsgError> {
    let mut remainder = code;
    if let Some((authority, rest)) = code.rsplit_once(':') {
        let authority = authority.trim();
        if !authority.eq_ignore_ascii_case("EPSG") {
            return Err(EpsgError::UnknownAuthority {
                authority: authority.to_string(),
                code: code.to_string(),
            });
        }
        remainder = rest;
    }
    remainder
        .trim()
        .parse::<u32>()
        .map_err(|_| EpsgError::UnparseableCode(code.to_string()))
}

/// Pseudo-factory backed by hard-coded EPSG definitions.
///
/// Holds the units provider, the optional capability objects and the
/// validator bundle, all supplied once at construction and never mutated.
pub struct PseudoEpsgFactory {
    units: Units,
    datum_factory: Option<Arc<dyn DatumFactory>>,
    cs_factory: Option<Arc<dyn CsFactory>>,
    crs_factory: Option<Arc<dyn CrsFactory>>,
    validators: Validators,
}

impl PseudoEpsgFactory {
    pub fn new(
        units: Units,
        datum_factory: Option<Arc<dyn DatumFactory>>,
        cs_factory: Option<Arc<dyn CsFactory>>,
        crs_factory: Option<Arc<dyn CrsFactory>>,
        validators: Validators,
    ) -> Self {
        Self {
            units,
            datum_factory,
            cs_factory,
            crs_factory,
            validators,
        }
    }

    fn datum_factory(&self) -> Result<&dyn DatumFactory, EpsgError> {
        self.datum_factory
            .as_deref()
            .ok_or(EpsgError::MissingCapability("datum factory"))
    }

    fn cs_factory(&self) -> Result<&dyn CsFactory, EpsgError> {
        self.cs_factory
            .as_deref()
            .ok_or(EpsgError::MissingCapability("coordinate-system factory"))
    }

    fn crs_factory(&self) -> Result<&dyn CrsFactory, EpsgError> {
        self.crs_factory
            .as_deref()
            .ok_or(EpsgError::MissingCapability("CRS factory"))
    }

    fn unit_by_id(&self, id: u32) -> Result<Unit, EpsgError> {
        match id {
            9001 => Ok(self.units.metre()),
            9002 => Ok(self.units.foot()),
            9003 => Ok(self.units.us_survey_foot()),
            // 9122 is "degree (supplier to define representation)"
            9102 | 9122 => Ok(self.units.degree()),
            9105 => Ok(self.units.grad()),
            _ => Err(EpsgError::NoSuchCode(id)),
        }
    }

    fn ellipsoid_by_id(&self, id: u32) -> Result<Ellipsoid, EpsgError> {
        let (name, semi_major, shape) = match id {
            7030 => ("WGS 84", 6378137.0, EllipsoidShape::InverseFlattening(298.257223563)),
            7019 => ("GRS 1980", 6378137.0, EllipsoidShape::InverseFlattening(298.2572221)),
            7001 => ("Airy 1830", 6377563.396, EllipsoidShape::InverseFlattening(299.3249646)),
            7004 => ("Bessel 1841", 6377397.155, EllipsoidShape::InverseFlattening(299.1528128)),
            7024 => ("Krassowsky 1940", 6378245.0, EllipsoidShape::InverseFlattening(298.3)),
            7022 => ("International 1924", 6378388.0, EllipsoidShape::InverseFlattening(297.0)),
            // Clarke 1880 (IGN) is defined by both semi-axes in the dataset.
            7011 => ("Clarke 1880 (IGN)", 6378249.2, EllipsoidShape::SemiMinorAxis(6356515.0)),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let unit = self.unit_by_id(9001)?;
        let object = self.datum_factory()?.create_ellipsoid(
            ObjectProperties::epsg(id, name),
            semi_major,
            shape,
            unit,
        )?;
        self.validators.datum.validate_ellipsoid(&object)?;
        Ok(object)
    }

    fn prime_meridian_by_id(&self, id: u32) -> Result<PrimeMeridian, EpsgError> {
        let (name, longitude, unit) = match id {
            8901 => ("Greenwich", 0.0, 9102),
            8903 => ("Paris", 2.5969213, 9105),
            8908 => ("Jakarta", 106.80771944444444, 9102),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let unit = self.unit_by_id(unit)?;
        let object = self.datum_factory()?.create_prime_meridian(
            ObjectProperties::epsg(id, name),
            longitude,
            unit,
        )?;
        self.validators.datum.validate_prime_meridian(&object)?;
        Ok(object)
    }

    fn geodetic_datum_by_id(&self, id: u32) -> Result<GeodeticDatum, EpsgError> {
        let (name, ellipsoid, prime_meridian) = match id {
            6326 => ("World Geodetic System 1984", 7030, 8901),
            6284 => ("Pulkovo 1942", 7024, 8901),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let ellipsoid = self.ellipsoid_by_id(ellipsoid)?;
        let prime_meridian = self.prime_meridian_by_id(prime_meridian)?;
        let object = self.datum_factory()?.create_geodetic_datum(
            ObjectProperties::epsg(id, name),
            ellipsoid,
            prime_meridian,
        )?;
        self.validators.datum.validate_geodetic_datum(&object)?;
        Ok(object)
    }

    fn axis_by_id(&self, id: u32) -> Result<Axis, EpsgError> {
        use AxisDirection::*;
        let (name, abbreviation, direction, unit) = match id {
            1 | 43 => ("Easting", "E", East, 9001),
            2 | 44 => ("Northing", "N", North, 9001),
            41 | 51 => ("Easting", "X", East, 9001),
            42 | 52 => ("Northing", "Y", North, 9001),
            39 | 47 => ("Easting", "Y", East, 9001),
            40 | 48 => ("Northing", "X", North, 9001),
            33 => ("Easting", "X", East, 9002),
            34 => ("Northing", "Y", North, 9002),
            37 => ("Easting", "X", East, 9003),
            38 => ("Northing", "Y", North, 9003),
            122 => ("Westing", "Y", West, 9001),
            123 => ("Southing", "X", South, 9001),
            // The dataset spells out "none" for these two abbreviations.
            183 => ("Northing", "none", North, 9001),
            184 => ("Easting", "none", East, 9001),
            106 | 108 | 221 => ("Geodetic latitude", "Lat", North, 9122),
            58 => ("Geodetic latitude", "Lat", North, 9105),
            107 | 109 | 220 => ("Geodetic longitude", "Long", East, 9122),
            59 => ("Geodetic longitude", "Long", East, 9105),
            110 => ("Ellipsoidal height", "h", Up, 9001),
            115 => ("Geocentric X", "X", GeocentricX, 9001),
            116 => ("Geocentric Y", "Y", GeocentricY, 9001),
            117 => ("Geocentric Z", "Z", GeocentricZ, 9001),
            112 => ("Gravity-related height", "H", Up, 9003),
            113 => ("Gravity-related depth", "D", Down, 9001),
            114 => ("Gravity-related height", "H", Up, 9001),
            214 => ("Gravity-related depth", "D", Down, 9002),
            1082 => ("Gravity-related height", "H", Up, 9002),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let unit = self.unit_by_id(unit)?;
        let object = self.cs_factory()?.create_axis(
            ObjectProperties::epsg(id, name),
            abbreviation,
            direction,
            unit,
        )?;
        self.validators.cs.validate_axis(&object)?;
        Ok(object)
    }

    fn axes_by_id(&self, ids: &[u32]) -> Result<Vec<Axis>, EpsgError> {
        ids.iter().map(|id| self.axis_by_id(*id)).collect()
    }

    fn cartesian_cs_by_id(&self, id: u32) -> Result<CartesianCs, EpsgError> {
        let (name, axes): (&str, &[u32]) = match id {
            4400 => ("Cartesian 2D CS. Axes: easting, northing (E,N). Orientations: east, north. UoM: m.", &[1, 2]),
            4495 => ("Cartesian 2D CS. Axes: easting, northing (X,Y). Orientations: east, north. UoM: ft.", &[33, 34]),
            4497 => ("Cartesian 2D CS. Axes: easting, northing (X,Y). Orientations: east, north. UoM: ftUS.", &[37, 38]),
            4498 => ("Cartesian 2D CS. Axes: easting, northing (Y,X). Orientations: east, north. UoM: m.", &[39, 40]),
            4499 => ("Cartesian 2D CS. Axes: easting, northing (X,Y). Orientations: east, north. UoM: m.", &[41, 42]),
            4500 => ("Cartesian 2D CS. Axes: northing, easting (N,E). Orientations: north, east. UoM: m.", &[44, 43]),
            4530 => ("Cartesian 2D CS. Axes: northing, easting (X,Y). Orientations: north, east. UoM: m.", &[48, 47]),
            4532 => ("Cartesian 2D CS. Axes: northing, easting (Y,X). Orientations: north, east. UoM: m.", &[52, 51]),
            4534 => ("Cartesian 2D CS. Axes: northing, easting (no abbrev). Orientations: north, east. UoM: m.", &[183, 184]),
            6503 => ("Cartesian 2D CS. Axes: westing, southing (Y,X). Orientations: west, south. UoM: m.", &[122, 123]),
            6500 => (
                "Earth centred, earth fixed, righthanded 3D coordinate system, \
                 consisting of 3 orthogonal axes with X and Y axes in the equatorial plane, \
                 positive Z-axis parallel to mean earth rotation axis and pointing towards North Pole. \
                 UoM: m",
                &[115, 116, 117],
            ),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let axes = self.axes_by_id(axes)?;
        let object = self
            .cs_factory()?
            .create_cartesian_cs(ObjectProperties::epsg(id, name), axes)?;
        self.validators.cs.validate_cartesian_cs(&object)?;
        Ok(object)
    }

    fn ellipsoidal_cs_by_id(&self, id: u32) -> Result<EllipsoidalCs, EpsgError> {
        let (name, axes): (&str, &[u32]) = match id {
            6403 => (
                "Ellipsoidal 2D CS. Axes: latitude, longitude. Orientations: north, east. UoM: grads.",
                &[58, 59],
            ),
            6422 => (
                "Ellipsoidal 2D CS. Axes: latitude, longitude. Orientations: north, east. UoM: degree",
                &[106, 107],
            ),
            6423 => (
                "Ellipsoidal 3D CS. Axes: latitude, longitude, ellipsoidal height. \
                 Orientations: north, east, up. UoM: degree, degree, metre.",
                &[108, 109, 110],
            ),
            6424 => (
                "Ellipsoidal 2D CS. Axes: longitude, latitude. Orientations: east, north. UoM: degree",
                &[220, 221],
            ),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let axes = self.axes_by_id(axes)?;
        let object = self
            .cs_factory()?
            .create_ellipsoidal_cs(ObjectProperties::epsg(id, name), axes)?;
        self.validators.cs.validate_ellipsoidal_cs(&object)?;
        Ok(object)
    }

    fn vertical_cs_by_id(&self, id: u32) -> Result<VerticalCs, EpsgError> {
        let (name, axis) = match id {
            1030 => ("Vertical CS. Axis: height (H). Orientation: up. UoM: ft.", 1082),
            6495 => ("Vertical CS. Axis: depth (D). Orientation: down. UoM: ft.", 214),
            6497 => ("Vertical CS. Axis: height (H). Orientation: up. UoM: ftUS.", 112),
            6498 => ("Vertical CS. Axis: depth (D). Orientation: down. UoM: m.", 113),
            6499 => ("Vertical CS. Axis: height (H). Orientation: up. UoM: m.", 114),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let axis = self.axis_by_id(axis)?;
        let object = self
            .cs_factory()?
            .create_vertical_cs(ObjectProperties::epsg(id, name), axis)?;
        self.validators.cs.validate_vertical_cs(&object)?;
        Ok(object)
    }

    fn geographic_crs_by_id(&self, id: u32) -> Result<GeographicCrs, EpsgError> {
        let (name, datum, cs) = match id {
            4326 => ("WGS 84", 6326, 6422),
            4284 => ("Pulkovo 1942", 6284, 6422),
            _ => return Err(EpsgError::NoSuchCode(id)),
        };
        let datum = self.geodetic_datum_by_id(datum)?;
        let cs = self.ellipsoidal_cs_by_id(cs)?;
        let object = self.crs_factory()?.create_geographic_crs(
            ObjectProperties::epsg(id, name),
            datum,
            cs,
        )?;
        self.validators.validate_geographic_crs(&object)?;
        Ok(object)
    }
}

impl DatumAuthority for PseudoEpsgFactory {
    fn create_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError> {
        let id = parse_code(code)?;
        match id {
            6326 => self.geodetic_datum_by_id(id),
            _ => Err(EpsgError::NoSuchCode(id)),
        }
    }

    fn create_geodetic_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating geodetic datum");
        self.geodetic_datum_by_id(id)
    }

    fn create_ellipsoid(&self, code: &str) -> Result<Ellipsoid, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating ellipsoid");
        self.ellipsoid_by_id(id)
    }

    fn create_prime_meridian(&self, code: &str) -> Result<PrimeMeridian, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating prime meridian");
        self.prime_meridian_by_id(id)
    }
}

impl CsAuthority for PseudoEpsgFactory {
    fn create_unit(&self, code: &str) -> Result<Unit, EpsgError> {
        let id = parse_code(code)?;
        self.unit_by_id(id)
    }

    fn create_axis(&self, code: &str) -> Result<Axis, EpsgError> {
        let id = parse_code(code)?;
        self.axis_by_id(id)
    }

    fn create_coordinate_system(&self, code: &str) -> Result<CoordinateSystem, EpsgError> {
        let id = parse_code(code)?;
        match id {
            6422 => self.ellipsoidal_cs_by_id(id).map(CoordinateSystem::Ellipsoidal),
            _ => Err(EpsgError::NoSuchCode(id)),
        }
    }

    fn create_cartesian_cs(&self, code: &str) -> Result<CartesianCs, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating Cartesian CS");
        self.cartesian_cs_by_id(id)
    }

    fn create_ellipsoidal_cs(&self, code: &str) -> Result<EllipsoidalCs, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating ellipsoidal CS");
        self.ellipsoidal_cs_by_id(id)
    }

    fn create_vertical_cs(&self, code: &str) -> Result<VerticalCs, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating vertical CS");
        self.vertical_cs_by_id(id)
    }
}

impl CrsAuthority for PseudoEpsgFactory {
    fn create_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError> {
        let id = parse_code(code)?;
        match id {
            4326 => self.geographic_crs_by_id(id),
            _ => Err(EpsgError::NoSuchCode(id)),
        }
    }

    fn create_geographic_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError> {
        let id = parse_code(code)?;
        trace!(code = id, "creating geographic CRS");
        self.geographic_crs_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::adapters::simple_factory::SimpleObjectFactory;
    use domain::UnitKind;

    fn full_factory() -> PseudoEpsgFactory {
        let objects = Arc::new(SimpleObjectFactory::new());
        PseudoEpsgFactory::new(
            Units::new(),
            Some(objects.clone()),
            Some(objects.clone()),
            Some(objects),
            Validators::new(),
        )
    }

    #[test]
    fn parses_plain_and_prefixed_codes() {
        assert_eq!(parse_code("4326").ok(), Some(4326));
        assert_eq!(parse_code("EPSG:4326").ok(), Some(4326));
        assert_eq!(parse_code(" epsg : 4326 ").ok(), Some(4326));
    }

    #[test]
    fn rejects_foreign_authority() {
        let err = parse_code("IGNF:4326").unwrap_err();
        assert!(matches!(err, EpsgError::UnknownAuthority { .. }));
    }

    #[test]
    fn rejects_non_numeric_code() {
        let err = parse_code("EPSG:abc").unwrap_err();
        assert!(matches!(err, EpsgError::UnparseableCode(_)));
    }

    #[test]
    fn units_cover_the_registry() {
        let factory = full_factory();
        for code in authority_codes(ObjectKind::Unit) {
            let unit = factory.create_unit(&code.to_string()).expect("known unit");
            assert!(unit.to_base > 0.0);
        }
        // 9122 is an alias for the degree.
        assert_eq!(
            factory.create_unit("9122").expect("degree").name,
            factory.create_unit("9102").expect("degree").name
        );
    }

    #[test]
    fn wgs84_ellipsoid_matches_the_dataset() {
        let e = full_factory().create_ellipsoid("EPSG:7030").expect("WGS 84");
        assert_eq!(e.properties.name, "WGS 84");
        assert_eq!(e.semi_major_axis, 6378137.0);
        assert_eq!(e.inverse_flattening(), 298.257223563);
        assert_eq!(e.unit.kind, UnitKind::Length);
    }

    #[test]
    fn clarke_ign_is_defined_by_semi_minor() {
        let e = full_factory().create_ellipsoid("7011").expect("Clarke 1880 (IGN)");
        assert_eq!(e.semi_minor_axis(), 6356515.0);
        assert!(matches!(e.shape, EllipsoidShape::SemiMinorAxis(_)));
    }

    #[test]
    fn paris_meridian_uses_grads() {
        let pm = full_factory().create_prime_meridian("8903").expect("Paris");
        assert_eq!(pm.greenwich_longitude, 2.5969213);
        assert_eq!(pm.unit.name, "grad");
        assert!((pm.longitude_degrees() - 2.33722917).abs() < 1e-7);
    }

    #[test]
    fn datum_6326_assembles_wgs84_and_greenwich() {
        let datum = full_factory().create_geodetic_datum("6326").expect("WGS 84 datum");
        assert_eq!(datum.properties.name, "World Geodetic System 1984");
        assert_eq!(datum.ellipsoid.properties.name, "WGS 84");
        assert_eq!(datum.prime_meridian.properties.name, "Greenwich");
        assert_eq!(datum.prime_meridian.greenwich_longitude, 0.0);
    }

    #[test]
    fn datum_dispatch_only_knows_6326() {
        let factory = full_factory();
        assert!(factory.create_datum("6326").is_ok());
        assert!(matches!(
            factory.create_datum("6284").unwrap_err(),
            EpsgError::NoSuchCode(6284)
        ));
        // The specific operation still knows Pulkovo 1942.
        assert!(factory.create_geodetic_datum("6284").is_ok());
    }

    #[test]
    fn geocentric_cs_6500_has_three_axes() {
        let cs = full_factory().create_cartesian_cs("6500").expect("geocentric CS");
        assert_eq!(cs.dimension(), 3);
        assert_eq!(cs.axes[2].direction, AxisDirection::GeocentricZ);
    }

    #[test]
    fn ellipsoidal_cs_6424_swaps_axis_order() {
        let cs = full_factory().create_ellipsoidal_cs("6424").expect("lon-lat CS");
        assert_eq!(cs.axes[0].direction, AxisDirection::East);
        assert_eq!(cs.axes[1].direction, AxisDirection::North);
    }

    #[test]
    fn vertical_depth_cs_points_down() {
        let cs = full_factory().create_vertical_cs("6498").expect("depth CS");
        assert_eq!(cs.axis.direction, AxisDirection::Down);
        assert_eq!(cs.axis.abbreviation, "D");
    }

    #[test]
    fn geographic_crs_4326_composes_datum_and_cs() {
        let crs = full_factory().create_geographic_crs("EPSG:4326").expect("WGS 84");
        assert_eq!(crs.properties.name, "WGS 84");
        assert_eq!(crs.datum.properties.identifier, Some(domain::Identifier::epsg(6326)));
        assert_eq!(crs.cs.dimension(), 2);
    }

    #[test]
    fn every_registry_code_constructs_and_validates() {
        let factory = full_factory();
        for code in authority_codes(ObjectKind::Ellipsoid) {
            factory.create_ellipsoid(&code.to_string()).expect("ellipsoid");
        }
        for code in authority_codes(ObjectKind::PrimeMeridian) {
            factory.create_prime_meridian(&code.to_string()).expect("prime meridian");
        }
        for code in authority_codes(ObjectKind::GeodeticDatum) {
            factory.create_geodetic_datum(&code.to_string()).expect("datum");
        }
        for code in authority_codes(ObjectKind::Axis) {
            factory.create_axis(&code.to_string()).expect("axis");
        }
        for code in authority_codes(ObjectKind::CartesianCs) {
            factory.create_cartesian_cs(&code.to_string()).expect("Cartesian CS");
        }
        for code in authority_codes(ObjectKind::EllipsoidalCs) {
            factory.create_ellipsoidal_cs(&code.to_string()).expect("ellipsoidal CS");
        }
        for code in authority_codes(ObjectKind::VerticalCs) {
            factory.create_vertical_cs(&code.to_string()).expect("vertical CS");
        }
        for code in authority_codes(ObjectKind::GeographicCrs) {
            factory.create_geographic_crs(&code.to_string()).expect("geographic CRS");
        }
    }

    #[test]
    fn missing_datum_factory_surfaces_at_call_time() {
        let objects = Arc::new(SimpleObjectFactory::new());
        let factory = PseudoEpsgFactory::new(
            Units::new(),
            None,
            Some(objects),
            None,
            Validators::new(),
        );
        let err = factory.create_ellipsoid("7030").unwrap_err();
        assert!(matches!(err, EpsgError::MissingCapability("datum factory")));
        // Units need no capability object.
        assert!(factory.create_unit("9001").is_ok());
    }

    #[test]
    fn unknown_codes_are_reported_per_family() {
        let factory = full_factory();
        assert!(matches!(
            factory.create_ellipsoid("9999").unwrap_err(),
            EpsgError::NoSuchCode(9999)
        ));
        assert!(matches!(
            factory.create_vertical_cs("4400").unwrap_err(),
            EpsgError::NoSuchCode(4400)
        ));
    }
}
