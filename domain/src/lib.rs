//! Domain library for the Georef Testkit.
//!
//! This crate holds the geodetic object model (units, ellipsoids, prime
//! meridians, datums, coordinate systems, CRS), the capability ports (traits)
//! implemented by object factories, and the error definitions. Keep adapters
//! and IO concerns out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// An identifier allocated by an authority registry, e.g. `EPSG:7030`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub authority: String,
    pub code: u32,
}

impl Identifier {
    /// Identifier in the EPSG geodetic dataset.
    pub fn epsg(code: u32) -> Self {
        Self {
            authority: "EPSG".to_string(),
            code,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

/// Construction properties common to every geodetic object: a name and an
/// optional authority identifier. Factories receive these instead of loose
/// parameters so that callers control naming and identification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectProperties {
    pub name: String,
    pub identifier: Option<Identifier>,
}

impl ObjectProperties {
    /// Properties for an object defined by the EPSG dataset.
    pub fn epsg<S: Into<String>>(code: u32, name: S) -> Self {
        Self {
            name: name.into(),
            identifier: Some(Identifier::epsg(code)),
        }
    }

    /// Properties for an ad-hoc object without an authority identifier.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            identifier: None,
        }
    }
}

/// Physical quantity measured by a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnitKind {
    Length,
    Angle,
}

/// A unit of measure with its conversion factor to the SI base unit of its
/// kind (metre for lengths, radian for angles).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Unit {
    pub name: String,
    pub kind: UnitKind,
    /// Multiply a value in this unit by `to_base` to obtain metres or radians.
    pub to_base: f64,
}

impl Unit {
    pub fn length<S: Into<String>>(name: S, to_metres: f64) -> Self {
        Self {
            name: name.into(),
            kind: UnitKind::Length,
            to_base: to_metres,
        }
    }

    pub fn angle<S: Into<String>>(name: S, to_radians: f64) -> Self {
        Self {
            name: name.into(),
            kind: UnitKind::Angle,
            to_base: to_radians,
        }
    }

    /// Convert a value expressed in this unit to the SI base unit.
    pub fn convert_to_base(&self, value: f64) -> f64 {
        value * self.to_base
    }
}

/// Second defining parameter of an ellipsoid. EPSG defines some ellipsoids by
/// their semi-minor axis and others by their inverse flattening; the one not
/// given is derived on demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum EllipsoidShape {
    SemiMinorAxis(f64),
    InverseFlattening(f64),
}

/// An ellipsoid of revolution approximating the figure of the Earth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ellipsoid {
    pub properties: ObjectProperties,
    pub semi_major_axis: f64,
    pub shape: EllipsoidShape,
    /// Unit of both axis lengths.
    pub unit: Unit,
}

impl Ellipsoid {
    /// Semi-minor axis, derived from the inverse flattening when that is the
    /// definitive parameter.
    pub fn semi_minor_axis(&self) -> f64 {
        match self.shape {
            EllipsoidShape::SemiMinorAxis(b) => b,
            EllipsoidShape::InverseFlattening(f) => self.semi_major_axis * (1.0 - 1.0 / f),
        }
    }

    /// Inverse flattening, derived from the semi-minor axis when that is the
    /// definitive parameter. Infinite for a sphere.
    pub fn inverse_flattening(&self) -> f64 {
        match self.shape {
            EllipsoidShape::InverseFlattening(f) => f,
            EllipsoidShape::SemiMinorAxis(b) => self.semi_major_axis / (self.semi_major_axis - b),
        }
    }
}

/// The meridian from which longitudes are reckoned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimeMeridian {
    pub properties: ObjectProperties,
    /// Longitude relative to Greenwich, in `unit`.
    pub greenwich_longitude: f64,
    pub unit: Unit,
}

impl PrimeMeridian {
    /// Greenwich longitude converted to decimal degrees.
    pub fn longitude_degrees(&self) -> f64 {
        self.unit.convert_to_base(self.greenwich_longitude).to_degrees()
    }
}

/// Direction of a coordinate system axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AxisDirection {
    North,
    South,
    East,
    West,
    Up,
    Down,
    GeocentricX,
    GeocentricY,
    GeocentricZ,
}

impl AxisDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisDirection::North => "north",
            AxisDirection::South => "south",
            AxisDirection::East => "east",
            AxisDirection::West => "west",
            AxisDirection::Up => "up",
            AxisDirection::Down => "down",
            AxisDirection::GeocentricX => "geocentricX",
            AxisDirection::GeocentricY => "geocentricY",
            AxisDirection::GeocentricZ => "geocentricZ",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" => Some(AxisDirection::North),
            "south" => Some(AxisDirection::South),
            "east" => Some(AxisDirection::East),
            "west" => Some(AxisDirection::West),
            "up" => Some(AxisDirection::Up),
            "down" => Some(AxisDirection::Down),
            "geocentricx" => Some(AxisDirection::GeocentricX),
            "geocentricy" => Some(AxisDirection::GeocentricY),
            "geocentricz" => Some(AxisDirection::GeocentricZ),
            _ => None,
        }
    }

    /// Whether two directions point along the same line in opposite senses.
    /// Geocentric directions have no opposite in the model.
    pub fn is_opposite(&self, other: &AxisDirection) -> bool {
        matches!(
            (self, other),
            (AxisDirection::North, AxisDirection::South)
                | (AxisDirection::South, AxisDirection::North)
                | (AxisDirection::East, AxisDirection::West)
                | (AxisDirection::West, AxisDirection::East)
                | (AxisDirection::Up, AxisDirection::Down)
                | (AxisDirection::Down, AxisDirection::Up)
        )
    }

}

/// One axis of a coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub properties: ObjectProperties,
    pub abbreviation: String,
    pub direction: AxisDirection,
    pub unit: Unit,
}

/// A 2- or 3-dimensional Cartesian coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartesianCs {
    pub properties: ObjectProperties,
    pub axes: Vec<Axis>,
}

impl CartesianCs {
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }
}

/// A 2- or 3-dimensional ellipsoidal (geodetic latitude/longitude, optionally
/// ellipsoidal height) coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EllipsoidalCs {
    pub properties: ObjectProperties,
    pub axes: Vec<Axis>,
}

impl EllipsoidalCs {
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }
}

/// A 1-dimensional vertical (height or depth) coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerticalCs {
    pub properties: ObjectProperties,
    pub axis: Axis,
}

/// Any coordinate system the model knows about, for operations that dispatch
/// on the concrete kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CoordinateSystem {
    Cartesian(CartesianCs),
    Ellipsoidal(EllipsoidalCs),
    Vertical(VerticalCs),
}

impl CoordinateSystem {
    pub fn name(&self) -> &str {
        match self {
            CoordinateSystem::Cartesian(cs) => &cs.properties.name,
            CoordinateSystem::Ellipsoidal(cs) => &cs.properties.name,
            CoordinateSystem::Vertical(cs) => &cs.properties.name,
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            CoordinateSystem::Cartesian(cs) => cs.dimension(),
            CoordinateSystem::Ellipsoidal(cs) => cs.dimension(),
            CoordinateSystem::Vertical(_) => 1,
        }
    }
}

/// A geodetic datum: an ellipsoid anchored by a prime meridian.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeodeticDatum {
    pub properties: ObjectProperties,
    pub ellipsoid: Ellipsoid,
    pub prime_meridian: PrimeMeridian,
}

/// A geographic coordinate reference system: a geodetic datum combined with
/// an ellipsoidal coordinate system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeographicCrs {
    pub properties: ObjectProperties,
    pub datum: GeodeticDatum,
    pub cs: EllipsoidalCs,
}

/// Capability port for building datum-family objects.
pub trait DatumFactory: Send + Sync {
    fn create_ellipsoid(
        &self,
        properties: ObjectProperties,
        semi_major_axis: f64,
        shape: EllipsoidShape,
        unit: Unit,
    ) -> Result<Ellipsoid, FactoryError>;

    fn create_prime_meridian(
        &self,
        properties: ObjectProperties,
        greenwich_longitude: f64,
        unit: Unit,
    ) -> Result<PrimeMeridian, FactoryError>;

    fn create_geodetic_datum(
        &self,
        properties: ObjectProperties,
        ellipsoid: Ellipsoid,
        prime_meridian: PrimeMeridian,
    ) -> Result<GeodeticDatum, FactoryError>;
}

/// Capability port for building coordinate systems and their axes.
pub trait CsFactory: Send + Sync {
    fn create_axis(
        &self,
        properties: ObjectProperties,
        abbreviation: &str,
        direction: AxisDirection,
        unit: Unit,
    ) -> Result<Axis, FactoryError>;

    fn create_cartesian_cs(
        &self,
        properties: ObjectProperties,
        axes: Vec<Axis>,
    ) -> Result<CartesianCs, FactoryError>;

    fn create_ellipsoidal_cs(
        &self,
        properties: ObjectProperties,
        axes: Vec<Axis>,
    ) -> Result<EllipsoidalCs, FactoryError>;

    fn create_vertical_cs(
        &self,
        properties: ObjectProperties,
        axis: Axis,
    ) -> Result<VerticalCs, FactoryError>;
}

/// Capability port for building coordinate reference systems.
pub trait CrsFactory: Send + Sync {
    fn create_geographic_crs(
        &self,
        properties: ObjectProperties,
        datum: GeodeticDatum,
        cs: EllipsoidalCs,
    ) -> Result<GeographicCrs, FactoryError>;
}

/// Core domain errors (no external error crates to keep deps at zero).
#[derive(Debug)]
pub enum FactoryError {
    /// A defining parameter is out of the constructible range.
    InvalidDefinition(String),
    /// A constructed object failed a conformance check.
    Validation(String),
    /// The factory could not build the object for another reason.
    Construction(String),
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::InvalidDefinition(msg) => write!(f, "invalid definition: {}", msg),
            FactoryError::Validation(msg) => write!(f, "validation failed: {}", msg),
            FactoryError::Construction(msg) => write!(f, "construction failed: {}", msg),
        }
    }
}

impl Error for FactoryError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    // Use env! at compile time; fallback literals kept minimal.
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} — geodetic domain library loaded", pkg, ver)
}

// Re-export modules when added
pub mod adapters;
pub mod units;
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_displays_authority_and_code() {
        let id = Identifier::epsg(7030);
        assert_eq!(id.to_string(), "EPSG:7030");
    }

    #[test]
    fn ellipsoid_derives_semi_minor_from_flattening() {
        let e = Ellipsoid {
            properties: ObjectProperties::epsg(7030, "WGS 84"),
            semi_major_axis: 6378137.0,
            shape: EllipsoidShape::InverseFlattening(298.257223563),
            unit: Unit::length("metre", 1.0),
        };
        let b = e.semi_minor_axis();
        assert!((b - 6356752.314245179).abs() < 1e-6);
        assert_eq!(e.inverse_flattening(), 298.257223563);
    }

    #[test]
    fn ellipsoid_derives_flattening_from_semi_minor() {
        let e = Ellipsoid {
            properties: ObjectProperties::epsg(7011, "Clarke 1880 (IGN)"),
            semi_major_axis: 6378249.2,
            shape: EllipsoidShape::SemiMinorAxis(6356515.0),
            unit: Unit::length("metre", 1.0),
        };
        assert_eq!(e.semi_minor_axis(), 6356515.0);
        assert!((e.inverse_flattening() - 293.466021).abs() < 1e-3);
    }

    #[test]
    fn axis_direction_round_trips_through_parse() {
        for d in [
            AxisDirection::North,
            AxisDirection::West,
            AxisDirection::Down,
            AxisDirection::GeocentricZ,
        ] {
            assert_eq!(AxisDirection::parse(d.as_str()), Some(d));
        }
        assert_eq!(AxisDirection::parse("sideways"), None);
    }

    #[test]
    fn opposite_directions() {
        assert!(AxisDirection::North.is_opposite(&AxisDirection::South));
        assert!(AxisDirection::Up.is_opposite(&AxisDirection::Down));
        assert!(!AxisDirection::North.is_opposite(&AxisDirection::East));
        assert!(!AxisDirection::GeocentricX.is_opposite(&AxisDirection::GeocentricY));
    }

    #[test]
    fn prime_meridian_longitude_in_degrees() {
        let pm = PrimeMeridian {
            properties: ObjectProperties::epsg(8903, "Paris"),
            greenwich_longitude: 2.5969213,
            unit: Unit::angle("grad", std::f64::consts::PI / 200.0),
        };
        assert!((pm.longitude_degrees() - 2.33722917).abs() < 1e-7);
    }
}
