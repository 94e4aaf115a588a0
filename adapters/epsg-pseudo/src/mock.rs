//! Mock factory for backfilling EPSG objects a test dataset references but
//! does not define.
//!
//! Wraps a [`PseudoEpsgFactory`] preconfigured with the datum and
//! coordinate-system capabilities only; the CRS capability is deliberately
//! absent, so CRS requests fail at call time with `MissingCapability`. The
//! coordinate-system factory handed in at construction stays reachable
//! through [`EpsgMock::cs_factory`] so callers can build additional
//! coordinate systems consistent with the mock's own output.

use std::sync::Arc;

use domain::units::Units;
use domain::validate::Validators;
use domain::{
    Axis, CartesianCs, CoordinateSystem, CsFactory, DatumFactory, Ellipsoid, EllipsoidalCs,
    GeodeticDatum, GeographicCrs, PrimeMeridian, Unit, VerticalCs,
};

use crate::{CrsAuthority, CsAuthority, DatumAuthority, EpsgError, PseudoEpsgFactory};

/// Pseudo-factory for dependency objects of a conformance dataset.
///
/// Holds no state of its own beyond the wrapped factory; construction never
/// fails and never validates the supplied capability objects. Incompatible
/// inputs surface later, as failures of the construction operations.
pub struct EpsgMock {
    factory: PseudoEpsgFactory,
    cs_factory: Option<Arc<dyn CsFactory>>,
}

impl EpsgMock {
    /// Wire the supplied capabilities into a pseudo-factory, leaving the CRS
    /// capability absent.
    pub fn new(
        units: Units,
        datum_factory: Option<Arc<dyn DatumFactory>>,
        cs_factory: Option<Arc<dyn CsFactory>>,
        validators: Validators,
    ) -> Self {
        let factory = PseudoEpsgFactory::new(
            units,
            datum_factory,
            cs_factory.clone(),
            None,
            validators,
        );
        Self {
            factory,
            cs_factory,
        }
    }

    /// The coordinate-system factory supplied at construction, unchanged.
    pub fn cs_factory(&self) -> Option<Arc<dyn CsFactory>> {
        self.cs_factory.clone()
    }
}

impl DatumAuthority for EpsgMock {
    fn create_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError> {
        self.factory.create_datum(code)
    }

    fn create_geodetic_datum(&self, code: &str) -> Result<GeodeticDatum, EpsgError> {
        self.factory.create_geodetic_datum(code)
    }

    fn create_ellipsoid(&self, code: &str) -> Result<Ellipsoid, EpsgError> {
        self.factory.create_ellipsoid(code)
    }

    fn create_prime_meridian(&self, code: &str) -> Result<PrimeMeridian, EpsgError> {
        self.factory.create_prime_meridian(code)
    }
}

impl CsAuthority for EpsgMock {
    fn create_unit(&self, code: &str) -> Result<Unit, EpsgError> {
        self.factory.create_unit(code)
    }

    fn create_axis(&self, code: &str) -> Result<Axis, EpsgError> {
        self.factory.create_axis(code)
    }

    fn create_coordinate_system(&self, code: &str) -> Result<CoordinateSystem, EpsgError> {
        self.factory.create_coordinate_system(code)
    }

    fn create_cartesian_cs(&self, code: &str) -> Result<CartesianCs, EpsgError> {
        self.factory.create_cartesian_cs(code)
    }

    fn create_ellipsoidal_cs(&self, code: &str) -> Result<EllipsoidalCs, EpsgError> {
        self.factory.create_ellipsoidal_cs(code)
    }

    fn create_vertical_cs(&self, code: &str) -> Result<VerticalCs, EpsgError> {
        self.factory.create_vertical_cs(code)
    }
}

impl CrsAuthority for EpsgMock {
    fn create_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError> {
        self.factory.create_crs(code)
    }

    fn create_geographic_crs(&self, code: &str) -> Result<GeographicCrs, EpsgError> {
        self.factory.create_geographic_crs(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::adapters::simple_factory::SimpleObjectFactory;

    fn mock() -> EpsgMock {
        let objects = Arc::new(SimpleObjectFactory::new());
        EpsgMock::new(
            Units::new(),
            Some(objects.clone()),
            Some(objects),
            Validators::new(),
        )
    }

    #[test]
    fn cs_factory_accessor_preserves_identity() {
        let objects: Arc<dyn CsFactory> = Arc::new(SimpleObjectFactory::new());
        let datums: Arc<dyn DatumFactory> = Arc::new(SimpleObjectFactory::new());
        let mock = EpsgMock::new(
            Units::new(),
            Some(datums),
            Some(objects.clone()),
            Validators::new(),
        );
        let first = mock.cs_factory().expect("factory was supplied");
        let second = mock.cs_factory().expect("factory was supplied");
        assert!(Arc::ptr_eq(&first, &objects));
        assert!(Arc::ptr_eq(&second, &objects));
    }

    #[test]
    fn construction_with_absent_cs_factory_succeeds() {
        let datums: Arc<dyn DatumFactory> = Arc::new(SimpleObjectFactory::new());
        let mock = EpsgMock::new(Units::new(), Some(datums), None, Validators::new());
        assert!(mock.cs_factory().is_none());
        // The failure belongs to the downstream operation, not the adapter.
        let err = mock.create_ellipsoidal_cs("6422").unwrap_err();
        assert!(matches!(
            err,
            EpsgError::MissingCapability("coordinate-system factory")
        ));
    }

    #[test]
    fn crs_capability_is_disabled() {
        let err = mock().create_geographic_crs("4326").unwrap_err();
        assert!(matches!(err, EpsgError::MissingCapability("CRS factory")));
    }

    #[test]
    fn backfills_an_epsg_datum_end_to_end() {
        let objects = Arc::new(SimpleObjectFactory::new());
        // Empty validator bundle: the mock must not reject anything itself.
        let mock = EpsgMock::new(
            Units::new(),
            Some(objects.clone()),
            Some(objects),
            Validators::none(),
        );
        let datum = mock.create_geodetic_datum("EPSG:6326").expect("WGS 84 datum");
        assert_eq!(datum.properties.name, "World Geodetic System 1984");
        assert_eq!(datum.ellipsoid.semi_major_axis, 6378137.0);
        assert_eq!(datum.prime_meridian.longitude_degrees(), 0.0);
    }

    #[test]
    fn exposes_the_full_base_surface() {
        let mock = mock();
        assert!(mock.create_unit("9102").is_ok());
        assert!(mock.create_axis("106").is_ok());
        assert!(mock.create_cartesian_cs("4400").is_ok());
        assert!(mock.create_vertical_cs("6499").is_ok());
        assert!(mock.create_datum("6326").is_ok());
        let cs = mock.create_coordinate_system("6422").expect("dispatched CS");
        assert_eq!(cs.dimension(), 2);
        assert!(cs.name().starts_with("Ellipsoidal 2D CS"));
    }
}
