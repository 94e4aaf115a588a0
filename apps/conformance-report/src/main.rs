//! conformance-report — Builds every object in the pseudo-EPSG registry and
//! emits a JSON report of the outcome.
//!
//! Wires a fully-equipped pseudo-factory (all three capability objects backed
//! by the in-crate `SimpleObjectFactory`, full validator bundle), walks the
//! supported authority codes of every object family, and records for each
//! code whether construction and validation succeeded.
//!
//! Run:
//! ```bash
//! # pretty logs (default); report on stdout
//! cargo run -p conformance-report
//!
//! # strict mode, JSON logs, report to a file
//! REPORT_STRICT=1 REPORT_LOG_FORMAT=json REPORT_OUTPUT=report.json \
//!   cargo run -p conformance-report
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;

use std::fs;
use std::process;
use std::sync::Arc;

use domain::adapters::simple_factory::SimpleObjectFactory;
use domain::units::Units;
use domain::validate::Validators;
use epsg_pseudo::{
    authority_codes, CrsAuthority, CsAuthority, DatumAuthority, EpsgError, ObjectKind,
    PseudoEpsgFactory,
};
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Outcome of building one registry object.
#[derive(Serialize)]
struct ReportEntry {
    kind: &'static str,
    code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Report {
    generated_at: String,
    generator: String,
    total: usize,
    failures: usize,
    entries: Vec<ReportEntry>,
}

/// Build one object and return its name for the report.
fn build_object(
    factory: &PseudoEpsgFactory,
    kind: ObjectKind,
    code: u32,
) -> Result<String, EpsgError> {
    let code = code.to_string();
    match kind {
        ObjectKind::Unit => factory.create_unit(&code).map(|u| u.name),
        ObjectKind::Ellipsoid => factory.create_ellipsoid(&code).map(|o| o.properties.name),
        ObjectKind::PrimeMeridian => factory
            .create_prime_meridian(&code)
            .map(|o| o.properties.name),
        ObjectKind::GeodeticDatum => factory
            .create_geodetic_datum(&code)
            .map(|o| o.properties.name),
        ObjectKind::Axis => factory.create_axis(&code).map(|o| o.properties.name),
        ObjectKind::CartesianCs => factory.create_cartesian_cs(&code).map(|o| o.properties.name),
        ObjectKind::EllipsoidalCs => factory
            .create_ellipsoidal_cs(&code)
            .map(|o| o.properties.name),
        ObjectKind::VerticalCs => factory.create_vertical_cs(&code).map(|o| o.properties.name),
        ObjectKind::GeographicCrs => factory
            .create_geographic_crs(&code)
            .map(|o| o.properties.name),
    }
}

fn main() {
    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    init_tracing(&cfg);
    info!("{}", domain::about());

    let objects = Arc::new(SimpleObjectFactory::new());
    let factory = PseudoEpsgFactory::new(
        Units::new(),
        Some(objects.clone()),
        Some(objects.clone()),
        Some(objects),
        Validators::new(),
    );

    let mut entries = Vec::new();
    let mut failures = 0;
    for kind in ObjectKind::ALL {
        for &code in authority_codes(kind) {
            match build_object(&factory, kind, code) {
                Ok(name) => {
                    debug!(kind = kind.as_str(), code, name = %name, "built");
                    entries.push(ReportEntry {
                        kind: kind.as_str(),
                        code,
                        name: Some(name),
                        ok: true,
                        error: None,
                    });
                }
                Err(e) => {
                    error!(kind = kind.as_str(), code, "failed: {}", e);
                    failures += 1;
                    entries.push(ReportEntry {
                        kind: kind.as_str(),
                        code,
                        name: None,
                        ok: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }
    }

    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        generator: format!("conformance-report v{}", env!("CARGO_PKG_VERSION")),
        total: entries.len(),
        failures,
        entries,
    };
    let json = serde_json::to_string_pretty(&report).expect("report is serializable");

    match &cfg.output {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("failed to write {}: {}", path.display(), e);
                process::exit(2);
            }
            info!(path = %path.display(), "report written");
        }
        None => println!("{}", json),
    }

    info!(total = report.total, failures, "report complete");
    if cfg.strict && failures > 0 {
        process::exit(1);
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,conformance_report=debug"));
    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Pretty => {
            registry.with(fmt::layer()).init();
        }
        config::LogFormat::Json => {
            registry.with(fmt::layer().json()).init();
        }
    }
}
