use std::env;
use std::process;

use domain::adapters::simple_factory::SimpleObjectFactory;
use domain::units::Units;
use domain::validate::Validators;
use domain::{AxisDirection, CsFactory, DatumFactory, EllipsoidShape, ObjectProperties};

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain ellipsoid <name> <semi-major-m> <inverse-flattening>\n  domain meridian <name> <longitude-deg>\n  domain axis <name> <abbrev> <direction> <m|deg>\n\nNotes:\n  - This demo CLI builds objects with the in-crate factory and runs the\n    full validator bundle on the result.",
        domain::about()
    );
}

fn parse_f64(what: &str, s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("{} must be a number, got {:?}", what, s))
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };

    // Construct the demo factory and validators
    let factory = SimpleObjectFactory::new();
    let units = Units::new();
    let validators = Validators::new();

    match cmd.as_str() {
        "ellipsoid" => {
            let (Some(name), Some(a), Some(f)) = (args.next(), args.next(), args.next()) else {
                return Err("usage: ellipsoid <name> <semi-major-m> <inverse-flattening>".into());
            };
            let semi_major = parse_f64("semi-major axis", &a)?;
            let inv_f = parse_f64("inverse flattening", &f)?;
            let ellipsoid = factory
                .create_ellipsoid(
                    ObjectProperties::named(name),
                    semi_major,
                    EllipsoidShape::InverseFlattening(inv_f),
                    units.metre(),
                )
                .map_err(|e| format!("create failed: {}", e))?;
            validators
                .datum
                .validate_ellipsoid(&ellipsoid)
                .map_err(|e| format!("{}", e))?;
            println!(
                "{}: a = {} m, b = {:.4} m, 1/f = {}",
                ellipsoid.properties.name,
                ellipsoid.semi_major_axis,
                ellipsoid.semi_minor_axis(),
                ellipsoid.inverse_flattening()
            );
            Ok(())
        }
        "meridian" => {
            let (Some(name), Some(lon)) = (args.next(), args.next()) else {
                return Err("usage: meridian <name> <longitude-deg>".into());
            };
            let longitude = parse_f64("longitude", &lon)?;
            let meridian = factory
                .create_prime_meridian(ObjectProperties::named(name), longitude, units.degree())
                .map_err(|e| format!("create failed: {}", e))?;
            validators
                .datum
                .validate_prime_meridian(&meridian)
                .map_err(|e| format!("{}", e))?;
            println!(
                "{}: {}° from Greenwich",
                meridian.properties.name,
                meridian.longitude_degrees()
            );
            Ok(())
        }
        "axis" => {
            let (Some(name), Some(abbrev), Some(dir), Some(unit)) =
                (args.next(), args.next(), args.next(), args.next())
            else {
                return Err("usage: axis <name> <abbrev> <direction> <m|deg>".into());
            };
            let direction = AxisDirection::parse(&dir)
                .ok_or_else(|| format!("unknown axis direction: {}", dir))?;
            let unit = match unit.as_str() {
                "m" => units.metre(),
                "deg" => units.degree(),
                other => return Err(format!("unknown unit: {} (expected m or deg)", other)),
            };
            let axis = factory
                .create_axis(ObjectProperties::named(name), &abbrev, direction, unit)
                .map_err(|e| format!("create failed: {}", e))?;
            validators
                .cs
                .validate_axis(&axis)
                .map_err(|e| format!("{}", e))?;
            println!(
                "{} ({}): {} in {}",
                axis.properties.name,
                axis.abbreviation,
                axis.direction.as_str(),
                axis.unit.name
            );
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
