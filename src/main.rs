use anyhow::{Context, Result};
use heatshelter::models::parse_shelter_table;
use heatshelter::{Coordinates, PipelineConfig, ProximityFilter, format_bulletin, parse_warnings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = PipelineConfig::default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(shelter_path), Some(warning_path), Some(lat), Some(lon)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        eprintln!("Usage: heatshelter <shelters.csv> <warnings.xml> <latitude> <longitude>");
        std::process::exit(2);
    };

    let reference = Coordinates {
        latitude: lat.parse().context("invalid latitude")?,
        longitude: lon.parse().context("invalid longitude")?,
    };

    let shelter_text =
        std::fs::read_to_string(&shelter_path).context("failed to read shelter table")?;
    let shelters = parse_shelter_table(&shelter_text);

    let filter = ProximityFilter::from_config(&config.proximity);
    let nearby = filter.nearby_with_distance(&shelters, &reference);

    println!(
        "Found {} shelters within {:.0}m of ({:.4}, {:.4}):",
        nearby.len(),
        filter.radius_meters(),
        reference.latitude,
        reference.longitude
    );
    for (shelter, distance) in &nearby {
        println!(
            "  - {} ({:.0}m away) - {} - 수용인원 {}명",
            shelter.title,
            distance,
            shelter.type_label(),
            shelter.capacity
        );
    }

    let warning_xml =
        std::fs::read_to_string(&warning_path).context("failed to read warning feed")?;
    let display: Vec<_> = match parse_warnings(&warning_xml) {
        Ok(records) => records.iter().map(|r| r.to_display()).collect(),
        Err(e) => {
            eprintln!("Warning feed could not be parsed: {e}");
            Vec::new()
        }
    };

    println!("\n{}", format_bulletin(&display));

    Ok(())
}
