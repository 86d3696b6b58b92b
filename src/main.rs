use anyhow::{Context, Result};
use geocrunch::{
    measure, population,
    table::{derive, load_csv, IndexColumn},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const BRICS_CSV: &str = "data/brics.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) population reference table ───────────────────────────────
    population::log_reference_table();
    info!(
        countries = population::WORLD_POPULATION.len(),
        "population reference ready"
    );

    // ─── 3) body-mass metrics ────────────────────────────────────────
    let measurements = measure::measurement_batch()?;
    info!(
        subjects = measurements.num_rows(),
        "computed BMI for measurement set"
    );

    // ─── 4) load the BRICS table ─────────────────────────────────────
    let mut brics = load_csv(BRICS_CSV, IndexColumn::Position(0))
        .with_context(|| format!("loading {BRICS_CSV}"))?;

    // ─── 5) derive length columns ────────────────────────────────────
    derive::derive_length_rowwise(&mut brics, "country", "name_length")?;
    derive::derive_length_columnar(&mut brics, "capital", "cap_length")?;

    // ─── 6) print the augmented table ────────────────────────────────
    println!("{}", brics.render()?);

    info!("done");
    Ok(())
}
