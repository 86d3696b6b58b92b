// src/population/mod.rs
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

/// World population figures in millions, keyed by lowercase country name.
/// Reference data only; nothing downstream depends on it.
pub static WORLD_POPULATION: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
    BTreeMap::from([
        ("afghanistan", 30.55),
        ("albania", 2.77),
        ("algeria", 39.21),
        ("andorra", 0.08),
        ("angola", 25.83),
        ("argentina", 43.85),
        ("armenia", 2.92),
        ("australia", 24.13),
        ("austria", 8.69),
        ("azerbaijan", 9.65),
        ("bangladesh", 161.20),
        ("belarus", 9.50),
        ("belgium", 11.31),
        ("bhutan", 0.78),
        ("bolivia", 11.05),
        ("brazil", 207.65),
        ("canada", 36.29),
        ("chile", 17.91),
        ("china", 1408.09),
        ("colombia", 48.65),
        ("cuba", 11.24),
        ("denmark", 5.75),
        ("egypt", 94.98),
        ("ethiopia", 102.40),
        ("france", 66.90),
        ("germany", 82.79),
        ("india", 1324.17),
        ("indonesia", 260.58),
        ("iran", 80.28),
        ("iraq", 37.20),
        ("italy", 60.60),
        ("japan", 126.70),
        ("kenya", 47.25),
        ("mexico", 127.54),
        ("nigeria", 186.99),
        ("russia", 144.34),
        ("south africa", 55.91),
        ("spain", 46.56),
        ("united kingdom", 65.64),
        ("united states", 323.95),
        ("vietnam", 92.70),
        ("zimbabwe", 16.15),
    ])
});

/// Look up the recorded population (in millions) for `country`.
pub fn population_of(country: &str) -> Result<f64> {
    WORLD_POPULATION
        .get(country)
        .copied()
        .ok_or_else(|| anyhow!("no population recorded for {country:?}"))
}

/// Emit the whole reference table to the log, one entry per country.
pub fn log_reference_table() {
    for (country, millions) in WORLD_POPULATION.iter() {
        debug!(country = %country, millions = *millions, "population entry");
    }
}
