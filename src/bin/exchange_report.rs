//! Print the summary report for a saved selection file
//! Usage: cargo run --bin exchange-report -- <selections.json> [field=value ...]
//!
//! The selection file is a JSON object of food id to portions, e.g.
//! `{"cer-tortilla": 2, "fru-manzana": "1.5"}`. Requirement overrides take the
//! form `protein=90`.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use exchange_calc::data;
use exchange_calc::engine::Session;
use exchange_calc::models::NutrientField;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("exchange_calc=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(selections_path) = args.get(1) else {
        eprintln!("Usage: exchange-report <selections.json> [field=value ...]");
        std::process::exit(2);
    };

    let dataset = data::load_dataset(data::resolve_data_dir().as_deref())?;
    let mut session = Session::new(Arc::new(dataset.catalog), Arc::new(dataset.reference))?;

    let contents = std::fs::read_to_string(selections_path)?;
    let saved: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)?;
    for (food_id, value) in &saved {
        let raw = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        session.set_portion(food_id, &raw);
    }

    for arg in &args[2..] {
        let Some((field, value)) = arg.split_once('=') else {
            eprintln!("Ignoring requirement override '{}': expected field=value", arg);
            continue;
        };
        match NutrientField::parse(field) {
            Some(field) => {
                session.set_requirement(field, value);
            }
            None => eprintln!("Ignoring unknown nutrient field '{}'", field),
        }
    }

    let summary = session.summary()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
