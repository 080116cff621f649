mod api;
mod config;
mod models;
mod schedule;

use api::{HospitableClient, ReservationSource};
use chrono::Utc;
use config::Config;
use schedule::build_checkin_schedule;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🧹 Stay Scout - Check-in & Cleaning Schedule");
    info!("=============================================");

    let config = Config::from_env()?;
    let client = HospitableClient::new(config)?;

    info!("Fetching properties and reservations from {}...", client.source_name());
    let properties = client.fetch_all().await?;
    info!("✅ Fetched {} properties", properties.len());

    let schedule = build_checkin_schedule(&properties)?;
    let today = Utc::now().date_naive();

    // Display results
    for (check_in, entries) in &schedule {
        println!("{check_in}");
        for entry in entries {
            let marker = if entry.occupied_on(*check_in, today) {
                "  << occupied"
            } else {
                ""
            };
            println!(
                "  {} — {} guest(s), checkout {} [{}]{}",
                entry.address, entry.guests_count, entry.departure_date, entry.status, marker
            );
        }
        println!();
    }

    // Save to JSON file
    let json = serde_json::to_string_pretty(&schedule)?;
    tokio::fs::write("schedule.json", json).await?;
    info!("💾 Saved schedule to schedule.json");

    Ok(())
}
