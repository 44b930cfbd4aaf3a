//! Prints the running time entry and this week's entries.
//!
//! Run with: `TOGGL_API_TOKEN=... cargo run --example running_entry`

use chrono::{Duration, Local};
use toggl::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("toggl=debug,running_entry=info")
        .init();

    let token = std::env::var("TOGGL_API_TOKEN")
        .map_err(|_| Error::ConfigurationError("TOGGL_API_TOKEN is not set".to_string()))?;

    let client = Client::builder()
        .api_token(token)
        .debug(std::env::var_os("TOGGL_DEBUG").is_some())
        .build()?;

    println!("=== Running Time Entry ===");
    match client.get_running_time_entry().await? {
        Some(entry) => {
            println!("Description: {}", entry.description);
            println!("Started: {:?}", entry.start);
            println!("Tags: {}", entry.tags.join(", "));
        }
        None => println!("Nothing is running"),
    }
    println!();

    println!("=== Last 7 Days ===");
    let end = Local::now();
    let start = end - Duration::days(7);
    for entry in client.get_time_entries(&start, &end).await? {
        println!("{:>8}s  {}", entry.duration, entry.description);
    }

    Ok(())
}
