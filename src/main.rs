mod eventbridge;
mod fixture;

use std::path::Path;
use std::process;

use anyhow::Result;

// Template event, read from the current working directory.
const FIXTURE_PATH: &str = "test_event.json";

#[tokio::main]
async fn main() -> Result<()> {
    // arguments past the first are ignored
    let instance_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            println!("Usage: event-sender <instance-id>");
            process::exit(1);
        }
    };

    let mut event = fixture::load(Path::new(FIXTURE_PATH))?;
    fixture::set_instance_id(&mut event.detail, &instance_id)?;

    let detail = serde_json::to_string(&event.detail)?;
    let entry = eventbridge::build_entry(&event.source, &event.detail_type, detail);
    let resp = eventbridge::put_event(entry).await?;

    println!("PutEvents response: {resp:?}");
    Ok(())
}
