use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_eventbridge::operation::put_events::PutEventsOutput;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client;

// Test events always go to the account's default bus.
pub const EVENT_BUS_NAME: &str = "default";

pub fn build_entry(source: &str, detail_type: &str, detail_json: String) -> PutEventsRequestEntry {
    PutEventsRequestEntry::builder()
        .source(source)
        .detail_type(detail_type)
        .detail(detail_json)
        .event_bus_name(EVENT_BUS_NAME)
        .build()
}

// Credentials and region come from the ambient provider chain, same as
// every other AWS call this tooling makes.
pub async fn put_event(entry: PutEventsRequestEntry) -> Result<PutEventsOutput> {
    let conf = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = Client::new(&conf);
    let resp = client.put_events().entries(entry).send().await?;
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn entry_carries_fixture_fields_and_default_bus() {
        let detail = r#"{"findings":[{"Resources":[{"Id":"i-0123456789abcdef0"}]}]}"#.to_string();
        let entry = build_entry("aws.guardduty", "GuardDuty Finding", detail);

        assert_eq!(entry.source(), Some("aws.guardduty"));
        assert_eq!(entry.detail_type(), Some("GuardDuty Finding"));
        assert_eq!(entry.event_bus_name(), Some("default"));

        let parsed: Value = serde_json::from_str(entry.detail().unwrap()).unwrap();
        assert_eq!(
            parsed["findings"][0]["Resources"][0]["Id"],
            "i-0123456789abcdef0"
        );
    }
}
