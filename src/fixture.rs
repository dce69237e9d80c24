use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

// Template for one security-finding event. Only the three top-level
// fields the PutEvents entry needs are typed; `detail` stays raw JSON so
// everything the patch doesn't touch passes through unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub source: String,
    #[serde(rename = "detail-type")]
    pub detail_type: String,
    pub detail: Value,
}

pub fn load(path: &Path) -> Result<Fixture> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let fixture =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(fixture)
}

// replace placeholder instance id with the real one
pub fn set_instance_id(detail: &mut Value, instance_id: &str) -> Result<()> {
    let resource = detail
        .get_mut("findings")
        .and_then(|f| f.get_mut(0))
        .ok_or_else(|| anyhow!("fixture detail has no findings[0]"))?
        .get_mut("Resources")
        .and_then(|r| r.get_mut(0))
        .ok_or_else(|| anyhow!("fixture finding has no Resources[0]"))?;

    resource
        .as_object_mut()
        .ok_or_else(|| anyhow!("fixture Resources[0] is not an object"))?
        .insert("Id".into(), Value::String(instance_id.into()));

    Ok(())
}
