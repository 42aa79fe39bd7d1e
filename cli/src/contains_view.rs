use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result};
use intervals_lib::IntervalCollection;
use itertools::Itertools;
use serde_json::json;

/// Check every value against the expression, one line per value.
/// Values that are not numbers are never contained.
pub fn contains_view(
    expr: &str,
    values: &[&str],
    settings: &GlobalSettings,
) -> Result<String> {
    let coll = IntervalCollection::parse(expr)
        .with_context(|| format!("Cannot evaluate {expr:?}"))?;

    if settings.json {
        let rows = values
            .iter()
            .map(|v| json!({"value": v, "contained": coll.contains_str(v)}))
            .collect_vec();
        Ok(serde_json::to_string(&json!({
            "expression": expr,
            "text": coll.to_string(),
            "values": rows,
        }))?)
    } else {
        Ok(values
            .iter()
            .map(|v| format!("{v}: {}", coll.contains_str(v)))
            .join("\n"))
    }
}
