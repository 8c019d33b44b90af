//! Classification commands.
//!
//! Both commands print a JSON envelope to stdout:
//!
//! ```json
//! { "success": true, "original_query": "...", "source": "rules", "category_filter": "Cafe", ... }
//! ```

use std::io::Write;

use nearby_classifier::{ClassificationEngine, Classified};
use nearby_core::{BusinessListing, SearchFilterResult, TagResult};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::info;

/// Classify `text` and print the filters.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized or written.
pub async fn query(
    engine: &ClassificationEngine,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let classified = engine.classify_query_with_source(text).await;
    info!(source = %classified.source, "Query classified");
    print_json(&query_envelope(text, &classified)?)
}

/// Classify a listing and print its tags.
///
/// # Errors
///
/// Returns an error if the listing is invalid or the output
/// cannot be written.
pub async fn describe(
    engine: &ClassificationEngine,
    name: String,
    description: String,
    category: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = BusinessListing::from_parts(Some(name), Some(description), category)?;
    let classified = engine
        .classify_description_with_source(&listing.name, &listing.description, listing.category())
        .await;
    info!(source = %classified.source, tags = classified.value.len(), "Listing classified");
    print_json(&describe_envelope(&listing, &classified)?)
}

fn query_envelope(
    text: &str,
    classified: &Classified<SearchFilterResult>,
) -> Result<Value, serde_json::Error> {
    envelope(
        [("original_query", json!(text))],
        classified.source,
        &classified.value,
    )
}

fn describe_envelope(
    listing: &BusinessListing,
    classified: &Classified<TagResult>,
) -> Result<Value, serde_json::Error> {
    envelope(
        [("name", json!(listing.name))],
        classified.source,
        &classified.value,
    )
}

/// `{success, <input fields>, source, <result fields>}`
fn envelope<const N: usize>(
    input: [(&str, Value); N],
    source: impl Serialize,
    result: &impl Serialize,
) -> Result<Value, serde_json::Error> {
    let mut fields = Map::new();
    fields.insert("success".to_string(), Value::Bool(true));
    for (key, value) in input {
        fields.insert(key.to_string(), value);
    }
    fields.insert("source".to_string(), serde_json::to_value(source)?);
    if let Value::Object(result) = serde_json::to_value(result)? {
        fields.extend(result);
    }
    Ok(Value::Object(fields))
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
