use crate::collect::Collector;
use crate::document::{AccessError, Document};
use crate::policy::{CheckPolicy, EffectiveConfig};
use seoaudit_types::{Finding, ids};
use serde_json::Value;

pub fn run(
    doc: &dyn Document,
    _cfg: &EffectiveConfig,
    _policy: &CheckPolicy,
    out: &mut Collector,
) -> Result<(), AccessError> {
    let blocks = doc.select(r#"script[type="application/ld+json"]"#)?;
    if blocks.is_empty() {
        out.push(Finding::warning(
            ids::CATEGORY_STRUCTURED_DATA,
            "No JSON-LD structured data found",
        ))
        .recommend("Add JSON-LD structured data (schema.org) for rich search results");
        return Ok(());
    }

    let mut valid = 0usize;
    for block in blocks {
        let text = doc.text_content(block);
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(data) => valid += count_schemas(&data),
            Err(err) => {
                tracing::debug!(error = %err, "malformed JSON-LD block");
                out.push(Finding::error(
                    ids::CATEGORY_STRUCTURED_DATA,
                    "Invalid JSON-LD syntax",
                ))
                .critical("JSON-LD contains syntax errors");
            }
        }
    }

    if valid > 0 {
        out.push(Finding::pass(
            ids::CATEGORY_STRUCTURED_DATA,
            format!("{valid} valid schema(s) found"),
        ));
    }

    Ok(())
}

/// A block is one schema when it declares both `@context` and `@type`. A
/// top-level array counts each such entry.
fn count_schemas(data: &Value) -> usize {
    match data {
        Value::Object(_) => usize::from(is_schema(data)),
        Value::Array(items) => items.iter().filter(|item| is_schema(item)).count(),
        _ => 0,
    }
}

fn is_schema(data: &Value) -> bool {
    truthy(data.get("@context")) && truthy(data.get("@type"))
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
