//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use seoaudit_app::{AuditInput, run_audit, serialize_report};
use seoaudit_settings::Overrides;
use seoaudit_test_util::normalize_nondeterministic;
use seoaudit_types::ids;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(seoaudit_types::AuditReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(seoaudit_settings::SeoauditConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "seoaudit.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "seoaudit.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Audit every fixture page and validate the reports");
    eprintln!("  explain-coverage  Validate all check IDs have explanations");
}

/// Audit each `tests/fixtures/<name>/page.html` (with `signals.json` when present) and check
/// that the report validates against the report schema, is stable across runs, and only uses
/// categories the explain registry knows.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("report schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("compile report schema: {e}"))?;

    let root = fixtures_dir()?;
    let mut entries = fs::read_dir(&root)
        .with_context(|| format!("read fixtures dir {}", root.display()))?
        .collect::<Result<Vec<_>, _>>()
        .context("list fixtures")?;
    entries.sort_by_key(|e| e.file_name());

    let mut errors = Vec::new();
    let mut audited = 0usize;
    for entry in entries {
        let dir = entry.path();
        let page_path = dir.join("page.html");
        if !page_path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let html = fs::read_to_string(&page_path)
            .with_context(|| format!("read {}", page_path.display()))?;
        let signals_path = dir.join("signals.json");
        let signals = if signals_path.is_file() {
            Some(
                fs::read_to_string(&signals_path)
                    .with_context(|| format!("read {}", signals_path.display()))?,
            )
        } else {
            None
        };

        let mut runs = Vec::with_capacity(2);
        for _ in 0..2 {
            let output = run_audit(AuditInput {
                document: "page.html",
                html: &html,
                signals_text: signals.as_deref(),
                hostname: None,
                config_text: "",
                overrides: Overrides::default(),
            })
            .with_context(|| format!("audit fixture {name}"))?;
            let bytes = serialize_report(&output.report)?;
            let value: serde_json::Value =
                serde_json::from_slice(&bytes).context("reparse report")?;
            runs.push(value);
        }

        if let Err(err) = validator.validate(&runs[0]) {
            errors.push(format!("{name}: report does not match schema: {err}"));
        }
        let first = normalize_nondeterministic(runs[0].clone());
        let second = normalize_nondeterministic(runs[1].clone());
        if first != second {
            errors.push(format!("{name}: repeated audits differ"));
        }

        let checks = runs[0]["result"]["checks"].as_array().cloned().unwrap_or_default();
        for check in checks {
            let category = check["category"].as_str().unwrap_or_default();
            if category != ids::CATEGORY_DOCUMENT_ACCESS
                && seoaudit_types::lookup_explanation(category).is_none()
            {
                errors.push(format!("{name}: category '{category}' has no explanation"));
            }
        }

        println!("✓ {name}");
        audited += 1;
    }

    if audited == 0 {
        bail!("no fixture pages found under {}", root.display());
    }
    if errors.is_empty() {
        println!("\n✓ {audited} fixtures conform");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that all check IDs have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = seoaudit_types::all_check_ids();
    let mut errors = Vec::new();

    for check_id in check_ids {
        match seoaudit_types::lookup_explanation(check_id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Check ID '{}' has empty title", check_id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Check ID '{}' has empty description", check_id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Check ID '{}' has empty remediation", check_id));
                }
            }
            None => errors.push(format!("Check ID '{}' has no explanation", check_id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
