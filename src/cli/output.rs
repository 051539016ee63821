//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DistractorArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a single selection.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResult {
    pub correct: String,
    pub distractors: Vec<String>,
}

/// Stem of one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &DistractorArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &DistractorArgs) -> Result<()> {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    for line in format_human(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as human-readable lines.
fn format_human(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .filter(|(_, val)| !val.is_null())
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|item| match item {
                serde_json::Value::Object(obj) => obj
                    .values()
                    .filter(|val| !val.is_null())
                    .map(format_value)
                    .collect::<Vec<_>>()
                    .join(" -> "),
                other => format_value(other),
            })
            .collect(),
        other => vec![format_value(other)],
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DistractorArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.3}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("үй")), "үй");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(0.6666666)), "0.667");
        assert_eq!(format_value(&json!(["үй", "тау"])), "үй, тау");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_format_human_object() {
        let result = SelectionResult {
            correct: "бала".to_string(),
            distractors: vec!["үй".to_string(), "тау".to_string(), "көл".to_string()],
        };
        let lines = format_human(&serde_json::to_value(&result).unwrap());

        assert_eq!(lines, vec!["correct: бала", "distractors: үй, тау, көл"]);
    }

    #[test]
    fn test_format_human_list() {
        let stems = vec![
            StemResult {
                word: "балалар".to_string(),
                stem: "бала".to_string(),
            },
            StemResult {
                word: "үй".to_string(),
                stem: "үй".to_string(),
            },
        ];
        let lines = format_human(&serde_json::to_value(&stems).unwrap());

        assert_eq!(lines, vec!["балалар -> бала", "үй -> үй"]);
    }

    #[test]
    fn test_format_human_skips_missing_fields() {
        let lines = format_human(&json!({"words": null, "error": "Insufficient distinct words"}));
        assert_eq!(lines, vec!["error: Insufficient distinct words"]);
    }
}
