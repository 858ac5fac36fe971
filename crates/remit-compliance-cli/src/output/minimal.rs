use serde_json::Value;

/// Print just the key answer from the output.
///
/// Heuristic: look for well-known result fields in priority order, then
/// fall back to the first field of the object.
pub fn print_minimal(value: &Value) {
    // Score plus level is the usual answer for assessments.
    let score_level_pairs = [
        ("final_score", "final_level"),
        ("risk_score", "risk_level"),
    ];

    if let Value::Object(map) = value {
        for (score_key, level_key) in score_level_pairs {
            if let (Some(score), Some(level)) = (map.get(score_key), map.get(level_key)) {
                println!("{} {}", format_minimal(score), format_minimal(level));
                return;
            }
        }

        // Single-answer outputs (stats, validation).
        for key in ["total_assessments", "valid"] {
            if let Some(val) = map.get(key) {
                println!("{}", format_minimal(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
