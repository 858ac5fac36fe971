use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a two-column Field/Value table.
///
/// Assessments are flat objects with list-valued fields; lists render as
/// one bulleted line per item and nested objects as inline JSON.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(_) => print_object(value),
        Value::Array(arr) => print_array(arr),
        _ => println!("{}", value),
    }
}

fn print_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_table(item);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join("\n")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
