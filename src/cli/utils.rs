use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Print a success line, merging any extra fields into the JSON envelope
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    if let OutputFormat::Text = output_format {
        println!("✓ {}", message);
        return Ok(());
    }

    let mut envelope = json!({
        "success": true,
        "message": message
    });
    if let Some(extra) = data.as_ref().and_then(Value::as_object) {
        envelope.as_object_mut().unwrap().extend(extra.clone());
    }
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}

/// Print an error, with an optional machine-readable code in JSON mode
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    if let OutputFormat::Text = output_format {
        eprintln!("Error: {}", message);
        return Ok(());
    }

    let mut envelope = json!({
        "success": false,
        "error": message
    });
    if let Some(code) = error_code {
        envelope["error_code"] = json!(code);
    }
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
