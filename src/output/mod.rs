//! Rendering resolved values.
//!
//! Values are rendered into a buffer first and written to the sink in a single
//! call, so a failed render never leaves partial output behind.

use std::io::Write;

use crate::config::{OutputFormat, ValueType};
use crate::error_handling::OutputError;

/// Renders `values` in `format` and writes them to `sink`.
///
/// - `Plain`: one value per line, unquoted, each terminated by `\n`
/// - `Json` + `Single`: a JSON string literal followed by `\n`
/// - `Json` + `List`: a JSON array of strings followed by `\n`
///
/// JSON output escapes only what JSON requires; `<`, `>`, `&` and `/` pass
/// through unchanged.
///
/// # Errors
///
/// Returns `OutputError::Cardinality` if `value_type` is `Single` and `values`
/// does not hold exactly one entry, `OutputError::Encode` if JSON encoding
/// fails, and `OutputError::Io` if writing to `sink` fails.
pub fn render<W: Write + ?Sized>(
    values: &[String],
    format: OutputFormat,
    value_type: ValueType,
    sink: &mut W,
) -> Result<(), OutputError> {
    if value_type == ValueType::Single && values.len() != 1 {
        return Err(OutputError::Cardinality {
            expected: 1,
            actual: values.len(),
            values: values.to_vec(),
        });
    }

    let mut buf = Vec::new();
    match format {
        OutputFormat::Plain => {
            for value in values {
                buf.extend_from_slice(value.as_bytes());
                buf.push(b'\n');
            }
        }
        OutputFormat::Json => {
            match value_type {
                ValueType::Single => serde_json::to_writer(&mut buf, &values[0])?,
                ValueType::List => serde_json::to_writer(&mut buf, values)?,
            }
            buf.push(b'\n');
        }
    }

    sink.write_all(&buf)?;
    sink.flush()?;
    Ok(())
}
