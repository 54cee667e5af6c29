//! Encoding values for terminal output.
//!
//! A command-line program usually wants one code path that can show a value
//! as a human-readable table or as machine-readable JSON/YAML, selected by
//! a flag the user controls. [`print`] is that path: hand it any
//! [`Serialize`] value and an [`Encoding`], and it lands on stdout.
//!
//! # Example
//!
//! ```ignore
//! use clikit::{print, Encoding};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Typically: let encoding: Encoding = args.output.parse()?;
//! print(Encoding::Table, &users)?;
//! ```
//!
//! # Table encoding
//!
//! Structs and maps become one row with UPPERCASE field names as the
//! header; sequences of structs become one row each. Use `#[serde(rename)]`
//! to override a column name and `#[serde(skip)]` to omit a field.
//! Sequences of scalars are printed one per line; a bare scalar is
//! [`Error::NotTabular`](crate::Error::NotTabular).

mod table;

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Error, Result};

/// Output encodings accepted by [`print`].
///
/// Parse one from a CLI flag with [`str::parse`]; the empty string selects
/// the default table encoding, matching the common "no flag given" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Aligned plain-text columns. The default.
    #[default]
    Table,
    /// Indented JSON.
    Json,
    /// YAML.
    Yaml,
    /// Bare strings as-is, everything else as compact JSON.
    Raw,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" | "" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            "raw" => Ok(Self::Raw),
            other => Err(Error::UnknownEncoding {
                name: other.to_string(),
            }),
        }
    }
}

/// Encode `value` and print it to standard output.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded in the chosen encoding,
/// or if writing to stdout fails.
pub fn print<T>(encoding: Encoding, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    print_to(encoding, value, &mut std::io::stdout().lock())
}

/// Like [`print`] but lets the caller inject the writer.
pub fn print_to<T, W>(encoding: Encoding, value: &T, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match encoding {
        Encoding::Table => table::print_table(value, out),
        Encoding::Json => print_json(value, out),
        Encoding::Yaml => print_yaml(value, out),
        Encoding::Raw => print_raw(value, out),
    }
}

fn print_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
        value.serialize(&mut serializer)?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_yaml<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let encoded = serde_yml::to_string(value)?;
    writeln!(out, "{encoded}")?;
    Ok(())
}

fn print_raw<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(s) => writeln!(out, "{s}")?,
        other => writeln!(out, "{other}")?,
    }
    Ok(())
}
