//! Table encoding via serialization.
//!
//! The value is first serialized to a [`serde_json::Value`]; its shape
//! decides the layout. This stands in for runtime field reflection: the
//! serialized key order follows the struct's field order, and serde
//! attributes control naming and omission.

use std::io::Write;

use comfy_table::{presets, Table};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

pub(super) fn print_table<T, W>(value: &T, out: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match serde_json::to_value(value)? {
        Value::Object(row) => render_table(vec![row], out),
        Value::Array(items) => {
            if items.iter().all(Value::is_object) {
                let rows = items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(row) => row,
                        _ => unreachable!("all items checked to be objects"),
                    })
                    .collect();
                render_table(rows, out)
            } else {
                // Sequences of scalars get one line each, no header.
                for item in &items {
                    writeln!(out, "{}", cell_text(item))?;
                }
                Ok(())
            }
        }
        Value::Null => Err(Error::NotTabular { kind: "null" }),
        Value::Bool(_) => Err(Error::NotTabular { kind: "boolean" }),
        Value::Number(_) => Err(Error::NotTabular { kind: "number" }),
        Value::String(_) => Err(Error::NotTabular { kind: "string" }),
    }
}

fn render_table<W: Write>(rows: Vec<serde_json::Map<String, Value>>, out: &mut W) -> Result<()> {
    let Some(first) = rows.first() else {
        // Nothing to lay out; the column set of an empty sequence is unknown.
        return Ok(());
    };

    // Column order follows the first row's key order.
    let columns: Vec<String> = first.keys().cloned().collect();

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(columns.iter().map(|name| name.to_uppercase()));

    for row in &rows {
        table.add_row(
            columns
                .iter()
                .map(|name| row.get(name).map(cell_text).unwrap_or_default()),
        );
    }

    writeln!(out, "{table}")?;
    Ok(())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Person {
        name: String,
        age: u32,
    }

    fn render<T: Serialize>(value: &T) -> String {
        let mut out = Vec::new();
        print_table(value, &mut out).expect("table should render");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Ada".to_string(),
                age: 36,
            },
            Person {
                name: "Grace".to_string(),
                age: 85,
            },
        ]
    }

    #[test]
    fn struct_becomes_single_row() {
        let rendered = render(&Person {
            name: "Test".to_string(),
            age: 42,
        });
        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert!(header.contains("NAME"));
        assert!(header.contains("AGE"));
        assert!(row.contains("Test"));
        assert!(row.contains("42"));
    }

    #[test]
    fn sequence_of_structs_becomes_rows() {
        let rendered = render(&people());
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("Grace"));
    }

    #[test]
    fn header_precedes_rows() {
        let rendered = render(&people());
        let name_pos = rendered.find("NAME").unwrap();
        let ada_pos = rendered.find("Ada").unwrap();
        assert!(name_pos < ada_pos);
    }

    #[test]
    fn serde_rename_controls_column_name() {
        #[derive(serde::Serialize)]
        struct Renamed {
            #[serde(rename = "nick")]
            name: String,
        }
        let rendered = render(&Renamed {
            name: "Bob".to_string(),
        });
        assert!(rendered.contains("NICK"));
        assert!(!rendered.contains("NAME"));
    }

    #[test]
    fn serde_skip_omits_column() {
        #[derive(serde::Serialize)]
        struct Partial {
            shown: u32,
            #[serde(skip)]
            hidden: u32,
        }
        let rendered = render(&Partial {
            shown: 1,
            hidden: 2,
        });
        assert!(rendered.contains("SHOWN"));
        assert!(!rendered.contains("HIDDEN"));
    }

    #[test]
    fn sequence_of_scalars_prints_one_per_line() {
        let rendered = render(&[1, 2, 3]);
        assert_eq!(rendered, "1\n2\n3\n");
    }

    #[test]
    fn sequence_of_strings_prints_bare() {
        let rendered = render(&["a", "b"]);
        assert_eq!(rendered, "a\nb\n");
    }

    #[test]
    fn empty_sequence_prints_nothing() {
        let rendered = render::<Vec<Person>>(&Vec::new());
        assert_eq!(rendered, "");
    }

    #[test]
    fn scalar_is_not_tabular() {
        let mut out = Vec::new();
        let err = print_table(&42, &mut out).unwrap_err();
        assert!(matches!(err, Error::NotTabular { kind: "number" }));
    }

    #[test]
    fn string_is_not_tabular() {
        let mut out = Vec::new();
        let err = print_table("plain", &mut out).unwrap_err();
        assert!(matches!(err, Error::NotTabular { kind: "string" }));
    }

    #[test]
    fn null_cells_render_empty() {
        #[derive(serde::Serialize)]
        struct MaybeAge {
            name: String,
            age: Option<u32>,
        }
        let rendered = render(&MaybeAge {
            name: "Ann".to_string(),
            age: None,
        });
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.contains("Ann"));
        assert!(!row.contains("null"));
    }
}
