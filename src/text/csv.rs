//! Plain delimiter-split CSV ⇄ JSON conversion.
//!
//! No quoting rules on input: lines split on `\n`, cells on the delimiter.
//! Output cells are always wrapped in double quotes.

use serde_json::{Map, Value};

/// Convert CSV text to one JSON object per data row, keyed by the title row.
///
/// Short rows omit the missing titles; surplus cells are dropped. Text with
/// no newline is a bare title row and yields no objects.
pub fn csv_to_json(data: &str, delimiter: &str) -> Vec<Map<String, Value>> {
    let Some((title_line, body)) = data.split_once('\n') else {
        return Vec::new();
    };
    let titles: Vec<&str> = title_line.split(delimiter).collect();
    body.split('\n')
        .map(|line| {
            titles
                .iter()
                .zip(line.split(delimiter))
                .map(|(title, cell)| (title.to_string(), Value::String(cell.to_string())))
                .collect()
        })
        .collect()
}

/// Render `rows` as CSV with only the given `columns`.
///
/// The first line is the column names; each cell after that is quoted, and
/// a missing or falsy field (`null`, `false`, `0`, `""`) renders as `""`.
pub fn json_to_csv(rows: &[Value], columns: &[&str], delimiter: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.join(delimiter));
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|key| format!("\"{}\"", cell_text(row.get(*key))))
            .collect();
        lines.push(cells.join(delimiter));
    }
    lines.join("\n")
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn csv_rows_become_objects() {
        let rows = csv_to_json("col1,col2\na,b\nc,d", ",");
        assert_eq!(
            Value::Array(rows.into_iter().map(Value::Object).collect()),
            json!([{"col1": "a", "col2": "b"}, {"col1": "c", "col2": "d"}])
        );
    }

    #[test]
    fn custom_delimiter_and_short_rows() {
        let rows = csv_to_json("a;b;c\n1;2\n", ";");
        assert_eq!(rows.len(), 2);
        assert_eq!(Value::Object(rows[0].clone()), json!({"a": "1", "b": "2"}));
        // trailing newline yields one row with a single empty cell
        assert_eq!(Value::Object(rows[1].clone()), json!({"a": ""}));
    }

    #[test]
    fn title_only_input() {
        assert!(csv_to_json("a,b,c", ",").is_empty());
    }

    #[test]
    fn json_rows_render_selected_columns() {
        let rows = vec![
            json!({"a": 1, "b": 2}),
            json!({"a": 3, "b": 4, "c": 5}),
            json!({"a": 6}),
            json!({"b": 7}),
        ];
        assert_eq!(
            json_to_csv(&rows, &["a", "b"], ","),
            "a,b\n\"1\",\"2\"\n\"3\",\"4\"\n\"6\",\"\"\n\"\",\"7\""
        );
    }

    #[test]
    fn falsy_values_render_empty() {
        let rows = vec![json!({"a": 0, "b": false, "c": "", "d": null, "e": "x"})];
        assert_eq!(
            json_to_csv(&rows, &["a", "b", "c", "d", "e"], ";"),
            "a;b;c;d;e\n\"\";\"\";\"\";\"\";\"x\""
        );
    }
}
