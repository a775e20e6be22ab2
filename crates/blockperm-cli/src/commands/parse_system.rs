use crate::support::{print_json, read_system_or_exit, yes_no};
use serde_json::json;

pub fn run(input: String, json_output: bool) {
    let system = read_system_or_exit(&input);
    let square = system.row_variables.len() == system.columns.len();

    if json_output {
        print_json(&json!({
            "source": input,
            "square": square,
            "row_variables": system.row_variables,
            "columns": system.columns,
            "matrix": system.matrix,
        }));
        return;
    }

    println!("blockperm parse-system {input}");
    println!("  Rows: {}", system.row_variables.join(", "));
    println!("  Columns: {}", system.columns.join(", "));
    println!("  Square: {}", yes_no(square));
    println!("  Matrix:");
    for (name, row) in system.row_variables.iter().zip(&system.matrix) {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        println!("    {name}: {}", cells.join(" "));
    }
}
