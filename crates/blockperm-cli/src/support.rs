use blockperm_kernel::{Matrix, ParsedSystem, parse_system_text};
use serde_json::Value;
use std::fmt::Display;
use std::fs;

/// Largest dimension accepted unless `--max-dimension` says otherwise.
///
/// Exploration cost grows with a high power of `n`.
pub const DEFAULT_MAX_DIMENSION: usize = 64;

/// Exit status for unreadable or unparsable input.
pub const EXIT_INPUT: i32 = 1;
/// Exit status for input that breaks the matrix or permutation contract.
pub const EXIT_CONTRACT: i32 = 2;

pub fn exit_with(code: i32, message: impl Display) -> ! {
    tracing::debug!(code, "exiting with error");
    eprintln!("error: {message}");
    std::process::exit(code);
}

fn read_text_or_exit(path: &str, label: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with(EXIT_INPUT, format!("failed to read {label} at {path}: {e}"));
    })
}

/// Load a matrix from a JSON file holding either the bare rows or an object
/// with a `matrix` field.
pub fn read_matrix_or_exit(path: &str) -> Matrix {
    let text = read_text_or_exit(path, "matrix");
    let value: Value = serde_json::from_str(&text).unwrap_or_else(|e| {
        exit_with(
            EXIT_INPUT,
            format!("failed to parse matrix JSON at {path}: {e}"),
        );
    });
    let rows = match value {
        Value::Object(mut map) => map.remove("matrix").unwrap_or_else(|| {
            exit_with(
                EXIT_INPUT,
                format!("matrix JSON at {path} has no `matrix` field"),
            );
        }),
        other => other,
    };
    let matrix: Matrix = serde_json::from_value(rows).unwrap_or_else(|e| {
        exit_with(EXIT_CONTRACT, format!("invalid matrix at {path}: {e}"));
    });
    tracing::info!(path, dimension = matrix.dimension(), "matrix loaded");
    matrix
}

pub fn read_system_or_exit(path: &str) -> ParsedSystem {
    let text = read_text_or_exit(path, "equation system");
    let system = parse_system_text(&text).unwrap_or_else(|e| {
        exit_with(EXIT_INPUT, format!("invalid equation system at {path}: {e}"));
    });
    tracing::info!(
        path,
        equations = system.row_variables.len(),
        variables = system.columns.len(),
        "equation system parsed"
    );
    system
}

pub fn check_dimension_or_exit(matrix: &Matrix, max_dimension: usize) {
    if matrix.dimension() > max_dimension {
        exit_with(
            EXIT_CONTRACT,
            format!(
                "matrix dimension {} exceeds --max-dimension {max_dimension}",
                matrix.dimension()
            ),
        );
    }
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

/// `[1, 2, 3]`
pub fn labels(items: &[usize]) -> String {
    let parts: Vec<String> = items.iter().map(usize::to_string).collect();
    format!("[{}]", parts.join(", "))
}

pub fn print_matrix_block(header: &str, matrix: &Matrix) {
    println!("  {header}:");
    for line in matrix.to_string().lines() {
        println!("    {line}");
    }
}

pub fn print_sets_block(header: &str, sets: &[Vec<usize>]) {
    println!("  {header}:");
    for (index, set) in sets.iter().enumerate() {
        println!("    {}: {}", index + 1, labels(set));
    }
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
