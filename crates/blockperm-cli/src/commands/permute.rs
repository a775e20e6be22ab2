use crate::support::{
    EXIT_CONTRACT, exit_with, labels, print_json, print_matrix_block, read_matrix_or_exit,
};
use blockperm_kernel::Permutation;
use serde_json::json;

pub fn run(matrix: String, permutation: Vec<usize>, json_output: bool) {
    let source = read_matrix_or_exit(&matrix);
    let permutation = Permutation::from_labels(permutation).unwrap_or_else(|e| {
        exit_with(EXIT_CONTRACT, format!("invalid permutation: {e}"));
    });
    let permuted = permutation.apply(&source).unwrap_or_else(|e| {
        exit_with(EXIT_CONTRACT, e);
    });

    if json_output {
        print_json(&json!({
            "source": matrix,
            "permutation": permutation,
            "permuted_matrix": permuted,
        }));
        return;
    }

    println!("blockperm permute {matrix}");
    println!("  Permutation: {}", labels(permutation.labels()));
    print_matrix_block("Permuted matrix", &permuted);
}
