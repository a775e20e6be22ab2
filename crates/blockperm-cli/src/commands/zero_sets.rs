use crate::support::{
    check_dimension_or_exit, labels, print_json, print_sets_block, read_matrix_or_exit,
};
use blockperm_kernel::{ZeroSets, candidate, initial_omega};
use serde_json::json;

pub fn run(matrix: String, max_dimension: usize, json_output: bool) {
    let source = read_matrix_or_exit(&matrix);
    check_dimension_or_exit(&source, max_dimension);

    let zero_sets = ZeroSets::of(&source);
    let omega0 = initial_omega(&zero_sets.rows);
    let candidates = candidate::all_candidates(&zero_sets, &omega0);
    let valid = candidate::separate(candidates.clone());

    if json_output {
        print_json(&json!({
            "source": matrix,
            "row_zero_sets": zero_sets.rows,
            "col_zero_sets": zero_sets.cols,
            "initial_omega": omega0,
            "candidates": candidates,
            "valid_candidates": valid,
        }));
        return;
    }

    println!("blockperm zero-sets {matrix}");
    print_sets_block("Row zero-sets", &zero_sets.rows);
    print_sets_block("Column zero-sets", &zero_sets.cols);
    println!("  Initial working set: {}", labels(&omega0));
    println!(
        "  Candidates: {} ({} valid)",
        candidates.len(),
        valid.len()
    );
    for d in &valid {
        println!("    - {d}");
    }
}
