use crate::support::{
    EXIT_CONTRACT, EXIT_INPUT, check_dimension_or_exit, exit_with, labels, print_json,
    print_matrix_block, read_matrix_or_exit, read_system_or_exit, yes_no,
};
use blockperm_kernel::{Matrix, analyze};
use serde_json::json;

pub struct Args {
    pub matrix: Option<String>,
    pub system: Option<String>,
    pub max_dimension: usize,
    pub realms: bool,
    pub json: bool,
}

fn load(args: &Args) -> (String, Matrix) {
    if let Some(path) = &args.system {
        let matrix = read_system_or_exit(path)
            .into_matrix()
            .unwrap_or_else(|e| {
                exit_with(EXIT_CONTRACT, format!("equation system at {path}: {e}"));
            });
        return (path.clone(), matrix);
    }
    match &args.matrix {
        Some(path) => (path.clone(), read_matrix_or_exit(path)),
        None => exit_with(EXIT_INPUT, "either --matrix or --system is required"),
    }
}

pub fn run(args: Args) {
    let (source, matrix) = load(&args);
    check_dimension_or_exit(&matrix, args.max_dimension);

    let report = analyze(&matrix).unwrap_or_else(|e| {
        exit_with(EXIT_CONTRACT, e);
    });
    let blocks = report.blocks();

    if args.json {
        print_json(&json!({
            "source": source,
            "structure_found": !report.is_degenerate(),
            "b1": blocks.b1,
            "b2": blocks.b2,
            "remainder": report.remainder(),
            "report": report,
        }));
        return;
    }

    println!("blockperm decompose {source}");
    println!("  Dimension: {}", report.dimension);
    println!("  Initial working set: {}", labels(&report.initial_omega));
    println!("  Seeds: {}", report.valid_candidates.len());
    println!("  Realms: {}", report.realms.realms.len());
    println!("  Structure found: {}", yes_no(!report.is_degenerate()));
    println!("  B1: {}", labels(&blocks.b1));
    println!("  B2: {}", labels(&blocks.b2));
    println!("  Remainder: {}", labels(report.remainder()));
    println!("  Permutation: {}", labels(report.permutation.labels()));
    println!("  Digest: {}", report.digest);
    print_matrix_block("Permuted matrix", &report.permuted_matrix);

    if args.realms {
        for (index, realm) in report.realms.realms.iter().enumerate() {
            println!("  Realm {} (seed {}):", index + 1, realm.seed);
            let omegas: Vec<String> = realm.omegas.iter().map(|o| labels(o)).collect();
            println!("    Working sets: {}", omegas.join(" -> "));
            println!("    B1: {}", labels(&realm.b1));
            println!("    B2: {}", labels(&realm.b2));
        }
    }
}
