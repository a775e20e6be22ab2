use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "blockperm-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("fixture file should be written");
        path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_blockperm<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_blockperm");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("blockperm command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

const LOWER_TRIANGLE: &str = "[[0,0,1],[0,0,0],[1,1,0]]";
const SELF_COUPLED: &str = "[[0,1,1],[1,0,1],[1,1,0]]";

#[test]
fn decompose_json_reports_blocks() {
    let tmp = TempDirGuard::new("decompose-json");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["structure_found"], true);
    assert_eq!(payload["b1"], serde_json::json!([1, 2]));
    assert_eq!(payload["b2"], serde_json::json!([3]));
    assert_eq!(payload["remainder"], serde_json::json!([]));
    assert_eq!(payload["report"]["permutation"], serde_json::json!([1, 2, 3]));
    assert_eq!(
        payload["report"]["realms"]["realms"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
    assert_eq!(
        payload["report"]["digest"].as_str().map(str::len),
        Some(64)
    );
}

#[test]
fn decompose_text_lists_blocks_and_realms() {
    let tmp = TempDirGuard::new("decompose-text");
    let matrix = tmp.write("matrix.json", &format!("{{\"matrix\": {LOWER_TRIANGLE}}}"));

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--realms"),
    ]);
    assert_success(&output);

    let text = stdout_text(&output);
    assert!(text.contains("Structure found: yes"), "{text}");
    assert!(text.contains("B1: [1, 2]"), "{text}");
    assert!(text.contains("B2: [3]"), "{text}");
    assert!(text.contains("Realm 3 (seed (2, 3, [2, 3])):"), "{text}");
    assert!(text.contains("Working sets: [1, 2, 3] -> []"), "{text}");
}

#[test]
fn decompose_degenerate_matrix() {
    let tmp = TempDirGuard::new("decompose-degenerate");
    let matrix = tmp.write("matrix.json", SELF_COUPLED);

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["structure_found"], false);
    assert_eq!(payload["b1"], serde_json::json!([]));
    assert_eq!(payload["remainder"], serde_json::json!([1, 2, 3]));
    assert_eq!(
        payload["report"]["permuted_matrix"],
        serde_json::from_str::<Value>(SELF_COUPLED).unwrap()
    );
}

#[test]
fn decompose_from_equation_system() {
    let tmp = TempDirGuard::new("decompose-system");
    let system = tmp.write("system.txt", "a = b\nb = c\nc = a\n");

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--system"),
        system.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["b1"], serde_json::json!([1, 3]));
    assert_eq!(payload["b2"], serde_json::json!([2]));
    assert_eq!(payload["report"]["permutation"], serde_json::json!([1, 3, 2]));
    assert_eq!(
        payload["report"]["permuted_matrix"],
        serde_json::json!([[0, 0, 1], [1, 0, 0], [0, 1, 0]])
    );
}

#[test]
fn decompose_rejects_rectangular_system() {
    let tmp = TempDirGuard::new("decompose-rect");
    let system = tmp.write("system.txt", "y = a + b\n");

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--system"),
        system.as_os_str(),
    ]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("square matrix is required"));
}

#[test]
fn decompose_rejects_non_square_matrix() {
    let tmp = TempDirGuard::new("decompose-ragged");
    let matrix = tmp.write("matrix.json", "[[0,1],[1]]");

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
    ]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("not square"), "{}", stderr_text(&output));
}

#[test]
fn decompose_enforces_max_dimension() {
    let tmp = TempDirGuard::new("decompose-max");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--max-dimension"),
        OsStr::new("2"),
    ]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("exceeds --max-dimension 2"));
}

#[test]
fn decompose_missing_file_is_input_error() {
    let tmp = TempDirGuard::new("decompose-missing");
    let missing = tmp.path().join("nope.json");

    let output = run_blockperm([
        OsStr::new("decompose"),
        OsStr::new("--matrix"),
        missing.as_os_str(),
    ]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn decompose_requires_an_input() {
    let output = run_blockperm(["decompose"]);
    assert_failure(&output);
}

#[test]
fn permute_json_conjugates_matrix() {
    let tmp = TempDirGuard::new("permute-json");
    let matrix = tmp.write("matrix.json", "[[0,1,0],[0,0,1],[0,0,0]]");

    let output = run_blockperm([
        OsStr::new("permute"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--permutation"),
        OsStr::new("3,2,1"),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let mut payload = parse_json_stdout(&output);
    payload
        .as_object_mut()
        .expect("payload is an object")
        .remove("source");
    insta::assert_json_snapshot!(payload, @r#"
    {
      "permutation": [
        3,
        2,
        1
      ],
      "permuted_matrix": [
        [
          0,
          0,
          0
        ],
        [
          1,
          0,
          0
        ],
        [
          0,
          1,
          0
        ]
      ]
    }
    "#);
}

#[test]
fn permute_rejects_duplicate_labels() {
    let tmp = TempDirGuard::new("permute-dup");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("permute"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--permutation"),
        OsStr::new("1,1,2"),
    ]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("label 1 appears more than once"));
}

#[test]
fn permute_rejects_wrong_length() {
    let tmp = TempDirGuard::new("permute-len");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("permute"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--permutation"),
        OsStr::new("2,1"),
    ]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("permutation has 2 labels, expected 3"));
}

#[test]
fn zero_sets_json_lists_candidates() {
    let tmp = TempDirGuard::new("zero-sets");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("zero-sets"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(
        payload["row_zero_sets"],
        serde_json::json!([[1, 2], [1, 2, 3], [3]])
    );
    assert_eq!(
        payload["col_zero_sets"],
        serde_json::json!([[1, 2], [1, 2], [2, 3]])
    );
    assert_eq!(payload["candidates"].as_array().map(Vec::len), Some(6));
    assert_eq!(
        payload["valid_candidates"][2],
        serde_json::json!({"i": 2, "j": 3, "value": [2, 3]})
    );
}

#[test]
fn zero_sets_text_output() {
    let tmp = TempDirGuard::new("zero-sets-text");
    let matrix = tmp.write("matrix.json", LOWER_TRIANGLE);

    let output = run_blockperm([
        OsStr::new("zero-sets"),
        OsStr::new("--matrix"),
        matrix.as_os_str(),
    ]);
    assert_success(&output);

    let text = stdout_text(&output);
    assert!(text.contains("2: [1, 2, 3]"), "{text}");
    assert!(text.contains("Candidates: 6 (3 valid)"), "{text}");
    assert!(text.contains("- (1, 2, [1, 2])"), "{text}");
}

#[test]
fn parse_system_json() {
    let tmp = TempDirGuard::new("parse-system");
    let input = tmp.write(
        "system.txt",
        "y' = 10a + 10b - 20c + 2d\nz = a - 3b + d\n",
    );

    let output = run_blockperm([
        OsStr::new("parse-system"),
        OsStr::new("--input"),
        input.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["square"], false);
    assert_eq!(payload["row_variables"], serde_json::json!(["y'", "z"]));
    assert_eq!(payload["columns"], serde_json::json!(["a", "b", "c", "d"]));
    assert_eq!(
        payload["matrix"],
        serde_json::json!([[1, 1, 1, 1], [1, 1, 0, 1]])
    );
}

#[test]
fn parse_system_rejects_missing_equals() {
    let tmp = TempDirGuard::new("parse-system-bad");
    let input = tmp.write("system.txt", "y 10a\n");

    let output = run_blockperm([
        OsStr::new("parse-system"),
        OsStr::new("--input"),
        input.as_os_str(),
    ]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("must contain '='"));
}
