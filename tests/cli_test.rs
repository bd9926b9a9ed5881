use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_polyui-layout"))
        .args(args)
        .output()
        .expect("Failed to execute polyui-layout")
}

#[test]
fn test_tree_output() {
    let output = run(&[&fixture("row.json")]);
    assert!(output.status.success(), "polyui-layout failed: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected output:\n{stdout}");
    assert_eq!(lines[0], "Block \"app\" pos:(0,0) size:(200,100)");
    assert_eq!(lines[1], "├── Block \"a\" pos:(10,40) size:(40,20)");
    assert_eq!(lines[2], "├── Block \"b\" pos:(80,40) size:(40,20)");
    assert_eq!(lines[3], "└── Block \"c\" pos:(150,40) size:(40,20)");
}

#[test]
fn test_width_override_scales_padding() {
    // reference stays 200 wide, so horizontal padding doubles
    let output = run(&[&fixture("row.json"), "--width", "400"]);
    assert!(output.status.success(), "polyui-layout failed: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Block \"a\" pos:(20,40)"), "unexpected output:\n{stdout}");
    assert!(stdout.contains("Block \"b\" pos:(80,40)"), "unexpected output:\n{stdout}");
    assert!(stdout.contains("Block \"c\" pos:(140,40)"), "unexpected output:\n{stdout}");
}

#[test]
fn test_json_output_with_diagnostics() {
    let output = run(&[&fixture("overflow.json"), "--format", "json"]);
    assert!(output.status.success(), "polyui-layout failed: {}", String::from_utf8_lossy(&output.stderr));

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is not json");
    assert_eq!(dump["window"], serde_json::json!([100.0, 30.0]));
    assert_eq!(dump["components"].as_array().map(Vec::len), Some(3));
    assert_eq!(dump["components"][1]["name"], "root.0");
    assert_eq!(dump["components"][2]["at"], serde_json::json!([0.0, 20.0]));
    assert_eq!(
        dump["diagnostics"],
        serde_json::json!(["content of 'root' (0) overflows its cross axis by 10"])
    );
}

#[test]
fn test_output_file() {
    let target = std::env::temp_dir().join(format!("polyui-layout-{}.txt", std::process::id()));
    let target_arg = target.to_string_lossy().to_string();
    let output = run(&[&fixture("row.json"), "--output", &target_arg]);
    assert!(output.status.success(), "polyui-layout failed: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&target).expect("output file missing");
    assert!(written.starts_with("Block \"app\""));
    let _ = std::fs::remove_file(&target);
}

#[test]
fn test_missing_scene_fails() {
    let output = run(&["does/not/exist.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Scene file not found"));
}

#[test]
fn test_unknown_format_fails() {
    let output = run(&[&fixture("row.json"), "--format", "xml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}
