// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual ros-ign-convert binary and verify its behavior.

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

/// Get the path to the built ros-ign-convert binary
fn cli_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    // The test binary is in target/debug/deps/
    // The ros-ign-convert binary is in target/debug/
    path.pop(); // deps
    path.pop(); // debug or release
    path.push("ros-ign-convert");
    path
}

/// Run ros-ign-convert with arguments, feeding `stdin`
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let bin = cli_bin();
    let mut child = Command::new(&bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin));
    if let Some(mut pipe) = child.stdin.take() {
        // The binary may exit before reading, e.g. on argument errors.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

/// Run ros-ign-convert with arguments
fn run(args: &[&str]) -> Output {
    run_with_stdin(args, "")
}

/// Run ros-ign-convert and assert success
fn run_ok(args: &[&str], stdin: &str) -> String {
    let output = run_with_stdin(args, stdin);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run ros-ign-convert and assert failure
fn run_err(args: &[&str], stdin: &str) -> String {
    let output = run_with_stdin(args, stdin);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

const BOOL_TO_IGN: &[&str] = &[
    "convert",
    "--ros-type",
    "std_msgs/msg/Bool",
    "--ign-type",
    "ignition.msgs.Boolean",
    "--direction",
    "ros-to-ign",
];

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"], "");
    assert!(output.contains("Convert messages between ROS 2 and Ignition"));
    assert!(output.contains("list"));
    assert!(output.contains("convert"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"], "");
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_no_args() {
    let output = run(&[]);
    assert!(!output.status.success());
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_pairs() {
    let output = run_ok(&["list"], "");
    assert!(output.contains("sensor_msgs/msg/Image"));
    assert!(output.contains("ignition.msgs.Pose_V"));
    assert!(output.contains("pair(s)"));
}

#[test]
fn test_list_json_filtered() {
    let output = run_ok(&["list", "--json", "--ros-type", "geometry_msgs/msg/Point"], "");
    let items: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(1));
    assert_eq!(items[0]["ign_type"], "ignition.msgs.Vector3d");
}

// ============================================================================
// Convert Command Tests
// ============================================================================

#[test]
fn test_convert_json_from_stdin() {
    let output = run_ok(BOOL_TO_IGN, r#"{"data": true}"#);
    let message: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(message["data"], true);
}

#[test]
fn test_convert_ign_to_ros_translates_frame() {
    let input = r#"{"stamp": {"sec": 3, "nsec": 0},
                    "data": [{"key": "frame_id", "value": ["world::robot"]}]}"#;
    let output = run_ok(
        &[
            "convert",
            "--ros-type",
            "std_msgs/msg/Header",
            "--ign-type",
            "ignition.msgs.Header",
            "--direction",
            "ign-to-ros",
        ],
        input,
    );
    let message: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(message["frame_id"], "world/robot");
    assert_eq!(message["stamp"]["sec"], 3);
}

#[test]
fn test_convert_protobuf_hex_output_and_back() {
    let mut args = BOOL_TO_IGN.to_vec();
    args.extend(["--format", "protobuf-hex"]);
    let hex_out = run_ok(&args, r#"{"data": true}"#);
    // field 2 (data), varint 1
    assert_eq!(hex_out.trim(), "1001");

    let output = run_ok(
        &[
            "convert",
            "--ros-type",
            "std_msgs/msg/Bool",
            "--ign-type",
            "ignition.msgs.Boolean",
            "--direction",
            "ign-to-ros",
            "--input-format",
            "protobuf-hex",
        ],
        &hex_out,
    );
    let message: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(message["data"], true);
}

#[test]
fn test_convert_degraded_reports_warning() {
    let input = r#"{"width": 2, "height": 1, "encoding": "yuv422", "data": [1, 2, 3, 4]}"#;
    let args = [
        "convert",
        "--ros-type",
        "sensor_msgs/msg/Image",
        "--ign-type",
        "ignition.msgs.Image",
        "--direction",
        "ros-to-ign",
    ];

    let output = run_with_stdin(&args, input);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported format [yuv422]"));
    assert_eq!(stderr.matches("unsupported format [yuv422]").count(), 1);

    let mut strict = args.to_vec();
    strict.push("--strict");
    let output = run_with_stdin(&strict, input);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_convert_unsupported_pair() {
    let stderr = run_err(
        &[
            "convert",
            "--ros-type",
            "std_msgs/msg/Bool",
            "--ign-type",
            "ignition.msgs.Pose",
            "--direction",
            "ros-to-ign",
        ],
        "{}",
    );
    assert!(stderr.contains("Unsupported message pair"));
}

#[test]
fn test_convert_invalid_json() {
    let stderr = run_err(BOOL_TO_IGN, "not json");
    assert!(stderr.contains("not valid JSON"));
}

#[test]
fn test_convert_invalid_direction() {
    let output = run(&[
        "convert",
        "--ros-type",
        "std_msgs/msg/Bool",
        "--ign-type",
        "ignition.msgs.Boolean",
        "--direction",
        "sideways",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_convert_protobuf_output_needs_ign_destination() {
    let stderr = run_err(
        &[
            "convert",
            "--ros-type",
            "std_msgs/msg/Bool",
            "--ign-type",
            "ignition.msgs.Boolean",
            "--direction",
            "ign-to-ros",
            "--format",
            "protobuf-hex",
        ],
        r#"{"data": false}"#,
    );
    assert!(stderr.contains("only available for ros-to-ign"));
}

#[test]
fn test_convert_with_config_file() {
    let path =
        std::env::temp_dir().join(format!("ros_ign_convert_cli_{}.toml", std::process::id()));
    std::fs::write(&path, "encode_frame_delimiters = true\n").unwrap();
    let path_str = path.to_string_lossy().to_string();

    let output = run_with_stdin(
        &[
            "convert",
            "--ros-type",
            "std_msgs/msg/Header",
            "--ign-type",
            "ignition.msgs.Header",
            "--direction",
            "ros-to-ign",
            "--config",
            &path_str,
        ],
        r#"{"frame_id": "robot/base"}"#,
    );
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let message: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(message["data"][0]["value"][0], "robot::base");
}
