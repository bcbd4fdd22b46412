#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use clearspeech::application::ports::{DenoiseError, Denoiser};
use clearspeech::infrastructure::audio::{DeepFilterDenoiser, PassthroughDenoiser};

/// Writes an executable stand-in for the DeepFilterNet CLI. It is
/// invoked as `<script> <input> -o <output_dir>`.
fn write_stub_tool(dir: &Path, body: &str) -> PathBuf {
    let script_path = dir.join("fake-deepfilter");
    let script = format!("#!/bin/sh\n{}\n", body);
    std::fs::write(&script_path, script).unwrap();
    let mut permissions = std::fs::metadata(&script_path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&script_path, permissions).unwrap();
    script_path
}

fn setup_input(dir: &Path) -> PathBuf {
    let input = dir.join("take.wav");
    std::fs::write(&input, b"noisy-audio").unwrap();
    input
}

#[tokio::test]
async fn given_tool_writes_suffixed_output_when_denoising_then_renamed_to_requested_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");
    let tool = write_stub_tool(
        dir.path(),
        r#"printf 'clean-audio' > "$3/take_DeepFilterNet3.wav""#,
    );

    let denoiser = DeepFilterDenoiser::new(tool.to_string_lossy());
    denoiser.denoise(&input, &output).await.unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"clean-audio");
    // the tool's own output file must be gone after the rename
    assert!(!dir.path().join("out").join("take_DeepFilterNet3.wav").exists());
    // input stays untouched
    assert_eq!(std::fs::read(&input).unwrap(), b"noisy-audio");
}

#[tokio::test]
async fn given_tool_exits_nonzero_when_denoising_then_tool_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");
    let tool = write_stub_tool(dir.path(), r#"echo 'device unavailable' >&2; exit 1"#);

    let denoiser = DeepFilterDenoiser::new(tool.to_string_lossy());
    let result = denoiser.denoise(&input, &output).await;

    match result {
        Err(DenoiseError::ToolFailed(message)) => {
            assert!(message.contains("device unavailable"));
        }
        other => panic!("expected tool failure, got {:?}", other),
    }
}

#[tokio::test]
async fn given_tool_produces_nothing_when_denoising_then_missing_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");
    let tool = write_stub_tool(dir.path(), "exit 0");

    let denoiser = DeepFilterDenoiser::new(tool.to_string_lossy());
    let result = denoiser.denoise(&input, &output).await;

    assert!(matches!(result, Err(DenoiseError::MissingOutput(_))));
}

#[tokio::test]
async fn given_tool_produces_empty_file_when_denoising_then_empty_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");
    let tool = write_stub_tool(dir.path(), r#": > "$3/take_DeepFilterNet3.wav""#);

    let denoiser = DeepFilterDenoiser::new(tool.to_string_lossy());
    let result = denoiser.denoise(&input, &output).await;

    assert!(matches!(result, Err(DenoiseError::EmptyOutput(_))));
}

#[tokio::test]
async fn given_missing_tool_when_denoising_then_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");

    let denoiser = DeepFilterDenoiser::new("/nonexistent/deepFilter");
    let result = denoiser.denoise(&input, &output).await;

    assert!(matches!(result, Err(DenoiseError::Io(_))));
}

#[tokio::test]
async fn given_passthrough_denoiser_when_denoising_then_bytes_copied_verbatim() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = setup_input(dir.path());
    let output = dir.path().join("out").join("take_cleaned.wav");

    PassthroughDenoiser.denoise(&input, &output).await.unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"noisy-audio");
    assert_eq!(std::fs::read(&input).unwrap(), b"noisy-audio");
}
