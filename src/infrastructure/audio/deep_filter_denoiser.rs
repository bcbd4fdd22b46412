use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{DenoiseError, Denoiser};

/// Suffix DeepFilterNet appends to the files it writes.
const TOOL_OUTPUT_SUFFIX: &str = "_DeepFilterNet3";

/// Shells out to the DeepFilterNet CLI. The tool is pointed at the
/// output directory and names its result `<stem>_DeepFilterNet3<ext>`;
/// that file is verified non-empty and renamed to the requested output
/// path.
pub struct DeepFilterDenoiser {
    command: String,
}

impl DeepFilterDenoiser {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Runs `<command> --version`. Used for startup logging only; a
    /// missing tool is not fatal because every denoise call degrades
    /// independently.
    pub async fn probe(&self) -> Result<String, DenoiseError> {
        let output = Command::new(&self.command).arg("--version").output().await?;
        if !output.status.success() {
            return Err(DenoiseError::ToolFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn tool_output_path(input: &Path, output_dir: &Path) -> std::path::PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        output_dir.join(format!("{}{}{}", stem, TOOL_OUTPUT_SUFFIX, ext))
    }
}

#[async_trait]
impl Denoiser for DeepFilterDenoiser {
    async fn denoise(&self, input: &Path, output: &Path) -> Result<(), DenoiseError> {
        let output_dir = output.parent().ok_or_else(|| {
            DenoiseError::MissingOutput(format!("output path has no parent: {}", output.display()))
        })?;
        tokio::fs::create_dir_all(output_dir).await?;

        tracing::debug!(
            input = %input.display(),
            output_dir = %output_dir.display(),
            "Running noise reduction"
        );

        let result = Command::new(&self.command)
            .arg(input)
            .arg("-o")
            .arg(output_dir)
            .output()
            .await?;

        if !result.status.success() {
            return Err(DenoiseError::ToolFailed(
                String::from_utf8_lossy(&result.stderr).into_owned(),
            ));
        }

        let produced = Self::tool_output_path(input, output_dir);
        let metadata = tokio::fs::metadata(&produced).await.map_err(|_| {
            DenoiseError::MissingOutput(format!(
                "expected tool output at {}",
                produced.display()
            ))
        })?;
        if metadata.len() == 0 {
            return Err(DenoiseError::EmptyOutput(produced.display().to_string()));
        }

        if tokio::fs::try_exists(output).await? {
            tokio::fs::remove_file(output).await?;
        }
        tokio::fs::rename(&produced, output).await?;

        tracing::debug!(
            output = %output.display(),
            bytes = metadata.len(),
            "Noise reduction completed"
        );
        Ok(())
    }
}
