//! Still-frame extraction
//!
//! Walks a directory of label CSVs, matches each row against the media
//! directory, and asks ffmpeg for the frame at the row's start position.
//! Diagnostics go through a composed [`MessageHandler`]; per-row problems
//! are warnings and the batch keeps going, while setup failures propagate.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::{MessageError, Result};
use crate::message::MessageHandler;

use super::labels::{read_label_csv, LabelRow};

pub struct StillExtractor {
    csv_dir: PathBuf,
    media_dir: PathBuf,
    output_dir: PathBuf,
    ffmpeg: PathBuf,
    messages: MessageHandler,
}

impl StillExtractor {
    /// `output_dir` defaults to the media directory when absent.
    pub fn new(
        csv_dir: impl Into<PathBuf>,
        media_dir: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        messages: MessageHandler,
    ) -> Self {
        let media_dir = media_dir.into();
        let output_dir = output_dir.unwrap_or_else(|| media_dir.clone());
        Self {
            csv_dir: csv_dir.into(),
            media_dir,
            output_dir,
            ffmpeg: PathBuf::from("ffmpeg"),
            messages,
        }
    }

    #[must_use]
    pub fn with_ffmpeg_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.ffmpeg = binary.into();
        self
    }

    /// Check that the ffmpeg binary is runnable.
    pub fn check_ffmpeg(&self) -> Result<()> {
        let output = Command::new(&self.ffmpeg)
            .arg("-version")
            .output()
            .map_err(|e| MessageError::ffmpeg(format!("ffmpeg not found: {}", e)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(MessageError::ffmpeg("ffmpeg version check failed"))
        }
    }

    /// Extract one still per CSV row. Returns the number of stills written.
    pub fn extract_frames(&self) -> Result<usize> {
        self.check_ffmpeg()
            .map_err(|e| self.messages.raise(e))?;

        let csvs = self
            .csv_files()
            .map_err(|e| self.messages.raise(e))?;
        if csvs.is_empty() {
            self.messages
                .warn(format!("no CSV files found in '{}'", self.csv_dir.display()));
            return Ok(0);
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| self.messages.raise(MessageError::Io(e)))?;

        let mut extracted = 0;
        for csv in &csvs {
            self.messages
                .print(format!("reading labels from '{}'", csv.display()));
            let rows = read_label_csv(csv).map_err(|e| self.messages.raise(e))?;

            for row in &rows {
                let Some(media) = self.find_media(&row.file) else {
                    self.messages.warn(format!(
                        "media file '{}' not found in '{}', skipping row '{}'",
                        row.file,
                        self.media_dir.display(),
                        row.label
                    ));
                    continue;
                };

                let output = self.output_path(row);
                match self.extract_row(&media, row, &output) {
                    Ok(()) => {
                        extracted += 1;
                        self.messages.print(format!(
                            "extracted frame {} of '{}' to '{}'",
                            row.start,
                            row.file,
                            output.display()
                        ));
                    }
                    Err(e) => {
                        self.messages.warn(format!(
                            "failed to extract frame {} of '{}': {}",
                            row.start, row.file, e
                        ));
                    }
                }
            }
        }

        self.messages
            .print(format!("extracted {} stills", extracted));
        Ok(extracted)
    }

    /// Every `*.csv` in the CSV directory, sorted for a deterministic run
    /// order.
    fn csv_files(&self) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.csv_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn find_media(&self, file: &str) -> Option<PathBuf> {
        let candidate = self.media_dir.join(file);
        candidate.is_file().then_some(candidate)
    }

    fn output_path(&self, row: &LabelRow) -> PathBuf {
        let stem = Path::new(&row.file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| row.file.clone());
        self.output_dir
            .join(format!("{}_{}_{}.png", stem, row.start, slugify_label(&row.label)))
    }

    fn extract_row(&self, media: &Path, row: &LabelRow, output: &Path) -> Result<()> {
        let output_cmd = Command::new(&self.ffmpeg)
            .arg("-y")
            .arg("-i")
            .arg(media)
            .arg("-vf")
            .arg(format!("select=eq(n\\,{})", row.start))
            .arg("-frames:v")
            .arg("1")
            .arg(output)
            .output()
            .map_err(|e| MessageError::ffmpeg(format!("failed to execute ffmpeg: {}", e)))?;

        if output_cmd.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output_cmd.stderr);
            Err(MessageError::ffmpeg(format!(
                "frame extraction failed: {}",
                stderr.trim()
            )))
        }
    }
}

/// Reduce a subtitle label to a filesystem-safe slug.
pub fn slugify_label(label: &str) -> String {
    let mut slug: String = label
        .trim()
        .chars()
        .take(64)
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        slug.push_str("unlabeled");
    }
    slug
}
