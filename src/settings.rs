// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Settings document controlling the simulated analysis.
//!
//! The YAML layout mirrors the knobs of [`SimulatedAnalyzer`]: every field is
//! optional and falls back to the built-in defaults. Loading validates the
//! document so that the analyzer never receives an empty stack or an inverted
//! file-count range.
//!
//! [`SimulatedAnalyzer`]: crate::SimulatedAnalyzer

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    analysis::{Complexity, Stack},
    error::{self, Error},
};

/// Lower bound of the simulated file count when none is configured.
pub const DEFAULT_MIN_FILES: usize = 20;
/// Upper bound (inclusive) of the simulated file count when none is
/// configured.
pub const DEFAULT_MAX_FILES: usize = 119;

/// Raw settings document as written by users.
///
/// # Examples
///
/// ```
/// use git_to_viral::SettingsDocument;
///
/// let yaml = r#"
/// analysis:
///   stack: [Rust, Tokio]
///   complexity: high
/// "#;
/// let document: SettingsDocument = serde_yaml::from_str(yaml,).expect("valid settings",);
/// assert_eq!(document.analysis.stack.as_deref().map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Deserialize, Default,)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument
{
    /// Overrides for the simulated analysis.
    #[serde(default)]
    pub analysis: AnalysisOptions,
}

/// Optional overrides for the simulated analysis.
#[derive(Debug, Deserialize, Default, Clone,)]
#[serde(deny_unknown_fields)]
pub struct AnalysisOptions
{
    /// Technologies reported as the detected stack, primary first.
    #[serde(default)]
    pub stack: Option<Vec<String,>,>,

    /// Complexity label reported for every repository.
    #[serde(default)]
    pub complexity: Option<Complexity,>,

    /// Inclusive range the simulated file count is drawn from.
    #[serde(default, alias = "files_count", alias = "files-count")]
    pub files: Option<FileRangeOptions,>,

    /// Seed making the simulated file count reproducible.
    #[serde(default)]
    pub seed: Option<u64,>,
}

/// Partial file-count range; missing bounds use the defaults.
#[derive(Debug, Deserialize, Default, Clone, Copy,)]
#[serde(deny_unknown_fields)]
pub struct FileRangeOptions
{
    #[serde(default)]
    pub min: Option<usize,>,
    #[serde(default)]
    pub max: Option<usize,>,
}

/// Inclusive bounds of the simulated file count.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct FileRange
{
    min: usize,
    max: usize,
}

impl FileRange
{
    /// Creates a range, rejecting `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the bounds are inverted.
    pub fn new(min: usize, max: usize,) -> Result<Self, Error,>
    {
        if min > max {
            return Err(Error::validation(format!(
                "file count range is inverted: min {min} exceeds max {max}"
            ),),);
        }

        Ok(Self {
            min,
            max,
        },)
    }

    pub fn min(&self,) -> usize
    {
        self.min
    }

    pub fn max(&self,) -> usize
    {
        self.max
    }

    pub fn contains(&self, value: usize,) -> bool
    {
        (self.min..=self.max).contains(&value,)
    }
}

impl Default for FileRange
{
    fn default() -> Self
    {
        Self {
            min: DEFAULT_MIN_FILES, max: DEFAULT_MAX_FILES,
        }
    }
}

/// Validated settings consumed by the simulated analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Default,)]
pub struct AnalyzerSettings
{
    /// Stack attached to every record.
    pub stack:      Stack,
    /// Complexity attached to every record.
    pub complexity: Complexity,
    /// Range the file count is drawn from.
    pub files:      FileRange,
    /// Optional seed for reproducible draws.
    pub seed:       Option<u64,>,
}

/// Loads analyzer settings from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the document violates invariants.
pub fn load_settings(path: &Path,) -> Result<AnalyzerSettings, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_settings(&contents,)
}

/// Parses analyzer settings from a YAML document string.
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when the stack is empty,
/// contains blank entries, or the file range is inverted.
pub fn parse_settings(contents: &str,) -> Result<AnalyzerSettings, Error,>
{
    if contents.trim().is_empty() {
        return Ok(AnalyzerSettings::default(),);
    }

    let document: SettingsDocument = serde_yaml::from_str(contents,)?;
    resolve_settings(document.analysis,)
}

fn resolve_settings(options: AnalysisOptions,) -> Result<AnalyzerSettings, Error,>
{
    let stack = match options.stack {
        Some(entries,) => Stack::new(normalize_stack_entries(entries,)?,)?,
        None => Stack::default(),
    };

    let files = match options.files {
        Some(range,) => FileRange::new(
            range.min.unwrap_or(DEFAULT_MIN_FILES,),
            range.max.unwrap_or(DEFAULT_MAX_FILES,),
        )?,
        None => FileRange::default(),
    };

    Ok(AnalyzerSettings {
        stack,
        complexity: options.complexity.unwrap_or_default(),
        files,
        seed: options.seed,
    },)
}

fn normalize_stack_entries(entries: Vec<String,>,) -> Result<Vec<String,>, Error,>
{
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry,)| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                Err(Error::validation(format!("stack entry {index} is blank"),),)
            } else {
                Ok(trimmed.to_owned(),)
            }
        },)
        .collect()
}
