// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository analyzers.
//!
//! [`RepositoryAnalyzer`] is the seam between the CLI and whatever produces
//! an [`AnalysisRecord`]. The only implementation shipped today is
//! [`SimulatedAnalyzer`], which derives the repository name from the
//! identifier and fills the remaining fields from [`AnalyzerSettings`].

use tracing::debug;

use crate::{
    analysis::AnalysisRecord,
    error::Error,
    settings::AnalyzerSettings,
};

/// Suffix stripped from the final path segment of clone URLs.
const VCS_SUFFIX: &str = ".git";

/// Produces an [`AnalysisRecord`] for a repository identifier.
pub trait RepositoryAnalyzer
{
    /// Analyzes the repository identified by `repository` (URL or path).
    ///
    /// # Errors
    ///
    /// Implementations return an [`Error`] when the repository cannot be
    /// inspected.
    fn analyze(&self, repository: &str,) -> Result<AnalysisRecord, Error,>;
}

/// Derives a repository name from a URL or filesystem path.
///
/// The name is the last path segment with a trailing `.git` removed. Trailing
/// separators and surrounding whitespace are ignored, and both `/` and `\`
/// count as separators. The input is not validated: identifiers without any
/// segment produce an empty string.
///
/// # Examples
///
/// ```
/// use git_to_viral::repository_name;
///
/// assert_eq!(repository_name("https://github.com/octocat/Hello-World.git"), "Hello-World");
/// assert_eq!(repository_name("https://github.com/octocat/Hello-World/"), "Hello-World");
/// assert_eq!(repository_name("git@github.com:octocat/Hello-World.git"), "Hello-World");
/// ```
pub fn repository_name(repository: &str,) -> &str
{
    let trimmed = repository.trim().trim_end_matches(is_separator,);
    let segment = match trimmed.rfind(is_separator,) {
        Some(index,) => &trimmed[index + 1..],
        None => trimmed,
    };

    segment.strip_suffix(VCS_SUFFIX,).unwrap_or(segment,)
}

fn is_separator(candidate: char,) -> bool
{
    matches!(candidate, '/' | '\\')
}

/// Analyzer returning simulated statistics.
///
/// The file count is drawn uniformly from the configured range; the stack and
/// complexity are copied from the settings. When a seed is configured every
/// call draws the same file count.
#[derive(Debug, Clone, Default,)]
pub struct SimulatedAnalyzer
{
    settings: AnalyzerSettings,
}

impl SimulatedAnalyzer
{
    pub fn new(settings: AnalyzerSettings,) -> Self
    {
        Self {
            settings,
        }
    }

    fn draw_files_count(&self,) -> usize
    {
        let mut rng = match self.settings.seed {
            Some(seed,) => fastrand::Rng::with_seed(seed,),
            None => fastrand::Rng::new(),
        };
        let range = self.settings.files;
        rng.usize(range.min()..=range.max(),)
    }
}

impl RepositoryAnalyzer for SimulatedAnalyzer
{
    fn analyze(&self, repository: &str,) -> Result<AnalysisRecord, Error,>
    {
        let name = repository_name(repository,);
        if name.is_empty() {
            debug!("repository identifier {repository:?} produced an empty name");
        }

        let files_count = self.draw_files_count();
        debug!(repository = name, files_count, "simulated repository analysis");

        Ok(AnalysisRecord::new(
            name,
            files_count,
            self.settings.stack.clone(),
            self.settings.complexity,
        ),)
    }
}
