//! Turns a repository into ready-to-post marketing copy.
//!
//! The library exposes a three-stage pipeline: an analyzer that produces an
//! [`AnalysisRecord`] for a repository identifier, a generator that renders
//! the record into a blog post, a Twitter thread and a LinkedIn post, and a
//! writer that stores those documents in an output directory. The analysis is
//! simulated; [`RepositoryAnalyzer`] is the extension point for a real one.

mod analysis;
mod analyzer;
mod error;
mod generator;
mod output;
mod settings;

pub use analysis::{AnalysisRecord, Complexity, Stack};
pub use analyzer::{RepositoryAnalyzer, SimulatedAnalyzer, repository_name};
pub use error::{Error, io_error, report_error, write_error};
pub use generator::{ContentKind, GeneratedContent, generate};
pub use output::{WrittenContent, write_content};
pub use settings::{
    AnalysisOptions, AnalyzerSettings, DEFAULT_MAX_FILES, DEFAULT_MIN_FILES, FileRange,
    FileRangeOptions, SettingsDocument, load_settings, parse_settings,
};
