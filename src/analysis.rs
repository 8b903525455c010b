// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Data model describing the outcome of a repository analysis.
//!
//! An [`AnalysisRecord`] is built once per run and handed to the generator by
//! reference. Its stack is guaranteed to be non-empty, so the generator can
//! always address the primary technology without additional checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered, non-empty list of technology names attributed to a repository.
///
/// The first element is treated as the primary technology.
///
/// # Examples
///
/// ```
/// use git_to_viral::Stack;
///
/// let stack = Stack::new(vec!["Rust".to_owned(), "Tokio".to_owned()],).expect("non-empty",);
/// assert_eq!(stack.primary(), "Rust");
/// assert_eq!(stack.joined(", "), "Rust, Tokio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(transparent)]
pub struct Stack
{
    entries: Vec<String,>,
}

impl Stack
{
    /// Creates a stack from the provided technology names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `entries` is empty.
    pub fn new(entries: Vec<String,>,) -> Result<Self, Error,>
    {
        if entries.is_empty() {
            return Err(Error::validation("stack must contain at least one technology",),);
        }

        Ok(Self {
            entries,
        },)
    }

    /// Returns the primary technology.
    pub fn primary(&self,) -> &str
    {
        // `new` rejects empty vectors.
        &self.entries[0]
    }

    pub fn entries(&self,) -> &[String]
    {
        &self.entries
    }

    pub fn len(&self,) -> usize
    {
        self.entries.len()
    }

    /// Never true for a stack built through [`Stack::new`].
    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    /// Joins all technology names with `separator`.
    pub fn joined(&self, separator: &str,) -> String
    {
        self.entries.join(separator,)
    }
}

impl Default for Stack
{
    fn default() -> Self
    {
        Self {
            entries: ["Node.js", "React", "Docker",].into_iter().map(str::to_owned,).collect(),
        }
    }
}

/// Complexity rating attached to an analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,)]
#[serde(rename_all = "snake_case")]
pub enum Complexity
{
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity
{
    /// Human-readable label used in summaries and generated documents.
    pub const fn label(self,) -> &'static str
    {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Complexity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.label(),)
    }
}

/// Structured summary of a repository produced by an analyzer.
///
/// The `summary` field is derived from the other fields at construction time
/// and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct AnalysisRecord
{
    name:        String,
    files_count: usize,
    stack:       Stack,
    complexity:  Complexity,
    summary:     String,
}

impl AnalysisRecord
{
    /// Builds a record and derives its summary sentence.
    ///
    /// # Examples
    ///
    /// ```
    /// use git_to_viral::{AnalysisRecord, Complexity, Stack};
    ///
    /// let record = AnalysisRecord::new("Hello-World", 42, Stack::default(), Complexity::Medium,);
    /// assert_eq!(
    ///     record.summary(),
    ///     "A Medium-complexity project built with Node.js, React, Docker."
    /// );
    /// ```
    pub fn new(
        name: impl Into<String,>,
        files_count: usize,
        stack: Stack,
        complexity: Complexity,
    ) -> Self
    {
        let summary = format!(
            "A {complexity}-complexity project built with {}.",
            stack.joined(", ",)
        );

        Self {
            name: name.into(),
            files_count,
            stack,
            complexity,
            summary,
        }
    }

    pub fn name(&self,) -> &str
    {
        &self.name
    }

    pub fn files_count(&self,) -> usize
    {
        self.files_count
    }

    pub fn stack(&self,) -> &Stack
    {
        &self.stack
    }

    pub fn complexity(&self,) -> Complexity
    {
        self.complexity
    }

    pub fn summary(&self,) -> &str
    {
        &self.summary
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{AnalysisRecord, Complexity, Stack};
    use crate::error::Error;

    fn stack_of(entries: &[&str],) -> Stack
    {
        Stack::new(entries.iter().map(|entry| (*entry).to_owned(),).collect(),)
            .expect("stack should be non-empty",)
    }

    #[test]
    fn empty_stack_is_rejected()
    {
        let error = Stack::new(Vec::new(),).expect_err("expected validation error",);
        match error {
            Error::Validation {
                message,
            } => assert!(message.contains("at least one technology")),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn primary_is_first_entry()
    {
        let stack = stack_of(&["Go", "gRPC",],);
        assert_eq!(stack.primary(), "Go");
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_empty());
    }

    #[test]
    fn default_stack_matches_simulated_detection()
    {
        let stack = Stack::default();
        assert_eq!(stack.entries(), ["Node.js", "React", "Docker"]);
    }

    #[test]
    fn complexity_labels_are_title_case()
    {
        assert_eq!(Complexity::Low.to_string(), "Low");
        assert_eq!(Complexity::default().to_string(), "Medium");
        assert_eq!(Complexity::High.label(), "High");
    }

    #[test]
    fn complexity_deserializes_from_snake_case()
    {
        let parsed: Complexity = serde_yaml::from_str("high",).expect("valid complexity",);
        assert_eq!(parsed, Complexity::High);
    }

    #[test]
    fn record_serializes_stack_as_plain_array()
    {
        let record = AnalysisRecord::new("demo", 30, stack_of(&["Rust",],), Complexity::Low,);
        let json = serde_json::to_value(&record,).expect("serialization failed",);

        assert_eq!(json["name"], "demo");
        assert_eq!(json["files_count"], 30);
        assert_eq!(json["stack"], serde_json::json!(["Rust"]));
        assert_eq!(json["complexity"], "low");
        assert_eq!(json["summary"], "A Low-complexity project built with Rust.");
    }

    proptest! {
        #[test]
        fn summary_mentions_every_technology_and_complexity(
            entries in proptest::collection::vec("[A-Za-z][A-Za-z0-9.+#]{0,12}", 1..6),
            complexity in prop_oneof![
                Just(Complexity::Low),
                Just(Complexity::Medium),
                Just(Complexity::High)
            ]
        ) {
            let stack = Stack::new(entries.clone()).expect("non-empty stack");
            let record = AnalysisRecord::new("repo", 20, stack, complexity);

            for entry in &entries {
                prop_assert!(record.summary().contains(entry.as_str()));
            }
            prop_assert!(record.summary().contains(complexity.label()));
        }
    }
}
