// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Content generation from analysis records.
//!
//! Each document is produced by substituting record fields into a fixed
//! template. Generation is pure: the same record always yields byte-identical
//! documents. Field values are inserted verbatim without escaping.

use std::fmt::Write as _;

use crate::analysis::AnalysisRecord;

/// Kind of document produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Long-form post with headings.
    Blog,
    /// Five numbered short-form segments.
    TwitterThread,
    /// Short professional-style post.
    LinkedinPost
}

impl ContentKind {
    /// All kinds in the order they are written and reported.
    pub const ALL: [Self; 3] = [Self::Blog, Self::TwitterThread, Self::LinkedinPost];

    /// File name the document is stored under inside the output directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Blog => "blog-post.md",
            Self::TwitterThread => "twitter-thread.md",
            Self::LinkedinPost => "linkedin-post.md"
        }
    }
}

/// The three documents generated from one analysis record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// Long-form blog post.
    pub blog:           String,
    /// Numbered Twitter thread.
    pub twitter_thread: String,
    /// LinkedIn post.
    pub linkedin_post:  String
}

impl GeneratedContent {
    /// Returns the document for `kind`.
    pub fn document(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Blog => &self.blog,
            ContentKind::TwitterThread => &self.twitter_thread,
            ContentKind::LinkedinPost => &self.linkedin_post
        }
    }

    /// Iterates over every document together with its kind.
    pub fn documents(&self) -> impl Iterator<Item = (ContentKind, &str)> + '_ {
        ContentKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.document(kind)))
    }
}

/// Generates the blog post, Twitter thread and LinkedIn post for `analysis`.
///
/// # Example
///
/// ```
/// use git_to_viral::{AnalysisRecord, Complexity, Stack, generate};
///
/// let record = AnalysisRecord::new("Hello-World", 42, Stack::default(), Complexity::Medium);
/// let content = generate(&record);
/// assert!(content.blog.starts_with("# 🚀 How We Built Hello-World"));
/// assert!(content.twitter_thread.contains("#node.js"));
/// ```
pub fn generate(analysis: &AnalysisRecord) -> GeneratedContent {
    GeneratedContent {
        blog:           build_blog_post(analysis),
        twitter_thread: build_twitter_thread(analysis),
        linkedin_post:  build_linkedin_post(analysis)
    }
}

fn build_blog_post(analysis: &AnalysisRecord) -> String {
    let name = analysis.name();
    let stack = analysis.stack();
    let mut buffer = String::with_capacity(512);

    let _ = writeln!(
        buffer,
        "# 🚀 How We Built {name}: A Deep Dive into {}\n",
        stack.primary()
    );
    let _ = writeln!(
        buffer,
        "## Introduction\nWelcome to a detailed technical breakdown of {name}. This project is built using **{}** and focuses on...\n",
        stack.joined(", ")
    );
    let _ = writeln!(buffer, "> {}\n", analysis.summary());
    let _ = writeln!(
        buffer,
        "## Architecture\n- **Complexity**: {}\n- **Core Components**: ...\n",
        analysis.complexity()
    );
    buffer.push_str(
        "## Key Learnings\n1. Use Docker for...\n2. Optimize React components by...\n\n"
    );
    let _ = writeln!(
        buffer,
        "## Conclusion\nCheck out the repo at github.com/{name}. Happy coding!"
    );

    buffer
}

fn build_twitter_thread(analysis: &AnalysisRecord) -> String {
    let name = analysis.name();
    let stack = analysis.stack();
    let mut buffer = String::with_capacity(384);

    let _ = writeln!(
        buffer,
        "🧵 1/5: Just explored {name}! A fascinating {} project that solves...\n",
        stack.primary()
    );
    buffer.push_str("2/5: 🏗️ Tech Stack:\n");
    for entry in stack.entries() {
        let _ = writeln!(buffer, "- {entry}");
    }
    buffer.push_str("\n3/5: 💡 Key Takeaway: Using Docker simplifies deployment by 10x.\n\n");
    let _ = writeln!(
        buffer,
        "4/5: 🛠️ Complexity: {}. Perfect for mid-level devs.\n",
        analysis.complexity()
    );
    let _ = write!(
        buffer,
        "5/5: Check it out here: github.com/{name} {}",
        hashtags(&["webdev", "opensource"], analysis, &[])
    );

    buffer
}

fn build_linkedin_post(analysis: &AnalysisRecord) -> String {
    let name = analysis.name();
    let stack = analysis.stack();
    let primary = stack.primary();
    let mut buffer = String::with_capacity(384);

    let _ = writeln!(buffer, "🔥 New Project Discovery: {name}\n");
    let _ = writeln!(
        buffer,
        "I recently dove into the source code of {name}, an impressive {primary} application.\n"
    );
    let _ = writeln!(
        buffer,
        "Key Highlights:\n- Modern stack: {}\n- Clean architecture with {} complexity.\n",
        stack.joined(", "),
        analysis.complexity()
    );
    let _ = writeln!(
        buffer,
        "If you're a developer looking to learn {primary}, this repo is a goldmine.\n"
    );
    buffer.push_str("🔗 Link in comments! 👇\n");
    buffer.push_str(&hashtags(&["softwareengineering"], analysis, &["opensource"]));

    buffer
}

/// Renders `leading`, the lowercased primary technology, then `trailing` as a
/// space-separated hashtag line.
fn hashtags(leading: &[&str], analysis: &AnalysisRecord, trailing: &[&str]) -> String {
    let primary = analysis.stack().primary().to_lowercase();

    leading
        .iter()
        .copied()
        .chain([primary.as_str()])
        .chain(trailing.iter().copied())
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}
