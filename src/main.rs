//! Command-line interface for the git-to-viral binary.
//!
//! The CLI analyzes a repository, drafts a blog post and social media copy
//! from the analysis, and stores the drafts in an output directory.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser};
use git_to_viral::{
    AnalyzerSettings, Error, RepositoryAnalyzer, SimulatedAnalyzer, WrittenContent, generate,
    load_settings, report_error, write_content,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Transform a repository into a technical blog post and social media drafts.
#[derive(Debug, Parser,)]
#[command(
    name = "git-to-viral",
    version,
    about = "Transform a repository into a high-converting technical blog post & Twitter thread"
)]
struct Cli
{
    /// Repository URL or path (e.g. https://github.com/facebook/react).
    #[arg(value_name = "REPO_URL")]
    repo_url: String,

    /// Directory that will receive the generated documents.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        env = "GIT_TO_VIRAL_OUTPUT",
        default_value = "./output"
    )]
    output: PathBuf,

    /// YAML settings overriding the simulated analysis.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Seed for the simulated file count; overrides the settings seed.
    #[arg(long = "seed", value_name = "N")]
    seed: Option<u64,>,

    /// Print the analysis record as formatted JSON.
    #[arg(long = "print-analysis", action = ArgAction::SetTrue)]
    print_analysis: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from settings loading, document writing and
/// console output.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    run_pipeline(&cli, &mut handle,)?;

    Ok((),)
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the `warn` default.
fn init_tracing()
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),)
        .with_writer(io::stderr,)
        .init();
}

fn resolve_settings(cli: &Cli,) -> Result<AnalyzerSettings, Error,>
{
    let mut settings = match cli.config.as_deref() {
        Some(path,) => {
            info!("loading settings from {}", path.display());
            load_settings(path,)?
        }
        None => AnalyzerSettings::default(),
    };

    if let Some(seed,) = cli.seed {
        settings.seed = Some(seed,);
    }

    Ok(settings,)
}

/// Runs analysis, generation and writing, reporting progress to `writer`.
fn run_pipeline<W: Write,>(cli: &Cli, writer: &mut W,) -> Result<WrittenContent, Error,>
{
    let analyzer = SimulatedAnalyzer::new(resolve_settings(cli,)?,);

    writeln!(writer, "🚀 Analyzing {}...", cli.repo_url).map_err(report_error,)?;
    info!("analysis started");
    let analysis = analyzer.analyze(&cli.repo_url,)?;
    writeln!(
        writer,
        "✅ Analysis complete: Found {} files, identified stack: {}",
        analysis.files_count(),
        analysis.stack().joined(", ",)
    )
    .map_err(report_error,)?;

    if cli.print_analysis {
        let rendered = serde_json::to_string_pretty(&analysis,)?;
        writeln!(writer, "{rendered}").map_err(report_error,)?;
    }

    writeln!(writer, "📝 Drafting blog post and social media content...").map_err(report_error,)?;
    info!("generating content");
    let content = generate(&analysis,);

    let written = write_content(&cli.output, &content,)?;
    info!("content written to {}", written.output_dir.display());

    writeln!(writer, "✨ Success! Content saved to {}", cli.output.display())
        .map_err(report_error,)?;
    for (kind, _,) in &written.files {
        writeln!(writer, "   - {}", kind.file_name()).map_err(report_error,)?;
    }

    Ok(written,)
}
