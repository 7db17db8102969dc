//! Command-line surface: `serve` (default) runs the HTTP service, `update`
//! tailors a resume file from the terminal.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::output::{FsOutputSink, OutputSink};
use crate::tailoring::update_resume;

#[derive(Parser, Debug)]
#[command(
    name = "resume-tailor",
    about = "Tailor a plain-text resume to a job description",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Tailor a resume file and save the result to the output directory
    Update(UpdateArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Path of the plain-text resume
    #[arg(long)]
    pub resume: PathBuf,
    /// Path of the job description; read from stdin until an empty line when omitted
    #[arg(long)]
    pub jd: Option<PathBuf>,
    /// Override the configured output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Reads job-description lines until the first empty line or end of input.
pub fn read_jd_lines(reader: impl BufRead) -> std::io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Tailors `args.resume` and writes it through the filesystem sink.
/// Returns the path of the saved file.
pub async fn run_update(config: &Config, args: UpdateArgs) -> Result<PathBuf> {
    let resume_text = tokio::fs::read_to_string(&args.resume)
        .await
        .with_context(|| format!("Failed to read resume '{}'", args.resume.display()))?;

    let jd_text = match &args.jd {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description '{}'", path.display()))?,
        None => {
            println!("Paste the job description below. End with an empty line:");
            tokio::task::spawn_blocking(|| read_jd_lines(std::io::stdin().lock()))
                .await
                .context("stdin reader task failed")?
                .context("Failed to read job description from stdin")?
        }
    };

    if jd_text.trim().is_empty() {
        bail!("No job description provided");
    }

    let updated = update_resume(&resume_text, &jd_text);

    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let sink = FsOutputSink::new(output_dir);
    let path = sink.save(&config.output_file, &updated).await?;

    info!(path = %path.display(), "Resume updated from CLI");
    Ok(path)
}
