//! inkwash - CLI entry point

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use inkwash::{
    pipeline, CleanArgs, Cli, Commands, Config, ServeArgs, UnconfiguredDetector, WebServer,
};

/// File extensions treated as input images during directory scans
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean(args) => run_clean(&args),
        Commands::Serve(args) => run_serve(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ============ Clean Command ============

fn run_clean(args: &CleanArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        bail!("input path does not exist: {}", args.input.display());
    }

    let inputs = collect_image_files(&args.input)?;
    if inputs.is_empty() {
        bail!("no image files found in {}", args.input.display());
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let bar = ProgressBar::new(inputs.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("valid progress template"),
    );

    let mut failures = 0usize;
    for path in &inputs {
        bar.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        if let Err(e) = clean_one(path, &args.output) {
            failures += 1;
            warn!(input = %path.display(), error = %e, "failed to clean image");
            if args.verbose > 0 {
                bar.println(format!("  {}: {:#}", path.display(), e));
            }
        }
        bar.inc(1);
    }
    bar.finish_with_message("done");

    println!(
        "Cleaned {} of {} image(s) into {}",
        inputs.len() - failures,
        inputs.len(),
        args.output.display()
    );

    if failures > 0 {
        bail!("{} image(s) failed", failures);
    }
    Ok(())
}

fn clean_one(input: &Path, output_dir: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(input)?;
    let cleaned = pipeline::clean_bytes(&bytes)?;

    let stem = input
        .file_stem()
        .context("input file has no name")?
        .to_string_lossy();
    let out_path = output_dir.join(format!("{}.png", stem));
    cleaned.save(&out_path)?;

    Ok(())
}

/// Collect input images: the path itself if it is a file, otherwise every
/// direct child with a known image extension, sorted for stable order.
fn collect_image_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

// ============ Serve Command ============

fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config file");
            Config::default()
        }),
    };

    // CLI flags override the config file
    let mut server_config = config.server_config();
    if let Some(port) = args.port {
        server_config = server_config.with_port(port);
    }
    if let Some(bind) = &args.bind {
        server_config = server_config.with_bind(bind.clone());
    }
    if let Some(limit) = args.upload_limit {
        server_config = server_config.with_upload_limit(limit);
    }

    // Detection backends are wired in by embedding applications; the
    // bundled binary serves the cleaning pipeline with detection reported
    // as unavailable.
    let server = WebServer::with_config(server_config, Arc::new(UnconfiguredDetector));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(server.run())
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
