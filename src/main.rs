mod cli;

use mediaclean::{config, process};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CaptureArgs, Cli, Commands};
use mediaclean_av::{compare_tracks, SourceTool, ToolOutput, TrackKind};
use mediaclean_common::paths::{is_sidecar_file, sidecar_path};
use mediaclean_common::LanguageResolver;
use mediaclean_schema::{
    read_record, to_string, write_record, ConfigFile, Sidecar, VersionedRecord, SIDECAR_VERSION,
};
use process::{CapturedOutputs, ProcessOptions};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediaclean=trace,mediaclean_av=trace,mediaclean_rules=trace,mediaclean_schema=trace,mediaclean_common=debug".to_string()
        } else {
            "mediaclean=info,mediaclean_av=warn,mediaclean_rules=info,mediaclean_schema=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let resolver = LanguageResolver::new();

    match cli.command {
        Commands::Process {
            file,
            capture,
            json,
            no_sidecar,
        } => process_file(
            &file,
            &capture,
            cli.config.as_deref(),
            &resolver,
            json,
            no_sidecar,
        ),
        Commands::Check { file, capture } => check_file(&file, &capture, &resolver),
        Commands::Sidecar { file } => show_sidecar(&file),
        Commands::UpgradeConfig { path } => upgrade_config(&path),
        Commands::DefaultConfig { path } => default_config(path.as_deref()),
        Commands::Resolve { tags } => {
            resolve_tags(&tags, &resolver);
            Ok(())
        }
    }
}

fn read_captures(capture: &CaptureArgs) -> Result<Option<CapturedOutputs>> {
    let (Some(mkvmerge), Some(ffprobe), Some(mediainfo)) =
        (&capture.mkvmerge, &capture.ffprobe, &capture.mediainfo)
    else {
        return Ok(None);
    };

    let read = |path: &Path, exit_code: i32| -> Result<ToolOutput> {
        let stdout = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tool output: {:?}", path))?;
        Ok(ToolOutput {
            stdout,
            stderr: String::new(),
            exit_code,
        })
    };

    Ok(Some(CapturedOutputs {
        mkvmerge: read(mkvmerge, capture.mkvmerge_exit)?,
        ffprobe: read(ffprobe, capture.ffprobe_exit)?,
        mediainfo: read(mediainfo, capture.mediainfo_exit)?,
    }))
}

fn process_file(
    file: &Path,
    capture: &CaptureArgs,
    config_path: Option<&Path>,
    resolver: &LanguageResolver,
    json: bool,
    no_sidecar: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path, resolver)?;
    let outputs = read_captures(capture)?;
    let options = ProcessOptions {
        write_sidecar: !no_sidecar,
    };

    let report = process::process_file(file, &config, resolver, outputs.as_ref(), &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn check_file(file: &Path, capture: &CaptureArgs, resolver: &LanguageResolver) -> Result<()> {
    let outputs = read_captures(capture)?;
    let info = process::stream_info(file, resolver, outputs.as_ref())?;
    let snapshots = &info.snapshots;

    println!("File: {}", file.display());
    println!("Source: {}", info.source);
    for tool in SourceTool::ALL {
        let snapshot = snapshots.get(tool);
        println!(
            "  {:<10} {} video, {} audio, {} subtitle",
            tool,
            snapshot.count(TrackKind::Video),
            snapshot.count(TrackKind::Audio),
            snapshot.count(TrackKind::Subtitle)
        );
    }

    compare_tracks(&snapshots.mkvmerge, &snapshots.ffprobe, &snapshots.mediainfo)
        .with_context(|| format!("Tools disagree on {:?}", file))?;

    println!("All tools agree");
    Ok(())
}

fn show_sidecar(file: &Path) -> Result<()> {
    let path = if is_sidecar_file(file) {
        file.to_path_buf()
    } else {
        sidecar_path(file)
    };

    let sidecar: Sidecar =
        read_record(&path).with_context(|| format!("Failed to read sidecar: {:?}", path))?;

    println!("Sidecar: {}", path.display());
    println!(
        "Schema: v{} (current v{})",
        sidecar.deserialized_version, SIDECAR_VERSION
    );
    println!("Size: {} bytes", sidecar.file.size);
    println!(
        "Modified: {}",
        sidecar
            .file
            .modified
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(hash) = &sidecar.file.hash {
        println!("Hash: {}", hash);
    }

    println!("\nTools:");
    for tool in SourceTool::ALL {
        let record = sidecar.tool(tool);
        let version = match record.version.trim() {
            "" => "unknown version",
            version => version,
        };
        let stored = if record.has_output() { "output stored" } else { "no output" };
        println!("  {:<10} {} ({})", tool, version, stored);
    }

    let states: Vec<String> = sidecar.state.iter().map(|s| s.to_string()).collect();
    println!(
        "\nState: {}",
        if states.is_empty() {
            "none".to_string()
        } else {
            states.join(", ")
        }
    );

    for snapshot in sidecar.tracks.values() {
        print!("\n{}", snapshot);
    }

    Ok(())
}

fn upgrade_config(path: &Path) -> Result<()> {
    let config: ConfigFile =
        read_record(path).with_context(|| format!("Failed to load config file: {:?}", path))?;

    if !config.was_upgraded() {
        println!(
            "{} is already at schema v{}",
            path.display(),
            config.schema_version
        );
        return Ok(());
    }

    write_record(path, &config).with_context(|| format!("Failed to write config: {:?}", path))?;
    println!(
        "Upgraded {} from schema v{} to v{}",
        path.display(),
        config.deserialized_version,
        config.schema_version
    );
    Ok(())
}

fn default_config(path: Option<&Path>) -> Result<()> {
    let config = ConfigFile::default();
    match path {
        Some(path) => {
            write_record(path, &config)
                .with_context(|| format!("Failed to write config: {:?}", path))?;
            println!("Wrote default config to {}", path.display());
        }
        None => println!("{}", to_string(&config)?),
    }
    Ok(())
}

fn resolve_tags(tags: &[String], resolver: &LanguageResolver) {
    for tag in tags {
        match resolver.resolve(tag) {
            Some(language) => println!("{} -> {}", tag, language),
            None => println!("{} -> not found", tag),
        }
    }
}
