use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediaclean")]
#[command(author, version, about = "Media library cleaner: reconcile tool output and decide what to do with each track")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Captured tool output for one media file.
///
/// Either all three files are given or none; without them the file's sidecar
/// is used.
#[derive(Args, Debug, Clone)]
pub struct CaptureArgs {
    /// File holding `mkvmerge -J` output
    #[arg(long, value_name = "FILE", requires_all = ["ffprobe", "mediainfo"])]
    pub mkvmerge: Option<PathBuf>,

    /// File holding `ffprobe -show_streams -print_format json` output
    #[arg(long, value_name = "FILE", requires_all = ["mkvmerge", "mediainfo"])]
    pub ffprobe: Option<PathBuf>,

    /// File holding `mediainfo --Output=XML` output
    #[arg(long, value_name = "FILE", requires_all = ["mkvmerge", "ffprobe"])]
    pub mediainfo: Option<PathBuf>,

    /// Exit code of the mkvmerge run (1 means warnings)
    #[arg(long, value_name = "CODE", default_value_t = 0)]
    pub mkvmerge_exit: i32,

    /// Exit code of the ffprobe run
    #[arg(long, value_name = "CODE", default_value_t = 0)]
    pub ffprobe_exit: i32,

    /// Exit code of the mediainfo run
    #[arg(long, value_name = "CODE", default_value_t = 0)]
    pub mediainfo_exit: i32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide what to do with the tracks of a media file
    Process {
        /// Media file to process
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        capture: CaptureArgs,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not write the sidecar
        #[arg(long)]
        no_sidecar: bool,
    },

    /// Check that the three tools agree on a media file's tracks
    Check {
        /// Media file to check
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Show the sidecar of a media file
    Sidecar {
        /// Media file or sidecar file
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Rewrite a config file in the current schema version
    UpgradeConfig {
        /// Config file to upgrade
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Write the default config (to stdout if no path is given)
    DefaultConfig {
        /// Where to write the config
        path: Option<PathBuf>,
    },

    /// Resolve language tags to their canonical ISO 639-2 code
    Resolve {
        /// Tags such as `en`, `fr-CA`, `zho` or `German`
        #[arg(required = true)]
        tags: Vec<String>,
    },
}
