use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigOverrides, MinifyOverrides, ServeOverrides};

/// Available Satchel subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack an HTML entry file into a single self-contained file
    ///
    /// Every `<script src>` and `<link rel="stylesheet">` that points at a
    /// local file is replaced by its contents. References that cannot be
    /// found are left untouched.
    Build(BuildArgs),

    /// Serve a directory of pre-built files
    ///
    /// `/` returns the index file, every other path is looked up inside the
    /// directory. Nothing is rebuilt.
    Serve(ServeArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Entry HTML file, relative to --root
    ///
    /// Examples:
    ///   satchel build
    ///   satchel build game.html --root ./sisyphus
    #[arg(value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Directory the entry file and its assets are resolved against
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path of the packed HTML file
    ///
    /// Parent directories are created when missing.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Skip minification and write the inlined document as serialized
    #[arg(long)]
    pub no_minify: bool,

    /// Keep HTML comments when minifying
    #[arg(long, conflicts_with = "no_minify")]
    pub keep_comments: bool,

    /// Path to a config file (defaults to ./satchel.config.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory to serve
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// File returned for `/`
    #[arg(long, value_name = "FILE")]
    pub index: Option<String>,

    /// Path to a config file (defaults to ./satchel.config.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl From<&BuildArgs> for ConfigOverrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            root: args.root.clone(),
            entry: args.entry.clone(),
            output: args.out.clone(),
            minify: MinifyOverrides {
                enabled: args.no_minify.then_some(false),
                keep_comments: args.keep_comments.then_some(true),
            },
            serve: ServeOverrides::default(),
        }
    }
}

impl From<&ServeArgs> for ConfigOverrides {
    fn from(args: &ServeArgs) -> Self {
        Self {
            serve: ServeOverrides {
                dir: args.dir.clone(),
                host: args.host.clone(),
                port: args.port,
                index: args.index.clone(),
            },
            ..Self::default()
        }
    }
}
