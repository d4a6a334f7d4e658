//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use pathrex::output::OutputMode;
use pathrex::{Options, PathPattern, PathSpec};

/// pathrex - Compile path templates into regular expressions
#[derive(Parser, Debug)]
#[command(
    name = "pathrex",
    version,
    about = "Compile path templates into regular expressions",
    long_about = "Compile Express-style path templates into anchored regular expressions.\n\n\
                  Templates use `:name` parameters with optional `(capture)`, `*` repeat\n\
                  and `?` optional modifiers, plus `*` wildcards. Every capturing group of\n\
                  the compiled pattern is reported as a key."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile one or more specs (several specs are joined by alternation)
    Compile {
        /// Path templates, or regex source with --raw
        #[arg(required = true)]
        specs: Vec<String>,

        #[command(flatten)]
        flags: CompileFlags,
    },

    /// Compile a spec and match paths against it
    Match {
        /// Path template, or regex source with --raw
        spec: String,

        /// Paths to match
        #[arg(required = true)]
        paths: Vec<String>,

        #[command(flatten)]
        flags: CompileFlags,
    },

    /// Show version
    Version,
}

/// Flags controlling compilation
#[derive(Args, Debug)]
pub struct CompileFlags {
    /// Do not tolerate a trailing slash
    #[arg(long)]
    pub strict: bool,

    /// Allow matching a prefix that ends at a `/` boundary
    #[arg(long)]
    pub prefix: bool,

    /// Match case-sensitively
    #[arg(long)]
    pub sensitive: bool,

    /// Load options from a TOML file (flags override it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat inputs as regular-expression source instead of templates
    #[arg(long)]
    pub raw: bool,
}

impl CompileFlags {
    /// Resolve options: defaults, then config file, then flags
    pub fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::load(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => Options::default(),
        };

        if self.strict {
            options.strict = true;
        }
        if self.prefix {
            options.end = false;
        }
        if self.sensitive {
            options.sensitive = true;
        }
        Ok(options)
    }

    /// Turn one command-line input into a spec
    pub fn spec(&self, input: &str, options: &Options) -> anyhow::Result<PathSpec> {
        if self.raw {
            let pattern = PathPattern::new(input, options.sensitive)
                .with_context(|| format!("compiling raw pattern `{input}`"))?;
            Ok(PathSpec::Pattern(pattern))
        } else {
            Ok(PathSpec::from(input))
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Compile { specs, flags }) => {
            commands::compile(&specs, &flags, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Match { spec, paths, flags }) => {
            commands::match_paths(&spec, &paths, &flags, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pathrex::VERSION
                    })
                );
            } else {
                println!("pathrex v{}", pathrex::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pathrex::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pathrex v{}", pathrex::VERSION);
                println!("\nRun 'pathrex --help' for usage");
                println!("Run 'pathrex compile /user/:id' to get started");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
