use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::error::{ArgumentError, LoadError};
use crate::excel::{self, Document};

/// Stand-in path git passes for the missing side of an added or deleted file.
pub const NULL_DEVICE: &str = "/dev/null";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// OLD and NEW workbook paths, or the 7 arguments git passes to an external diff driver
    /// (path old-file old-hex old-mode new-file new-hex new-mode)
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Report format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color the text report
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print nothing; only the exit status tells whether the workbooks differ
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log diagnostics to stderr (filter with RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self, stdout_is_terminal: bool, no_color_env: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stdout_is_terminal && !no_color_env,
        }
    }
}

/// Which workbooks to compare, and how the caller wants to hear about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Files {
        old: PathBuf,
        new: PathBuf,
    },
    /// Called by git as `GIT_EXTERNAL_DIFF` (or `diff.<driver>.command`).
    Git {
        path: PathBuf,
        old: PathBuf,
        new: PathBuf,
    },
}

impl Invocation {
    /// Pick the old/new files out of the positional arguments.
    ///
    /// Git passes 7 tokens, or 9 when it detected a rename or copy.
    pub fn classify(paths: &[PathBuf]) -> Result<Self, ArgumentError> {
        match paths {
            [old, new] => Ok(Invocation::Files {
                old: old.clone(),
                new: new.clone(),
            }),
            [path, old, _old_hex, _old_mode, new, _new_hex, _new_mode]
            | [path, old, _old_hex, _old_mode, new, _new_hex, _new_mode, _, _] => {
                Ok(Invocation::Git {
                    path: path.clone(),
                    old: old.clone(),
                    new: new.clone(),
                })
            }
            _ => Err(ArgumentError::WrongArity { count: paths.len() }),
        }
    }

    pub fn old_path(&self) -> &Path {
        match self {
            Invocation::Files { old, .. } | Invocation::Git { old, .. } => old,
        }
    }

    pub fn new_path(&self) -> &Path {
        match self {
            Invocation::Files { new, .. } | Invocation::Git { new, .. } => new,
        }
    }

    pub fn is_git(&self) -> bool {
        matches!(self, Invocation::Git { .. })
    }

    /// Load both sides. Nothing is reported unless both load.
    pub fn load_documents(&self) -> Result<(Document, Document), LoadError> {
        let old = self.load_side(self.old_path())?;
        let new = self.load_side(self.new_path())?;
        Ok((old, new))
    }

    fn load_side(&self, path: &Path) -> Result<Document, LoadError> {
        if self.is_git() && path == Path::new(NULL_DEVICE) {
            debug!("{} stands for a missing workbook", NULL_DEVICE);
            return Ok(Document::new());
        }

        excel::load(path)
    }

    /// Git treats a non-zero status from a diff driver as a failure, so differences only
    /// change the status in two-file mode.
    pub fn exit_code(&self, has_differences: bool) -> u8 {
        if has_differences && !self.is_git() { 1 } else { 0 }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Options {
    pub invocation: Invocation,
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

pub fn build_options(
    args: &Args,
    stdout_is_terminal: bool,
    no_color_env: bool,
) -> Result<Options, ArgumentError> {
    let invocation = Invocation::classify(&args.paths)?;
    debug!(?invocation, "classified arguments");

    Ok(Options {
        invocation,
        format: args.format,
        color: args.format == OutputFormat::Text
            && args.color.resolve(stdout_is_terminal, no_color_env),
        quiet: args.quiet,
    })
}
