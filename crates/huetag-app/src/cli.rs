use clap::{Parser, ValueEnum};
use huetag_config::OutputFormat;
use std::path::PathBuf;

/// huetag: deterministic colors for labels and tags.
#[derive(Parser, Debug)]
#[command(name = "huetag", version, about)]
pub struct Args {
    /// Labels to color.
    pub labels: Vec<String>,

    /// Also read one label per line from standard input.
    #[arg(long)]
    pub stdin: bool,

    /// Rules YAML file whose rule tags are used as labels (repeatable).
    #[arg(long, value_name = "FILE")]
    pub rules: Vec<PathBuf>,

    /// Output format override.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore the pinned colors from the config.
    #[arg(long)]
    pub no_overrides: bool,

    /// Print the resolved config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Log level override (a tracing filter directive, e.g. `huetag=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
    Css,
    Rgba,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Css => OutputFormat::Css,
            FormatArg::Rgba => OutputFormat::Rgba,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
