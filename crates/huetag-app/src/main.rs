mod cli;
mod input;
mod render;

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use huetag_color::Legend;
use huetag_common::{ColorHex, HuetagError};
use huetag_config::{default_config_path, HuetagConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "huetag=warn";

/// Parse a log directive, falling back to the default one.
///
/// Returns a warning to log once the subscriber is up when `directive` is
/// rejected.
fn parse_directive(directive: &str) -> (Option<Directive>, Option<String>) {
    match directive.parse::<Directive>() {
        Ok(parsed) => (Some(parsed), None),
        Err(e) => (
            DEFAULT_LOG_DIRECTIVE.parse().ok(),
            Some(format!(
                "ignoring log level {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}"
            )),
        ),
    }
}

fn init_logging(directive: &str) {
    let (directive, warning) = parse_directive(directive);
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(warning) = warning {
        warn!("{warning}");
    }
}

/// Notice for a default config about to be written to `path`.
fn first_run_notice(path: &Path) -> Option<String> {
    (!path.exists()).then(|| format!("no config found, writing defaults to {}", path.display()))
}

/// Resolve the config before logging is up so its level can apply.
///
/// Returns the config plus notices to log once logging is initialised. An
/// explicit `--config` that fails is fatal; a broken default config falls
/// back to defaults with a warning.
fn load_config(args: &cli::Args) -> Result<(HuetagConfig, Vec<String>), HuetagError> {
    let mut notices = Vec::new();
    if args.config.is_none() {
        if let Some(notice) = default_config_path().ok().as_deref().and_then(first_run_notice) {
            notices.push(notice);
        }
    }

    match huetag_config::load_config(args.config.as_deref()) {
        Ok(config) => Ok((config, notices)),
        Err(e) if args.config.is_none() => {
            notices.push(format!("config load failed, using defaults: {e}"));
            Ok((HuetagConfig::default(), notices))
        }
        Err(e) => Err(e.into()),
    }
}

fn pinned_colors(config: &HuetagConfig) -> Result<Vec<(String, ColorHex)>, HuetagError> {
    config
        .overrides
        .iter()
        .map(|(label, color)| -> Result<_, HuetagError> {
            Ok((label.clone(), color.parse::<ColorHex>()?))
        })
        .collect()
}

/// One line per group of labels sharing a color.
fn collision_warnings(legend: &Legend) -> Vec<String> {
    legend
        .collisions()
        .into_iter()
        .map(|(color, labels)| format!("{color} is shared by: {}", labels.join(", ")))
        .collect()
}

/// Build the legend from every label source and write it to `out`.
fn run<R: BufRead, W: Write>(
    args: &cli::Args,
    config: &HuetagConfig,
    stdin: R,
    out: &mut W,
) -> Result<(), HuetagError> {
    let mut legend = if args.no_overrides {
        Legend::new()
    } else {
        Legend::with_overrides(pinned_colors(config)?)
    };

    legend.extend(&args.labels);

    if args.stdin {
        let lines = input::read_lines(stdin, "stdin")?;
        debug!("read {} line(s) from stdin", lines.len());
        legend.extend(lines);
    }

    for path in &args.rules {
        let tags = input::read_rule_tags(path)?;
        info!("{} tag(s) from {}", tags.len(), path.display());
        legend.extend(tags);
    }

    if legend.is_empty() {
        return Err(HuetagError::Other(
            "no labels given; pass labels as arguments, --stdin, or --rules FILE".into(),
        ));
    }

    let pinned = legend.iter().filter(|(label, _)| legend.is_pinned(label)).count();
    debug!("{} label(s), {pinned} pinned", legend.len());

    if config.output.show_collisions {
        for warning in collision_warnings(&legend) {
            warn!("{warning}");
        }
    }

    let format = args.format.map(Into::into).unwrap_or(config.output.format);
    let rendered = render::render(&legend, format, &config.output.css_prefix)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (config, config_notices) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("huetag: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    init_logging(log_directive);

    for notice in config_notices {
        warn!("{notice}");
    }
    debug!("huetag v{} starting", env!("CARGO_PKG_VERSION"));

    if args.print_config {
        println!("{}", huetag_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run(&args, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("huetag: {e}");
            ExitCode::FAILURE
        }
    }
}
