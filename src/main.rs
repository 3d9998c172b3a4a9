use altacv_builder::{builder, output};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "altacv-builder")]
#[command(about = "Render a JSON Resume into AltaCV LaTeX source")]
#[command(long_about = "\
Render a JSON Resume into AltaCV LaTeX source

Reads a layout config (YAML, or TOML when the file ends in .toml), loads the
resume it points to, and writes <config dir>/<language>/main.tex.

Layout config:

  json_resume_path: resume.json      # relative to the config file
  language: en                       # en | pt | other = platform locale
  name: \"\"                           # optional name override
  colors:
    accent: \"8F0D0D\"
  composition:
    first-column: [work, new-page, education, volunteer, certificates, awards]
    second-column: [technical-skills, languages, soft-skills, interests]
  strings:
    work: Experience
    language: Languages
    ...
  ignore-certificates-of: [course]
  volunteer-dates: year              # year | month-year

Set RUST_LOG to control log output (written to stderr).")]
#[command(version)]
struct Cli {
    /// Layout config file
    #[arg(default_value = "config.yaml")]
    config: PathBuf,

    /// Print the LaTeX source to stdout instead of writing it to disk
    #[arg(long)]
    stdout: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let build = builder::build(&cli.config)?;

    if cli.stdout {
        print!("{}", build.document.to_tex());
    } else {
        let bytes = builder::write_output(&build)?;
        output::print_build_output(&build);
        output::print_written(&build.output_path, bytes);
    }

    Ok(())
}

/// Log to stderr so `--stdout` output stays clean. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "altacv_builder=debug,info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
