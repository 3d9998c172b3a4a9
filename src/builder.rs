//! End-to-end build: config file in, LaTeX document out.
//!
//! ```text
//! config.yaml ──load──► LayoutConfig ──► résumé path ──load──► Resume
//!                            │                                   │
//!                            └────────► normalize ◄──────────────┘
//!                                           │
//!                                        assemble ──► Document ──► <language>/main.tex
//! ```
//!
//! Both inputs are read and validated before anything is rendered. The
//! output file sits next to the config, in a directory named after the
//! configured language.

use crate::assemble::{Document, assemble};
use crate::config::{ConfigError, ConfigWarning, LayoutConfig, config_dir, load_config};
use crate::normalize::{NormalizeOptions, normalize};
use crate::render::RenderError;
use crate::resume::{Resume, ResumeError, load_resume};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("{}: {source}", path.display())]
    Resume {
        path: PathBuf,
        #[source]
        source: ResumeError,
    },
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful build, before anything is written.
#[derive(Debug)]
pub struct Build {
    pub config_path: PathBuf,
    pub config: LayoutConfig,
    pub warnings: Vec<ConfigWarning>,
    pub document: Document,
    pub output_path: PathBuf,
}

/// Where the document for `language` is written: `<config dir>/<language>/main.tex`.
pub fn output_path(config_path: &Path, language: &str) -> PathBuf {
    config_dir(config_path).join(language).join("main.tex")
}

/// Normalize `resume` with the config's settings and assemble the document.
pub fn render(config: &LayoutConfig, resume: &Resume) -> Result<Document, RenderError> {
    let options = NormalizeOptions {
        dates: config.date_formatter(),
        volunteer_dates: config.volunteer_dates,
        excluded_categories: &config.ignore_certificates_of,
    };
    tracing::debug!(locale = ?options.dates.locale(), "normalizing resume");
    let normalized = normalize(resume, &options);
    assemble(config, &normalized)
}

/// Load both inputs and assemble the document.
pub fn build(config_path: &Path) -> Result<Build, BuildError> {
    let (config, warnings) = load_config(config_path).map_err(|source| BuildError::Config {
        path: config_path.to_path_buf(),
        source,
    })?;
    let resume = load_resume(&config.json_resume_path).map_err(|source| BuildError::Resume {
        path: config.json_resume_path.clone(),
        source,
    })?;
    tracing::info!(
        resume = %config.json_resume_path.display(),
        work = resume.work.len(),
        education = resume.education.len(),
        certificates = resume.certificates.len(),
        "loaded resume"
    );

    let document = render(&config, &resume)?;
    let output_path = output_path(config_path, &config.language);
    Ok(Build {
        config_path: config_path.to_path_buf(),
        config,
        warnings,
        document,
        output_path,
    })
}

/// Write the document to [`Build::output_path`], creating its directory.
///
/// Returns the number of bytes written.
pub fn write_output(build: &Build) -> Result<usize, BuildError> {
    if let Some(parent) = build.output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tex = build.document.to_tex();
    fs::write(&build.output_path, &tex)?;
    tracing::info!(path = %build.output_path.display(), bytes = tex.len(), "wrote document");
    Ok(tex.len())
}
