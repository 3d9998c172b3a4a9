//! # AltaCV Builder
//!
//! Turns a [JSON Resume](https://jsonresume.org) document into LaTeX source
//! for the [AltaCV](https://github.com/liantze/AltaCV) template. A small YAML
//! layout config decides which sections appear in which of the two columns,
//! what their headings say, the colour palette, and the output language.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load       config.yaml + resume.json  →  LayoutConfig, Resume
//! 2. Normalize  Resume                     →  Resume (display-ready strings)
//! 3. Assemble   LayoutConfig + Resume      →  Document  →  <language>/main.tex
//! ```
//!
//! Everything is read and validated before rendering starts, and the output
//! is built in memory and written once. A run either produces the whole
//! document or fails.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Layout config loading (YAML or TOML) and validation |
//! | [`resume`] | JSON Resume document model |
//! | [`section`] | Composition tokens parsed into typed blocks |
//! | [`normalize`] | Locale-aware dates, inline HTML → LaTeX, certificate filtering |
//! | [`render`] | One renderer per résumé section |
//! | [`assemble`] | Preamble → header → columns → closing |
//! | [`builder`] | End-to-end build and output path |
//! | [`output`] | CLI build summary |
//!
//! # Design Decisions
//!
//! ## Explicit Locale
//!
//! Month names depend on the configured language (`en`, `pt`, or the platform
//! default). The locale is resolved once into a
//! [`normalize::DateFormatter`] and passed along, so date formatting never
//! reads or mutates process-wide locale state and can be tested per call.
//!
//! ## Typed Composition
//!
//! Column entries like `work` or `new-page` are parsed into
//! [`section::Block`] values and dispatched with an exhaustive `match`.
//! Misspelled tokens are not silently dropped: config validation reports
//! them as warnings and they render nothing.
//!
//! ## Strict Records, Optional Extras
//!
//! Résumé records are deserialized into typed structs, so a missing required
//! field (a work entry without `position`, say) stops the run with the
//! field's name. Summaries, highlights, links and locations are optional and
//! simply left out when absent.

pub mod assemble;
pub mod builder;
pub mod config;
pub mod normalize;
pub mod output;
pub mod render;
pub mod resume;
pub mod section;

#[cfg(test)]
pub(crate) mod test_helpers;
