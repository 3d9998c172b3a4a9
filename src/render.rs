//! Section renderers.
//!
//! One pure function per résumé section. Each takes the section's
//! (already normalized) entries and the display-string table and returns the
//! LaTeX fragments for that section, in order. The assembler joins fragments
//! with newlines.
//!
//! ## Fragment Shape
//!
//! Event-style sections (work, education, volunteer, certificates, awards):
//!
//! ```text
//! \cvsection{Experience}
//! \cvevent{Engineer}{Acme}{January 2020 -- Present}{London}
//! <summary, if any>
//! \begin{itemize}            <- highlights, work only
//! \item Shipped it
//! \end{itemize}
//!
//! \divider                   <- between entries, never after the last
//!
//! \cvevent{...}{...}{...}{}
//! \medskip
//! ```
//!
//! List-style sections (technical skills, soft skills) wrap entries in an
//! `itemize` that is left out when there are no entries, so an empty section
//! is just its heading. Languages use `\cvskill` ratings, interests use
//! `\cvtag` tags.

use crate::config::{Strings, lookup_label};
use crate::normalize::title_case;
use crate::resume::{
    Award, Certificate, Education, Language, NamedItem, Resume, Skill, Volunteer, Work,
};
use crate::section::Section;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("no heading label for section '{section}' (looked for {keys:?} in strings)")]
    MissingLabel {
        section: Section,
        keys: &'static [&'static str],
    },
}

const DIVIDER: &str = "\n\\divider\n";
const SPACING: &str = "\n\\medskip\n";
const WORK_SPACING: &str = "\\medskip";

/// Render any section of `resume`.
pub fn render_section(
    section: Section,
    resume: &Resume,
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    match section {
        Section::Work => render_work(&resume.work, strings),
        Section::Education => render_education(&resume.education, strings),
        Section::Volunteer => render_volunteer(&resume.volunteer, strings),
        Section::Certificates => render_certificates(&resume.certificates, strings),
        Section::Awards => render_awards(&resume.awards, strings),
        Section::TechnicalSkills => render_technical_skills(&resume.skills, strings),
        Section::Languages => render_languages(&resume.languages, strings),
        Section::SoftSkills => render_soft_skills(&resume.other_skills, strings),
        Section::Interests => render_interests(&resume.interests, strings),
    }
}

pub fn render_work(entries: &[Work], strings: &Strings) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Work, strings)?];
    for (index, work) in entries.iter().enumerate() {
        out.push(cv_event(
            &work.position,
            &work.company,
            &date_range(&work.start_date, &work.end_date),
            work.location.as_deref(),
        ));
        push_summary(&mut out, work.summary.as_deref());
        push_highlights(&mut out, work.highlights.as_deref());
        push_divider(&mut out, index, entries.len());
    }
    out.push(WORK_SPACING.to_string());
    Ok(out)
}

pub fn render_education(
    entries: &[Education],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Education, strings)?];
    for (index, school) in entries.iter().enumerate() {
        out.push(cv_event(
            &linked(school.website.as_deref(), &school.title()),
            &school.institution,
            &date_range(&school.start_date, &school.end_date),
            None,
        ));
        push_divider(&mut out, index, entries.len());
    }
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_volunteer(
    entries: &[Volunteer],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Volunteer, strings)?];
    for (index, job) in entries.iter().enumerate() {
        out.push(cv_event(
            &linked(job.website.as_deref(), &job.position),
            &job.organization,
            &date_range(&job.start_date, &job.end_date),
            job.location.as_deref(),
        ));
        push_summary(&mut out, job.summary.as_deref());
        push_divider(&mut out, index, entries.len());
    }
    out.push(SPACING.to_string());
    Ok(out)
}

/// Certificates are expected to be filtered already; dates are shown as given.
pub fn render_certificates(
    entries: &[Certificate],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Certificates, strings)?];
    for (index, certificate) in entries.iter().enumerate() {
        out.push(cv_event(
            &linked(certificate.url.as_deref(), &certificate.title),
            &certificate.issuer,
            &certificate.date,
            None,
        ));
        push_summary(&mut out, certificate.summary.as_deref());
        push_divider(&mut out, index, entries.len());
    }
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_awards(entries: &[Award], strings: &Strings) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Awards, strings)?];
    for (index, award) in entries.iter().enumerate() {
        out.push(cv_event(&award.title, &award.awarder, &award.date, None));
        push_summary(&mut out, award.summary.as_deref());
        push_divider(&mut out, index, entries.len());
    }
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_technical_skills(
    entries: &[Skill],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::TechnicalSkills, strings)?];
    push_itemize(
        &mut out,
        entries
            .iter()
            .map(|skill| format!("\\item \\textbf{{{}:}} {}", skill.name, skill.keyword_list())),
    );
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_languages(
    entries: &[Language],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Languages, strings)?];
    for (index, language) in entries.iter().enumerate() {
        out.push(format!(
            "\\cvskill{{{}}}{{{}}}",
            language.name,
            language.display_level()
        ));
        push_divider(&mut out, index, entries.len());
    }
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_soft_skills(
    entries: &[NamedItem],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::SoftSkills, strings)?];
    push_itemize(
        &mut out,
        entries.iter().map(|skill| format!("\\item {{{}}}", skill.name)),
    );
    out.push(SPACING.to_string());
    Ok(out)
}

pub fn render_interests(
    entries: &[NamedItem],
    strings: &Strings,
) -> Result<Vec<String>, RenderError> {
    let mut out = vec![heading(Section::Interests, strings)?];
    for interest in entries {
        out.push(format!("\\cvtag {{{}}}", title_case(&interest.name)));
    }
    out.push(SPACING.to_string());
    Ok(out)
}

// ============================================================================
// Fragment helpers
// ============================================================================

fn heading(section: Section, strings: &Strings) -> Result<String, RenderError> {
    let label = lookup_label(strings, section).ok_or(RenderError::MissingLabel {
        section,
        keys: section.label_keys(),
    })?;
    Ok(format!("\\cvsection{{{label}}}"))
}

fn cv_event(title: &str, organization: &str, dates: &str, location: Option<&str>) -> String {
    format!(
        "\\cvevent{{{title}}}{{{organization}}}{{{dates}}}{{{}}}",
        location.unwrap_or_default()
    )
}

fn date_range(start: &str, end: &str) -> String {
    format!("{start} -- {end}")
}

/// Wrap `title` in `\href` when a non-empty URL is present.
fn linked(url: Option<&str>, title: &str) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("\\href{{{url}}}{{{title}}}"),
        _ => title.to_string(),
    }
}

fn push_summary(out: &mut Vec<String>, summary: Option<&str>) {
    if let Some(text) = summary.filter(|s| !s.is_empty()) {
        out.push(text.to_string());
    }
}

fn push_highlights(out: &mut Vec<String>, highlights: Option<&[String]>) {
    push_itemize(
        out,
        highlights
            .unwrap_or_default()
            .iter()
            .map(|h| format!("\\item {h}")),
    );
}

fn push_itemize(out: &mut Vec<String>, items: impl Iterator<Item = String>) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    out.push("\\begin{itemize}".to_string());
    out.extend(items);
    out.push("\\end{itemize}".to_string());
}

fn push_divider(out: &mut Vec<String>, index: usize, len: usize) {
    if index + 1 < len {
        out.push(DIVIDER.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{minimal_resume, sample_config, sample_resume};

    fn strings() -> Strings {
        sample_config().strings
    }

    fn work(position: &str) -> Work {
        Work {
            position: position.to_string(),
            company: "Acme".to_string(),
            start_date: "January 2020".to_string(),
            end_date: "Present".to_string(),
            location: None,
            summary: None,
            highlights: None,
        }
    }

    fn dividers(fragments: &[String]) -> usize {
        fragments.iter().filter(|f| f.as_str() == DIVIDER).count()
    }

    // =========================================================================
    // Shared contract
    // =========================================================================

    #[test]
    fn dividers_between_entries_only() {
        for n in 0..6usize {
            let entries: Vec<Work> = (0..n).map(|i| work(&format!("Job {i}"))).collect();
            let out = render_work(&entries, &strings()).unwrap();
            assert_eq!(dividers(&out), n.saturating_sub(1), "n = {n}");
            assert_ne!(out.last().map(String::as_str), Some(DIVIDER));
        }
    }

    #[test]
    fn every_section_renders_empty_list_as_heading_only() {
        let resume = minimal_resume();
        for section in Section::ALL {
            let out = render_section(section, &resume, &strings()).unwrap();
            assert_eq!(out.len(), 2, "{section}: {out:?}");
            assert!(out[0].starts_with("\\cvsection{"), "{section}");
            assert!(out[1].contains("\\medskip"), "{section}");
        }
    }

    #[test]
    fn missing_label_is_an_error() {
        let err = render_work(&[], &Strings::new()).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingLabel {
                section: Section::Work,
                keys: &["work"],
            }
        );
        assert!(err.to_string().contains("'work'"));
    }

    // =========================================================================
    // Work
    // =========================================================================

    #[test]
    fn work_event_with_location_summary_and_highlights() {
        let mut job = work("Engineer");
        job.location = Some("London".into());
        job.summary = Some(r"Built  \emph{things}.".into());
        job.highlights = Some(vec!["Shipped <i>it</i>".into()]);

        let out = render_work(&[job], &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Experience}",
                r"\cvevent{Engineer}{Acme}{January 2020 -- Present}{London}",
                r"Built  \emph{things}.",
                r"\begin{itemize}",
                r"\item Shipped <i>it</i>",
                r"\end{itemize}",
                r"\medskip",
            ]
        );
    }

    #[test]
    fn work_without_optional_fields() {
        let mut job = work("Engineer");
        job.summary = Some(String::new());
        job.highlights = Some(vec![]);
        let out = render_work(&[job], &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Experience}",
                r"\cvevent{Engineer}{Acme}{January 2020 -- Present}{}",
                r"\medskip",
            ]
        );
    }

    // =========================================================================
    // Linked titles
    // =========================================================================

    #[test]
    fn education_website_wraps_title() {
        let out = render_education(&sample_resume().education, &strings()).unwrap();
        assert_eq!(
            out[1],
            r"\cvevent{\href{https://london.ac.uk}{Mathematics, Bachelor}}{University of London}{2010-03-01 -- 2014-12-01}{}"
        );
    }

    #[test]
    fn empty_website_is_not_linked() {
        let mut resume = sample_resume();
        resume.education[0].website = Some(String::new());
        let out = render_education(&resume.education, &strings()).unwrap();
        assert!(out[1].starts_with(r"\cvevent{Mathematics, Bachelor}"));
    }

    #[test]
    fn volunteer_event_and_summary() {
        let out = render_volunteer(&sample_resume().volunteer, &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Volunteering}",
                r"\cvevent{Tutor}{Code Club}{2015-06-01 -- 2016-02-01}{Online}",
                "Taught kids.",
                SPACING,
            ]
        );
    }

    #[test]
    fn certificate_url_wraps_title_and_date_is_verbatim() {
        let certs = &sample_resume().certificates;
        let out = render_certificates(certs, &strings()).unwrap();
        assert_eq!(out[1], r"\cvevent{Intro Course}{MOOC}{2018-01-01}{}");
        assert_eq!(out[2], DIVIDER);
        assert_eq!(
            out[3],
            r"\cvevent{\href{https://cert.example.com/1}{Cloud Architect}}{Cloud Inc}{2019-05-01}{}"
        );
        assert_eq!(out[4], "Hard exam.");
    }

    #[test]
    fn awards_use_awarder_and_raw_date() {
        let out = render_awards(&sample_resume().awards, &strings()).unwrap();
        assert_eq!(out[1], r"\cvevent{Best Paper}{Royal Society}{2018-11-20}{}");
        assert_eq!(out.len(), 3);
    }

    // =========================================================================
    // Skills, languages, interests
    // =========================================================================

    #[test]
    fn technical_skills_list_keywords() {
        let out = render_technical_skills(&sample_resume().skills, &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Technical Skills}",
                r"\begin{itemize}",
                r"\item \textbf{Languages:} Rust, Python",
                r"\end{itemize}",
                SPACING,
            ]
        );
    }

    #[test]
    fn languages_show_shifted_levels_with_dividers() {
        let out = render_languages(&sample_resume().languages, &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Languages}",
                r"\cvskill{English}{5}",
                DIVIDER,
                r"\cvskill{French}{1}",
                SPACING,
            ]
        );
    }

    #[test]
    fn soft_skills_are_bullets() {
        let out = render_soft_skills(&sample_resume().other_skills, &strings()).unwrap();
        assert_eq!(out[2], r"\item {Teamwork}");
    }

    #[test]
    fn interests_are_title_cased_tags() {
        let out = render_interests(&sample_resume().interests, &strings()).unwrap();
        assert_eq!(
            out,
            vec![
                r"\cvsection{Interests}",
                r"\cvtag {Poetry}",
                r"\cvtag {Horse Racing}",
                SPACING,
            ]
        );
    }
}
