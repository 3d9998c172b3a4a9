//! Field normalization: dates, inline markup and certificate filtering.
//!
//! Runs once between loading and rendering. The renderers only ever see
//! display-ready strings.
//!
//! ## Dates
//!
//! ISO dates (`YYYY-MM-DD`) become `"March 2020"` or `"2020"` depending on
//! the section. Anything else (`"present"`, `""`, `"2020"`) is kept as-is.
//! Month names come from the locale selected by the config's `language`:
//!
//! | language | locale |
//! |----------|--------|
//! | `en` | `en_US` |
//! | `pt` | `pt_BR` |
//! | other | platform default (`LC_ALL`, `LC_TIME`, `LANG`), else `POSIX` |
//!
//! The locale is resolved once and carried by [`DateFormatter`]; nothing here
//! touches process-wide state.
//!
//! ## Inline Markup
//!
//! Summaries may contain `<i>` and `<a href="..." target="_blank">` tags.
//! [`replace_html`] turns them into `\emph{}` and `\href{}{}` with plain
//! substring replacement.

use crate::resume::{Certificate, Resume};
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// How much of a parsed date to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateGranularity {
    /// `"March 2020"`
    MonthYear,
    /// `"2020"`
    #[default]
    Year,
}

impl DateGranularity {
    fn pattern(self) -> &'static str {
        match self {
            DateGranularity::MonthYear => "%B %Y",
            DateGranularity::Year => "%Y",
        }
    }
}

/// Map a two-letter language tag to the locale used for month names.
pub fn resolve_locale(language: &str) -> Locale {
    match language {
        "en" => Locale::en_US,
        "pt" => Locale::pt_BR,
        _ => platform_locale(|key| std::env::var(key).ok()),
    }
}

/// Resolve the platform default time locale from environment-style lookups.
///
/// Checks `LC_ALL`, then `LC_TIME`, then `LANG`, taking the first non-empty
/// value. Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are stripped.
/// Unset or unrecognized values fall back to `POSIX`.
pub fn platform_locale<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.is_empty())
    else {
        return Locale::POSIX;
    };
    let name = raw.split(['.', '@']).next().unwrap_or_default();
    match name {
        "C" | "POSIX" => Locale::POSIX,
        _ => Locale::try_from(name).unwrap_or(Locale::POSIX),
    }
}

/// Formats ISO dates with a fixed locale.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Formatter for a config language tag.
    pub fn for_language(language: &str) -> Self {
        Self::new(resolve_locale(language))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Reformat `raw` if it is a `YYYY-MM-DD` date, otherwise return it unchanged.
    pub fn format(&self, raw: &str, granularity: DateGranularity) -> String {
        if !is_iso_date_shape(raw) {
            return raw.to_string();
        }
        let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
            return raw.to_string();
        };
        let at_midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let formatted = at_midnight
            .format_localized(granularity.pattern(), self.locale)
            .to_string();
        title_case(&formatted)
    }
}

/// Four-digit year, then one- or two-digit month and day, with nothing around them.
///
/// chrono's `%Y` also takes signs, short years and leading whitespace.
fn is_iso_date_shape(raw: &str) -> bool {
    let mut parts = raw.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits = |s: &str, lens: &[usize]| {
        lens.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    digits(year, &[4]) && digits(month, &[1, 2]) && digits(day, &[1, 2])
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `"março 2020"` → `"Março 2020"`, `"rock climbing"` → `"Rock Climbing"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Rewrite `<i>` and `<a href="..." target="_blank">` tags into LaTeX.
///
/// Literal replacements applied in order; not an HTML parser.
pub fn replace_html(text: &str) -> String {
    text.replace("<i>", " \\emph{")
        .replace("</i>", "}")
        .replace("<a href=\"", "\\href{")
        .replace("\" target=\"_blank\">", "}{")
        .replace("</a>", "}")
}

/// Drop certificates whose category is in `excluded`. Uncategorized ones are kept.
pub fn filter_certificates(certificates: &[Certificate], excluded: &[String]) -> Vec<Certificate> {
    certificates
        .iter()
        .filter(|c| {
            c.category
                .as_ref()
                .is_none_or(|category| !excluded.contains(category))
        })
        .cloned()
        .collect()
}

/// Settings that drive [`normalize`].
#[derive(Debug, Clone)]
pub struct NormalizeOptions<'a> {
    pub dates: DateFormatter,
    pub volunteer_dates: DateGranularity,
    pub excluded_categories: &'a [String],
}

/// Produce a display-ready copy of `resume`.
///
/// - work and education dates: month and year
/// - volunteer dates: `options.volunteer_dates`
/// - certificate and award dates: untouched
/// - summaries (work, volunteer, certificates, awards): [`replace_html`]
/// - highlights: untouched
/// - certificates: filtered by `options.excluded_categories`
pub fn normalize(resume: &Resume, options: &NormalizeOptions<'_>) -> Resume {
    let dates = &options.dates;
    let mut out = resume.clone();

    for work in &mut out.work {
        work.start_date = dates.format(&work.start_date, DateGranularity::MonthYear);
        work.end_date = dates.format(&work.end_date, DateGranularity::MonthYear);
        rewrite_summary(&mut work.summary);
    }

    for school in &mut out.education {
        school.start_date = dates.format(&school.start_date, DateGranularity::MonthYear);
        school.end_date = dates.format(&school.end_date, DateGranularity::MonthYear);
    }

    for job in &mut out.volunteer {
        job.start_date = dates.format(&job.start_date, options.volunteer_dates);
        job.end_date = dates.format(&job.end_date, options.volunteer_dates);
        rewrite_summary(&mut job.summary);
    }

    for award in &mut out.awards {
        rewrite_summary(&mut award.summary);
    }

    out.certificates = filter_certificates(&out.certificates, options.excluded_categories);
    for certificate in &mut out.certificates {
        rewrite_summary(&mut certificate.summary);
    }

    out
}

fn rewrite_summary(summary: &mut Option<String>) {
    if let Some(text) = summary {
        *text = replace_html(text);
    }
}
