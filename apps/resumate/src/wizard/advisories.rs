//! Draft advisories: non-blocking hints about dates and email shape.
//!
//! The wizard never enforces formats, so nothing here gates submission.
//! The view may list these on the confirm step so the user can fix them.

use chrono::NaiveDate;

use crate::models::resume::ResumeDraft;
use crate::wizard::editors::Section;

const MONTH_FORMAT_HINT: &str = "MM/YYYY";
const OPEN_ENDED: &[&str] = &["present", "current"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryKind {
    UnrecognizedDate,
    DateOrder,
    EmailShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    /// `None` for draft-level fields such as the email.
    pub section: Option<Section>,
    pub position: Option<usize>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateBound {
    Month(NaiveDate),
    Open,
}

/// Reviews the draft and returns every advisory found, in section order.
pub fn review_draft(draft: &ResumeDraft) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    let email = draft.email.trim();
    if !email.is_empty() && !email_looks_valid(email) {
        advisories.push(Advisory {
            kind: AdvisoryKind::EmailShape,
            section: None,
            position: None,
            description: format!("'{email}' does not look like an email address"),
        });
    }

    let dated = draft
        .projects
        .iter()
        .map(|p| (Section::Projects, p.from.as_str(), p.to.as_str()))
        .chain(
            draft
                .experience
                .iter()
                .map(|e| (Section::Experience, e.from.as_str(), e.to.as_str())),
        )
        .chain(
            draft
                .education
                .iter()
                .map(|e| (Section::Education, e.from.as_str(), e.to.as_str())),
        );

    let mut last_section = None;
    let mut position = 0;
    for (section, from, to) in dated {
        if last_section != Some(section) {
            last_section = Some(section);
            position = 0;
        }
        check_range(&mut advisories, section, position, from, to);
        position += 1;
    }

    advisories
}

fn check_range(
    advisories: &mut Vec<Advisory>,
    section: Section,
    position: usize,
    from: &str,
    to: &str,
) {
    let start = parse_bound(from, false);
    let end = parse_bound(to, true);

    for (value, parsed) in [(from, start), (to, end)] {
        if parsed.is_none() {
            advisories.push(Advisory {
                kind: AdvisoryKind::UnrecognizedDate,
                section: Some(section),
                position: Some(position),
                description: format!(
                    "'{value}' in {} #{} is not in {MONTH_FORMAT_HINT} format",
                    section.as_str(),
                    position + 1
                ),
            });
        }
    }

    if let (Some(DateBound::Month(start)), Some(DateBound::Month(end))) = (start, end) {
        if start > end {
            advisories.push(Advisory {
                kind: AdvisoryKind::DateOrder,
                section: Some(section),
                position: Some(position),
                description: format!(
                    "{} #{} starts ({from}) after it ends ({to})",
                    section.as_str(),
                    position + 1
                ),
            });
        }
    }
}

fn parse_bound(value: &str, allow_open: bool) -> Option<DateBound> {
    let value = value.trim();
    if allow_open && OPEN_ENDED.iter().any(|w| value.eq_ignore_ascii_case(w)) {
        return Some(DateBound::Open);
    }
    parse_month(value).map(DateBound::Month)
}

/// Parses `MM/YYYY` into the first day of that month.
fn parse_month(value: &str) -> Option<NaiveDate> {
    let (month, year) = value.split_once('/')?;
    if month.len() != 2 || year.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("01/{month}/{year}"), "%d/%m/%Y").ok()
}

fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
