//! Section layout table — maps each report heading to the profile field it
//! renders and the kind of block it becomes.
//!
//! Adding a section means adding a row here; the document builder dispatches
//! on [`SectionBody`] and never names individual sections.

use crate::models::ProfileSections;

/// The closed set of block kinds a section body can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    /// A single free-text paragraph.
    Paragraph(&'a str),
    /// A styled table with a fixed header row.
    Table {
        headers: &'static [&'static str],
        rows: &'a [Vec<String>],
    },
    /// One dash-prefixed paragraph per item.
    Bullets(&'a [String]),
}

pub struct Section {
    /// Heading text, including its leading glyph.
    pub heading: &'static str,
    pub body: fn(&ProfileSections) -> SectionBody<'_>,
}

pub const TRAJECTORY_HEADERS: &[&str] = &["Stage", "Title", "Years"];
pub const COMPENSATION_HEADERS: &[&str] = &["Stage", "Typical Salary"];
pub const FUTURE_ROLE_HEADERS: &[&str] = &["Title", "Executive?", "Salary"];

/// Report sections in document order.
pub const SECTIONS: &[Section] = &[
    Section {
        heading: "🌱 Career Alignment Assessment",
        body: |p| SectionBody::Paragraph(&p.step1),
    },
    Section {
        heading: "🏷 Current Functional Domain",
        body: |p| SectionBody::Paragraph(&p.step2),
    },
    Section {
        heading: "📈 Trajectory Insight",
        body: |p| SectionBody::Table {
            headers: TRAJECTORY_HEADERS,
            rows: &p.step3,
        },
    },
    Section {
        heading: "💰 Compensation Intelligence",
        body: |p| SectionBody::Table {
            headers: COMPENSATION_HEADERS,
            rows: &p.step4,
        },
    },
    Section {
        heading: "🔑 Strategic Readiness: Key Growth Levers",
        body: |p| SectionBody::Bullets(&p.step5),
    },
    Section {
        heading: "🌟 Future-Facing Roles",
        body: |p| SectionBody::Table {
            headers: FUTURE_ROLE_HEADERS,
            rows: &p.step6,
        },
    },
    Section {
        heading: "❤️ Readiness Summary",
        body: |p| SectionBody::Paragraph(&p.summary),
    },
];
