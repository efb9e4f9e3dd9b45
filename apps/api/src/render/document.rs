//! Builds the Level Set profile report as a Word document.
//!
//! Layout, in order: US Letter page with one-inch margins, a centered title,
//! one heading plus body per entry in [`SECTIONS`], and a centered footer.

use std::io::Cursor;

use bytes::Bytes;
use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, PageMargin, Paragraph, Run, Shading, Table, TableCell,
    TableRow, WidthType,
};

use crate::models::ProfileSections;
use crate::render::sections::{SectionBody, SECTIONS};
use crate::render::style::*;
use crate::render::RenderError;

/// Renders a client's profile into packed `.docx` bytes.
///
/// Fails only when a table row has more cells than its header, or when the
/// package cannot be written.
pub fn render_profile(client_name: &str, sections: &ProfileSections) -> Result<Bytes, RenderError> {
    let mut docx = Docx::new()
        .page_size(PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS)
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TWIPS)
                .bottom(MARGIN_TWIPS)
                .left(MARGIN_TWIPS)
                .right(MARGIN_TWIPS),
        )
        .add_paragraph(title(client_name));

    for section in SECTIONS {
        docx = docx.add_paragraph(heading(section.heading));
        docx = match (section.body)(sections) {
            SectionBody::Paragraph(text) => {
                docx.add_paragraph(Paragraph::new().add_run(text_run(text)))
            }
            SectionBody::Table { headers, rows } => docx
                .add_table(styled_table(section.heading, headers, rows)?)
                .add_paragraph(Paragraph::new()),
            SectionBody::Bullets(items) => items.iter().fold(docx, |docx, item| {
                docx.add_paragraph(
                    Paragraph::new().add_run(text_run(&format!("{BULLET_PREFIX}{item}"))),
                )
            }),
        };
    }

    let docx = docx.footer(
        Footer::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(FOOTER_TEXT))
                .align(AlignmentType::Center),
        ),
    );

    pack(docx)
}

fn title(client_name: &str) -> Paragraph {
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(format!("{TITLE_PREFIX}{client_name}"))
                .bold()
                .size(TITLE_SIZE),
        )
        .align(AlignmentType::Center)
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
        .align(AlignmentType::Center)
}

/// A run that keeps embedded newlines as line breaks and tabs as tab stops.
fn text_run(text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            line.split('\t')
                .enumerate()
                .fold(run, |run, (j, segment)| {
                    let run = if j > 0 { run.add_tab() } else { run };
                    if segment.is_empty() {
                        run
                    } else {
                        run.add_text(segment)
                    }
                })
        })
}

fn styled_table(
    section: &'static str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<Table, RenderError> {
    let columns = headers.len();
    let column_width = TEXT_WIDTH_TWIPS / columns;

    let header_row = TableRow::new(
        headers
            .iter()
            .map(|h| {
                TableCell::new()
                    .add_paragraph(
                        Paragraph::new()
                            .add_run(
                                Run::new()
                                    .add_text(*h)
                                    .bold()
                                    .size(TABLE_HEADER_SIZE)
                                    .color(TABLE_HEADER_TEXT_COLOR),
                            )
                            .align(AlignmentType::Center),
                    )
                    .shading(Shading::new().fill(TABLE_HEADER_FILL))
                    .width(column_width, WidthType::Dxa)
            })
            .collect(),
    );

    let mut table_rows = Vec::with_capacity(rows.len() + 1);
    table_rows.push(header_row);

    for (index, row) in rows.iter().enumerate() {
        if row.len() > columns {
            return Err(RenderError::RowWidth {
                section,
                row: index,
                cells: row.len(),
                columns,
            });
        }
        // Short rows are padded with empty cells.
        let cells = (0..columns)
            .map(|i| {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                TableCell::new()
                    .add_paragraph(
                        Paragraph::new()
                            .add_run(text_run(value))
                            .align(AlignmentType::Center),
                    )
                    .width(column_width, WidthType::Dxa)
            })
            .collect();
        table_rows.push(TableRow::new(cells));
    }

    // Plain table style: no borders.
    Ok(Table::new(table_rows)
        .set_grid(vec![column_width; columns])
        .clear_all_border())
}

fn pack(docx: Docx) -> Result<Bytes, RenderError> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| RenderError::Package(e.to_string()))?;
    Ok(Bytes::from(cursor.into_inner()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Read;

    /// Reads one XML part out of a packed document.
    pub(crate) fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    /// Concatenates every footer part in the package.
    fn footer_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let names: Vec<String> = archive
            .file_names()
            .filter(|n| n.starts_with("word/footer"))
            .map(str::to_string)
            .collect();
        let mut xml = String::new();
        for name in names {
            archive
                .by_name(&name)
                .unwrap()
                .read_to_string(&mut xml)
                .unwrap();
        }
        xml
    }

    pub(crate) fn sample_sections() -> ProfileSections {
        ProfileSections {
            step1: "Strong alignment with operations leadership.".to_string(),
            step2: "Supply chain operations".to_string(),
            step3: vec![
                vec!["Early".into(), "Analyst".into(), "2".into()],
                vec!["Mid".into(), "Manager".into(), "5".into()],
            ],
            step4: vec![vec!["Mid".into(), "$120k".into()]],
            step5: vec!["Executive presence".to_string(), "Board visibility".to_string()],
            step6: vec![vec!["VP Operations".into(), "Yes".into(), "$220k".into()]],
            summary: "Ready for a director-level move.".to_string(),
        }
    }

    #[test]
    fn test_output_is_a_zip_package() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_title_contains_client_name() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("Level Set Profile Report: Jane Doe"));
    }

    #[test]
    fn test_headings_appear_in_section_order() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");

        let positions: Vec<usize> = [
            "Career Alignment Assessment",
            "Current Functional Domain",
            "Trajectory Insight",
            "Compensation Intelligence",
            "Key Growth Levers",
            "Future-Facing Roles",
            "Readiness Summary",
        ]
        .iter()
        .map(|h| xml.find(h).unwrap_or_else(|| panic!("missing heading {h}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tables_carry_headers_and_cells() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");

        for label in ["Stage", "Years", "Typical Salary", "Executive?", "Salary"] {
            assert!(xml.contains(label), "missing header {label}");
        }
        assert!(xml.contains(TABLE_HEADER_FILL));
        assert!(xml.contains(TABLE_HEADER_TEXT_COLOR));
        assert!(xml.contains("Manager"));
        assert!(xml.contains("VP Operations"));
    }

    #[test]
    fn test_bullets_are_dash_prefixed() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("- Executive presence"));
        assert!(xml.contains("- Board visibility"));
    }

    #[test]
    fn test_one_inch_margins() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("w:top=\"1440\""));
        assert!(xml.contains("w:left=\"1440\""));
    }

    #[test]
    fn test_footer_text_present() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        assert!(footer_xml(&bytes).contains("LEVEL SET NEXT"));
    }

    #[test]
    fn test_multiline_text_keeps_line_breaks() {
        let mut sections = sample_sections();
        sections.summary = "First line\nSecond line".to_string();
        let bytes = render_profile("Jane Doe", &sections).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("First line"));
        assert!(xml.contains("Second line"));
        assert!(xml.contains("w:br"));
    }

    #[test]
    fn test_tabs_become_tab_elements() {
        let mut sections = sample_sections();
        sections.step1 = "Left\tRight".to_string();
        let bytes = render_profile("Jane Doe", &sections).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:tab/>") || xml.contains("<w:tab />"));
        assert!(xml.contains("Left"));
        assert!(xml.contains("Right"));
        assert!(!xml.contains("Left\tRight"));
    }

    #[test]
    fn test_tables_have_no_borders() {
        let bytes = render_profile("Jane Doe", &sample_sections()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("Trajectory Insight"));
        assert!(!xml.contains("w:val=\"single\""));
    }

    #[test]
    fn test_short_row_is_padded() {
        let mut sections = sample_sections();
        sections.step3 = vec![vec!["Early".into()]];
        assert!(render_profile("Jane Doe", &sections).is_ok());
    }

    #[test]
    fn test_empty_sections_render() {
        let sections = ProfileSections {
            step1: String::new(),
            step2: String::new(),
            step3: vec![],
            step4: vec![],
            step5: vec![],
            step6: vec![],
            summary: String::new(),
        };
        assert!(render_profile("", &sections).is_ok());
    }

    #[test]
    fn test_wide_row_is_rejected() {
        let mut sections = sample_sections();
        sections.step4 = vec![vec!["Mid".into(), "$120k".into(), "extra".into()]];

        match render_profile("Jane Doe", &sections) {
            Err(RenderError::RowWidth {
                section,
                row,
                cells,
                columns,
            }) => {
                assert!(section.ends_with("Compensation Intelligence"));
                assert_eq!(row, 0);
                assert_eq!(cells, 3);
                assert_eq!(columns, 2);
            }
            other => panic!("expected RowWidth, got {other:?}"),
        }
    }
}
