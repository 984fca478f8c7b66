//! Class schedule table parser.
//!
//! The schedule table mixes data rows with section separators (term
//! headers, building breaks). Row classification is a pure predicate so
//! the heuristic stays testable apart from fetching. Short data rows are
//! padded with empty trailing fields rather than dropped — a row with a
//! missing room is still a class.

use super::element_text;
use crate::model::ScheduleEntry;
use scraper::{ElementRef, Html, Selector};

/// Classification of one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// A record-bearing row with its cell texts in column order.
    Data(Vec<String>),
    /// A structural row: header-classed, or a single spanning cell.
    Separator,
    /// A row with no cells at all.
    Unrecognized,
}

/// Classify a table row as data, separator, or unrecognized.
pub fn classify_row(row: ElementRef<'_>) -> RowKind {
    if row.value().classes().any(|class| class.contains("header")) {
        return RowKind::Separator;
    }
    let cell_sel = Selector::parse("td").unwrap();
    let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
    match cells.len() {
        0 => RowKind::Unrecognized,
        1 => RowKind::Separator,
        _ => RowKind::Data(cells),
    }
}

fn column(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// Parse the schedule page into entries in document order.
///
/// An empty or absent table yields an empty vector, never an error.
pub fn parse_schedule(html: &str) -> Vec<ScheduleEntry> {
    let document = Html::parse_document(html);
    let row_sel = Selector::parse("tr.sg-asp-table-data-row").unwrap();

    let mut schedule = Vec::new();
    for row in document.select(&row_sel) {
        let cells = match classify_row(row) {
            RowKind::Data(cells) => cells,
            RowKind::Separator | RowKind::Unrecognized => continue,
        };
        schedule.push(ScheduleEntry {
            course_code: column(&cells, 0),
            course_name: column(&cells, 1),
            periods: column(&cells, 2),
            teacher: column(&cells, 3),
            room: column(&cells, 4),
            days: column(&cells, 5),
            marking_periods: column(&cells, 6),
            building: column(&cells, 7),
            status: column(&cells, 8),
        });
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_row(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!(r#"<tr class="sg-asp-table-data-row">{tds}</tr>"#)
    }

    fn schedule_page(rows: &str) -> String {
        format!(
            r#"<html><body><table class="sg-asp-table" id="plnMain_dgSchedule">
            <tr class="sg-asp-table-header-row"><td>Course</td><td>Description</td></tr>
            {rows}
            </table></body></html>"#
        )
    }

    #[test]
    fn test_empty_table_yields_empty_sequence() {
        assert!(parse_schedule(&schedule_page("")).is_empty());
        assert!(parse_schedule("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_rows_parse_in_document_order() {
        let rows = [
            schedule_row(&[
                "MTH45300A - 1",
                "AP Calculus AB S1",
                "1",
                "Smith, John",
                "B201",
                "A",
                "Q1, Q2",
                "Independence High School",
                "Active",
            ]),
            schedule_row(&[
                "ENG44100A - 3",
                "AP English IV S1",
                "2",
                "Jones, Mary",
                "C114",
                "B",
                "Q1, Q2",
                "Independence High School",
                "Active",
            ]),
            schedule_row(&[
                "SCI43200A - 2",
                "AP Physics C S1",
                "3",
                "Nguyen, Thi",
                "D302",
                "A",
                "Q1, Q2",
                "Independence High School",
                "Active",
            ]),
        ]
        .join("");

        let schedule = parse_schedule(&schedule_page(&rows));
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].course_code, "MTH45300A - 1");
        assert_eq!(schedule[0].periods, "1");
        assert_eq!(schedule[0].days, "A");
        assert_eq!(schedule[0].building, "Independence High School");
        assert_eq!(schedule[1].course_code, "ENG44100A - 3");
        assert_eq!(schedule[2].course_code, "SCI43200A - 2");
    }

    #[test]
    fn test_single_cell_separator_row_is_skipped() {
        let rows = format!(
            r#"<tr class="sg-asp-table-data-row"><td colspan="9">Spring Term</td></tr>{}"#,
            schedule_row(&["A", "B", "1", "T", "R", "D", "M", "Bldg", "Active"])
        );
        let schedule = parse_schedule(&schedule_page(&rows));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].course_code, "A");
    }

    #[test]
    fn test_short_row_pads_missing_trailing_fields() {
        let rows = schedule_row(&["MTH45300A - 1", "AP Calculus AB S1", "1", "Smith, John"]);
        let schedule = parse_schedule(&schedule_page(&rows));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].teacher, "Smith, John");
        assert_eq!(schedule[0].room, "");
        assert_eq!(schedule[0].status, "");
    }

    #[test]
    fn test_classify_row_variants() {
        let html = Html::parse_fragment(
            r#"<table>
            <tr class="sg-asp-table-header-row" id="h"><td>a</td><td>b</td></tr>
            <tr class="sg-asp-table-data-row" id="d"><td>a</td><td>b</td></tr>
            <tr class="sg-asp-table-data-row" id="s"><td colspan="2">Term 2</td></tr>
            <tr class="sg-asp-table-data-row" id="u"></tr>
            </table>"#,
        );
        let row_sel = Selector::parse("tr").unwrap();
        let kinds: Vec<RowKind> = html.select(&row_sel).map(classify_row).collect();
        assert_eq!(kinds[0], RowKind::Separator);
        assert_eq!(
            kinds[1],
            RowKind::Data(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(kinds[2], RowKind::Separator);
        assert_eq!(kinds[3], RowKind::Unrecognized);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let page = schedule_page(&schedule_row(&[
            "A", "B", "1", "T", "R", "D", "M", "Bldg", "Active",
        ]));
        assert_eq!(parse_schedule(&page), parse_schedule(&page));
    }
}
