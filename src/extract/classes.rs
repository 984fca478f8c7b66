//! Current classes with assignments, from the assignments page.
//!
//! Two-level extraction: an outer pass over per-class blocks, then an
//! inner pass scoped to each block's assignment grid. Score and points
//! columns survive verbatim — the portal renders blanks for ungraded
//! work and notations like "98/100" that must not be coerced.

use super::{clean_text, element_text};
use crate::model::{Assignment, CurrentClass};
use scraper::{ElementRef, Html, Selector};

/// Parse the assignments page into classes in document order.
pub fn parse_current_classes(html: &str) -> Vec<CurrentClass> {
    let document = Html::parse_document(html);
    let block_sel = Selector::parse("div.AssignmentClass").unwrap();

    document
        .select(&block_sel)
        .map(parse_class_block)
        .collect()
}

fn parse_class_block(block: ElementRef<'_>) -> CurrentClass {
    let header_sel = Selector::parse("div.sg-header.sg-header-square").unwrap();
    let grid_sel = Selector::parse("div.sg-content-grid").unwrap();
    let row_sel = Selector::parse("tr.sg-asp-table-data-row").unwrap();

    let mut class = CurrentClass::default();
    if let Some(header) = block.select(&header_sel).next() {
        parse_class_header(header, &mut class);
    }
    for grid in block.select(&grid_sel) {
        for row in grid.select(&row_sel) {
            if let Some(assignment) = parse_assignment_row(row) {
                class.assignments.push(assignment);
            }
        }
    }
    class
}

fn parse_class_header(header: ElementRef<'_>, class: &mut CurrentClass) {
    let name_sel = Selector::parse("a.sg-header-heading").unwrap();
    let updated_sel = Selector::parse("span.sg-header-sub-heading").unwrap();
    let grade_sel = Selector::parse("span.sg-header-heading.sg-right").unwrap();
    let span_sel = Selector::parse("span").unwrap();

    class.name = header
        .select(&name_sel)
        .next()
        .map(element_text)
        .unwrap_or_default();
    class.last_updated = header
        .select(&updated_sel)
        .next()
        .map(element_text)
        .unwrap_or_default()
        .replace("(Last Updated: ", "")
        .replace(')', "");
    class.grade = header
        .select(&grade_sel)
        .next()
        .map(element_text)
        .unwrap_or_default()
        .replace("Student Grades ", "")
        .replace('%', "");

    // Weight and credits only appear on some campuses' headers.
    for span in header.select(&span_sel) {
        let text = element_text(span);
        if let Some(rest) = text.strip_prefix("Weight") {
            class.weight = clean_text(rest.trim_start_matches(':'));
        } else if let Some(rest) = text.strip_prefix("Credits") {
            class.credits = clean_text(rest.trim_start_matches(':'));
        }
    }
}

/// Parse one assignment row. Rows without a name link (category totals,
/// spacer rows) are not assignments.
fn parse_assignment_row(row: ElementRef<'_>) -> Option<Assignment> {
    let cell_sel = Selector::parse("td").unwrap();
    let link_sel = Selector::parse("a").unwrap();

    let name = element_text(row.select(&link_sel).next()?);
    let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
    let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();

    Some(Assignment {
        name,
        category: cell(3),
        date_assigned: cell(1),
        date_due: cell(0),
        score: cell(4),
        total_points: cell(5),
    })
}
