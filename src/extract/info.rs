//! Student personal information from the registration page.
//!
//! The portal renders each field in a span with a stable ASP.NET id.
//! Layout varies slightly by campus, so every field is independently
//! optional: a missing id yields an empty string, never an error.

use super::element_text;
use crate::model::StudentInfo;
use scraper::{Html, Selector};

const NAME_ID: &str = "plnMain_lblRegStudentName";
const ID_ID: &str = "plnMain_lblRegStudentID";
const GRADE_ID: &str = "plnMain_lblGrade";
const CAMPUS_ID: &str = "plnMain_lblBuildingName";
const BIRTHDATE_ID: &str = "plnMain_lblBirthDate";
const COUNSELOR_ID: &str = "plnMain_lblCounselor";

fn text_by_id(document: &Html, id: &str) -> String {
    let selector = Selector::parse(&format!("#{id}")).unwrap();
    document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Parse the registration page into a [`StudentInfo`].
pub fn parse_student_info(html: &str) -> StudentInfo {
    let document = Html::parse_document(html);
    StudentInfo {
        name: text_by_id(&document, NAME_ID),
        id: text_by_id(&document, ID_ID),
        grade: text_by_id(&document, GRADE_ID),
        campus: text_by_id(&document, CAMPUS_ID),
        birthdate: text_by_id(&document, BIRTHDATE_ID),
        counselor: text_by_id(&document, COUNSELOR_ID),
        total_credits: "0".to_string(),
    }
}

/// Pull just the student id out of a page.
///
/// Some campuses omit the id from the registration page but render it on
/// the schedule page; the pipeline falls back to this when the primary
/// parse comes back empty.
pub fn parse_student_id(html: &str) -> String {
    text_by_id(&Html::parse_document(html), ID_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRATION_PAGE: &str = r#"
        <html><body>
        <span id="plnMain_lblRegStudentName">Doe,   John</span>
        <span id="plnMain_lblRegStudentID"> 123456 </span>
        <span id="plnMain_lblGrade">12</span>
        <span id="plnMain_lblBuildingName">Independence High School</span>
        <span id="plnMain_lblBirthDate">01/01/2006</span>
        <span id="plnMain_lblCounselor">Smith, Jane</span>
        </body></html>
    "#;

    #[test]
    fn test_parses_all_fields() {
        let info = parse_student_info(REGISTRATION_PAGE);
        assert_eq!(info.name, "Doe, John");
        assert_eq!(info.id, "123456");
        assert_eq!(info.grade, "12");
        assert_eq!(info.campus, "Independence High School");
        assert_eq!(info.birthdate, "01/01/2006");
        assert_eq!(info.counselor, "Smith, Jane");
        assert_eq!(info.total_credits, "0");
    }

    #[test]
    fn test_missing_labels_default_to_empty_strings() {
        let info = parse_student_info("<html><body><p>maintenance</p></body></html>");
        assert_eq!(info.name, "");
        assert_eq!(info.id, "");
        assert_eq!(info.grade, "");
        assert_eq!(info.campus, "");
        assert_eq!(info.birthdate, "");
        assert_eq!(info.counselor, "");
        assert_eq!(info.total_credits, "0");
    }

    #[test]
    fn test_partial_page_keeps_present_fields() {
        let html = r#"<span id="plnMain_lblGrade">9</span>"#;
        let info = parse_student_info(html);
        assert_eq!(info.grade, "9");
        assert_eq!(info.name, "");
    }

    #[test]
    fn test_student_id_fallback_parse() {
        let html = r#"<span id="plnMain_lblRegStudentID">654321</span>"#;
        assert_eq!(parse_student_id(html), "654321");
        assert_eq!(parse_student_id("<html></html>"), "");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_student_info(REGISTRATION_PAGE);
        let second = parse_student_info(REGISTRATION_PAGE);
        assert_eq!(first, second);
    }
}
