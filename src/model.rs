//! Typed records scraped from the portal and the JSON response shapes.
//!
//! Every string field defaults to `""` rather than being omitted, so the
//! response shape is structurally stable no matter which optional markup
//! fragments a given campus renders. Sequences preserve source-document
//! order; the portal's visual ordering of periods and days is meaningful.

use serde::{Deserialize, Serialize};

/// Login credentials for one authentication attempt.
///
/// Ephemeral: lives for the duration of a single logical request and is
/// never persisted. The `Debug` impl redacts the password so credentials
/// cannot leak through logs.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Hidden form fields extracted from the login page, in document order.
/// Values are opaque anti-forgery/view-state blobs echoed back verbatim.
pub type LoginTokens = Vec<(String, String)>;

/// Student personal information from the registration page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub name: String,
    pub id: String,
    pub grade: String,
    pub campus: String,
    pub birthdate: String,
    pub counselor: String,
    pub total_credits: String,
}

/// One row of the class schedule table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub building: String,
    pub course_code: String,
    pub course_name: String,
    pub periods: String,
    pub days: String,
    pub room: String,
    pub teacher: String,
    pub marking_periods: String,
    pub status: String,
}

/// One graded assignment within a current class.
///
/// Score and points are kept exactly as the portal renders them (blank,
/// "N/A", "98/100") — no numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub name: String,
    pub category: String,
    pub date_assigned: String,
    pub date_due: String,
    pub score: String,
    pub total_points: String,
}

/// A current class with its assignment list in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentClass {
    pub name: String,
    pub grade: String,
    pub weight: String,
    pub credits: String,
    pub last_updated: String,
    pub assignments: Vec<Assignment>,
}

/// Combined result of the "all" view: one login, three parsed pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub student_info: StudentInfo,
    pub student_schedule: Vec<ScheduleEntry>,
    pub current_classes: Vec<CurrentClass>,
}

/// Wrapper shape for the schedule view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub student_schedule: Vec<ScheduleEntry>,
}

/// Wrapper shape for the current-classes view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesResponse {
    pub current_classes: Vec<CurrentClass>,
}

/// The logical data product requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Info,
    Schedule,
    Classes,
    All,
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(View::Info),
            "schedule" => Ok(View::Schedule),
            "classes" | "currentclasses" => Ok(View::Classes),
            "all" => Ok(View::All),
            other => Err(format!(
                "unknown view '{other}' (expected info, schedule, classes or all)"
            )),
        }
    }
}

/// One of the four documented response shapes, selected by [`View`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewResponse {
    Info(StudentInfo),
    Schedule(ScheduleResponse),
    Classes(ClassesResponse),
    All(AggregateResult),
}
