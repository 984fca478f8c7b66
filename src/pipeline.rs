//! The authenticate-and-fetch pipeline: one login, up to three page
//! fetches, composed into the requested response shape.
//!
//! Each call owns a fresh [`SessionClient`]; nothing is shared across
//! requests and the session drops at the end of the call on every path.
//! The whole pipeline runs under one deadline so an unresponsive portal
//! cannot stall the caller indefinitely.

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::extract::{classes, info, schedule};
use crate::model::{
    AggregateResult, ClassesResponse, Credentials, ScheduleResponse, View, ViewResponse,
};
use crate::portal::auth;
use crate::portal::pages::{self, PageKey};
use crate::portal::session::SessionClient;
use tracing::{debug, info as log_info};

/// Authenticate with the submitted credentials and produce one view.
///
/// The single public operation of the core: login handshake, page
/// fetch(es), parse, compose. Any failure — bad credentials, unreachable
/// portal, drifted markup, expired session, deadline — surfaces as a
/// [`PortalError`] for the boundary layer to normalize.
pub async fn authenticate_and_fetch(
    config: &Config,
    credentials: &Credentials,
    view: View,
) -> Result<ViewResponse> {
    let deadline = config.request_timeout();
    match tokio::time::timeout(deadline, run(config, credentials, view)).await {
        Ok(result) => result,
        Err(_) => Err(PortalError::Timeout(deadline)),
    }
}

async fn run(config: &Config, credentials: &Credentials, view: View) -> Result<ViewResponse> {
    let session = SessionClient::new(config)?;
    auth::login(&session, credentials).await?;
    log_info!(?view, "authenticated, fetching view");

    match view {
        View::Info => {
            let html = pages::fetch_page(&session, PageKey::Info).await?;
            let mut student_info = info::parse_student_info(&html);
            if student_info.id.is_empty() {
                // Some campuses only render the id on the schedule page.
                let fallback = pages::fetch_page(&session, PageKey::Schedule).await?;
                student_info.id = info::parse_student_id(&fallback);
                debug!("student id recovered from schedule page");
            }
            Ok(ViewResponse::Info(student_info))
        }
        View::Schedule => {
            let html = pages::fetch_page(&session, PageKey::Schedule).await?;
            Ok(ViewResponse::Schedule(ScheduleResponse {
                student_schedule: schedule::parse_schedule(&html),
            }))
        }
        View::Classes => {
            let html = pages::fetch_page(&session, PageKey::Classes).await?;
            Ok(ViewResponse::Classes(ClassesResponse {
                current_classes: classes::parse_current_classes(&html),
            }))
        }
        View::All => {
            // The three fetches are independent once authenticated; run
            // them concurrently. Composition order stays fixed (info,
            // schedule, classes) regardless of completion order, and any
            // single failure discards the partial results.
            let (info_html, schedule_html, classes_html) = futures::try_join!(
                pages::fetch_page(&session, PageKey::Info),
                pages::fetch_page(&session, PageKey::Schedule),
                pages::fetch_page(&session, PageKey::Classes),
            )?;

            let mut student_info = info::parse_student_info(&info_html);
            if student_info.id.is_empty() {
                // The schedule page is already in hand — no extra round trip.
                student_info.id = info::parse_student_id(&schedule_html);
            }

            Ok(ViewResponse::All(AggregateResult {
                student_info,
                student_schedule: schedule::parse_schedule(&schedule_html),
                current_classes: classes::parse_current_classes(&classes_html),
            }))
        }
    }
}
