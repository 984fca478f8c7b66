//! Authenticated data-view fetches.

use crate::error::{PortalError, Result};
use crate::portal::session::SessionClient;
use crate::portal::tokens;
use tracing::debug;

/// The three data views and their fixed portal paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Info,
    Schedule,
    Classes,
}

impl PageKey {
    pub fn path(self) -> &'static str {
        match self {
            PageKey::Info => "/HomeAccess/Content/Student/Registration.aspx",
            PageKey::Schedule => "/HomeAccess/Content/Student/Classes.aspx",
            PageKey::Classes => "/HomeAccess/Content/Student/Assignments.aspx",
        }
    }
}

/// Fetch one data view over an authenticated session.
///
/// Re-validates that the portal did not bounce us back to the login form
/// (session expiry mid-request). No automatic re-login — one
/// authentication attempt per logical request is the contract.
pub async fn fetch_page(session: &SessionClient, key: PageKey) -> Result<String> {
    let resp = session.get(key.path()).await?;
    if tokens::is_login_page(&resp.body) {
        return Err(PortalError::SessionExpired);
    }
    debug!(?key, bytes = resp.body.len(), "fetched data view");
    Ok(resp.body)
}
