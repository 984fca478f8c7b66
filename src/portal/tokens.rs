//! Hidden-form token extraction from the portal login page.
//!
//! The login form is ASP.NET: it carries an anti-forgery token (and
//! sometimes additional view-state fields) as hidden inputs that must be
//! echoed back verbatim on the credential post. Values are opaque and
//! may be large; they are captured byte-for-byte, never re-encoded.

use crate::error::{PortalError, Result};
use crate::model::LoginTokens;
use scraper::{Html, Selector};

/// Field name of the ASP.NET anti-forgery token.
pub const VERIFICATION_TOKEN_FIELD: &str = "__RequestVerificationToken";

/// Extract every hidden input of the login form, in document order.
///
/// The login form is identified as the first `<form>` containing a
/// password input. Fails with [`PortalError::Parse`] when no such form
/// exists — the page is not a login page, or the portal markup changed.
pub fn extract_login_tokens(html: &str) -> Result<LoginTokens> {
    let document = Html::parse_document(html);
    let form_sel = Selector::parse("form").unwrap();
    let password_sel = Selector::parse(r#"input[type="password"]"#).unwrap();
    let hidden_sel = Selector::parse(r#"input[type="hidden"]"#).unwrap();

    for form in document.select(&form_sel) {
        if form.select(&password_sel).next().is_none() {
            continue;
        }
        let tokens: LoginTokens = form
            .select(&hidden_sel)
            .filter_map(|input| {
                let name = input.value().attr("name")?;
                let value = input.value().attr("value").unwrap_or("");
                Some((name.to_string(), value.to_string()))
            })
            .collect();
        return Ok(tokens);
    }

    Err(PortalError::Parse("login form not found".to_string()))
}

/// Whether this HTML renders the portal login form.
///
/// Shared predicate: used by login classification (a failed login
/// re-renders the form) and by session-expiry detection on data-view
/// fetches (an expired session redirects back to the form).
pub fn is_login_page(html: &str) -> bool {
    let document = Html::parse_document(html);
    let password_sel = Selector::parse(r#"input[type="password"]"#).unwrap();
    let token_sel =
        Selector::parse(r#"input[name="__RequestVerificationToken"]"#).unwrap();
    document.select(&password_sel).next().is_some()
        && document.select(&token_sel).next().is_some()
}
