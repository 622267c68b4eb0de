//! Territory resolution with parent-context disambiguation.
//!
//! Two-letter subdivision codes collide with country codes (`IN` is India
//! and Indiana, `NL` is the Netherlands and Newfoundland). A context token
//! picks the reading:
//!
//! ```
//! use mapcoder::resolver::resolve_with_context;
//!
//! assert_eq!(resolve_with_context("IN", Some("US")).unwrap().code(), "US-IN");
//! assert_eq!(resolve_with_context("IN", Some("IND")).unwrap().code(), "IND");
//! assert_eq!(resolve_with_context("IN", None).unwrap().code(), "IND");
//! ```

use crate::error::{MapcoderError, Result};
use crate::territory::Territory;

/// Resolve a context token to the country that scopes the main token.
///
/// The token is parsed as a territory; a subdivision is replaced by its
/// parent country. If it does not parse, the alias table is searched
/// ignoring case and treating `-`, `_` and space alike.
///
/// # Errors
///
/// [`MapcoderError::UnknownTerritory`] when neither strategy matches.
pub fn resolve_context(context: &str) -> Result<Territory> {
    let territory = match Territory::parse(context, None) {
        Ok(territory) => territory,
        Err(_) => find_alias(context).ok_or_else(|| {
            tracing::debug!(context, "Context matches no territory or alias");
            MapcoderError::UnknownTerritory {
                token: context.to_string(),
            }
        })?,
    };
    Ok(territory.country())
}

/// Resolve `token` within `parent` first, then globally.
///
/// # Errors
///
/// [`MapcoderError::UnknownTerritory`] when both readings fail.
pub fn resolve(token: &str, parent: Option<Territory>) -> Result<Territory> {
    if let Some(parent) = parent {
        if let Ok(territory) = Territory::parse(token, Some(parent)) {
            return Ok(territory);
        }
    }
    Territory::parse(token, None)
}

/// Resolve `token`, using an optional raw context token for scope.
///
/// A context that does not resolve is an error, never silently ignored.
pub fn resolve_with_context(token: &str, context: Option<&str>) -> Result<Territory> {
    let parent = context.map(resolve_context).transpose()?;
    resolve(token, parent)
}

/// Search codes, aliases and full names with separator-insensitive matching.
pub fn find_alias(token: &str) -> Option<Territory> {
    let wanted = fold_separators(token);
    if wanted.is_empty() {
        return None;
    }
    Territory::all().find(|territory| {
        [territory.code(), territory.full_name()]
            .into_iter()
            .chain(territory.aliases().iter().copied())
            .chain(territory.full_name_aliases().iter().copied())
            .any(|candidate| fold_separators(candidate) == wanted)
    })
}

/// Upper-case and map `_` and space to `-`, collapsing runs.
fn fold_separators(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.trim().chars() {
        let c = match c {
            '_' | ' ' | '-' => '-',
            other => other.to_ascii_uppercase(),
        };
        if c == '-' && folded.ends_with('-') {
            continue;
        }
        folded.push(c);
    }
    folded
}
