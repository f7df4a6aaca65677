//! Universe catalog repositories: solar systems, item types and staging systems.

use sea_orm::sea_query::LikeExpr;

pub mod eve_type;
pub mod solar_system;
pub mod staging_system;

/// Maximum number of autocomplete results
pub const SEARCH_LIMIT: u64 = 50;

/// `LIKE` expression matching `term` literally anywhere in a lowercased column
pub(crate) fn contains_pattern(term: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(term.len());
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}
