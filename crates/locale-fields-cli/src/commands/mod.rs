//! CLI command implementations.

mod collapse;
mod extract;
mod resolve;

pub use collapse::{run_collapse, CollapseArgs};
pub use extract::{run_extract, ExtractArgs};
pub use resolve::{run_resolve, ChainMember, ResolveArgs};

use locale_fields::{BoxedResolver, ExplicitHierarchy, SubtagHierarchy};

/// Parse a `locale=parent` override.
pub(crate) fn parse_parent(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parent override '{}': expected locale=parent", s))?;
    let (locale, parent) = (&s[..pos], &s[pos + 1..]);
    if locale.is_empty() || parent.is_empty() {
        return Err(format!(
            "invalid parent override '{}': locale and parent must be non-empty",
            s
        ));
    }
    Ok((locale.to_string(), parent.to_string()))
}

/// Build the hierarchy resolver for the given parent overrides.
///
/// Without overrides, chains come from subtag truncation alone.
pub(crate) fn build_resolver(parents: &[(String, String)]) -> BoxedResolver {
    if parents.is_empty() {
        return Box::new(SubtagHierarchy);
    }
    let explicit = parents
        .iter()
        .fold(ExplicitHierarchy::new(), |resolver, (locale, parent)| {
            resolver.with_parent(locale.as_str(), parent.as_str())
        });
    Box::new(explicit)
}
