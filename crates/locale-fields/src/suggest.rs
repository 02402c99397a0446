//! Typo suggestions for unknown names.

use strsim::levenshtein;

/// Return up to three candidates within a small edit distance of `name`,
/// closest first.
///
/// Short names (three characters or fewer) accept a distance of 1, longer
/// names a distance of 2. Exact matches are never suggested.
///
/// # Example
///
/// ```
/// use locale_fields::compute_suggestions;
///
/// let suggestions = compute_suggestions("en-gb", ["en", "en-GB", "fr"]);
/// assert_eq!(suggestions, vec!["en-GB"]);
/// ```
pub fn compute_suggestions<I, S>(name: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then(|| (dist, candidate.to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
