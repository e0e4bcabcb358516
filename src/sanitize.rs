use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word rewrites applied to free-text queries before submission.
/// Casual vocabulary maps onto the column names the census schema
/// actually has, which measurably improves generated SQL.
static REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\barea\b", "zip code"),
        (r"(?i)\bareas\b", "zip codes"),
        (r"(?i)\bneighborhood\b", "zip code"),
        (r"(?i)\bneighborhoods\b", "zip codes"),
        (r"(?i)\bpart of\b", "zip code of"),
        (r"(?i)\bparts of\b", "zip codes of"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("rewrite pattern regex is valid");
        (re, replacement)
    })
    .collect()
});

/// Rewrite a free-text query into schema-aligned vocabulary.
///
/// Each substitution operates on the output of the previous one. The
/// patterns are disjoint, so the fixed ordering only matters for
/// determinism. Unmatched input passes through unchanged.
pub fn sanitize_query(query: &str) -> String {
    let mut cleaned = query.to_string();
    for (pattern, replacement) in REWRITES.iter() {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_area_with_zip_code() {
        let cleaned = sanitize_query("3 zipcodes in San Francisco area");
        assert!(cleaned.contains("zip code"));
        assert!(!cleaned.contains("area"));
        assert_eq!(cleaned, "3 zipcodes in San Francisco zip code");
    }

    #[test]
    fn substitutes_plural_and_phrase_forms() {
        assert_eq!(
            sanitize_query("poorest areas in the city"),
            "poorest zip codes in the city"
        );
        assert_eq!(
            sanitize_query("richest part of Houston"),
            "richest zip code of Houston"
        );
        assert_eq!(
            sanitize_query("oldest parts of Boston"),
            "oldest zip codes of Boston"
        );
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(
            sanitize_query("Richest Neighborhood in Houston, TX"),
            "Richest zip code in Houston, TX"
        );
    }

    #[test]
    fn only_matches_whole_words() {
        // "areal" and "Bayarea" must not be rewritten.
        assert_eq!(sanitize_query("areal Bayarea"), "areal Bayarea");
    }

    #[test]
    fn idempotent_on_sanitized_input() {
        let once = sanitize_query("five neighborhoods near the bay area");
        let twice = sanitize_query(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn passes_through_unmatched_input() {
        let query = "Which zipcodes have the lowest crime?";
        assert_eq!(sanitize_query(query), query);
    }
}
