/// Brand aliases: spelled-out registry keys and their short CI form.
///
/// The registry historically stores "threeh" while pipelines and operators
/// refer to the brand as "3h"; both sides are normalized before comparison.
const BRAND_ALIASES: [(&str, &str); 1] = [("threeh", "3h")];

/// Normalize a brand name to its canonical short form.
///
/// Trims surrounding whitespace and maps known aliases, so filter entries
/// and registry keys compare equal regardless of which spelling was used.
pub fn normalize_brand(name: &str) -> String {
    let trimmed = name.trim();
    for (alias, canonical) in BRAND_ALIASES {
        if trimmed == alias {
            return canonical.to_string();
        }
    }
    trimmed.to_string()
}

/// Split a comma-separated brand filter into normalized entries.
///
/// Empty segments (e.g., a trailing comma) are dropped; an entirely empty
/// filter yields an empty list, which callers treat as "all brands".
pub fn parse_brand_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_brand)
        .filter(|entry| !entry.is_empty())
        .collect()
}
