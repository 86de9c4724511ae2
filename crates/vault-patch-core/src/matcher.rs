pub fn find_first(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.find(needle)
}

/// Presence test for a whole block. Surrounding blank lines in `block` are
/// ignored so that an inserted block with padding newlines still counts as
/// present after the file around it has been reformatted.
pub fn contains_block(haystack: &str, block: &str) -> bool {
    let trimmed = block.trim_matches(|c| c == '\n' || c == '\r');
    !trimmed.is_empty() && haystack.contains(trimmed)
}

/// Byte offsets of `needle` matches that do not lie inside a match of
/// `cover`. A search block that is a prefix of its own replacement is
/// therefore not reported again once the replacement is in place.
pub fn uncovered_matches(haystack: &str, needle: &str, cover: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let covered: Vec<(usize, usize)> = if cover.is_empty() {
        Vec::new()
    } else {
        haystack
            .match_indices(cover)
            .map(|(start, m)| (start, start + m.len()))
            .collect()
    };

    haystack
        .match_indices(needle)
        .map(|(start, _)| start)
        .filter(|&start| {
            let end = start + needle.len();
            !covered.iter().any(|&(c_start, c_end)| start >= c_start && end <= c_end)
        })
        .collect()
}
