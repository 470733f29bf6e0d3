/// Strips byte-order and zero-width marks and collapses internal whitespace.
/// Case is preserved; matching is case-insensitive downstream.
pub(crate) fn normalize_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_cell(value)
}
