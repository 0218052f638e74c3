/// Strips invisible marks spreadsheet exports leave behind and collapses whitespace.
pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a `;`- or `|`-separated skill cell into cleaned, non-empty names.
pub(crate) fn split_skills(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split([';', '|'])
        .map(clean_text)
        .filter(|skill| !skill.is_empty())
}
