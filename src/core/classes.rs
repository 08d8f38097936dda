//! CSS class list helpers

use tailwind_fuse::tw_merge;

/// Join class fragments into one `class` attribute value.
///
/// Fragments may hold several space-separated classes. Conflicting Tailwind
/// utilities resolve to the last one given, so a caller's class overrides
/// the component's base class. Empty fragments are skipped and exact
/// duplicates are dropped, keeping first-seen order.
///
/// # Example
/// ```
/// # use featurelist_landing::core::classes::merge_classes;
/// assert_eq!(merge_classes(&["font-bold px-2", "", "px-4 mt-2"]), "font-bold px-4 mt-2");
/// ```
pub fn merge_classes<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let merged = tw_merge!(joined.as_str());

    let mut seen: Vec<&str> = Vec::new();
    for class in merged.split_whitespace() {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
