//! Stable state identifiers for collapsible containers.
//!
//! The presentation layer persists expand/collapse state under these keys,
//! so the derivation must never change for a given label.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub const SECTION_PREFIX: &str = "menu_section_";
pub const GROUP_PREFIX: &str = "menu_group_";

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

/// Reduce a label to `[a-z0-9_]`, folding accented letters to their base.
pub fn slugify(label: &str) -> String {
    let folded: String = label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    separator_re()
        .replace_all(&folded, "_")
        .trim_matches('_')
        .to_string()
}

pub fn derive_state_id(prefix: &str, label: &str) -> String {
    format!("{}{}", prefix, slugify(label))
}
