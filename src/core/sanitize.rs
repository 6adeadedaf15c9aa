// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Comparison key for "same question": whitespace-normalized, lowercased.
pub fn fold_key(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// File stem from free text: spaces become '_', path separators and other
/// punctuation are dropped. Falls back to `fallback` when nothing is left.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' || ch == '.' {
            if !(last_us && ch == '_') { out.push(ch); }
            last_us = ch == '_';
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// First `max` characters, with an ellipsis when cut.
pub fn preview(s: &str, max: usize) -> String {
    let mut it = s.chars();
    let head: String = it.by_ref().take(max).collect();
    if it.next().is_some() { join!(head.trim_end(), "…") } else { head }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_ignores_case_and_spacing() {
        assert_eq!(fold_key("  Too   EXPENSIVE\t now "), "too expensive now");
    }

    #[test]
    fn filenames_keep_words_and_drop_separators() {
        assert_eq!(sanitize_filename("Keller Williams", "pack"), "Keller_Williams");
        assert_eq!(sanitize_filename("eXp / Realty", "pack"), "eXp_Realty");
        assert_eq!(sanitize_filename("  ../ ", "pack"), "pack");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("héllo world", 5), "héllo…");
        assert_eq!(preview("short", 10), "short");
    }
}
