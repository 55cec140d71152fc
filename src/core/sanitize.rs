// src/core/sanitize.rs

/// Collapse whitespace runs (incl. NBSP) to one space and trim.
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

/// Inline `style` value in comparable form: no whitespace, lowercase, no trailing `;`.
/// `"float: left; margin-left:5px;"` → `"float:left;margin-left:5px"`
pub fn normalize_style(s: &str) -> String {
    let compact: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    compact.trim_end_matches(';').to_string()
}

/// Strip leading/trailing non-digits: `"1:"` → `"1"`, `"#12"` → `"12"`.
pub fn trim_to_digits(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_ascii_digit())
}
