//! Text helpers shared with the page layer.

/// Mask a poster's name for public listings.
///
/// Keeps the first character, and the last one for names of three or more
/// characters: `"홍길동"` becomes `"홍*동"`, `"이영"` becomes `"이*"`,
/// single-character names pass through unchanged.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.len() {
        0 | 1 => name.to_string(),
        2 => format!("{}*", chars[0]),
        n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
    }
}

/// Strip everything but ASCII digits from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone.trim().chars().filter(char::is_ascii_digit).collect()
}
