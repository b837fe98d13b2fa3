/// Validates an email address against the form's loose pattern:
/// `local@domain.tld` with exactly one `@`, no whitespace, and a `.` in the
/// domain part that is neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    // A dot somewhere strictly inside the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Unicode whitespace plus the byte order mark, which the form's `\s` also
/// rejects.
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Required-field check as the server applies it: present and non-empty.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
