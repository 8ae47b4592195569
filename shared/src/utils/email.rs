//! Email address utilities

/// Mask an email address for log output (e.g. `a***e@example.com`)
///
/// Addresses identify users, so logs never carry them in the clear. The
/// domain stays visible for debugging delivery problems; the local part keeps
/// its first and last character when long enough to stay recognizable.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match (chars.next(), chars.next_back()) {
                (Some(first), Some(last)) if chars.next().is_some() => {
                    format!("{}***{}@{}", first, last, domain)
                }
                _ => format!("{}@{}", "*".repeat(local.chars().count()), domain),
            }
        }
        None => "***".to_string(),
    }
}
