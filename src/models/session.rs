/// Terminal state of the name-resolution sequence. Drives which page variant
/// the greeting route renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// A user record exists (found or just created); holds the stored,
    /// lowercase name.
    Resolved { first_name: String },
    Unresolved,
}

/// Presentation-only transform: first character upper-cased, remainder left
/// exactly as stored. The stored form stays lowercase.
pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().to_string() + c.as_str(),
    }
}
