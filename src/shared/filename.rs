//! Turns caller-supplied identifiers into names that are safe to use as a
//! single path component on any common file system.

use unicode_normalization::UnicodeNormalization;

const FILE_EXTENSION: &str = ".json";

const WINDOWS_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Sanitizes an identifier for use as a file name.
///
/// - Decomposes to NFKD and drops what is left outside ASCII, so `é` becomes `e`
/// - Treats `/` and `\` as whitespace, then joins whitespace-separated words with `_`
/// - Keeps only `[A-Za-z0-9_.-]`
/// - Trims leading/trailing dots and underscores
/// - Prefixes reserved Windows device names with `_`
///
/// The result may be empty.
pub fn secure_filename(name: &str) -> String {
    let separated = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect::<String>();

    let joined = separated
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let filtered = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>();

    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');

    let stem = trimmed.split('.').next().unwrap_or_default();
    if !trimmed.is_empty()
        && WINDOWS_DEVICE_NAMES
            .iter()
            .any(|device| device.eq_ignore_ascii_case(stem))
    {
        format!("_{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

// ASCII whitespace plus vertical tab and the information separators.
fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\x1c'..='\x1f' | ' ')
}

/// The file name a save slot is stored under, or `None` when nothing usable
/// survives sanitization.
pub fn output_filename(identifier: &str) -> Option<String> {
    let sanitized = secure_filename(identifier);
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized + FILE_EXTENSION)
    }
}
