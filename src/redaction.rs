//! Masking of credentials before text reaches a log file.

use once_cell::sync::Lazy;
use regex::Regex;

/// `(pattern, replacement)` pairs applied in order.
const MASKS: &[(&str, &str)] = &[
    // key=value style assignments
    (
        r#"(?i)\b(api[_-]?key|secret[_-]?key|access[_-]?token|auth[_-]?token|password|passwd)\s*[:=]\s*['"]?[^\s'"]{8,}['"]?"#,
        "$1=<REDACTED>",
    ),
    (r"(?i)\b(bearer\s+)[a-z0-9_\-\.=]{20,}", "$1<REDACTED>"),
    (r"\bAKIA[0-9A-Z]{16}\b", "<AWS_ACCESS_KEY>"),
    (r"\bgh[pousr]_[A-Za-z0-9]{36,}\b", "<GITHUB_TOKEN>"),
    (r"\bsk-[A-Za-z0-9_\-]{20,}", "<API_KEY>"),
    (
        r"-----BEGIN ([A-Z ]+ )?PRIVATE KEY-----[\s\S]*?(-----END ([A-Z ]+ )?PRIVATE KEY-----|$)",
        "<PRIVATE_KEY>",
    ),
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    MASKS
        .iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, *replacement)))
        .collect()
});

/// Replace anything that looks like a credential with a placeholder.
pub fn redact_secrets(text: &str) -> String {
    COMPILED
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}
