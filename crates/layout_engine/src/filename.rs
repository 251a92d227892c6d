//! Output file naming

use chrono::{DateTime, SecondsFormat, Utc};

/// Prefix used when there is no account name to derive one from
pub const DEFAULT_FILE_STEM: &str = "onboarding";

/// Lower-case the account name and replace every character outside
/// `[a-z0-9]` with an underscore.
pub fn sanitize_account_name(account_name: &str) -> String {
    account_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Millisecond ISO-8601 UTC timestamp with `:` and `.` replaced by `-`,
/// e.g. `2024-05-01T12-30-45-123Z`
pub fn file_timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// File name for an export generated at `generated_at`
pub fn export_file_name(account_name: &str, generated_at: DateTime<Utc>) -> String {
    let timestamp = file_timestamp(generated_at);
    if account_name.is_empty() {
        format!("{DEFAULT_FILE_STEM}_{timestamp}.pdf")
    } else {
        format!(
            "{}_onboarding_{timestamp}.pdf",
            sanitize_account_name(account_name)
        )
    }
}
