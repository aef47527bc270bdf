//! Display formatting for metric fields.

use crate::UpstreamError;

/// Placeholder for a metric that could not be fetched.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a count with `,` thousands separators: `1234567` → `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Turn one upstream outcome into its snapshot field, logging failures.
pub(crate) fn metric_field(metric: &'static str, outcome: Result<u64, UpstreamError>) -> String {
    match outcome {
        Ok(n) => format_count(n),
        Err(err) => {
            tracing::warn!(metric, error = %err, "upstream metric unavailable");
            NOT_AVAILABLE.to_owned()
        }
    }
}
