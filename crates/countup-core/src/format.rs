//! Display formatting for sampled counter values.

use serde::{Deserialize, Serialize};

/// Formatting strategy mapping a sampled integer value to display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayFormat {
    /// Plain integer stringification ("99").
    Plain,
    /// Thousands-grouped digits wrapped in literal prefix/suffix text
    /// ("$1,299 ARS").
    Grouped { prefix: String, suffix: String },
}

impl DisplayFormat {
    /// Grouped format with a currency prefix and optional suffix.
    pub fn currency(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::Grouped {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Render one value with this format.
    pub fn format(&self, value: i64) -> String {
        match self {
            Self::Plain => value.to_string(),
            Self::Grouped { prefix, suffix } => {
                format!("{prefix}{}{suffix}", group_thousands(value))
            }
        }
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::Plain
    }
}

/// Insert comma separators every three digits ("10000" -> "10,000").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
