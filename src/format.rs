//! Locale-aware rendering of numeric dataset fields.
//!
//! Computation always works on plain `f64`; only the dataset store renders
//! numbers, through an explicit [`NumberFormat`] it owns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::brazilian()
    }
}

impl NumberFormat {
    /// pt-BR: `1.234,50`
    pub fn brazilian() -> Self {
        NumberFormat {
            decimal_separator: ',',
            thousands_separator: '.',
            decimals: 2,
        }
    }

    /// en-US: `1,234.50`
    pub fn english() -> Self {
        NumberFormat {
            decimal_separator: '.',
            thousands_separator: ',',
            decimals: 2,
        }
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        if value < 0.0 && !is_zero {
            out.push('-');
        }

        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(ch);
        }

        if let Some(frac_part) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }

        out
    }

    /// Inverse of [`format`](Self::format)
    pub fn parse(&self, text: &str) -> Result<f64, String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("empty numeric field".to_string());
        }

        let normalized: String = trimmed
            .chars()
            .filter(|&c| c != self.thousands_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        normalized
            .parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", text))
    }
}
