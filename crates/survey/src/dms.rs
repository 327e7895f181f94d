//! Degrees-minutes-seconds parsing.
//!
//! Survey coordinates are stored as `"degrees;minutes;seconds"`, for
//! example `"35;13;52.6"`.

/// Parse a `"d;m;s"` string into decimal degrees.
///
/// Each field may carry surrounding whitespace. The result is
/// `d + m / 60 + s / 3600`.
pub fn parse_dms(s: &str) -> Result<f64, DmsParseError> {
    let parts: Vec<&str> = s.split(';').collect();
    if parts.len() != 3 {
        return Err(DmsParseError::FieldCount {
            input: s.to_string(),
            found: parts.len(),
        });
    }

    let mut fields = [0.0_f64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        let value: f64 = part
            .trim()
            .parse()
            .map_err(|_| DmsParseError::InvalidNumber(part.to_string()))?;
        if !value.is_finite() {
            return Err(DmsParseError::InvalidNumber(part.to_string()));
        }
        *slot = value;
    }

    let [d, m, s] = fields;
    Ok(d + m / 60.0 + s / 3600.0)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DmsParseError {
    #[error("Invalid DMS format: '{input}' has {found} field(s). Expected 'degrees;minutes;seconds'")]
    FieldCount { input: String, found: usize },

    #[error("Invalid number in DMS: '{0}'")]
    InvalidNumber(String),

    #[error("DMS value out of range: {0}")]
    OutOfRange(String),

    #[error("Coordinate is missing")]
    Missing,

    #[error("Coordinate has unexpected type: {0}")]
    UnexpectedType(String),
}
