use crate::error::ValidationError;

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// Assert that a denom follows the Cosmos SDK coin denom syntax:
///
/// ```plain
/// [a-zA-Z][a-zA-Z0-9/:._-]{2,127}
/// ```
pub fn validate_denom(denom: &str) -> Result<(), ValidationError> {
    let mut chars = denom.chars();

    let starts_with_letter = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    let valid_chars = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));
    let valid_len = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&denom.len());

    if !(starts_with_letter && valid_chars && valid_len) {
        return Err(ValidationError::InvalidDenom {
            denom: denom.into(),
        });
    }

    Ok(())
}

// ----------------------------------- Tests -----------------------------------
