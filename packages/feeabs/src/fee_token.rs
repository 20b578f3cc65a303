use {
    crate::{denom::validate_denom, error::ValidationError},
    cosmwasm_schema::cw_serde,
    cosmwasm_std::Decimal,
    std::collections::BTreeSet,
};

const MAX_DECIMALS: u32 = 18;

/// An alternative token accepted for fee payment
#[cw_serde]
pub struct FeeTokenMetadata {
    /// The bank denom the fee is charged in
    pub denom: String,

    /// The identifier used to look up this token's TWAP in the oracle
    pub oracle_denom: String,

    /// Exponent of the token's smallest unit
    pub decimals: u32,

    /// Last accepted price: how many units of this token one unit of the native
    /// token is worth. Zero means no price has been accepted yet.
    pub price: Decimal,

    /// Tokens without a fresh oracle price are disabled, and skipped when
    /// selecting a fee token.
    pub enabled: bool,
}

impl FeeTokenMetadata {
    pub fn new(
        denom:        impl Into<String>,
        oracle_denom: impl Into<String>,
        decimals:     u32,
        price:        Decimal,
    ) -> Self {
        Self {
            denom: denom.into(),
            oracle_denom: oracle_denom.into(),
            decimals,
            price,
            enabled: true,
        }
    }

    /// Whether the token may currently be quoted for fee payment
    pub fn is_quotable(&self) -> bool {
        self.enabled && !self.price.is_zero()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if validate_denom(&self.denom).is_err() {
            return Err(invalid(format!("denom `{}` is invalid", self.denom)));
        }

        if validate_denom(&self.oracle_denom).is_err() {
            return Err(invalid(format!("oracle denom `{}` is invalid", self.oracle_denom)));
        }

        if self.decimals < 1 || self.decimals > MAX_DECIMALS {
            return Err(invalid(format!("decimals must be between 1 and {MAX_DECIMALS}")));
        }

        Ok(())
    }
}

/// The registered fee tokens.
///
/// The order is the registration order, and is also the order in which tokens
/// are tried when selecting a fee token.
#[cw_serde]
#[derive(Default)]
pub struct FeeTokenMetadataCollection {
    pub items: Vec<FeeTokenMetadata>,
}

impl From<Vec<FeeTokenMetadata>> for FeeTokenMetadataCollection {
    fn from(items: Vec<FeeTokenMetadata>) -> Self {
        Self {
            items,
        }
    }
}

impl FeeTokenMetadataCollection {
    pub fn get(&self, denom: &str) -> Option<&FeeTokenMetadata> {
        self.items.iter().find(|token| token.denom == denom)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut denoms = BTreeSet::new();

        for token in &self.items {
            token.validate()?;

            if !denoms.insert(token.denom.as_str()) {
                return Err(invalid(format!("duplicate denom found: {}", token.denom)));
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> ValidationError {
    ValidationError::InvalidFeeTokenMetadata {
        reason,
    }
}

// ----------------------------------- Tests -----------------------------------
