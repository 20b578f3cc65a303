use {
    crate::{denom::validate_denom, error::ValidationError},
    cosmwasm_std::{Coin, Uint128},
    std::{collections::BTreeMap, fmt},
};

// denom => amount
//
// zero amounts are never stored, so an empty map is the zero fee
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coins(BTreeMap<String, Uint128>);

// unlike MessageInfo::funds, tx fees come from an untrusted source, so we check
// for duplicate denoms and malformed denoms here
impl TryFrom<&[Coin]> for Coins {
    type Error = ValidationError;

    fn try_from(coins: &[Coin]) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();

        for coin in coins {
            validate_denom(&coin.denom)?;

            if map.contains_key(&coin.denom) {
                return Err(ValidationError::InvalidCoins {
                    reason: format!("duplicate denom `{}`", coin.denom),
                });
            }

            map.insert(coin.denom.clone(), coin.amount);
        }

        map.retain(|_, amount| !amount.is_zero());

        Ok(Self(map))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .iter()
            .map(|(denom, amount)| format!("{amount}{denom}"))
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{s}")
    }
}

impl Coins {
    /// Return the only coin in the set; None if the set is empty or contains
    /// more than one denom.
    pub fn single(&self) -> Option<Coin> {
        if self.0.len() != 1 {
            return None;
        }

        self.0.iter().next().map(|(denom, amount)| Coin {
            denom:  denom.clone(),
            amount: *amount,
        })
    }
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, cosmwasm_std::coin};

    #[test]
    fn parsing_untrusted_coins() {
        let coins = Coins::try_from([coin(0, "uatom"), coin(12345, "akii")].as_slice()).unwrap();
        assert_eq!(coins.single(), Some(coin(12345, "akii")));
        assert_eq!(coins.to_string(), "12345akii");

        let zero = Coins::try_from([coin(0, "akii")].as_slice()).unwrap();
        assert_eq!(zero.single(), None);
        assert_eq!(zero.to_string(), "");

        let two = Coins::try_from([coin(1, "akii"), coin(2, "uatom")].as_slice()).unwrap();
        assert_eq!(two.single(), None);
        assert_eq!(two.to_string(), "1akii,2uatom");

        let err = Coins::try_from([coin(1, "akii"), coin(2, "akii")].as_slice()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCoins {
                reason: "duplicate denom `akii`".into(),
            },
        );

        let err = Coins::try_from([coin(1, "1akii")].as_slice()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDenom { .. }));
    }
}
