use {
    crate::{error::Result, keeper::Keeper, state::FEE_TOKENS},
    cosmwasm_std::{Decimal, Storage},
    feeabs::{calculate_token_price, clamp_price, FeeTokenMetadata, FeeTokenMetadataCollection},
    std::collections::BTreeMap,
};

impl Keeper<'_> {
    /// Recompute the price of every registered fee token from the oracle's
    /// TWAPs, and persist the result.
    ///
    /// Missing or unusable price data disables the affected tokens instead of
    /// failing. Only store errors are returned.
    pub fn calculate_fee_token_prices(
        &self,
        store: &mut dyn Storage,
    ) -> Result<FeeTokenMetadataCollection> {
        let params = self.params(store)?;
        let mut fee_tokens = self.fee_tokens(store)?;

        if !params.enabled {
            return Ok(fee_tokens);
        }

        let twaps = match self.oracle.calculate_twaps(store, params.twap_lookback_window) {
            Ok(twaps) => twaps,
            Err(err) => {
                tracing::warn!(
                    target: "feeabs",
                    lookback = params.twap_lookback_window,
                    %err,
                    "oracle twaps unavailable; pricing with an empty set",
                );
                vec![]
            },
        };

        // oracle denom => twap
        let twaps = twaps
            .into_iter()
            .map(|twap| (twap.denom, twap.twap))
            .collect::<BTreeMap<_, _>>();

        let base_price = twaps
            .get(&params.native_oracle_denom)
            .copied()
            .unwrap_or(params.fallback_native_price);

        for token in &mut fee_tokens.items {
            refresh_price(token, &twaps, base_price, params.clamp_factor);
        }

        FEE_TOKENS.save(store, &fee_tokens)?;

        Ok(fee_tokens)
    }
}

fn refresh_price(
    token:        &mut FeeTokenMetadata,
    twaps:        &BTreeMap<String, Decimal>,
    base_price:   Decimal,
    clamp_factor: Decimal,
) {
    // only a successful computation re-enables a token, and disabled tokens
    // are not priced
    if !token.enabled {
        return;
    }

    let token_price = twaps.get(&token.oracle_denom).copied().unwrap_or_default();

    if token_price.is_zero() {
        tracing::warn!(target: "feeabs", denom = %token.denom, "no twap for fee token; disabling");
        disable(token);
        return;
    }

    match calculate_token_price(base_price, token_price) {
        Ok(raw_price) => {
            let price = clamp_price(token.price, raw_price, clamp_factor);

            tracing::debug!(
                target: "feeabs",
                denom = %token.denom,
                %raw_price,
                prev_price = %token.price,
                %price,
                "refreshed fee token price",
            );

            token.price = price;
            token.enabled = true;
        },
        Err(err) => {
            tracing::warn!(target: "feeabs", denom = %token.denom, %err, "failed to price fee token; disabling");
            disable(token);
        },
    }
}

fn disable(token: &mut FeeTokenMetadata) {
    token.enabled = false;
    token.price = Decimal::zero();
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::testing::{dec, mock_keeper, setup},
        cosmwasm_std::testing::MockStorage,
        feeabs::Params,
        feeabs_mocks::MockOracle,
    };

    #[test]
    fn pricing_against_native_twap() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, Decimal::zero())]);
        let keeper = mock_keeper();

        // the native token is worth 0.1, ATOM is worth 15
        MockOracle::set_twaps(&mut store, &[("kii", dec("0.1")), ("atom", dec("15"))]).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items[0].price, dec("150"));
        assert!(fee_tokens.items[0].enabled);

        // persisted
        assert_eq!(keeper.fee_tokens(&store).unwrap(), fee_tokens);

        // ATOM doubles; the move is capped at +10% per refresh
        MockOracle::set_twaps(&mut store, &[("kii", dec("0.1")), ("atom", dec("30"))]).unwrap();
        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items[0].price, dec("165"));

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items[0].price, dec("181.5"));
    }

    #[test]
    fn falling_back_to_fallback_native_price() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, Decimal::zero())]);
        let keeper = mock_keeper();

        let params = Params {
            fallback_native_price: dec("2"),
            ..Params::default()
        };
        keeper.set_params(&mut store, &params).unwrap();

        MockOracle::set_twaps(&mut store, &[("atom", dec("5"))]).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items[0].price, dec("2.5"));
    }

    #[test]
    fn disabling_tokens_without_twap() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![
            FeeTokenMetadata::new("uatom", "atom", 6, dec("0.123")),
            FeeTokenMetadata::new("usol", "sol", 9, dec("0.125")),
        ]);
        let keeper = mock_keeper();

        MockOracle::set_twaps(&mut store, &[("kii", dec("1")), ("sol", dec("0.125"))]).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items[0], FeeTokenMetadata {
            enabled: false,
            ..FeeTokenMetadata::new("uatom", "atom", 6, Decimal::zero())
        });
        assert_eq!(fee_tokens.items[1], FeeTokenMetadata::new("usol", "sol", 9, dec("0.125")));
    }

    #[test]
    fn leaving_disabled_tokens_unchanged() {
        let mut store = MockStorage::new();
        let disabled = FeeTokenMetadata {
            enabled: false,
            ..FeeTokenMetadata::new("uatom", "atom", 6, dec("0.5"))
        };
        setup(&mut store, vec![disabled.clone()]);
        let keeper = mock_keeper();

        MockOracle::set_twaps(&mut store, &[("kii", dec("1")), ("atom", dec("3"))]).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items, vec![disabled]);
    }

    #[test]
    fn absorbing_oracle_outage() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("2"))]);
        let keeper = mock_keeper();

        MockOracle::set_twaps(&mut store, &[("kii", dec("1")), ("atom", dec("2"))]).unwrap();
        MockOracle::set_unavailable(&mut store, true).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert!(!fee_tokens.items[0].enabled);
        assert!(fee_tokens.items[0].price.is_zero());
    }

    #[test]
    fn disabling_tokens_when_native_twap_is_zero() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("2"))]);
        let keeper = mock_keeper();

        MockOracle::set_twaps(&mut store, &[("kii", Decimal::zero()), ("atom", dec("2"))]).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert!(!fee_tokens.items[0].enabled);
    }

    #[test]
    fn skipping_refresh_when_module_disabled() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("2"))]);
        let keeper = mock_keeper();

        let params = Params {
            enabled: false,
            ..Params::default()
        };
        keeper.set_params(&mut store, &params).unwrap();

        // would disable the token if the refresh ran
        MockOracle::set_unavailable(&mut store, true).unwrap();

        let fee_tokens = keeper.calculate_fee_token_prices(&mut store).unwrap();
        assert_eq!(fee_tokens.items, vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("2"))]);
    }

    #[test]
    fn failing_on_missing_params() {
        let mut store = MockStorage::new();
        let keeper = mock_keeper();

        assert!(keeper.calculate_fee_token_prices(&mut store).is_err());
    }
}
