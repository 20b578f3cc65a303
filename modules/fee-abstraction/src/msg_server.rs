use {
    crate::{
        error::{Error, Result},
        keeper::Keeper,
        state::{FEE_TOKENS, PARAMS},
    },
    cosmwasm_std::{Response, Storage},
    feeabs::{ExecuteMsg, FeeTokenMetadataCollection, Params},
};

impl Keeper<'_> {
    /// Handle a governance message. Every check runs before the first write.
    pub fn execute(&self, store: &mut dyn Storage, msg: ExecuteMsg) -> Result<Response> {
        match msg {
            ExecuteMsg::UpdateParams {
                authority,
                params,
            } => self.update_params(store, &authority, params),
            ExecuteMsg::UpdateFeeTokens {
                authority,
                fee_tokens,
            } => self.update_fee_tokens(store, &authority, fee_tokens),
        }
    }

    fn update_params(&self, store: &mut dyn Storage, authority: &str, params: Params) -> Result<Response> {
        self.assert_authority(authority)?;

        params.validate()?;
        self.oracle.validate_lookback_seconds(store, params.twap_lookback_window)?;

        PARAMS.save(store, &params)?;

        Ok(Response::new()
            .add_attribute("action", "update_params")
            .add_attribute("enabled", params.enabled.to_string()))
    }

    fn update_fee_tokens(
        &self,
        store:      &mut dyn Storage,
        authority:  &str,
        fee_tokens: FeeTokenMetadataCollection,
    ) -> Result<Response> {
        self.assert_authority(authority)?;

        fee_tokens.validate()?;

        let vote_targets = self.oracle.vote_targets(store)?;
        for token in &fee_tokens.items {
            if !vote_targets.contains(&token.oracle_denom) {
                return Err(Error::NotVoteTarget {
                    denom: token.oracle_denom.clone(),
                });
            }
        }

        FEE_TOKENS.save(store, &fee_tokens)?;

        Ok(Response::new()
            .add_attribute("action", "update_fee_tokens")
            .add_attribute("count", fee_tokens.items.len().to_string()))
    }

    fn assert_authority(&self, authority: &str) -> Result<()> {
        if authority.is_empty() || authority != self.authority.as_str() {
            return Err(Error::Unauthorized {
                expected: self.authority.to_string(),
                actual:   authority.into(),
            });
        }

        Ok(())
    }
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::testing::{dec, mock_keeper, setup, AUTHORITY},
        cosmwasm_std::{testing::MockStorage, StdError},
        feeabs::{FeeTokenMetadata, ValidationError},
        feeabs_mocks::MockOracle,
    };

    fn update_params(authority: &str, params: Params) -> ExecuteMsg {
        ExecuteMsg::UpdateParams {
            authority: authority.into(),
            params,
        }
    }

    fn update_fee_tokens(authority: &str, fee_tokens: Vec<FeeTokenMetadata>) -> ExecuteMsg {
        ExecuteMsg::UpdateFeeTokens {
            authority:  authority.into(),
            fee_tokens: fee_tokens.into(),
        }
    }

    #[test]
    fn updating_params() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![]);
        let keeper = mock_keeper();

        let params = Params {
            clamp_factor: dec("0.2"),
            twap_lookback_window: MockOracle::MAX_LOOKBACK_SECONDS,
            ..Params::default()
        };

        let res = keeper.execute(&mut store, update_params(AUTHORITY, params.clone())).unwrap();
        assert_eq!(res.attributes[0].value, "update_params");
        assert_eq!(keeper.params(&store).unwrap(), params);
    }

    #[test]
    fn rejecting_params_updates() {
        struct TestCase {
            name:      &'static str,
            authority: &'static str,
            params:    Params,
            err:       Error,
        }

        let testcases = [
            TestCase {
                name:      "empty authority",
                authority: "",
                params:    Params::default(),
                err: Error::Unauthorized {
                    expected: AUTHORITY.into(),
                    actual:   "".into(),
                },
            },
            TestCase {
                name:      "wrong authority",
                authority: "jake",
                params:    Params::default(),
                err: Error::Unauthorized {
                    expected: AUTHORITY.into(),
                    actual:   "jake".into(),
                },
            },
            TestCase {
                name:      "invalid params",
                authority: AUTHORITY,
                params: Params {
                    fallback_native_price: dec("0"),
                    ..Params::default()
                },
                err: Error::Validation(ValidationError::InvalidParams {
                    reason: "fallback native price must be greater than 0".into(),
                }),
            },
            TestCase {
                name:      "lookback beyond oracle history",
                authority: AUTHORITY,
                params: Params {
                    twap_lookback_window: MockOracle::MAX_LOOKBACK_SECONDS + 1,
                    ..Params::default()
                },
                err: Error::Std(StdError::generic_err(
                    "twap lookback seconds is greater than max lookback duration or less than or equal to 0",
                )),
            },
        ];

        for testcase in testcases {
            let mut store = MockStorage::new();
            setup(&mut store, vec![]);
            let keeper = mock_keeper();

            let err = keeper.execute(&mut store, update_params(testcase.authority, testcase.params)).unwrap_err();
            assert_eq!(err, testcase.err, "{}", testcase.name);
            assert_eq!(keeper.params(&store).unwrap(), Params::default(), "{}", testcase.name);
        }
    }

    #[test]
    fn updating_fee_tokens() {
        let mut store = MockStorage::new();
        setup(&mut store, vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("1"))]);
        MockOracle::set_vote_targets(&mut store, &["atom", "sol"]).unwrap();
        let keeper = mock_keeper();

        // replaced wholesale, and the new order is kept
        let fee_tokens = vec![
            FeeTokenMetadata::new("usol", "sol", 9, dec("0.125")),
            FeeTokenMetadata::new("uatom", "atom", 6, dec("0.123")),
        ];

        let res = keeper.execute(&mut store, update_fee_tokens(AUTHORITY, fee_tokens.clone())).unwrap();
        assert_eq!(res.attributes[1].value, "2");
        assert_eq!(keeper.fee_tokens(&store).unwrap().items, fee_tokens);
    }

    #[test]
    fn rejecting_fee_token_updates() {
        let original = vec![FeeTokenMetadata::new("uatom", "atom", 6, dec("1"))];

        let testcases = [
            (
                update_fee_tokens("jake", vec![]),
                Error::Unauthorized {
                    expected: AUTHORITY.into(),
                    actual:   "jake".into(),
                },
            ),
            (
                update_fee_tokens(AUTHORITY, vec![
                    FeeTokenMetadata::new("uatom", "atom", 6, dec("1")),
                    FeeTokenMetadata::new("uatom", "atom", 6, dec("2")),
                ]),
                Error::Validation(ValidationError::InvalidFeeTokenMetadata {
                    reason: "duplicate denom found: uatom".into(),
                }),
            ),
            (
                update_fee_tokens(AUTHORITY, vec![FeeTokenMetadata::new("ubtc", "btc", 8, dec("1"))]),
                Error::NotVoteTarget {
                    denom: "btc".into(),
                },
            ),
        ];

        for (msg, expected) in testcases {
            let mut store = MockStorage::new();
            setup(&mut store, original.clone());
            let keeper = mock_keeper();

            assert_eq!(keeper.execute(&mut store, msg).unwrap_err(), expected);
            assert_eq!(keeper.fee_tokens(&store).unwrap().items, original);
        }
    }
}
