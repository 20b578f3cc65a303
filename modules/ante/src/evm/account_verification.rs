use {
    crate::error::{Error, Result},
    cosmwasm_std::{Addr, Storage, Uint128},
    feeabs::AccountKeeper,
};

/// Only externally-owned accounts may send transactions. Creates the sender's
/// account if it doesn't exist yet.
pub fn verify_if_account_exists(
    store:    &mut dyn Storage,
    accounts: &dyn AccountKeeper,
    from:     &Addr,
) -> Result<()> {
    match accounts.account(store, from)? {
        Some(account) if account.is_contract() => Err(Error::SenderNotEoa {
            address: from.into(),
        }),
        Some(_) => Ok(()),
        None => {
            let account = accounts.new_account_with_address(store, from)?;
            accounts.set_account(store, &account)?;
            Ok(())
        },
    }
}

/// The sender's liquid balance must cover the value the transaction
/// transfers. Fees are not included; by the time this is called after fee
/// deduction they are already paid.
pub fn verify_account_balance(balance: Uint128, value: Uint128) -> Result<()> {
    if balance < value {
        return Err(Error::InsufficientBalanceForValue {
            balance,
            value,
        });
    }

    Ok(())
}

// ----------------------------------- Tests -----------------------------------
