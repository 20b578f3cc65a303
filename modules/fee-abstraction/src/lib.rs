mod abci;
mod branch;
mod context;
pub mod error;
mod fee;
mod genesis;
mod keeper;
mod msg_server;
mod oracle;
mod query;
pub mod state;

pub use crate::{
    branch::StoreBranch,
    context::{Context, ExecMode},
    error::{Error, Result},
    keeper::Keeper,
};

pub const CONTRACT_NAME: &str = "crates.io:feeabs";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod testing;
