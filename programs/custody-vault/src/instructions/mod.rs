pub mod deposit;
pub mod deposit_asset;
pub mod initialize;
pub mod withdraw;
pub mod withdraw_asset;

pub use deposit::{deposit, Deposit};
pub use deposit_asset::{deposit_asset, DepositAsset};
pub use initialize::{initialize, Initialize};
pub use withdraw::{withdraw, Withdraw};
pub use withdraw_asset::{withdraw_asset, WithdrawAsset};

// Client account modules generated by `#[derive(Accounts)]`; `#[program]`
// looks them up at the crate root.
pub(crate) use deposit::{__client_accounts_deposit, __cpi_client_accounts_deposit};
pub(crate) use deposit_asset::{
    __client_accounts_deposit_asset, __cpi_client_accounts_deposit_asset,
};
pub(crate) use initialize::{__client_accounts_initialize, __cpi_client_accounts_initialize};
pub(crate) use withdraw::{__client_accounts_withdraw, __cpi_client_accounts_withdraw};
pub(crate) use withdraw_asset::{
    __client_accounts_withdraw_asset, __cpi_client_accounts_withdraw_asset,
};
