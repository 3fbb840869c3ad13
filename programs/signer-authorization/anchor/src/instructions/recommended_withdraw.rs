use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::error::VaultError;
use crate::instructions::withdraw::transfer_full_balance;
use crate::state::{Vault, VAULT_SEED};

/// SECURE: Withdraw with the checks expressed as account constraints
///
/// - `Signer<'info>` makes Anchor reject an unsigned authority
///   (`AccountNotSigner`) before the handler runs
/// - `has_one = authority` compares the signer with `vault.authority`
///
/// The transfer is the same primitive the other two variants use.
pub fn recommended_withdraw(ctx: Context<RecommendedWithdraw>) -> Result<()> {
    let accounts = &ctx.accounts;

    msg!("Withdraw authorized by constraints: signer {}", accounts.authority.key());

    transfer_full_balance(
        &accounts.vault,
        &accounts.token_account,
        &accounts.withdraw_destination,
        &accounts.token_program,
    )?;

    Ok(())
}

#[derive(Accounts)]
pub struct RecommendedWithdraw<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump,
        has_one = token_account @ VaultError::TokenAccountMismatch,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub withdraw_destination: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
