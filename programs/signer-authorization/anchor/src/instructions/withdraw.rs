use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::authorization::WithdrawAuthorization;
use crate::error::VaultError;
use crate::state::{Vault, VAULT_SEED};

/// Withdraw the whole vault balance after applying `authorization`
///
/// `insecure_withdraw` passes `AlwaysAuthorized` and `secure_withdraw`
/// passes `SignerMatchesAuthority`. Accounts and transfer are identical, so
/// the vulnerability is only the missing check.
///
/// ATTACK SCENARIO (insecure):
/// 1. Alice initializes the vault, 100 tokens are minted into it
/// 2. Bob sends `insecure_withdraw` with his own token account as destination
///    and any key (his own, or Alice's without her signature) as authority
/// 3. No check runs, the vault PDA signs the transfer, Bob receives 100
pub fn withdraw(ctx: Context<Withdraw>, authorization: WithdrawAuthorization) -> Result<()> {
    let accounts = &ctx.accounts;

    authorization.authorize(
        &accounts.vault,
        accounts.authority.key,
        accounts.authority.is_signer,
    )?;

    msg!("Withdraw authorized by rule: {:?}", authorization);

    transfer_full_balance(
        &accounts.vault,
        &accounts.token_account,
        &accounts.withdraw_destination,
        &accounts.token_program,
    )?;

    Ok(())
}

/// Move the entire token account balance to `destination`, signed by the
/// vault PDA.
///
/// The amount is read from the same account snapshot the instruction was
/// validated against; it can never exceed the available balance.
pub fn transfer_full_balance<'info>(
    vault: &Account<'info, Vault>,
    token_account: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
) -> Result<u64> {
    let amount = token_account.amount;

    let seeds = &[VAULT_SEED, &[vault.bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: token_account.to_account_info(),
        to: destination.to_account_info(),
        authority: vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer);

    token::transfer(cpi_ctx, amount)?;

    msg!("Withdrew {} tokens to {}", amount, destination.key());
    Ok(amount)
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump,
        has_one = token_account @ VaultError::TokenAccountMismatch
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub withdraw_destination: Account<'info, TokenAccount>,

    /// Checked (or not) by the `WithdrawAuthorization` rule in the handler.
    /// CHECK: Signer and key validation happen in `WithdrawAuthorization::authorize`
    pub authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
