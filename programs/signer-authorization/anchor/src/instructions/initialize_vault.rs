use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::error::VaultError;
use crate::state::{Vault, VAULT_SEED};

/// Initialize the vault and the token account it guards
///
/// The token account is created here with the vault PDA as its SPL
/// authority, so only this program can move tokens out of it.
///
/// A second call fails with `AccountAlreadyInitialized` from the vault's
/// account constraint, before the token account is touched.
pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    vault.set_inner(Vault {
        authority: ctx.accounts.authority.key(),
        token_account: ctx.accounts.token_account.key(),
        bump: ctx.bumps.vault,
    });

    msg!("Vault initialized with authority: {}", vault.authority);
    msg!("Vault token account: {}", vault.token_account);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// Pays rent for the vault record and the token account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The key that will control withdrawals. It is only recorded, it
    /// holds no privilege yet, so its signature is not required.
    /// CHECK: Any key may be named as authority
    pub authority: UncheckedAccount<'info>,

    /// `init_if_needed` lets an existing record load so the constraint
    /// below reports re-initialization. It must stay ahead of
    /// `token_account`: init fields are processed in declaration order.
    #[account(
        init_if_needed,
        payer = payer,
        space = Vault::LEN,
        seeds = [VAULT_SEED],
        bump,
        constraint = !vault.is_initialized() @ VaultError::AccountAlreadyInitialized
    )]
    pub vault: Account<'info, Vault>,

    /// Fresh keypair account; co-signs its own creation
    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = vault,
    )]
    pub token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}
