use anchor_lang::prelude::*;

declare_id!("GoksMTfEGaMze2sRzoRxKqguYAq2gVFb7yP3XaZnV3j7");

pub mod authorization;
pub mod error;
pub mod instructions;
pub mod state;

pub use authorization::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod signer_authorization {
    use super::*;

    /// Create the vault PDA and the token account it guards.
    /// The authority is only named here; it does not have to sign.
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault(ctx)
    }

    /// VULNERABLE: Drain the vault without checking who is asking.
    /// The `authority` account is accepted as-is: no signature, no match
    /// against the stored authority.
    pub fn insecure_withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx, WithdrawAuthorization::AlwaysAuthorized)
    }

    /// SECURE: Drain the vault only when the stored authority signed.
    pub fn secure_withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx, WithdrawAuthorization::SignerMatchesAuthority)
    }

    /// SECURE: Same contract as `secure_withdraw`, enforced through
    /// Anchor's `Signer` type and a `has_one` constraint.
    pub fn recommended_withdraw(ctx: Context<RecommendedWithdraw>) -> Result<()> {
        instructions::recommended_withdraw(ctx)
    }
}
