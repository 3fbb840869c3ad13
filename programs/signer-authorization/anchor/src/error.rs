use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault has already been initialized")]
    AccountAlreadyInitialized,

    #[msg("Authority must sign the withdrawal")]
    MissingSignature,

    #[msg("Signer is not the vault authority")]
    Unauthorized,

    #[msg("Token account does not belong to this vault")]
    TokenAccountMismatch,
}
