use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::state::Vault;

/// Authorization rule applied before a withdrawal moves any tokens
///
/// Both withdraw instructions share the same accounts and the same transfer;
/// they differ only in which rule they pass to the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawAuthorization {
    /// VULNERABLE: Accepts any `authority` account.
    ///
    /// The account slot is labeled `authority`, but nothing ties it to the
    /// vault. An attacker can put any key there (their own, or the real
    /// authority's without its signature) and drain the vault.
    AlwaysAuthorized,

    /// SECURE: The `authority` account must have signed the transaction
    /// AND its key must equal `vault.authority`.
    ///
    /// Neither check is enough alone:
    /// - a signature from the wrong key proves nothing about the vault
    /// - the right key without a signature is just public data anyone can copy
    SignerMatchesAuthority,
}

impl WithdrawAuthorization {
    pub fn authorize(self, vault: &Vault, authority: &Pubkey, is_signer: bool) -> Result<()> {
        match self {
            Self::AlwaysAuthorized => Ok(()),
            Self::SignerMatchesAuthority => {
                require!(is_signer, VaultError::MissingSignature);
                require_keys_eq!(*authority, vault.authority, VaultError::Unauthorized);
                Ok(())
            }
        }
    }
}
