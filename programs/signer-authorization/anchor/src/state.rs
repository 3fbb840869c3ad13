use anchor_lang::prelude::*;

/// Seed for the single vault PDA of this program.
pub const VAULT_SEED: &[u8] = b"vault";

/// Vault record binding an authority to the token account it guards
///
/// Lives at the PDA derived from `[b"vault"]` and this program's id, so
/// there is exactly one per program deployment. The PDA is also the SPL
/// authority of `token_account`; the program signs transfers out of it
/// with `[b"vault", &[bump]]`.
#[account]
pub struct Vault {
    /// The only key allowed to authorize withdrawals (set once)
    pub authority: Pubkey,

    /// Token account holding the vault's balance
    pub token_account: Pubkey,

    /// Canonical bump of the vault PDA
    pub bump: u8,
}

impl Vault {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // token_account
        1; // bump

    /// A fresh account is zeroed, and a real token account is never the
    /// default key.
    pub fn is_initialized(&self) -> bool {
        self.token_account != Pubkey::default()
    }
}

/// Derive the vault PDA for `program_id`.
pub fn find_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], program_id)
}

/// Derive the vault PDA for this program.
pub fn vault_address() -> (Pubkey, u8) {
    find_vault_address(&crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_address_is_deterministic() {
        assert_eq!(vault_address(), vault_address());
        assert_eq!(vault_address(), find_vault_address(&crate::ID));
    }

    #[test]
    fn vault_address_depends_on_program_id() {
        let other_program = Pubkey::new_unique();
        assert_ne!(find_vault_address(&other_program).0, vault_address().0);
    }

    #[test]
    fn bump_recreates_the_same_address() {
        let (address, bump) = vault_address();
        let recreated = Pubkey::create_program_address(&[VAULT_SEED, &[bump]], &crate::ID).unwrap();
        assert_eq!(recreated, address);
    }

    #[test]
    fn len_matches_serialized_size() {
        let vault = Vault {
            authority: Pubkey::new_unique(),
            token_account: Pubkey::new_unique(),
            bump: 255,
        };
        let mut data = Vec::new();
        vault.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Vault::LEN);
    }

    #[test]
    fn zeroed_record_is_not_initialized() {
        let vault = Vault {
            authority: Pubkey::default(),
            token_account: Pubkey::default(),
            bump: 0,
        };
        assert!(!vault.is_initialized());

        let vault = Vault {
            token_account: Pubkey::new_unique(),
            ..vault
        };
        assert!(vault.is_initialized());
    }
}
