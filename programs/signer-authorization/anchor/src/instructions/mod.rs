pub mod initialize_vault;
pub mod recommended_withdraw;
pub mod withdraw;

pub use initialize_vault::*;
pub use recommended_withdraw::*;
pub use withdraw::*;
