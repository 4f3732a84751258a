pub mod initialize_vault;
pub use initialize_vault::*;

pub mod update_configs;
pub use update_configs::*;

pub mod add_rewards;
pub use add_rewards::*;

pub mod start_staking;
pub use start_staking::*;

pub mod stop_staking;
pub use stop_staking::*;

pub mod update_vault;
pub use update_vault::*;

pub mod deposit;
pub use deposit::*;

pub mod claim;
pub use claim::*;

pub mod withdraw;
pub use withdraw::*;

pub mod exit;
pub use exit::*;
