pub mod initialize;
pub use initialize::*;

pub mod initiate_pool;
pub use initiate_pool::*;

pub mod update_pool;
pub use update_pool::*;

pub mod add_stake;
pub use add_stake::*;

pub mod withdraw_stake;
pub use withdraw_stake::*;

pub mod claim_rewards;
pub use claim_rewards::*;
