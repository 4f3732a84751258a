pub mod events;
pub mod pool;
pub mod staking_config;
pub mod user_stake;

pub use events::*;
pub use pool::*;
pub use staking_config::*;
pub use user_stake::*;
