pub mod events;
pub mod user_info;
pub mod vault;

pub use events::*;
pub use user_info::*;
pub use vault::*;
