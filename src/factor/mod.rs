pub mod core;
pub mod partition;
pub mod search;
pub mod state;


pub use self::core::*;
pub use self::partition::*;
pub use self::search::*;
pub use self::state::*;
