//! Command implementations.

pub mod claim;
pub mod config;
pub mod order;
pub mod print;
pub mod reference;

pub use self::claim::execute_claim;
pub use self::config::execute_config;
pub use self::order::execute_order;
pub use self::print::{execute_list, execute_print, execute_show};
pub use self::reference::{execute_add, execute_delete};
