pub mod commands;
pub mod health;
pub mod snmp;
pub mod validate;

pub use commands::list_commands;
pub use health::health;
pub use snmp::query;
pub use validate::validate_oid;
