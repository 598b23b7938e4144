pub mod collector;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod snmp;
pub mod state;
pub mod table;
