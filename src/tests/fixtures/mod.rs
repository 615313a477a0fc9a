pub mod activity;
pub mod commands;
