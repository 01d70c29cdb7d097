pub mod cli;
pub mod commands;
pub mod encode;
pub mod layout;
pub mod manifest;
pub mod render;
