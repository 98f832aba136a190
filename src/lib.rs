pub mod cli;
pub mod data;
pub mod error;
pub mod exercise;
pub mod gui;
pub mod session;
pub mod terminal;
pub mod verbs;
