pub mod calm;
pub mod completions;
pub mod config;
pub mod run;
