pub mod billing;
pub mod certification;
pub mod client;
pub mod dashboard;
pub mod document;
pub mod marketing;
pub mod project;
