pub mod add;
pub mod aggregate;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod filter;
pub mod log;
pub mod meta;
pub mod present;
pub mod report;
pub mod store;
pub mod view;
