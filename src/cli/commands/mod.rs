pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod meta;
pub mod report;
pub mod top;
pub mod total;
pub mod trend;
pub mod week;
