pub mod downtime;
