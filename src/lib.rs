// Library for tests to access modules

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod netdev_repo;
pub mod output;
pub mod rates;
pub mod worker;
