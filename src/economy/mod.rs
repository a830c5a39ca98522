//! Economy model.
//!
//! Balances are extrapolated linearly from the last authority report, and
//! purchases are gated on both price and sustainable upkeep.

pub mod balance;
pub mod config;

pub use balance::{Balance, GameClock};
pub use config::{strongest_affordable, Economy, GameConfig, IncomeTable, PriceTable, Tier};
