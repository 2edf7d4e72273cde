pub mod coingecko;
pub mod exchange_rate;
pub mod prediction;
pub mod traits;
