pub mod forecast;
pub mod layout;
pub mod prediction;
pub mod statistics;
