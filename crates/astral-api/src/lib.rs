pub mod auth;
pub mod error;
pub mod horoscope;
pub mod middleware;
pub mod rate_limit;
