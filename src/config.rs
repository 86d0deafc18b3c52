//! Configuration loaded from environment variables.

use std::net::SocketAddr;

use rust_decimal::Decimal;

use crate::pricing::PricingLimits;

/// Server and pricing configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
    pub limits: PricingLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            limits: PricingLimits::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 8080)
    /// - `PRICING_MAX_PERSONS` (default: 500)
    /// - `PRICING_MAX_ROOMS` (default: 250)
    /// - `PRICING_MAX_UNIT_PRICE` (default: 1000000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            limits: PricingLimits {
                max_persons: parse_or(&lookup, "PRICING_MAX_PERSONS", defaults.limits.max_persons),
                max_rooms: parse_or(&lookup, "PRICING_MAX_ROOMS", defaults.limits.max_rooms),
                max_unit_price: parse_or::<Decimal, _>(
                    &lookup,
                    "PRICING_MAX_UNIT_PRICE",
                    defaults.limits.max_unit_price,
                ),
            },
        }
    }

    /// Socket address to bind the HTTP server to.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable config value, using default");
            default
        }),
        None => default,
    }
}
