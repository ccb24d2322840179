pub mod country_currency;
pub mod currency;
pub mod tier;

pub use country_currency::{country_name, currency_for_country, resolve_currency_for_country};
pub use currency::{currency_config, Currency, CurrencyConfig};
pub use tier::{plans, Plan, PricedPlan, Tier};
