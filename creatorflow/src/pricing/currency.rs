use super::tier::Tier;

macro_rules! currency_enum {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $($variant,)*
        }

        impl $name {
            /// Every supported currency, in the order the selector lists them.
            pub const ALL: &'static [$name] = &[$(Self::$variant,)*];

            pub fn to_static_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.to_static_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $(stringify!($variant) => Ok(Self::$variant),)*
                    _ => Err(format!("Unsupported currency '{}'", s)),
                }
            }
        }
    };
}

currency_enum!(Currency {
    USD, // macro sets first variant as the default
    EUR,
    GBP,
    AUD,
    CAD,
    INR,
    PKR,
    BDT,
    AED,
    SGD,
    MYR,
    PHP,
    NGN,
    BRL,
    ZAR,
});

/// Display data for a currency: glyph, name, flag and one curated price per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub symbol: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// Pre-formatted prices, indexed by [`Tier::index`].
    pub prices: [&'static str; 3],
}

impl CurrencyConfig {
    pub fn price(&self, tier: Tier) -> &'static str {
        self.prices[tier.index()]
    }
}

static USD: CurrencyConfig = CurrencyConfig {
    symbol: "$",
    name: "US Dollar",
    flag: "🇺🇸",
    prices: ["$299", "$599", "$999"],
};

static EUR: CurrencyConfig = CurrencyConfig {
    symbol: "€",
    name: "Euro",
    flag: "🇪🇺",
    prices: ["€279", "€549", "€919"],
};

static GBP: CurrencyConfig = CurrencyConfig {
    symbol: "£",
    name: "British Pound",
    flag: "🇬🇧",
    prices: ["£249", "£499", "£849"],
};

static AUD: CurrencyConfig = CurrencyConfig {
    symbol: "A$",
    name: "Australian Dollar",
    flag: "🇦🇺",
    prices: ["A$449", "A$899", "A$1,499"],
};

static CAD: CurrencyConfig = CurrencyConfig {
    symbol: "C$",
    name: "Canadian Dollar",
    flag: "🇨🇦",
    prices: ["C$399", "C$799", "C$1,349"],
};

static INR: CurrencyConfig = CurrencyConfig {
    symbol: "₹",
    name: "Indian Rupee",
    flag: "🇮🇳",
    prices: ["₹9,999", "₹19,999", "₹34,999"],
};

static PKR: CurrencyConfig = CurrencyConfig {
    symbol: "₨",
    name: "Pakistani Rupee",
    flag: "🇵🇰",
    prices: ["₨84,999", "₨1,69,999", "₨2,79,999"],
};

static BDT: CurrencyConfig = CurrencyConfig {
    symbol: "৳",
    name: "Bangladeshi Taka",
    flag: "🇧🇩",
    prices: ["৳34,999", "৳69,999", "৳1,14,999"],
};

static AED: CurrencyConfig = CurrencyConfig {
    symbol: "د.إ",
    name: "UAE Dirham",
    flag: "🇦🇪",
    prices: ["د.إ1,099", "د.إ2,199", "د.إ3,669"],
};

static SGD: CurrencyConfig = CurrencyConfig {
    symbol: "S$",
    name: "Singapore Dollar",
    flag: "🇸🇬",
    prices: ["S$399", "S$799", "S$1,349"],
};

static MYR: CurrencyConfig = CurrencyConfig {
    symbol: "RM",
    name: "Malaysian Ringgit",
    flag: "🇲🇾",
    prices: ["RM1,399", "RM2,799", "RM4,699"],
};

static PHP: CurrencyConfig = CurrencyConfig {
    symbol: "₱",
    name: "Philippine Peso",
    flag: "🇵🇭",
    prices: ["₱16,999", "₱33,999", "₱56,999"],
};

static NGN: CurrencyConfig = CurrencyConfig {
    symbol: "₦",
    name: "Nigerian Naira",
    flag: "🇳🇬",
    prices: ["₦4,49,999", "₦8,99,999", "₦14,99,999"],
};

static BRL: CurrencyConfig = CurrencyConfig {
    symbol: "R$",
    name: "Brazilian Real",
    flag: "🇧🇷",
    prices: ["R$1,499", "R$2,999", "R$4,999"],
};

static ZAR: CurrencyConfig = CurrencyConfig {
    symbol: "R",
    name: "South African Rand",
    flag: "🇿🇦",
    prices: ["R5,499", "R10,999", "R18,499"],
};

impl Currency {
    pub fn config(&self) -> &'static CurrencyConfig {
        match self {
            Currency::USD => &USD,
            Currency::EUR => &EUR,
            Currency::GBP => &GBP,
            Currency::AUD => &AUD,
            Currency::CAD => &CAD,
            Currency::INR => &INR,
            Currency::PKR => &PKR,
            Currency::BDT => &BDT,
            Currency::AED => &AED,
            Currency::SGD => &SGD,
            Currency::MYR => &MYR,
            Currency::PHP => &PHP,
            Currency::NGN => &NGN,
            Currency::BRL => &BRL,
            Currency::ZAR => &ZAR,
        }
    }
}

/// Looks up the display configuration of a currency code.
///
/// Unknown codes get the default currency's configuration, so the result is always
/// fully populated.
pub fn currency_config(code: &str) -> &'static CurrencyConfig {
    code.parse::<Currency>().unwrap_or_default().config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
        assert_eq!(Currency::ALL[0], Currency::USD);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::EUR));
        assert_eq!(" Inr ".parse::<Currency>(), Ok(Currency::INR));
        assert!("XYZ".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn display_matches_code() {
        for currency in Currency::ALL {
            assert_eq!(currency.to_string().parse::<Currency>(), Ok(*currency));
        }
    }

    #[test]
    fn every_config_has_three_prices() {
        for currency in Currency::ALL {
            let config = currency.config();
            assert!(!config.symbol.is_empty());
            assert!(!config.name.is_empty());
            assert!(!config.flag.is_empty());
            assert_eq!(config.prices.len(), 3);
            for price in config.prices {
                assert!(!price.is_empty(), "{} has an empty price", currency);
            }
        }
    }

    #[test]
    fn prices_use_their_own_symbol() {
        for currency in Currency::ALL {
            let config = currency.config();
            for price in config.prices {
                assert!(
                    price.starts_with(config.symbol),
                    "{} price {} does not start with {}",
                    currency,
                    price,
                    config.symbol
                );
            }
        }
    }

    #[test]
    fn unknown_code_falls_back_to_usd() {
        assert_eq!(currency_config("XYZ"), Currency::USD.config());
        assert_eq!(currency_config(""), Currency::USD.config());
        assert_eq!(currency_config("gbp").symbol, "£");
    }

    #[test]
    fn lookup_is_idempotent() {
        let first = currency_config("INR");
        let second = currency_config("INR");
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }
}
