use super::currency::Currency;

/// Returns the currency prices are shown in for a country, if the country is covered.
///
/// `iso_code` is an ISO 3166-1 alpha-2 code. Lowercase input is accepted.
pub fn currency_for_country(iso_code: &str) -> Option<Currency> {
    let currency = match iso_code.trim().to_uppercase().as_str() {
        "US" | "NZ" => Currency::USD,
        "CA" => Currency::CAD,
        "AU" => Currency::AUD,
        "GB" => Currency::GBP,
        "IE" | "DE" | "FR" | "IT" | "ES" | "NL" | "BE" | "AT" | "PT" | "FI" | "GR" => {
            Currency::EUR
        }
        "IN" | "LK" => Currency::INR,
        "PK" => Currency::PKR,
        "BD" => Currency::BDT,
        "AE" | "SA" | "QA" | "KW" | "BH" | "OM" => Currency::AED,
        "SG" => Currency::SGD,
        "MY" => Currency::MYR,
        "PH" => Currency::PHP,
        "ID" | "TH" | "VN" => Currency::USD,
        "NG" => Currency::NGN,
        "GH" | "KE" | "EG" => Currency::USD,
        "ZA" => Currency::ZAR,
        "BR" => Currency::BRL,
        "MX" | "AR" | "CO" | "CL" => Currency::USD,
        "CN" | "JP" | "KR" => Currency::USD,
        _ => return None,
    };
    Some(currency)
}

/// Resolves the currency for a detected country, falling back to the default
/// currency when the country is missing or not covered.
pub fn resolve_currency_for_country(iso_code: Option<&str>) -> Currency {
    iso_code
        .and_then(currency_for_country)
        .unwrap_or_default()
}

/// Human readable name of a covered country, used in logs.
pub fn country_name(iso_code: &str) -> Option<&'static str> {
    let name = match iso_code.trim().to_uppercase().as_str() {
        "US" => "United States",
        "NZ" => "New Zealand",
        "CA" => "Canada",
        "AU" => "Australia",
        "GB" => "United Kingdom",
        "IE" => "Ireland",
        "DE" => "Germany",
        "FR" => "France",
        "IT" => "Italy",
        "ES" => "Spain",
        "NL" => "Netherlands",
        "BE" => "Belgium",
        "AT" => "Austria",
        "PT" => "Portugal",
        "FI" => "Finland",
        "GR" => "Greece",
        "IN" => "India",
        "LK" => "Sri Lanka",
        "PK" => "Pakistan",
        "BD" => "Bangladesh",
        "AE" => "United Arab Emirates",
        "SA" => "Saudi Arabia",
        "QA" => "Qatar",
        "KW" => "Kuwait",
        "BH" => "Bahrain",
        "OM" => "Oman",
        "SG" => "Singapore",
        "MY" => "Malaysia",
        "PH" => "Philippines",
        "ID" => "Indonesia",
        "TH" => "Thailand",
        "VN" => "Vietnam",
        "NG" => "Nigeria",
        "GH" => "Ghana",
        "KE" => "Kenya",
        "ZA" => "South Africa",
        "EG" => "Egypt",
        "BR" => "Brazil",
        "MX" => "Mexico",
        "AR" => "Argentina",
        "CO" => "Colombia",
        "CL" => "Chile",
        "CN" => "China",
        "JP" => "Japan",
        "KR" => "South Korea",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPPED: &[(&str, Currency)] = &[
        ("US", Currency::USD),
        ("CA", Currency::CAD),
        ("AU", Currency::AUD),
        ("NZ", Currency::USD),
        ("GB", Currency::GBP),
        ("IE", Currency::EUR),
        ("DE", Currency::EUR),
        ("FR", Currency::EUR),
        ("IT", Currency::EUR),
        ("ES", Currency::EUR),
        ("NL", Currency::EUR),
        ("BE", Currency::EUR),
        ("AT", Currency::EUR),
        ("PT", Currency::EUR),
        ("FI", Currency::EUR),
        ("GR", Currency::EUR),
        ("IN", Currency::INR),
        ("PK", Currency::PKR),
        ("BD", Currency::BDT),
        ("LK", Currency::INR),
        ("AE", Currency::AED),
        ("SA", Currency::AED),
        ("QA", Currency::AED),
        ("KW", Currency::AED),
        ("BH", Currency::AED),
        ("OM", Currency::AED),
        ("SG", Currency::SGD),
        ("MY", Currency::MYR),
        ("PH", Currency::PHP),
        ("ID", Currency::USD),
        ("TH", Currency::USD),
        ("VN", Currency::USD),
        ("NG", Currency::NGN),
        ("GH", Currency::USD),
        ("KE", Currency::USD),
        ("ZA", Currency::ZAR),
        ("EG", Currency::USD),
        ("BR", Currency::BRL),
        ("MX", Currency::USD),
        ("AR", Currency::USD),
        ("CO", Currency::USD),
        ("CL", Currency::USD),
        ("CN", Currency::USD),
        ("JP", Currency::USD),
        ("KR", Currency::USD),
    ];

    #[test]
    fn mapped_countries_resolve_to_their_currency() {
        for (iso, currency) in MAPPED {
            assert_eq!(currency_for_country(iso), Some(*currency), "{}", iso);
            assert_eq!(resolve_currency_for_country(Some(iso)), *currency, "{}", iso);
        }
    }

    #[test]
    fn every_mapped_country_has_a_name() {
        for (iso, _) in MAPPED {
            assert!(country_name(iso).is_some(), "{}", iso);
        }
    }

    #[test]
    fn unmapped_countries_resolve_to_usd() {
        for iso in ["XX", "CH", "RU", "", "DEU", "1", "D E"] {
            assert_eq!(currency_for_country(iso), None, "{}", iso);
            assert_eq!(resolve_currency_for_country(Some(iso)), Currency::USD);
        }
        assert_eq!(resolve_currency_for_country(None), Currency::USD);
    }

    #[test]
    fn lowercase_codes_are_accepted() {
        assert_eq!(currency_for_country("de"), Some(Currency::EUR));
        assert_eq!(country_name("in"), Some("India"));
    }
}
