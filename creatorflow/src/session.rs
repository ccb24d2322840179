//! Per-visit currency state of the pricing section.
//!
//! A session starts [`Resolution::Pending`] and displays default currency prices while
//! the geolocation lookup is outstanding. The lookup result moves it to
//! [`Resolution::Auto`] or [`Resolution::Fallback`], and a manual pick from the
//! selector moves it to [`Resolution::Manual`] from any state. A manual pick is never
//! overwritten by a lookup result arriving afterwards.

use crate::pricing::{currency_for_country, plans, Currency, PricedPlan, Tier};

/// Identifies one visit of the pricing section. Lookup results carry the id of the
/// session that started them, so results for a torn-down session can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(uuid::Uuid);

impl SessionId {
    fn new() -> Self {
        SessionId(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Pending,
    Auto {
        currency: Currency,
        country: String,
    },
    Fallback,
    Manual {
        currency: Currency,
        /// Country the lookup detected, kept for the auto-detected indicator.
        detected_country: Option<String>,
    },
}

/// What happened to a lookup result handed to [`CurrencySession::on_geo_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoOutcome {
    Detected(Currency),
    FellBack,
    /// The user picked a currency before the lookup completed; only the detected
    /// country was recorded.
    KeptManual,
    /// The result belongs to another session or the lookup already completed.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct CurrencySession {
    id: SessionId,
    resolution: Resolution,
    lookup_outstanding: bool,
    dropdown_open: bool,
}

impl Default for CurrencySession {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencySession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            resolution: Resolution::Pending,
            lookup_outstanding: true,
            dropdown_open: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn is_loading(&self) -> bool {
        self.lookup_outstanding
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn active_currency(&self) -> Currency {
        match &self.resolution {
            Resolution::Pending | Resolution::Fallback => Currency::default(),
            Resolution::Auto { currency, .. } | Resolution::Manual { currency, .. } => *currency,
        }
    }

    pub fn detected_country(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Auto { country, .. } => Some(country.as_str()),
            Resolution::Manual {
                detected_country, ..
            } => detected_country.as_deref(),
            Resolution::Pending | Resolution::Fallback => None,
        }
    }

    /// Whether the "auto-detected" indicator is shown.
    pub fn shows_auto_detected(&self) -> bool {
        !self.lookup_outstanding && self.detected_country().is_some()
    }

    /// Applies the result of the geolocation lookup started for session `id`.
    ///
    /// `country` is `None` when the lookup failed for any reason. Countries missing from
    /// the country table are handled like a failed lookup.
    pub fn on_geo_result(&mut self, id: SessionId, country: Option<String>) -> GeoOutcome {
        if id != self.id {
            log::debug!(
                "Discarding geolocation result of session {}, current session is {}",
                id,
                self.id
            );
            return GeoOutcome::Discarded;
        }
        if !self.lookup_outstanding {
            log::debug!("Geolocation result received twice for session {}", id);
            return GeoOutcome::Discarded;
        }
        self.lookup_outstanding = false;

        let detected = country.and_then(|country| {
            let country = country.trim().to_uppercase();
            currency_for_country(&country).map(|currency| (country, currency))
        });

        if let Resolution::Manual {
            detected_country, ..
        } = &mut self.resolution
        {
            *detected_country = detected.map(|(country, _)| country);
            return GeoOutcome::KeptManual;
        }

        match detected {
            Some((country, currency)) => {
                self.resolution = Resolution::Auto { currency, country };
                GeoOutcome::Detected(currency)
            }
            None => {
                self.resolution = Resolution::Fallback;
                GeoOutcome::FellBack
            }
        }
    }

    /// Makes `currency` the active currency until the next manual pick or the end of
    /// the session, and closes the selector.
    pub fn select_manually(&mut self, currency: Currency) {
        let detected_country = self.detected_country().map(str::to_string);
        self.resolution = Resolution::Manual {
            currency,
            detected_country,
        };
        self.dropdown_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Price shown on the card of `tier`. Pending sessions show default currency prices.
    pub fn displayed_price(&self, tier: Tier) -> &'static str {
        self.active_currency().config().price(tier)
    }

    pub fn plans(&self) -> Vec<PricedPlan> {
        plans(self.active_currency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(session: &CurrencySession) -> Vec<&'static str> {
        Tier::ALL
            .iter()
            .map(|t| session.displayed_price(*t))
            .collect()
    }

    #[test]
    fn starts_pending_with_default_currency() {
        let session = CurrencySession::new();
        assert_eq!(session.resolution(), &Resolution::Pending);
        assert_eq!(session.active_currency(), Currency::USD);
        assert!(session.is_loading());
        assert!(!session.is_dropdown_open());
        assert!(!session.shows_auto_detected());
        assert_eq!(prices(&session), vec!["$299", "$599", "$999"]);
    }

    #[test]
    fn detected_country_switches_currency() {
        let mut session = CurrencySession::new();
        let outcome = session.on_geo_result(session.id(), Some("DE".to_string()));
        assert_eq!(outcome, GeoOutcome::Detected(Currency::EUR));
        assert_eq!(session.active_currency(), Currency::EUR);
        assert_eq!(session.displayed_price(Tier::Starter), "€279");
        assert!(!session.is_loading());
        assert_eq!(session.detected_country(), Some("DE"));
        assert!(session.shows_auto_detected());
    }

    #[test]
    fn unknown_country_falls_back() {
        let mut session = CurrencySession::new();
        let outcome = session.on_geo_result(session.id(), Some("XX".to_string()));
        assert_eq!(outcome, GeoOutcome::FellBack);
        assert_eq!(session.resolution(), &Resolution::Fallback);
        assert_eq!(session.active_currency(), Currency::USD);
        assert_eq!(session.displayed_price(Tier::Starter), "$299");
        assert!(!session.is_loading());
        assert_eq!(session.detected_country(), None);
        assert!(!session.shows_auto_detected());
    }

    #[test]
    fn failed_lookup_is_same_as_unknown_country() {
        let mut failed = CurrencySession::new();
        failed.on_geo_result(failed.id(), None);
        let mut unknown = CurrencySession::new();
        unknown.on_geo_result(unknown.id(), Some("XX".to_string()));

        assert_eq!(failed.resolution(), unknown.resolution());
        assert_eq!(prices(&failed), prices(&unknown));
        assert_eq!(failed.shows_auto_detected(), unknown.shows_auto_detected());
        assert_eq!(failed.is_loading(), unknown.is_loading());
    }

    #[test]
    fn manual_pick_overrides_any_state() {
        let mut session = CurrencySession::new();
        session.on_geo_result(session.id(), Some("GB".to_string()));
        session.toggle_dropdown();
        assert!(session.is_dropdown_open());

        session.select_manually(Currency::INR);
        assert_eq!(prices(&session), vec!["₹9,999", "₹19,999", "₹34,999"]);
        assert!(!session.is_dropdown_open());
        assert_eq!(session.detected_country(), Some("GB"));

        session.select_manually(Currency::ZAR);
        assert_eq!(session.active_currency(), Currency::ZAR);
    }

    #[test]
    fn manual_pick_while_pending_shows_prices_immediately() {
        let mut session = CurrencySession::new();
        session.select_manually(Currency::INR);
        assert!(session.is_loading());
        assert_eq!(prices(&session), vec!["₹9,999", "₹19,999", "₹34,999"]);
    }

    #[test]
    fn late_lookup_does_not_overwrite_manual_pick() {
        let mut session = CurrencySession::new();
        session.select_manually(Currency::GBP);

        let outcome = session.on_geo_result(session.id(), Some("DE".to_string()));
        assert_eq!(outcome, GeoOutcome::KeptManual);
        assert_eq!(session.active_currency(), Currency::GBP);
        assert!(!session.is_loading());
        assert_eq!(session.detected_country(), Some("DE"));
    }

    #[test]
    fn late_failed_lookup_keeps_manual_pick() {
        let mut session = CurrencySession::new();
        session.select_manually(Currency::AUD);
        session.on_geo_result(session.id(), None);
        assert_eq!(session.active_currency(), Currency::AUD);
        assert!(!session.shows_auto_detected());
    }

    #[test]
    fn result_of_another_session_is_discarded() {
        let old = CurrencySession::new();
        let mut session = CurrencySession::new();
        let outcome = session.on_geo_result(old.id(), Some("IN".to_string()));
        assert_eq!(outcome, GeoOutcome::Discarded);
        assert_eq!(session.resolution(), &Resolution::Pending);
        assert!(session.is_loading());
    }

    #[test]
    fn second_result_is_discarded() {
        let mut session = CurrencySession::new();
        session.on_geo_result(session.id(), Some("IN".to_string()));
        let outcome = session.on_geo_result(session.id(), Some("DE".to_string()));
        assert_eq!(outcome, GeoOutcome::Discarded);
        assert_eq!(session.active_currency(), Currency::INR);
    }

    #[test]
    fn new_session_restarts_pending() {
        let mut session = CurrencySession::new();
        let id = session.id();
        session.select_manually(Currency::EUR);

        session = CurrencySession::new();
        assert_ne!(session.id(), id);
        assert_eq!(session.resolution(), &Resolution::Pending);
        assert_eq!(session.active_currency(), Currency::USD);
    }

    #[test]
    fn lowercase_country_is_normalized() {
        let mut session = CurrencySession::new();
        session.on_geo_result(session.id(), Some("in".to_string()));
        assert_eq!(session.detected_country(), Some("IN"));
        assert_eq!(session.active_currency(), Currency::INR);
    }

    #[test]
    fn plans_carry_displayed_prices() {
        let mut session = CurrencySession::new();
        assert_eq!(
            session.plans().iter().map(|c| c.price).collect::<Vec<_>>(),
            vec!["$299", "$599", "$999"]
        );
        session.select_manually(Currency::BRL);
        let cards = session.plans();
        assert_eq!(cards[2].price, "R$4,999");
        assert_eq!(cards[2].plan.tier, Tier::Premium);
    }
}
