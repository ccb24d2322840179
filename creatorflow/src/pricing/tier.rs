use super::currency::Currency;

/// The three service packages every offering is priced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Starter,
    Growth,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Growth, Tier::Premium];

    pub fn index(&self) -> usize {
        match self {
            Tier::Starter => 0,
            Tier::Growth => 1,
            Tier::Premium => 2,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Starter => write!(f, "Starter"),
            Tier::Growth => write!(f, "Growth"),
            Tier::Premium => write!(f, "Premium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub tier: Tier,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
    pub call_to_action: &'static str,
}

impl Plan {
    pub fn of(tier: Tier) -> Plan {
        match tier {
            Tier::Starter => Plan {
                tier,
                description: "Perfect for individuals and creators starting out online.",
                features: &[
                    "3–5 page website",
                    "Mobile responsive design",
                    "Contact form",
                    "Basic SEO setup",
                    "1 revision round",
                ],
                featured: false,
                call_to_action: "Get Started",
            },
            Tier::Growth => Plan {
                tier,
                description: "Ideal for small businesses ready to make a real impression.",
                features: &[
                    "Up to 8 pages",
                    "Custom design & animations",
                    "Contact form + integrations",
                    "Full SEO optimization",
                    "2 revision rounds",
                    "Social media links & setup",
                ],
                featured: true,
                call_to_action: "Most Popular",
            },
            Tier::Premium => Plan {
                tier,
                description: "For brands that want a fully custom, high-impact digital presence.",
                features: &[
                    "Unlimited pages",
                    "Advanced animations & interactions",
                    "CMS integration",
                    "Full SEO + performance audit",
                    "Unlimited revisions",
                    "Priority support",
                ],
                featured: false,
                call_to_action: "Go Premium",
            },
        }
    }
}

/// A plan as shown on a pricing card, with the price localized to a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedPlan {
    pub plan: Plan,
    pub price: &'static str,
}

/// Pricing cards in tier order for the given currency.
pub fn plans(currency: Currency) -> Vec<PricedPlan> {
    let config = currency.config();
    Tier::ALL
        .iter()
        .map(|tier| PricedPlan {
            plan: Plan::of(*tier),
            price: config.price(*tier),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_in_tier_order() {
        let cards = plans(Currency::USD);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].plan.tier, Tier::Starter);
        assert_eq!(cards[1].plan.tier, Tier::Growth);
        assert_eq!(cards[2].plan.tier, Tier::Premium);
        assert_eq!(
            cards.iter().map(|c| c.price).collect::<Vec<_>>(),
            vec!["$299", "$599", "$999"]
        );
    }

    #[test]
    fn only_growth_is_featured() {
        for tier in Tier::ALL {
            assert_eq!(Plan::of(tier).featured, tier == Tier::Growth);
        }
    }

    #[test]
    fn plans_follow_currency() {
        let cards = plans(Currency::EUR);
        assert_eq!(cards[0].price, "€279");
        assert_eq!(cards[1].price, "€549");
        assert_eq!(cards[2].price, "€919");
    }
}
