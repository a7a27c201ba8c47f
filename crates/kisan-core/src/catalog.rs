//! Package Catalog
//!
//! The three counselling packages shown on the plans page. Records are
//! compiled in and never mutated; prices are whole rupees exposed as
//! `Decimal`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Icons used by catalog rows
pub mod icons {
    pub const FILE_TEXT: &str = "📄";
    pub const MESSAGE_CIRCLE: &str = "💬";
    pub const GRADUATION_CAP: &str = "🎓";
    pub const CALENDAR: &str = "📅";
    pub const USERS: &str = "👥";
    pub const BOOK_OPEN: &str = "📖";
    pub const CHECK: &str = "✔️";
    pub const STAR: &str = "⭐";
    pub const PHONE: &str = "📞";
    pub const CREDIT_CARD: &str = "💳";
    pub const LIGHTBULB: &str = "💡";
    pub const MAP_PIN: &str = "📍";
}

/// Package tiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKey {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl PackageKey {
    /// Tab order on the plans page
    pub const ALL: [Self; 3] = [Self::Basic, Self::Standard, Self::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn package(self) -> &'static Package {
        match self {
            Self::Basic => &BASIC,
            Self::Standard => &STANDARD,
            Self::Premium => &PREMIUM,
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKey {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(SiteError::UnknownPackage(s.to_string())),
        }
    }
}

/// A line item with an icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub text: &'static str,
    pub icon: &'static str,
}

const fn feature(text: &'static str, icon: &'static str) -> Feature {
    Feature { text, icon }
}

/// Highlight without its own icon; rendered with a check mark
const fn plain(text: &'static str) -> Feature {
    Feature {
        text,
        icon: icons::CHECK,
    }
}

/// Upcoming batch shown under the included list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchInfo {
    pub date: &'static str,
    pub seats_status: &'static str,
}

/// Aggregate review block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Review {
    pub rating: &'static str,
    pub based_on: &'static str,
    pub text: &'static str,
}

/// Closing call-to-action for packages without reviews
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pitch {
    pub heading: &'static str,
    pub body: &'static str,
}

/// One counselling package
#[derive(Debug, PartialEq, Eq)]
pub struct Package {
    pub key: PackageKey,
    /// Display label ("Basic", "Standard", "Premium")
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub included: &'static [Feature],
    cost_rupees: u32,
    original_cost_rupees: Option<u32>,
    pub validity: &'static str,
    pub support_type: Option<&'static str>,
    pub ideal_for: Option<&'static str>,
    pub batch: Option<BatchInfo>,
    pub what_youll_get: &'static [&'static str],
    pub highlights: &'static [Feature],
    pub review: Option<Review>,
    pub pitch: Option<Pitch>,
    pub bonus: Option<&'static str>,
}

impl Package {
    pub fn cost(&self) -> Decimal {
        Decimal::from(self.cost_rupees)
    }

    pub fn original_cost(&self) -> Option<Decimal> {
        self.original_cost_rupees.map(Decimal::from)
    }

    /// Whole-percent discount against the original cost, rounded half up
    pub fn discount_percent(&self) -> Option<Decimal> {
        let original = self.original_cost()?;
        if original <= Decimal::ZERO {
            return None;
        }
        let percent = (Decimal::ONE - self.cost() / original) * Decimal::ONE_HUNDRED;
        Some(percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Badge text, e.g. "17% OFF"
    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent().map(|p| format!("{p}% OFF"))
    }

    /// Price as displayed, e.g. "₹2,500"
    pub fn display_cost(&self) -> String {
        format_inr(self.cost())
    }

    pub fn display_original_cost(&self) -> Option<String> {
        self.original_cost().map(format_inr)
    }

    /// Price as sent with an enrollment, e.g. "₹2500"
    pub fn price_tag(&self) -> String {
        format!("₹{}", self.cost())
    }
}

/// Format rupees with Indian digit grouping (1,00,000)
pub fn format_inr(amount: Decimal) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let amount = amount.abs();
    let whole = amount.trunc().to_string();
    let fraction = (amount - amount.trunc()).normalize();

    let grouped = if whole.len() <= 3 {
        whole
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{tail}", groups.join(","))
    };

    let mut out = String::from(if negative { "-₹" } else { "₹" });
    out.push_str(&grouped);
    if !fraction.is_zero() {
        let digits = fraction.round_dp(2).to_string();
        out.push_str(digits.trim_start_matches('0'));
    }
    out
}

/// Currently selected tab on the plans page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackageTabs {
    selected: PackageKey,
}

impl PackageTabs {
    pub fn new(selected: PackageKey) -> Self {
        Self { selected }
    }

    pub fn select(&mut self, key: PackageKey) {
        self.selected = key;
    }

    pub fn selected(&self) -> PackageKey {
        self.selected
    }

    pub fn current(&self) -> &'static Package {
        self.selected.package()
    }

    pub fn is_selected(&self, key: PackageKey) -> bool {
        self.selected == key
    }
}

pub static BASIC: Package = Package {
    key: PackageKey::Basic,
    label: "Basic",
    title: "Basic Agri Counselling Package",
    subtitle: "Perfect for small landholders or new farmers seeking basic expert guidance.",
    included: &[
        feature("One-time soil & crop advice session (phone-based)", icons::PHONE),
        feature("Recommended cropping pattern based on current season", icons::CALENDAR),
        feature("WhatsApp support for 7 days", icons::MESSAGE_CIRCLE),
        feature("Checklist for fertilizers, seeds & tools", icons::CHECK),
    ],
    cost_rupees: 499,
    original_cost_rupees: None,
    validity: "7 Days",
    support_type: Some("1 phone call + WhatsApp"),
    ideal_for: None,
    batch: None,
    what_youll_get: &[],
    highlights: &[
        plain("Personalized Crop Selection Advice"),
        plain("Basic Fertilizer Use Plan"),
        plain("Free PDF: “Top 5 Mistakes First-Time Farmers Make”"),
    ],
    review: None,
    pitch: Some(Pitch {
        heading: "Ready to Start Your Farming Journey?",
        body: "Our Basic package offers essential guidance to kickstart your agricultural success.",
    }),
    bonus: None,
};

pub static STANDARD: Package = Package {
    key: PackageKey::Standard,
    label: "Standard",
    title: "Standard Agri Counselling Package",
    subtitle: "Best suited for medium-scale farmers seeking structured support for a full crop cycle.",
    included: &[
        feature("Complete seasonal crop planning with expert", icons::GRADUATION_CAP),
        feature("Discussion with family (farmer + parent/owner)", icons::MESSAGE_CIRCLE),
        feature("Organic vs inorganic input strategy (custom)", icons::CHECK),
        feature("Monthly follow-up support via call & chat", icons::PHONE),
        feature("Guidance on subsidy, government schemes", icons::FILE_TEXT),
    ],
    cost_rupees: 2500,
    original_cost_rupees: Some(3000),
    validity: "30 Days",
    support_type: None,
    ideal_for: Some("Vegetables, grains, horticulture farms"),
    batch: Some(BatchInfo {
        date: "25 May 2025",
        seats_status: "Last few seats left!",
    }),
    what_youll_get: &[
        "Complete Live Sessions for Admission Process",
        "Exclusive Importance of Branch Sessions",
        "Both Call & Chat Support",
        "Complete Support in FY Engineering",
    ],
    highlights: &[
        feature("24/7 Admission Support", icons::USERS),
        feature("Downloadable Resources", icons::BOOK_OPEN),
        feature("Dedicated Mentor", icons::GRADUATION_CAP),
        feature("FY Engineering Support", icons::GRADUATION_CAP),
    ],
    review: Some(Review {
        rating: "4.8/5",
        based_on: "65 reviews",
        text: "This Counselling Package provided me excellent guidance for my agricultural planning. The support team was very responsive.",
    }),
    pitch: None,
    bonus: None,
};

pub static PREMIUM: Package = Package {
    key: PackageKey::Premium,
    label: "Premium",
    title: "Premium Agri Counselling Package",
    subtitle: "Designed for serious farmers or agri-entrepreneurs planning large-scale or long-term farming.",
    included: &[
        feature("Dedicated agri-mentor for 2 months", icons::GRADUATION_CAP),
        feature("In-depth soil & weather report review", icons::FILE_TEXT),
        feature(
            "Farm-specific consultation on irrigation, pest control, and market linkage",
            icons::MAP_PIN,
        ),
        feature("WhatsApp, video call, and voice support", icons::MESSAGE_CIRCLE),
        feature("Support for organic transition, certification", icons::CHECK),
    ],
    cost_rupees: 4800,
    original_cost_rupees: None,
    validity: "60 Days",
    support_type: None,
    ideal_for: None,
    batch: None,
    what_youll_get: &[],
    highlights: &[
        plain("Customized seasonal crop rotation map"),
        plain("24/7 Expert Help Desk Access"),
        plain("PDF Receipts + Farm Plan Report"),
        plain("Bonus: Government Subsidy Tracker Tool"),
    ],
    review: None,
    pitch: Some(Pitch {
        heading: "Unlock Your Farm's Full Potential",
        body: "The Premium package provides unparalleled expert support for large-scale and long-term agricultural prosperity.",
    }),
    bonus: Some("“Farming for Profit” Guidebook PDF"),
};
