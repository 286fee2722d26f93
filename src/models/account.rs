// ============================================================================
// ACCOUNT - Perfil y estadísticas de la cuenta
// ============================================================================

use serde::Deserialize;
use crate::utils::format::format_date;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAccountStats {
    #[serde(default, alias = "loyaltyPoints", alias = "points")]
    pub loyalty_points: Option<i64>,
    #[serde(default, alias = "totalOrders")]
    pub total_orders: Option<i64>,
    #[serde(default, alias = "wishlistCount")]
    pub wishlist_count: Option<i64>,
}

/// Estadísticas de cuenta: nunca ausentes, ausente → 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountStats {
    pub loyalty_points: i64,
    pub total_orders: i64,
    pub wishlist_count: i64,
}

impl AccountStats {
    pub fn from_raw(raw: &RawAccountStats) -> AccountStats {
        AccountStats {
            loyalty_points: raw.loyalty_points.unwrap_or(0),
            total_orders: raw.total_orders.unwrap_or(0),
            wishlist_count: raw.wishlist_count.unwrap_or(0),
        }
    }

    /// Fallback documentado de la página de cuenta: stats a cero
    pub fn zeroed() -> AccountStats {
        AccountStats::default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "memberSince", alias = "createdAt", alias = "created_at")]
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_since: String,
}

impl Profile {
    pub fn from_raw(raw: &RawProfile) -> Profile {
        Profile {
            first_name: raw.first_name.trim().to_string(),
            last_name: raw.last_name.trim().to_string(),
            email: raw.email.trim().to_string(),
            member_since: format_date(&raw.member_since),
        }
    }

    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim().to_string();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_loyalty_points_map_to_zero() {
        let raw: RawAccountStats = serde_json::from_str(r#"{"total_orders":4}"#).unwrap();
        let stats = AccountStats::from_raw(&raw);
        assert_eq!(stats.loyalty_points, 0);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.wishlist_count, 0);
    }

    #[test]
    fn stats_accept_both_spellings() {
        let camel: RawAccountStats = serde_json::from_str(
            r#"{"loyaltyPoints":120,"totalOrders":4,"wishlistCount":7}"#,
        )
        .unwrap();
        let snake: RawAccountStats = serde_json::from_str(
            r#"{"loyalty_points":120,"total_orders":4,"wishlist_count":7}"#,
        )
        .unwrap();
        assert_eq!(AccountStats::from_raw(&camel), AccountStats::from_raw(&snake));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let profile = Profile::from_raw(&RawProfile {
            email: "ana@example.com".to_string(),
            ..Default::default()
        });
        assert_eq!(profile.display_name(), "ana@example.com");
    }
}
