// ABOUTME: Membership plans and subscription records
// ABOUTME: Returned by the memberships listing and subscribe endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use serde::{Deserialize, Serialize};

/// Monthly and yearly price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipPrice {
    /// Price per month
    pub monthly: f64,
    /// Price per year
    pub yearly: f64,
}

impl MembershipPrice {
    /// Percentage saved by paying yearly, rounded down
    #[must_use]
    pub fn yearly_savings_percent(&self) -> u32 {
        let full_year = self.monthly * 12.0;
        if full_year <= 0.0 || self.yearly >= full_year {
            return 0;
        }
        let saved = ((full_year - self.yearly) / full_year * 100.0).floor();
        // Bounded to 0..=100 by the guard above
        saved as u32
    }
}

/// Membership plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Plan name
    pub name: String,
    /// Short description
    pub description: String,
    /// Pricing
    pub price: MembershipPrice,
    /// Included features
    #[serde(default)]
    pub features: Vec<String>,
    /// Most chosen plan
    #[serde(default)]
    pub popular: bool,
    /// Recommended plan
    #[serde(default)]
    pub recommended: bool,
}

/// Lifecycle of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Running
    Active,
    /// Awaiting payment
    Pending,
    /// Ended by the user
    Cancelled,
}

/// Payment state of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled
    Paid,
    /// In flight
    Pending,
    /// Declined
    Failed,
}

/// Subscription created by `POST /memberships/subscribe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSubscription {
    /// Identifier
    pub id: String,
    /// Subscribed plan
    pub plan_id: String,
    /// Subscriber
    pub user_id: String,
    /// Lifecycle state
    pub status: SubscriptionStatus,
    /// Start date
    pub start_date: String,
    /// End date
    pub end_date: String,
    /// Payment state
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yearly_savings() {
        let price = MembershipPrice {
            monthly: 10.0,
            yearly: 100.0,
        };
        assert_eq!(price.yearly_savings_percent(), 16);
        let no_discount = MembershipPrice {
            monthly: 10.0,
            yearly: 130.0,
        };
        assert_eq!(no_discount.yearly_savings_percent(), 0);
    }
}
