// ABOUTME: Supplement listing with search, category, and goal filters, plus the detail page
// ABOUTME: Cards preview the first benefits; unknown ids link back to the listing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{Lookup, PanelState};
use crate::data::FitnessData;
use gym_sharks_core::constants::limits::CARD_BENEFITS;
use gym_sharks_core::constants::routes;
use gym_sharks_core::models::{Supplement, SupplementCategory, SupplementTarget};
use gym_sharks_core::search::SupplementFilter;
use serde::Serialize;

/// Supplement as shown in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementCard {
    /// Identifier for the detail link
    pub id: String,
    /// Product name
    pub name: String,
    /// Category badge
    pub category: SupplementCategory,
    /// Short description
    pub description: String,
    /// First benefits
    pub benefits: Vec<String>,
    /// Goals it is recommended for
    pub recommended_for: Vec<SupplementTarget>,
    /// Popular badge
    pub is_popular: bool,
}

impl From<&Supplement> for SupplementCard {
    fn from(supplement: &Supplement) -> Self {
        Self {
            id: supplement.id.clone(),
            name: supplement.name.clone(),
            category: supplement.category,
            description: supplement.description.clone(),
            benefits: supplement.benefit_preview(CARD_BENEFITS).to_vec(),
            recommended_for: supplement.recommended_for.clone(),
            is_popular: supplement.is_popular,
        }
    }
}

/// Load the listing and apply `filter`
pub async fn load_list(
    data: &dyn FitnessData,
    filter: &SupplementFilter,
) -> PanelState<Vec<SupplementCard>> {
    let cards = data.supplements().await.map(|supplements| {
        filter
            .apply(&supplements)
            .into_iter()
            .map(SupplementCard::from)
            .collect()
    });
    PanelState::from_result(cards)
}

/// Load the supplement with id `id`
pub async fn load_detail(data: &dyn FitnessData, id: &str) -> PanelState<Lookup<Supplement>> {
    let lookup = data.supplement(id).await.map(|supplement| {
        supplement.map_or(
            Lookup::NotFound {
                back_link: routes::SUPPLEMENTS,
            },
            Lookup::Found,
        )
    });
    PanelState::from_result(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    #[tokio::test]
    async fn test_cards_preview_two_benefits() {
        let data = MockData::embedded().unwrap();
        let cards = load_list(&data, &SupplementFilter::default()).await;
        let cards = cards.ready().unwrap();
        assert_eq!(cards.len(), 20);
        assert!(cards.iter().all(|card| card.benefits.len() <= CARD_BENEFITS));
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let data = MockData::embedded().unwrap();
        let filter = SupplementFilter {
            query: Some("protein".to_owned()),
            category: Some(SupplementCategory::Protein),
            recommended_for: Some(SupplementTarget::MuscleGain),
        };
        let cards = load_list(&data, &filter).await;
        let cards = cards.ready().unwrap();
        assert!(!cards.is_empty());
        assert!(cards
            .iter()
            .all(|card| card.category == SupplementCategory::Protein));

        let nobody = SupplementFilter {
            recommended_for: Some(SupplementTarget::Maintenance),
            ..SupplementFilter::default()
        };
        assert!(load_list(&data, &nobody).await.ready().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detail_lookup() {
        let data = MockData::embedded().unwrap();
        let found = load_detail(&data, "1").await;
        assert_eq!(
            found.ready().and_then(Lookup::found).map(|s| s.name.as_str()),
            Some("Whey Protein Isolate")
        );
        let missing = load_detail(&data, "999").await;
        assert!(matches!(
            missing.ready(),
            Some(Lookup::NotFound { back_link: "/supplements" })
        ));
    }
}
