use serde::Serialize;

/// Dashboard figures. Static until usage is persisted somewhere.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub total_chats: u32,
    pub total_surveys: u32,
    pub top_queries: &'static [&'static str],
    pub recommendation_counts: RecommendationCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationCounts {
    pub crop: u32,
    pub health: u32,
    pub life: u32,
    pub micro: u32,
}

pub fn admin_stats() -> AdminStats {
    AdminStats {
        total_chats: 1245,
        total_surveys: 312,
        top_queries: &[
            "How to file a claim?",
            "What does my policy cover?",
            "How to renew my policy?",
            "Documents required for claim",
        ],
        recommendation_counts: RecommendationCounts {
            crop: 420,
            health: 310,
            life: 150,
            micro: 95,
        },
    }
}
