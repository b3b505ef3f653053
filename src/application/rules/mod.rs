pub mod fast_selling;
pub mod just_announced;
pub mod limited_seats;
pub mod popular_choice;
pub mod top_rated;

use std::collections::HashSet;

use crate::domain::ports::badge_rule::BadgeRule;

/// Every rule the engine knows, in the order the original passes ran.
pub fn default_rules() -> Vec<Box<dyn BadgeRule>> {
    vec![
        Box::new(top_rated::TopRatedRule),
        Box::new(popular_choice::PopularChoiceRule),
        Box::new(just_announced::JustAnnouncedRule),
        Box::new(limited_seats::LimitedSeatsRule),
        Box::new(fast_selling::FastSellingRule),
    ]
}

/// Top-decile selection shared by the percentile rules: stable descending
/// sort by score with event-id tie break, then the first
/// `max(1, population/10)` qualify. `population` is the size of the
/// aggregation the cutoff is derived from, which may exceed the number of
/// rankable entries when some were skipped for invalid data.
pub(crate) fn top_share(mut scored: Vec<(String, f64)>, population: usize) -> HashSet<String> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    let cutoff = std::cmp::max(1, population / 10);
    scored.into_iter().take(cutoff).map(|(id, _)| id).collect()
}
