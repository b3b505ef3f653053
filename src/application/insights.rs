//! Per-event engagement insights over a rolling window: totals, recency,
//! week-over-week growth, peak day and percentile rank for one interaction
//! kind (likes or clicks) at a time.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::ports::event_store::EventStore;
use crate::domain::ports::interaction_store::InteractionStore;
use crate::domain::values::interaction_kind::InteractionKind;

/// Growth is only meaningful once two full comparison weeks exist.
const GROWTH_MINIMUM_AGE_DAYS: i64 = 14;

#[derive(Debug, Clone, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct EngagementReport {
    pub event_name: String,
    pub kind: InteractionKind,
    /// Total interactions of this kind, all time.
    pub total: usize,
    /// Days since the most recent interaction; 0 when there are none.
    pub last_days_ago: i64,
    /// Week-over-week growth percentage. 100 when the prior week was empty
    /// and this week was not, 0 when both were empty or the event is younger
    /// than two weeks.
    pub weekly_growth: i64,
    /// Days since the single busiest day; ties resolve to the most recent
    /// tied day. 0 when there are no interactions.
    pub peak_days_ago: i64,
    pub peak_count: usize,
    /// 1-indexed rank among all events by this count, as a percentage of
    /// the event population. 0 when there are no events.
    pub percentile_rank: i64,
    /// Day-bucketed counts, chronological.
    pub daily_series: Vec<DailyCount>,
}

pub struct InsightsUseCase {
    events: Arc<dyn EventStore>,
    interactions: Arc<dyn InteractionStore>,
}

impl InsightsUseCase {
    pub fn new(events: Arc<dyn EventStore>, interactions: Arc<dyn InteractionStore>) -> Self {
        Self {
            events,
            interactions,
        }
    }

    pub fn execute(
        &self,
        event_id: &str,
        kind: InteractionKind,
        now: DateTime<Utc>,
    ) -> Result<EngagementReport, DomainError> {
        let event = self
            .events
            .get_by_id(event_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Event {event_id} not found")))?;

        let (timestamps, counts): (Vec<DateTime<Utc>>, Vec<(String, usize)>) = match kind {
            InteractionKind::Like => (
                self.interactions
                    .likes_for_event(event_id)?
                    .into_iter()
                    .map(|l| l.created_at)
                    .collect(),
                self.interactions.like_counts()?,
            ),
            InteractionKind::Click => (
                self.interactions
                    .clicks_for_event(event_id)?
                    .into_iter()
                    .map(|c| c.created_at)
                    .collect(),
                self.interactions.click_counts()?,
            ),
            InteractionKind::Order => {
                return Err(DomainError::InvalidInput(
                    "insights cover likes and clicks".to_string(),
                ))
            }
        };

        let all_events = self.events.list()?;
        let counts: HashMap<String, usize> = counts.into_iter().collect();
        Ok(build_report(&event, kind, &timestamps, &counts, &all_events, now))
    }
}

fn build_report(
    event: &Event,
    kind: InteractionKind,
    timestamps: &[DateTime<Utc>],
    counts_by_event: &HashMap<String, usize>,
    all_events: &[Event],
    now: DateTime<Utc>,
) -> EngagementReport {
    let total = timestamps.len();

    let last_days_ago = timestamps
        .iter()
        .max()
        .map(|latest| (now - *latest).num_days())
        .unwrap_or(0);

    let weekly_growth = weekly_growth(event, timestamps, now);

    let mut daily: HashMap<NaiveDate, usize> = HashMap::new();
    for timestamp in timestamps {
        *daily.entry(timestamp.date_naive()).or_default() += 1;
    }

    let (peak_days_ago, peak_count) = match daily.values().max().copied() {
        Some(peak_count) => {
            let peak_day = daily
                .iter()
                .filter(|(_, count)| **count == peak_count)
                .map(|(day, _)| *day)
                .max()
                .expect("non-empty daily buckets have a peak day");
            ((now.date_naive() - peak_day).num_days(), peak_count)
        }
        None => (0, 0),
    };

    let mut daily_series: Vec<DailyCount> = daily
        .into_iter()
        .map(|(day, count)| DailyCount { day, count })
        .collect();
    daily_series.sort_by_key(|d| d.day);

    EngagementReport {
        event_name: event.title.clone(),
        kind,
        total,
        last_days_ago,
        weekly_growth,
        peak_days_ago,
        peak_count,
        percentile_rank: percentile_rank(&event.id, counts_by_event, all_events),
        daily_series,
    }
}

fn weekly_growth(event: &Event, timestamps: &[DateTime<Utc>], now: DateTime<Utc>) -> i64 {
    if (now - event.created_at).num_days() < GROWTH_MINIMUM_AGE_DAYS {
        return 0;
    }
    let this_week_start = now - Duration::days(7);
    let last_week_start = now - Duration::days(14);
    let this_week = timestamps.iter().filter(|t| **t >= this_week_start).count();
    let last_week = timestamps
        .iter()
        .filter(|t| **t >= last_week_start && **t < this_week_start)
        .count();

    if last_week == 0 {
        if this_week > 0 {
            100
        } else {
            0
        }
    } else {
        ((this_week as f64 - last_week as f64) / last_week as f64 * 100.0).round() as i64
    }
}

/// 1-indexed rank of the event after sorting all events by count descending
/// (event-id tie break), expressed as `round(rank / total × 100)`.
fn percentile_rank(
    event_id: &str,
    counts_by_event: &HashMap<String, usize>,
    all_events: &[Event],
) -> i64 {
    let total_events = all_events.len();
    if total_events == 0 {
        return 0;
    }

    let mut ranked: Vec<(&str, usize)> = all_events
        .iter()
        .map(|e| {
            (
                e.id.as_str(),
                counts_by_event.get(&e.id).copied().unwrap_or(0),
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let rank = ranked
        .iter()
        .position(|(id, _)| *id == event_id)
        .map(|i| i + 1)
        .unwrap_or(total_events);

    (rank as f64 / total_events as f64 * 100.0).round() as i64
}
