//! Deterministic feedback corpora.
//!
//! All timestamps are offsets from [`BASE_TS`] (2024-01-15T00:00:00Z), so
//! every scenario is reproducible and can be scored with an explicit `now`.

use chrono::{Duration, TimeZone, Utc};
use skillguard_core::models::{Feedback, Timestamp};

/// 2024-01-15T00:00:00Z in epoch milliseconds.
pub const BASE_TS: Timestamp = 1_705_276_800_000;

/// The organically rated flagship agent.
pub const GMAIL_AGENT: &str = "gmail-integration";

/// Other honestly rated agents of the community registry.
pub const COMMUNITY_AGENTS: [&str; 10] = [
    "calendar-sync",
    "slack-notifier",
    "pdf-parser",
    "web-search",
    "code-runner",
    "sql-helper",
    "image-resizer",
    "translate",
    "weather",
    "rss-reader",
];

pub const COMMUNITY_SIZE: usize = 50;
/// Community members who rated [`GMAIL_AGENT`].
pub const GMAIL_RATERS: usize = 30;

pub const SYBIL_RING: [&str; 5] = ["sybil-1", "sybil-2", "sybil-3", "sybil-4", "sybil-5"];
/// Secondary address of the ring operator; rates `sybil-1` only.
pub const SYBIL_ALT: &str = "sybil-1-alt";

/// Reviewers that rate the same skills alike without rating each other.
pub const REVIEW_RING: [&str; 4] = ["0xring-a", "0xring-b", "0xring-c", "0xring-d"];
pub const REVIEW_RING_TARGETS: [&str; 3] = ["pdf-parser", "sql-helper", "rss-reader"];

pub const LOCKSTEP_LEADER: &str = "0xbot-lead";
pub const LOCKSTEP_SHADOW: &str = "0xbot-shadow";
pub const CLOCKWORK_BOT: &str = "0xbot-clock";

/// `BASE_TS` shifted by `offset`.
pub fn at(offset: Duration) -> Timestamp {
    BASE_TS + offset.num_milliseconds()
}

/// A "now" comfortably after every scenario event.
pub fn scoring_now() -> Timestamp {
    at(Duration::days(10))
}

/// `BASE_TS` as a UTC datetime, for assertions on `Feedback::recorded_at`.
pub fn base_datetime() -> chrono::DateTime<Utc> {
    Utc.timestamp_millis_opt(BASE_TS)
        .single()
        .unwrap_or_else(|| panic!("BASE_TS out of range"))
}

pub fn community_submitter(i: usize) -> String {
    format!("0xcommunity{i:02}")
}

/// Agents rated by community member `i`, in rating order.
///
/// No two members share a target set, so pairwise Jaccard similarity never
/// exceeds 0.5.
pub fn community_targets(i: usize) -> [&'static str; 3] {
    if i < GMAIL_RATERS {
        let a = i % 10;
        let b = (a + 1 + i / 10) % 10;
        [GMAIL_AGENT, COMMUNITY_AGENTS[a], COMMUNITY_AGENTS[b]]
    } else {
        let j = i - GMAIL_RATERS;
        let a = j % 10;
        [
            COMMUNITY_AGENTS[a],
            COMMUNITY_AGENTS[(a + 4) % 10],
            COMMUNITY_AGENTS[(a + 5 + j / 10) % 10],
        ]
    }
}

/// 50 well-aged, independent submitters rating 11 agents over about six days.
///
/// Member `i` first appears `i * 53` minutes after `BASE_TS` and rates again
/// two and four days later, with a small per-member jitter. Values given to
/// [`GMAIL_AGENT`] span 70–95.
pub fn organic_community() -> Vec<Feedback> {
    let mut feedback = Vec::with_capacity(COMMUNITY_SIZE * 3);
    for i in 0..COMMUNITY_SIZE {
        let submitter = community_submitter(i);
        for (k, agent) in community_targets(i).into_iter().enumerate() {
            let minutes = (i * 53 + ((i * k) % 7) * 7) as i64;
            let timestamp = at(Duration::days(2 * k as i64) + Duration::minutes(minutes));
            let value = if agent == GMAIL_AGENT {
                70 + (i * 17 + 5) % 26
            } else {
                60 + (i * 13 + k * 29) % 36
            };
            feedback.push(Feedback::with_id(
                format!("organic-{i:02}-{k}"),
                agent,
                submitter.as_str(),
                value as f64,
                timestamp,
            ));
        }
    }
    feedback
}

/// Five addresses rating each other 85–98 within two hours on day six, plus
/// one alt address rating `sybil-1`.
pub fn sybil_ring() -> Vec<Feedback> {
    let start = Duration::days(6);
    let mut feedback = Vec::with_capacity(21);
    let mut slot = 0i64;
    for (s, submitter) in SYBIL_RING.iter().enumerate() {
        for (t, agent) in SYBIL_RING.iter().enumerate() {
            if s == t {
                continue;
            }
            let value = 85 + (s * 5 + t * 3) % 14;
            feedback.push(Feedback::with_id(
                format!("ring-{}-{}", s + 1, t + 1),
                *agent,
                *submitter,
                value as f64,
                at(start + Duration::minutes(slot * 6)),
            ));
            slot += 1;
        }
    }
    feedback.push(Feedback::with_id(
        "ring-alt",
        SYBIL_RING[0],
        SYBIL_ALT,
        98.0,
        at(start + Duration::minutes(118)),
    ));
    feedback
}

/// `count` perfect ratings of `agent_id` from fresh addresses, three seconds apart.
pub fn velocity_burst(agent_id: &str, start: Timestamp, count: usize) -> Vec<Feedback> {
    (0..count)
        .map(|n| {
            Feedback::with_id(
                format!("burst-{agent_id}-{n:02}"),
                agent_id,
                format!("0xburst-{agent_id}-{n:02}"),
                100.0,
                start + n as i64 * 3_000,
            )
        })
        .collect()
}

/// Two scripted accounts that rate the same agents two seconds apart, and a
/// third that rates every twenty minutes.
pub fn timing_bots() -> Vec<Feedback> {
    let start = Duration::days(7);
    let mut feedback = Vec::new();
    for k in 0..4usize {
        let agent = COMMUNITY_AGENTS[k];
        let offset = start + Duration::hours(5 * k as i64) + Duration::minutes((k * k * 11) as i64);
        feedback.push(Feedback::with_id(
            format!("lead-{k}"),
            agent,
            LOCKSTEP_LEADER,
            100.0,
            at(offset),
        ));
        feedback.push(Feedback::with_id(
            format!("shadow-{k}"),
            agent,
            LOCKSTEP_SHADOW,
            100.0,
            at(offset + Duration::seconds(2)),
        ));
    }
    let clock_start = start + Duration::days(1);
    for k in 0..6usize {
        feedback.push(Feedback::with_id(
            format!("clock-{k}"),
            COMMUNITY_AGENTS[k],
            CLOCKWORK_BOT,
            100.0,
            at(clock_start + Duration::minutes(20 * k as i64)),
        ));
    }
    feedback
}

/// Four reviewers giving [`REVIEW_RING_TARGETS`] near-identical top marks,
/// hours apart so their timing stays unremarkable.
pub fn review_ring() -> Vec<Feedback> {
    let start = Duration::days(5);
    let mut feedback = Vec::new();
    for (r, reviewer) in REVIEW_RING.iter().enumerate() {
        for (t, agent) in REVIEW_RING_TARGETS.iter().enumerate() {
            let offset = start + Duration::hours((r * 7 + t * 3) as i64) + Duration::minutes((r * 13) as i64);
            feedback.push(Feedback::with_id(
                format!("review-{r}-{t}"),
                *agent,
                *reviewer,
                (96 + (r + t) % 4) as f64,
                at(offset),
            ));
        }
    }
    feedback
}

/// The organic community plus the Sybil ring.
pub fn combined_registry() -> Vec<Feedback> {
    let mut feedback = organic_community();
    feedback.extend(sybil_ring());
    feedback
}

/// The organic community plus a 15-entry burst against `weather` on day six.
pub fn burst_registry() -> Vec<Feedback> {
    let mut feedback = organic_community();
    feedback.extend(velocity_burst("weather", at(Duration::days(6)), 15));
    feedback
}

/// Entries of `feedback` rating `agent_id`.
pub fn for_agent(feedback: &[Feedback], agent_id: &str) -> Vec<Feedback> {
    feedback.iter().filter(|f| f.agent_id == agent_id).cloned().collect()
}
