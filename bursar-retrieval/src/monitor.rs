//! Running performance counters and the derived efficiency grade.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Ordinal grade summarizing cache efficiency and latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Threshold table, evaluated top to bottom; first match wins.
    pub fn from_metrics(avg_response_time: f64, hit_rate: f64) -> Self {
        if avg_response_time < 1.0 && hit_rate > 0.8 {
            Grade::APlus
        } else if avg_response_time < 2.0 && hit_rate > 0.6 {
            Grade::A
        } else if avg_response_time < 3.0 && hit_rate > 0.4 {
            Grade::B
        } else if avg_response_time < 4.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        f.write_str(label)
    }
}

#[derive(Default)]
struct Counters {
    total_queries: u64,
    cache_hits: u64,
    cache_misses: u64,
    response_times: Vec<f64>,
}

/// Snapshot of the running counters.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Recomputed from the full response-time history.
    pub avg_response_time: f64,
    pub hit_rate: f64,
    pub grade: Grade,
    pub generated_at: DateTime<Utc>,
}

/// Mutex-guarded counters, updated on every engine call.
#[derive(Default)]
pub struct PerformanceMonitor {
    counters: Mutex<Counters>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call's elapsed wall-clock time and hit/miss outcome.
    pub fn record(&self, elapsed_secs: f64, cache_hit: bool) {
        let mut counters = self.lock();
        counters.total_queries += 1;
        if cache_hit {
            counters.cache_hits += 1;
        } else {
            counters.cache_misses += 1;
        }
        counters.response_times.push(elapsed_secs);
    }

    pub fn report(&self) -> PerformanceReport {
        let counters = self.lock();
        let total = counters.total_queries;
        let avg_response_time = if counters.response_times.is_empty() {
            0.0
        } else {
            counters.response_times.iter().sum::<f64>() / counters.response_times.len() as f64
        };
        let hit_rate = counters.cache_hits as f64 / total.max(1) as f64;

        PerformanceReport {
            total_queries: total,
            cache_hits: counters.cache_hits,
            cache_misses: counters.cache_misses,
            avg_response_time,
            hit_rate,
            grade: Grade::from_metrics(avg_response_time, hit_rate),
            generated_at: Utc::now(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(|e| e.into_inner())
    }
}
