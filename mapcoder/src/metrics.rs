//! Request counters.
//!
//! Counters are keyed by request kind and client. Updates are relaxed
//! atomic increments; no ordering between requests is implied.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The kind of client making a request, as reported by the `client` field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Client {
    None,
    Ios,
    Android,
    Web,
}

/// What a request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum RequestKind {
    EncodeAll,
    EncodeLocal,
    EncodeInternational,
    Decode,
    Territories,
    Alphabets,
}

/// Thread-safe request counters.
pub struct Metrics {
    counts: [[AtomicU64; Client::COUNT]; RequestKind::COUNT],
}

/// A point-in-time copy of the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// All requests counted.
    pub requests: u64,
    /// Requests per kind.
    pub by_kind: BTreeMap<&'static str, u64>,
    /// Requests per client, then per kind.
    pub by_client: BTreeMap<&'static str, BTreeMap<&'static str, u64>>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            counts: std::array::from_fn(|_| std::array::from_fn(|_| AtomicU64::new(0))),
        }
    }

    /// Count one request.
    pub fn record(&self, kind: RequestKind, client: Client) {
        self.counts[kind as usize][client as usize].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, kind: RequestKind, client: Client) -> u64 {
        self.counts[kind as usize][client as usize].load(Ordering::Relaxed)
    }

    /// Requests of `kind` across all clients.
    pub fn total(&self, kind: RequestKind) -> u64 {
        Client::iter().map(|client| self.count(kind, client)).sum()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();
        for kind in RequestKind::iter() {
            let total = self.total(kind);
            snapshot.requests += total;
            snapshot.by_kind.insert(kind.into(), total);
        }
        for client in Client::iter() {
            let per_kind: BTreeMap<&'static str, u64> = RequestKind::iter()
                .map(|kind| (kind.into(), self.count(kind, client)))
                .collect();
            snapshot.by_client.insert(client.into(), per_kind);
        }
        snapshot
    }
}
