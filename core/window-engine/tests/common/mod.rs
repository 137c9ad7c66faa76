//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the window-engine integration tests.

#![allow(dead_code)]

use window_engine::{Record, ViewSession, WindowConfig};

pub const REGIONS: [&str; 6] = ["North", "South", "East", "West", "Central", "Overseas"];
pub const CHANNELS: [&str; 4] = ["Search", "Social", "Display", "Email"];

/// The three-record scenario: North, South, North.
pub fn north_south_north() -> Vec<Record> {
    vec![
        Record::new("North", "Search").with_metrics(120.0, 1000, 10, 80),
        Record::new("South", "Social").with_metrics(75.5, 800, 4, 35),
        Record::new("North", "Email").with_metrics(30.0, 400, 2, 12),
    ]
}

/// Deterministic pseudo-random generator (LCG) so generated datasets are
/// reproducible across runs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

/// Generates `count` records spread over `group_count` regions.
pub fn generated_records(seed: u64, count: usize, group_count: usize) -> Vec<Record> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|i| {
            let region = REGIONS[rng.below(group_count.min(REGIONS.len()).max(1))];
            let channel = CHANNELS[i % CHANNELS.len()];
            Record::new(region, channel).with_metrics(
                rng.below(10_000) as f64 / 100.0,
                rng.below(100_000) as u64,
                rng.below(100) as u64,
                rng.below(1_000) as u64,
            )
        })
        .collect()
}

/// A large, evenly spread dataset: `per_group` records in each of the regions.
pub fn large_records(per_group: usize) -> Vec<Record> {
    let mut records = Vec::with_capacity(per_group * REGIONS.len());
    for i in 0..per_group {
        for region in REGIONS {
            records.push(Record::new(region, CHANNELS[i % CHANNELS.len()]));
        }
    }
    records
}

pub fn default_session(records: Vec<Record>) -> ViewSession {
    match ViewSession::new(records, WindowConfig::default()) {
        Ok(session) => session,
        Err(e) => panic!("default config must be valid: {}", e),
    }
}
