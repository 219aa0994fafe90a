/// Check WikiProjects Use Case
///
/// Verifies that every WikiProject listed in a taxonomy has a real,
/// non-trivial project page.
///
/// ## Workflow
/// 1. Enumerate every leaf of the taxonomy (duplicates are checked per path)
/// 2. Look up `Wikipedia:<leaf>` on the worker pool
/// 3. Classify each response and log every issue with the leaf's dotted path
/// 4. Return the per-leaf outcomes; any issue makes the run fail
///
/// ## Example
/// ```rust,ignore
/// let use_case = CheckWikiProjectsUseCase::new(&lookup, &pool);
/// let report = use_case.execute(&taxonomy)?;
/// if report.issues() > 0 { /* exit 1 */ }
/// ```

use std::collections::BTreeMap;

use crate::application::services::WikiProjectLookup;
use crate::domain::page_status::{classify, PageStatus};
use crate::domain::taxonomy::{LeafRecord, Taxonomy};
use crate::infrastructure::mediawiki::WikiApi;
use crate::infrastructure::worker_pool::WorkerPool;
use crate::shared::config::DEFAULT_MIN_LENGTH;
use crate::shared::error::PoolError;

/// Outcome for one leaf
#[derive(Debug)]
pub struct CheckEntry {
    /// Dotted path, e.g. `Science.Physics.WikiProject Physics`
    pub path: String,

    pub status: PageStatus,
}

/// Outcomes for every leaf, in taxonomy order
#[derive(Debug, Default)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Number of leaves whose outcome is not `ok`
    pub fn issues(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_issue()).count()
    }

    pub fn checked(&self) -> usize {
        self.entries.len()
    }

    /// Leaf count per outcome label
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.status.label()).or_insert(0) += 1;
        }
        counts
    }

    /// `label: count` pairs, e.g. `missing: 1, ok: 4`
    pub fn summary(&self) -> String {
        self.counts()
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Check WikiProjects use case
pub struct CheckWikiProjectsUseCase<'a, A: WikiApi> {
    lookup: &'a WikiProjectLookup<A>,
    pool: &'a WorkerPool,
    min_length: u64,
}

impl<'a, A: WikiApi> CheckWikiProjectsUseCase<'a, A> {
    pub fn new(lookup: &'a WikiProjectLookup<A>, pool: &'a WorkerPool) -> Self {
        Self {
            lookup,
            pool,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Pages shorter than `min_length` characters are reported as too short
    pub fn with_min_length(mut self, min_length: u64) -> Self {
        self.min_length = min_length;
        self
    }

    /// Checks every leaf of `taxonomy`
    ///
    /// Lookup failures are recorded per leaf; only a pool failure aborts.
    pub fn execute(&self, taxonomy: &Taxonomy) -> Result<CheckReport, PoolError> {
        let leaves: Vec<LeafRecord<'_>> = taxonomy.leaves().collect();
        tracing::info!(
            "Checking {} WikiProjects on {} threads",
            leaves.len(),
            self.pool.worker_count()
        );

        let statuses = self.pool.map(&leaves, |leaf| {
            classify(self.lookup.page_info(leaf.name), self.min_length)
        })?;

        let mut report = CheckReport::default();
        for (leaf, status) in leaves.iter().zip(statuses) {
            let path = leaf.dotted();
            tracing::debug!("Processing {}", path);
            log_status(&path, &status);

            report.entries.push(CheckEntry {
                path,
                status,
            });
        }

        tracing::info!(
            "Checked {} WikiProjects, {} issues found ({})",
            report.checked(),
            report.issues(),
            report.summary()
        );
        Ok(report)
    }
}

fn log_status(path: &str, status: &PageStatus) {
    match status {
        PageStatus::Ok { .. } => {}
        PageStatus::Error(e) => tracing::error!("Could not process {}: {}", path, e),
        PageStatus::Missing => tracing::warn!("{} doesn't exist!", path),
        PageStatus::Redirect { target } => {
            tracing::warn!("{} is a redirect to {}!", path, target)
        }
        PageStatus::TooShort { length } => {
            tracing::warn!("{} is a very short page ({} chars)", path, length)
        }
    }
}
