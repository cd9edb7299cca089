use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::domain::{EndpointRecord, InventoryRow};
use crate::inventory::services::{PolicyFilter, ReportAggregator};
use crate::ports::outbound::{DirectoryGateway, ProgressReporter};
use crate::shared::Result;

/// Default number of escrow child queries in flight at once.
const DEFAULT_CONCURRENT_QUERIES: usize = 8;

/// RunInventoryUseCase - Core use case for one inventory run
///
/// Orchestrates the reconciliation pipeline: enumerate endpoints, apply
/// policy, enrich each in-scope endpoint with its escrow children, and
/// aggregate the rows into the ordered report.
///
/// # Type Parameters
/// * `DG` - DirectoryGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct RunInventoryUseCase<DG, PR> {
    directory_gateway: DG,
    progress_reporter: PR,
    concurrent_queries: usize,
}

impl<DG, PR> RunInventoryUseCase<DG, PR>
where
    DG: DirectoryGateway,
    PR: ProgressReporter,
{
    /// Creates a new RunInventoryUseCase with injected dependencies
    pub fn new(directory_gateway: DG, progress_reporter: PR) -> Self {
        Self {
            directory_gateway,
            progress_reporter,
            concurrent_queries: DEFAULT_CONCURRENT_QUERIES,
        }
    }

    /// Overrides the enrichment fan-out width. Values below 1 are clamped.
    pub fn with_concurrent_queries(mut self, concurrent_queries: usize) -> Self {
        self.concurrent_queries = concurrent_queries.max(1);
        self
    }

    /// Executes one inventory run.
    ///
    /// # Arguments
    /// * `request` - Policy configuration and the staleness reference instant
    ///
    /// # Returns
    /// InventoryResponse owning the completed report. Zero endpoints after
    /// policy is a valid outcome, not an error.
    ///
    /// # Errors
    /// Returns an error only if the endpoint enumeration itself fails;
    /// per-endpoint escrow query failures are contained and recorded as
    /// zero-escrow rows.
    pub async fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        // Step 1: Enumerate endpoint objects
        match request.scope.as_deref() {
            Some(scope) => self
                .progress_reporter
                .report(&format!("🔍 Enumerating computer objects under {}", scope)),
            None => self
                .progress_reporter
                .report("🔍 Enumerating computer objects across the directory"),
        }

        let endpoints = self
            .directory_gateway
            .list_endpoints(request.scope.as_deref())
            .await?;

        self.progress_reporter
            .report(&format!("✅ Detected {} computer object(s)", endpoints.len()));

        // Step 2: Apply exclusion/staleness policy
        let policy = PolicyFilter::new(request.include_servers, request.max_last_logon_age_days);
        let before = endpoints.len();
        let in_scope = policy.apply(endpoints, request.now);

        let excluded = before - in_scope.len();
        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} endpoint(s) based on policy",
                excluded
            ));
        }

        // Step 3: Enrich each endpoint with its escrow children
        self.progress_reporter
            .report("🔍 Querying recovery key escrow objects...");

        let (rows, failed_queries) = self.enrich_endpoints(in_scope).await;

        // Step 4: Aggregate into the ordered report
        let report = ReportAggregator::aggregate(rows);

        let summary = report.summary();
        self.progress_reporter.report_completion(&format!(
            "✅ Inventory complete: {} endpoint(s), {} with escrowed key(s), {} escrow quer{} failed",
            summary.total,
            summary.with_key,
            failed_queries,
            if failed_queries == 1 { "y" } else { "ies" }
        ));

        Ok(InventoryResponse::new(report, failed_queries))
    }

    /// Enriches endpoints with their escrow children over a bounded
    /// concurrent fan-out.
    ///
    /// Each endpoint is independent; a failed child query degrades that one
    /// endpoint to a zero-escrow row instead of aborting the run. Result
    /// order is whatever completion order the fan-out produced - the
    /// aggregator re-establishes the deterministic ordering afterwards.
    async fn enrich_endpoints(
        &self,
        endpoints: Vec<EndpointRecord>,
    ) -> (Vec<InventoryRow>, usize) {
        use futures::stream::{self, StreamExt};

        let total = endpoints.len();
        let completed = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        let rows: Vec<InventoryRow> = stream::iter(endpoints)
            .map(|endpoint| {
                let completed = &completed;
                let failed = &failed;
                async move {
                    let row = match self
                        .directory_gateway
                        .list_escrow_children(endpoint.distinguished_name())
                        .await
                    {
                        Ok(children) => InventoryRow::from_escrow_objects(&endpoint, &children),
                        Err(e) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                            self.progress_reporter.report_error(&format!(
                                "⚠️  Warning: Escrow query failed for {}: {}",
                                endpoint.computer_name(),
                                e
                            ));
                            InventoryRow::from_failed_query(&endpoint)
                        }
                    };

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    self.progress_reporter
                        .report_progress(done, total, Some(row.computer_name()));

                    row
                }
            })
            .buffer_unordered(self.concurrent_queries)
            .collect()
            .await;

        (rows, failed.load(Ordering::Relaxed))
    }
}
