//! bitlocker-inventory - BitLocker recovery key escrow inventory for Active Directory
//!
//! This library inventories which endpoints recorded in a directory have
//! BitLocker recovery keys escrowed as `msFVE-RecoveryInformation` child
//! objects, following hexagonal architecture: the reconciliation pipeline is
//! pure domain logic, and all I/O goes through explicitly constructed
//! adapters.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): records, rows, policy, aggregation,
//!   filterable view, CSV rendering
//! - **Application Layer** (`application`): the inventory use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): LDAP gateway, console reporter, file writers
//! - **Shared** (`shared`): common error types
//!
//! # Example
//!
//! ```no_run
//! use bitlocker_inventory::prelude::*;
//! use chrono::Utc;
//!
//! # async fn example(settings: &bitlocker_inventory::config::DirectorySettings) -> Result<()> {
//! // Create adapters
//! let directory_gateway = LdapDirectoryGateway::connect(settings).await?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunInventoryUseCase::new(directory_gateway, progress_reporter);
//!
//! // Execute
//! let request = InventoryRequest::new(None, false, 90, Utc::now());
//! let response = use_case.execute(request).await?;
//!
//! // Filter and export
//! let view = DatasetView::new(&response.report);
//! let csv = CsvExporter::render(&view.visible_rows());
//! println!("{}", csv);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::directory::LdapDirectoryGateway;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::application::dto::{InventoryRequest, InventoryResponse};
    pub use crate::application::use_cases::RunInventoryUseCase;
    pub use crate::inventory::domain::{
        EndpointRecord, InventoryReport, InventoryRow, RecoveryEscrowObject, ReportSummary,
    };
    pub use crate::inventory::services::{
        CsvExporter, DatasetView, PolicyFilter, ReportAggregator, CSV_HEADER,
    };
    pub use crate::ports::outbound::{DirectoryGateway, OutputPresenter, ProgressReporter};
    pub use crate::shared::Result;
}
