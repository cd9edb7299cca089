/// Inventory domain - Pure business logic and domain models
///
/// This module contains the reconciliation pipeline's domain types and
/// services: policy filtering, report aggregation, the filterable dataset
/// view, and CSV rendering. No I/O happens here.
pub mod domain;
pub mod services;
