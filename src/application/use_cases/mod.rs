/// Use cases module containing application business logic orchestration
mod run_inventory;

pub use run_inventory::RunInventoryUseCase;
