pub mod attribution;
pub mod orchestrator;

pub use attribution::{attribute_sale, attribute_sales, AttributionRun, RunSummary};
pub use orchestrator::{OrchestrationError, Orchestrator};
