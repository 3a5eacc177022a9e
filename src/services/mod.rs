// Services module - business logic layer

pub mod catalog_service;
pub mod contact_service;
pub mod submission_recorder;

pub use catalog_service::{parse_item_id, CatalogService};
pub use contact_service::ContactService;
pub use submission_recorder::{LogSubmissionRecorder, SubmissionRecorder};
