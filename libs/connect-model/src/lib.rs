//! Data model of the contact-center service API.
//!
//! Every request, response and embedded sub-object is a *data record*: a
//! struct of optional fields with accessors, a consuming builder, a
//! `{Name: value}` rendering, a deterministic hash code and structural
//! equality, all generated by `#[derive(DataRecord)]`.
//!
//! ```
//! use connect_model::{CreateQueueRequest, DataRecord};
//!
//! let request = CreateQueueRequest::default()
//!     .with_instance_id("inst-1")
//!     .with_name("Sales")
//!     .with_quick_connect_ids(["qc-1"])
//!     .with_tags_entry("env", "prod")
//!     .unwrap();
//!
//! assert_eq!(request.name(), Some("Sales"));
//! assert_eq!(
//!     request.to_string(),
//!     "{InstanceId: inst-1,Name: Sales,QuickConnectIds: [qc-1],Tags: {env=prod}}"
//! );
//! assert_eq!(request.present_fields(), ["InstanceId", "Name", "QuickConnectIds", "Tags"]);
//! ```
//!
//! Transport, signing, retries and pagination are not part of this crate.

// Generated code refers to `connect_model::...`, which must also resolve here.
extern crate self as connect_model;

pub mod catalog;
pub mod enums;
pub mod error;
pub mod model;
pub mod operation;
pub mod record;
pub mod value;

pub use connect_model_derive::DataRecord;
pub use enums::{
    Channel, Comparison, ContactFlowType, CurrentMetricName, Grouping, HistoricalMetricName,
    PhoneNumberType, PhoneType, QueueStatus, QueueType, RehydrationType, Statistic, Unit,
    UnknownValue,
};
pub use error::ModelError;
pub use model::*;
pub use operation::Operation;
pub use record::DataRecord;
