//! Record shapes of the service API, grouped by area.

mod contact;
mod hierarchy;
mod instance;
mod metrics;
mod metrics_v2;
mod queue;
mod tags;
mod user;

pub use contact::*;
pub use hierarchy::*;
pub use instance::*;
pub use metrics::*;
pub use metrics_v2::*;
pub use queue::*;
pub use tags::*;
pub use user::*;
