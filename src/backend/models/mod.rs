pub mod client;
pub mod common;
pub mod content_item;
pub mod init;
pub mod lead;
pub mod notification;
pub mod plan;
pub mod session;
pub mod settings;

pub use client::{ClientInput, ClientRecord};
pub use common::*;
pub use content_item::{ContentInput, ContentItem};
pub use init::InitArgs;
pub use lead::{ContactForm, Lead};
pub use notification::{Notification, NotificationInput};
pub use plan::{Plan, PlanInput};
pub use session::{AdminSession, LoginResponse, SessionIdentity, SessionState};
pub use settings::AppSettings;

/// A row of one of the portal tables.
pub trait Record: Clone {
    fn id(&self) -> &str;
    fn created_at(&self) -> Timestamp;
}
