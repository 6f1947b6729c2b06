//! Data transfer objects handed from application services to the UI.

mod notification;

pub use notification::{Notification, NotificationSeverity};
