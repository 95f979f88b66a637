// src/backend/services/notification_service.rs

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{Notification, NotificationInput, Timestamp};
use crate::services::{insert_new, newest_first, remove_existing};
use validator::Validate;

pub fn list_notifications(source: &dyn DataSource) -> Vec<Notification> {
    newest_first(source.notifications().all())
}

/// Broadcasts plus the notifications targeted at `client_id`, newest first.
pub fn notifications_for(source: &dyn DataSource, client_id: &str) -> Vec<Notification> {
    list_notifications(source)
        .into_iter()
        .filter(|n| n.is_visible_to(client_id))
        .collect()
}

/// Creates a notification stamped with `now`. A target that matches no client is
/// stored anyway; it simply never shows up for anyone.
pub fn create_notification(
    source: &mut dyn DataSource,
    input: NotificationInput,
    now: Timestamp,
) -> Result<Vec<Notification>, PortalError> {
    let id = source.next_id()?;
    let notification = Notification::from_input(id, input, now);
    notification.validate()?;

    match notification.target_user_id.as_deref() {
        Some(target) if !source.clients().contains(target) => {
            crate::log_warn!("Notification {} targets unknown client {}", notification.id, target);
        }
        Some(target) => {
            crate::log_info!("Notification {} sent to client {}", notification.id, target);
        }
        None => {
            crate::log_info!("Notification {} broadcast", notification.id);
        }
    }

    insert_new(source.notifications_mut(), notification, "Notification")?;
    Ok(list_notifications(source))
}

pub fn delete_notification(source: &mut dyn DataSource, id: &str) -> Result<Vec<Notification>, PortalError> {
    remove_existing(source.notifications_mut(), id, "Notification")?;
    Ok(list_notifications(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::services::test_support::{demo, each_source, production, NOW};

    fn input(title: &str, target: Option<&str>) -> NotificationInput {
        NotificationInput {
            title: title.to_string(),
            message: "New channels added to your plan".to_string(),
            kind: NotificationKind::Promo,
            target_user_id: target.map(str::to_string),
        }
    }

    #[test]
    fn targeted_notification_reaches_only_its_client() {
        each_source(|source| {
            create_notification(source, input("Just for you", Some("882941")), NOW + 1).unwrap();

            let mine = notifications_for(source, "882941");
            assert_eq!(mine[0].title, "Just for you");

            let theirs = notifications_for(source, "999999");
            assert!(theirs.iter().all(|n| n.title != "Just for you"));
        });
    }

    #[test]
    fn feed_is_newest_first_and_includes_broadcasts() {
        let mut source = demo();
        create_notification(&mut source, input("Older", Some("882941")), NOW + 1).unwrap();
        create_notification(&mut source, input("Newer", None), NOW + 2).unwrap();
        let titles: Vec<String> = notifications_for(&source, "882941")
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Newer", "Older", "Welcome!"]);
    }

    #[test]
    fn blank_target_becomes_broadcast() {
        let mut source = production();
        let listed = create_notification(&mut source, input("All", Some("  ")), NOW).unwrap();
        assert!(listed[0].is_broadcast());
        assert_eq!(notifications_for(&source, "42").len(), 1);
    }

    #[test]
    fn validation_and_delete() {
        let mut source = demo();
        assert!(matches!(
            create_notification(&mut source, input("", None), NOW),
            Err(PortalError::InvalidInput(_))
        ));
        assert!(delete_notification(&mut source, "n1").unwrap().is_empty());
        assert!(matches!(delete_notification(&mut source, "n1"), Err(PortalError::NotFound(_))));
    }
}
