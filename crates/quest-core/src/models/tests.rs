#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{Quest, QuestStatus, Settings, DAY_MILLIS};

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millisecond(millis).unwrap()
    }

    fn create_test_quest() -> Quest {
        Quest::new(1_700_000_000_000, "Buy milk", ts(1_700_000_000_000))
    }

    #[test]
    fn test_new_quest_defaults() {
        let quest = create_test_quest();

        assert_eq!(quest.status, QuestStatus::Active);
        assert_eq!(quest.elapsed_millis, 0);
        assert!(!quest.is_running);
        assert!(quest.completed_at.is_none());
        assert!(quest.failed_at.is_none());
        assert!(quest.finished_at().is_none());
    }

    #[test]
    fn test_into_completed_sets_only_completed_at() {
        let mut quest = create_test_quest();
        quest.is_running = true;
        quest.elapsed_millis = 5_000;

        let done = quest.into_completed(ts(1_700_000_060_000));

        assert_eq!(done.status, QuestStatus::Completed);
        assert!(!done.is_running);
        assert_eq!(done.elapsed_millis, 5_000);
        assert_eq!(done.completed_at, Some(ts(1_700_000_060_000)));
        assert_eq!(done.failed_at, None);
        assert_eq!(done.finished_at(), done.completed_at);
    }

    #[test]
    fn test_into_failed_sets_only_failed_at() {
        let failed = create_test_quest().into_failed(ts(1_700_000_060_000));

        assert_eq!(failed.status, QuestStatus::Failed);
        assert_eq!(failed.failed_at, Some(ts(1_700_000_060_000)));
        assert_eq!(failed.completed_at, None);
        assert_eq!(failed.finished_at(), failed.failed_at);
    }

    #[test]
    fn test_is_ticking_requires_running_and_active() {
        let mut quest = create_test_quest();
        assert!(!quest.is_ticking());

        quest.is_running = true;
        assert!(quest.is_ticking());

        quest.status = QuestStatus::Completed;
        assert!(!quest.is_ticking());
    }

    #[test]
    fn test_is_expired_boundary() {
        let quest = create_test_quest();
        let created = quest.created_at.as_millisecond();

        assert!(!quest.is_expired(ts(created + DAY_MILLIS - 1)));
        assert!(quest.is_expired(ts(created + DAY_MILLIS)));

        let done = quest.into_completed(ts(created + 1));
        assert!(!done.is_expired(ts(created + 2 * DAY_MILLIS)));
    }

    #[test]
    fn test_persisted_json_layout() {
        let quest = create_test_quest();
        let value = serde_json::to_value(&quest).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1_700_000_000_000u64,
                "title": "Buy milk",
                "createdAt": 1_700_000_000_000i64,
                "elapsedMillis": 0,
                "isRunning": false,
                "status": "ACTIVE",
                "completedAt": null,
                "failedAt": null,
            })
        );
    }

    #[test]
    fn test_json_round_trip_preserves_all_fields() {
        let active = create_test_quest();
        let mut running = Quest::new(2, "Workout", ts(1_700_000_100_000));
        running.is_running = true;
        running.elapsed_millis = 42_000;
        let completed = Quest::new(3, "Study", ts(1_700_000_200_000)).into_completed(ts(1_700_000_300_000));
        let failed = Quest::new(4, "Stretch", ts(1_700_000_400_000)).into_failed(ts(1_700_000_500_000));

        for quest in [active, running, completed, failed] {
            let encoded = serde_json::to_string(&quest).unwrap();
            let decoded: Quest = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, quest);
        }
    }

    #[test]
    fn test_missing_terminal_timestamps_default_to_none() {
        let decoded: Quest = serde_json::from_value(json!({
            "id": 9,
            "title": "Legacy",
            "createdAt": 1_000,
            "elapsedMillis": 0,
            "isRunning": false,
            "status": "ACTIVE",
        }))
        .unwrap();

        assert_eq!(decoded.completed_at, None);
        assert_eq!(decoded.failed_at, None);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<Quest>(json!({
            "id": 9,
            "title": "Broken",
            "createdAt": 1_000,
            "elapsedMillis": 0,
            "isRunning": false,
            "status": "PAUSED",
            "completedAt": null,
            "failedAt": null,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("ACTIVE".parse::<QuestStatus>(), Ok(QuestStatus::Active));
        assert_eq!("completed".parse::<QuestStatus>(), Ok(QuestStatus::Completed));
        assert_eq!("Failed".parse::<QuestStatus>(), Ok(QuestStatus::Failed));
        assert!("done".parse::<QuestStatus>().is_err());
    }

    #[test]
    fn test_status_terminality() {
        assert!(!QuestStatus::Active.is_terminal());
        assert!(QuestStatus::Completed.is_terminal());
        assert!(QuestStatus::Failed.is_terminal());
    }

    #[test]
    fn test_settings_default_enables_auto_fail() {
        assert!(Settings::default().auto_fail_after_24h);
    }
}
