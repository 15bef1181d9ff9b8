use super::*;
use std::thread;
use std::time::Duration;

#[test]
fn can_create_quota_without_time_limit() {
    let quota = create_interruption_quota(None);

    assert!(!quota.is_reached());
}

#[test]
fn can_reach_time_limit() {
    let quota = create_interruption_quota(Some(0));

    thread::sleep(Duration::from_millis(5));

    assert!(quota.is_reached());
}

#[test]
fn can_create_multiple_quotas() {
    let first = create_interruption_quota(Some(100));
    let second = create_interruption_quota(Some(100));

    assert!(!first.is_reached());
    assert!(!second.is_reached());
}
