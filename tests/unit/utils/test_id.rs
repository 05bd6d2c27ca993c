use ibc_client::utils::id::task_id;
use std::collections::HashSet;

#[test]
fn test_task_id_format() {
    let id = task_id();
    assert_eq!(id.len(), 30);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn test_task_ids_are_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| task_id()).collect();
    assert_eq!(ids.len(), 1000);
}
