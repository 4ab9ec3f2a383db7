// src/tests/router_tests/refresh_tests.rs

use crate::router::handle;
use crate::tests::utils::{offline_client, post, seeded_store};

#[test]
fn refresh_redirects_home_and_records_the_failure() {
    let store = seeded_store();

    // The client points at a closed port, so this fetch cycle fails.
    let resp = handle(post("/refresh"), &store, &offline_client()).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let (failed, count) = store
        .with_state(|s| (s.fetch_failed, s.cafes.len()))
        .unwrap();
    assert!(failed);
    // The previous list survives the failed cycle.
    assert_eq!(count, 2);
}
