// src/tests/router_tests/home_tests.rs

use crate::router::handle;
use crate::store::CafeStore;
use crate::templates::pages::home::FETCH_FAILED_NOTICE;
use crate::tests::utils::{get, make_cafe, offline_client, read_body, seeded_store};

#[test]
fn home_lists_cafes_with_crowdedness_badges() {
    let store = seeded_store();

    let mut resp = handle(get("/"), &store, &offline_client()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("Harbor Coffee"));
    assert!(body.contains("Corner Roastery"));

    // 2 of 4 tables occupied: 50%, moderate badge.
    assert!(body.contains(">50%<"));
    assert!(body.contains("Moderate"));
    assert!(body.contains("tier-moderate"));

    // A cafe without seat data reads 0% / relaxed.
    assert!(body.contains(">0%<"));
    assert!(body.contains("tier-relaxed"));

    assert!(body.contains("/cafes/1"));
}

#[test]
fn home_marks_test_cafes() {
    let store = CafeStore::new();
    let mut cafe = make_cafe(5, "Staging Cafe", None);
    cafe.is_test = Some(true);
    store.replace(vec![cafe]);

    let mut resp = handle(get("/"), &store, &offline_client()).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("TEST"));
}

#[test]
fn home_shows_the_fixed_notice_after_a_failed_fetch() {
    let store = seeded_store();
    store.mark_failed();

    let mut resp = handle(get("/"), &store, &offline_client()).unwrap();
    let body = read_body(&mut resp);

    assert!(body.contains(FETCH_FAILED_NOTICE));
    // The stale list stays visible.
    assert!(body.contains("Harbor Coffee"));
}

#[test]
fn home_with_empty_store_shows_a_placeholder() {
    let store = CafeStore::new();

    let mut resp = handle(get("/"), &store, &offline_client()).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("No cafes to show."));
}

#[test]
fn stylesheet_is_served() {
    let store = CafeStore::new();

    let mut resp = handle(get("/static/main.css"), &store, &offline_client()).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains(".tier-crowded"));
}
