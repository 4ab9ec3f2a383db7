// src/tests/router_tests/detail_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::store::CafeStore;
use crate::tests::utils::{get, make_cafe, offline_client, read_body, seeded_store};

#[test]
fn detail_shows_crowdedness_and_available_seats() {
    let store = seeded_store();

    let mut resp = handle(get("/cafes/1"), &store, &offline_client()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("Harbor Coffee"));
    assert!(body.contains("50%"));
    assert!(body.contains("Moderate"));
    assert!(body.contains("Available seats:"));
}

#[test]
fn detail_renders_seats_in_sorted_order() {
    let store = CafeStore::new();
    // Inserted out of order on purpose; "table_10" sorts before "table_2".
    store.replace(vec![make_cafe(
        3,
        "Sorted Cafe",
        Some(vec![("table_2", 0), ("table_10", 1), ("table_1", 1)]),
    )]);

    let mut resp = handle(get("/cafes/3"), &store, &offline_client()).unwrap();
    let body = read_body(&mut resp);

    let pos_1 = body.find(">table_1<").expect("table_1 missing");
    let pos_10 = body.find(">table_10<").expect("table_10 missing");
    let pos_2 = body.find(">table_2<").expect("table_2 missing");
    assert!(pos_1 < pos_10 && pos_10 < pos_2);
}

#[test]
fn detail_without_seat_data_shows_a_note() {
    let store = seeded_store();

    let mut resp = handle(get("/cafes/2"), &store, &offline_client()).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("No live seat data"));
}

#[test]
fn unknown_cafe_is_not_found() {
    let store = seeded_store();

    match handle(get("/cafes/999"), &store, &offline_client()) {
        Err(ServerError::NotFound) => {}
        Err(e) => panic!("expected NotFound, got {e:?}"),
        Ok(_) => panic!("expected NotFound, got a page"),
    }
}

#[test]
fn malformed_cafe_id_is_a_bad_request() {
    let store = seeded_store();

    match handle(get("/cafes/latte"), &store, &offline_client()) {
        Err(ServerError::BadRequest(_)) => {}
        Err(e) => panic!("expected BadRequest, got {e:?}"),
        Ok(_) => panic!("expected BadRequest, got a page"),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let store = seeded_store();

    match handle(get("/nowhere"), &store, &offline_client()) {
        Err(ServerError::NotFound) => {}
        Err(e) => panic!("expected NotFound, got {e:?}"),
        Ok(_) => panic!("expected NotFound, got a page"),
    }
}
