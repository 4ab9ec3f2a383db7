use crate::api::{refresh_cafes, CafeApiClient};
use crate::router::handle;
use crate::store::CafeStore;
use astra::Server;
use std::net::SocketAddr;

mod api;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let client = match CafeApiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Feed client init failed: {e}");
            std::process::exit(1);
        }
    };

    let store = CafeStore::new();

    // One fetch up front; the list page shows a notice if it failed.
    refresh_cafes(&client, &store);

    // CAFES_DEMO=1 mixes in synthesized cafes with random occupancy,
    // handy when the feed is down or empty.
    if demo_mode() {
        let mut rng = rand::thread_rng();
        store.merge(demo_cafes(&mut rng));
        println!("🎲 Demo cafes merged in");
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &store, &client) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

fn demo_mode() -> bool {
    std::env::var("CAFES_DEMO").map(|v| v == "1").unwrap_or(false)
}

/// A handful of synthesized cafes around the same fixed neighborhood the
/// feed covers, with random seat layouts.
fn demo_cafes(rng: &mut impl rand::Rng) -> Vec<crate::domain::Cafe> {
    use crate::domain::Cafe;

    vec![
        Cafe::demo(9001, "Harbor Coffee", "12 Seaside Rd", 37.4490, 126.6571, rng),
        Cafe::demo(9002, "Campus Beans", "3 University Ave", 37.4479, 126.6592, rng),
        Cafe::demo(9003, "Corner Roastery", "88 Market St", 37.4467, 126.6603, rng),
        Cafe::demo(9004, "Late Page", "5 Library Ln", 37.4501, 126.6588, rng),
    ]
}
