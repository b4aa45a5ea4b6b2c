//! In-process stub upstream for provider client tests
//!
//! Serves canned JSON responses on an ephemeral local port so the client
//! dispatch paths (failover, fallback, partial failure) can be driven
//! against real HTTP without touching the network.

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::Value;
use std::sync::Arc;

/// Canned route: path, response status, JSON body
pub(crate) type StubRoute = (&'static str, u16, Value);

/// Start a stub server for the given routes and return its base URL.
/// The server task ends with the test runtime.
pub(crate) async fn serve(routes: Vec<StubRoute>) -> String {
    let routes = Arc::new(routes);

    let server = HttpServer::new(move || {
        let mut app = App::new();
        for (path, status, body) in routes.iter() {
            let status = StatusCode::from_u16(*status).expect("valid stub status");
            let body = body.clone();
            app = app.route(
                path,
                web::get().to(move || {
                    let body = body.clone();
                    async move { HttpResponse::build(status).json(body) }
                }),
            );
        }
        app
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind stub upstream");

    let addr = server.addrs()[0];
    tokio::spawn(server.run());

    format!("http://{addr}")
}
