use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info};

/// Error responses attach this to the response so the middleware can log the
/// full failure, including detail that is kept out of the client-facing body.
#[derive(Clone, Debug)]
pub struct ErrorTrace(pub String);

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();
    println!(
        "\nCalled: {} '{}'\n> Status: {}\n> Time: {:#?}",
        method, uri, status, elapsed
    );
    match response.extensions().get::<ErrorTrace>() {
        Some(trace) => error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %trace.0,
            "Failed to process request"
        ),
        None => info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
    }

    response
}
