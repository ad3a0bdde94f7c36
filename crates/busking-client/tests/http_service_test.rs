//! HTTP service tests against a local stub of the remote booking service.
//!
//! The stub records every request (method, path, negotiation headers, JSON
//! body) and answers with a canned status and body per test.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use busking_client::{HttpBookingService, ServiceConfig};
use busking_core::{
    BookingId, BookingInput, BookingRequest, BookingService, Bus, BusId, ServiceError,
};
use serde_json::{Value, json};

type Respond = Arc<dyn Fn(&Method, &str) -> (StatusCode, String) + Send + Sync>;

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    accept: Option<String>,
    content_type: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct Stub {
    requests: Arc<Mutex<Vec<Recorded>>>,
    respond: Respond,
}

impl Stub {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header_str = |name: header::HeaderName| {
        headers.get(name).and_then(|v| v.to_str().ok()).map(ToString::to_string)
    };

    stub.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        accept: header_str(header::ACCEPT),
        content_type: header_str(header::CONTENT_TYPE),
        body: serde_json::from_str(&body).ok(),
    });

    (stub.respond)(&method, uri.path())
}

/// Start a stub service and return a client configured against it.
async fn spawn_stub(
    respond: impl Fn(&Method, &str) -> (StatusCode, String) + Send + Sync + 'static,
) -> (HttpBookingService, Stub) {
    let stub = Stub { requests: Arc::default(), respond: Arc::new(respond) };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    let app = Router::new().fallback(record).with_state(stub.clone());
    tokio::spawn(async move { axum::serve(listener, app).await });

    let config = ServiceConfig::new(&format!("http://{addr}/api")).expect("config");
    (HttpBookingService::new(config).expect("client"), stub)
}

fn request(seats: &str) -> BookingRequest {
    BookingInput {
        name: "Ann".into(),
        email: "ann@example.com".into(),
        phone: "1234567890".into(),
        seats: seats.into(),
    }
    .to_request(Some(BusId::from(1)))
    .expect("valid input")
}

#[tokio::test]
async fn list_buses_negotiates_json() {
    let (service, stub) = spawn_stub(|_, _| {
        let buses = json!([{ "id": 1, "name": "Express" }, { "id": 2, "name": "Night" }]);
        (StatusCode::OK, buses.to_string())
    })
    .await;

    let buses = service.list_buses().await.expect("buses");

    assert_eq!(buses, vec![
        Bus { id: BusId::from(1), name: "Express".into() },
        Bus { id: BusId::from(2), name: "Night".into() },
    ]);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/api/buses/");
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn create_posts_once_with_integer_seats() {
    let (service, stub) = spawn_stub(|_, _| {
        let created = json!({
            "id": 5, "name": "Ann", "email": "ann@example.com",
            "phone": "1234567890", "seats": 3, "bus": 1
        });
        (StatusCode::CREATED, created.to_string())
    })
    .await;

    let created = service.create_booking(&request("3")).await.expect("created");

    assert_eq!(created.and_then(|b| b.id), Some(BookingId::from(5)));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1, "exactly one request: {requests:?}");
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/api/bookings/");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));

    let body = requests[0].body.clone().expect("json body");
    assert_eq!(body["seats"], json!(3));
    assert!(body["seats"].is_u64(), "seats must be a JSON integer: {body}");
    assert_eq!(body["bus"], json!(1));
}

#[tokio::test]
async fn update_puts_to_booking_path_and_tolerates_empty_body() {
    let (service, stub) = spawn_stub(|_, _| (StatusCode::OK, String::new())).await;

    let updated = service.update_booking(&BookingId::from(5), &request("2")).await;

    assert_eq!(updated, Ok(None));
    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/api/bookings/5/");
    assert_eq!(requests[0].body.as_ref().map(|b| b["seats"].clone()), Some(json!(2)));
}

#[tokio::test]
async fn get_booking_decodes_existing_booking() {
    let (service, stub) = spawn_stub(|_, _| {
        let booking = json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "1234567890",
            "seats": 4,
            "bus": "x-1"
        });
        (StatusCode::OK, booking.to_string())
    })
    .await;

    let booking = service.get_booking(&BookingId::from("b-9")).await.expect("booking");

    assert_eq!(booking.seats, 4);
    assert_eq!(booking.bus, Some(BusId::from("x-1")));
    assert_eq!(stub.requests()[0].path, "/api/bookings/b-9/");
}

#[tokio::test]
async fn error_status_is_reported() {
    let (service, _stub) = spawn_stub(|_, _| {
        (StatusCode::BAD_REQUEST, json!({ "bus": ["required"] }).to_string())
    })
    .await;

    let result = service.create_booking(&request("1")).await;
    assert_eq!(result, Err(ServiceError::Status { status: 400 }));
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let (service, _stub) = spawn_stub(|_, _| (StatusCode::OK, "<html>".to_string())).await;

    let result = service.list_bookings().await;
    assert!(matches!(result, Err(ServiceError::Decode(_))), "{result:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    let config = ServiceConfig::new(&format!("http://{addr}/")).expect("config");
    let service = HttpBookingService::new(config).expect("client");

    let result = service.list_buses().await;
    assert!(matches!(result, Err(ServiceError::Network(_))), "{result:?}");
}
