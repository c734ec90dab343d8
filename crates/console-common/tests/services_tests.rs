//! Integration tests for the resource, auth, school and inquiry services

use panchayat_console_common::client::{ApiClientBuilder, AuthenticatedClient, ClientError, Upload};
use panchayat_console_common::resources::{
    Award, Banner, FormValues, Inquiry, InquiryStatus, Member, Officer, Report, Suvichar, ValidationError,
};
use panchayat_console_common::services::{
    AuthService, InquiryService, ResourceService, SchoolCountService, SignIn, SignUp,
};
use panchayat_console_common::{ManualClock, SessionConfig, SessionStore};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOW: i64 = 1_700_000_000_000;

fn client_for(server: &MockServer) -> AuthenticatedClient {
    let store = SessionStore::in_memory();
    store.write("abc", i64::MAX);
    ApiClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated(store)
        .unwrap()
}

#[tokio::test]
async fn test_list_decodes_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/officers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "o1", "name": "R. Patil", "post": "Gram Sevak", "isActive": true},
            {"_id": "o2", "name": "S. More", "post": "Talathi", "contact": 9800000000_u64},
        ])))
        .mount(&mock_server)
        .await;

    let officers = ResourceService::<Officer>::new(client_for(&mock_server))
        .list()
        .await
        .unwrap();

    assert_eq!(officers.len(), 2);
    assert!(officers[0].is_active);
    assert!(!officers[1].is_active);
    assert_eq!(officers[1].contact, "9800000000");
}

#[tokio::test]
async fn test_list_accepts_wrapped_and_null_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suvichar"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [{"_id": "s1", "text": "Kindness first"}]})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/awards"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let thoughts = ResourceService::<Suvichar>::new(client.clone()).list().await.unwrap();
    assert_eq!(thoughts[0].text, "Kindness first");

    let awards = ResourceService::<Award>::new(client)
        .list()
        .await
        .unwrap();
    assert!(awards.is_empty());
}

#[tokio::test]
async fn test_create_with_file_is_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/officers"))
        .and(header("authorization", "Bearer abc"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"post\""))
        .and(body_string_contains("filename=\"patil.jpg\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "o3"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut values = FormValues::new()
        .with("name", "R. Patil")
        .with("post", "Gram Sevak");
    values.upload = Some(Upload::new(
        "patil.jpg",
        Some("image/jpeg".into()),
        b"JFIF".to_vec(),
    ));

    ResourceService::<Officer>::new(client_for(&mock_server))
        .create(&values, &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_without_file_field_is_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suvichar"))
        .and(body_json(json!({"text": "Work is worship", "author": ""})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let values = FormValues::new().with("text", "Work is worship");
    ResourceService::<Suvichar>::new(client_for(&mock_server))
        .create(&values, &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_form_is_not_submitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = ResourceService::<Report>::new(client_for(&mock_server));
    let values = FormValues::new().with("title", "Annual");
    let result = service.create(&values, &[]).await;

    assert!(matches!(
        result,
        Err(ClientError::Validation(ValidationError::Missing { field: "year", .. }))
    ));
}

#[tokio::test]
async fn test_duplicate_sarpanch_is_not_submitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let existing: Vec<Member> = serde_json::from_value(json!([
        {"_id": "m1", "name": "A", "role": "Sarpanch", "isActive": true}
    ]))
    .unwrap();
    let values = FormValues::new().with("name", "B").with("role", "Sarpanch");

    let result = ResourceService::<Member>::new(client_for(&mock_server))
        .create(&values, &existing)
        .await;

    match result {
        Err(ClientError::Validation(error)) => {
            assert_eq!(error.to_string(), "Only one Sarpanch is allowed");
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_toggle_and_delete_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/officers/o1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "o1"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/officers/toggle/o1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/officers/o1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = ResourceService::<Officer>::new(client_for(&mock_server));
    let values = FormValues::new().with("name", "R. Patil").with("post", "Sarpanch Sachiv");

    service.update("o1", &values, &[]).await.unwrap();
    service.toggle("o1").await.unwrap();
    service.delete("o1").await.unwrap();
}

/// Collects formatted log lines for assertions
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_every_mutation_is_logged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/officers/toggle/o7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/officers/o7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let service = ResourceService::<Officer>::new(client_for(&mock_server));
    service.toggle("o7").await.unwrap();
    service.delete("o7").await.unwrap();

    let output = logs.contents();
    assert!(output.contains("record status toggled"), "{output}");
    assert!(output.contains("record deleted"), "{output}");
    assert!(output.contains("/officers"));
}

#[tokio::test]
async fn test_banner_uses_its_own_paths() {
    let mock_server = MockServer::start().await;

    for (verb, route) in [
        ("POST", "/banner/add"),
        ("PUT", "/banner/update/b1"),
        ("DELETE", "/banner/delete/b1"),
        ("PUT", "/banner/toggle/b1"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let service = ResourceService::<Banner>::new(client_for(&mock_server));
    let values = FormValues::new().with("title", "Welcome").with("subtitle", "Palsun");

    service.create(&values, &[]).await.unwrap();
    service.update("b1", &values, &[]).await.unwrap();
    service.delete("b1").await.unwrap();
    service.toggle("b1").await.unwrap();
}

#[tokio::test]
async fn test_suvichar_toggle_is_refused_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = ResourceService::<Suvichar>::new(client_for(&mock_server))
        .toggle("s1")
        .await;
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_sign_in_writes_the_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "admin@palsun.in", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1", "expiresIn": 7200})),
        )
        .mount(&mock_server)
        .await;

    let store = SessionStore::in_memory();
    let client = ApiClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();
    let auth = AuthService::with_clock(client, store.clone(), ManualClock::at(NOW));

    let session = auth
        .sign_in(&SignIn {
            email: "admin@palsun.in".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.token, "jwt-1");
    assert_eq!(session.expiry, NOW + 7_200_000);
    assert_eq!(store.read(), Some(session));

    auth.sign_out();
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn test_sign_in_without_expiry_uses_default_lifetime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-2"})))
        .mount(&mock_server)
        .await;

    let store = SessionStore::in_memory();
    let client = ApiClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();
    let auth = AuthService::with_clock(client, store.clone(), ManualClock::at(NOW));

    let session = auth
        .sign_in(&SignIn {
            email: "admin@palsun.in".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        session.expiry,
        NOW + SessionConfig::DEFAULT_LIFETIME_SECS * 1_000
    );
}

#[tokio::test]
async fn test_rejected_sign_in_leaves_no_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let store = SessionStore::in_memory();
    let client = ApiClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();
    let auth = AuthService::with_clock(client, store.clone(), ManualClock::at(NOW));

    let error = auth
        .sign_in(&SignIn {
            email: "admin@palsun.in".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.user_message(), "Invalid credentials");
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn test_sign_up_posts_the_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({"name": "Clerk", "email": "clerk@palsun.in", "password": "pw"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "created"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();
    let auth = AuthService::new(client, SessionStore::in_memory());

    auth.sign_up(&SignUp {
        name: "Clerk".into(),
        email: "clerk@palsun.in".into(),
        password: "pw".into(),
    })
    .await
    .unwrap();

    let missing = auth.sign_up(&SignUp::default()).await;
    assert!(matches!(missing, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn test_school_count_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schoolcount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "sc", "girls": 40, "boys": "38", "totalTeacher": 5, "contact": "02135-222333"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/schoolcount"))
        .and(body_json(json!({"girls": 41, "boys": 38, "totalTeacher": 5, "contact": "02135-222333"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = SchoolCountService::new(client_for(&mock_server));
    let count = service.get().await.unwrap();
    assert_eq!(count.total_students(), 78);

    let saved = service.save(&count.values().with("girls", "41")).await.unwrap();
    assert_eq!(saved.girls, 41);
}

#[tokio::test]
async fn test_inquiry_status_change() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "c1", "name": "Sunita", "phone": "9800000000", "message": "Street light", "status": "Pending"},
            {"_id": "c2", "name": "Ramesh", "phone": "9811111111", "message": "Tax receipt", "status": "Completed"},
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/contacts/c1/status"))
        .and(body_json(json!({"status": "In Progress"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = InquiryService::new(client_for(&mock_server));
    let inquiries: Vec<Inquiry> = service.list().await.unwrap();

    service
        .set_status(&inquiries[0], InquiryStatus::InProgress)
        .await
        .unwrap();

    let locked = service
        .set_status(&inquiries[1], InquiryStatus::Pending)
        .await;
    assert!(matches!(
        locked,
        Err(ClientError::Validation(ValidationError::StatusLocked))
    ));
}
