//! Integration tests for the Senso HTTP client

use senso_http::client::{error::ClientError, PublicSensoClient, TypedClientBuilder};
use senso_http::types::{
    Category, LoginRequest, NewRegistration, RegistrationFilter, RegistrationStatus, Role,
    StatusUpdate,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registration_json(id: &str, estatus: &str) -> serde_json::Value {
    json!({
        "id": id,
        "nombre_completo": "María López",
        "nombre_artistico": "La Voz",
        "telefono": "5512345678",
        "correo": null,
        "categoria": "KOE SAN",
        "municipio": "Toluca",
        "sede": "Centro",
        "estatus": estatus,
        "observaciones": null,
        "fecha_inscripcion": "2024-05-01T10:00:00"
    })
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_relative_base_url() {
    for base_url in ["", "/api", "localhost:8001"] {
        let result = TypedClientBuilder::new().base_url(base_url).build_public();
        assert!(
            matches!(result, Err(ClientError::Configuration(_))),
            "{base_url:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_client_builder_trims_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8001/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8001");
}

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(
            json!({"correo": "admin@karaokesenso.com", "contraseña": "admin123"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok1",
            "token_type": "bearer",
            "user": {"id": 1, "nombre": "Admin", "correo": "admin@karaokesenso.com", "rol": "admin"}
        })))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(&LoginRequest {
            correo: "admin@karaokesenso.com".into(),
            contrasena: "admin123".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "tok1");
    assert_eq!(response.user.rol, Role::Admin);
    assert_eq!(response.user.nombre, "Admin");
}

#[tokio::test]
async fn test_login_rejection_carries_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Credenciales inválidas"})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri()).unwrap();
    let result = client
        .login(&LoginRequest {
            correo: "admin@karaokesenso.com".into(),
            contrasena: "wrong".into(),
        })
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::AuthenticationFailed(_)));
    assert_eq!(error.detail(), Some("Credenciales inválidas"));
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "x"})))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri()).unwrap();
    let result = client
        .login(&LoginRequest {
            correo: "a@b.c".into(),
            contrasena: "x".into(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Serialization(_))));
}

#[tokio::test]
async fn test_public_statistics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/estadisticas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_inscritos": 12,
            "total_municipios": 4,
            "total_votos": 60,
            "inscritos_por_categoria": {"KOE SAN": 12}
        })))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri()).unwrap();
    let stats = client.public_statistics().await.unwrap();
    assert_eq!(stats.total_inscritos, 12);
    assert_eq!(stats.total_municipios, 4);
    assert_eq!(stats.total_votos, 60);
}

#[tokio::test]
async fn test_create_registration_is_public() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/inscripciones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(registration_json("abc", "pendiente")))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri()).unwrap();
    let created = client
        .create_registration(&NewRegistration {
            nombre_completo: "María López".into(),
            nombre_artistico: "La Voz".into(),
            telefono: "5512345678".into(),
            correo: None,
            categoria: Category::KoeSan,
            municipio: "Toluca".into(),
            sede: Some("Centro".into()),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "abc");
    assert_eq!(created.estatus, RegistrationStatus::Pendiente);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_authenticated_calls_carry_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/estadisticas"))
        .and(header("authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_inscritos": 3,
            "inscritos_pendientes": 2,
            "inscritos_por_sede": {"Centro": 3}
        })))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri())
        .unwrap()
        .authenticate("tok1");
    let stats = client.admin_statistics().await.unwrap();
    assert_eq!(stats.total_inscritos, 3);
    assert_eq!(stats.inscritos_por_sede["Centro"], 3);
}

#[tokio::test]
async fn test_list_registrations_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/inscripciones"))
        .and(query_param("estatus", "pendiente"))
        .and(query_param("categoria", "KOE SAI"))
        .and(query_param("search", "voz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([registration_json("r1", "pendiente")])),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok1")
        .unwrap();
    let filter = RegistrationFilter {
        estatus: Some(RegistrationStatus::Pendiente),
        categoria: Some(Category::KoeSai),
        search: Some("voz".into()),
    };
    let registrations = client.list_registrations(&filter).await.unwrap();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].id, "r1");
}

#[tokio::test]
async fn test_update_registration_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/inscripciones/r1/estatus"))
        .and(header("authorization", "Bearer tok1"))
        .and(body_json(json!({"estatus": "aprobado", "observaciones": "ok"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri())
        .unwrap()
        .authenticate("tok1");
    client
        .update_registration_status(
            "r1",
            &StatusUpdate {
                estatus: RegistrationStatus::Aprobado,
                observaciones: "ok".into(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_expired_token_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/inscripciones"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token inválido"})))
        .mount(&mock_server)
        .await;

    let client = PublicSensoClient::new(mock_server.uri())
        .unwrap()
        .authenticate("stale");
    let error = client
        .list_registrations(&RegistrationFilter::default())
        .await
        .unwrap_err();
    assert!(error.is_auth_expired());
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/estadisticas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"total_inscritos": 1}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build_public()
        .unwrap();

    let result = client.public_statistics().await;
    assert!(matches!(result, Err(ClientError::Timeout)));
}
