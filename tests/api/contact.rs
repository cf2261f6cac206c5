use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helper::spawn_app;

#[tokio::test]
async fn contact_returns_200_with_the_delivery_id_for_valid_data() {
    let app = spawn_app().await;
    app.provider_accepts("4ef9a417-02e9-4d39-ad75-9611e0fcc33c", 1)
        .await;

    let body = r#"{"name": "Ana", "email": "ana@x.com", "message": "Hola"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Mensaje enviado correctamente",
            "id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c"
        })
    );
}

#[tokio::test]
async fn contact_sends_one_email_to_the_business_inbox() {
    let app = spawn_app().await;
    app.provider_accepts("re_1", 1).await;

    let body = r#"{"name": "Ana", "email": "ana@x.com", "phone": "+57 300", "subject": "Web", "message": "Hola"}"#;
    app.post_contact(body).await;

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0]["to"], serde_json::json!(["codive.dev@outlook.com"]));
    assert_eq!(
        emails[0]["from"],
        "Formulario de Contacto <onboarding@resend.dev>"
    );
    assert_eq!(
        emails[0]["subject"],
        "Nuevo mensaje de contacto de Ana - Web"
    );
    let html = emails[0]["html"].as_str().unwrap();
    assert!(html.contains("ana@x.com"));
    assert!(html.contains("+57 300"));
}

#[tokio::test]
async fn contact_returns_a_400_when_required_fields_are_missing() {
    let app = spawn_app().await;
    app.provider_accepts("re_unused", 0).await;
    let test_cases = [
        (r#"{"name": "", "email": "a@x.com", "message": "Hi"}"#, "empty name"),
        (r#"{"email": "a@x.com", "message": "Hi"}"#, "missing the name"),
        (r#"{"name": "Ana", "message": "Hi"}"#, "missing the email"),
        (r#"{"name": "Ana", "email": "a@x.com"}"#, "missing the message"),
        ("{}", "missing everything"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_contact(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "Todos los campos son requeridos"})
        );
    }
}

#[tokio::test]
async fn contact_returns_a_500_without_detail_when_delivery_fails() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "statusCode": 403,
            "name": "invalid_api_key",
            "message": "API key is invalid"
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = r#"{"name": "Ana", "email": "ana@x.com", "message": "Hola"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains("API key"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&text).unwrap(),
        serde_json::json!({"error": "Error al enviar el mensaje"})
    );
}

#[tokio::test]
async fn contact_returns_a_500_for_a_malformed_body() {
    let app = spawn_app().await;
    app.provider_accepts("re_unused", 0).await;

    for body in [
        r#"{"name": "Ana", "#,
        r#"["Ana", "ana@x.com", null, null, "Hola"]"#,
    ] {
        let response = app.post_contact(body).await;

        assert_eq!(500, response.status().as_u16(), "body: {body}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": "Error interno del servidor"}));
    }
}

#[tokio::test]
async fn identical_submissions_are_sent_twice() {
    let app = spawn_app().await;
    app.provider_accepts("re_1", 2).await;

    let body = r#"{"name": "Ana", "email": "ana@x.com", "message": "Hola"}"#;
    let first = app.post_contact(body).await;
    let second = app.post_contact(body).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn submitted_markup_reaches_the_inbox_escaped() {
    let app = spawn_app().await;
    app.provider_accepts("re_1", 1).await;

    let body = r#"{"name": "Ana", "email": "ana@x.com", "message": "<img src=x onerror=alert(1)>"}"#;
    app.post_contact(body).await;

    let emails = app.sent_emails().await;
    let html = emails[0]["html"].as_str().unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}
