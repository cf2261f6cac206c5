use crate::helper::spawn_app;

#[tokio::test]
async fn home_defaults_to_spanish() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<html lang="es">"#));
    assert!(page.contains("Contáctanos"));
}

#[tokio::test]
async fn home_renders_english_on_request() {
    let app = spawn_app().await;

    let page = app.get("/?lang=en").await.text().await.unwrap();

    assert!(page.contains(r#"<html lang="en">"#));
    assert!(page.contains("Contact Us"));
}

#[tokio::test]
async fn an_unknown_language_falls_back_to_spanish() {
    let app = spawn_app().await;

    let response = app.get("/?lang=fr").await;

    assert_eq!(200, response.status().as_u16());
    assert!(response.text().await.unwrap().contains(r#"<html lang="es">"#));
}

#[tokio::test]
async fn the_contact_form_script_is_served() {
    let app = spawn_app().await;

    let response = app.get("/assets/contact-form.js").await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let app = spawn_app().await;

    let response = app.get("/servicios").await;

    assert_eq!(404, response.status().as_u16());
}
