use codive::{
    contact_form::{ContactApi, ContactForm, Field, NotificationKind},
    i18n::Language,
};

use crate::helper::spawn_app;

#[tokio::test]
async fn the_form_is_cleared_after_a_delivered_submission() {
    let app = spawn_app().await;
    app.provider_accepts("re_1", 1).await;
    let api = ContactApi::new(format!("{}/api/contact", app.addr));

    let mut form = ContactForm::new(Language::Es);
    form.set(Field::Name, "Ana");
    form.set(Field::Email, "ana@x.com");
    form.set(Field::Message, "Hola");
    let notification = form.submit(&api).await.expect("The form should be idle.");

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.title, "Mensaje enviado correctamente");
    assert!(form.fields().name.is_empty());
    assert!(form.can_submit());
}

#[tokio::test]
async fn the_form_keeps_its_fields_when_the_server_rejects_them() {
    let app = spawn_app().await;
    app.provider_accepts("re_unused", 0).await;
    let api = ContactApi::new(format!("{}/api/contact", app.addr));

    let mut form = ContactForm::new(Language::En);
    form.set(Field::Email, "a@x.com");
    form.set(Field::Message, "Hi");
    let notification = form.submit(&api).await.expect("The form should be idle.");

    assert_eq!(notification.kind, NotificationKind::Failure);
    assert_eq!(notification.description, "Please try again.");
    assert_eq!(form.fields().email, "a@x.com");
    assert_eq!(form.fields().message, "Hi");
    assert!(form.can_submit());
}
