use mockito::{Matcher, Server};
use serde_json::json;

use pf_core::config::EmailConfig;
use pf_core::contact::ContactFields;
use pf_core::ports::{EmailSendError, EmailSenderPort};
use pf_infra::email::{EmailJsClient, SEND_PATH};

fn config(api_base: String) -> EmailConfig {
    EmailConfig {
        api_base,
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: "public_test".to_string(),
    }
}

fn fields() -> ContactFields {
    ContactFields {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "Vorrei collaborare".to_string(),
    }
}

#[tokio::test]
async fn send_posts_routing_ids_and_template_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEND_PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_test",
            "template_params": {
                "nome": "Ada Lovelace",
                "email": "ada@example.com",
                "messaggio": "Vorrei collaborare"
            }
        })))
        .with_status(200)
        .with_body("OK")
        .expect(1)
        .create_async()
        .await;

    let client = EmailJsClient::new(&config(server.url())).unwrap();
    let receipt = client.send(&fields()).await.expect("delivery should succeed");

    mock.assert_async().await;
    assert_eq!(receipt.text, "OK");
}

#[tokio::test]
async fn non_success_status_is_a_rejection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEND_PATH)
        .with_status(400)
        .with_body("The user ID is invalid")
        .create_async()
        .await;

    let client = EmailJsClient::new(&config(server.url())).unwrap();
    let err = client.send(&fields()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err,
        EmailSendError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string()
        }
    );
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    // Nothing listens on port 9 of localhost in the test environment.
    let client = EmailJsClient::new(&config("http://127.0.0.1:9".to_string())).unwrap();
    let err = client.send(&fields()).await.unwrap_err();
    assert!(matches!(err, EmailSendError::Transport(_)));
}
