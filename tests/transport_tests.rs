mod common;

use std::sync::Arc;
use std::time::Duration;
use transmission_exporter::client::structs::backend_endpoint::BackendEndpoint;
use transmission_exporter::client::structs::transmission_client::TransmissionClient;
use transmission_exporter::client::traits::backend_query::BackendQuery;
use transmission_exporter::rpc::errors::RpcError;
use transmission_exporter::rpc::structs::credentials::Credentials;
use transmission_exporter::rpc::structs::reqwest_exchange::ReqwestExchange;

fn client(address: &str, credentials: Option<Credentials>) -> TransmissionClient {
    let exchange = Arc::new(ReqwestExchange::new(Duration::from_secs(5)).unwrap());
    TransmissionClient::new(BackendEndpoint {
        name: "seedbox".to_string(),
        address: address.to_string(),
        credentials,
    }, exchange)
}

fn admin() -> Option<Credentials> {
    Some(Credentials { username: "admin".to_string(), password: "secret".to_string() })
}

#[actix_web::test]
async fn test_handshake_then_command() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let client = client(&daemon.address, None);

    let session = client.get_session().await.unwrap();
    assert_eq!(session.version, "4.0.5");
    assert_eq!(session.cache_size_mb, 4);
    assert_eq!(daemon.handshakes(), 1);
    assert_eq!(daemon.commands(), 1);
    daemon.stop().await;
}

#[actix_web::test]
async fn test_session_id_is_reused() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let client = client(&daemon.address, None);

    client.get_session().await.unwrap();
    client.get_session_stats().await.unwrap();
    client.get_torrents().await.unwrap();
    assert_eq!(daemon.handshakes(), 1);
    assert_eq!(daemon.commands(), 3);
    daemon.stop().await;
}

#[actix_web::test]
async fn test_rotated_session_id_is_refreshed() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let client = client(&daemon.address, None);

    client.get_session().await.unwrap();
    daemon.rotate_session_id();
    let stats = client.get_session_stats().await.unwrap();
    assert_eq!(stats.torrent_count, 2);
    assert_eq!(daemon.handshakes(), 2);
    assert_eq!(daemon.commands(), 2);
    daemon.stop().await;
}

#[actix_web::test]
async fn test_basic_auth() {
    let daemon = common::MockDaemon::start(true, "4.0.5").await;

    let authorized = client(&daemon.address, admin());
    assert_eq!(authorized.get_torrents().await.unwrap().len(), 2);

    let anonymous = client(&daemon.address, None);
    assert!(matches!(anonymous.get_torrents().await, Err(RpcError::Unauthorized)));

    let wrong = client(&daemon.address, Some(Credentials { username: "admin".to_string(), password: "guess".to_string() }));
    assert!(matches!(wrong.get_session().await, Err(RpcError::Unauthorized)));
    daemon.stop().await;
}

#[actix_web::test]
async fn test_torrents_are_decoded() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let torrents = client(&daemon.address, None).get_torrents().await.unwrap();

    assert_eq!(torrents[0].name, "debian-12.5.0-amd64-netinst.iso");
    assert_eq!(torrents[0].tracker_stats.len(), 2);
    assert_eq!(torrents[0].files.len(), 1);
    assert_eq!(torrents[1].percent_done, 0.5);
    daemon.stop().await;
}

#[actix_web::test]
async fn test_command_error() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    daemon.fail_torrents();
    let client = client(&daemon.address, None);

    match client.get_torrents().await {
        Err(RpcError::Command(result)) => assert_eq!(result, "unable to read torrents"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(client.get_session().await.is_ok());
    daemon.stop().await;
}

#[actix_web::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    assert!(matches!(client(&address, None).get_session().await, Err(RpcError::Transport(_))));
}
