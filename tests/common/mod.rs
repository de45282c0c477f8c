#![allow(dead_code)]
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use actix_web::dev::ServerHandle;
use actix_web::web::{Bytes, Data};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use serde_json::{json, Value};
use transmission_exporter::config::structs::backend_config::BackendConfig;
use transmission_exporter::config::structs::configuration::Configuration;

pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";
/// `admin:secret`
pub const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// State of an in-process Transmission daemon.
pub struct MockDaemonState {
    pub session_id: Mutex<String>,
    pub require_auth: bool,
    pub version: String,
    pub handshakes: AtomicUsize,
    pub commands: AtomicUsize,
    pub fail_torrents: AtomicBool,
}

pub struct MockDaemon {
    pub address: String,
    pub state: Arc<MockDaemonState>,
    handle: ServerHandle,
}

impl MockDaemon {
    pub async fn start(require_auth: bool, version: &str) -> MockDaemon {
        let state = Arc::new(MockDaemonState {
            session_id: Mutex::new("session-1".to_string()),
            require_auth,
            version: version.to_string(),
            handshakes: AtomicUsize::new(0),
            commands: AtomicUsize::new(0),
            fail_torrents: AtomicBool::new(false),
        });
        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(app_state.clone()))
                .route("/transmission/rpc/", web::post().to(mock_rpc))
        })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let port = server.addrs()[0].port();
        let server = server.disable_signals().run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        MockDaemon {
            address: format!("http://127.0.0.1:{port}"),
            state,
            handle,
        }
    }

    /// Invalidates the current session id, as a daemon restart would.
    pub fn rotate_session_id(&self) {
        let mut session_id = self.state.session_id.lock();
        *session_id = format!("{session_id}-rotated");
    }

    pub fn handshakes(&self) -> usize {
        self.state.handshakes.load(Ordering::SeqCst)
    }

    pub fn commands(&self) -> usize {
        self.state.commands.load(Ordering::SeqCst)
    }

    pub fn fail_torrents(&self) {
        self.state.fail_torrents.store(true, Ordering::SeqCst);
    }

    pub fn backend(&self, name: &str) -> BackendConfig {
        BackendConfig {
            name: name.to_string(),
            address: self.address.clone(),
            username: if self.state.require_auth { "admin".to_string() } else { String::new() },
            password: if self.state.require_auth { "secret".to_string() } else { String::new() },
        }
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn mock_rpc(request: HttpRequest, body: Bytes, state: Data<Arc<MockDaemonState>>) -> HttpResponse {
    if state.require_auth {
        let authorization = request.headers().get("authorization").and_then(|value| value.to_str().ok());
        if authorization != Some(BASIC_AUTH) {
            return HttpResponse::Unauthorized().body("401: Unauthorized");
        }
    }

    let current = state.session_id.lock().clone();
    let presented = request.headers().get(SESSION_ID_HEADER).and_then(|value| value.to_str().ok());
    if presented != Some(current.as_str()) {
        if body.is_empty() {
            state.handshakes.fetch_add(1, Ordering::SeqCst);
        }
        return HttpResponse::Conflict()
            .insert_header((SESSION_ID_HEADER, current))
            .body("409: Conflict");
    }

    state.commands.fetch_add(1, Ordering::SeqCst);
    let command: Value = match serde_json::from_slice(&body) {
        Ok(command) => command,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };
    let response = match command["method"].as_str() {
        Some("torrent-get") if state.fail_torrents.load(Ordering::SeqCst) => json!({"result": "unable to read torrents"}),
        Some("torrent-get") => json!({"result": "success", "arguments": torrents()}),
        Some("session-get") => json!({"result": "success", "arguments": session(&state.version)}),
        Some("session-stats") => json!({"result": "success", "arguments": session_stats()}),
        _ => json!({"result": "method name not recognized"}),
    };
    HttpResponse::Ok().json(response)
}

pub fn torrents() -> Value {
    json!({
        "torrents": [
            {
                "id": 1,
                "name": "debian-12.5.0-amd64-netinst.iso",
                "hashString": "2a8f",
                "status": 6,
                "addedDate": 1700000000,
                "isFinished": true,
                "percentDone": 1.0,
                "uploadRatio": 3.25,
                "rateDownload": 0,
                "rateUpload": 20480,
                "peersGettingFromUs": 2,
                "files": [{"name": "debian-12.5.0-amd64-netinst.iso", "length": 659554304, "bytesCompleted": 659554304}],
                "trackerStats": [
                    {"id": 0, "tier": 0, "host": "bttracker.debian.org", "downloadCount": 40, "leecherCount": 3, "seederCount": 100},
                    {"id": 1, "tier": 1, "host": "bttracker.debian.org", "downloadCount": 2, "leecherCount": 4, "seederCount": 120}
                ]
            },
            {
                "id": 2,
                "name": "archlinux-2024.03.01-x86_64.iso",
                "status": 4,
                "addedDate": 1710000000,
                "percentDone": 0.5,
                "rateDownload": 1048576,
                "trackerStats": []
            }
        ]
    })
}

pub fn session(version: &str) -> Value {
    json!({
        "alt-speed-down": 50,
        "alt-speed-enabled": false,
        "alt-speed-up": 50,
        "cache-size-mb": 4,
        "download-dir": "/downloads/complete",
        "download-dir-free-space": 1099511627776i64,
        "download-queue-enabled": true,
        "download-queue-size": 5,
        "incomplete-dir": "/downloads/incomplete",
        "peer-limit-global": 200,
        "peer-limit-per-torrent": 50,
        "seed-queue-enabled": false,
        "seed-queue-size": 10,
        "seedRatioLimit": 2.0,
        "seedRatioLimited": true,
        "speed-limit-down": 100,
        "speed-limit-down-enabled": false,
        "speed-limit-up": 100,
        "speed-limit-up-enabled": true,
        "rpc-version": 17,
        "version": version
    })
}

pub fn session_stats() -> Value {
    json!({
        "downloadSpeed": 1048576,
        "uploadSpeed": 20480,
        "activeTorrentCount": 1,
        "pausedTorrentCount": 1,
        "torrentCount": 2,
        "current-stats": {"downloadedBytes": 1000, "uploadedBytes": 2000, "filesAdded": 1, "secondsActive": 3600, "sessionCount": 1},
        "cumulative-stats": {"downloadedBytes": 500000, "uploadedBytes": 900000, "filesAdded": 20, "secondsActive": 864000, "sessionCount": 14}
    })
}

/// Configuration polling the given daemons, with a short RPC timeout.
pub fn configuration(backends: Vec<BackendConfig>) -> Configuration {
    let mut config = Configuration::init();
    config.rpc_request_timeout = 5;
    config.backends = backends;
    config
}
