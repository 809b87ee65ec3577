use std::net::SocketAddr;

use futures::future::join_all;
use reqwest::{header, StatusCode};
use tokio::net::TcpListener;

use items_api::{env::Env, error::ServeError, Server};

const EXPECTED: &str = r#"[{"id":1,"name":"Item 1"},{"id":2,"name":"Item 2"},{"id":3,"name":"Item 3"}]"#;

pub async fn spawn_server() -> SocketAddr {
    let env = Env { listen: "127.0.0.1".to_string(), port: "0".to_string() };
    let server = Server::bind(&env).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

#[tokio::test]
async fn test_users_over_http() {
    let addr = spawn_server().await;

    let res = reqwest::get(format!("http://{}/api/users", addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert_eq!(content_type.parse::<mime::Mime>().unwrap(), mime::APPLICATION_JSON);
    assert_eq!(res.text().await.unwrap(), EXPECTED);
}

#[tokio::test]
async fn test_default_listen_accepts_ipv4_and_ipv6() {
    let env = Env { port: "0".to_string(), ..Default::default() };
    let server = Server::bind(&env).await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(server.run());

    for host in ["127.0.0.1", "[::1]"] {
        let res = reqwest::get(format!("http://{}:{}/api/users", host, port)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), EXPECTED);
    }
}

#[tokio::test]
async fn test_other_routes_do_not_return_items() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client.get(format!("http://{}/api/items", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_ne!(res.text().await.unwrap(), EXPECTED);

    let res = client.post(format!("http://{}/api/users", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_ne!(res.text().await.unwrap(), EXPECTED);
}

#[tokio::test]
async fn test_concurrent_requests() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let responses = join_all((0..50).map(|_| {
        let client = client.clone();
        async move {
            let res = client.get(format!("http://{}/api/users", addr)).send().await.unwrap();
            (res.status(), res.text().await.unwrap())
        }
    }))
    .await;
    assert_eq!(responses.len(), 50);
    for (status, body) in responses {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, EXPECTED);
    }
}

#[tokio::test]
async fn test_bind_occupied_port() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let env = Env { listen: "127.0.0.1".to_string(), port: port.to_string() };
    match Server::bind(&env).await {
        Err(ServeError::Bind { addr, source }) => {
            assert_eq!(addr, format!("127.0.0.1:{}", port));
            assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
        }
        other => panic!("expected bind error, but got {:?}", other),
    }
}

#[tokio::test]
async fn test_bind_invalid_port() {
    let env = Env { listen: "127.0.0.1".to_string(), port: "not-a-port".to_string() };
    assert!(matches!(Server::bind(&env).await, Err(ServeError::Bind { .. })));
}
