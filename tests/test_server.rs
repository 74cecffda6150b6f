//! End-to-end tests over a real listener.

use std::sync::atomic::Ordering;
use std::time::Duration;

use advisor_gateway::config::ServerConfig;
use advisor_gateway::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn test_overview_over_tcp() {
    let (overview, calls) = common::counting_overview("hello advisor");
    let (addr, shutdown) = common::start_server(overview).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{}/advisor/overview", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "hello advisor");

    let res = client
        .get(format!("http://{}/overview", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_share_frozen_table() {
    let (overview, calls) = common::counting_overview("ok");
    let (addr, shutdown) = common::start_server(overview).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut tasks = Vec::new();
    for _ in 0..16 {
        let client = client.clone();
        let url = format!("http://{}/advisor/overview", addr);
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.map(|r| r.status().as_u16())
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), 200);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 16);
    shutdown.trigger();
}

#[tokio::test]
async fn test_run_returns_after_shutdown_trigger() {
    let (overview, _) = common::counting_overview("ok");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = common::server_with(ServerConfig::default(), overview);
    assert_eq!(server.dispatcher().table().len(), 1);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}/advisor/overview", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    drop(res);
    drop(client);

    shutdown.trigger();
    let joined = tokio::time::timeout(Duration::from_secs(2), handle).await;
    assert!(
        matches!(joined, Ok(Ok(Ok(())))),
        "server did not stop cleanly: {joined:?}"
    );
}
