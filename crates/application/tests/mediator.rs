//! Dispatch semantics of the `Mediator`, independent of any product wiring.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;
use helpapp_application::{ApplicationError, ApplicationResult, Mediator, Request, RequestHandler};
use tokio_util::sync::CancellationToken;

struct Echo(String);

impl Request for Echo {
    type Response = String;
}

struct Stall;

impl Request for Stall {
    type Response = ();
}

struct EchoHandler {
    prefix: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RequestHandler<Echo> for EchoHandler {
    async fn handle(&self, request: Echo, _cancel: CancellationToken) -> ApplicationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}{}", self.prefix, request.0))
    }
}

/// Never completes on its own.
struct StallHandler;

#[async_trait]
impl RequestHandler<Stall> for StallHandler {
    async fn handle(&self, _request: Stall, _cancel: CancellationToken) -> ApplicationResult<()> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// A write that must finish once started.
struct Commit;

impl Request for Commit {
    type Response = &'static str;
    const ABANDON_ON_CANCEL: bool = false;
}

/// Cancels the caller's token mid-flight, then completes the write.
struct CommitHandler {
    committed: Arc<AtomicUsize>,
}

#[async_trait]
impl RequestHandler<Commit> for CommitHandler {
    async fn handle(&self, _request: Commit, cancel: CancellationToken) -> ApplicationResult<&'static str> {
        cancel.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.committed.fetch_add(1, Ordering::SeqCst);
        Ok("committed")
    }
}

fn echo(prefix: &'static str) -> (EchoHandler, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (
        EchoHandler {
            prefix,
            calls: Arc::clone(&calls),
        },
        calls,
    )
}

#[tokio::test]
async fn test_send_routes_to_the_registered_handler() {
    let (handler, calls) = echo("> ");
    let mediator = Mediator::builder().register::<Echo, _>(handler).build();

    let reply = mediator
        .send(Echo("hello".into()), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(reply, "> hello");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unregistered_request_type_is_reported_by_name() {
    let (handler, _) = echo("");
    let mediator = Mediator::builder().register::<Echo, _>(handler).build();

    let err = mediator
        .send(Stall, CancellationToken::new())
        .await
        .unwrap_err();

    assert_matches!(err, ApplicationError::HandlerNotRegistered("Stall"));
}

#[tokio::test]
async fn test_later_registration_replaces_earlier_one() {
    let (first, first_calls) = echo("first:");
    let (second, second_calls) = echo("second:");
    let mediator = Mediator::builder()
        .register::<Echo, _>(first)
        .register::<Echo, _>(second)
        .build();

    let reply = mediator
        .send(Echo("x".into()), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(reply, "second:x");
    assert_eq!(first_calls.load(Ordering::SeqCst), 0);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pre_cancelled_token_skips_the_handler() {
    let (handler, calls) = echo("");
    let mediator = Mediator::builder().register::<Echo, _>(handler).build();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = mediator.send(Echo("x".into()), cancel).await.unwrap_err();

    assert_matches!(err, ApplicationError::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cancelling_in_flight_request_abandons_the_handler() {
    let mediator = Mediator::builder()
        .register::<Stall, _>(StallHandler)
        .build();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), mediator.send(Stall, cancel))
        .await
        .expect("send should return once the token is cancelled");

    assert_matches!(result, Err(ApplicationError::Cancelled));
}

#[tokio::test]
async fn test_write_request_runs_to_completion_despite_cancellation() {
    let committed = Arc::new(AtomicUsize::new(0));
    let mediator = Mediator::builder()
        .register::<Commit, _>(CommitHandler {
            committed: Arc::clone(&committed),
        })
        .build();
    let cancel = CancellationToken::new();

    let reply = mediator.send(Commit, cancel.clone()).await.unwrap();

    assert_eq!(reply, "committed");
    assert!(cancel.is_cancelled());
    assert_eq!(committed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_mediator_clones_share_registrations() {
    let (handler, calls) = echo("");
    let mediator = Mediator::builder().register::<Echo, _>(handler).build();
    let clone = mediator.clone();

    clone
        .send(Echo("a".into()), CancellationToken::new())
        .await
        .unwrap();
    mediator
        .send(Echo("b".into()), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
