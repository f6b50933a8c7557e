mod common;

use std::sync::Arc;
use std::time::Duration;

use backstack::alert::{AlertChoice, AlertData};
use backstack::config::RouterConfig;
use backstack::event::EventData;
use backstack::router::{Destination, Route, RouteId, Router, RouterError};
use tokio::time::timeout;
use common::{config, spawn_router, unstarted_router, Kind, TestDest};

/// Push hands out increasing ids right away and registers the model once applied.
#[tokio::test]
async fn test_push_returns_increasing_ids() {
    let router = spawn_router();

    let first = router.push(TestDest::screen("a"));
    let second = router.push(TestDest::screen("b"));
    assert_eq!(first.id().get(), 1);
    assert_eq!(second.id().get(), 2);
    assert_eq!(first.kind(), Some(&Kind::Screen));

    router.flush().await.unwrap();

    assert_eq!(router.path().routes(), &[first, second]);
    assert_eq!(router.path().top(), second);
    assert_eq!(router.get_model(&first).as_deref(), Some("a"));
    assert_eq!(router.get_model(&second).as_deref(), Some("b"));
}

/// Pop without a target removes only the visible route and its model.
#[tokio::test]
async fn test_pop_removes_top() {
    let router = spawn_router();
    let a = router.push(TestDest::screen("a"));
    let b = router.push(TestDest::screen("b"));
    let c = router.push(TestDest::screen("c"));

    router.pop();
    router.flush().await.unwrap();

    assert_eq!(router.path().routes(), &[a, b]);
    assert_eq!(router.get_model(&c), None);
    assert_eq!(router.get_model(&b).as_deref(), Some("b"));
}

/// Pop to a target keeps the target visible and evicts everything above it.
#[tokio::test]
async fn test_pop_to_target() {
    let router = spawn_router();
    let a = router.push(TestDest::screen("a"));
    let b = router.push(TestDest::screen("b"));
    let c = router.push(TestDest::screen("c"));

    router.pop_to(a);
    router.flush().await.unwrap();

    assert_eq!(router.path().routes(), &[a]);
    assert_eq!(router.get_model(&b), None);
    assert_eq!(router.get_model(&c), None);
    assert_eq!(router.get_model(&a).as_deref(), Some("a"));
}

/// Popping to a route that is no longer in the path changes nothing.
#[tokio::test]
async fn test_pop_to_missing_route_is_ignored() {
    let router = spawn_router();
    let a = router.push(TestDest::screen("a"));
    let b = router.push(TestDest::screen("b"));
    router.pop();
    router.flush().await.unwrap();

    router.pop_to(b);
    router.pop_to(Route::Empty);
    router.flush().await.unwrap();

    assert_eq!(router.path().routes(), &[a]);
    assert_eq!(router.get_model(&a).as_deref(), Some("a"));
}

/// Popping to the visible route or popping an empty path is a no-op.
#[tokio::test]
async fn test_noop_pops() {
    let router = spawn_router();
    router.pop();
    router.flush().await.unwrap();
    assert!(router.path().is_empty());
    assert_eq!(router.path().top(), Route::Empty);

    let a = router.push(TestDest::screen("a"));
    router.pop_to(a);
    router.flush().await.unwrap();
    assert_eq!(router.path().routes(), &[a]);
}

/// The scenario from the demo app: push A, push B, pop back to A.
#[tokio::test]
async fn test_push_push_pop_to_first() {
    let router = spawn_router();
    let mut observer = router.observe_path();
    assert!(observer.next().await.unwrap().is_empty());

    let a = router.push(TestDest::screen("A"));
    let b = router.push(TestDest::screen("B"));
    assert_eq!(a.id().get(), 1);
    assert_eq!(b.id().get(), 2);

    router.flush().await.unwrap();
    assert_eq!(router.path().routes(), &[a, b]);
    assert_eq!(observer.next().await.unwrap().routes(), &[a, b]);

    router.pop_to(a);
    router.flush().await.unwrap();

    let path = observer.next().await.unwrap();
    assert_eq!(path.routes(), &[a]);
    assert_eq!(router.get_model(&b), None);
}

/// Destinations that break the route contract are rejected and still consume an id.
#[tokio::test]
async fn test_invalid_destinations_rejected() {
    let router = spawn_router();

    assert_eq!(router.try_push(TestDest::Empty), Err(RouterError::EmptyRoute));
    assert!(matches!(
        router.try_push(TestDest::WrongId),
        Err(RouterError::RouteIdMismatch { .. })
    ));
    assert_eq!(router.push(TestDest::Empty), Route::Empty);

    let route = router.push(TestDest::screen("ok"));
    assert_eq!(route.id().get(), 4);

    router.flush().await.unwrap();
    assert_eq!(router.path().routes(), &[route]);
    assert_eq!(router.get_model(&Route::Empty), None);
}

/// A full command queue rejects the push instead of blocking the caller.
#[tokio::test]
async fn test_full_queue_rejects_push() {
    let (router, worker) = unstarted_router(1);

    let first = router.try_push(TestDest::screen("a")).unwrap();
    assert_eq!(
        router.try_push(TestDest::screen("b")),
        Err(RouterError::CommandQueueFull { capacity: 1 })
    );
    assert_eq!(router.push(TestDest::screen("c")), Route::Empty);
    assert_eq!(
        router.try_pop(None),
        Err(RouterError::CommandQueueFull { capacity: 1 })
    );

    // Nothing is applied until the worker runs.
    assert!(router.path().is_empty());

    tokio::spawn(worker.run());
    router.flush().await.unwrap();
    assert_eq!(router.path().routes(), &[first]);
}

/// Once the worker is gone every queued operation reports it.
#[tokio::test]
async fn test_stopped_worker() {
    let (router, worker) = unstarted_router(4);
    drop(worker);

    assert_eq!(
        router.try_push(TestDest::screen("a")),
        Err(RouterError::WorkerStopped)
    );
    assert_eq!(router.try_pop(None), Err(RouterError::WorkerStopped));
    assert_eq!(router.flush().await, Err(RouterError::WorkerStopped));
}

/// Pushes from concurrent tasks are never lost or reordered per caller.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pushes() {
    let router = spawn_router();

    let mut tasks = Vec::new();
    for task in 0..4 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            (0..25)
                .map(|n| router.push(TestDest::screen(format!("{task}:{n}"))))
                .collect::<Vec<_>>()
        }));
    }

    let mut pushed = Vec::new();
    for task in tasks {
        pushed.push(task.await.unwrap());
    }
    router.flush().await.unwrap();

    let path = router.path();
    assert_eq!(path.len(), 100);

    for routes in &pushed {
        let positions: Vec<usize> = routes
            .iter()
            .map(|route| {
                path.routes()
                    .iter()
                    .position(|r| r == route)
                    .expect("pushed route missing from path")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    let mut ids: Vec<u64> = path.routes().iter().map(|r| r.id().get()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

/// Alerts are independent of the queue and observable as latest value.
#[tokio::test]
async fn test_show_and_hide_alert() {
    let router = spawn_router();
    let mut observer = router.observe_alert();
    assert!(observer.next().await.unwrap().is_none());

    let hider = router.clone();
    let alert = AlertData::builder()
        .title("Hello!")
        .cancel(AlertChoice::new("Dismiss", move || hider.hide_alert()))
        .build()
        .unwrap();
    router.show_alert(alert);

    let shown = observer.next().await.unwrap().unwrap();
    assert_eq!(shown.title(), Some("Hello!"));
    assert!(router.alert().is_some());

    assert!(shown.dismiss());
    assert!(observer.next().await.unwrap().is_none());
    assert!(router.alert().is_none());
}

/// Events sent before anyone subscribes are replayed to the first subscriber.
#[tokio::test]
async fn test_events_replayed_to_late_subscriber() {
    let router = spawn_router();
    router.send_event(EventData::send_text("Hello", "Sharing", "What a cool app."));

    let mut subscription = router.subscribe_events();
    assert_eq!(
        subscription.recv().await,
        Some(EventData::send_text("Hello", "Sharing", "What a cool app."))
    );

    router
        .try_send_event(EventData::send_text("Hey!", "More Sharing", "Hooray."))
        .unwrap();
    assert_eq!(
        subscription.recv().await,
        Some(EventData::send_text("Hey!", "More Sharing", "Hooray."))
    );
}

/// A subscriber that never reads eventually causes events to be dropped.
#[tokio::test]
async fn test_event_overflow() {
    let (router, _worker) = Router::<TestDest>::new(&config(4, 2));
    let _subscription = router.subscribe_events();

    router.try_send_event(EventData::send_text("1", "", "")).unwrap();
    router.try_send_event(EventData::send_text("2", "", "")).unwrap();
    assert_eq!(
        router.try_send_event(EventData::send_text("3", "", "")),
        Err(RouterError::EventBufferFull { capacity: 2 })
    );
}

/// Destination whose model building and teardown both read the registry.
struct Nested {
    name: &'static str,
    router: Router<Nested>,
}

struct NestedModel {
    name: &'static str,
    below: Option<&'static str>,
    router: Router<Nested>,
}

impl Drop for NestedModel {
    fn drop(&mut self) {
        let _ = self.router.get_model(&self.router.path().top());
    }
}

impl Destination for Nested {
    type Kind = Kind;
    type Model = Arc<NestedModel>;

    fn route(&self, id: RouteId) -> Route<Kind> {
        Route::live(id, Kind::Screen)
    }

    fn into_model(self) -> Arc<NestedModel> {
        let below = self
            .router
            .get_model(&self.router.path().top())
            .map(|model| model.name);
        Arc::new(NestedModel {
            name: self.name,
            below,
            router: self.router,
        })
    }
}

/// Models may look up other models while being built or dropped.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_models_may_read_registry() {
    let router = Router::<Nested>::spawn(&RouterConfig::default());
    let a = router.push(Nested {
        name: "a",
        router: router.clone(),
    });
    let b = router.push(Nested {
        name: "b",
        router: router.clone(),
    });

    timeout(Duration::from_secs(2), router.flush())
        .await
        .expect("worker stuck building a model")
        .unwrap();
    assert_eq!(router.get_model(&b).map(|model| model.below), Some(Some("a")));

    router.pop_to(a);
    timeout(Duration::from_secs(2), router.flush())
        .await
        .expect("worker stuck dropping a model")
        .unwrap();
    assert_eq!(router.path().routes(), &[a]);
    assert!(router.get_model(&b).is_none());
}
