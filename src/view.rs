//! Mount/update orchestration and snapshot observers.
//!
//! A [`ViewRenderer`] pulls a fresh [`Node`] tree from a [`TreeSource`],
//! translates it and publishes the pair as a [`RenderSnapshot`]. Anything
//! that wants frames, typically a loop feeding a
//! [`LiveDisplay`](crate::renderer::LiveDisplay), subscribes to the
//! renderer's [`SnapshotHub`].
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use flowterm::view::{RenderSnapshot, ViewRenderer};
//! use flowterm::Node;
//!
//! let view = ViewRenderer::with_defaults();
//! let seen = Arc::new(Mutex::new(0));
//! let counter = Arc::clone(&seen);
//! let _subscription = view.subscribe(move |_: &RenderSnapshot| {
//!     *counter.lock().unwrap() += 1;
//! });
//!
//! let mut ticks = 0;
//! let mut source = || {
//!     ticks += 1;
//!     Node::element("p").with_child(Node::text(format!("tick {ticks}")))
//! };
//! view.mount(&mut source);
//! view.mount(&mut source);
//! assert_eq!(*seen.lock().unwrap(), 2);
//! ```

use crate::node::Node;
use crate::renderable::SharedRenderable;
use crate::translate::TranslatorRegistry;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// A translated tree, immutable once published.
#[derive(Clone)]
pub struct RenderSnapshot {
    pub root: Arc<Node>,
    pub renderable: SharedRenderable,
}

impl fmt::Debug for RenderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSnapshot")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Receives snapshots from a [`SnapshotHub`].
pub trait SnapshotObserver: Send + Sync {
    fn on_next(&self, snapshot: &RenderSnapshot);

    /// Called once when the hub completes.
    fn on_completed(&self) {}
}

impl<F> SnapshotObserver for F
where
    F: Fn(&RenderSnapshot) + Send + Sync,
{
    fn on_next(&self, snapshot: &RenderSnapshot) {
        self(snapshot);
    }
}

enum Event {
    Next(RenderSnapshot),
    Completed,
}

/// One queued notification. Targets carry their subscription id, or `None`
/// when they must be notified even though they are no longer registered.
struct Delivery {
    targets: Vec<(Option<u64>, Arc<dyn SnapshotObserver>)>,
    event: Event,
}

#[derive(Default)]
struct HubState {
    current: Option<RenderSnapshot>,
    observers: Vec<(u64, Arc<dyn SnapshotObserver>)>,
    next_id: u64,
    completed: bool,
    queue: VecDeque<Delivery>,
    delivering: bool,
    /// Ids unsubscribed while deliveries were still queued.
    retired: Vec<u64>,
}

/// Thread-safe fan-out of snapshots to observers.
///
/// New subscribers receive the current snapshot, if any. Notifications go
/// through one queue drained by one thread at a time, so every observer
/// sees snapshots in publish order and callbacks never run concurrently.
/// Observers are called outside the hub's lock: a publish or subscribe made
/// from inside a callback is delivered once the running fan-out finishes,
/// and a publish made while another thread is delivering returns at once,
/// leaving that thread to deliver it.
#[derive(Clone, Default)]
pub struct SnapshotHub {
    state: Arc<Mutex<HubState>>,
}

fn lock(state: &Mutex<HubState>) -> MutexGuard<'_, HubState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the delivery slot if an observer panics mid fan-out.
struct DeliveryGuard<'a>(&'a Mutex<HubState>);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            lock(self.0).delivering = false;
        }
    }
}

impl SnapshotHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn current(&self) -> Option<RenderSnapshot> {
        lock(&self.state).current.clone()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        lock(&self.state).observers.len()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        lock(&self.state).completed
    }

    /// Store `snapshot` as current and hand it to every observer. Ignored
    /// after completion.
    pub fn publish(&self, snapshot: RenderSnapshot) {
        {
            let mut state = lock(&self.state);
            if state.completed {
                tracing::debug!("snapshot published after completion, dropping");
                return;
            }
            state.current = Some(snapshot.clone());
            let targets: Vec<_> = state
                .observers
                .iter()
                .map(|(id, o)| (Some(*id), Arc::clone(o)))
                .collect();
            tracing::debug!(observers = targets.len(), "publishing snapshot");
            state.queue.push_back(Delivery {
                targets,
                event: Event::Next(snapshot),
            });
        }
        self.deliver();
    }

    /// Register an observer. It receives the current snapshot first, then
    /// everything published after it.
    ///
    /// After completion the observer gets the last snapshot followed by
    /// `on_completed`, and is not retained.
    #[must_use = "dropping the subscription unsubscribes the observer"]
    pub fn subscribe(&self, observer: impl SnapshotObserver + 'static) -> Subscription {
        let observer: Arc<dyn SnapshotObserver> = Arc::new(observer);
        let id = {
            let mut state = lock(&self.state);
            let id = if state.completed {
                None
            } else {
                let id = state.next_id;
                state.next_id += 1;
                state.observers.push((id, Arc::clone(&observer)));
                Some(id)
            };
            if let Some(snapshot) = state.current.clone() {
                state.queue.push_back(Delivery {
                    targets: vec![(id, Arc::clone(&observer))],
                    event: Event::Next(snapshot),
                });
            }
            if state.completed {
                state.queue.push_back(Delivery {
                    targets: vec![(None, observer)],
                    event: Event::Completed,
                });
            }
            id
        };
        self.deliver();
        Subscription {
            hub: Arc::downgrade(&self.state),
            id,
        }
    }

    /// Notify every observer of completion and drop them. Idempotent.
    pub fn complete(&self) {
        {
            let mut state = lock(&self.state);
            if state.completed {
                return;
            }
            state.completed = true;
            let targets = std::mem::take(&mut state.observers)
                .into_iter()
                .map(|(id, o)| (Some(id), o))
                .collect();
            state.queue.push_back(Delivery {
                targets,
                event: Event::Completed,
            });
        }
        self.deliver();
    }

    /// Drain the queue unless another call is already draining it.
    fn deliver(&self) {
        {
            let mut state = lock(&self.state);
            if state.delivering {
                return;
            }
            state.delivering = true;
        }
        let _guard = DeliveryGuard(&self.state);

        loop {
            let (targets, event) = {
                let mut state = lock(&self.state);
                let Some(delivery) = state.queue.pop_front() else {
                    state.delivering = false;
                    state.retired.clear();
                    return;
                };
                let targets: Vec<_> = delivery
                    .targets
                    .into_iter()
                    .filter(|(id, _)| id.is_none_or(|id| !state.retired.contains(&id)))
                    .map(|(_, o)| o)
                    .collect();
                (targets, delivery.event)
            };
            for observer in &targets {
                match &event {
                    Event::Next(snapshot) => observer.on_next(snapshot),
                    Event::Completed => observer.on_completed(),
                }
            }
        }
    }
}

/// Handle for one observer. Dropping it unsubscribes.
///
/// Once dropped, the observer receives nothing that is still queued for it.
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<Mutex<HubState>>,
    id: Option<u64>,
}

impl Subscription {
    /// Whether the observer is still registered with a live hub.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let (Some(id), Some(hub)) = (self.id, self.hub.upgrade()) else {
            return false;
        };
        lock(&hub).observers.iter().any(|(i, _)| *i == id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let (Some(id), Some(hub)) = (self.id, self.hub.upgrade()) {
            let mut state = lock(&hub);
            state.observers.retain(|(i, _)| *i != id);
            if state.delivering || !state.queue.is_empty() {
                state.retired.push(id);
            }
        }
    }
}

/// Produces a fresh tree for every mount.
pub trait TreeSource {
    fn build(&mut self) -> Node;
}

impl<F: FnMut() -> Node> TreeSource for F {
    fn build(&mut self) -> Node {
        self()
    }
}

/// Translates trees and publishes the results.
///
/// Dropping the renderer completes its hub.
pub struct ViewRenderer {
    registry: TranslatorRegistry,
    hub: SnapshotHub,
}

impl ViewRenderer {
    #[must_use]
    pub fn new(registry: TranslatorRegistry) -> Self {
        Self {
            registry,
            hub: SnapshotHub::new(),
        }
    }

    /// A renderer using the built-in translators.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(TranslatorRegistry::with_defaults())
    }

    #[must_use]
    pub fn registry(&self) -> &TranslatorRegistry {
        &self.registry
    }

    #[must_use]
    pub fn hub(&self) -> &SnapshotHub {
        &self.hub
    }

    /// Translate `root` and publish the snapshot.
    pub fn render(&self, root: Node) -> RenderSnapshot {
        let renderable = self.registry.translate(&root);
        let snapshot = RenderSnapshot {
            root: Arc::new(root),
            renderable,
        };
        self.hub.publish(snapshot.clone());
        snapshot
    }

    /// Pull a tree from `source`, then [`render`](Self::render) it.
    pub fn mount(&self, source: &mut impl TreeSource) -> RenderSnapshot {
        self.render(source.build())
    }

    #[must_use = "dropping the subscription unsubscribes the observer"]
    pub fn subscribe(&self, observer: impl SnapshotObserver + 'static) -> Subscription {
        self.hub.subscribe(observer)
    }

    /// Complete the hub; observers get `on_completed`.
    pub fn dispose(&self) {
        self.hub.complete();
    }
}

impl Drop for ViewRenderer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderable::{RenderOptions, Renderable};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counts {
        next: AtomicUsize,
        completed: AtomicUsize,
    }

    impl Counts {
        fn next(&self) -> usize {
            self.next.load(Ordering::SeqCst)
        }

        fn completed(&self) -> usize {
            self.completed.load(Ordering::SeqCst)
        }
    }

    struct Recorder(Arc<Counts>);

    impl SnapshotObserver for Recorder {
        fn on_next(&self, _snapshot: &RenderSnapshot) {
            self.0.next.fetch_add(1, Ordering::SeqCst);
        }

        fn on_completed(&self) {
            self.0.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn recorder() -> (Recorder, Arc<Counts>) {
        let counts = Arc::new(Counts::default());
        (Recorder(Arc::clone(&counts)), counts)
    }

    fn snapshot(text: &str) -> RenderSnapshot {
        let registry = TranslatorRegistry::with_defaults();
        let node = Node::text(text);
        RenderSnapshot {
            renderable: registry.translate(&node),
            root: Arc::new(node),
        }
    }

    #[test]
    fn test_late_subscriber_gets_current() {
        let hub = SnapshotHub::new();
        hub.publish(snapshot("a"));
        let (observer, counts) = recorder();
        let _sub = hub.subscribe(observer);
        assert_eq!(counts.next(), 1);

        hub.publish(snapshot("b"));
        assert_eq!(counts.next(), 2);
    }

    #[test]
    fn test_subscribe_before_first_publish() {
        let hub = SnapshotHub::new();
        let (observer, counts) = recorder();
        let _sub = hub.subscribe(observer);
        assert_eq!(counts.next(), 0);
        assert!(hub.current().is_none());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let hub = SnapshotHub::new();
        let (observer, counts) = recorder();
        let sub = hub.subscribe(observer);
        assert!(sub.is_active());
        assert_eq!(hub.observer_count(), 1);
        drop(sub);
        assert_eq!(hub.observer_count(), 0);
        hub.publish(snapshot("a"));
        assert_eq!(counts.next(), 0);
    }

    #[test]
    fn test_complete_notifies_once() {
        let hub = SnapshotHub::new();
        let (observer, counts) = recorder();
        let sub = hub.subscribe(observer);
        hub.complete();
        hub.complete();
        assert!(hub.is_completed());
        assert_eq!(counts.completed(), 1);
        assert!(!sub.is_active());

        hub.publish(snapshot("ignored"));
        assert_eq!(counts.next(), 0);
    }

    #[test]
    fn test_subscribe_after_completion() {
        let hub = SnapshotHub::new();
        hub.publish(snapshot("last"));
        hub.complete();
        let (observer, counts) = recorder();
        let sub = hub.subscribe(observer);
        assert_eq!(counts.next(), 1);
        assert_eq!(counts.completed(), 1);
        assert!(!sub.is_active());
    }

    #[test]
    fn test_mount_translates_fresh_tree() {
        let view = ViewRenderer::with_defaults();
        let mut n = 0;
        let mut source = || {
            n += 1;
            Node::text(format!("frame {n}"))
        };
        view.mount(&mut source);
        let snap = view.mount(&mut source);
        assert_eq!(snap.root.as_text(), Some("frame 2"));
        let lines = snap.renderable.render_lines(&RenderOptions::new(20, 5), 20);
        assert_eq!(lines.len(), 1);
        assert!(view.hub().current().is_some());
    }

    fn text_of(snapshot: &RenderSnapshot) -> String {
        snapshot.root.as_text().unwrap_or_default().to_string()
    }

    #[test]
    fn test_publish_from_callback_keeps_order() {
        let hub = SnapshotHub::new();
        let inner = hub.clone();
        let _republisher = hub.subscribe(move |s: &RenderSnapshot| {
            if s.root.as_text() == Some("one") {
                inner.publish(snapshot("two"));
            }
        });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _recorder = hub.subscribe(move |s: &RenderSnapshot| {
            sink.lock().unwrap().push(text_of(s));
        });

        hub.publish(snapshot("one"));
        assert_eq!(*seen.lock().unwrap(), vec!["one", "two"]);
        assert_eq!(hub.current().map(|s| text_of(&s)).as_deref(), Some("two"));
    }

    #[test]
    fn test_concurrent_subscribe_and_drop() {
        let hub = SnapshotHub::new();
        hub.publish(snapshot("start"));
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let sub = hub.subscribe(|_: &RenderSnapshot| {});
                        drop(sub);
                    }
                });
            }
            scope.spawn(|| {
                for i in 0..50 {
                    hub.publish(snapshot(&format!("frame {i}")));
                }
            });
        });
        assert_eq!(hub.observer_count(), 0);
    }

    #[test]
    fn test_concurrent_publish_ends_on_current() {
        let hub = SnapshotHub::new();
        let observers = std::thread::scope(|scope| {
            for t in 0..4 {
                let hub = &hub;
                scope.spawn(move || {
                    for i in 0..25 {
                        hub.publish(snapshot(&format!("t{t} frame {i}")));
                    }
                });
            }
            let hub = &hub;
            let subscribers: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        let last = Arc::new(Mutex::new(None));
                        let sink = Arc::clone(&last);
                        let sub = hub.subscribe(move |s: &RenderSnapshot| {
                            *sink.lock().unwrap() = Some(text_of(s));
                        });
                        (sub, last)
                    })
                })
                .collect();
            subscribers
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });

        let current = hub.current().map(|s| text_of(&s));
        assert!(current.is_some());
        for (sub, last) in &observers {
            assert!(sub.is_active());
            assert_eq!(*last.lock().unwrap(), current);
        }
    }

    #[test]
    fn test_drop_completes_observers() {
        let (observer, counts) = recorder();
        let view = ViewRenderer::with_defaults();
        let _sub = view.subscribe(observer);
        drop(view);
        assert_eq!(counts.completed(), 1);
    }
}
