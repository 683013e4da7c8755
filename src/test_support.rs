//! Helpers for tests that drive the reactive runtime natively.

use std::future::Future;
use std::time::Duration;

use any_spawner::Executor;
use leptos::prelude::Owner;

/// Run `test` on a `LocalSet` with the tokio executor and a fresh owner
pub async fn run_reactive<F: Future<Output = ()>>(test: F) {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    tokio::task::LocalSet::new().run_until(test).await;
}

/// Let pending effects and spawned tasks run
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
}
