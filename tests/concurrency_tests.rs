//! Concurrency Tests for the Cache Engine
//!
//! Hammers one shared engine from many tasks on a multi-threaded runtime and
//! checks that counters and capacity stay exact.

use std::sync::Arc;
use std::time::Duration;

use ttl_cache::Cache;

const TTL: Duration = Duration::from_secs(300);

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_fill_then_one_more_evicts_once() {
    const N: usize = 256;
    let cache = Arc::new(Cache::<usize>::new(TTL, N).unwrap());

    let mut handles = Vec::new();
    for i in 0..N {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.set(format!("key{}", i), i, None).await;
        }));
    }
    for handle in handles {
        handle.await.expect("Task should not panic");
    }

    let stats = cache.stats().await;
    assert_eq!(stats.size, N);
    assert_eq!(stats.evictions, 0);

    cache.set("overflow", N, None).await;

    let stats = cache.stats().await;
    assert_eq!(stats.size, N);
    assert_eq!(stats.evictions, 1);
    assert_eq!(cache.get("overflow").await, Some(N));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_gets_count_exactly() {
    const READERS: usize = 32;
    const READS_PER_TASK: usize = 200;
    let cache = Arc::new(Cache::<String>::new(TTL, 16).unwrap());
    cache.set("present", "v".to_string(), None).await;

    let mut handles = Vec::new();
    for i in 0..READERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let key = if i % 2 == 0 { "present" } else { "absent" };
            for _ in 0..READS_PER_TASK {
                cache.get(key).await;
            }
        }));
    }
    for handle in handles {
        handle.await.expect("Task should not panic");
    }

    let stats = cache.stats().await;
    let half = (READERS / 2 * READS_PER_TASK) as u64;
    assert_eq!(stats.hits, half);
    assert_eq!(stats.misses, half);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_overflow_counts_every_eviction() {
    const CAPACITY: usize = 10;
    const WRITERS: usize = 100;
    let cache = Arc::new(Cache::<usize>::new(TTL, CAPACITY).unwrap());

    let mut handles = Vec::new();
    for i in 0..WRITERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.set(format!("key{}", i), i, None).await;
            let stats = cache.stats().await;
            assert!(stats.size <= CAPACITY);
        }));
    }
    for handle in handles {
        handle.await.expect("Task should not panic");
    }

    let stats = cache.stats().await;
    assert_eq!(stats.size, CAPACITY);
    assert_eq!(stats.evictions, (WRITERS - CAPACITY) as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_mixed_workload_with_reaper() {
    // Short default TTL so the reaper sweeps during the run
    let cache = Arc::new(Cache::<usize>::new(Duration::from_millis(20), 50).unwrap());

    let mut handles = Vec::new();
    for worker in 0..16usize {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let mut gets = 0u64;
            for i in 0..200usize {
                let key = format!("k{}", (worker * 7 + i) % 80);
                match i % 4 {
                    0 | 1 => cache.set(key, i, None).await,
                    2 => {
                        cache.get(&key).await;
                        gets += 1;
                    }
                    _ => cache.delete(&key).await,
                }
                if i % 50 == 0 {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
            gets
        }));
    }

    let mut total_gets = 0u64;
    for handle in handles {
        total_gets += handle.await.expect("Task should not panic");
    }

    let stats = cache.stats().await;
    assert_eq!(stats.hits + stats.misses, total_gets);
    assert!(stats.size <= 50);

    cache.shutdown();
}
