//! Cache-aside flow for generated job content.
//!
//! derive key → `get` → on miss call the generator → `set` → return.
//! Concurrent misses on one key may both generate; the later `set` wins.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{recommendations_key, TtlCache};
use crate::errors::AppError;
use crate::jobs::generator::Generator;
use crate::jobs::models::{JobDetails, JobRecommendation};
use crate::models::profile::{JobQuery, ResumeProfile};

/// A result and whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    pub cached: bool,
}

/// Returns the cached value under `key`, or runs `generate` and caches its output.
///
/// Generator errors are returned unchanged and nothing is cached. A cached
/// payload that no longer deserializes as `T` is dropped and regenerated.
pub async fn get_or_generate<T, F, Fut>(
    cache: &TtlCache<Value>,
    key: &str,
    generate: F,
) -> Result<Cached<T>, AppError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    if let Some(raw) = cache.get(key) {
        match serde_json::from_value::<T>(raw) {
            Ok(value) => {
                return Ok(Cached {
                    value,
                    cached: true,
                })
            }
            Err(e) => {
                warn!("Dropping unreadable cache entry {key}: {e}");
                cache.delete(key);
            }
        }
    }

    debug!("cache miss: {key}");
    let value = generate().await?;
    let raw = serde_json::to_value(&value).map_err(|e| AppError::Internal(e.into()))?;
    cache.set(key, raw);

    Ok(Cached {
        value,
        cached: false,
    })
}

pub async fn job_details(
    cache: &TtlCache<Value>,
    generator: &dyn Generator,
    query: &JobQuery,
) -> Result<Cached<JobDetails>, AppError> {
    let key = query.cache_key();
    get_or_generate(cache, &key, move || async move {
        generator
            .job_details(query)
            .await
            .map_err(|e| AppError::Llm(format!("Job details generation failed: {e}")))
    })
    .await
}

pub async fn recommendations(
    cache: &TtlCache<Value>,
    generator: &dyn Generator,
    profile: &ResumeProfile,
    keywords: &[String],
) -> Result<Cached<Vec<JobRecommendation>>, AppError> {
    let key = recommendations_key(profile, keywords);
    get_or_generate(cache, &key, move || async move {
        generator
            .recommendations(profile, keywords)
            .await
            .map(|r| r.recommendations)
            .map_err(|e| AppError::Llm(format!("Recommendation generation failed: {e}")))
    })
    .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::jobs::generator::testing::CountingGenerator;

    const TTL: Duration = Duration::from_secs(60 * 60);

    fn query() -> JobQuery {
        JobQuery {
            title: "Frontend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            skills: vec!["React".to_string(), "JS".to_string()],
        }
    }

    fn profile() -> ResumeProfile {
        ResumeProfile {
            skills: vec!["JS".to_string(), "React".to_string()],
            summary: Some("Engineer".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_details_second_call_is_cached() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::default();

        let first = job_details(&cache, &generator, &query()).await.unwrap();
        assert!(!first.cached);

        let second = job_details(&cache, &generator, &query()).await.unwrap();
        assert!(second.cached);
        assert_eq!(second.value, first.value);
        assert_eq!(generator.job_details_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reformatted_query_hits_cache() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::default();
        job_details(&cache, &generator, &query()).await.unwrap();

        let noisy = JobQuery {
            title: "  frontend ENGINEER".to_string(),
            company: "acme".to_string(),
            location: Some("remote ".to_string()),
            skills: vec!["js".to_string(), "react".to_string()],
        };
        let hit = job_details(&cache, &generator, &noisy).await.unwrap();
        assert!(hit.cached);
        assert_eq!(generator.job_details_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_triggers_regeneration() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::default();

        let first = recommendations(&cache, &generator, &profile(), &[]).await.unwrap();
        tokio::time::advance(TTL).await;
        let again = recommendations(&cache, &generator, &profile(), &[]).await.unwrap();

        assert!(!again.cached);
        assert_ne!(again.value, first.value);
        assert_eq!(generator.recommendation_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_namespaces_do_not_collide() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::default();

        job_details(&cache, &generator, &query()).await.unwrap();
        recommendations(&cache, &generator, &profile(), &["react".to_string()])
            .await
            .unwrap();

        assert_eq!(cache.size(), 2);
        assert!(cache.has(&query().cache_key()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generator_failure_is_propagated_and_not_cached() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::failing();

        let err = job_details(&cache, &generator, &query()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(cache.size(), 0);

        let err = recommendations(&cache, &generator, &profile(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreadable_entry_is_replaced() {
        let cache = TtlCache::new(TTL);
        let generator = CountingGenerator::default();
        let key = query().cache_key();
        cache.set(key.clone(), json!({"unexpected": "shape"}));

        let result = job_details(&cache, &generator, &query()).await.unwrap();
        assert!(!result.cached);
        assert_eq!(generator.job_details_calls(), 1);
        assert_eq!(cache.get(&key).unwrap()["title"], "Frontend Engineer");
    }

    #[tokio::test]
    async fn test_concurrent_misses_may_duplicate_but_stay_consistent() {
        let cache = Arc::new(TtlCache::new(TTL));
        let generator = Arc::new(CountingGenerator::default());

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let cache = Arc::clone(&cache);
            let generator = Arc::clone(&generator);
            tasks.push(tokio::spawn(async move {
                job_details(&cache, generator.as_ref(), &query())
                    .await
                    .map(|r| r.value.title)
            }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap(), "Frontend Engineer");
        }

        let calls = generator.job_details_calls();
        assert!((1..=16).contains(&calls));
        assert_eq!(cache.size(), 1);
        assert!(job_details(&cache, generator.as_ref(), &query())
            .await
            .unwrap()
            .cached);
    }
}
