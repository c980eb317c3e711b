//! Fan-out/fan-in batch loading
//!
//! One load cycle issues one independent fetch per city, collects results
//! as they arrive, and publishes the complete set sorted by city name. The
//! first failure abandons the cycle without waiting for in-flight fetches.

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, instrument, warn};

use crate::api::CityWeatherSource;
use crate::error::SimpleWeatherError;
use crate::models::CityWeather;

/// Loader that runs one batch of per-city fetches per cycle.
///
/// The result set and the in-flight fetches are owned by each `load` call,
/// so a superseded cycle can never write into a newer cycle's results; a
/// retry is simply a fresh cycle over the same batch.
pub struct BatchLoader<S> {
    source: S,
}

impl<S: CityWeatherSource> BatchLoader<S> {
    /// Create a new loader over the given weather source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run one load cycle over the batch.
    ///
    /// Duplicate names are independent units of work and each produces its
    /// own entry. The returned set always has exactly `batch.len()` entries,
    /// sorted ascending by city name with ordinal string comparison.
    #[instrument(skip(self, batch), fields(batch_size = batch.len()))]
    pub async fn load(&self, batch: &[String]) -> Result<Vec<CityWeather>, SimpleWeatherError> {
        if batch.is_empty() {
            return Err(SimpleWeatherError::validation("City batch must not be empty"));
        }

        info!("Loading weather for {} cities", batch.len());

        let mut fetches: FuturesUnordered<_> = batch
            .iter()
            .map(|city| self.source.current_weather(city))
            .collect();

        // Single writer: this loop is the only appender, and results land in
        // whatever order the fetches complete.
        let mut loaded = Vec::with_capacity(batch.len());
        while let Some(result) = fetches.next().await {
            match result {
                Ok(city) => {
                    debug!(
                        "Loaded weather for '{}' ({}/{})",
                        city.name,
                        loaded.len() + 1,
                        batch.len()
                    );
                    loaded.push(city);
                }
                Err(err) => {
                    // Dropping the stream cancels every in-flight fetch.
                    warn!("Load cycle failed: {}", err);
                    return Err(err);
                }
            }
        }

        loaded.sort_by(|a, b| a.name.cmp(&b.name));
        info!("Load cycle complete: {} cities", loaded.len());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConditionEntry, MainMetrics, Wind};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    fn test_city(name: &str) -> CityWeather {
        CityWeather {
            name: name.to_string(),
            main: MainMetrics {
                temp: 10.0,
                feels_like: None,
                temp_min: None,
                temp_max: None,
                pressure: 1015.0,
                humidity: 60,
            },
            conditions: vec![ConditionEntry {
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: None,
            }],
            wind: Wind {
                speed: 3.0,
                deg: Some(180.0),
                gust: None,
            },
            observed_at: Utc::now(),
        }
    }

    /// Scripted source: optional per-city delays and failures, call log
    struct ScriptedSource {
        delays_ms: HashMap<String, u64>,
        failures: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                delays_ms: HashMap::new(),
                failures: HashSet::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, city: &str, ms: u64) -> Self {
            self.delays_ms.insert(city.to_string(), ms);
            self
        }

        fn with_failure(mut self, city: &str) -> Self {
            self.failures.insert(city.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CityWeatherSource for ScriptedSource {
        async fn current_weather(&self, city: &str) -> Result<CityWeather, SimpleWeatherError> {
            self.calls.lock().unwrap().push(city.to_string());
            if let Some(ms) = self.delays_ms.get(city) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.failures.contains(city) {
                return Err(SimpleWeatherError::network(format!(
                    "scripted failure for '{city}'"
                )));
            }
            Ok(test_city(city))
        }
    }

    fn batch(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_publishes_sorted_regardless_of_arrival_order() {
        // Kazan arrives last even though it sorts second
        let source = ScriptedSource::new()
            .with_delay("Kazan", 60)
            .with_delay("Moscow", 30);
        let loader = BatchLoader::new(source);

        let cities = loader
            .load(&batch(&["Kazan", "Moscow", "Astana"]))
            .await
            .unwrap();

        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Astana", "Kazan", "Moscow"]);
    }

    #[tokio::test]
    async fn test_result_count_matches_batch_size() {
        let source = ScriptedSource::new();
        let loader = BatchLoader::new(source);

        let cities = loader
            .load(&batch(&["A", "B", "C", "D", "E"]))
            .await
            .unwrap();

        assert_eq!(cities.len(), 5);
    }

    #[tokio::test]
    async fn test_single_failure_fails_whole_cycle() {
        let source = ScriptedSource::new().with_failure("B");
        let loader = BatchLoader::new(source);

        let err = loader.load(&batch(&["A", "B"])).await.unwrap_err();
        assert!(matches!(err, SimpleWeatherError::Network { .. }));
    }

    #[tokio::test]
    async fn test_failure_does_not_wait_for_stragglers() {
        // The failing fetch reports quickly; the slow one would take 5s
        let source = ScriptedSource::new()
            .with_failure("fast-fail")
            .with_delay("slow", 5_000);
        let loader = BatchLoader::new(source);

        let started = Instant::now();
        let result = loader.load(&batch(&["slow", "fast-fail"])).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_millis(1_000));
    }

    #[tokio::test]
    async fn test_duplicate_cities_are_independent_fetches() {
        let source = ScriptedSource::new();
        let loader = BatchLoader::new(source);

        let cities = loader
            .load(&batch(&["Kazan", "Kazan", "Moscow"]))
            .await
            .unwrap();

        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0].name, "Kazan");
        assert_eq!(cities[1].name, "Kazan");
        assert_eq!(cities[2].name, "Moscow");
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected() {
        let source = ScriptedSource::new();
        let loader = BatchLoader::new(source);

        let err = loader.load(&[]).await.unwrap_err();
        assert!(matches!(err, SimpleWeatherError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_every_batch_entry_is_fetched() {
        let source = ScriptedSource::new();
        let loader = BatchLoader::new(source);

        loader.load(&batch(&["X", "Y", "Z"])).await.unwrap();

        let mut calls = loader.source.calls();
        calls.sort();
        assert_eq!(calls, vec!["X", "Y", "Z"]);
    }
}
