use crate::episodes::ParsedEpisode;
use crate::error::{Error, Result};
use crate::methods::AggregationKey;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskStat {
    pub task: usize,
    pub mean: f64,
    pub half_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Aggregate {
    pub key: AggregationKey,
    /// How many episodes contributed.
    pub episodes: usize,
    pub tasks: Vec<TaskStat>,
}

pub fn aggregate(episodes: &[ParsedEpisode], key: AggregationKey) -> Result<Aggregate> {
    let selected: Vec<&ParsedEpisode> = episodes.iter().filter(|ep| ep.key() == key).collect();
    let first = selected.first().ok_or(Error::EmptySelection { key })?;

    let num_tasks = first.accuracies.len();
    if let Some(bad) = selected.iter().find(|ep| ep.accuracies.len() != num_tasks) {
        return Err(Error::TaskCountMismatch {
            key,
            expected: num_tasks,
            found: bad.accuracies.len(),
        });
    }

    let mut tasks = Vec::with_capacity(num_tasks);
    for task in 0..num_tasks {
        let column: Vec<f64> = selected.iter().map(|ep| ep.accuracies[task]).collect();
        tasks.push(TaskStat {
            task,
            mean: super::mean(&column),
            half_width: super::confidence_half_width(&column)?,
        });
    }
    log::debug!("{key}: {} episodes, {num_tasks} tasks", selected.len());

    Ok(Aggregate {
        key,
        episodes: selected.len(),
        tasks,
    })
}

/// Aggregates every key in order. With `allow_missing`, keys without episodes are
/// skipped with a warning instead of failing the run.
pub fn aggregate_all(
    episodes: &[ParsedEpisode],
    keys: &[AggregationKey],
    allow_missing: bool,
) -> Result<Vec<Aggregate>> {
    let mut out = Vec::with_capacity(keys.len());
    for &key in keys {
        match aggregate(episodes, key) {
            Ok(agg) => out.push(agg),
            Err(Error::EmptySelection { key }) if allow_missing => {
                log::warn!("no episodes for {key}, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;

    fn ep(method: Method, samples: u32, accuracies: &[f64]) -> ParsedEpisode {
        ParsedEpisode {
            method,
            samples,
            accuracies: accuracies.to_vec(),
        }
    }

    fn cfa_runs() -> Vec<ParsedEpisode> {
        vec![
            ep(Method::Cfa, 10, &[0.5, 0.6]),
            ep(Method::Er, 10, &[0.1, 0.1]),
            ep(Method::Cfa, 10, &[0.7, 0.8]),
            ep(Method::Cfa, 20, &[0.9, 0.9, 0.9]),
            ep(Method::Cfa, 10, &[0.6, 0.7]),
        ]
    }

    #[test]
    fn per_task_mean_and_interval() {
        let agg = aggregate(&cfa_runs(), AggregationKey::new(Method::Cfa, 10)).unwrap();
        assert_eq!(agg.episodes, 3);
        assert_eq!(agg.tasks.len(), 2);
        assert!((agg.tasks[0].mean - 0.6).abs() < 1e-12);
        assert!((agg.tasks[1].mean - 0.7).abs() < 1e-12);
        assert!((agg.tasks[0].mean * 100.0 * 10.0).round() / 10.0 == 60.0);
        assert!((agg.tasks[1].mean * 100.0 * 10.0).round() / 10.0 == 70.0);
        for stat in &agg.tasks {
            assert!(stat.half_width > 0.0);
            assert!((stat.half_width - 0.248_414).abs() < 1e-4);
        }
    }

    #[test]
    fn aggregation_is_deterministic() {
        let runs = cfa_runs();
        let key = AggregationKey::new(Method::Cfa, 10);
        assert_eq!(aggregate(&runs, key).unwrap(), aggregate(&runs, key).unwrap());
    }

    #[test]
    fn all_zero_task_has_nan_interval() {
        let runs = vec![
            ep(Method::Er, 50, &[0.0, 0.4]),
            ep(Method::Er, 50, &[0.0, 0.6]),
        ];
        let agg = aggregate(&runs, AggregationKey::new(Method::Er, 50)).unwrap();
        assert_eq!(agg.tasks[0].mean, 0.0);
        assert!(agg.tasks[0].half_width.is_nan());
        assert!(agg.tasks[1].half_width.is_finite());
    }

    #[test]
    fn empty_selection_fails() {
        let err = aggregate(&cfa_runs(), AggregationKey::new(Method::ICarl, 10)).unwrap_err();
        assert!(matches!(err, Error::EmptySelection { .. }));
    }

    #[test]
    fn mismatched_task_count_fails() {
        let runs = vec![ep(Method::Er, 10, &[0.1, 0.2]), ep(Method::Er, 10, &[0.3])];
        let err = aggregate(&runs, AggregationKey::new(Method::Er, 10)).unwrap_err();
        assert!(matches!(
            err,
            Error::TaskCountMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn aggregate_all_follows_key_order() {
        let keys = [
            AggregationKey::new(Method::Er, 10),
            AggregationKey::new(Method::Cfa, 10),
        ];
        let aggs = aggregate_all(&cfa_runs(), &keys, false).unwrap();
        let got: Vec<_> = aggs.iter().map(|a| a.key).collect();
        assert_eq!(got, keys);
    }

    #[test]
    fn missing_keys_skip_only_when_allowed() {
        let keys = [
            AggregationKey::new(Method::ICarl, 10),
            AggregationKey::new(Method::Cfa, 20),
        ];
        assert!(aggregate_all(&cfa_runs(), &keys, false).is_err());
        let aggs = aggregate_all(&cfa_runs(), &keys, true).unwrap();
        assert_eq!(aggs.len(), 1);
        assert_eq!(aggs[0].key, keys[1]);
    }
}
