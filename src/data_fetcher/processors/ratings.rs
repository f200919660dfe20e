//! Pivots "metric -> team -> value" payloads into one row per team

use crate::data_fetcher::models::{ApiOprs, CoprRecord, OprRecord};
use crate::data_fetcher::validation::team_number_from_key;
use crate::error::AppError;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_team_number(team_key: &str, source: &str) -> Result<u32, AppError> {
    team_number_from_key(team_key).ok_or_else(|| {
        AppError::api_unexpected_structure(format!("unparsable team key '{team_key}'"), source)
    })
}

fn lookup(map: &HashMap<String, f64>, team_key: &str, metric: &str, source: &str) -> Result<f64, AppError> {
    map.get(team_key).copied().ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("{team_key} has no '{metric}' value"),
            source,
        )
    })
}

/// One record per team found in `oprs`, rounded to 2 places, sorted by team number.
///
/// A team missing from `dprs` or `ccwms` fails the whole conversion.
pub fn pivot_oprs(payload: &ApiOprs, source: &str) -> Result<Vec<OprRecord>, AppError> {
    let mut records = payload
        .oprs
        .iter()
        .map(|(team_key, opr)| {
            Ok(OprRecord {
                team_number: parse_team_number(team_key, source)?,
                opr: round2(*opr),
                dpr: round2(lookup(&payload.dprs, team_key, "dprs", source)?),
                ccwm: round2(lookup(&payload.ccwms, team_key, "ccwms", source)?),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    records.sort_by_key(|r| r.team_number);
    Ok(records)
}

/// One record per team with a field per metric, values unrounded, sorted by team number.
///
/// The team set comes from the first metric in payload order; every other metric
/// must have a value for each of those teams.
pub fn pivot_coprs(payload: Map<String, Value>, source: &str) -> Result<Vec<CoprRecord>, AppError> {
    let metrics = payload
        .into_iter()
        .map(|(metric, values)| {
            let values: HashMap<String, f64> = serde_json::from_value(values).map_err(|e| {
                AppError::api_unexpected_structure(format!("metric '{metric}': {e}"), source)
            })?;
            Ok((metric, values))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let Some((_, first)) = metrics.first() else {
        return Ok(Vec::new());
    };

    let mut records = first
        .keys()
        .map(|team_key| {
            let values = metrics
                .iter()
                .map(|(metric, values)| {
                    Ok((metric.clone(), lookup(values, team_key, metric, source)?))
                })
                .collect::<Result<Vec<_>, AppError>>()?;
            Ok(CoprRecord {
                team_number: parse_team_number(team_key, source)?,
                metrics: values,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    records.sort_by_key(|r| r.team_number);
    Ok(records)
}
