mod helpers;

use meteo_core::endpoints::PREVIOUS_RUNS_URL;
use meteo_mcp::tools::previous_model_runs::{PreviousModelRunsParams, execute};
use helpers::{Reply, client, get_json, get_text, is_error, is_success};
use serde_json::json;

fn params(hourly: &str, previous_days: i64) -> PreviousModelRunsParams {
    serde_json::from_value(json!({
        "latitude": 40.7,
        "longitude": -74.0,
        "start_date": "2024-01-01",
        "end_date": "2024-01-02",
        "hourly": hourly,
        "previous_days": previous_days
    }))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_previous_model_runs_basic() {
        let upstream = json!({
            "hourly": {
                "time": ["2024-01-01T00:00"],
                "temperature_2m": [5.0],
                "temperature_2m_previous_day1": [4.5]
            }
        });
        let client = client(Reply::Json(upstream.clone()));
        let params: PreviousModelRunsParams = serde_json::from_value(json!({
            "latitude": 40.7,
            "longitude": -74.0,
            "start_date": "2024-01-01",
            "end_date": "2024-01-02"
        }))
        .unwrap();

        let result = execute(&client, &params).await;

        assert!(is_success(&result));
        assert_eq!(get_json(&result), upstream);

        let (base, query) = client.fetcher().single_call();
        assert_eq!(base, PREVIOUS_RUNS_URL);
        assert_eq!(
            query.get_str("hourly"),
            Some(
                "temperature_2m,temperature_2m_previous_day1,temperature_2m_previous_day2,\
                 temperature_2m_previous_day3,temperature_2m_previous_day4,\
                 temperature_2m_previous_day5"
                    .to_string()
            )
        );
        assert_eq!(
            query.get_str("models"),
            Some("ecmwf_ifs025,gem_seamless,icon_seamless".to_string())
        );
        assert!(!query.contains_key("forecast_days"));
        assert!(!query.contains_key("past_days"));
    }

    #[tokio::test]
    async fn test_previous_model_runs_end_to_end_expansion() {
        let client = client(Reply::Json(json!({})));

        execute(
            &client,
            &params("temperature_2m,precipitation,wind_speed_10m", 3),
        )
        .await;

        let (_, query) = client.fetcher().single_call();
        assert_eq!(
            query.get_str("hourly"),
            Some(
                "temperature_2m,temperature_2m_previous_day1,temperature_2m_previous_day2,\
                 temperature_2m_previous_day3,precipitation,precipitation_previous_day1,\
                 precipitation_previous_day2,precipitation_previous_day3,wind_speed_10m"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_previous_model_runs_no_duplicate_params() {
        let client = client(Reply::Json(json!({})));

        execute(
            &client,
            &params(
                "temperature_2m,temperature_2m_previous_day1,precipitation",
                2,
            ),
        )
        .await;

        let (_, query) = client.fetcher().single_call();
        let hourly = query.get_str("hourly").unwrap();
        let tokens: Vec<&str> = hourly.split(',').collect();

        assert_eq!(
            tokens
                .iter()
                .filter(|t| **t == "temperature_2m_previous_day1")
                .count(),
            1
        );
        assert!(!tokens.contains(&"temperature_2m_previous_day2"));
        assert!(tokens.contains(&"precipitation_previous_day2"));
    }

    #[tokio::test]
    async fn test_wind_never_expands() {
        let client = client(Reply::Json(json!({})));

        execute(&client, &params("wind_speed_10m,wind_direction_10m", 7)).await;

        let (_, query) = client.fetcher().single_call();
        assert_eq!(
            query.get_str("hourly"),
            Some("wind_speed_10m,wind_direction_10m".to_string())
        );
    }

    #[tokio::test]
    async fn test_previous_model_runs_invalid_days() {
        for days in [0, 8, -3] {
            let client = client(Reply::Json(json!({})));

            let result = execute(&client, &params("temperature_2m", days)).await;

            assert!(is_error(&result));
            let text = get_text(&result);
            assert!(text.contains("previous_days must be between 1 and 7"));
            assert!(text.starts_with("Invalid parameter"));
            assert!(client.fetcher().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_previous_model_runs_handles_api_error() {
        let client = client(Reply::Status(502, "bad gateway"));

        let result = execute(&client, &params("temperature_2m", 1)).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("HTTP 502"));
        assert!(!text.starts_with("Invalid parameter"));
    }
}
