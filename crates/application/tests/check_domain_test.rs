use repwatch_application::use_cases::CheckDomainUseCase;
use repwatch_domain::config::DelayRange;
use repwatch_domain::{FetchError, ReputationService, SecurityStatus};
use std::sync::Arc;

mod helpers;
use helpers::{
    MockReputationFetcher, GOOGLE_SAFE_BODY, GOOGLE_UNSAFE_BODY, SPAMHAUS_LISTED_BODY,
    SPAMHAUS_SAFE_BODY,
};

fn make_use_case(fetcher: Arc<MockReputationFetcher>) -> CheckDomainUseCase {
    CheckDomainUseCase::new(fetcher).with_service_delay(DelayRange::none())
}

#[tokio::test]
async fn test_both_services_safe() {
    let fetcher = Arc::new(MockReputationFetcher::all_safe().await);
    let use_case = make_use_case(fetcher.clone());

    let record = use_case.execute("example.com").await;

    assert_eq!(record.google_status, SecurityStatus::Safe);
    assert_eq!(record.spamhaus_status, SecurityStatus::Safe);
    assert!(record.checked_at().is_some());
}

#[tokio::test]
async fn test_queries_google_then_spamhaus() {
    let fetcher = Arc::new(MockReputationFetcher::all_safe().await);
    let use_case = make_use_case(fetcher.clone());

    use_case.execute("example.com").await;

    assert_eq!(
        fetcher.calls().await,
        vec![
            (ReputationService::Google, "example.com".to_string()),
            (ReputationService::Spamhaus, "example.com".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unsafe_verdicts() {
    let fetcher = Arc::new(MockReputationFetcher::new());
    fetcher
        .respond(ReputationService::Google, Ok(GOOGLE_UNSAFE_BODY.to_string()))
        .await;
    fetcher
        .respond(
            ReputationService::Spamhaus,
            Ok(SPAMHAUS_LISTED_BODY.to_string()),
        )
        .await;

    let record = make_use_case(fetcher).execute("bad.example").await;

    assert_eq!(record.google_status, SecurityStatus::Unsafe);
    assert_eq!(record.spamhaus_status, SecurityStatus::Unsafe);
}

#[tokio::test]
async fn test_google_unrecognised_page_is_unknown() {
    let fetcher = Arc::new(MockReputationFetcher::new());
    fetcher
        .respond(
            ReputationService::Google,
            Ok("<html><div id=\"app\"></div></html>".to_string()),
        )
        .await;
    fetcher
        .respond(
            ReputationService::Spamhaus,
            Ok(SPAMHAUS_SAFE_BODY.to_string()),
        )
        .await;

    let record = make_use_case(fetcher).execute("example.com").await;

    assert_eq!(record.google_status, SecurityStatus::Unknown);
    assert_eq!(record.spamhaus_status, SecurityStatus::Safe);
}

#[tokio::test]
async fn test_google_timeout_does_not_affect_spamhaus() {
    let fetcher = Arc::new(MockReputationFetcher::new());
    fetcher
        .respond(
            ReputationService::Google,
            Err(FetchError::Transport("operation timed out".to_string())),
        )
        .await;
    fetcher
        .respond(
            ReputationService::Spamhaus,
            Ok(SPAMHAUS_SAFE_BODY.to_string()),
        )
        .await;

    let record = make_use_case(fetcher.clone()).execute("example.com").await;

    assert_eq!(record.google_status, SecurityStatus::Error);
    assert_eq!(record.spamhaus_status, SecurityStatus::Safe);
    assert_eq!(fetcher.fetch_count(), 2);
}

#[tokio::test]
async fn test_non_200_is_error_regardless_of_body() {
    let fetcher = Arc::new(MockReputationFetcher::new());
    fetcher
        .respond(ReputationService::Google, Err(FetchError::HttpStatus(503)))
        .await;
    fetcher
        .respond(ReputationService::Spamhaus, Err(FetchError::HttpStatus(403)))
        .await;

    let record = make_use_case(fetcher).execute("example.com").await;

    assert_eq!(record.google_status, SecurityStatus::Error);
    assert_eq!(record.spamhaus_status, SecurityStatus::Error);
}

#[tokio::test]
async fn test_check_service_single_lookup() {
    let fetcher = Arc::new(MockReputationFetcher::new());
    fetcher
        .respond(ReputationService::Google, Ok(GOOGLE_SAFE_BODY.to_string()))
        .await;

    let status = make_use_case(fetcher.clone())
        .check_service(ReputationService::Google, "example.com")
        .await;

    assert_eq!(status, SecurityStatus::Safe);
    assert_eq!(fetcher.fetch_count(), 1);
}
