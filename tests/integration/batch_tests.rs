use crate::common::{closed_domain, mock_domain, mount_homepage, test_config, RecordingPacer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use traffic_gauge::pipeline::{run_batch, run_gauge};
use traffic_gauge::Pipeline;
use wiremock::MockServer;

#[tokio::test]
async fn test_batch_preserves_order_and_survives_bad_domains() {
    let server = MockServer::start().await;
    mount_homepage(&server, r#"<html><body><a href="/a">a</a></body></html>"#).await;

    let live = mock_domain(&server);
    let dead = closed_domain();
    let domains = vec![
        live.clone(),
        "bad domain".to_string(),
        dead.clone(),
        live.clone(),
    ];

    let config = test_config("unused.txt", None);
    let pipeline = Pipeline::from_config(&config).unwrap();
    let pacer = RecordingPacer::default();
    let mut rng = StdRng::seed_from_u64(10);

    let results = run_batch(
        &pipeline,
        &domains,
        0,
        &config.politeness,
        &pacer,
        &mut rng,
    )
    .await;

    assert_eq!(results.len(), domains.len());
    let names: Vec<_> = results.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(names, vec![live.as_str(), "bad domain", dead.as_str(), live.as_str()]);

    assert!(results[0].alive);
    assert!(results[1].degraded);
    assert_eq!(results[1].indexed_pages_est, 1);
    assert_eq!(results[1].visitors_est_monthly, config.estimation.min_visitors);
    assert!(!results[2].alive);
    assert!(!results[2].degraded);

    for result in &results {
        assert!(result.visitors_est_monthly >= config.estimation.min_visitors);
        assert!(result.visitors_est_monthly <= config.estimation.max_visitors);
        assert!(result.indexed_pages_est >= 1);
    }

    // One pause between each pair of domains, none after the last
    let delays = pacer.delays.lock().unwrap();
    assert_eq!(delays.len(), domains.len() - 1);
    for delay in delays.iter() {
        assert!(*delay >= Duration::from_millis(5) && *delay <= Duration::from_millis(10));
    }
}

#[tokio::test]
async fn test_run_gauge_writes_slice_to_csv() {
    let server = MockServer::start().await;
    mount_homepage(&server, r#"<html><body><a href="/a">a</a></body></html>"#).await;
    let live = mock_domain(&server);
    let dead = closed_domain();

    let dir = tempfile::tempdir().unwrap();
    let domains_path = dir.path().join("domains.txt");
    std::fs::write(
        &domains_path,
        format!("skipped.example\n\n{}\n{}\nafter.example\n", live, dead),
    )
    .unwrap();

    let mut config = test_config(domains_path.to_str().unwrap(), None);
    config.range.start = 1;
    config.range.end = 3;
    let csv_path = dir.path().join("out.csv");
    let summary_path = dir.path().join("summary.md");
    config.output.csv_path = Some(csv_path.display().to_string());
    config.output.summary_path = Some(summary_path.display().to_string());

    let pacer = RecordingPacer::default();
    let report = run_gauge(&config, "hash", &pacer, &mut StdRng::seed_from_u64(11))
        .await
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.stats.total, 2);
    assert_eq!(report.stats.alive, 1);

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "domain,alive,homepage_kb,internal_links,indexed_pages_est,visitors_est_monthly"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(&format!("{},True,", live)));
    assert!(lines[2].starts_with(&format!("{},False,0.00,0,1,", dead)));

    let summary = std::fs::read_to_string(&summary_path).unwrap();
    assert!(summary.contains("- **Range**: 1 to 3 (of 4 domains)"));
    assert!(summary.contains("- **Config Hash**: hash"));
}

#[tokio::test]
async fn test_run_gauge_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config("/nonexistent/domains.txt", None);
    config.output.csv_path = Some(dir.path().join("out.csv").display().to_string());

    let pacer = RecordingPacer::default();
    let result = run_gauge(&config, "hash", &pacer, &mut StdRng::seed_from_u64(12)).await;

    assert!(matches!(result, Err(traffic_gauge::GaugeError::Input { .. })));
    assert!(!dir.path().join("out.csv").exists());
    assert!(pacer.delays.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_slice_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let domains_path = dir.path().join("domains.txt");
    std::fs::write(&domains_path, "a.example\nb.example\n").unwrap();

    let mut config = test_config(domains_path.to_str().unwrap(), None);
    config.range.start = 5;
    config.range.end = 10;
    let csv_path = dir.path().join("out.csv");
    config.output.csv_path = Some(csv_path.display().to_string());

    let pacer = RecordingPacer::default();
    let report = run_gauge(&config, "hash", &pacer, &mut StdRng::seed_from_u64(13))
        .await
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(std::fs::read_to_string(&csv_path).unwrap().lines().count(), 1);
}
