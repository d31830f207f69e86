use polykit_runner::{wait_for, AlgorithmRunner, RunnerError, RunnerOutcome};

#[tokio::test]
async fn test_checkout_in_missing_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_repo");
    let runner = AlgorithmRunner::with_paths(&missing, missing.join("scripts"), "python");

    let result = runner.checkout_branch("main").await;
    assert!(matches!(
        result,
        Err(RunnerError::Spawn { .. }) | Err(RunnerError::CommandFailed { .. })
    ));
}

#[tokio::test]
async fn test_list_branches_outside_a_repository_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let runner = AlgorithmRunner::with_paths(dir.path(), dir.path(), "python");

    let receiver = runner.spawn_list_branches().unwrap();
    match wait_for(receiver).await {
        RunnerOutcome::Failed(message) => assert!(!message.is_empty()),
        RunnerOutcome::Completed(branches) => panic!("unexpected branches: {:?}", branches),
    }
}
