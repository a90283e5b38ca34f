use std::sync::Arc;
use std::time::Duration;
use stepsort::{
    parse_custom, Algorithm, Controller, DatasetSpec, EngineConfig, EngineError, EventStream,
    RunOutcome, RunState, SortOrder, StepEvent,
};

fn new_controller(seed: u64) -> (Controller, EventStream) {
    Controller::new(EngineConfig::instant(seed)).expect("valid config")
}

fn is_monotonic(values: &[u32], order: SortOrder) -> bool {
    values.windows(2).all(|w| match order {
        SortOrder::Ascending => w[0] <= w[1],
        SortOrder::Descending => w[0] >= w[1],
    })
}

fn is_permutation(before: &[u32], after: &[u32]) -> bool {
    let mut lhs = before.to_vec();
    let mut rhs = after.to_vec();
    lhs.sort_unstable();
    rhs.sort_unstable();
    lhs == rhs
}

async fn wait_for_running(controller: &Controller) {
    for _ in 0..500 {
        if controller.state() == RunState::Running {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("run never became active");
}

#[tokio::test]
async fn test_every_algorithm_sorts_every_dataset_both_orders() {
    let specs = vec![
        DatasetSpec::Random { size: 0 },
        DatasetSpec::Random { size: 1 },
        DatasetSpec::Random { size: 2 },
        DatasetSpec::Random { size: 17 },
        DatasetSpec::Random { size: 100 },
        DatasetSpec::Reversed { size: 33 },
        DatasetSpec::NearlySorted { size: 50 },
        DatasetSpec::FewUnique { size: 40 },
        DatasetSpec::Custom(vec![5, 3, 8, 1]),
        DatasetSpec::Custom(vec![1, 1, 1]),
        DatasetSpec::Custom(vec![500, 1, 250, 250, 2]),
    ];

    let (controller, _events) = new_controller(7);
    for algorithm in Algorithm::ALL {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            for spec in &specs {
                let input = controller.load(spec.clone()).unwrap();
                controller.set_algorithm(algorithm);
                controller.set_order(order);

                let outcome = controller.start().await.unwrap();
                assert_eq!(outcome, RunOutcome::Completed, "{algorithm} {order}");

                let output = controller.snapshot();
                assert!(
                    is_monotonic(&output, order),
                    "{algorithm} {order} not monotonic: {output:?}"
                );
                assert!(
                    is_permutation(&input, &output),
                    "{algorithm} {order} lost elements: {input:?} -> {output:?}"
                );
            }
        }
    }
}

#[tokio::test]
async fn test_bubble_example() {
    let (controller, _events) = new_controller(1);
    controller
        .load(DatasetSpec::Custom(vec![5, 3, 8, 1]))
        .unwrap();
    controller.set_algorithm(Algorithm::Bubble);

    controller.start().await.unwrap();
    assert_eq!(controller.snapshot(), vec![1, 3, 5, 8]);
}

#[tokio::test]
async fn test_all_equal_selection_records_no_writes() {
    let (controller, _events) = new_controller(1);
    controller.load(DatasetSpec::Custom(vec![1, 1, 1])).unwrap();
    controller.set_algorithm(Algorithm::Selection);

    controller.start().await.unwrap();
    assert_eq!(controller.snapshot(), vec![1, 1, 1]);
    assert_eq!(controller.stats().writes, 0);
}

#[tokio::test]
async fn test_radix_on_parsed_custom_input() {
    let (controller, _events) = new_controller(1);
    let values = parse_custom("500,1,250").unwrap();
    controller.load(DatasetSpec::Custom(values)).unwrap();
    controller.set_algorithm(Algorithm::Radix);

    controller.start().await.unwrap();
    assert_eq!(controller.snapshot(), vec![1, 250, 500]);

    controller.set_order(SortOrder::Descending);
    controller.start().await.unwrap();
    assert_eq!(controller.snapshot(), vec![500, 250, 1]);
}

#[tokio::test]
async fn test_cycle_on_sorted_input_writes_nothing() {
    let (controller, _events) = new_controller(1);
    controller
        .load(DatasetSpec::Custom(vec![13, 16, 19, 22, 25]))
        .unwrap();
    controller.set_algorithm(Algorithm::Cycle);

    controller.start().await.unwrap();
    assert_eq!(controller.snapshot(), vec![13, 16, 19, 22, 25]);
    assert_eq!(controller.stats().writes, 0);
    assert!(controller.stats().comparisons > 0);
}

#[tokio::test]
async fn test_empty_sequence_completes_immediately_for_every_algorithm() {
    let (controller, _events) = new_controller(1);
    for algorithm in Algorithm::ALL {
        controller.load(DatasetSpec::Random { size: 0 }).unwrap();
        controller.set_algorithm(algorithm);

        let outcome = controller.start().await.unwrap();
        assert_eq!(outcome, RunOutcome::Completed, "{algorithm}");
        let stats = controller.stats();
        assert_eq!(stats.comparisons, 0, "{algorithm}");
        assert_eq!(stats.writes, 0, "{algorithm}");
    }
}

#[tokio::test]
async fn test_counters_reset_at_each_start() {
    let (controller, _events) = new_controller(1);
    controller
        .load(DatasetSpec::Custom(vec![9, 7, 5, 3]))
        .unwrap();
    controller.set_algorithm(Algorithm::Bubble);

    controller.start().await.unwrap();
    let first = controller.stats();
    assert!(first.comparisons > 0);
    assert!(first.writes > 0);

    // Second run starts from Completed on the now-sorted sequence: the
    // counters must restart from zero, not accumulate.
    controller.start().await.unwrap();
    let second = controller.stats();
    assert_eq!(second.comparisons, 3);
    assert_eq!(second.writes, 0);
}

#[tokio::test]
async fn test_event_stream_matches_counters() {
    let (controller, mut events) = new_controller(1);
    controller
        .load(DatasetSpec::Custom(vec![5, 3, 8, 1, 9, 2]))
        .unwrap();
    controller.set_algorithm(Algorithm::Quick);

    controller.start().await.unwrap();
    let stats = controller.stats();

    let (mut compares, mut mutations) = (0u64, 0u64);
    while let Ok(event) = events.try_recv() {
        match event {
            StepEvent::Compare { .. } => compares += 1,
            StepEvent::Swap { .. } | StepEvent::Write { .. } => mutations += 1,
            StepEvent::Marked { .. } => {}
        }
    }
    assert_eq!(compares, stats.comparisons);
    assert_eq!(mutations, stats.writes);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pause_preserves_permutation_and_resume_finishes() {
    let (controller, _events) = Controller::new(EngineConfig {
        pacing: Duration::from_millis(1),
        celebrate_step: Duration::ZERO,
        seed: Some(3),
    })
    .unwrap();
    let controller = Arc::new(controller);

    let input = controller.load(DatasetSpec::Reversed { size: 100 }).unwrap();
    controller.set_algorithm(Algorithm::Bubble);

    let runner = controller.clone();
    let handle = tokio::spawn(async move { runner.start().await });

    wait_for_running(&controller).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(controller.pause());
    assert_eq!(controller.state(), RunState::Paused);

    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, RunOutcome::Paused);
    assert!(is_permutation(&input, &controller.snapshot()));

    // A paused controller is start-enabled and resumes on the current
    // contents.
    controller.set_pacing(Duration::ZERO);
    let outcome = controller.start().await.unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(is_monotonic(&controller.snapshot(), SortOrder::Ascending));
    assert!(is_permutation(&input, &controller.snapshot()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_while_running_is_noop_and_reset_is_busy() {
    let (controller, _events) = Controller::new(EngineConfig {
        pacing: Duration::from_millis(1),
        celebrate_step: Duration::ZERO,
        seed: Some(5),
    })
    .unwrap();
    let controller = Arc::new(controller);

    controller.load(DatasetSpec::Reversed { size: 100 }).unwrap();
    controller.set_algorithm(Algorithm::Bubble);

    let runner = controller.clone();
    let handle = tokio::spawn(async move { runner.start().await });
    wait_for_running(&controller).await;

    assert_eq!(
        controller.start().await.unwrap(),
        RunOutcome::AlreadyRunning
    );
    assert!(matches!(
        controller.reset(),
        Err(EngineError::Busy)
    ));
    assert!(matches!(
        controller.load(DatasetSpec::Random { size: 10 }),
        Err(EngineError::Busy)
    ));

    assert!(controller.pause());
    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, RunOutcome::Paused);

    // Back to start-enabled: reset regenerates and zeroes everything.
    let values = controller.reset().unwrap();
    assert_eq!(controller.state(), RunState::Idle);
    assert_eq!(values.len(), 100);
    let stats = controller.stats();
    assert_eq!(stats.comparisons, 0);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.elapsed, Duration::ZERO);
}

#[tokio::test]
async fn test_completion_emits_celebration_sweep() {
    let (controller, mut events) = new_controller(1);
    controller.load(DatasetSpec::Custom(vec![2, 1])).unwrap();
    controller.set_algorithm(Algorithm::Insertion);

    controller.start().await.unwrap();

    // The celebration task is detached; give it a moment to finish.
    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut celebrated = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let StepEvent::Marked {
            indices,
            tag: stepsort::MarkTag::Celebrate,
        } = event
        {
            celebrated.extend(indices);
        }
    }
    assert_eq!(celebrated, vec![0, 1]);
}

#[tokio::test]
async fn test_dataset_validation_reports_invalid_input() {
    let (controller, _events) = new_controller(1);
    let before = controller.snapshot();

    for input in ["", "1,abc", "0,5", "501,5", "7"] {
        let result = parse_custom(input);
        assert!(
            matches!(result, Err(EngineError::InvalidInput(_))),
            "{input:?} should be rejected"
        );
    }
    for spec in [
        DatasetSpec::Custom(vec![1]),
        DatasetSpec::Custom(vec![0, 5]),
        DatasetSpec::Custom(vec![5; 101]),
        DatasetSpec::Random { size: 101 },
    ] {
        assert!(matches!(
            controller.load(spec),
            Err(EngineError::InvalidInput(_))
        ));
        assert_eq!(controller.snapshot(), before);
    }
}
