use sundrift::{
    Evaluator, LoopState, ManualScheduler, RecordingSink, RenderLoop, ScrollSample, SundriftError,
};

fn sample(offset: u32) -> ScrollSample {
    ScrollSample::new(offset, 800).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Fire the pending callback and hand the loop a scroll reading, the way a
/// host frame callback would.
fn drive(rl: &mut RenderLoop<ManualScheduler, RecordingSink>, offset: u32) -> bool {
    rl.scheduler_mut()
        .take_pending()
        .expect("a Running loop always has a callback scheduled");
    rl.tick(sample(offset)).unwrap().is_some()
}

#[test]
fn scripted_session_publishes_in_scroll_order() {
    init_tracing();
    let mut rl = RenderLoop::new(
        Evaluator::new(false),
        ManualScheduler::new(),
        RecordingSink::default(),
    );
    assert_eq!(rl.state(), LoopState::Idle);
    rl.start().unwrap();

    // Monotonic scroll with a stall in the middle.
    let script: &[(u32, bool)] = &[
        (0, true),
        (0, false), // unchanged: throttled
        (250, true),
        (800, true),
        (800, false), // stalled again
        (1600, true),
        (3200, true),
        (4000, true), // past the range, clamps to 1
    ];
    for &(offset, published) in script {
        assert_eq!(drive(&mut rl, offset), published, "offset {offset}");
    }

    let phases: Vec<f64> = rl.sink().frames.iter().map(|f| f.phase.value()).collect();
    assert_eq!(phases, vec![0.0, 0.078125, 0.25, 0.5, 1.0, 1.0]);
    assert!(
        phases.windows(2).all(|w| w[0] <= w[1]),
        "monotonic scroll must publish non-decreasing phases"
    );

    // One schedule per iteration plus the one from start().
    assert_eq!(rl.scheduler().scheduled_count(), script.len() as u64 + 1);
}

#[test]
fn teardown_cancels_exactly_one_token_and_ticks_become_errors() {
    init_tracing();
    let mut rl = RenderLoop::new(
        Evaluator::new(false),
        ManualScheduler::new(),
        RecordingSink::default(),
    );
    rl.start().unwrap();
    drive(&mut rl, 500);

    rl.stop();
    assert_eq!(rl.state(), LoopState::Stopped);
    assert!(!rl.scheduler().has_pending());
    assert_eq!(rl.scheduler().cancelled_count(), 1);

    // A callback that somehow fires after teardown is a lifecycle bug and
    // must surface as an error, not be silently tolerated.
    match rl.tick(sample(600)) {
        Err(SundriftError::Lifecycle(_)) => {}
        other => panic!("expected lifecycle error, got {other:?}"),
    }
    assert_eq!(rl.sink().frames.len(), 1);

    rl.stop(); // idempotent
    assert_eq!(rl.scheduler().cancelled_count(), 1);
}

#[test]
fn loop_mounts_the_evaluator_on_start() {
    init_tracing();
    let mut rl = RenderLoop::new(
        Evaluator::new(false),
        ManualScheduler::new(),
        RecordingSink::default(),
    );
    rl.start().unwrap();
    drive(&mut rl, 1600);
    let frame = rl.sink().frames[0];
    assert!(frame.lifecycle.is_mounted());
    assert_eq!(frame.phase.value(), 0.5);
}
