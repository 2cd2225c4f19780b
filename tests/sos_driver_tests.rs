use illumine::signal::pattern::{cycle_duration, step_offsets, SOS_PATTERN};
use illumine::signal::{DriverState, SosDriver};
use illumine::timer::{ManualScheduler, ThreadScheduler};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn manual_driver() -> (Arc<ManualScheduler>, SosDriver<ManualScheduler>) {
    let scheduler = Arc::new(ManualScheduler::new());
    let driver = SosDriver::new(scheduler.clone());
    (scheduler, driver)
}

#[test]
fn test_first_transitions_follow_table() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);
    assert!(driver.light_on(), "Light should be on at t=0");

    // (time of transition, expected light after it)
    let expected = [
        (200, false),
        (400, true),
        (600, false),
        (800, true),
        (1000, false),
        (1600, true),
        (2200, false),
        (2400, true),
    ];
    for (at, light) in expected {
        scheduler.advance_to(ms(at - 1));
        assert_ne!(driver.light_on(), light, "No transition yet at t={}", at - 1);
        scheduler.advance_to(ms(at));
        assert_eq!(driver.light_on(), light, "Wrong light at t={}", at);
    }
}

#[test]
fn test_full_cycle_matches_table() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);

    for (i, (start, step)) in step_offsets().enumerate() {
        scheduler.advance_to(start);
        assert_eq!(driver.current_index(), i, "Wrong index at {:?}", start);
        assert_eq!(driver.light_on(), step.on, "Wrong light at step {}", i);
    }

    scheduler.advance_to(cycle_duration());
    assert_eq!(driver.current_index(), 0, "Should wrap to step 0");
    assert!(driver.light_on());
}

#[test]
fn test_pattern_repeats_identically() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);

    let cycle = cycle_duration();
    for repetition in 0..3u32 {
        for (i, (start, step)) in step_offsets().enumerate() {
            scheduler.advance_to(cycle * repetition + start);
            assert_eq!(
                driver.state(),
                DriverState {
                    current_index: i,
                    light_on: step.on,
                    active: true,
                },
                "Mismatch at repetition {} step {}",
                repetition,
                i
            );
        }
    }
}

#[test]
fn test_index_advances_by_exactly_one() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);

    let mut previous = driver.current_index();
    for _ in 0..(SOS_PATTERN.len() * 2) {
        let wait = SOS_PATTERN[previous].duration();
        assert_eq!(scheduler.advance(wait), 1, "Exactly one advance per step");
        let current = driver.current_index();
        assert_eq!(current, (previous + 1) % SOS_PATTERN.len());
        previous = current;
    }
}

#[test]
fn test_deactivate_mid_first_step() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);

    scheduler.advance_to(ms(150));
    assert!(driver.light_on());

    driver.set_active(false);
    assert!(!driver.light_on(), "Light must go off at t=150");

    scheduler.advance_to(ms(200));
    assert_eq!(driver.state(), DriverState::default(), "No transition at t=200");

    scheduler.advance_to(ms(10_000));
    assert_eq!(driver.state(), DriverState::default());
}

#[test]
fn test_deactivate_during_dark_step() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);
    scheduler.advance_to(ms(1200)); // inside the 600ms gap after the first S
    assert!(!driver.light_on());
    assert_eq!(driver.current_index(), 5);

    driver.set_active(false);
    assert_eq!(scheduler.pending(), 0);

    // Step 6 would have started at t=1600
    assert_eq!(scheduler.advance_to(ms(1600)), 0);
    assert!(!driver.light_on());
}

#[test]
fn test_reactivation_restarts_from_zero() {
    let (scheduler, driver) = manual_driver();
    driver.set_active(true);
    scheduler.advance_to(ms(2300));
    assert_eq!(driver.current_index(), 7);

    driver.set_active(false);
    scheduler.advance(ms(500));
    driver.set_active(true);

    assert_eq!(driver.current_index(), 0);
    assert!(driver.light_on());

    // Timing restarts from the re-activation instant
    let resumed_at = scheduler.now();
    scheduler.advance_to(resumed_at + ms(199));
    assert!(driver.light_on());
    scheduler.advance_to(resumed_at + ms(200));
    assert!(!driver.light_on());
    assert_eq!(driver.current_index(), 1);
}

#[test]
fn test_rapid_toggling_leaves_single_timer() {
    let (scheduler, driver) = manual_driver();
    for _ in 0..25 {
        driver.set_active(true);
        driver.set_active(false);
    }
    driver.set_active(true);
    assert_eq!(scheduler.pending(), 1);

    assert_eq!(scheduler.advance(ms(200)), 1);
    assert_eq!(driver.current_index(), 1);
}

#[test]
fn test_thread_scheduler_cancellation() {
    let driver = SosDriver::new(Arc::new(ThreadScheduler::new()));
    driver.set_active(true);
    assert!(driver.light_on());

    thread::sleep(ms(50));
    driver.set_active(false);
    assert!(!driver.light_on());

    // Well past the point where the first step would have ended
    thread::sleep(ms(400));
    assert_eq!(driver.state(), DriverState::default());
}

#[test]
fn test_thread_scheduler_advances_in_real_time() {
    let driver = SosDriver::new(Arc::new(ThreadScheduler::new()));
    driver.set_active(true);

    // Middle of the second step (200-400ms)
    thread::sleep(ms(300));
    assert_eq!(driver.current_index(), 1);
    assert!(!driver.light_on());

    driver.set_active(false);
}
