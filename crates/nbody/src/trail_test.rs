use nalgebra::Point2;

use crate::trail::{sample_interval, Trail, AMPLIFY_TRAIL, MAX_HISTORY};

/// Speed at which every 10th step is sampled
const FAST: f64 = 10.0;

/// Records `samples` samples, sample k (1-based) at (k, -k)
fn fill(trail: &mut Trail, samples: usize) {
    let interval = sample_interval(FAST);
    let mut written = 0;
    let mut step = 0u64;
    while written < samples {
        step += 1;
        let k = (step / interval) as f64;
        if trail.record(Point2::new(k, -k), FAST) {
            written += 1;
        }
    }
}

#[test]
fn test_new_trail_is_unwritten() {
    let trail = Trail::new();

    assert_eq!(trail.capacity(), MAX_HISTORY);
    assert_eq!(trail.history_index(), 0);
    assert!(trail.is_empty());
    assert!(trail.xs().iter().all(|x| x.is_nan()));
    assert!(trail.ys().iter().all(|y| y.is_nan()));
    assert_eq!(trail.get(0), None);
    assert_eq!(trail.get(MAX_HISTORY), None);
}

#[test]
fn test_sample_interval() {
    assert_eq!(sample_interval(FAST), AMPLIFY_TRAIL as u64);
    assert_eq!(sample_interval(1.0), 20);
    assert_eq!(sample_interval(0.1), 200);
    assert_eq!(sample_interval(0.0), u64::MAX);
}

#[test]
fn test_fast_body_sampled_every_interval() {
    let mut trail = Trail::new();
    let written: Vec<bool> = (0..30)
        .map(|_| trail.record(Point2::new(1.0, 1.0), FAST))
        .collect();

    let sampled_steps: Vec<usize> = written
        .iter()
        .enumerate()
        .filter(|(_, w)| **w)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(sampled_steps, vec![10, 20, 30]);
    assert_eq!(trail.history_index(), 3);
}

#[test]
fn test_body_at_rest_is_never_sampled() {
    let mut trail = Trail::new();
    for _ in 0..10_000 {
        trail.record(Point2::new(1.0, 0.0), 0.0);
    }

    assert!(trail.is_empty());
    assert_eq!(trail.history_index(), 0);
}

#[test]
fn test_buffer_wraps_and_overwrites_oldest() {
    let mut trail = Trail::new();
    fill(&mut trail, MAX_HISTORY + 5);

    assert_eq!(trail.xs().len(), MAX_HISTORY);
    assert_eq!(trail.ys().len(), MAX_HISTORY);
    assert_eq!(trail.len(), MAX_HISTORY);
    assert_eq!(trail.history_index(), 5);

    // Slot 0 held sample 1, it now holds sample MAX_HISTORY + 1
    let first = trail.get(0).unwrap();
    assert_ne!(first, Point2::new(1.0, -1.0));
    assert_eq!(first.x, (MAX_HISTORY + 1) as f64);

    // Chronological view starts at the cursor
    let points: Vec<_> = trail.points().collect();
    assert_eq!(points.len(), MAX_HISTORY);
    assert_eq!(points[0].x, 6.0);
    assert_eq!(points[MAX_HISTORY - 1].x, (MAX_HISTORY + 5) as f64);
}

#[test]
fn test_segments_skip_unwritten_slots() {
    let mut trail = Trail::new();
    fill(&mut trail, 3);

    let segments = trail.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], (Point2::new(1.0, -1.0), Point2::new(2.0, -2.0)));
    assert_eq!(segments[1], (Point2::new(2.0, -2.0), Point2::new(3.0, -3.0)));
    assert!(segments
        .iter()
        .all(|(a, b)| !a.x.is_nan() && !b.x.is_nan()));
}

#[test]
fn test_full_buffer_segments() {
    let mut trail = Trail::new();
    fill(&mut trail, MAX_HISTORY + 20);

    assert_eq!(trail.segments().len(), MAX_HISTORY - 1);
}

#[test]
fn test_clear_is_idempotent() {
    let mut trail = Trail::new();
    fill(&mut trail, 12);

    trail.clear();
    let once = (trail.xs().to_vec(), trail.history_index());
    trail.clear();

    assert!(trail.is_empty());
    assert_eq!(trail.history_index(), once.1);
    assert_eq!(trail.xs().len(), once.0.len());
    assert!(trail.xs().iter().all(|x| x.is_nan()));

    // Counter restarts too: the next sample lands 10 steps later
    let writes = (0..10)
        .filter(|_| trail.record(Point2::new(0.0, 0.0), FAST))
        .count();
    assert_eq!(writes, 1);
}
