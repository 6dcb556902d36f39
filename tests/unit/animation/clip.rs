use super::*;
use crate::naming::axis::{Action, Direction};

fn axis() -> AxisValues {
    AxisValues::new(Action::Slice, Direction::Down, 3)
}

fn frames(n: usize) -> Vec<FrameRef> {
    (0..n).map(|i| FrameRef(format!("Slice_Down_{i}"))).collect()
}

fn fps60() -> Fps {
    Fps::new(60, 1).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn five_frames_distribute_then_hold() {
    let timing = ClipTiming {
        total_duration_secs: 100.0 / 60.0,
        hold_start_secs: 80.0 / 60.0,
    };
    let clip = synthesize(axis(), &frames(5), &timing, fps60()).unwrap();

    let expected = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0].map(|t| t / 60.0);
    assert_eq!(clip.keyframes.len(), expected.len());
    for (key, t) in clip.keyframes.iter().zip(expected) {
        assert_close(key.time_secs, t);
    }
    assert_eq!(clip.keyframes[4].frame, FrameRef::from("Slice_Down_4"));
    assert_eq!(clip.keyframes[5].frame, FrameRef::from("Slice_Down_4"));
    assert_eq!(clip.name, "Slice_Down_Clip_3");
    clip.validate().unwrap();
}

#[test]
fn single_frame_spans_whole_clip() {
    let timing = ClipTiming {
        total_duration_secs: 1.5,
        hold_start_secs: 0.5,
    };
    let clip = synthesize(axis(), &frames(1), &timing, fps60()).unwrap();
    assert_eq!(clip.keyframes.len(), 2);
    assert_eq!(clip.keyframes[0].time_secs, 0.0);
    assert_eq!(clip.keyframes[1].time_secs, 1.5);
    assert!(
        clip.keyframes
            .iter()
            .all(|k| k.frame == FrameRef::from("Slice_Down_0"))
    );
}

#[test]
fn hold_equal_to_total_adds_no_terminal_key() {
    let timing = ClipTiming {
        total_duration_secs: 1.0,
        hold_start_secs: 1.0,
    };
    let clip = synthesize(axis(), &frames(3), &timing, fps60()).unwrap();
    assert_eq!(clip.keyframes.len(), 3);
    assert_close(clip.keyframes[1].time_secs, 0.5);
    assert_eq!(clip.keyframes[2].time_secs, 1.0);
    clip.validate().unwrap();
}

#[test]
fn times_are_monotonic_and_end_at_total() {
    for n in 1..12 {
        for (total, hold) in [(1.0, 0.0), (2.0, 1.3), (0.25, 0.25), (5.0, 4.999)] {
            let timing = ClipTiming {
                total_duration_secs: total,
                hold_start_secs: hold,
            };
            let clip = synthesize(axis(), &frames(n), &timing, fps60()).unwrap();
            assert!(
                clip.keyframes
                    .windows(2)
                    .all(|w| w[0].time_secs <= w[1].time_secs)
            );
            assert_eq!(clip.keyframes.last().unwrap().time_secs, total);
        }
    }
}

#[test]
fn invalid_timing_is_rejected_not_clamped() {
    let bad = [
        ClipTiming {
            total_duration_secs: 1.0,
            hold_start_secs: 1.5,
        },
        ClipTiming {
            total_duration_secs: 0.0,
            hold_start_secs: 0.0,
        },
        ClipTiming {
            total_duration_secs: 1.0,
            hold_start_secs: -0.1,
        },
    ];
    for timing in bad {
        assert!(matches!(
            synthesize(axis(), &frames(3), &timing, fps60()),
            Err(ForgeError::InvalidTiming(_))
        ));
    }
}

#[test]
fn empty_frame_list_is_a_validation_error() {
    assert!(matches!(
        synthesize(axis(), &[], &ClipTiming::default(), fps60()),
        Err(ForgeError::Validation(_))
    ));
}

#[test]
fn sampling_holds_previous_key() {
    let clip = synthesize(axis(), &frames(5), &ClipTiming::default(), fps60()).unwrap();

    assert_eq!(clip.frame_at(-1.0), Some(&FrameRef::from("Slice_Down_0")));
    assert_eq!(
        clip.frame_at_index(FrameIndex(0)),
        Some(&FrameRef::from("Slice_Down_0"))
    );
    assert_eq!(
        clip.frame_at_index(FrameIndex(19)),
        Some(&FrameRef::from("Slice_Down_0"))
    );
    assert_eq!(
        clip.frame_at_index(FrameIndex(20)),
        Some(&FrameRef::from("Slice_Down_1"))
    );
    assert_eq!(
        clip.frame_at_index(FrameIndex(95)),
        Some(&FrameRef::from("Slice_Down_4"))
    );
    assert_eq!(clip.frame_at(10.0), Some(&FrameRef::from("Slice_Down_4")));
    assert_eq!(clip.duration_frames(), 100);
    assert_eq!(clip.frames().len(), 5);
}
