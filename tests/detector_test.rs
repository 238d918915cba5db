use std::collections::VecDeque;

use hand_features::FeatureError;
use hand_features::detector::{FrameExtractor, HandDetector};

/// Replays a fixed list of detections, one per frame.
struct ScriptedDetector {
    script: VecDeque<Option<Vec<[f64; 3]>>>,
    calls: usize,
}

impl HandDetector for ScriptedDetector {
    type Frame = u64;

    fn detect(&mut self, _frame: &u64) -> Option<Vec<[f64; 3]>> {
        self.calls += 1;
        self.script.pop_front().flatten()
    }
}

fn flat_hand(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| [0.01 * i as f64, 0.02 * (i % 5) as f64, 0.0])
        .collect()
}

#[test]
fn test_extractor_reuses_detector() {
    let detector = ScriptedDetector {
        script: VecDeque::from(vec![Some(flat_hand(21)), None, Some(flat_hand(12))]),
        calls: 0,
    };
    let mut extractor = FrameExtractor::new(detector);

    let first = extractor.extract(&0, None).unwrap();
    assert_eq!(first.unwrap().landmarks_norm.len(), 21);

    assert!(extractor.extract(&1, None).unwrap().is_none());

    assert!(matches!(
        extractor.extract(&2, None),
        Err(FeatureError::InvalidLandmarkSet { found: 12, .. })
    ));
    assert_eq!(extractor.detector().calls, 3);
}
