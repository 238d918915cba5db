use hand_features::FeatureError;
use hand_features::schema::{CapturePayload, ExtractResponse, RawAnchor, RawPoseAnchors, extract};
use hand_features::{Landmark, PoseAnchors};

fn hand() -> Vec<Landmark> {
    (0..21)
        .map(|i| {
            let t = i as f64 * 0.3;
            Landmark::new(i, 0.4 + 0.1 * t.cos(), 0.6 + 0.1 * t.sin(), 0.01 * t)
        })
        .collect()
}

fn payload(landmarks: Option<Vec<Landmark>>) -> CapturePayload {
    CapturePayload {
        sign_id: "hola".to_string(),
        kind: "static".to_string(),
        device_id: "cam-01".to_string(),
        timestamp: "2024-05-01T12:00:00Z".to_string(),
        landmarks,
        pose_anchors: None,
    }
}

#[test]
fn test_missing_landmarks() {
    assert!(matches!(
        extract(&payload(None)),
        Err(FeatureError::MissingLandmarks)
    ));
    assert!(matches!(
        extract(&payload(Some(vec![]))),
        Err(FeatureError::MissingLandmarks)
    ));
}

#[test]
fn test_short_hand_reports_error_response() {
    let mut short = hand();
    short.truncate(10);
    match extract(&payload(Some(short))).unwrap() {
        ExtractResponse::Error { detail } => assert!(detail.contains("invalid landmark set")),
        ExtractResponse::Ok { .. } => panic!("expected an error response"),
    }
}

#[test]
fn test_ok_response_json() {
    let response = extract(&payload(Some(hand()))).unwrap();
    let v = serde_json::to_value(&response).unwrap();
    assert_eq!(v["status"], "OK");
    assert_eq!(v["features"]["angles"].as_array().unwrap().len(), 5);

    let back: ExtractResponse = serde_json::from_value(v).unwrap();
    assert!(matches!(back, ExtractResponse::Ok { .. }));
}

#[test]
fn test_anchors_change_scale_only() {
    let mut with_anchors = payload(Some(hand()));
    with_anchors.pose_anchors = Some(RawPoseAnchors {
        nose: Some(RawAnchor::new(0.5, 0.2)),
        left_shoulder: Some(RawAnchor::new(0.3, 0.5)),
        right_shoulder: Some(RawAnchor::new(0.7, 0.5)),
    });
    assert!(matches!(
        with_anchors
            .pose_anchors
            .as_ref()
            .unwrap()
            .to_pose_anchors(),
        PoseAnchors::Full { .. }
    ));

    let (ExtractResponse::Ok { features: a }, ExtractResponse::Ok { features: b }) = (
        extract(&payload(Some(hand()))).unwrap(),
        extract(&with_anchors).unwrap(),
    ) else {
        panic!("expected ok responses");
    };
    assert_eq!(a.centroid, b.centroid);
    assert_eq!(a.palm_normal, b.palm_normal);
    for (x, y) in a.angles.iter().zip(b.angles) {
        assert!((x - y).abs() < 1e-2);
    }
    assert!((a.landmarks_norm[0][0] - b.landmarks_norm[0][0]).abs() > 1e-6);
}

#[test]
fn test_payload_from_client_json() {
    let json = r#"{
        "sign_id": "gracias",
        "type": "dynamic",
        "device_id": "web",
        "timestamp": "1714564800",
        "landmarks": null
    }"#;
    let p: CapturePayload = serde_json::from_str(json).unwrap();
    assert!(p.landmarks.is_none());
    assert!(p.pose_anchors.is_none());
}
