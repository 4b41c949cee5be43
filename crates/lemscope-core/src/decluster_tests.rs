use super::*;
use lemscope_protocols::{Emotion, Layer};

fn marker(id: &str, x: f64, y: f64) -> Marker {
    let mut marker = Marker::human(Layer::Emotions, x, y, format!("marker {}", id));
    marker.id = id.to_string();
    marker
}

fn min_pairwise_distance(markers: &[Marker]) -> f64 {
    let mut min = f64::INFINITY;
    for (j, a) in markers.iter().enumerate() {
        for b in &markers[j + 1..] {
            min = min.min(a.distance_to(b));
        }
    }
    min
}

#[test]
fn test_separated_set_is_a_fixpoint() {
    let mut markers: Vec<Marker> = (0..12)
        .map(|i| marker(&format!("m{}", i), 10.0 + (i % 4) as f64 * 10.0, 20.0 + (i / 4) as f64 * 10.0))
        .collect();
    let before = markers.clone();

    DeclusterEngine::default().relax(&mut markers);

    assert_eq!(markers, before);
}

#[test]
fn test_close_pair_pushed_to_threshold() {
    let mut markers = vec![marker("a", 50.0, 50.0), marker("b", 51.0, 50.0)];

    DeclusterEngine::default().relax(&mut markers);

    assert_eq!((markers[0].x, markers[0].y), (49.0, 50.0));
    assert_eq!((markers[1].x, markers[1].y), (52.0, 50.0));
}

#[test]
fn test_coincident_pair_is_separated() {
    let mut markers = vec![marker("a", 50.0, 50.0), marker("b", 50.0, 50.0)];

    DeclusterEngine::default().relax(&mut markers);

    let distance = markers[0].distance_to(&markers[1]);
    assert!(distance > 0.0);
    assert!(distance <= 3.0 + 1e-9, "distance {}", distance);
    assert!((distance - 3.0).abs() < 1e-9);
}

#[test]
fn test_near_coincident_pair_uses_id_direction() {
    let mut markers = vec![marker("a", 50.0, 50.0), marker("b", 50.005, 50.0)];
    let mut again = markers.clone();

    DeclusterEngine::default().relax(&mut markers);
    DeclusterEngine::default().relax(&mut again);

    let distance = markers[0].distance_to(&markers[1]);
    assert!((distance - 3.0).abs() < 1e-9, "distance {}", distance);
    // Pushed along the id-derived direction, not the tiny x offset.
    assert!((markers[0].y - markers[1].y).abs() > 0.1);
    assert_eq!(markers, again);
}

#[test]
fn test_tie_break_direction_is_stable() {
    let (ux, uy) = tie_break_direction("a", "b");
    assert!((ux - -0.993_158_877_235_4).abs() < 1e-9, "ux {}", ux);
    assert!((uy - 0.116_770_905_918_9).abs() < 1e-9, "uy {}", uy);
    assert!((ux.hypot(uy) - 1.0).abs() < 1e-12);
    assert_ne!(tie_break_direction("a", "b"), tie_break_direction("b", "a"));
}

#[test]
fn test_thirty_coincident_markers_become_distinct() {
    let mut markers: Vec<Marker> = (0..30).map(|i| marker(&format!("ai-{}", i), 50.0, 50.0)).collect();

    DeclusterEngine::default().relax(&mut markers);

    for m in &markers {
        assert!((2.0..=98.0).contains(&m.x), "x {}", m.x);
        assert!((0.5..=99.5).contains(&m.y), "y {}", m.y);
    }
    for (j, a) in markers.iter().enumerate() {
        for b in &markers[j + 1..] {
            assert!((a.x, a.y) != (b.x, b.y), "{} and {} share a position", a.id, b.id);
        }
    }
    assert!(min_pairwise_distance(&markers) > 0.0);
}

#[test]
fn test_relaxation_is_deterministic() {
    let input: Vec<Marker> = (0..20)
        .map(|i| marker(&format!("m{}", i), 40.0 + (i % 3) as f64 * 0.7, 60.0 - (i % 5) as f64 * 0.4))
        .collect();

    let mut first = input.clone();
    let mut second = input.clone();
    DeclusterEngine::default().relax(&mut first);
    DeclusterEngine::default().relax(&mut second);

    assert_eq!(first, second);
}

#[test]
fn test_identity_and_semantics_preserved() {
    let mut input: Vec<Marker> = (0..8).map(|i| marker(&format!("m{}", i), 30.0, 30.0 + i as f64 * 0.5)).collect();
    input[3].emotion = Some(Emotion::Joy);
    let mut relaxed = input.clone();

    DeclusterEngine::default().relax(&mut relaxed);

    assert_eq!(relaxed.len(), input.len());
    for (before, after) in input.iter().zip(&relaxed) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.comment, after.comment);
        assert_eq!(before.layer, after.layer);
        assert_eq!(before.emotion, after.emotion);
        assert_eq!(after.x, 30.0);
    }
}

#[test]
fn test_final_clamp_to_canvas() {
    let mut markers = vec![marker("edge", 1.0, 0.0), marker("far", 99.0, 100.0)];

    DeclusterEngine::default().relax(&mut markers);

    assert_eq!((markers[0].x, markers[0].y), (2.0, 0.5));
    assert_eq!((markers[1].x, markers[1].y), (98.0, 99.5));
}

#[test]
fn test_zero_iterations_only_clamps() {
    let engine = DeclusterEngine::new(DeclusterConfig {
        iterations: 0,
        ..Default::default()
    });
    let mut markers = vec![marker("a", 50.0, 50.0), marker("b", 50.5, 50.0)];

    engine.relax(&mut markers);

    assert_eq!(markers[0].x, 50.0);
    assert_eq!(markers[1].x, 50.5);
}

#[test]
fn test_larger_threshold_spreads_further() {
    let engine = DeclusterEngine::new(DeclusterConfig {
        spread_threshold: 6.0,
        ..Default::default()
    });
    let mut markers = vec![marker("a", 50.0, 50.0), marker("b", 50.0, 52.0)];

    engine.relax(&mut markers);

    assert!((markers[0].distance_to(&markers[1]) - 6.0).abs() < 1e-9);
}

#[test]
fn test_small_sets_are_not_relaxed() {
    let engine = DeclusterEngine::default();
    assert!(!engine.should_apply(0));
    assert!(!engine.should_apply(5));
    assert!(engine.should_apply(6));

    let mut markers: Vec<Marker> = (0..5).map(|i| marker(&format!("m{}", i), 50.0, 50.0)).collect();
    assert!(!engine.apply(&mut markers));
    assert!(markers.iter().all(|m| m.x == 50.0 && m.y == 50.0));

    let mut markers: Vec<Marker> = (0..6).map(|i| marker(&format!("m{}", i), 50.0, 50.0)).collect();
    assert!(engine.apply(&mut markers));
    assert!(min_pairwise_distance(&markers) > 0.0);
}

#[test]
fn test_config_from_analysis_config() {
    let analysis = AnalysisConfig {
        spread_threshold: 4.0,
        decluster_iterations: 9,
        decluster_min_markers: 2,
        ..Default::default()
    };
    let config = DeclusterConfig::from(&analysis);
    assert_eq!(config.spread_threshold, 4.0);
    assert_eq!(config.iterations, 9);
    assert_eq!(config.min_markers, 2);
}
