//! Tests for phase classification and tracking.

use crate::config::PhaseConfig;
use crate::constants::NATURAL_EQUILIBRIUM;
use crate::vector::Ljpw;

use super::{PhaseClassifier, PhaseTracker, SystemPhase};

#[test]
fn test_system_phase_default() {
    assert_eq!(SystemPhase::default(), SystemPhase::Homeostatic);
}

#[test]
fn test_system_phase_predicates() {
    assert!(SystemPhase::Autopoietic.is_self_sustaining());
    assert!(!SystemPhase::Homeostatic.is_self_sustaining());
    assert!(SystemPhase::Entropic.is_entropic());
    assert!(!SystemPhase::Autopoietic.is_entropic());
}

#[test]
fn test_system_phase_index_matches_all() {
    for (i, phase) in SystemPhase::ALL.iter().enumerate() {
        assert_eq!(phase.index(), i);
    }
}

#[test]
fn test_system_phase_display() {
    assert_eq!(SystemPhase::Entropic.to_string(), "Entropic");
    assert!(!SystemPhase::Autopoietic.description().is_empty());
}

#[test]
fn test_system_phase_serde_lowercase() {
    let json = serde_json::to_string(&SystemPhase::Homeostatic).unwrap();
    assert_eq!(json, "\"homeostatic\"");
    let back: SystemPhase = serde_json::from_str("\"entropic\"").unwrap();
    assert_eq!(back, SystemPhase::Entropic);
}

#[test]
fn test_classifier_boundaries_inclusive() {
    let classifier = PhaseClassifier::new();
    // H exactly at the entropic threshold is no longer entropic.
    assert_eq!(classifier.classify(0.5, 0.0), SystemPhase::Homeostatic);
    // Both autopoietic thresholds are inclusive.
    assert_eq!(classifier.classify(0.6, 0.7), SystemPhase::Autopoietic);
    assert_eq!(classifier.classify(0.599, 0.9), SystemPhase::Homeostatic);
    assert_eq!(classifier.classify(0.9, 0.699), SystemPhase::Homeostatic);
}

#[test]
fn test_classifier_low_harmony_wins_over_love() {
    let classifier = PhaseClassifier::new();
    assert_eq!(classifier.classify(0.3, 1.0), SystemPhase::Entropic);
}

#[test]
fn test_classify_natural_equilibrium_is_homeostatic() {
    // H ≈ 0.551, L ≈ 0.618
    let classifier = PhaseClassifier::new();
    assert_eq!(
        classifier.classify_vector(&NATURAL_EQUILIBRIUM),
        SystemPhase::Homeostatic
    );
}

#[test]
fn test_classifier_with_thresholds() {
    let classifier = PhaseClassifier::with_thresholds(0.4, 0.5, 0.6).unwrap();
    assert_eq!(classifier.entropic_below(), 0.4);
    assert_eq!(classifier.autopoietic_harmony(), 0.5);
    assert_eq!(classifier.autopoietic_love(), 0.6);
    assert_eq!(classifier.classify(0.45, 0.5), SystemPhase::Homeostatic);
    assert_eq!(classifier.classify(0.55, 0.65), SystemPhase::Autopoietic);
}

#[test]
fn test_classifier_invalid_thresholds() {
    assert!(PhaseClassifier::with_thresholds(0.7, 0.6, 0.7).is_err());
    assert!(PhaseClassifier::with_thresholds(-0.1, 0.6, 0.7).is_err());
    assert!(PhaseClassifier::with_thresholds(0.5, 0.6, 1.5).is_err());
}

#[test]
fn test_classifier_from_config() {
    let config = PhaseConfig {
        entropic_below: 0.3,
        ..Default::default()
    };
    let classifier = PhaseClassifier::from_config(&config);
    assert_eq!(classifier.classify(0.4, 0.1), SystemPhase::Homeostatic);
}

#[test]
fn test_tracker_empty() {
    let tracker = PhaseTracker::new();
    assert_eq!(tracker.current_phase(), None);
    assert_eq!(tracker.observations(), 0);
    assert_eq!(tracker.occupancy().homeostatic, 0.0);
}

#[test]
fn test_tracker_occupancy() {
    let mut tracker = PhaseTracker::new();
    tracker.observe(0.0, 0.4, 0.5);
    tracker.observe(1.0, 0.55, 0.5);
    tracker.observe(2.0, 0.55, 0.5);
    tracker.observe(3.0, 0.8, 0.9);

    let occupancy = tracker.occupancy();
    assert!((occupancy.entropic - 0.25).abs() < 1e-12);
    assert!((occupancy.homeostatic - 0.5).abs() < 1e-12);
    assert!((occupancy.fraction(SystemPhase::Autopoietic) - 0.25).abs() < 1e-12);
}

#[test]
fn test_tracker_transitions() {
    let mut tracker = PhaseTracker::new();
    tracker.observe(0.0, 0.4, 0.5);
    tracker.observe(0.5, 0.4, 0.5);
    tracker.observe(1.0, 0.55, 0.5);
    tracker.observe(1.5, 0.45, 0.5);

    let transitions = tracker.transitions();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].from, SystemPhase::Entropic);
    assert_eq!(transitions[0].to, SystemPhase::Homeostatic);
    assert_eq!(transitions[0].time, 1.0);
    assert_eq!(transitions[1].to, SystemPhase::Entropic);
}

#[test]
fn test_tracker_reset() {
    let mut tracker = PhaseTracker::new();
    tracker.observe(0.0, 0.4, 0.5);
    tracker.observe(1.0, 0.9, 0.9);
    tracker.reset();
    assert_eq!(tracker.observations(), 0);
    assert!(tracker.transitions().is_empty());
    assert_eq!(tracker.current_phase(), None);
}

#[test]
fn test_tracker_uses_vector_love() {
    let mut tracker = PhaseTracker::new();
    let v = Ljpw::new(0.85, 0.9, 0.8, 0.95);
    let phase = tracker.observe(0.0, crate::scoring::harmony_index(&v), v.love);
    assert_eq!(phase, SystemPhase::Autopoietic);
}
