//! Particle behavior: persist flags, coercion, variance, animation gating.

use serde_json::json;

use super::Particle;
use crate::registry::IdRegistry;

fn make_particle(params: Option<&serde_json::Value>) -> (IdRegistry, Particle) {
    let mut registry = IdRegistry::new();
    let particle = Particle::new(&mut registry, params);
    (registry, particle)
}

#[test]
fn fresh_particle_exports_only_its_type() {
    let (_, particle) = make_particle(None);
    assert_eq!(particle.output(), json!({ "type": "ember" }));
}

#[test]
fn setup_marks_persist_flags_for_present_keys() {
    let doc = json!({
        "type": "spark",
        "size": "2.5",
        "position": [1.5, -2],
        "color": [255, 128, 0, 255],
    });
    let (_, particle) = make_particle(Some(&doc));
    assert_eq!(
        particle.output(),
        json!({
            "type": "spark",
            "size": 2.5,
            "color": [255, 128, 0, 255],
            "position": [1.5, -2],
        })
    );
    // Absent keys stay absent.
    assert!(particle.output().get("fade").is_none());
}

#[test]
fn zero_valued_fields_round_trip() {
    let doc = json!({ "destructionTime": 0, "timeToLive": 0.0 });
    let (_, particle) = make_particle(Some(&doc));
    let out = particle.output();
    assert_eq!(out["destructionTime"], json!(0));
    assert_eq!(out["timeToLive"], json!(0));
}

#[test]
fn export_follows_flags_not_values() {
    // Same field values, different flag sets, different documents.
    let (_, mut flagged) = make_particle(None);
    let (_, plain) = make_particle(None);
    assert!(flagged.set_save_parameter("size", true));
    assert_eq!(flagged.size(), plain.size());
    assert_eq!(flagged.output(), json!({ "type": "ember", "size": 1 }));
    assert_eq!(plain.output(), json!({ "type": "ember" }));

    // Clearing the flag removes the field even when the value changed.
    flagged.set_size(3.0);
    assert!(flagged.set_save_parameter("size", false));
    assert_eq!(flagged.output(), json!({ "type": "ember" }));

    assert!(!flagged.set_save_parameter("flippable", false));
    assert!(!flagged.set_save_parameter("warp", true));
}

#[test]
fn animation_is_gated_on_the_animated_type() {
    let doc = json!({ "type": "animated", "animation": "burst" });
    let (_, mut particle) = make_particle(Some(&doc));
    assert_eq!(particle.output()["animation"], json!("burst"));

    // Leaving the animated type clears the animation.
    particle.set_type("ember");
    assert_eq!(particle.animation(), "");
    assert!(particle.output().get("animation").is_none());

    // And assigning one while not animated is ignored.
    particle.set_animation("burst");
    assert_eq!(particle.animation(), "");
}

#[test]
fn numeric_setters_sanitize_but_keep_zero() {
    let (_, mut particle) = make_particle(None);
    assert_eq!(particle.set_size(0.0), 0.0);
    assert_eq!(particle.set_size(f64::NAN), 1.0);
    assert_eq!(particle.set_angular_velocity(f64::INFINITY), 0.0);
    assert_eq!(particle.set_position([1.0, f64::NAN]), [1.0, 0.0]);
}

#[test]
fn fade_clamps_on_assignment() {
    let (_, mut particle) = make_particle(None);
    assert_eq!(particle.set_fade(3.0), 1.0);
    assert_eq!(particle.set_fade(-0.5), 0.0);
    assert_eq!(particle.set_fade(0.25), 0.25);
    assert_eq!(particle.set_fade(f64::NAN), 0.0);
}

#[test]
fn variance_validates_keys_and_shapes() {
    let (_, mut particle) = make_particle(None);

    assert!(!particle.set_variance("color", &json!(1)));
    assert!(!particle.set_variance("initialVelocity", &json!(5)));
    assert!(particle.set_variance("initialVelocity", &json!([0, 1.5])));

    // Scalar parse failure defaults per key.
    assert!(particle.set_variance("size", &json!("wobbly")));
    assert!(particle.set_variance("timeToLive", &json!("forever")));
    assert_eq!(
        particle.output()["variance"],
        json!({ "initialVelocity": [0, 1.5], "size": 1, "timeToLive": 0 })
    );

    assert!(particle.remove_variance("size"));
    assert!(!particle.remove_variance("size"));
    assert!(!particle.remove_variance("color"));
}

#[test]
fn variance_is_exported_only_when_non_empty() {
    let (_, mut particle) = make_particle(None);
    assert!(particle.output().get("variance").is_none());

    particle.set_variance("timeToLive", &json!(2));
    assert_eq!(particle.output()["variance"], json!({ "timeToLive": 2 }));

    particle.remove_variance("timeToLive");
    assert!(particle.output().get("variance").is_none());
}

#[test]
fn flippable_exports_only_when_true() {
    let doc = json!({ "flippable": true });
    let (_, mut particle) = make_particle(Some(&doc));
    assert_eq!(particle.output()["flippable"], json!(true));

    particle.set_flippable(false);
    assert!(particle.output().get("flippable").is_none());
}

#[test]
fn destroy_releases_the_registry_id() {
    let (mut registry, particle) = make_particle(None);
    let id = particle.id();
    assert_eq!(registry.live_count(), 1);
    particle.destroy(&mut registry).unwrap();
    assert_eq!(registry.lookup(id), None);
    assert_eq!(registry.live_count(), 0);
}
