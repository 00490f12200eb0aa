mod common;

use common::{load_fixture, RecordingFit};
use fitwarp_lib::fit::{Item, ItemGroup, Module, ModuleState, Ship, MAX_VELOCITY};
use fitwarp_lib::probe::{EffectCategory, NeutralizedFit};
use fitwarp_lib::{CleanSubwarpSpeedProbe, Error, Fit, FitDocument, FitId};

fn propulsion_fit() -> FitDocument {
    let mut fit = load_fixture("propulsion_fit.json");
    fit.calculate_modified_attributes().expect("initial recalc");
    fit
}

fn single_afterburner_fit() -> FitDocument {
    FitDocument {
        id: FitId(100),
        name: "Rifter".to_string(),
        warp_speed: 5.0,
        max_warp_distance: 50.0,
        ship: Some(Ship::new("Rifter", 350.0)),
        modules: vec![Module {
            item: Some(Item {
                name: "1MN Afterburner".to_string(),
                group: ItemGroup::PropulsionModule,
                velocity_bonus: 135.0,
            }),
            state: ModuleState::Active,
            exclusive_system_effect: false,
        }],
        projected_modules: vec![],
        projected_drones: vec![],
        projected_fighters: vec![],
        projected_fits: vec![],
    }
}

#[test]
fn measures_speed_with_dynamic_effects_removed() {
    let mut fit = propulsion_fit();
    let live = fit.ship().and_then(|s| s.modified_attr(MAX_VELOCITY));

    let mut probe = CleanSubwarpSpeedProbe::new();
    let speed = probe.clean_subwarp_speed(&mut fit).expect("probe");

    // Only the exclusive system effect survives neutralization.
    assert_eq!(speed, 500.0);
    assert_eq!(probe.cache().get(FitId(42)), Some(500.0));
    assert_eq!(fit.ship().and_then(|s| s.modified_attr(MAX_VELOCITY)), live);
}

#[test]
fn restores_every_entity_bit_for_bit() {
    let mut fit = propulsion_fit();
    let before = fit.clone();

    CleanSubwarpSpeedProbe::new()
        .clean_subwarp_speed(&mut fit)
        .expect("probe");

    assert_eq!(fit, before);
}

#[test]
fn active_propulsion_module_returns_to_active() {
    let mut fit = RecordingFit::new(single_afterburner_fit());

    let speed = CleanSubwarpSpeedProbe::new()
        .clean_subwarp_speed(&mut fit)
        .expect("probe");

    assert_eq!(speed, 350.0);
    assert_eq!(fit.inner.modules[0].state, ModuleState::Active);
    assert_eq!(
        fit.observed_module_states,
        vec![vec![ModuleState::Online], vec![ModuleState::Active]]
    );
}

#[test]
fn cached_speed_skips_recalculation() {
    let mut fit = RecordingFit::new(propulsion_fit());
    let mut probe = CleanSubwarpSpeedProbe::new();

    let first = probe.clean_subwarp_speed(&mut fit).expect("first probe");
    assert_eq!(fit.recalculations, 2);

    let snapshot = fit.inner.clone();
    let second = probe.clean_subwarp_speed(&mut fit).expect("second probe");

    assert_eq!(first, second);
    assert_eq!(fit.recalculations, 2);
    assert_eq!(fit.inner, snapshot);
}

#[test]
fn invalidation_forces_remeasurement() {
    let mut fit = RecordingFit::new(single_afterburner_fit());
    let mut probe = CleanSubwarpSpeedProbe::new();

    probe.clean_subwarp_speed(&mut fit).expect("probe");
    fit.inner.ship = Some(Ship::new("Rifter", 400.0));
    assert_eq!(probe.clean_subwarp_speed(&mut fit).expect("cached"), 350.0);

    assert_eq!(probe.invalidate(FitId(100)), Some(350.0));
    assert_eq!(probe.clean_subwarp_speed(&mut fit).expect("fresh"), 400.0);
    assert_eq!(fit.recalculations, 4);
}

#[test]
fn clearing_the_cache_remeasures_every_fit() {
    let mut first = RecordingFit::new(single_afterburner_fit());
    let mut second = RecordingFit::new(propulsion_fit());
    let mut probe = CleanSubwarpSpeedProbe::new();

    probe.clean_subwarp_speed(&mut first).expect("first fit");
    probe.clean_subwarp_speed(&mut second).expect("second fit");
    assert_eq!(probe.cache().len(), 2);

    probe.clear();
    assert!(probe.cache().is_empty());

    assert_eq!(probe.clean_subwarp_speed(&mut first).expect("first again"), 350.0);
    assert_eq!(probe.clean_subwarp_speed(&mut second).expect("second again"), 500.0);
    assert_eq!(first.recalculations, 4);
    assert_eq!(second.recalculations, 4);
}

#[test]
fn failed_measurement_still_restores_state() {
    let original = propulsion_fit();
    let mut fit = RecordingFit::new(original.clone()).failing_on(&[1]);
    let mut probe = CleanSubwarpSpeedProbe::new();

    let err = probe.clean_subwarp_speed(&mut fit).unwrap_err();

    assert!(matches!(err, Error::Recalculation { .. }), "got {err:?}");
    assert_eq!(fit.recalculations, 2);
    assert!(!probe.cache().contains(FitId(42)));
    assert_eq!(fit.inner, original);
}

#[test]
fn failed_resync_is_reported_but_measurement_is_cached() {
    let mut fit = RecordingFit::new(propulsion_fit()).failing_on(&[2]);
    let mut probe = CleanSubwarpSpeedProbe::new();

    let err = probe.clean_subwarp_speed(&mut fit).unwrap_err();

    assert!(matches!(err, Error::Recalculation { .. }), "got {err:?}");
    assert_eq!(probe.cache().get(FitId(42)), Some(500.0));
    assert_eq!(fit.inner.modules[0].state, ModuleState::Active);
}

#[test]
fn missing_ship_is_an_error() {
    let mut fit = load_fixture("shipless_fit.json");
    let before = fit.clone();

    let err = CleanSubwarpSpeedProbe::new()
        .clean_subwarp_speed(&mut fit)
        .unwrap_err();

    assert!(matches!(err, Error::MissingShip { fit } if fit == FitId(9)));
    assert_eq!(fit, before);
}

#[test]
fn guard_neutralizes_each_category_and_restores_on_drop() {
    let mut fit = propulsion_fit();
    let before = fit.clone();

    {
        let guard = NeutralizedFit::engage(&mut fit);
        let mut categories: Vec<EffectCategory> =
            guard.saved().iter().map(|saved| saved.category()).collect();
        categories.dedup();
        assert_eq!(categories, EffectCategory::ALL.to_vec());
        // MWD, link 7, webifier, drone stack, fighter.
        assert_eq!(guard.saved().len(), 5);

        let neutral = guard.fit();
        assert_eq!(neutral.modules[0].state, ModuleState::Online);
        assert_eq!(neutral.modules[1].state, ModuleState::Active);
        assert_eq!(neutral.projected_modules[0].state, ModuleState::Online);
        assert_eq!(neutral.projected_modules[1].state, ModuleState::Active);
        assert_eq!(neutral.projected_drones[0].amount_active, 0);
        assert!(!neutral.projected_fighters[0].active);
        assert_eq!(
            neutral.projected_fits[0].projection_info().map(|p| p.active),
            Some(false)
        );
    }

    assert_eq!(fit, before);
}
