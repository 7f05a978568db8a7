use animus::battle::combo::{
    adaptive_arsenal, anima_convergence, dragon_cadence, ActionKind, ComboRegistry,
};

// --- Dragon's Cadence -----------------------------------------------------

#[test]
fn cadence_buff_grows_ten_percent_per_consecutive_attack() {
    let mut registry = ComboRegistry::new();
    dragon_cadence::activate(&mut registry, "kael");
    for expected in 1..=5u32 {
        let outcome = dragon_cadence::process_basic_attack(&mut registry, "kael");
        assert_eq!(outcome.consecutive_basic_attacks, expected);
        assert_eq!(outcome.buff_percent, expected * 10);
    }
}

#[test]
fn cadence_break_restarts_the_streak_but_stays_armed() {
    let mut registry = ComboRegistry::new();
    dragon_cadence::activate(&mut registry, "kael");
    for _ in 0..4 {
        dragon_cadence::process_basic_attack(&mut registry, "kael");
    }
    dragon_cadence::break_streak(&mut registry, "kael");

    let state = registry.state_for("kael").expect("state exists").dragon;
    assert!(state.armed);
    assert_eq!(state.buff_percent, 0);

    // The next attack starts over at 10%, not 50%.
    let outcome = dragon_cadence::process_basic_attack(&mut registry, "kael");
    assert_eq!(outcome.buff_percent, 10);
}

#[test]
fn cadence_is_inert_until_activated() {
    let mut registry = ComboRegistry::new();
    let outcome = dragon_cadence::process_basic_attack(&mut registry, "kael");
    assert!(!outcome.armed);
    assert_eq!(outcome.buff_percent, 0);
    // The no-op attack must not allocate or mutate state.
    assert!(registry.state_for("kael").is_none());
}

#[test]
fn cadence_apply_buff_multiplies_and_rounds() {
    let mut registry = ComboRegistry::new();
    dragon_cadence::activate(&mut registry, "kael");
    for _ in 0..3 {
        dragon_cadence::process_basic_attack(&mut registry, "kael");
    }
    // +30%: 65 x 1.3 = 84.5 rounds to 85.
    assert_eq!(dragon_cadence::apply_buff(&registry, 65, "kael"), 85);
    // Unknown ids pass through unchanged.
    assert_eq!(dragon_cadence::apply_buff(&registry, 65, "ghost"), 65);
}

#[test]
fn cadence_full_reset_rearms_even_a_dormant_character() {
    let mut registry = ComboRegistry::new();
    dragon_cadence::reset(&mut registry, "never-armed");
    let state = registry.state_for("never-armed").expect("created").dragon;
    assert!(state.armed);
    assert_eq!(state.consecutive_basic_attacks, 0);
}

// --- Adaptive Arsenal -----------------------------------------------------

#[test]
fn arsenal_first_action_grants_and_applies_nothing() {
    let mut registry = ComboRegistry::new();
    let outcome = adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Attack);
    assert!(!outcome.alternated);
    assert_eq!(outcome.applied_percent, 0);
    assert_eq!(outcome.stored_percent, 0);
}

#[test]
fn arsenal_alternations_carry_the_previous_buff_forward() {
    let mut registry = ComboRegistry::new();
    let sequence = [
        ActionKind::Attack,
        ActionKind::Support,
        ActionKind::Attack,
        ActionKind::Support,
    ];
    let expected_applied = [0, 0, 3, 6];
    let expected_stored = [0, 3, 6, 9];
    for (i, kind) in sequence.into_iter().enumerate() {
        let outcome = adaptive_arsenal::record_action(&mut registry, "bren", kind);
        assert_eq!(outcome.applied_percent, expected_applied[i], "step {i}");
        assert_eq!(outcome.stored_percent, expected_stored[i], "step {i}");
    }
}

#[test]
fn arsenal_repeat_resets_the_chain() {
    let mut registry = ComboRegistry::new();
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Attack);
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Support);
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Attack);
    let repeat = adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Attack);
    assert!(!repeat.alternated);
    assert_eq!(repeat.applied_percent, 0);
    assert_eq!(repeat.stored_percent, 0);

    // The chain restarts from scratch afterwards.
    let next = adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Defense);
    assert_eq!(next.consecutive_alternations, 1);
    assert_eq!(next.stored_percent, 3);
}

#[test]
fn arsenal_defense_never_receives_the_carried_buff() {
    let mut registry = ComboRegistry::new();
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Attack);
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Support);
    adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Meditation);
    // Carried buff is 6% here, but the defense action must not apply it.
    let defense = adaptive_arsenal::record_action(&mut registry, "bren", ActionKind::Defense);
    assert!(defense.alternated);
    assert_eq!(defense.applied_percent, 0);
    assert_eq!(defense.stored_percent, 9);

    assert_eq!(
        adaptive_arsenal::apply_buff(&registry, 100, "bren", ActionKind::Defense),
        100
    );
    // 100 x 1.09 = 109 for anything that is not a defense action.
    assert_eq!(
        adaptive_arsenal::apply_buff(&registry, 100, "bren", ActionKind::Attack),
        109
    );
}

#[test]
fn arsenal_action_kind_parses_strictly() {
    assert_eq!("attack".parse::<ActionKind>(), Ok(ActionKind::Attack));
    assert_eq!("MEDITATION".parse::<ActionKind>(), Ok(ActionKind::Meditation));
    assert!("dance".parse::<ActionKind>().is_err());
}

// --- Anima Convergence ----------------------------------------------------

#[test]
fn convergence_discount_lags_one_cast() {
    let mut registry = ComboRegistry::new();
    // Three 20-cost casts pay 20, 20, 19 (0%, 2%, 4% applied) and leave the
    // stored discount at 6%.
    let first = anima_convergence::process_cast(&mut registry, "mira", 20);
    assert_eq!(
        (first.applied_percent, first.effective_cost, first.stored_percent),
        (0, 20, 2)
    );
    let second = anima_convergence::process_cast(&mut registry, "mira", 20);
    assert_eq!(
        (second.applied_percent, second.effective_cost, second.stored_percent),
        (2, 20, 4)
    );
    let third = anima_convergence::process_cast(&mut registry, "mira", 20);
    assert_eq!(
        (third.applied_percent, third.effective_cost, third.stored_percent),
        (4, 19, 6)
    );
}

#[test]
fn convergence_ignores_free_casts() {
    let mut registry = ComboRegistry::new();
    anima_convergence::process_cast(&mut registry, "mira", 20);
    let free = anima_convergence::process_cast(&mut registry, "mira", 0);
    assert_eq!(free.effective_cost, 0);
    assert_eq!(free.consecutive_casts, 1);
    assert_eq!(free.stored_percent, 2);

    // The chain continues as if the free cast never happened.
    let next = anima_convergence::process_cast(&mut registry, "mira", 20);
    assert_eq!(next.applied_percent, 2);
    assert_eq!(next.consecutive_casts, 2);
}

#[test]
fn convergence_break_preserves_the_discount_for_one_more_cast() {
    let mut registry = ComboRegistry::new();
    for _ in 0..3 {
        anima_convergence::process_cast(&mut registry, "mira", 20);
    }
    anima_convergence::break_chain(&mut registry, "mira");

    let state = registry.state_for("mira").expect("state exists").convergence;
    assert_eq!(state.consecutive_casts, 0);
    assert_eq!(state.reduction_percent, 6);

    // The preserved 6% is consumed once, then the track restarts at 2%.
    let cast = anima_convergence::process_cast(&mut registry, "mira", 50);
    assert_eq!(cast.applied_percent, 6);
    assert_eq!(cast.effective_cost, 47);
    assert_eq!(cast.stored_percent, 2);
}

#[test]
fn convergence_break_on_an_unknown_id_allocates_nothing() {
    let mut registry = ComboRegistry::new();
    anima_convergence::break_chain(&mut registry, "ghost");
    assert!(registry.state_for("ghost").is_none());
}

// --- Registry -------------------------------------------------------------

#[test]
fn registry_counts_tracked_and_active_characters() {
    let mut registry = ComboRegistry::new();
    assert_eq!(registry.tracked_count(), 0);

    // Touching a slot tracks it; only non-default state counts as active.
    let _ = registry.state_mut("idle");
    dragon_cadence::activate(&mut registry, "kael");
    assert_eq!(registry.tracked_count(), 2);
    assert_eq!(registry.active_count(), 1);

    registry.clear_character("kael");
    assert_eq!(registry.tracked_count(), 1);
    assert_eq!(registry.active_count(), 0);

    registry.clear();
    assert_eq!(registry.tracked_count(), 0);
}

#[test]
fn combo_slices_are_independent_per_character() {
    let mut registry = ComboRegistry::new();
    dragon_cadence::activate(&mut registry, "kael");
    anima_convergence::process_cast(&mut registry, "mira", 20);

    let kael = registry.state_for("kael").expect("kael tracked");
    let mira = registry.state_for("mira").expect("mira tracked");
    assert!(kael.dragon.armed);
    assert_eq!(kael.convergence, Default::default());
    assert!(!mira.dragon.armed);
    assert_eq!(mira.convergence.consecutive_casts, 1);
}
