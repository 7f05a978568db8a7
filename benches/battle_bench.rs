//! Battle resolution throughput benchmarks.
//!
//! Run with: `cargo bench`
//! Results show mean time per resolved turn and per full demo replay.

use animus::battle::{ActionDeclaration, BattleSession, CombatClass, Combatant, NeverCrit};
use animus::sim::{demo_script, run_script};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn attacker() -> Combatant {
    Combatant {
        class: CombatClass::Lutador,
        attack: 100.0,
        defense: 45.0,
        crit_multiplier: 1.0,
        hp: 220.0,
        max_hp: 220.0,
        anima: 40.0,
        max_anima: 60.0,
    }
}

fn defender() -> Combatant {
    Combatant {
        class: CombatClass::Armamentista,
        attack: 90.0,
        defense: 60.0,
        crit_multiplier: 1.0,
        hp: 240.0,
        max_hp: 240.0,
        anima: 50.0,
        max_anima: 80.0,
    }
}

fn bench_battle(c: &mut Criterion) {
    let attacker = attacker();
    let defender = defender();

    let mut group = c.benchmark_group("battle");
    group.sample_size(100);

    group.throughput(Throughput::Elements(1));
    group.bench_function("composed_attack", |b| {
        let mut session = BattleSession::new();
        session.activate_dragon_cadence("kael");
        b.iter(|| {
            let outcome = session.perform_action(
                "kael",
                black_box(&attacker),
                "bren",
                black_box(&defender),
                ActionDeclaration::Attack,
            );
            black_box(outcome.damage_dealt)
        })
    });

    let script = demo_script();
    group.throughput(Throughput::Elements(script.steps.len() as u64));
    group.bench_function("demo_replay", |b| {
        b.iter(|| run_script(black_box(&script), Box::new(NeverCrit)).expect("replay"))
    });

    group.finish();
}

criterion_group!(benches, bench_battle);
criterion_main!(benches);
