use tactics_core::{
    Actor, ActorId, AttackCategory, CheckRecord, Choice, CombatSession, EquippedArmor,
    EquippedWeapon, GameSave, GridPosition, LegalityContext, MoveDirection, ReasonCode,
    ResourceMeter, RulesConfig, RulesOracle, RulesSnapshot, TagNamespace, TurnState, Weapon,
    parse_tags, resolve, resolve_for_player,
};

fn catalog() -> RulesSnapshot {
    let mut rules = RulesSnapshot::new()
        .with_weapon("longbow", EquippedWeapon::new("Longbow", Weapon::ranged(3, 8)))
        .with_weapon("mace", EquippedWeapon::new("Mace", Weapon::melee()))
        .with_armor("leather", EquippedArmor::new("Leather Jerkin", 2));

    for direction in MoveDirection::ALL {
        rules = rules.with_choice(Choice::movement(direction));
    }
    rules
        .with_choice(Choice::attack(
            "combat_attack_melee",
            "Strike",
            AttackCategory::Melee,
        ))
        .with_choice(Choice::attack(
            "combat_attack_ranged",
            "Shoot",
            AttackCategory::RangedLong,
        ))
        .with_choice(Choice::attack(
            "combat_called_shot",
            "Called Shot",
            AttackCategory::RangedShort,
        ))
        .with_choice(Choice::new("combat_defend", "Defend"))
}

fn skirmish(bandit_at: GridPosition) -> GameSave {
    let hero = ActorId::from("hero");
    let bandit = ActorId::from("bandit");

    GameSave::new(hero.clone())
        .with_actor(
            Actor::new(hero.clone(), "Aldric")
                .with_hit_points(ResourceMeter::full(12))
                .with_weapon("longbow")
                .with_armor("leather"),
        )
        .with_actor(Actor::new(bandit.clone(), "Bandit").with_weapon("mace"))
        .with_combat(CombatSession {
            active: true,
            round: 1,
            participants: vec![hero.clone(), bandit.clone()],
            positions: [(hero.clone(), GridPosition::ORIGIN), (bandit, bandit_at)]
                .into_iter()
                .collect(),
            turn: TurnState::start(hero, 4),
        })
}

fn reason_of(save: &GameSave, id: &str) -> Option<ReasonCode> {
    resolve_for_player(save, &catalog(), &RulesConfig::default())
        .into_iter()
        .find(|entry| entry.choice_id.as_str() == id)
        .and_then(|entry| entry.reason)
}

#[test]
fn one_entry_per_engine_choice_in_order() {
    let save = skirmish(GridPosition::new(3, 1));
    let oracle = catalog();
    let legality = resolve_for_player(&save, &oracle, &RulesConfig::default());

    let expected: Vec<_> = oracle
        .available_choices(&save)
        .into_iter()
        .map(|choice| choice.id)
        .collect();
    let actual: Vec<_> = legality.into_iter().map(|entry| entry.choice_id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn context_measures_distance_to_opponent() {
    let save = skirmish(GridPosition::new(3, 1));
    let ctx = LegalityContext::for_player(&save, &catalog(), &RulesConfig::default());
    assert_eq!(ctx.distance, Some(3));
    assert!(ctx.player_turn);
    assert_eq!(ctx.weapon, Some(Weapon::ranged(3, 8)));
}

#[test]
fn bow_at_five_tiles_shoots_but_cannot_strike() {
    let save = skirmish(GridPosition::new(5, -2));
    assert_eq!(reason_of(&save, "combat_attack_ranged"), None);
    assert_eq!(reason_of(&save, "combat_called_shot"), None);
    assert_eq!(
        reason_of(&save, "combat_attack_melee"),
        Some(ReasonCode::RequiresMeleeRange)
    );
}

#[test]
fn bow_beyond_long_band_is_out_of_range() {
    let save = skirmish(GridPosition::new(0, 9));
    assert_eq!(
        reason_of(&save, "combat_attack_ranged"),
        Some(ReasonCode::OutOfRange)
    );
}

#[test]
fn missing_weapon_record_means_unarmed() {
    let mut save = skirmish(GridPosition::new(4, 0));
    if let Some(hero) = save.actors_by_id.get_mut(&ActorId::from("hero")) {
        hero.weapon = Some("lost_bow".into());
    }
    assert_eq!(
        reason_of(&save, "combat_attack_ranged"),
        Some(ReasonCode::RequiresRangedWeapon)
    );
}

#[test]
fn missing_positions_block_range_gated_choices() {
    let mut save = skirmish(GridPosition::new(1, 1));
    if let Some(combat) = save.runtime.combat.as_mut() {
        combat.positions.clear();
    }

    let ctx = LegalityContext::for_player(&save, &catalog(), &RulesConfig::default());
    assert_eq!(ctx.distance, None);
    assert_eq!(
        reason_of(&save, "combat_attack_melee"),
        Some(ReasonCode::RequiresMeleeRange)
    );
    assert_eq!(
        reason_of(&save, "combat_called_shot"),
        Some(ReasonCode::OutOfRange)
    );
    assert_eq!(reason_of(&save, "combat_move_e"), None);
}

#[test]
fn opponents_turn_reports_not_your_turn_only() {
    let mut save = skirmish(GridPosition::new(1, 0));
    if let Some(combat) = save.runtime.combat.as_mut() {
        combat.turn = TurnState::start("bandit".into(), 0);
        combat.turn.has_attacked = true;
        combat.turn.action_available = false;
    }

    let legality = resolve_for_player(&save, &catalog(), &RulesConfig::default());
    assert!(
        legality
            .iter()
            .all(|entry| entry.reason == Some(ReasonCode::NotYourTurn))
    );
}

#[test]
fn inactive_combat_blocks_combat_choices() {
    let mut save = skirmish(GridPosition::new(1, 0));
    if let Some(combat) = save.runtime.combat.as_mut() {
        combat.active = false;
    }
    let oracle = catalog().with_choice(Choice::new("camp_rest", "Rest"));

    let legality = resolve_for_player(&save, &oracle, &RulesConfig::default());
    let (rest, combat): (Vec<_>, Vec<_>) = legality
        .into_iter()
        .partition(|entry| entry.choice_id.as_str() == "camp_rest");
    assert!(rest[0].available);
    assert!(
        combat
            .iter()
            .all(|entry| entry.reason == Some(ReasonCode::NotYourTurn))
    );
}

#[test]
fn derivation_is_pure_and_idempotent() {
    let save = skirmish(GridPosition::new(2, 2));
    let before = save.clone();
    let oracle = catalog();
    let rules = RulesConfig::default();

    let first = resolve_for_player(&save, &oracle, &rules);
    let second = resolve_for_player(&save, &oracle, &rules);
    assert_eq!(first, second);
    assert_eq!(save, before, "derivation must not touch the save");

    let ctx = LegalityContext::for_player(&save, &oracle, &rules);
    let choices = oracle.available_choices(&save);
    assert_eq!(resolve(&choices, &ctx), first);
}

#[test]
fn last_check_tags_break_down_by_namespace() {
    let save = skirmish(GridPosition::new(1, 0)).with_last_check(CheckRecord::new(
        "combat_attack_melee",
        [
            "att:calc:skill=45",
            "def:calc:skill=30",
            "calc:target=45",
            "combat:attackRoll=14",
            "combat:hit",
            "engine:v2",
        ],
    ));

    let check = save.runtime.last_check.as_ref().expect("check recorded");
    let breakdown = parse_tags(&check.tags);
    assert_eq!(breakdown.value(TagNamespace::AttCalc, "skill"), Some("45"));
    assert_eq!(breakdown.value(TagNamespace::DefCalc, "skill"), Some("30"));
    assert_eq!(breakdown.value(TagNamespace::Calc, "target"), Some("45"));
    assert_eq!(breakdown.value(TagNamespace::Combat, "hit"), Some("1"));
    assert_eq!(breakdown.dropped(), 1);
    assert_eq!(breakdown.raw().len(), 6);
}
