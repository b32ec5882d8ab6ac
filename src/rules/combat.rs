//! Attack resolution between heroes and monsters.
//!
//! ## Hero attack
//!
//! ```text
//! raw    = (strength + weapon damage) * attack_scale
//! dodged = roll(monster dodge chance)
//! dealt  = max(0, raw - defense * defense_scale)
//! ```
//!
//! A monster brought to zero HP leaves the board immediately and the attacker
//! earns `gold_per_level * level` gold and `xp_per_level * level` experience.
//!
//! ## Monster attack (`Ruleset::Siege` only)
//!
//! ```text
//! raw    = base damage * monster_attack_scale
//! dodged = roll(min(1, agility * hero_dodge_scale))
//! dealt  = max(0, raw - armor * defense_scale)
//! ```
//!
//! Range is Chebyshev distance 1, own cell included.

use smallvec::SmallVec;

use crate::core::{ActionError, EngineError, HeroId, MonsterId, RuleViolation};
use crate::entities::{Hero, Skill};
use crate::game::{Combatant, GameEvent, GameState};

/// Loot for a defeated monster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reward {
    /// Gold granted.
    pub gold: f64,
    /// Experience granted.
    pub experience: u32,
    /// Levels the attacker gained from the experience.
    pub levels_gained: u32,
}

/// How an attack went.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttackOutcome {
    /// The defender dodged; nothing changed.
    Dodged,
    /// The attack landed.
    Hit {
        /// HP removed.
        damage: f64,
        /// Present if a hero defeated a monster with this hit.
        reward: Option<Reward>,
        /// True if this hit made a hero faint.
        fainted: bool,
    },
}

/// Raw damage after defense, never negative.
#[must_use]
pub fn mitigated_damage(raw: f64, defense: f64, defense_scale: f64) -> f64 {
    (raw - defense * defense_scale).max(0.0)
}

/// Skill value with the terrain bonus applied when the ruleset allows it.
fn hero_skill(state: &GameState, hero: &Hero, skill: Skill) -> f64 {
    if !state.config.ruleset.terrain_bonus_applies() {
        return hero.stats.skill(skill);
    }
    let boosted = state.board.terrain(hero.position()).and_then(|t| t.boost());
    hero.effective_skill(skill, boosted, state.config.terrain_bonus)
}

/// Damage a hero deals before defense.
#[must_use]
pub fn hero_raw_damage(state: &GameState, hero: &Hero) -> f64 {
    (hero_skill(state, hero, Skill::Strength) + hero.weapon_damage()) * state.config.attack_scale
}

/// Probability that a hero dodges a monster attack.
#[must_use]
pub fn hero_dodge_chance(state: &GameState, hero: &Hero) -> f64 {
    (hero_skill(state, hero, Skill::Agility) * state.config.hero_dodge_scale).min(1.0)
}

/// Monsters within reach of a hero, in scan order.
pub fn monsters_in_range(
    state: &GameState,
    hero: HeroId,
) -> Result<SmallVec<[MonsterId; 9]>, EngineError> {
    let pos = state.hero(hero)?.position();
    Ok(pos
        .neighborhood()
        .filter_map(|p| state.board.monster_at(p))
        .collect())
}

/// Living heroes within reach of a monster, in scan order.
pub fn heroes_in_range(
    state: &GameState,
    monster: MonsterId,
) -> Result<SmallVec<[HeroId; 9]>, EngineError> {
    let pos = state.monster(monster)?.position();
    Ok(pos
        .neighborhood()
        .filter_map(|p| state.board.hero_at(p))
        .filter(|&id| state.hero(id).is_ok_and(|h| !h.is_fainted()))
        .collect())
}

/// Resolve a hero attacking a monster.
pub fn hero_attack(
    state: &mut GameState,
    hero: HeroId,
    target: MonsterId,
) -> Result<AttackOutcome, ActionError> {
    if state.roster.monster(target).is_none() {
        return Err(RuleViolation::InvalidTarget.into());
    }
    if !monsters_in_range(state, hero)?.contains(&target) {
        return Err(RuleViolation::NoTargetInRange.into());
    }

    let attacker = Combatant::Hero(hero);
    let defender = Combatant::Monster(target);

    let dodge = state.monster(target)?.dodge_chance;
    if state.combat_rng.roll(dodge) {
        state.emit(GameEvent::AttackDodged { attacker, defender });
        log::debug!("{target} dodged {hero}");
        return Ok(AttackOutcome::Dodged);
    }

    let raw = hero_raw_damage(state, state.hero(hero)?);
    let monster = state.roster.try_monster_mut(target)?;
    let damage = mitigated_damage(raw, monster.defense, state.config.defense_scale);
    let defeated = monster.take_damage(damage);
    state.emit(GameEvent::DamageDealt {
        attacker,
        defender,
        amount: damage,
    });

    let reward = if defeated {
        Some(defeat_monster(state, hero, target)?)
    } else {
        None
    };

    Ok(AttackOutcome::Hit {
        damage,
        reward,
        fainted: false,
    })
}

/// Remove a defeated monster and pay the attacker.
fn defeat_monster(
    state: &mut GameState,
    hero: HeroId,
    monster: MonsterId,
) -> Result<Reward, EngineError> {
    let removed = state.remove_monster(monster)?;
    let level = removed.level;
    let gold = state.config.gold_per_level * f64::from(level);
    let experience = state.config.xp_per_level * level;

    let attacker = state.roster.try_hero_mut(hero)?;
    attacker.add_gold(gold);
    let levels_gained = attacker.gain_experience(experience);
    let new_level = attacker.stats.level;

    state.emit(GameEvent::MonsterDefeated {
        monster,
        by: hero,
        gold,
        experience,
    });
    log::info!("{hero} defeated {} ({monster}), +{gold:.0} gold +{experience} xp", removed.name);

    for offset in (0..levels_gained).rev() {
        state.emit(GameEvent::LevelUp {
            hero,
            level: new_level - offset,
        });
    }
    if levels_gained > 0 {
        log::info!("{hero} reached level {new_level}");
    }

    Ok(Reward {
        gold,
        experience,
        levels_gained,
    })
}

/// Resolve a monster attacking a hero.
pub fn monster_attack(
    state: &mut GameState,
    monster: MonsterId,
    target: HeroId,
) -> Result<AttackOutcome, EngineError> {
    let attacker = Combatant::Monster(monster);
    let defender = Combatant::Hero(target);

    let dodge = hero_dodge_chance(state, state.hero(target)?);
    if state.combat_rng.roll(dodge) {
        state.emit(GameEvent::AttackDodged { attacker, defender });
        return Ok(AttackOutcome::Dodged);
    }

    let raw = state.monster(monster)?.base_damage * state.config.monster_attack_scale;
    let hero = state.roster.try_hero_mut(target)?;
    let damage = mitigated_damage(raw, hero.armor_reduction(), state.config.defense_scale);
    let fainted = hero.take_damage(damage);
    state.emit(GameEvent::DamageDealt {
        attacker,
        defender,
        amount: damage,
    });

    if fainted {
        state.emit(GameEvent::HeroFainted {
            hero: target,
            by: monster,
        });
        log::info!("{target} fainted");
    }

    Ok(AttackOutcome::Hit {
        damage,
        reward: None,
        fainted,
    })
}
