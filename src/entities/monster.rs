//! Monsters: the AI-controlled side.
//!
//! Monsters are created by the spawn wave at the party's current maximum
//! level and removed for good when defeated.

use serde::{Deserialize, Serialize};

use super::template::MonsterTemplate;
use crate::board::{Lane, Position};
use crate::core::MonsterId;

/// HP per monster level.
pub const MONSTER_HP_PER_LEVEL: f64 = 100.0;

/// Monster family. Template data carries the family's strengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// High base damage.
    Dragon,
    /// High defense.
    Exoskeleton,
    /// High dodge chance.
    Spirit,
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MonsterKind::Dragon => "Dragon",
            MonsterKind::Exoskeleton => "Exoskeleton",
            MonsterKind::Spirit => "Spirit",
        };
        f.write_str(name)
    }
}

/// A monster on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Roster identifier.
    pub id: MonsterId,
    /// Display name.
    pub name: String,
    /// Family.
    pub kind: MonsterKind,
    /// Level assigned at spawn.
    pub level: u32,
    /// Current HP.
    pub hp: f64,
    /// Raw damage before scaling.
    pub base_damage: f64,
    /// Defense subtracted (scaled) from incoming damage.
    pub defense: f64,
    /// Probability in `[0, 1]` of dodging an attack.
    pub dodge_chance: f64,

    position: Position,
    lane: Lane,
    fainted: bool,
}

impl Monster {
    /// Instantiate a template at `level` on the lane's spawn cell.
    #[must_use]
    pub fn from_template(id: MonsterId, template: &MonsterTemplate, level: u32, lane: Lane) -> Self {
        let level = level.max(1);
        Self {
            id,
            name: template.name.clone(),
            kind: template.kind,
            level,
            hp: f64::from(level) * MONSTER_HP_PER_LEVEL,
            base_damage: template.base_damage,
            defense: template.defense,
            dodge_chance: template.dodge_chance.clamp(0.0, 1.0),
            position: lane.monster_spawn(),
            lane,
            fainted: false,
        }
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Lane the monster walks down.
    #[must_use]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether the monster has been brought to zero HP.
    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    /// Subtract HP. Returns true if this damage defeated the monster.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        if self.fainted {
            return false;
        }
        self.hp -= amount.max(0.0);
        if self.hp <= 0.0 {
            self.fainted = true;
            return true;
        }
        false
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] Lv{} HP {:.0} DMG {:.0} DEF {:.0} DODGE {:.0}% at {}",
            self.name,
            self.kind,
            self.level,
            self.hp,
            self.base_damage,
            self.defense,
            self.dodge_chance * 100.0,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_template_scales_hp_to_level() {
        let template = MonsterTemplate::new("Natsunomeryu", MonsterKind::Dragon, 1)
            .with_combat(100.0, 200.0, 0.1);
        let monster = Monster::from_template(MonsterId(1), &template, 4, Lane::new(2));

        assert_eq!(monster.level, 4);
        assert!((monster.hp - 400.0).abs() < 1e-9);
        assert_eq!(monster.position(), Position::new(0, 7));
        assert_eq!(monster.lane(), Lane::new(2));
    }

    #[test]
    fn test_defeat_once() {
        let template = MonsterTemplate::new("Blinky", MonsterKind::Spirit, 1);
        let mut monster = Monster::from_template(MonsterId(2), &template, 1, Lane::new(0));

        assert!(!monster.take_damage(99.0));
        assert!(monster.take_damage(1.0));
        assert!(monster.is_fainted());
        assert!(!monster.take_damage(50.0));
    }
}
