//! Hero and monster template loading.
//!
//! ## Table format
//!
//! Whitespace-separated columns, one entry per line, a header line first.
//! Blank lines are ignored.
//!
//! ```text
//! Name/mana/strength/agility/dexterity/starting money/starting experience
//! Gaerdal_Ironhand  100  700  500  600  1354  7
//! ```
//!
//! ```text
//! Name/level/damage/defense/dodge chance
//! Natsunomeryu  1  100  200  10
//! ```
//!
//! Monster dodge chance is given in percent.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::AssetError;
use crate::entities::{HeroClass, HeroTemplate, MonsterCatalog, MonsterKind, MonsterTemplate};

/// Source of template data.
pub trait AssetLoader {
    /// Recruitable heroes of one class.
    fn load_heroes(&self, class: HeroClass) -> Result<Vec<HeroTemplate>, AssetError>;

    /// Monsters of one family.
    fn load_monsters(&self, kind: MonsterKind) -> Result<Vec<MonsterTemplate>, AssetError>;

    /// Every monster of every family.
    fn load_catalog(&self) -> Result<MonsterCatalog, AssetError> {
        let mut catalog = MonsterCatalog::new();
        for kind in [MonsterKind::Dragon, MonsterKind::Exoskeleton, MonsterKind::Spirit] {
            catalog.extend(self.load_monsters(kind)?);
        }
        Ok(catalog)
    }
}

/// Loads tables from a directory holding `Warriors.txt`, `Sorcerers.txt`,
/// `Paladins.txt`, `Dragons.txt`, `Exoskeletons.txt` and `Spirits.txt`.
#[derive(Clone, Debug)]
pub struct TableLoader {
    root: PathBuf,
}

impl TableLoader {
    /// Read tables from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, file: &str) -> Result<String, AssetError> {
        let path = self.root.join(file);
        std::fs::read_to_string(&path).map_err(|source| AssetError::Io { path, source })
    }

    /// Directory the tables are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLoader for TableLoader {
    fn load_heroes(&self, class: HeroClass) -> Result<Vec<HeroTemplate>, AssetError> {
        let file = match class {
            HeroClass::Warrior => "Warriors.txt",
            HeroClass::Sorcerer => "Sorcerers.txt",
            HeroClass::Paladin => "Paladins.txt",
        };
        parse_hero_table(&self.read(file)?, class)
    }

    fn load_monsters(&self, kind: MonsterKind) -> Result<Vec<MonsterTemplate>, AssetError> {
        let file = match kind {
            MonsterKind::Dragon => "Dragons.txt",
            MonsterKind::Exoskeleton => "Exoskeletons.txt",
            MonsterKind::Spirit => "Spirits.txt",
        };
        parse_monster_table(&self.read(file)?, kind)
    }
}

/// Data lines with their 1-based line numbers, header skipped.
fn rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1)
        .map(|(i, line)| (i + 1, line.split_whitespace().collect()))
}

fn field<T: FromStr>(cols: &[&str], index: usize, line: usize, name: &str) -> Result<T, AssetError> {
    let raw = cols.get(index).ok_or_else(|| AssetError::Malformed {
        line,
        reason: format!("missing {name}"),
    })?;
    raw.parse().map_err(|_| AssetError::Malformed {
        line,
        reason: format!("{name} {raw:?} is not a number"),
    })
}

/// Parse a hero table.
pub fn parse_hero_table(text: &str, class: HeroClass) -> Result<Vec<HeroTemplate>, AssetError> {
    let heroes = rows(text)
        .map(|(line, cols)| {
            let name = cols[0];
            let mana: f64 = field(&cols, 1, line, "mana")?;
            let strength: f64 = field(&cols, 2, line, "strength")?;
            let agility: f64 = field(&cols, 3, line, "agility")?;
            let dexterity: f64 = field(&cols, 4, line, "dexterity")?;
            let gold: f64 = field(&cols, 5, line, "gold")?;
            let experience: u32 = field(&cols, 6, line, "experience")?;

            let mut template = HeroTemplate::new(name, class)
                .with_mana(mana)
                .with_skills(strength, agility, dexterity)
                .with_gold(gold);
            template.experience = experience;
            Ok(template)
        })
        .collect::<Result<Vec<_>, AssetError>>()?;

    if heroes.is_empty() {
        return Err(AssetError::Empty);
    }
    Ok(heroes)
}

/// Parse a monster table.
pub fn parse_monster_table(text: &str, kind: MonsterKind) -> Result<Vec<MonsterTemplate>, AssetError> {
    let monsters = rows(text)
        .map(|(line, cols)| {
            let name = cols[0];
            let level: u32 = field(&cols, 1, line, "level")?;
            let damage: f64 = field(&cols, 2, line, "damage")?;
            let defense: f64 = field(&cols, 3, line, "defense")?;
            let dodge: f64 = field(&cols, 4, line, "dodge chance")?;

            Ok(MonsterTemplate::new(name, kind, level).with_combat(damage, defense, dodge / 100.0))
        })
        .collect::<Result<Vec<_>, AssetError>>()?;

    if monsters.is_empty() {
        return Err(AssetError::Empty);
    }
    Ok(monsters)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARRIORS: &str = "\
Name/mana/strength/agility/dexterity/starting money/starting experience
Gaerdal_Ironhand    100   700   500   600   1354   7
Sehanine_Monnbow    600   700   800   500   2500   8

";

    const SPIRITS: &str = "\
Name/level/damage/defense/dodge chance
Andrealphus   2   600   500   40
Aim-Haborym   1   450   350   35
";

    #[test]
    fn test_parse_heroes() {
        let heroes = parse_hero_table(WARRIORS, HeroClass::Warrior).unwrap();
        assert_eq!(heroes.len(), 2);

        let first = &heroes[0];
        assert_eq!(first.name, "Gaerdal_Ironhand");
        assert_eq!(first.class, HeroClass::Warrior);
        assert!((first.mana - 100.0).abs() < 1e-9);
        assert!((first.strength - 700.0).abs() < 1e-9);
        assert!((first.agility - 500.0).abs() < 1e-9);
        assert!((first.dexterity - 600.0).abs() < 1e-9);
        assert!((first.gold - 1354.0).abs() < 1e-9);
        assert_eq!(first.experience, 7);
    }

    #[test]
    fn test_parse_monsters_dodge_percent() {
        let monsters = parse_monster_table(SPIRITS, MonsterKind::Spirit).unwrap();
        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].level, 2);
        assert!((monsters[0].dodge_chance - 0.4).abs() < 1e-9);
        assert!((monsters[1].base_damage - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_line_number() {
        let text = "Name/level/damage/defense/dodge\nOk 1 2 3 4\nBad 1 two 3 4\n";
        let err = parse_monster_table(text, MonsterKind::Dragon).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { line: 3, .. }));

        let text = "Name/level/damage/defense/dodge\nShort 1 2\n";
        let err = parse_monster_table(text, MonsterKind::Dragon).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = parse_hero_table("Name/mana\n\n", HeroClass::Paladin).unwrap_err();
        assert!(matches!(err, AssetError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let loader = TableLoader::new("/nonexistent/lane-valor-assets");
        let err = loader.load_catalog().unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
