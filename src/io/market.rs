//! Market access.
//!
//! The controller only checks that the hero stands on a nexus cell. What
//! happens inside the market (buying, selling) is up to the service.

use crate::entities::Hero;

/// Trading post reachable from nexus cells.
pub trait MarketService {
    /// Let `hero` trade. May change its gold and inventory.
    fn enter_market(&mut self, hero: &mut Hero);
}

/// A market that sells nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedMarket;

impl MarketService for ClosedMarket {
    fn enter_market(&mut self, hero: &mut Hero) {
        log::debug!("{} found the market closed", hero.name);
    }
}

impl<F: FnMut(&mut Hero)> MarketService for F {
    fn enter_market(&mut self, hero: &mut Hero) {
        self(hero);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Lane;
    use crate::core::HeroId;
    use crate::entities::{HeroClass, HeroTemplate, Weapon};

    #[test]
    fn test_closure_market() {
        let template = HeroTemplate::new("Sehanine_Moonbow", HeroClass::Paladin).with_gold(1000.0);
        let mut hero = Hero::from_template(HeroId(0), &template, Lane::new(0));

        let mut market = |hero: &mut Hero| {
            hero.gold -= 500.0;
            hero.inventory.weapons.push(Weapon::new("Bow", 500.0));
        };
        market.enter_market(&mut hero);

        assert!((hero.gold - 500.0).abs() < 1e-9);
        assert_eq!(hero.inventory.weapons.len(), 1);

        ClosedMarket.enter_market(&mut hero);
        assert_eq!(hero.inventory.weapons.len(), 1);
    }
}
