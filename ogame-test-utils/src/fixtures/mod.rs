use crate::TestSetup;

pub mod factory;
pub mod mockito;
pub mod xml;

pub struct OgameFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
