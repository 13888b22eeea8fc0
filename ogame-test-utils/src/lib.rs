pub mod constant;
pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{test_timestamp, TEST_SERVER_ID, TEST_TIMESTAMP, TEST_USER_AGENT},
        fixtures::factory,
        TestSetup,
    };
}
