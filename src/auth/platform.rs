use oso::PolarClass;
use serde::{Deserialize, Serialize};

/// The service as a whole, as an authorization resource. Booking rules are
/// platform-wide; no record is owned by an individual user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Platform;

impl PolarClass for Platform {
    fn get_polar_class_builder() -> oso::ClassBuilder<Platform> {
        oso::Class::builder().name("Platform")
    }

    fn get_polar_class() -> oso::Class {
        let builder = Platform::get_polar_class_builder();
        builder.build()
    }
}
