//! Read-only state passed to every policy call.

use fg_core::{Day, ResourceId};
use fg_resource::ResourceCatalog;

/// A read-only snapshot shared by every [`ActivityPolicy`][crate::ActivityPolicy]
/// call during one day's activation pass.
pub struct PolicyContext<'a> {
    /// Day being simulated.
    pub day: Day,

    /// Definitions of every resource type.
    pub catalog: &'a ResourceCatalog,

    /// Activities an agent may choose from, in configuration order.
    ///
    /// Each entry names a resource in `catalog`.
    pub activities: &'a [ResourceId],
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(day: Day, catalog: &'a ResourceCatalog, activities: &'a [ResourceId]) -> Self {
        Self { day, catalog, activities }
    }
}
