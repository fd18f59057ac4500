//! Movement domain: ground and wall detection through avian ray casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactDetector, ContactDetectors, ContactProbes, GameLayer};

/// Casts one short ray from each origin; any hit counts as contact.
pub(crate) struct RayProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    center: Vec2,
    offsets: &'a [Vec2],
    direction: Dir2,
    length: f32,
    filter: &'a SpatialQueryFilter,
}

impl ContactDetector for RayProbe<'_, '_, '_> {
    fn detect_contact(&self) -> bool {
        self.offsets.iter().any(|offset| {
            self.spatial_query
                .cast_ray(
                    self.center + *offset,
                    self.direction,
                    self.length,
                    true,
                    self.filter,
                )
                .is_some()
        })
    }
}

/// Filters shared by every hero for one fixed step.
pub(crate) struct ProbeFilters {
    ground: SpatialQueryFilter,
    wall: SpatialQueryFilter,
}

impl ProbeFilters {
    pub(crate) fn new() -> Self {
        Self {
            // Only level geometry; the hero's own collider sits on the Player layer.
            ground: SpatialQueryFilter::from_mask(GameLayer::Ground),
            wall: SpatialQueryFilter::from_mask(GameLayer::Wall),
        }
    }
}

pub(crate) type RayDetectors<'a, 'w, 's> =
    ContactDetectors<RayProbe<'a, 'w, 's>, RayProbe<'a, 'w, 's>, RayProbe<'a, 'w, 's>>;

pub(crate) fn ray_detectors<'a, 'w, 's>(
    spatial_query: &'a SpatialQuery<'w, 's>,
    filters: &'a ProbeFilters,
    probes: &'a ContactProbes,
    center: Vec2,
) -> RayDetectors<'a, 'w, 's> {
    let probe = |offsets: &'a [Vec2], direction: Dir2, filter: &'a SpatialQueryFilter| RayProbe {
        spatial_query,
        center,
        offsets,
        direction,
        length: probes.detection_length,
        filter,
    };

    ContactDetectors {
        ground: probe(probes.ground.as_slice(), Dir2::NEG_Y, &filters.ground),
        left_wall: probe(probes.left_wall.as_slice(), Dir2::NEG_X, &filters.wall),
        right_wall: probe(probes.right_wall.as_slice(), Dir2::X, &filters.wall),
    }
}
