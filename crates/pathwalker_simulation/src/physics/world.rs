//! Статическая геометрия мира для headless режима
//!
//! Host engine в игре отвечает за коллизии сам. Здесь замена на Rapier
//! shapes: `Collider` + `CollisionGroups` без physics pipeline (ничего не
//! симулируем, только spatial queries по статике).

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, CollisionGroups, Group};

/// Layer 1: walkable поверхности (пол, платформы, склоны)
pub const LAYER_GROUND: Group = Group::GROUP_1;

/// Layer 2: препятствия (стены, ящики): не считаются землёй
pub const LAYER_OBSTACLE: Group = Group::GROUP_2;

/// Допуск на float погрешность при посадке на поверхность
const SURFACE_SKIN: f32 = 1e-3;

/// Маска из конфига (u32 bits) → Rapier group
pub fn layer_mask(bits: u32) -> Group {
    Group::from_bits_truncate(bits)
}

/// Query groups для probe/mover: видим только коллайдеры из `mask`
fn query_groups(mask: Group) -> CollisionGroups {
    CollisionGroups::new(Group::ALL, mask)
}

/// Статический коллайдер: Rapier shape + поза + collision groups
#[derive(Clone)]
pub struct StaticCollider {
    pub shape: Collider,
    pub translation: Vec3,
    pub rotation: Quat,
    pub groups: CollisionGroups,
}

impl StaticCollider {
    /// Коллайдер на слоях `layers`, фильтр: все слои
    pub fn new(shape: Collider, translation: Vec3, layers: Group) -> Self {
        Self {
            shape,
            translation,
            rotation: Quat::IDENTITY,
            groups: CollisionGroups::new(layers, Group::ALL),
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rapier правило: memberships одной стороны ∩ filters другой, в обе стороны
    fn accepts(&self, query: CollisionGroups) -> bool {
        self.groups.memberships.intersects(query.filters)
            && query.memberships.intersects(self.groups.filters)
    }

    fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        let projection = self
            .shape
            .project_point(self.translation, self.rotation, center, true);
        projection.is_inside || projection.point.distance_squared(center) <= radius * radius
    }

    /// Расстояние до поверхности вниз от `origin` (не дальше `max_distance`)
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        self.shape.cast_ray(
            self.translation,
            self.rotation,
            origin,
            Vec3::NEG_Y,
            max_distance,
            true,
        )
    }
}

/// Spatial overlap probe (sphere vs layer mask)
pub trait GroundProbe {
    fn check_sphere(&self, center: Vec3, radius: f32, mask: Group) -> bool;
}

/// Collision-aware "move by delta"
///
/// Возвращает итоговую позицию после разрешения против геометрии.
pub trait KinematicMover {
    fn move_by(&self, position: Vec3, delta: Vec3, mask: Group) -> Vec3;
}

/// Resource: вся статическая геометрия сцены
#[derive(Resource, Clone, Default)]
pub struct StaticWorld {
    colliders: Vec<StaticCollider>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Плоский пол толщиной 1m с верхней гранью на `height`
    pub fn with_ground_plane(height: f32, half_size: f32) -> Self {
        let mut world = Self::new();
        world.add(StaticCollider::new(
            Collider::cuboid(half_size, 0.5, half_size),
            Vec3::new(0.0, height - 0.5, 0.0),
            LAYER_GROUND,
        ));
        world
    }

    pub fn add(&mut self, collider: StaticCollider) -> &mut Self {
        self.colliders.push(collider);
        self
    }
}

impl GroundProbe for StaticWorld {
    fn check_sphere(&self, center: Vec3, radius: f32, mask: Group) -> bool {
        if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
            return false;
        }

        let query = query_groups(mask);
        self.colliders
            .iter()
            .filter(|c| c.accepts(query))
            .any(|c| c.overlaps_sphere(center, radius))
    }
}

impl KinematicMover for StaticWorld {
    /// Разрешаем только падение: ray вниз из точки чуть выше старой позиции,
    /// ближайшая поверхность под целевым XZ останавливает движение.
    /// Горизонталь и подъём проходят без изменений.
    fn move_by(&self, position: Vec3, delta: Vec3, mask: Group) -> Vec3 {
        if !position.is_finite() || !delta.is_finite() {
            return position;
        }

        let mut target = position + delta;
        if delta.y >= 0.0 {
            return target;
        }

        let origin = Vec3::new(target.x, position.y + SURFACE_SKIN, target.z);
        let max_distance = SURFACE_SKIN - delta.y;
        let query = query_groups(mask);

        // toi == 0: origin внутри коллайдера (уже под поверхностью), его пропускаем
        let nearest = self
            .colliders
            .iter()
            .filter(|c| c.accepts(query))
            .filter_map(|c| c.cast_down(origin, max_distance))
            .filter(|&toi| toi > 0.0)
            .fold(None, |best: Option<f32>, toi| Some(best.map_or(toi, |b| b.min(toi))));

        if let Some(toi) = nearest {
            target.y = origin.y - toi;
        }

        target
    }
}
