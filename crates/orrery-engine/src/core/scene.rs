use glam::Vec3;
use crate::api::types::BodyId;
use crate::components::body::{Body, BodyKind};

/// Simple body storage using a flat Vec.
/// Bodies are spawned once at startup and live for the whole run.
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(32),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Get a reference to a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by ID.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Find a body by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Iterate over all bodies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Iterate over bodies of one kind.
    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    /// Iterate over bodies of one kind mutably.
    pub fn of_kind_mut(&mut self, kind: BodyKind) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut().filter(move |b| b.kind == kind)
    }

    /// Bodies the picker tests, with positions resolved to world space.
    pub fn pickable(&self) -> impl Iterator<Item = (&Body, Vec3)> + '_ {
        self.bodies
            .iter()
            .filter(|b| b.is_pickable())
            .map(move |b| (b, self.world_position(b)))
    }

    /// World-space position: a body's own position plus its parent's, one level deep.
    pub fn world_position(&self, body: &Body) -> Vec3 {
        match body.parent.and_then(|id| self.get(id)) {
            Some(parent) => parent.position + body.position,
            None => body.position,
        }
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = BodyId(1);
        scene.spawn(Body::new(id, BodyKind::Planet).with_position(Vec3::new(10.0, 0.0, 2.0)));
        let b = scene.get(id).unwrap();
        assert_eq!(b.position, Vec3::new(10.0, 0.0, 2.0));
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1), BodyKind::Sun).with_name("Sun"));
        scene.spawn(Body::new(BodyId(2), BodyKind::Planet).with_name("Earth"));
        let earth = scene.find_by_name("Earth").unwrap();
        assert_eq!(earth.id, BodyId(2));
        assert!(scene.find_by_name("Pluto").is_none());
    }

    #[test]
    fn of_kind_filters() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1), BodyKind::Sun));
        scene.spawn(Body::new(BodyId(2), BodyKind::Planet));
        scene.spawn(Body::new(BodyId(3), BodyKind::Planet));
        scene.spawn(Body::new(BodyId(4), BodyKind::Backdrop));
        assert_eq!(scene.of_kind(BodyKind::Planet).count(), 2);
        assert_eq!(scene.pickable().count(), 2);
    }

    #[test]
    fn child_follows_parent() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1), BodyKind::Planet).with_position(Vec3::new(25.0, 0.0, 0.0)));
        scene.spawn(Body::new(BodyId(2), BodyKind::Ring).with_parent(BodyId(1)));

        scene.get_mut(BodyId(1)).unwrap().position = Vec3::new(0.0, 0.0, 25.0);
        let ring = scene.get(BodyId(2)).unwrap();
        assert_eq!(scene.world_position(ring), Vec3::new(0.0, 0.0, 25.0));
    }
}
