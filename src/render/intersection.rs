use std::ptr;

use crate::math::approx_eq::ApproxEq;

use super::object::Object;

#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    time: f64,
    intersected_object: &'a Object,
}

/// A sphere is always crossed twice, tangent rays give two equal times.
pub type Intersections<'a> = [Intersection<'a>; 2];

impl<'a> Intersection<'a> {
    pub fn new(time: f64, intersected_object: &'a Object) -> Self {
        Self {
            time,
            intersected_object,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Object {
        self.intersected_object
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.time.approx_eq(&other.time) && ptr::eq(self.intersected_object, other.intersected_object)
    }
}

/// Closest intersection in front of the ray origin.
///
/// Times below zero are ignored. When several intersections share the smallest time the first one wins.
pub fn hit<'a>(intersections: impl IntoIterator<Item = Intersection<'a>>) -> Option<Intersection<'a>> {
    intersections
        .into_iter()
        .filter(|inter| inter.time() >= 0.)
        .fold(None, |closest, inter| match closest {
            Some(closest) if closest.time() <= inter.time() => Some(closest),
            _ => Some(inter),
        })
}
