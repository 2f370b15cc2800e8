//! Host-registered custom pattern procedures.
//!
//! Custom patterns are plain Rust strategies registered by name:
//! - Implement [`CustomProcedure`] or wrap a closure in [`FnProcedure`].
//! - Register instances with [`CustomPatternRegistry`].
//! - Select one with the `function` parameter of the `custom` method.
//!
//! Whatever a procedure does wrong (an error, a panic, malformed points) stays inside
//! [`CustomPattern::generate`]: it logs and returns the points it could validate.
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use glam::DVec2;
use rand::RngCore;
use tracing::warn;

use crate::error::Result;
use crate::pattern::{ElementPosition, PatternGenerator, PatternInput};
use crate::render::color::Color;

/// Size used when a point does not carry a usable one.
pub const DEFAULT_CUSTOM_SIZE: f64 = 8.0;

/// A point returned by a custom procedure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomPoint {
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
}

impl CustomPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, size: None }
    }

    pub fn sized(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size: Some(size),
        }
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn size_or_default(&self) -> f64 {
        match self.size {
            Some(s) if s.is_finite() && s > 0.0 => s,
            _ => DEFAULT_CUSTOM_SIZE,
        }
    }
}

/// A pure function from `(width, height, count, color)` to a list of points.
pub trait CustomProcedure: Send + Sync {
    fn points(&self, width: f64, height: f64, count: usize, color: Color)
        -> Result<Vec<CustomPoint>>;
}

/// Adapter turning a closure into a [`CustomProcedure`].
pub struct FnProcedure<F>(pub F);

impl<F> CustomProcedure for FnProcedure<F>
where
    F: Fn(f64, f64, usize, Color) -> Result<Vec<CustomPoint>> + Send + Sync,
{
    fn points(
        &self,
        width: f64,
        height: f64,
        count: usize,
        color: Color,
    ) -> Result<Vec<CustomPoint>> {
        (self.0)(width, height, count, color)
    }
}

/// Registry for storing custom procedures by unique name.
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct CustomPatternRegistry {
    procedures: HashMap<String, Arc<dyn CustomProcedure>>,
}

impl CustomPatternRegistry {
    /// Creates a new, empty [`CustomPatternRegistry`].
    pub fn new() -> Self {
        Self {
            procedures: HashMap::new(),
        }
    }

    /// Returns the number of registered procedures.
    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    /// Registers a procedure under `name`, replacing any previous one.
    pub fn register<P>(&mut self, name: impl Into<String>, procedure: P)
    where
        P: CustomProcedure + 'static,
    {
        self.procedures.insert(name.into(), Arc::new(procedure));
    }

    /// Registers a closure under `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(f64, f64, usize, Color) -> Result<Vec<CustomPoint>> + Send + Sync + 'static,
    {
        self.register(name, FnProcedure(f));
    }

    /// Unregisters a procedure. Returns `true` if it was present.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.procedures.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.procedures.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CustomProcedure>> {
        self.procedures.get(name).cloned()
    }

    /// Builds a generator for `name`. Unknown names produce a generator that yields nothing.
    pub fn pattern(&self, name: &str) -> CustomPattern {
        CustomPattern {
            name: name.to_owned(),
            procedure: self.get(name),
        }
    }
}

/// Generator that runs a registered procedure and validates its output.
#[derive(Clone)]
pub struct CustomPattern {
    pub name: String,
    procedure: Option<Arc<dyn CustomProcedure>>,
}

impl CustomPattern {
    pub fn new(name: impl Into<String>, procedure: Arc<dyn CustomProcedure>) -> Self {
        Self {
            name: name.into(),
            procedure: Some(procedure),
        }
    }

    fn run(&self, input: &PatternInput) -> Option<Vec<CustomPoint>> {
        let Some(procedure) = &self.procedure else {
            warn!("Unknown custom pattern '{}'; drawing nothing.", self.name);
            return None;
        };

        let call = AssertUnwindSafe(|| {
            procedure.points(input.width(), input.height(), input.count, input.color)
        });
        match panic::catch_unwind(call) {
            Ok(Ok(points)) => Some(points),
            Ok(Err(e)) => {
                warn!("Error in custom pattern '{}': {}.", self.name, e);
                None
            }
            Err(_) => {
                warn!("Custom pattern '{}' panicked; drawing nothing.", self.name);
                None
            }
        }
    }
}

impl std::fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomPattern")
            .field("name", &self.name)
            .field("registered", &self.procedure.is_some())
            .finish()
    }
}

impl PatternGenerator for CustomPattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        if input.count == 0 || input.is_degenerate() {
            return Vec::new();
        }
        let Some(points) = self.run(input) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(points.len());
        let mut skipped = 0usize;
        for (i, p) in points.iter().enumerate() {
            if !p.is_valid() {
                skipped += 1;
                continue;
            }
            let end = if input.connects() {
                points
                    .get(i + 1)
                    .filter(|next| next.is_valid())
                    .map(|next| DVec2::new(next.x, next.y))
            } else {
                None
            };
            out.push(ElementPosition::new(p.x, p.y, p.size_or_default()).with_end(end));
        }

        if skipped > 0 {
            warn!(
                "Custom pattern '{}' returned {} malformed point(s); skipped.",
                self.name, skipped
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::pattern::test_support::input;
    use crate::pattern::Shape;

    fn ring(width: f64, height: f64, count: usize, _color: Color) -> Result<Vec<CustomPoint>> {
        let radius = width.min(height) / 3.0;
        Ok((0..count)
            .map(|i| {
                let angle = i as f64 * TAU / count as f64;
                CustomPoint::sized(
                    width / 2.0 + radius * angle.cos(),
                    height / 2.0 + radius * angle.sin(),
                    10.0 + 5.0 * (i as f64 * 0.5).sin(),
                )
            })
            .collect())
    }

    #[test]
    fn registered_procedure_maps_points_in_order() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("ring", ring);
        assert!(registry.contains("ring"));

        let mut rng = StdRng::seed_from_u64(1);
        let out = registry
            .pattern("ring")
            .generate(&input(300.0, 300.0, 6, Shape::Lines), &mut rng);
        assert_eq!(out.len(), 6);
        assert_eq!((out[0].x, out[0].y), (250.0, 150.0));
        assert_eq!(out[0].end, Some(out[1].position()));
        assert!(out[5].end.is_none());
    }

    #[test]
    fn empty_result_is_an_empty_sequence() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("nothing", |_, _, _, _| Ok(Vec::new()));
        let mut rng = StdRng::seed_from_u64(1);
        let out = registry
            .pattern("nothing")
            .generate(&input(300.0, 300.0, 6, Shape::Circles), &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn errors_panics_and_unknown_names_fail_soft() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("fails", |_, _, _, _| {
            Err(Error::CustomPattern {
                name: "fails".into(),
                message: "boom".into(),
            })
        });
        registry.register_fn("panics", |_, _, _, _| panic!("user code exploded"));

        let mut rng = StdRng::seed_from_u64(1);
        let inp = input(300.0, 300.0, 6, Shape::Lines);
        for name in ["fails", "panics", "missing"] {
            assert!(registry.pattern(name).generate(&inp, &mut rng).is_empty());
        }
    }

    #[test]
    fn malformed_points_are_skipped_individually() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("mixed", |_, _, _, _| {
            Ok(vec![
                CustomPoint::new(1.0, 1.0),
                CustomPoint::new(f64::NAN, 2.0),
                CustomPoint::sized(3.0, 3.0, -4.0),
                CustomPoint::sized(4.0, 4.0, 2.0),
            ])
        });

        let mut rng = StdRng::seed_from_u64(1);
        let out = registry
            .pattern("mixed")
            .generate(&input(10.0, 10.0, 4, Shape::Lines), &mut rng);
        assert_eq!(out.len(), 3);
        // The successor of the first point is malformed, so no segment is drawn from it.
        assert!(out[0].end.is_none());
        assert_eq!(out[1].size, DEFAULT_CUSTOM_SIZE);
        assert_eq!(out[1].end, Some(DVec2::new(4.0, 4.0)));
        assert_eq!(out[2].size, 2.0);
    }

    #[test]
    fn degenerate_input_skips_the_procedure() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("ring", ring);
        registry.register_fn("never", |_, _, _, _| panic!("must not be called"));

        let mut rng = StdRng::seed_from_u64(1);
        for inp in [
            input(0.0, 0.0, 5, Shape::Circles),
            input(300.0, f64::INFINITY, 5, Shape::Lines),
            input(300.0, 300.0, 0, Shape::Lines),
        ] {
            assert!(registry.pattern("ring").generate(&inp, &mut rng).is_empty());
            assert!(registry.pattern("never").generate(&inp, &mut rng).is_empty());
        }
    }

    #[test]
    fn unregister_removes_procedures() {
        let mut registry = CustomPatternRegistry::new();
        registry.register_fn("a", |_, _, _, _| Ok(Vec::new()));
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister("a"));
        assert!(!registry.unregister("a"));
        assert!(registry.is_empty());
    }
}
