//! Default instance source backed by proptest strategies
//!
//! Each registered type maps to a strategy; creating a specimen draws a
//! fresh value tree from a shared [`TestRunner`] and takes its current
//! value. No shrinking happens here, the specimen is simply an arbitrary
//! valid value.

use crate::config::FixtureSettings;
use crate::domain::{GenerationError, InstanceSource, Specimen, TypeDescriptor};
use parking_lot::Mutex;
use proptest::arbitrary::{any, Arbitrary};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

/// What the fixture hands out for a plain object parameter
///
/// Every instance is equal only to itself.
#[derive(Debug, PartialEq)]
pub struct AnonymousObject(u64);

type SpecimenFactory =
    Box<dyn Fn(&mut TestRunner) -> Result<Box<dyn Specimen>, GenerationError> + Send + Sync>;

/// Creates anonymous instances of registered types
pub struct Fixture {
    factories: HashMap<TypeId, SpecimenFactory>,
    runner: Mutex<TestRunner>,
}

impl Fixture {
    /// A randomly seeded fixture that knows the primitive types
    pub fn new() -> Self {
        Self::from_settings(&FixtureSettings::default())
    }

    /// A fixture with primitives registered, seeded from `settings`
    pub fn from_settings(settings: &FixtureSettings) -> Self {
        let mut fixture = Self::empty(settings);
        fixture.register_primitives();
        fixture
    }

    /// Shorthand for a deterministic fixture
    pub fn with_seed(seed: u64) -> Self {
        Self::from_settings(&FixtureSettings {
            seed: Some(seed),
            ..FixtureSettings::default()
        })
    }

    /// A fixture with no registrations at all
    pub fn empty(settings: &FixtureSettings) -> Self {
        let mut config = Config::default();
        config.max_local_rejects = settings.max_local_rejects;

        let runner = match settings.seed {
            Some(seed) => {
                let mut seed_bytes = [0u8; 32];
                seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
                TestRunner::new_with_rng(
                    config,
                    TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes),
                )
            }
            None => TestRunner::new(config),
        };

        Self {
            factories: HashMap::new(),
            runner: Mutex::new(runner),
        }
    }

    /// Register `T` using its `Arbitrary` strategy
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Arbitrary + Specimen,
        T::Strategy: Send + Sync + 'static,
    {
        self.register_strategy(any::<T>())
    }

    /// Register `T` using a custom strategy, replacing any earlier one
    pub fn register_strategy<T, S>(&mut self, strategy: S) -> &mut Self
    where
        T: Specimen,
        S: Strategy<Value = T> + Send + Sync + 'static,
    {
        let ty = TypeDescriptor::of::<T>();
        debug!(ty = %ty, "Registering specimen strategy");
        let target = ty.clone();
        self.factories.insert(
            ty.id(),
            Box::new(
                move |runner: &mut TestRunner| -> Result<Box<dyn Specimen>, GenerationError> {
                    let tree = strategy
                        .new_tree(runner)
                        .map_err(|reason| GenerationError::rejected(&target, reason.message()))?;
                    Ok(Box::new(tree.current()))
                },
            ),
        );
        self
    }

    /// Register `T` using a plain constructor closure
    pub fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Specimen,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let ty = TypeDescriptor::of::<T>();
        debug!(ty = %ty, "Registering specimen factory");
        self.factories.insert(
            ty.id(),
            Box::new(
                move |_runner: &mut TestRunner| -> Result<Box<dyn Specimen>, GenerationError> {
                    Ok(Box::new(factory()))
                },
            ),
        );
        self
    }

    pub fn is_registered(&self, ty: &TypeDescriptor) -> bool {
        self.factories.contains_key(&ty.id())
    }

    fn register_primitives(&mut self) {
        self.register::<bool>()
            .register::<char>()
            .register::<i8>()
            .register::<i16>()
            .register::<i32>()
            .register::<i64>()
            .register::<isize>()
            .register::<u8>()
            .register::<u16>()
            .register::<u32>()
            .register::<u64>()
            .register::<usize>()
            .register::<f64>()
            .register::<String>()
            .register_object();
    }

    fn register_object(&mut self) -> &mut Self {
        let next = AtomicU64::new(0);
        self.factories.insert(
            TypeDescriptor::object().id(),
            Box::new(
                move |_runner: &mut TestRunner| -> Result<Box<dyn Specimen>, GenerationError> {
                    Ok(Box::new(AnonymousObject(next.fetch_add(1, Ordering::Relaxed))))
                },
            ),
        );
        self
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("registered_types", &self.factories.len())
            .finish_non_exhaustive()
    }
}

impl InstanceSource for Fixture {
    #[instrument(level = "trace", skip_all, fields(ty = %ty))]
    fn create(&self, ty: &TypeDescriptor) -> Result<Box<dyn Specimen>, GenerationError> {
        let factory = self
            .factories
            .get(&ty.id())
            .ok_or_else(|| GenerationError::unregistered(ty))?;
        let mut runner = self.runner.lock();
        factory(&mut *runner)
    }
}
