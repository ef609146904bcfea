//! Shared fixtures for the integration tests
//!
//! Each test binary compiles this module separately and uses a different
//! subset of it.
#![allow(dead_code)]

use equality_idioms::config::FixtureSettings;
use equality_idioms::domain::GenerationError;
use equality_idioms::{Fixture, InstanceSource, Specimen, TypeDescriptor};
use proptest::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Equality compares every field
#[derive(Debug, Clone, PartialEq)]
pub struct WellBehaved {
    pub text: String,
    pub number: i32,
}

pub fn well_behaved() -> impl Strategy<Value = WellBehaved> {
    (any::<String>(), any::<i32>()).prop_map(|(text, number)| WellBehaved { text, number })
}

/// Equality flips a flag shared by every instance on each call
#[derive(Debug, Clone)]
pub struct IllBehaved {
    flag: Arc<AtomicBool>,
}

impl PartialEq for IllBehaved {
    fn eq(&self, _other: &Self) -> bool {
        self.flag.fetch_xor(true, Ordering::SeqCst)
    }
}

/// A type that never overrides `equals`
#[derive(Debug)]
pub struct NoOverride;

/// A seeded fixture that can build both test types
pub fn fixture(seed: u64) -> Fixture {
    let mut fixture = Fixture::from_settings(&FixtureSettings {
        seed: Some(seed),
        ..FixtureSettings::default()
    });
    let flag = Arc::new(AtomicBool::new(false));
    fixture
        .register_strategy(well_behaved())
        .register_factory(move || IllBehaved {
            flag: Arc::clone(&flag),
        });
    fixture
}

/// Forwards to another source and counts the requests
pub struct CountingSource<S> {
    inner: S,
    requests: AtomicUsize,
}

impl<S: InstanceSource> CountingSource<S> {
    pub fn new(inner: S) -> Arc<Self> {
        Arc::new(Self {
            inner,
            requests: AtomicUsize::new(0),
        })
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl<S: InstanceSource> InstanceSource for CountingSource<S> {
    fn create(&self, ty: &TypeDescriptor) -> Result<Box<dyn Specimen>, GenerationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.inner.create(ty)
    }
}
