//! Verifies that `equals` is symmetric: `x.equals(y) == y.equals(x)`

use crate::config::VerificationSettings;
use crate::domain::{EqualityLaw, InstanceSource, MethodDescriptor, TrialCount};
use crate::error::{EqualsOverrideError, Error, Result};
use crate::idioms::assertion::IdiomaticAssertion;
use crate::idioms::override_detector::equals_override_target;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Checks the symmetric law on anonymous instances of the declaring type
///
/// Each trial draws two independent specimens `x` and `y` from the builder
/// and compares `x.equals(y)` with `y.equals(x)`. Panics raised by the
/// type's own `equals` are not caught.
#[derive(Clone)]
pub struct EqualsSymmetricAssertion {
    builder: Arc<dyn InstanceSource>,
    trials: TrialCount,
}

impl EqualsSymmetricAssertion {
    pub fn new(builder: Arc<dyn InstanceSource>) -> Self {
        Self {
            builder,
            trials: TrialCount::default(),
        }
    }

    /// Like [`Self::new`], failing with an argument error when `builder` is absent
    pub fn try_new(builder: Option<Arc<dyn InstanceSource>>) -> Result<Self> {
        builder
            .map(Self::new)
            .ok_or_else(|| Error::missing_argument("builder"))
    }

    pub fn from_settings(
        builder: Arc<dyn InstanceSource>,
        settings: &VerificationSettings,
    ) -> Self {
        Self::new(builder).with_trials(settings.symmetric_trials)
    }

    pub fn with_trials(mut self, trials: TrialCount) -> Self {
        self.trials = trials;
        self
    }

    /// The builder supplied at construction
    pub fn builder(&self) -> &Arc<dyn InstanceSource> {
        &self.builder
    }

    pub fn trials(&self) -> TrialCount {
        self.trials
    }
}

impl IdiomaticAssertion for EqualsSymmetricAssertion {
    #[instrument(skip_all, fields(method = %method))]
    fn verify(&self, method: &MethodDescriptor) -> Result<()> {
        let Some(declaring_type) = equals_override_target(method) else {
            debug!("Not an equals override, skipping symmetric check");
            return Ok(());
        };

        for trial in 0..self.trials.into_inner() {
            let x = self.builder.create(declaring_type)?;
            let y = self.builder.create(declaring_type)?;

            let x_equals_y = x.equals(&*y);
            let y_equals_x = y.equals(&*x);

            if x_equals_y != y_equals_x {
                let law = EqualityLaw::Symmetric;
                warn!(
                    trial,
                    law = law.name(),
                    x_equals_y,
                    y_equals_x,
                    "Equality law violated by {declaring_type}"
                );
                return Err(EqualsOverrideError::new(declaring_type.name().clone(), law).into());
            }
        }

        Ok(())
    }
}
