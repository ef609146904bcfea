//! Verifies that `equals` is transitive
//!
//! If `x.equals(y)` and `y.equals(z)` then `x.equals(z)`. Each trial samples
//! one triple of anonymous instances and requires the three comparisons to
//! agree with one another. This approximates the law from samples; it does
//! not prove it for all inputs.

use crate::config::VerificationSettings;
use crate::domain::{EqualityLaw, InstanceSource, MethodDescriptor, TrialCount};
use crate::error::{EqualsOverrideError, Error, Result};
use crate::idioms::assertion::IdiomaticAssertion;
use crate::idioms::override_detector::equals_override_target;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Checks the transitive law on anonymous instances of the declaring type
#[derive(Clone)]
pub struct EqualsTransitiveAssertion {
    builder: Arc<dyn InstanceSource>,
    trials: TrialCount,
}

impl EqualsTransitiveAssertion {
    pub fn new(builder: Arc<dyn InstanceSource>) -> Self {
        Self {
            builder,
            trials: TrialCount::default(),
        }
    }

    pub fn try_new(builder: Option<Arc<dyn InstanceSource>>) -> Result<Self> {
        builder
            .map(Self::new)
            .ok_or_else(|| Error::missing_argument("builder"))
    }

    pub fn from_settings(
        builder: Arc<dyn InstanceSource>,
        settings: &VerificationSettings,
    ) -> Self {
        Self::new(builder).with_trials(settings.transitive_trials)
    }

    /// Sample this many independent triples per `verify` call
    pub fn with_trials(mut self, trials: TrialCount) -> Self {
        self.trials = trials;
        self
    }

    pub fn builder(&self) -> &Arc<dyn InstanceSource> {
        &self.builder
    }

    pub fn trials(&self) -> TrialCount {
        self.trials
    }
}

impl IdiomaticAssertion for EqualsTransitiveAssertion {
    #[instrument(skip_all, fields(method = %method))]
    fn verify(&self, method: &MethodDescriptor) -> Result<()> {
        let Some(declaring_type) = equals_override_target(method) else {
            debug!("Not an equals override, skipping transitive check");
            return Ok(());
        };

        for trial in 0..self.trials.into_inner() {
            let x = self.builder.create(declaring_type)?;
            let y = self.builder.create(declaring_type)?;
            let z = self.builder.create(declaring_type)?;

            let x_equals_y = x.equals(&*y);
            let y_equals_z = y.equals(&*z);
            let x_equals_z = x.equals(&*z);

            if x_equals_y != y_equals_z || x_equals_y != x_equals_z {
                let law = EqualityLaw::Transitive;
                warn!(
                    trial,
                    law = law.name(),
                    x_equals_y,
                    y_equals_z,
                    x_equals_z,
                    "Equality law violated by {declaring_type}"
                );
                return Err(EqualsOverrideError::new(declaring_type.name().clone(), law).into());
            }
        }

        Ok(())
    }
}
