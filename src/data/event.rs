use crate::data::Telescope;
use crate::error::EventError;

use itertools::Itertools;

/// Microlensing event observed by one or several telescopes
///
/// Telescope names are unique, their order defines the order of the per-telescope flux
/// parameters of every model built on the event.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    telescopes: Vec<Telescope>,
}

impl Event {
    pub fn new(telescopes: impl Into<Vec<Telescope>>) -> Result<Self, EventError> {
        let telescopes = telescopes.into();
        if telescopes.is_empty() {
            return Err(EventError::NoTelescopes);
        }
        if let Some(duplicate) = telescopes.iter().map(Telescope::name).duplicates().next() {
            return Err(EventError::DuplicateTelescope(duplicate.to_owned()));
        }
        Ok(Self { telescopes })
    }

    pub fn telescopes(&self) -> &[Telescope] {
        &self.telescopes
    }

    pub fn telescope(&self, name: &str) -> Option<&Telescope> {
        self.telescopes.iter().find(|telescope| telescope.name() == name)
    }

    /// Minimum and maximum observation time over all telescopes
    pub fn time_range(&self) -> (f64, f64) {
        self.telescopes
            .iter()
            .map(Telescope::time_range)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (t_min, t_max)| {
                (min.min(t_min), max.max(t_max))
            })
    }
}

impl TryFrom<Vec<Telescope>> for Event {
    type Error = EventError;

    fn try_from(telescopes: Vec<Telescope>) -> Result<Self, Self::Error> {
        Self::new(telescopes)
    }
}
