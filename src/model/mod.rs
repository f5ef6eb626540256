use crate::data::Event;
use crate::error::ModelError;

mod config;
pub use config::ModelConfig;

mod kind;
pub use kind::ModelKind;

mod microlensing;
pub use microlensing::Model;

/// Create a model by its name, `"PSPL"` or `"FSPL"`
///
/// Dictionaries and boundaries are computed from the event immediately.
pub fn create_model<'a>(name: &str, event: &'a Event) -> Result<Model<'a>, ModelError> {
    let kind: ModelKind = name.parse()?;
    tracing::debug!(
        model = %kind,
        telescopes = event.telescopes().len(),
        "creating model"
    );
    Ok(Model::new(kind, event))
}
