use crate::error::ModelError;
use crate::fancy::conversion::ConversionTrait;
use crate::fancy::registry::FancyParameters;
use crate::parameters::{NamedParameters, ParameterDictionary};

/// Order in which conversions of a [FancyParameters] registry are applied
///
/// Both orders hold indices into the registry. Conversions are applied in declaration order
/// unless a conversion reads a value produced by another conversion, in which case the
/// producer goes first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolutionPlan {
    to_standard: Vec<usize>,
    to_fancy: Vec<usize>,
}

impl ResolutionPlan {
    pub(crate) fn new(
        registry: &FancyParameters,
        standard: &ParameterDictionary,
        fancy: &ParameterDictionary,
    ) -> Result<Self, ModelError> {
        let standard_targets: Vec<_> = registry.iter().map(|p| p.standard()).collect();
        let fancy_targets: Vec<_> = registry.iter().map(|p| p.name()).collect();

        let to_standard = resolution_order(
            &standard_targets,
            &registry.to_standard_dependencies(),
            |name| fancy.contains(name),
        )?;
        let to_fancy = resolution_order(
            &fancy_targets,
            &registry.to_fancy_dependencies(),
            |name| standard.contains(name),
        )?;
        tracing::trace!(?to_standard, ?to_fancy, "fancy parameter resolution order");

        Ok(Self {
            to_standard,
            to_fancy,
        })
    }

    /// Attach standard values replaced by fancy parameters
    pub(crate) fn resolve_standard(
        &self,
        registry: &FancyParameters,
        parameters: &mut NamedParameters,
    ) -> Result<(), ModelError> {
        for &index in &self.to_standard {
            let entry = registry.at(index);
            let value = entry.to_standard().convert(parameters)?;
            parameters.set(entry.standard(), value);
        }
        Ok(())
    }

    /// Attach fancy values computed from standard parameters
    pub(crate) fn resolve_fancy(
        &self,
        registry: &FancyParameters,
        parameters: &mut NamedParameters,
    ) -> Result<(), ModelError> {
        for &index in &self.to_fancy {
            let entry = registry.at(index);
            let value = entry.to_fancy().convert(parameters)?;
            parameters.set(entry.name(), value);
        }
        Ok(())
    }
}

/// Stable topological order of `targets`
///
/// `dependencies[i]` lists names read when producing `targets[i]`. A name must be either
/// `available` from the start or be one of the targets. On every step the first target in
/// declaration order with all of its dependencies resolved is picked.
fn resolution_order(
    targets: &[&str],
    dependencies: &[Vec<&str>],
    available: impl Fn(&str) -> bool,
) -> Result<Vec<usize>, ModelError> {
    debug_assert_eq!(targets.len(), dependencies.len());

    // Indices of targets each target waits for
    let mut waits_for = Vec::with_capacity(targets.len());
    for (&target, deps) in targets.iter().zip(dependencies) {
        let mut producers = vec![];
        for &dep in deps {
            if available(dep) {
                continue;
            }
            match targets.iter().position(|&t| t == dep) {
                Some(producer) => producers.push(producer),
                None => {
                    return Err(ModelError::invalid_registry(format!(
                        "conversion to \"{target}\" reads unknown parameter \"{dep}\""
                    )));
                }
            }
        }
        waits_for.push(producers);
    }

    let mut resolved = vec![false; targets.len()];
    let mut order = Vec::with_capacity(targets.len());
    while order.len() < targets.len() {
        let next = (0..targets.len()).find(|&i| {
            !resolved[i] && waits_for[i].iter().all(|&producer| resolved[producer])
        });
        match next {
            Some(i) => {
                resolved[i] = true;
                order.push(i);
            }
            None => {
                return Err(ModelError::unresolvable(
                    targets
                        .iter()
                        .zip(&resolved)
                        .filter_map(|(&target, &done)| (!done).then_some(target)),
                ));
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fancy::{Conversion, FancyParameter};

    fn standard() -> ParameterDictionary {
        ParameterDictionary::new(["to", "uo", "tE", "rho", "fs_Test", "g_Test"])
    }

    fn plan(registry: &FancyParameters) -> Result<ResolutionPlan, ModelError> {
        let standard = standard();
        registry.validate(&standard)?;
        ResolutionPlan::new(registry, &standard, &registry.substitute(&standard))
    }

    #[test]
    fn declaration_order_without_dependencies() {
        let order = resolution_order(&["a", "b", "c"], &[vec!["x"], vec![], vec!["y"]], |_| {
            true
        })
        .unwrap();
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn producers_go_first() {
        let order = resolution_order(
            &["a", "b", "c"],
            &[vec!["c"], vec!["a", "x"], vec!["x"]],
            |name| name == "x",
        )
        .unwrap();
        assert_eq!(order, [2, 0, 1]);
    }

    #[test]
    fn cycle() {
        let result = resolution_order(&["a", "b", "c"], &[vec!["b"], vec!["a"], vec![]], |_| {
            false
        });
        assert_eq!(
            result,
            Err(ModelError::UnresolvableDependency(vec![
                "a".into(),
                "b".into()
            ]))
        );
    }

    #[test]
    fn self_dependency() {
        let result = resolution_order(&["a"], &[vec!["a"]], |_| false);
        assert!(matches!(result, Err(ModelError::UnresolvableDependency(_))));
    }

    #[test]
    fn unknown_dependency() {
        let result = resolution_order(&["a"], &[vec!["z"]], |_| false);
        assert!(matches!(result, Err(ModelError::InvalidFancyRegistry(_))));
    }

    #[test]
    fn forward_reads_other_fancy_value() {
        // tstar = logrho * tE needs logrho computed first
        let registry = FancyParameters::new()
            .with(FancyParameter::new(
                "tstar",
                "tE",
                Conversion::product("logrho", "tE"),
                Conversion::ratio("tstar", "logrho"),
            ))
            .with(FancyParameter::log10("logrho", "rho"));
        let plan = plan(&registry).unwrap();
        assert_eq!(plan.to_standard, [0, 1]);
        assert_eq!(plan.to_fancy, [1, 0]);
    }

    #[test]
    fn inverse_reads_other_standard_value() {
        // tE = tstar / rho needs rho resolved first
        let registry = FancyParameters::new()
            .with(FancyParameter::new(
                "tstar",
                "tE",
                Conversion::product("rho", "tE"),
                Conversion::ratio("tstar", "rho"),
            ))
            .with(FancyParameter::log10("logrho", "rho"));
        let plan = plan(&registry).unwrap();
        assert_eq!(plan.to_standard, [1, 0]);
        assert_eq!(plan.to_fancy, [0, 1]);
    }

    #[test]
    fn mutual_inverse_dependency_is_unresolvable() {
        let registry = FancyParameters::new()
            .with(FancyParameter::new(
                "a",
                "tE",
                Conversion::product("tE", "rho"),
                Conversion::ratio("a", "rho"),
            ))
            .with(FancyParameter::new(
                "b",
                "rho",
                Conversion::product("rho", "tE"),
                Conversion::ratio("b", "tE"),
            ));
        assert_eq!(
            plan(&registry),
            Err(ModelError::UnresolvableDependency(vec![
                "tE".into(),
                "rho".into()
            ]))
        );
    }

    #[test]
    fn resolve_both_ways() {
        let registry = FancyParameters::new().with(FancyParameter::log10("logrho", "rho"));
        let plan = plan(&registry).unwrap();

        let mut parameters = NamedParameters::from_pairs([("logrho", -2.0)]);
        plan.resolve_standard(&registry, &mut parameters).unwrap();
        approx::assert_relative_eq!(parameters.rho().unwrap(), 0.01);

        let mut parameters = NamedParameters::from_pairs([("rho", 1e-3)]);
        plan.resolve_fancy(&registry, &mut parameters).unwrap();
        approx::assert_relative_eq!(parameters.get("logrho").unwrap(), -3.0);
    }
}
