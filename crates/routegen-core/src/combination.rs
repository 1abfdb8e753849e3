//! Subset enumeration over parameter descriptors

use crate::descriptor::ParamDescriptor;

/// An ordered subset of the declared descriptors.
///
/// Descriptors keep their declared relative order, so `request` always
/// precedes `session` when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a> {
    params: Vec<&'a ParamDescriptor>,
}

impl<'a> Combination<'a> {
    pub fn empty() -> Self {
        Self { params: Vec::new() }
    }

    fn extended(&self, param: &'a ParamDescriptor) -> Self {
        let mut params = Vec::with_capacity(self.params.len() + 1);
        params.extend_from_slice(&self.params);
        params.push(param);
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn params(&self) -> &[&'a ParamDescriptor] {
        &self.params
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ParamDescriptor> + '_ {
        self.params.iter().copied()
    }

    /// Names of the contained descriptors, in order
    pub fn names(&self) -> Vec<&'a str> {
        self.params.iter().map(|p| p.name()).collect()
    }
}

impl std::fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}

/// Enumerate every subset of `params`, smallest first.
///
/// Builds the powerset iteratively: starting from the empty combination,
/// each descriptor doubles the set by appending itself to every existing
/// combination. The result is then stably sorted by size, so combinations
/// of equal size keep construction order.
pub fn enumerate_combinations(params: &[ParamDescriptor]) -> Vec<Combination<'_>> {
    let capacity = u32::try_from(params.len())
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .unwrap_or(0);
    let mut combinations = Vec::with_capacity(capacity);
    combinations.push(Combination::empty());

    for param in params {
        let extended: Vec<Combination<'_>> =
            combinations.iter().map(|c| c.extended(param)).collect();
        combinations.extend(extended);
    }

    combinations.sort_by_key(Combination::len);

    tracing::debug!(
        params = params.len(),
        combinations = combinations.len(),
        "enumerated parameter combinations"
    );

    combinations
}
