//! External call signatures and deduplication of colliding routes

use crate::combination::Combination;
use crate::method::HttpMethod;
use std::collections::HashMap;

/// One (method, combination) pair to be rendered as a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    pub method: HttpMethod,
    pub combination: Combination<'a>,
}

impl<'a> Route<'a> {
    pub fn new(method: HttpMethod, combination: Combination<'a>) -> Self {
        Self {
            method,
            combination,
        }
    }

    /// Key identifying the externally visible call shape of this route
    pub fn signature(&self) -> Signature {
        Signature {
            method: self.method,
            fragments: self
                .combination
                .iter()
                .map(|p| p.signature_fragment())
                .collect(),
        }
    }
}

impl std::fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.combination)
    }
}

/// Comparable key: the method plus each descriptor's signature fragment.
///
/// Displays as the concatenated key, e.g. `get<request>, <Decodable>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    method: HttpMethod,
    fragments: Vec<String>,
}

impl Signature {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.method, self.fragments.join(", "))
    }
}

/// A route discarded because an earlier route had the same signature
#[derive(Debug, Clone)]
pub struct Collision<'a> {
    pub signature: Signature,
    pub kept: Route<'a>,
    pub dropped: Route<'a>,
}

/// Result of deduplication: surviving routes in input order, plus what was dropped
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome<'a> {
    pub kept: Vec<Route<'a>>,
    pub collisions: Vec<Collision<'a>>,
}

/// Keeps the first route per signature and discards later duplicates.
///
/// Order of surviving routes is the input order; nothing is reordered.
#[derive(Debug, Default)]
pub struct SignatureDeduplicator {
    seen: HashMap<Signature, usize>,
}

impl SignatureDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deduplicate<'a, I>(mut self, routes: I) -> DedupOutcome<'a>
    where
        I: IntoIterator<Item = Route<'a>>,
    {
        let mut outcome = DedupOutcome::default();

        for route in routes {
            let signature = route.signature();
            if let Some(&index) = self.seen.get(&signature) {
                let kept = outcome.kept[index].clone();
                tracing::warn!(
                    signature = %signature,
                    kept = %kept,
                    dropped = %route,
                    "dropping route with duplicate signature"
                );
                outcome.collisions.push(Collision {
                    signature,
                    kept,
                    dropped: route,
                });
            } else {
                self.seen.insert(signature, outcome.kept.len());
                outcome.kept.push(route);
            }
        }

        outcome
    }
}
