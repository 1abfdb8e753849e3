//! Generation driver: methods × combinations → deduplicated, rendered document

use crate::combination::enumerate_combinations;
use crate::config::GeneratorConfig;
use crate::document::{self, HeaderConfig};
use crate::error::{GenError, GenResult};
use crate::model::RouteModel;
use crate::output::OutputSink;
use crate::render::{FunctionRenderer, RenderTarget};
use crate::signature::{Collision, Route, SignatureDeduplicator};
use chrono::NaiveDate;
use std::path::Path;

/// Routes that survive deduplication, in generation order
#[derive(Debug, Clone)]
pub struct GenerationPlan<'a> {
    /// Number of parameter combinations per method
    pub combinations: usize,
    pub routes: Vec<Route<'a>>,
    pub collisions: Vec<Collision<'a>>,
}

/// The rendered file and what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub text: String,
    pub function_count: usize,
    pub dropped_count: usize,
}

/// Runs the whole pipeline over one immutable model.
#[derive(Debug, Clone)]
pub struct Generator {
    model: RouteModel,
    target: RenderTarget,
    header: HeaderConfig,
    fail_on_collision: bool,
}

impl Generator {
    pub fn new(model: RouteModel, target: RenderTarget, header: HeaderConfig) -> Self {
        Self {
            model,
            target,
            header,
            fail_on_collision: false,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> GenResult<Self> {
        let model = config.build_model()?;
        Ok(Self::new(model, config.target.clone(), config.header.clone())
            .with_fail_on_collision(config.fail_on_collision))
    }

    /// Turn dropped duplicate signatures into [`GenError::SignatureCollision`]
    pub fn with_fail_on_collision(mut self, fail: bool) -> Self {
        self.fail_on_collision = fail;
        self
    }

    pub fn model(&self) -> &RouteModel {
        &self.model
    }

    /// Enumerate and deduplicate routes without rendering them.
    ///
    /// Methods are the outer loop and combinations the inner one, so the
    /// first route kept for a signature is stable across runs.
    pub fn plan(&self) -> GenResult<GenerationPlan<'_>> {
        let combinations = enumerate_combinations(self.model.params());

        let routes = self.model.methods().iter().flat_map(|method| {
            combinations
                .iter()
                .map(move |combination| Route::new(*method, combination.clone()))
        });
        let outcome = SignatureDeduplicator::new().deduplicate(routes);

        if self.fail_on_collision
            && let Some(collision) = outcome.collisions.first()
        {
            return Err(GenError::SignatureCollision {
                method: collision.dropped.method.to_string(),
                signature: collision.signature.to_string(),
            });
        }

        tracing::debug!(
            kept = outcome.kept.len(),
            dropped = outcome.collisions.len(),
            "deduplicated routes"
        );

        Ok(GenerationPlan {
            combinations: combinations.len(),
            routes: outcome.kept,
            collisions: outcome.collisions,
        })
    }

    /// Render the complete document, stamped with `date`.
    pub fn generate(&self, date: NaiveDate) -> GenResult<GeneratedDocument> {
        let plan = self.plan()?;
        let renderer = FunctionRenderer::new(&self.target);

        let functions = plan.routes.iter().map(|route| renderer.render(route));
        let text = document::assemble(&self.header, &self.target.container, date, functions);

        tracing::info!(
            functions = plan.routes.len(),
            dropped = plan.collisions.len(),
            "generated route overloads"
        );

        Ok(GeneratedDocument {
            text,
            function_count: plan.routes.len(),
            dropped_count: plan.collisions.len(),
        })
    }

    /// Render and hand the document to `sink` for `destination`.
    pub fn write(
        &self,
        sink: &mut dyn OutputSink,
        destination: &Path,
        date: NaiveDate,
    ) -> GenResult<GeneratedDocument> {
        let document = self.generate(date)?;
        sink.write_document(destination, &document.text)?;

        tracing::info!(
            destination = %destination.display(),
            bytes = document.text.len(),
            "wrote generated document"
        );

        Ok(document)
    }
}
