//! List command implementation

use crate::settings::{self, LoggingOverride};
use anyhow::{Context, Result};
use routegen_core::{GenerationPlan, Generator, Route, RouteModel};
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable summary printed by `routegen list --json`
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub methods: Vec<String>,
    pub params: Vec<ParamSummary>,
    pub combinations: usize,
    pub routes: Vec<RouteSummary>,
    pub dropped: Vec<DroppedSummary>,
}

#[derive(Debug, Serialize)]
pub struct ParamSummary {
    pub name: String,
    pub generic: bool,
    pub buildable: bool,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub method: String,
    pub params: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DroppedSummary {
    pub method: String,
    pub params: Vec<String>,
    pub signature: String,
    /// The earlier route that kept this signature
    pub kept: RouteSummary,
}

impl ListSummary {
    pub fn new(model: &RouteModel, plan: &GenerationPlan<'_>) -> Self {
        Self {
            methods: model.methods().iter().map(ToString::to_string).collect(),
            params: model
                .params()
                .iter()
                .map(|p| ParamSummary {
                    name: p.name().to_string(),
                    generic: p.is_generic(),
                    buildable: p.is_buildable(),
                    signature: p.signature_fragment(),
                })
                .collect(),
            combinations: plan.combinations,
            routes: plan.routes.iter().map(route_summary).collect(),
            dropped: plan
                .collisions
                .iter()
                .map(|c| DroppedSummary {
                    method: c.dropped.method.to_string(),
                    params: to_strings(c.dropped.combination.names()),
                    signature: c.signature.to_string(),
                    kept: route_summary(&c.kept),
                })
                .collect(),
        }
    }
}

fn route_summary(route: &Route<'_>) -> RouteSummary {
    RouteSummary {
        method: route.method.to_string(),
        params: to_strings(route.combination.names()),
    }
}

fn to_strings(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

pub fn run(config_path: Option<PathBuf>, json: bool, logging: LoggingOverride) -> Result<()> {
    let (_, config) = settings::load(config_path, logging)?;
    // Collisions are reported here, never fatal
    let generator = Generator::from_config(&config)
        .context("Invalid config")?
        .with_fail_on_collision(false);
    let plan = generator.plan().context("Failed to plan routes")?;
    let summary = ListSummary::new(generator.model(), &plan);

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
        return Ok(());
    }

    println!("Methods: {}", summary.methods.join(", "));
    println!("Parameters:");
    for param in generator.model().params() {
        println!("\t{}", param);
    }
    println!("Combinations: {}", summary.combinations);
    println!("Routes: {}", summary.routes.len());
    for route in &plan.routes {
        println!("\t{}", route);
    }
    if !plan.collisions.is_empty() {
        println!("Dropped: {}", plan.collisions.len());
        for collision in &plan.collisions {
            println!("\t{} (same signature as {})", collision.dropped, collision.kept);
        }
    }

    Ok(())
}
