use crate::infra::{load_inputs, snapshot_store};
use crate::report::render_report;
use clap::Args;
use gonogo::config::AppConfig;
use gonogo::error::AppError;
use gonogo::workflows::partnership::{
    evaluate, CommunicationTier, FinancialMetrics, PartnershipInputs, PartnershipService,
    RiskRatings, StrategyRatings,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON file with partnership inputs. Defaults to the session seed values.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Write a snapshot of the inputs to the configured snapshot directory
    #[arg(long)]
    pub(crate) save: bool,
    /// Print the full evaluation outcome as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each outcome as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, save, json } = args;

    let inputs = match input {
        Some(path) => load_inputs(&path)?,
        None => PartnershipInputs::seed(),
    };

    let outcome = evaluate(&inputs);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_report(&outcome));
    }

    if save {
        let config = AppConfig::load()?;
        let store = Arc::new(snapshot_store(&config));
        let dir = store.dir().to_path_buf();
        let service = PartnershipService::new(store);
        let saved = service.save_snapshot(inputs)?;
        eprintln!("Snapshot saved to {}", dir.join(&saved.file_name).display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Go/No-Go partnership demo");

    for (heading, inputs) in demo_scenarios() {
        println!("\n=== {heading} ===");
        let outcome = evaluate(&inputs);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print!("{}", render_report(&outcome));
        }
    }

    Ok(())
}

fn demo_scenarios() -> Vec<(&'static str, PartnershipInputs)> {
    vec![
        ("Healthy partnership", healthy_partnership()),
        ("Conditional partnership", conditional_partnership()),
        ("Vetoed partnership", vetoed_partnership()),
    ]
}

fn demo_project(name: &str) -> PartnershipInputs {
    let mut inputs = PartnershipInputs::seed();
    inputs.project.name = name.to_string();
    inputs.project.developer = "Construtora Demonstração".to_string();
    inputs.project.city = "Campinas".to_string();
    inputs.project.state = "SP".to_string();
    inputs
}

fn healthy_partnership() -> PartnershipInputs {
    let mut inputs = demo_project("Residencial Parque das Flores");
    inputs.scores.financial = Some(FinancialMetrics {
        margin: 10.0,
        ticket: 15_000.0,
        ltv: 12_000.0,
        payback_months: 12.0,
        cac: 1_500.0,
    });
    inputs.scores.risk = Some(RiskRatings {
        legal: 2.0,
        default: 2.0,
        reputational: 2.0,
        operational: 2.0,
        litigation_percentage: 0.0,
    });
    inputs.scores.strategy = Some(StrategyRatings {
        adherence: 7.5,
        synergy: 7.5,
        recurrence: 7.5,
        cross_sell: 7.5,
    });
    inputs.communication = CommunicationTier::Basic;
    inputs
}

fn conditional_partnership() -> PartnershipInputs {
    let mut inputs = demo_project("Edifício Mirante");
    inputs.scores.financial = Some(FinancialMetrics {
        margin: 6.0,
        ticket: 10_000.0,
        ltv: 8_000.0,
        payback_months: 18.0,
        cac: 2_500.0,
    });
    inputs.scores.risk = Some(RiskRatings {
        legal: 7.0,
        default: 5.0,
        reputational: 5.0,
        operational: 5.0,
        litigation_percentage: 10.0,
    });
    inputs.scores.strategy = Some(StrategyRatings {
        adherence: 5.0,
        synergy: 5.0,
        recurrence: 5.0,
        cross_sell: 5.0,
    });
    inputs.operational.technical_complexity = 6.0;
    inputs.operational.supply_dependency = 6.0;
    inputs.operational.logistical_risk = 6.0;
    inputs.operational.standardization = 4.0;
    inputs
}

/// Strong ratings, but the peak month needs almost twice the available crews.
fn vetoed_partnership() -> PartnershipInputs {
    let mut inputs = healthy_partnership();
    inputs.project.name = "Torre Horizonte".to_string();
    inputs.operational.monthly_capacity_available = 20.0;
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use gonogo::workflows::partnership::Decision;

    #[test]
    fn demo_covers_each_decision_band() {
        let decisions: Vec<Decision> = demo_scenarios()
            .iter()
            .map(|(_, inputs)| evaluate(inputs).result.decision)
            .collect();

        assert_eq!(
            decisions,
            vec![
                Decision::Go,
                Decision::GoWithConditions,
                Decision::AutomaticNoGo
            ]
        );
    }

    #[test]
    fn evaluate_command_reads_input_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("inputs.json");
        std::fs::write(
            &path,
            serde_json::to_vec(&healthy_partnership()).expect("serializes"),
        )
        .expect("inputs written");

        let result = run_evaluate(EvaluateArgs {
            input: Some(path),
            save: false,
            json: true,
        });

        assert!(result.is_ok());
    }
}
