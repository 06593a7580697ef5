//! Type effectiveness lookups.

use std::path::Path;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use monster_core::{
    Effectiveness, TypeId, TypeOracle, combined_effectiveness, type_effectiveness,
};

use super::load_content;

/// Multiplier of an attacking type against one or two defending types
#[derive(Parser)]
pub struct Matchup {
    /// Attacking type
    #[arg(short, long)]
    attack: TypeId,

    /// Defending type; repeat for dual-typed defenders
    #[arg(short, long = "defend", required = true, num_args = 1)]
    defend: Vec<TypeId>,
}

impl Matchup {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let oracles = load_content(data_dir)?;
        let chart = oracles.types();

        for id in std::iter::once(&self.attack).chain(&self.defend) {
            if chart.type_data(id).is_none() {
                let known: Vec<String> =
                    chart.type_ids().iter().map(ToString::to_string).collect();
                bail!("unknown type '{id}', expected one of: {}", known.join(", "));
            }
        }

        if self.defend.len() > 1 {
            for defending in &self.defend {
                let multiplier = type_effectiveness(chart, &self.attack, defending)?;
                println!("  vs {:<10} x{}", defending.as_str(), multiplier);
            }
        }

        let multiplier = combined_effectiveness(chart, &self.attack, &self.defend)?;
        let band = Effectiveness::from_multiplier(multiplier);
        let label = match band {
            Effectiveness::NoEffect => style(band).dim(),
            Effectiveness::NotVeryEffective => style(band).red(),
            Effectiveness::Normal => style(band),
            Effectiveness::SuperEffective => style(band).green(),
        };

        let defenders: Vec<&str> = self.defend.iter().map(TypeId::as_str).collect();
        println!(
            "{} -> {}: x{} {}",
            style(&self.attack).bold().cyan(),
            style(defenders.join("/")).bold(),
            multiplier,
            label
        );
        Ok(())
    }
}
