//! Stat block derivation.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;
use monster_core::{ConfigOracle, SpeciesId, StatBlock, StatBlockSpec, StatId};

use super::load_content;

/// Derive the stats of a species at a level
#[derive(Parser)]
pub struct Stats {
    /// Species id (e.g. GARCHOMP)
    #[arg(short, long)]
    species: SpeciesId,

    /// Level of the monster
    #[arg(short, long)]
    level: i32,

    /// Nature id; derived from the personality value when omitted
    #[arg(short, long)]
    nature: Option<String>,

    /// Individual value as STAT=VALUE; repeatable, missing IVs are rolled
    #[arg(long = "iv", value_name = "STAT=VALUE", value_parser = parse_stat_value)]
    ivs: Vec<(StatId, i32)>,

    /// Effort value as STAT=VALUE; repeatable, missing EVs are 0
    #[arg(long = "ev", value_name = "STAT=VALUE", value_parser = parse_stat_value)]
    evs: Vec<(StatId, i32)>,

    /// Personality value; rolled from the seed when omitted
    #[arg(short, long)]
    personality: Option<u32>,

    /// Seed for rolled IVs and personality
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Stats {
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let oracles = load_content(data_dir)?;
        let env = oracles.as_game_env();

        let mut spec = StatBlockSpec::new(self.species, self.level).with_seed(self.seed);
        if let Some(nature) = self.nature {
            spec = spec.with_nature(nature);
        }
        if let Some(personality) = self.personality {
            spec = spec.with_personality(personality);
        }
        for (stat, value) in self.ivs {
            spec = spec.with_iv(stat, value);
        }
        for (stat, value) in self.evs {
            spec = spec.with_ev(stat, value);
        }

        let block = StatBlock::new(&spec, &env)?;
        let nature = block.nature(&env)?;
        tracing::debug!(personality = block.personality_value(), "stat block built");

        println!(
            "{} level {} ({}, {})",
            style(block.species()).bold().cyan(),
            style(block.level()).yellow(),
            block.curve().rate(),
            style(&nature.name).magenta()
        );
        println!(
            "  exp: {} / next: {} ({:.1}%)",
            block.exp(),
            block.exp_for_next_level(),
            block.exp_percent() * 100.0
        );
        println!();
        println!(
            "  {:<16} {:>3} {:>4} {:>5}",
            style("STAT").bold(),
            style("IV").bold(),
            style("EV").bold(),
            style("VALUE").bold()
        );
        for entry in block.entries() {
            let marker = if nature.boosted_stat() == Some(&entry.stat) {
                style("+").green()
            } else if nature.hindered_stat() == Some(&entry.stat) {
                style("-").red()
            } else {
                style(" ")
            };
            println!(
                "  {:<16} {:>3} {:>4} {:>5}{}",
                entry.stat.as_str(),
                entry.iv,
                entry.ev,
                entry.value,
                marker
            );
        }

        let max_total_ev = oracles.config().max_total_ev();
        if block.total_evs() > max_total_ev {
            println!();
            println!(
                "{} total EVs {} exceed the cap of {}",
                style("warning:").yellow().bold(),
                block.total_evs(),
                max_total_ev
            );
        }
        Ok(())
    }
}

/// Parses `STAT=VALUE` pairs such as `attack=252`.
fn parse_stat_value(value: &str) -> Result<(StatId, i32), String> {
    let (stat, number) = value
        .split_once('=')
        .ok_or_else(|| format!("expected STAT=VALUE, got '{value}'"))?;
    if stat.trim().is_empty() {
        return Err(format!("missing stat name in '{value}'"));
    }
    let number = number
        .trim()
        .parse()
        .map_err(|e| format!("invalid value in '{value}': {e}"))?;
    Ok((StatId::new(stat), number))
}
