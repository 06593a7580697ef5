//! Exp threshold lookups.

use anyhow::Result;
use clap::Parser;
use console::style;
use monster_core::{ExpCurve, GameConfig, GrowthRate};

/// Print the exp needed for a level and for the next one
#[derive(Parser)]
pub struct Exp {
    /// Growth curve (Erratic, Fast, Medium, Parabolic, Slow, Fluctuating)
    #[arg(short, long, value_parser = parse_rate)]
    rate: GrowthRate,

    /// Level to look up
    #[arg(short, long)]
    level: i32,

    /// Level cap
    #[arg(long, default_value_t = GameConfig::DEFAULT_MAX_LEVEL)]
    max_level: i32,
}

impl Exp {
    pub fn execute(self) -> Result<()> {
        let curve = ExpCurve::new(self.rate, self.max_level);
        let exp = curve.try_exp_for_level(self.level)?;

        println!(
            "{} {} level {}",
            style("Curve:").bold(),
            style(self.rate).cyan(),
            style(self.level).yellow()
        );
        println!("  exp:        {}", style(exp).green());
        if self.level >= self.max_level {
            println!("  next level: {}", style("max level").dim());
        } else {
            println!(
                "  next level: {} (+{})",
                style(curve.exp_for_next_level(self.level)).green(),
                curve.exp_for_next_level(self.level) - exp
            );
        }
        Ok(())
    }
}

fn parse_rate(value: &str) -> Result<GrowthRate, String> {
    value.parse().map_err(|_| {
        format!(
            "unknown growth rate '{value}', expected one of: {}",
            GrowthRate::ALL.map(|rate| rate.to_string()).join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rates_and_aliases() {
        assert_eq!(parse_rate("slow").unwrap(), GrowthRate::Slow);
        assert_eq!(parse_rate("MediumSlow").unwrap(), GrowthRate::Parabolic);
        assert!(parse_rate("glacial").is_err());
    }
}
