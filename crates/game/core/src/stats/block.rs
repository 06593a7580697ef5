//! Per-monster stat block.
//!
//! A [`StatBlock`] owns a monster's level, exp and one [`StatEntry`] per
//! tracked stat. Every change to level rebuilds all entries from the
//! formulas; values are never patched incrementally.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::formula::{self, StatInputs};
use super::random::{generate_iv, generate_personality};
use super::{Nature, StatKind};
use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::exp::{ExpCurve, ExpError};
use crate::ids::{NatureId, SpeciesId, StatId};

/// Construction input for a stat block.
///
/// Anything left unset is derived: missing IVs and the personality value are
/// drawn from the `RngOracle` using `seed`, missing EVs default to 0 and a
/// missing nature is picked from the personality value. IVs are clamped to
/// `0..=MAX_IV` and EVs to `0..=max_ev`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlockSpec {
    pub species: SpeciesId,
    pub level: i32,
    pub exp: Option<i32>,
    pub ivs: BTreeMap<StatId, i32>,
    pub evs: BTreeMap<StatId, i32>,
    /// IVs that replace the stored ones in stat calculation.
    pub iv_overrides: BTreeMap<StatId, i32>,
    pub nature: Option<NatureId>,
    pub personality_value: Option<u32>,
    pub seed: u64,
}

impl StatBlockSpec {
    pub fn new(species: impl Into<SpeciesId>, level: i32) -> Self {
        Self {
            species: species.into(),
            level,
            ..Self::default()
        }
    }

    pub fn with_nature(mut self, nature: impl Into<NatureId>) -> Self {
        self.nature = Some(nature.into());
        self
    }

    pub fn with_iv(mut self, stat: impl Into<StatId>, value: i32) -> Self {
        self.ivs.insert(stat.into(), value);
        self
    }

    pub fn with_ev(mut self, stat: impl Into<StatId>, value: i32) -> Self {
        self.evs.insert(stat.into(), value);
        self
    }

    pub fn with_iv_override(mut self, stat: impl Into<StatId>, value: i32) -> Self {
        self.iv_overrides.insert(stat.into(), value);
        self
    }

    pub fn with_personality(mut self, personality_value: u32) -> Self {
        self.personality_value = Some(personality_value);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One tracked stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEntry {
    pub stat: StatId,
    pub kind: StatKind,
    pub iv: i32,
    pub ev: i32,
    /// Takes precedence over `iv` when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub iv_override: Option<i32>,
    /// Derived value as of the last recalculation.
    pub value: i32,
}

impl StatEntry {
    /// The IV fed to the stat formula.
    pub fn effective_iv(&self) -> i32 {
        self.iv_override.unwrap_or(self.iv)
    }
}

/// Before/after pair reported by level-ups.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Change<T> {
    pub before: T,
    pub after: T,
}

impl Change<i32> {
    pub const fn diff(&self) -> i32 {
        self.after - self.before
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChange {
    pub stat: StatId,
    pub change: Change<i32>,
}

/// Outcome of [`StatBlock::gain_exp`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpChanges {
    pub level: Change<i32>,
    pub exp_percent: Change<f32>,
    /// One row per tracked stat, in table order.
    pub stats: Vec<StatChange>,
    /// Change of the configured HP stat; callers apply it to current HP.
    pub hp_change: i32,
}

impl LevelUpChanges {
    pub fn leveled_up(&self) -> bool {
        self.level.after > self.level.before
    }

    pub fn stat(&self, stat: &StatId) -> Option<&Change<i32>> {
        self.stats
            .iter()
            .find(|row| &row.stat == stat)
            .map(|row| &row.change)
    }
}

/// Errors raised while building or updating a stat block.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Exp(#[from] ExpError),

    #[error("no stat entry for '{0}'")]
    NoStatEntry(StatId),

    #[error("stat table tracks more than {max} stats", max = GameConfig::MAX_MAIN_STATS)]
    TooManyStats,

    #[error("stat '{0}' has no formula but is tracked by the block")]
    NoFormula(StatId),
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Exp(err) => err.severity(),
            Self::NoStatEntry(_) | Self::TooManyStats => ErrorSeverity::Validation,
            Self::NoFormula(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Exp(err) => err.error_code(),
            Self::NoStatEntry(_) => "STAT_NO_ENTRY",
            Self::TooManyStats => "STAT_TOO_MANY_STATS",
            Self::NoFormula(_) => "STAT_NO_FORMULA",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatBlock {
    species: SpeciesId,
    level: i32,
    exp: i32,
    nature: Option<NatureId>,
    personality_value: u32,
    curve: ExpCurve,
    entries: ArrayVec<StatEntry, { GameConfig::MAX_MAIN_STATS }>,
}

impl StatBlock {
    /// Builds a block from `spec` and computes every stat.
    ///
    /// Exp is the larger of the level's threshold and `spec.exp`.
    ///
    /// # Errors
    ///
    /// Fails if an oracle is missing, the species or a base stat is unknown,
    /// the nature cannot be resolved, or `spec.level` lies outside
    /// `1..=max_level`.
    pub fn new(spec: &StatBlockSpec, env: &GameEnv<'_>) -> Result<Self, StatError> {
        let species = env.species()?.require_species(&spec.species)?;
        let max_level = env
            .max_level()?
            .clamp(1, GameConfig::ABSOLUTE_MAX_LEVEL);
        if !(1..=max_level).contains(&spec.level) {
            return Err(ExpError::InvalidLevel {
                level: spec.level,
                max_level,
            }
            .into());
        }
        let curve = ExpCurve::new(species.growth_rate, max_level);
        let max_ev = env.config()?.max_ev().max(0);

        let personality_value = match spec.personality_value {
            Some(value) => value,
            None => generate_personality(env.rng()?, spec.seed),
        };

        let mut entries = ArrayVec::new();
        for definition in env.stats()?.main_stats() {
            let iv = match spec.ivs.get(&definition.id) {
                Some(&iv) => iv.clamp(0, GameConfig::MAX_IV),
                None => generate_iv(
                    env.rng()?,
                    spec.seed,
                    personality_value,
                    u32::from(definition.order),
                ),
            };
            let entry = StatEntry {
                stat: definition.id.clone(),
                kind: definition.kind,
                iv,
                ev: spec
                    .evs
                    .get(&definition.id)
                    .map_or(0, |&ev| ev.clamp(0, max_ev)),
                iv_override: spec
                    .iv_overrides
                    .get(&definition.id)
                    .map(|&iv| iv.clamp(0, GameConfig::MAX_IV)),
                value: 0,
            };
            entries
                .try_push(entry)
                .map_err(|_| StatError::TooManyStats)?;
        }

        let mut block = Self {
            species: spec.species.clone(),
            level: spec.level,
            exp: curve.exp_for_level(spec.level).max(spec.exp.unwrap_or(0)),
            nature: spec.nature.clone(),
            personality_value,
            curve,
            entries,
        };
        block.calculate_stats(env)?;
        Ok(block)
    }

    pub fn species(&self) -> &SpeciesId {
        &self.species
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn exp(&self) -> i32 {
        self.exp
    }

    pub fn personality_value(&self) -> u32 {
        self.personality_value
    }

    pub fn curve(&self) -> ExpCurve {
        self.curve
    }

    /// Exp threshold of the next level; 0 at the level cap.
    pub fn exp_for_next_level(&self) -> i32 {
        self.curve.exp_for_next_level(self.level)
    }

    /// Progress through the current level in `[0, 1)`; 0.0 at the level cap.
    pub fn exp_percent(&self) -> f32 {
        self.curve.exp_percent(self.level, self.exp)
    }

    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn stat(&self, stat: &StatId) -> Result<&StatEntry, StatError> {
        self.entries
            .iter()
            .find(|entry| &entry.stat == stat)
            .ok_or_else(|| StatError::NoStatEntry(stat.clone()))
    }

    /// Tracked stats in table order.
    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    pub fn total_evs(&self) -> i32 {
        self.entries.iter().map(|entry| entry.ev).sum()
    }

    /// The explicit nature if one was given, otherwise the nature selected by
    /// the personality value.
    ///
    /// # Errors
    ///
    /// Fails if the nature oracle is missing, the explicit nature is unknown,
    /// or the nature table is empty.
    pub fn nature<'a>(&self, env: &GameEnv<'a>) -> Result<&'a Nature, StatError> {
        let natures = env.natures()?;
        let nature = match &self.nature {
            Some(id) => natures.require_nature(id)?,
            None => natures.nature_for_personality(self.personality_value)?,
        };
        Ok(nature)
    }

    /// Recomputes every entry from base stats, IVs, EVs, nature and level.
    ///
    /// Entries are left untouched if any lookup fails.
    ///
    /// # Errors
    ///
    /// Fails if the species, a base stat, or the nature cannot be resolved.
    pub fn calculate_stats(&mut self, env: &GameEnv<'_>) -> Result<(), StatError> {
        let species = env.species()?.require_species(&self.species)?;
        let nature = self.nature(env)?;

        let mut values: ArrayVec<i32, { GameConfig::MAX_MAIN_STATS }> = ArrayVec::new();
        for entry in &self.entries {
            let inputs = StatInputs::new(
                species.base_stat(&entry.stat)?,
                entry.effective_iv(),
                entry.ev,
                self.level,
            );
            let value = formula::calculate(entry.kind, inputs, nature.modifier_for(&entry.stat))
                .ok_or_else(|| StatError::NoFormula(entry.stat.clone()))?;
            values.push(value);
        }

        for (entry, value) in self.entries.iter_mut().zip(values) {
            entry.value = value;
        }
        Ok(())
    }

    /// Adds exp and advances the level while the next threshold is met.
    ///
    /// Exp is clamped to `[0, exp_for_level(max_level)]` and the level never
    /// decreases. Stats are recalculated only if the level changed.
    ///
    /// # Errors
    ///
    /// Fails if recalculation fails or the config oracle is missing. The
    /// block is left unchanged on failure.
    pub fn gain_exp(&mut self, amount: i32, env: &GameEnv<'_>) -> Result<LevelUpChanges, StatError> {
        let hp_stat = env.config()?.hp_stat();
        let level_before = self.level;
        let percent_before = self.exp_percent();
        let values_before: Vec<(StatId, i32)> = self
            .entries
            .iter()
            .map(|entry| (entry.stat.clone(), entry.value))
            .collect();

        let exp = self
            .exp
            .saturating_add(amount)
            .clamp(0, self.curve.max_exp());
        let mut level = self.level;
        while level < self.curve.max_level() && exp >= self.curve.exp_for_next_level(level) {
            level += 1;
        }
        self.move_to(level, exp, env)?;

        let mut hp_change = 0;
        let stats: Vec<StatChange> = values_before
            .into_iter()
            .zip(&self.entries)
            .map(|((stat, before), entry)| {
                let change = Change {
                    before,
                    after: entry.value,
                };
                if &stat == hp_stat {
                    hp_change = change.diff();
                }
                StatChange { stat, change }
            })
            .collect();

        Ok(LevelUpChanges {
            level: Change {
                before: level_before,
                after: self.level,
            },
            exp_percent: Change {
                before: percent_before,
                after: self.exp_percent(),
            },
            stats,
            hp_change,
        })
    }

    /// Moves to `level` (clamped to `1..=max_level`) with exp reset to its
    /// threshold, then recalculates.
    ///
    /// # Errors
    ///
    /// Fails if recalculation fails; the block is left unchanged.
    pub fn set_level(&mut self, level: i32, env: &GameEnv<'_>) -> Result<(), StatError> {
        let level = level.clamp(1, self.curve.max_level());
        let (level_before, exp_before) = (self.level, self.exp);
        self.level = level;
        self.exp = self.curve.exp_for_level(level);
        if let Err(err) = self.calculate_stats(env) {
            self.level = level_before;
            self.exp = exp_before;
            return Err(err);
        }
        Ok(())
    }

    /// Sets exp (clamped to `[0, exp_for_level(max_level)]`) and re-derives
    /// the level, recalculating if it changed.
    ///
    /// # Errors
    ///
    /// Fails if recalculation fails; the block is left unchanged.
    pub fn set_exp(&mut self, exp: i32, env: &GameEnv<'_>) -> Result<(), StatError> {
        let exp = exp.clamp(0, self.curve.max_exp());
        self.move_to(self.curve.level_for_exp(exp), exp, env)
    }

    /// Applies a new level and exp, recalculating if the level changed.
    /// Restores the previous level and exp if recalculation fails.
    fn move_to(&mut self, level: i32, exp: i32, env: &GameEnv<'_>) -> Result<(), StatError> {
        let (level_before, exp_before) = (self.level, self.exp);
        self.level = level;
        self.exp = exp;
        if level == level_before {
            return Ok(());
        }
        let recalculated = self.calculate_stats(env);
        if recalculated.is_err() {
            self.level = level_before;
            self.exp = exp_before;
        }
        recalculated
    }

    /// Sets an IV, clamped to `0..=MAX_IV`. Call
    /// [`calculate_stats`](Self::calculate_stats) to refresh values.
    ///
    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn set_iv(&mut self, stat: &StatId, value: i32) -> Result<(), StatError> {
        self.entry_mut(stat)?.iv = value.clamp(0, GameConfig::MAX_IV);
        Ok(())
    }

    /// Sets an IV override, clamped to `0..=MAX_IV`. The override replaces
    /// the stored IV in stat calculation until cleared. Call
    /// [`calculate_stats`](Self::calculate_stats) to refresh values.
    ///
    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn set_iv_override(&mut self, stat: &StatId, value: i32) -> Result<(), StatError> {
        self.entry_mut(stat)?.iv_override = Some(value.clamp(0, GameConfig::MAX_IV));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn clear_iv_override(&mut self, stat: &StatId) -> Result<(), StatError> {
        self.entry_mut(stat)?.iv_override = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn iv_override(&self, stat: &StatId) -> Result<Option<i32>, StatError> {
        Ok(self.stat(stat)?.iv_override)
    }

    /// IV used by the formulas: the override if set, otherwise the stored IV.
    ///
    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn effective_iv(&self, stat: &StatId) -> Result<i32, StatError> {
        Ok(self.stat(stat)?.effective_iv())
    }

    /// Sets an EV, clamped to `0..=max_ev`. The total cap is not checked; see
    /// [`total_evs`](Self::total_evs).
    ///
    /// # Errors
    ///
    /// Returns `StatError::NoStatEntry` if `stat` is not tracked.
    pub fn set_ev(&mut self, stat: &StatId, value: i32, max_ev: i32) -> Result<(), StatError> {
        self.entry_mut(stat)?.ev = value.clamp(0, max_ev.max(0));
        Ok(())
    }

    /// Captures the block as a spec that rebuilds it exactly.
    pub fn to_spec(&self) -> StatBlockSpec {
        StatBlockSpec {
            species: self.species.clone(),
            level: self.level,
            exp: Some(self.exp),
            ivs: self
                .entries
                .iter()
                .map(|entry| (entry.stat.clone(), entry.iv))
                .collect(),
            evs: self
                .entries
                .iter()
                .map(|entry| (entry.stat.clone(), entry.ev))
                .collect(),
            iv_overrides: self
                .entries
                .iter()
                .filter_map(|entry| Some((entry.stat.clone(), entry.iv_override?)))
                .collect(),
            nature: self.nature.clone(),
            personality_value: Some(self.personality_value),
            seed: 0,
        }
    }

    fn entry_mut(&mut self, stat: &StatId) -> Result<&mut StatEntry, StatError> {
        self.entries
            .iter_mut()
            .find(|entry| &entry.stat == stat)
            .ok_or_else(|| StatError::NoStatEntry(stat.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        NatureTable, PcgRng, SpeciesCatalog, SpeciesData, StatTable, TypeChart,
    };
    use crate::exp::GrowthRate;
    use crate::stats::{NatureStatChange, StatDefinition};

    struct Fixture {
        species: SpeciesCatalog,
        natures: NatureTable,
        types: TypeChart,
        stats: StatTable,
        config: GameConfig,
        rng: PcgRng,
    }

    impl Fixture {
        fn new() -> Self {
            let stats = StatTable::new([
                StatDefinition::new("HP", "HP", StatKind::Main, 0),
                StatDefinition::new("ATTACK", "Attack", StatKind::MainBattle, 1),
                StatDefinition::new("DEFENSE", "Defense", StatKind::MainBattle, 2),
                StatDefinition::new("SPECIAL_ATTACK", "Sp. Atk", StatKind::MainBattle, 3),
                StatDefinition::new("SPECIAL_DEFENSE", "Sp. Def", StatKind::MainBattle, 4),
                StatDefinition::new("SPEED", "Speed", StatKind::MainBattle, 5),
                StatDefinition::new("ACCURACY", "Accuracy", StatKind::Battle, 6),
                StatDefinition::new("EVASION", "Evasion", StatKind::Battle, 7),
            ]);

            let garchomp = SpeciesData::new(
                "GARCHOMP",
                "Garchomp",
                vec!["DRAGON".into(), "GROUND".into()],
                GrowthRate::Slow,
            )
            .with_base_stat("HP", 108)
            .with_base_stat("ATTACK", 130)
            .with_base_stat("DEFENSE", 95)
            .with_base_stat("SPECIAL_ATTACK", 80)
            .with_base_stat("SPECIAL_DEFENSE", 85)
            .with_base_stat("SPEED", 102);
            let incomplete = SpeciesData::new("MISSINGNO", "MissingNo", vec![], GrowthRate::Fast)
                .with_base_stat("HP", 33);

            Self {
                species: SpeciesCatalog::new([garchomp, incomplete]),
                natures: NatureTable::new(standard_natures()),
                types: TypeChart::default(),
                stats,
                config: GameConfig::default(),
                rng: PcgRng,
            }
        }

        fn env(&self) -> GameEnv<'_> {
            crate::env::Env::with_all(
                &self.species,
                &self.natures,
                &self.types,
                &self.stats,
                &self.config,
                &self.rng,
            )
            .into_game_env()
        }
    }

    fn standard_natures() -> Vec<Nature> {
        const ROWS: [(&str, Option<(&str, &str)>); 25] = [
            ("HARDY", None),
            ("LONELY", Some(("ATTACK", "DEFENSE"))),
            ("BRAVE", Some(("ATTACK", "SPEED"))),
            ("ADAMANT", Some(("ATTACK", "SPECIAL_ATTACK"))),
            ("NAUGHTY", Some(("ATTACK", "SPECIAL_DEFENSE"))),
            ("BOLD", Some(("DEFENSE", "ATTACK"))),
            ("DOCILE", None),
            ("RELAXED", Some(("DEFENSE", "SPEED"))),
            ("IMPISH", Some(("DEFENSE", "SPECIAL_ATTACK"))),
            ("LAX", Some(("DEFENSE", "SPECIAL_DEFENSE"))),
            ("TIMID", Some(("SPEED", "ATTACK"))),
            ("HASTY", Some(("SPEED", "DEFENSE"))),
            ("SERIOUS", None),
            ("JOLLY", Some(("SPEED", "SPECIAL_ATTACK"))),
            ("NAIVE", Some(("SPEED", "SPECIAL_DEFENSE"))),
            ("MODEST", Some(("SPECIAL_ATTACK", "ATTACK"))),
            ("MILD", Some(("SPECIAL_ATTACK", "DEFENSE"))),
            ("QUIET", Some(("SPECIAL_ATTACK", "SPEED"))),
            ("BASHFUL", None),
            ("RASH", Some(("SPECIAL_ATTACK", "SPECIAL_DEFENSE"))),
            ("CALM", Some(("SPECIAL_DEFENSE", "ATTACK"))),
            ("GENTLE", Some(("SPECIAL_DEFENSE", "DEFENSE"))),
            ("SASSY", Some(("SPECIAL_DEFENSE", "SPEED"))),
            ("CAREFUL", Some(("SPECIAL_DEFENSE", "SPECIAL_ATTACK"))),
            ("QUIRKY", None),
        ];
        ROWS.iter()
            .map(|&(id, changes)| match changes {
                Some((up, down)) => Nature::new(
                    id,
                    id,
                    vec![
                        NatureStatChange::new(up, 10),
                        NatureStatChange::new(down, -10),
                    ],
                ),
                None => Nature::neutral(id, id),
            })
            .collect()
    }

    fn garchomp_spec() -> StatBlockSpec {
        StatBlockSpec::new("GARCHOMP", 78)
            .with_nature("ADAMANT")
            .with_iv("HP", 24)
            .with_iv("ATTACK", 12)
            .with_iv("DEFENSE", 30)
            .with_iv("SPECIAL_ATTACK", 16)
            .with_iv("SPECIAL_DEFENSE", 23)
            .with_iv("SPEED", 5)
            .with_ev("HP", 74)
            .with_ev("ATTACK", 190)
            .with_ev("DEFENSE", 91)
            .with_ev("SPECIAL_ATTACK", 48)
            .with_ev("SPECIAL_DEFENSE", 84)
            .with_ev("SPEED", 23)
    }

    fn values(block: &StatBlock) -> Vec<(&str, i32)> {
        block
            .entries()
            .iter()
            .map(|entry| (entry.stat.as_str(), entry.value))
            .collect()
    }

    #[test]
    fn garchomp_golden_scenario() {
        let fixture = Fixture::new();
        let block = StatBlock::new(&garchomp_spec(), &fixture.env()).unwrap();

        assert_eq!(
            values(&block),
            [
                ("HP", 289),
                ("ATTACK", 278),
                ("DEFENSE", 193),
                ("SPECIAL_ATTACK", 135),
                ("SPECIAL_DEFENSE", 171),
                ("SPEED", 171),
            ]
        );
        assert_eq!(block.level(), 78);
        assert_eq!(block.exp(), 593190);
        assert_eq!(block.exp_for_next_level(), 616298);
        assert_eq!(block.exp_percent(), 0.0);
        assert_eq!(block.total_evs(), 510);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();
        let first = block.clone();

        block.calculate_stats(&env).unwrap();
        assert_eq!(block, first);
        block.calculate_stats(&env).unwrap();
        assert_eq!(block, first);
    }

    #[test]
    fn battle_stats_have_no_entry() {
        let fixture = Fixture::new();
        let block = StatBlock::new(&garchomp_spec(), &fixture.env()).unwrap();

        assert_eq!(block.entries().len(), 6);
        assert_eq!(
            block.stat(&"ACCURACY".into()),
            Err(StatError::NoStatEntry("ACCURACY".into()))
        );
        assert_eq!(block.stat(&"speed".into()).unwrap().value, 171);
    }

    #[test]
    fn nature_is_derived_from_personality_when_unset() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut spec = garchomp_spec().with_personality(25 * 1000 + 3);
        spec.nature = None;

        let derived = StatBlock::new(&spec, &env).unwrap();
        assert_eq!(derived.nature(&env).unwrap().id.as_str(), "ADAMANT");

        let explicit = StatBlock::new(&garchomp_spec(), &env).unwrap();
        assert_eq!(derived.entries(), explicit.entries());
    }

    #[test]
    fn same_personality_always_selects_same_nature() {
        let fixture = Fixture::new();
        let env = fixture.env();
        for personality in [0_u32, 17, 0xCAFE_F00D, u32::MAX] {
            let mut spec = garchomp_spec().with_personality(personality);
            spec.nature = None;
            let a = StatBlock::new(&spec, &env).unwrap();
            let b = StatBlock::new(&spec, &env).unwrap();
            assert_eq!(a.nature(&env).unwrap(), b.nature(&env).unwrap());
        }
    }

    #[test]
    fn exp_below_threshold_is_raised() {
        let fixture = Fixture::new();
        let mut spec = garchomp_spec();
        spec.exp = Some(10);
        let block = StatBlock::new(&spec, &fixture.env()).unwrap();
        assert_eq!(block.exp(), 593190);

        spec.exp = Some(600_000);
        let block = StatBlock::new(&spec, &fixture.env()).unwrap();
        assert_eq!(block.exp(), 600_000);
        assert!(block.exp_percent() > 0.0 && block.exp_percent() < 1.0);
    }

    #[test]
    fn gain_exp_levels_up_and_reports_hp_change() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();

        let changes = block.gain_exp(616298 - 593190, &env).unwrap();
        assert!(changes.leveled_up());
        assert_eq!(changes.level, Change { before: 78, after: 79 });
        assert_eq!(changes.hp_change, 3);
        assert_eq!(
            changes.stat(&"ATTACK".into()),
            Some(&Change {
                before: 278,
                after: 282
            })
        );
        assert_eq!(block.stat(&"HP".into()).unwrap().value, 292);
        assert_eq!(block.exp(), 616298);
    }

    #[test]
    fn gain_exp_without_level_up_keeps_stats() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();

        let changes = block.gain_exp(100, &env).unwrap();
        assert!(!changes.leveled_up());
        assert_eq!(changes.hp_change, 0);
        assert!(changes.stats.iter().all(|row| row.change.diff() == 0));
        assert_eq!(block.exp(), 593290);
    }

    #[test]
    fn gain_exp_stops_at_level_cap() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();

        let changes = block.gain_exp(i32::MAX, &env).unwrap();
        assert_eq!(changes.level.after, 100);
        assert_eq!(block.exp(), 1_250_000);
        assert_eq!(block.exp_for_next_level(), 0);
        assert_eq!(block.exp_percent(), 0.0);
    }

    #[test]
    fn set_level_clamps_and_resets_exp() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();

        block.set_level(150, &env).unwrap();
        assert_eq!((block.level(), block.exp()), (100, 1_250_000));

        block.set_level(0, &env).unwrap();
        assert_eq!((block.level(), block.exp()), (1, 0));
        assert_eq!(block.stat(&"HP".into()).unwrap().value, 13);
    }

    #[test]
    fn set_exp_rederives_level() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();

        block.set_exp(616298, &env).unwrap();
        assert_eq!(block.level(), 79);
        assert_eq!(block.stat(&"HP".into()).unwrap().value, 292);

        block.set_exp(-5, &env).unwrap();
        assert_eq!((block.level(), block.exp()), (1, 0));
    }

    #[test]
    fn iv_and_ev_setters_clamp() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();
        let speed = StatId::new("SPEED");

        block.set_iv(&speed, 40).unwrap();
        block.set_ev(&speed, 300, fixture.config.max_ev).unwrap();
        assert_eq!(block.stat(&speed).unwrap().iv, 31);
        assert_eq!(block.stat(&speed).unwrap().ev, 252);
        assert_eq!(block.total_evs(), 510 - 23 + 252);

        block.set_ev(&speed, -1, 252).unwrap();
        assert_eq!(block.stat(&speed).unwrap().ev, 0);

        assert_eq!(
            block.set_iv(&"ACCURACY".into(), 3),
            Err(StatError::NoStatEntry("ACCURACY".into()))
        );
    }

    #[test]
    fn spec_evs_are_clamped_to_config_cap() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let spec = StatBlockSpec::new("GARCHOMP", 100)
            .with_nature("HARDY")
            .with_iv("HP", 31)
            .with_iv("ATTACK", 31)
            .with_ev("HP", 100_000_000)
            .with_ev("ATTACK", -40);

        let block = StatBlock::new(&spec, &env).unwrap();
        let hp = block.stat(&"HP".into()).unwrap();
        let attack = block.stat(&"ATTACK".into()).unwrap();
        assert_eq!((hp.ev, attack.ev), (252, 0));
        // (216 + 31 + 63) * 100 / 100 + 100 + 10
        assert_eq!(hp.value, 420);
        // (260 + 31 + 0) * 100 / 100 + 5
        assert_eq!(attack.value, 296);
    }

    #[test]
    fn iv_override_replaces_stored_iv() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();
        let attack = StatId::new("ATTACK");

        block.set_iv_override(&attack, 40).unwrap();
        block.calculate_stats(&env).unwrap();
        assert_eq!(block.iv_override(&attack), Ok(Some(31)));
        assert_eq!(block.effective_iv(&attack), Ok(31));
        assert_eq!(block.stat(&attack).unwrap().iv, 12);
        assert_eq!(block.stat(&attack).unwrap().value, 294);

        let rebuilt = StatBlock::new(&block.to_spec(), &env).unwrap();
        assert_eq!(rebuilt, block);

        block.clear_iv_override(&attack).unwrap();
        block.calculate_stats(&env).unwrap();
        assert_eq!(block.iv_override(&attack), Ok(None));
        assert_eq!(block.stat(&attack).unwrap().value, 278);
        assert_eq!(
            block.set_iv_override(&"EVASION".into(), 1),
            Err(StatError::NoStatEntry("EVASION".into()))
        );
    }

    #[test]
    fn spec_iv_overrides_apply_on_construction() {
        let fixture = Fixture::new();
        let spec = garchomp_spec().with_iv_override("ATTACK", 31);
        let block = StatBlock::new(&spec, &fixture.env()).unwrap();
        assert_eq!(block.effective_iv(&"ATTACK".into()), Ok(31));
        assert_eq!(block.stat(&"ATTACK".into()).unwrap().value, 294);
    }

    #[test]
    fn failed_recalculation_leaves_block_unchanged() {
        let fixture = Fixture::new();
        let mut block = StatBlock::new(&garchomp_spec(), &fixture.env()).unwrap();
        let snapshot = block.clone();
        let without_natures = crate::env::Env::new(
            Some(&fixture.species),
            None::<&NatureTable>,
            Some(&fixture.types),
            Some(&fixture.stats),
            Some(&fixture.config),
            Some(&fixture.rng),
        )
        .into_game_env();
        let missing = Err(StatError::Oracle(OracleError::NaturesNotAvailable));

        assert_eq!(
            block.gain_exp(616298 - 593190, &without_natures).map(|_| ()),
            missing
        );
        assert_eq!(block, snapshot);
        assert_eq!(block.set_exp(1_000_000, &without_natures), missing);
        assert_eq!(block, snapshot);
        assert_eq!(block.set_level(90, &without_natures), missing);
        assert_eq!(block, snapshot);
    }

    #[test]
    fn missing_ivs_are_generated_deterministically() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let spec = StatBlockSpec::new("GARCHOMP", 50).with_seed(2024);

        let a = StatBlock::new(&spec, &env).unwrap();
        let b = StatBlock::new(&spec, &env).unwrap();
        assert_eq!(a, b);
        assert!(
            a.entries()
                .iter()
                .all(|entry| (0..=GameConfig::MAX_IV).contains(&entry.iv))
        );
    }

    #[test]
    fn spec_round_trip_rebuilds_block() {
        let fixture = Fixture::new();
        let env = fixture.env();
        let mut block = StatBlock::new(&garchomp_spec(), &env).unwrap();
        block.gain_exp(5000, &env).unwrap();

        let rebuilt = StatBlock::new(&block.to_spec(), &env).unwrap();
        assert_eq!(rebuilt, block);
    }

    #[test]
    fn lookup_failures_are_typed() {
        let fixture = Fixture::new();
        let env = fixture.env();

        assert_eq!(
            StatBlock::new(&StatBlockSpec::new("MEW", 5), &env),
            Err(StatError::Oracle(OracleError::SpeciesNotFound(
                "MEW".into()
            )))
        );
        assert_eq!(
            StatBlock::new(&StatBlockSpec::new("GARCHOMP", 101), &env),
            Err(StatError::Exp(ExpError::InvalidLevel {
                level: 101,
                max_level: 100
            }))
        );
        assert_eq!(
            StatBlock::new(&StatBlockSpec::new("MISSINGNO", 5).with_personality(0), &env),
            Err(StatError::Oracle(OracleError::MissingBaseStat {
                species: "MISSINGNO".into(),
                stat: "ATTACK".into()
            }))
        );
        assert_eq!(
            StatBlock::new(&garchomp_spec().with_nature("STUBBORN"), &env),
            Err(StatError::Oracle(OracleError::NatureNotFound(
                "STUBBORN".into()
            )))
        );
    }

    #[test]
    fn error_codes_delegate_to_source() {
        let err = StatError::from(OracleError::EmptyNatureTable);
        assert_eq!(err.error_code(), "ORACLE_EMPTY_NATURE_TABLE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            StatError::NoStatEntry("HP".into()).error_code(),
            "STAT_NO_ENTRY"
        );
        let err = StatError::NoFormula("ACCURACY".into());
        assert_eq!(err.error_code(), "STAT_NO_FORMULA");
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }
}
