//! Traits describing read-only reference data.
//!
//! Oracles expose species rows, the nature table, type match-ups, stat
//! classifications, and rule configuration. The [`Env`] aggregate bundles
//! them so the calculators can reach everything they need without hard
//! coupling to concrete implementations.
mod catalog;
mod config;
mod error;
mod natures;
mod rng;
mod species;
mod stats;
mod types;

pub use catalog::{NatureTable, SpeciesCatalog, StatTable, TypeChart};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use natures::NatureOracle;
pub use rng::{PcgRng, RngOracle, compute_seed, seed_context};
pub use species::{SpeciesData, SpeciesOracle};
pub use stats::StatOracle;
pub use types::TypeOracle;

/// Aggregates read-only oracles required by the stat and type calculators.
pub struct Env<'a, S, N, T, St, C, R>
where
    S: SpeciesOracle + ?Sized,
    N: NatureOracle + ?Sized,
    T: TypeOracle + ?Sized,
    St: StatOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    species: Option<&'a S>,
    natures: Option<&'a N>,
    types: Option<&'a T>,
    stats: Option<&'a St>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn SpeciesOracle + 'a,
    dyn NatureOracle + 'a,
    dyn TypeOracle + 'a,
    dyn StatOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

// Manual impls: only references are copied, so the oracles need not be `Clone`.
impl<S, N, T, St, C, R> Clone for Env<'_, S, N, T, St, C, R>
where
    S: SpeciesOracle + ?Sized,
    N: NatureOracle + ?Sized,
    T: TypeOracle + ?Sized,
    St: StatOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, N, T, St, C, R> Copy for Env<'_, S, N, T, St, C, R>
where
    S: SpeciesOracle + ?Sized,
    N: NatureOracle + ?Sized,
    T: TypeOracle + ?Sized,
    St: StatOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, S, N, T, St, C, R> Env<'a, S, N, T, St, C, R>
where
    S: SpeciesOracle + ?Sized,
    N: NatureOracle + ?Sized,
    T: TypeOracle + ?Sized,
    St: StatOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        species: Option<&'a S>,
        natures: Option<&'a N>,
        types: Option<&'a T>,
        stats: Option<&'a St>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            species,
            natures,
            types,
            stats,
            config,
            rng,
        }
    }

    pub fn with_all(
        species: &'a S,
        natures: &'a N,
        types: &'a T,
        stats: &'a St,
        config: &'a C,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(species),
            Some(natures),
            Some(types),
            Some(stats),
            Some(config),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            species: None,
            natures: None,
            types: None,
            stats: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the SpeciesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpeciesNotAvailable` if no species oracle was provided.
    pub fn species(&self) -> Result<&'a S, OracleError> {
        self.species.ok_or(OracleError::SpeciesNotAvailable)
    }

    /// Returns the NatureOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::NaturesNotAvailable` if no nature oracle was provided.
    pub fn natures(&self) -> Result<&'a N, OracleError> {
        self.natures.ok_or(OracleError::NaturesNotAvailable)
    }

    /// Returns the TypeOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TypesNotAvailable` if no type oracle was provided.
    pub fn types(&self) -> Result<&'a T, OracleError> {
        self.types.ok_or(OracleError::TypesNotAvailable)
    }

    /// Returns the StatOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StatsNotAvailable` if no stat oracle was provided.
    pub fn stats(&self) -> Result<&'a St, OracleError> {
        self.stats.ok_or(OracleError::StatsNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the configured level cap.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn max_level(&self) -> Result<i32, OracleError> {
        Ok(self.config()?.max_level())
    }
}

impl<'a, S, N, T, St, C, R> Env<'a, S, N, T, St, C, R>
where
    S: SpeciesOracle + 'a,
    N: NatureOracle + 'a,
    T: TypeOracle + 'a,
    St: StatOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let species: Option<&'a dyn SpeciesOracle> = self.species.map(|species| species as _);
        let natures: Option<&'a dyn NatureOracle> = self.natures.map(|natures| natures as _);
        let types: Option<&'a dyn TypeOracle> = self.types.map(|types| types as _);
        let stats: Option<&'a dyn StatOracle> = self.stats.map(|stats| stats as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(species, natures, types, stats, config, rng)
    }
}
