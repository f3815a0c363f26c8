use std::{ops::RangeInclusive, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    chain::manager::TrackChain,
    foundation::error::{CascadeError, CascadeResult},
    resample::gradient::Gradient,
};

/// Resolution of the base track when none is given.
pub const DEFAULT_BASE_RES: usize = 4;
/// Resolution of a freshly added track.
pub const DEFAULT_TRACK_RES: usize = 4;
/// Resolutions reachable from the interactive slider.
pub const SLIDER_RANGE: RangeInclusive<usize> = 1..=100;

/// Declarative description of a chain: base gradient, appended tracks, then edits.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Resolution of the base track.
    pub base_res: usize,
    /// Base gradient endpoints.
    #[serde(default)]
    pub gradient: Gradient,
    /// Resolutions of the tracks appended after the base, in order.
    #[serde(default)]
    pub tracks: Vec<usize>,
    /// Resolution changes replayed after all tracks are appended.
    #[serde(default)]
    pub edits: Vec<ResolutionEdit>,
}

/// A single resolution change, as produced by moving one track's slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolutionEdit {
    /// Track index (0 = base).
    pub track: usize,
    /// New resolution.
    pub res: usize,
}

impl FromStr for ResolutionEdit {
    type Err = CascadeError;

    /// Parses `TRACK:RES`, e.g. `0:6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (track, res) = s
            .split_once(':')
            .ok_or_else(|| CascadeError::validation(format!("edit '{s}' must be TRACK:RES")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| CascadeError::validation(format!("edit '{s}': {e}")))
        };
        Ok(Self {
            track: parse(track)?,
            res: parse(res)?,
        })
    }
}

impl ChainConfig {
    /// Config with only a default-gradient base track.
    pub fn new(base_res: usize) -> Self {
        Self {
            base_res,
            gradient: Gradient::default(),
            tracks: Vec::new(),
            edits: Vec::new(),
        }
    }

    /// Parse a JSON config.
    pub fn from_json_str(s: &str) -> CascadeResult<Self> {
        serde_json::from_str(s).map_err(|e| CascadeError::serde(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> CascadeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("open chain config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check resolutions and edit targets without building anything.
    pub fn validate(&self) -> CascadeResult<()> {
        if self.base_res == 0 {
            return Err(CascadeError::validation("base_res must be > 0"));
        }
        for (i, &res) in self.tracks.iter().enumerate() {
            if res == 0 {
                return Err(CascadeError::validation(format!(
                    "tracks[{i}] resolution must be > 0"
                )));
            }
        }

        let track_count = self.tracks.len() + 1;
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.track >= track_count {
                return Err(CascadeError::validation(format!(
                    "edits[{i}] targets track {} but the chain has {track_count} tracks",
                    edit.track
                )));
            }
            if edit.res == 0 {
                return Err(CascadeError::validation(format!(
                    "edits[{i}] resolution must be > 0"
                )));
            }
        }

        let all = std::iter::once(self.base_res)
            .chain(self.tracks.iter().copied())
            .chain(self.edits.iter().map(|e| e.res));
        for res in all {
            if !SLIDER_RANGE.contains(&res) {
                tracing::warn!(res, "resolution outside slider range {:?}", SLIDER_RANGE);
            }
        }

        Ok(())
    }

    /// Validate, then build the chain and replay the edits in order.
    #[tracing::instrument(skip(self), fields(tracks = self.tracks.len(), edits = self.edits.len()))]
    pub fn build(&self) -> CascadeResult<TrackChain> {
        self.validate()?;
        let mut chain = TrackChain::from_resolutions(self.gradient, self.base_res, &self.tracks)?;
        for edit in &self.edits {
            chain.set_resolution(edit.track, edit.res)?;
        }
        Ok(chain)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
