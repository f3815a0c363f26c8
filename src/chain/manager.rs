use crate::{
    chain::{
        snapshot::{ChainSnapshot, TrackSnapshot},
        track::Track,
    },
    foundation::error::{CascadeError, CascadeResult, ensure_len},
    resample::{gradient::Gradient, sampler::resample},
};

/// Ordered tracks where every track after the first is resampled from its predecessor.
///
/// Index 0 is always the base gradient track. All mutations validate their arguments
/// before touching any track, so a rejected call leaves the chain as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackChain {
    gradient: Gradient,
    tracks: Vec<Track>,
}

impl TrackChain {
    /// Chain holding only a base track of `base_len` cells of the default gradient.
    pub fn initialize(base_len: usize) -> CascadeResult<Self> {
        Self::with_gradient(Gradient::default(), base_len)
    }

    /// Chain holding only a base track of `base_len` cells of `gradient`.
    pub fn with_gradient(gradient: Gradient, base_len: usize) -> CascadeResult<Self> {
        ensure_len(base_len)?;
        let base = Track::base(&gradient, base_len);
        Ok(Self {
            gradient,
            tracks: vec![base],
        })
    }

    /// Base track of `base_len` followed by one appended track per entry of `resolutions`.
    pub fn from_resolutions(
        gradient: Gradient,
        base_len: usize,
        resolutions: &[usize],
    ) -> CascadeResult<Self> {
        let mut chain = Self::with_gradient(gradient, base_len)?;
        for &res in resolutions {
            chain.append_track(res)?;
        }
        Ok(chain)
    }

    /// Append a track of `res` cells resampled from the current last track.
    ///
    /// Returns the index of the new track.
    #[tracing::instrument(skip(self))]
    pub fn append_track(&mut self, res: usize) -> CascadeResult<usize> {
        ensure_len(res)?;
        let track = Track::derived(self.last(), res);
        tracing::debug!(blanks = track.blank_count(), "appended track");
        self.tracks.push(track);
        Ok(self.tracks.len() - 1)
    }

    /// Change the resolution of track `index` and refresh every track after it.
    ///
    /// The base track is regenerated from the gradient; any other track is resampled
    /// from its predecessor. Downstream tracks keep their resolutions and are
    /// recomputed in index order.
    #[tracing::instrument(skip(self))]
    pub fn set_resolution(&mut self, index: usize, res: usize) -> CascadeResult<()> {
        if index >= self.tracks.len() {
            return Err(CascadeError::invalid_index(index, self.tracks.len()));
        }
        ensure_len(res)?;

        let track = if index == 0 {
            Track::base(&self.gradient, res)
        } else {
            Track::derived(&self.tracks[index - 1], res)
        };
        self.tracks[index] = track;
        self.refresh_after(index);
        Ok(())
    }

    fn refresh_after(&mut self, index: usize) {
        for j in index + 1..self.tracks.len() {
            let (done, rest) = self.tracks.split_at_mut(j);
            let res = rest[0].res();
            rest[0].set_values(resample(done[j - 1].values(), res));
            tracing::trace!(track = j, res, "recomputed");
        }
        tracing::debug!(
            from = index,
            refreshed = self.tracks.len() - index - 1,
            "cascade done"
        );
    }

    /// Owned copy of every track, base first.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            tracks: self
                .tracks
                .iter()
                .map(|t| TrackSnapshot {
                    res: t.res(),
                    base: t.is_base(),
                    values: t.values().to_vec(),
                })
                .collect(),
        }
    }

    /// Tracks in chain order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at `index`, if any.
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks, base included. Never zero.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Gradient used for the base track.
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    /// `true` when the base matches the gradient and every other track equals the
    /// resampling of its predecessor at its own resolution.
    pub fn is_consistent(&self) -> bool {
        let Some((base, rest)) = self.tracks.split_first() else {
            return false;
        };
        if !base.is_base() || base.values() != self.gradient.cells(base.res()).as_slice() {
            return false;
        }

        let mut prev = base;
        for t in rest {
            if t.is_base() || t.values() != resample(prev.values(), t.res()).as_slice() {
                return false;
            }
            prev = t;
        }
        true
    }

    fn last(&self) -> &Track {
        // The base track is never removed.
        &self.tracks[self.tracks.len() - 1]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/manager.rs"]
mod tests;
