use crate::foundation::color::Cell;

/// Owned, serializable view of a whole chain, base track first.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChainSnapshot {
    /// Tracks in chain order.
    pub tracks: Vec<TrackSnapshot>,
}

/// One track of a [`ChainSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackSnapshot {
    /// Number of cells.
    pub res: usize,
    /// `true` for the gradient track.
    pub base: bool,
    /// Cells, `null` in JSON where blank.
    pub values: Vec<Cell>,
}
