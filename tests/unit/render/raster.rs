use super::*;
use crate::{chain::manager::TrackChain, foundation::color::Cell};

fn small() -> RenderSettings {
    RenderSettings {
        width: 40,
        track_height: 10,
        gap: 2,
        background: Rgb8::new(1, 2, 3),
        outline: None,
    }
}

fn rgba(c: Rgb8) -> Option<[u8; 4]> {
    Some(c.to_rgba8())
}

#[test]
fn strips_cells_and_gaps_land_where_expected() {
    let mut chain = TrackChain::initialize(4).unwrap();
    chain.append_track(2).unwrap();
    let snap = chain.snapshot();

    let img = render_snapshot(&snap, &small()).unwrap();
    assert_eq!((img.width, img.height), (40, 22));
    assert_eq!(img.data.len(), 40 * 22 * 4);

    let base = &snap.tracks[0].values;
    assert_eq!(img.pixel(5, 5), rgba(base[0].display_color()));
    assert_eq!(img.pixel(15, 5), rgba(base[1].display_color()));
    assert_eq!(img.pixel(39, 9), rgba(base[3].display_color()));

    // Gap rows between strips keep the background.
    assert_eq!(img.pixel(5, 10), rgba(Rgb8::new(1, 2, 3)));
    assert_eq!(img.pixel(5, 11), rgba(Rgb8::new(1, 2, 3)));

    // Second track is all blank, drawn white.
    assert_eq!(img.pixel(5, 15), rgba(Rgb8::WHITE));
    assert_eq!(img.pixel(35, 21), rgba(Rgb8::WHITE));

    assert_eq!(img.pixel(40, 0), None);
    assert_eq!(img.pixel(0, 22), None);
}

#[test]
fn outlines_frame_each_cell() {
    let chain = TrackChain::initialize(4).unwrap();
    let settings = RenderSettings {
        outline: Some(Rgb8::BLACK),
        ..small()
    };
    let img = render_snapshot(&chain.snapshot(), &settings).unwrap();
    let red = chain.track(0).unwrap().values()[0].display_color();

    assert_eq!(img.pixel(0, 0), rgba(Rgb8::BLACK));
    assert_eq!(img.pixel(9, 5), rgba(Rgb8::BLACK));
    assert_eq!(img.pixel(10, 5), rgba(Rgb8::BLACK));
    assert_eq!(img.pixel(5, 9), rgba(Rgb8::BLACK));
    assert_eq!(img.pixel(5, 5), rgba(red));
}

#[test]
fn dense_tracks_do_not_panic() {
    let chain = TrackChain::from_resolutions(Default::default(), 100, &[97]).unwrap();
    let settings = RenderSettings {
        width: 10,
        ..small()
    };
    let img = render_snapshot(&chain.snapshot(), &settings).unwrap();
    assert_eq!(img.width, 10);
}

#[test]
fn rejects_degenerate_inputs() {
    let snap = ChainSnapshot { tracks: Vec::new() };
    assert!(render_snapshot(&snap, &small()).is_err());

    let snap = ChainSnapshot {
        tracks: vec![TrackSnapshot {
            res: 1,
            base: true,
            values: vec![Cell::Blank],
        }],
    };
    let zero_width = RenderSettings {
        width: 0,
        ..small()
    };
    assert!(render_snapshot(&snap, &zero_width).is_err());
    let tall = RenderSettings {
        track_height: u32::MAX,
        ..small()
    };
    assert!(render_snapshot(&snap, &tall).is_err());
}
