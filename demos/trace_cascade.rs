use cascade::{ChainConfig, palette_indices};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/chain.json");
    let cfg = ChainConfig::from_json_str(s)?;
    let mut chain = cfg.build()?;

    for res in [5usize, 8, 3] {
        chain.set_resolution(1, res)?;
        for (i, t) in chain.tracks().iter().enumerate() {
            println!("res {res} track {i}: {:?}", palette_indices(t.values()));
        }
    }

    Ok(())
}
