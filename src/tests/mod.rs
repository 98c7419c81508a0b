use super::*;

fn d(input: &[u8]) -> Vec<u8> {
    digest(input, &Config::default()).unwrap()
}

fn d_cfg(input: &[u8], cfg: &Config) -> Vec<u8> {
    digest(input, cfg).unwrap()
}

mod config;
mod end_to_end;
mod grouping;
mod invariants;
#[cfg(feature = "logging")]
mod logging;
mod null_folding;
mod split;
