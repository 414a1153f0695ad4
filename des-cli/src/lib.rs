//! Front ends for the `des-ecb` cipher: the `des` command line and the
//! text/hex helpers a windowed front end would call.

pub mod cli;
pub mod frontend;
