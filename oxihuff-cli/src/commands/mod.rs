//! Command implementations for OxiHuff CLI.

pub mod decode;
pub mod encode;
pub mod info;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use info::cmd_info;
pub use test::cmd_test;

use clap::ValueEnum;
use oxihuff::BodyFormat;

/// Body representation selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BodyArg {
    /// ASCII '0'/'1' per code bit
    #[default]
    Text,
    /// Code bits packed into bytes
    Packed,
}

impl From<BodyArg> for BodyFormat {
    fn from(arg: BodyArg) -> Self {
        match arg {
            BodyArg::Text => BodyFormat::Text,
            BodyArg::Packed => BodyFormat::Packed,
        }
    }
}
