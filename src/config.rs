//! Runtime settings. There are no flags; these defaults are the program's
//! fixed behaviour, with `RUST_LOG` able to raise the log level.

use std::{path::PathBuf, time::Duration};

use crate::draw::FRAME_DELAY;

/// File the initial state is read from, relative to the working directory.
pub const INPUT_PATH: &str = "src/1.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub frame_delay: Duration,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(INPUT_PATH),
            frame_delay: FRAME_DELAY,
            log_filter: String::from("warn"),
        }
    }
}
