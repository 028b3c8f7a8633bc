//! Board construction options.
//!
//! Defaults describe a standard chess board with the compatibility behavior:
//! lenient FEN parsing and the ownership-only state string. `from_env` lets
//! a host flip either mode without code changes.

use crate::board::board_rules::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::errors::{BoardErrors, BoardResult};
use crate::utils::fen_parser::FenParseMode;
use crate::utils::state_string::StateFormat;

pub const FEN_MODE_ENV: &str = "PLUM_BOARD_FEN_MODE";
pub const STATE_FORMAT_ENV: &str = "PLUM_BOARD_STATE_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub fen_mode: FenParseMode,
    pub state_format: StateFormat,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fen_mode: FenParseMode::Lenient,
            state_format: StateFormat::Ownership,
        }
    }
}

impl BoardConfig {
    /// Defaults overlaid with `PLUM_BOARD_FEN_MODE` and
    /// `PLUM_BOARD_STATE_FORMAT` when they are set.
    pub fn from_env() -> BoardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> BoardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(FEN_MODE_ENV) {
            config.fen_mode = parse_fen_mode(&value)?;
        }
        if let Some(value) = lookup(STATE_FORMAT_ENV) {
            config.state_format = parse_state_format(&value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BoardResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardErrors::InvalidBoardDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn square_count(&self) -> usize {
        self.width * self.height
    }
}

fn parse_fen_mode(value: &str) -> BoardResult<FenParseMode> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("lenient") => Ok(FenParseMode::Lenient),
        v if v.eq_ignore_ascii_case("strict") => Ok(FenParseMode::Strict),
        _ => Err(invalid(FEN_MODE_ENV, value)),
    }
}

fn parse_state_format(value: &str) -> BoardResult<StateFormat> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("ownership") => Ok(StateFormat::Ownership),
        v if v.eq_ignore_ascii_case("notation") => Ok(StateFormat::Notation),
        _ => Err(invalid(STATE_FORMAT_ENV, value)),
    }
}

fn invalid(key: &str, value: &str) -> BoardErrors {
    BoardErrors::InvalidConfigValue {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}
