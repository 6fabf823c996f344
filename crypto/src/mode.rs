use super::{CipherError, Result};

use std::fmt;
use std::str::FromStr;

/// Chaining mode symbols. Only [`Mode::Cbc`] can be used for transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cbc,
    Ecb,
    Cfb,
    Ofb,
    Ctr,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Cbc => "cbc",
            Mode::Ecb => "ecb",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        }
    }

    pub(crate) fn require_cbc(self) -> Result<()> {
        match self {
            Mode::Cbc => Ok(()),
            other => Err(CipherError::UnsupportedMode(other.name().to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cbc" => Ok(Mode::Cbc),
            "ecb" => Ok(Mode::Ecb),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            "ctr" => Ok(Mode::Ctr),
            _ => Err(CipherError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod mode_test {
    use super::*;

    #[test]
    fn parse_res() {
        assert_eq!("CBC".parse::<Mode>().unwrap(), Mode::Cbc);
        assert_eq!("ofb".parse::<Mode>().unwrap(), Mode::Ofb);
        assert_eq!(
            "xts".parse::<Mode>().unwrap_err(),
            CipherError::UnsupportedMode("xts".into())
        );
    }

    #[test]
    fn only_cbc_is_usable() {
        assert!(Mode::Cbc.require_cbc().is_ok());
        assert_eq!(
            Mode::Ctr.require_cbc().unwrap_err(),
            CipherError::UnsupportedMode("ctr".into())
        );
    }
}
