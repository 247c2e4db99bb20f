use clap::Parser;

use passmint::{GenError, PasswordConfig};

/// Generate passwords that contain every enabled character class.
///
/// Run without arguments on a terminal to open the interactive form.
#[derive(Debug, Parser)]
#[command(name = "passmint", version)]
pub struct Args {
    /// Characters per password (at least 4) [default: 6]
    #[arg(short, long, env = "PASSMINT_LENGTH")]
    pub length: Option<usize>,

    /// How many passwords to generate, all distinct
    #[arg(short, long, env = "PASSMINT_NUMBER", default_value_t = 1)]
    pub number: usize,

    /// Leave out capital letters (A-Z, Ñ)
    #[arg(long)]
    pub no_capital: bool,

    /// Leave out lowercase letters (a-z, ñ)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_number: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print ✱ in place of each character
    #[arg(short, long)]
    pub mask: bool,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    pub fn config(&self) -> PasswordConfig {
        let defaults = PasswordConfig::default();
        PasswordConfig {
            length: self.length.unwrap_or(defaults.length),
            has_capital: !self.no_capital,
            has_lowercase: !self.no_lowercase,
            has_number: !self.no_number,
            has_special: !self.no_special,
        }
    }

    /// Config to open the form with. The form can never switch the last class
    /// off, so it must not start with none.
    pub fn interactive_config(&self) -> Result<PasswordConfig, GenError> {
        let config = self.config();
        if config.enabled_count() == 0 {
            return Err(GenError::InvalidConfiguration(
                "at least one character class must be enabled".into(),
            ));
        }
        Ok(config)
    }
}
