use crate::domain::ports::MarkerProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_marker_name, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "rupiah-fmt")]
#[command(about = "Rupiah input masking and display formatting toolkit")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Marker class for editable inputs that get live masking
    #[arg(long, global = true, default_value = "rupiah-input")]
    pub input_marker: String,

    /// Marker class for read-only elements formatted once at init
    #[arg(long, global = true, default_value = "rupiah-text")]
    pub text_marker: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format a raw amount as a prefixed, grouped string
    Format { amount: u64 },

    /// Strip a masked or free-form string back to its raw amount
    Extract { text: String },

    /// Load a TOML page description and run field initialization over it
    Render {
        /// Path of the page file
        #[arg(long)]
        page: String,

        /// Emit the rendered fields as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Replay a keystroke sequence against one masked input, printing
    /// the field text after every input event
    Simulate {
        /// Characters to type, in order (digits and anything else)
        keys: String,
    },

    /// Evaluate the withdrawal guard for a balance attribute value
    Guard {
        /// Balance as read off the triggering control; omit to simulate
        /// a missing attribute
        saldo: Option<String>,
    },
}

impl MarkerProvider for CliConfig {
    fn input_marker(&self) -> &str {
        &self.input_marker
    }

    fn text_marker(&self) -> &str {
        &self.text_marker
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_marker_name("input_marker", &self.input_marker)?;
        validate_marker_name("text_marker", &self.text_marker)?;
        Ok(())
    }
}
