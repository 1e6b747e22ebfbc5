// src/cli/commands.rs
use clap::{Subcommand, ValueEnum};
use crate::models::{GenerationRequest, SymbolGroupSelection};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },

    /// Generate a password locally (not recorded in any history)
    Generate(GenerateArgs),

    /// Score a password
    Analyze {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (4-100)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Restrict symbols to these groups (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub groups: Option<Vec<SymbolGroup>>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolGroup {
    Punctuation,
    Brackets,
    Math,
    Special,
    Other,
}

impl GenerateArgs {
    pub fn to_request(&self, default_length: usize) -> GenerationRequest {
        let symbol_groups = self.groups.as_ref().map(|groups| SymbolGroupSelection {
            punctuation: groups.contains(&SymbolGroup::Punctuation),
            brackets: groups.contains(&SymbolGroup::Brackets),
            math: groups.contains(&SymbolGroup::Math),
            special: groups.contains(&SymbolGroup::Special),
            other: groups.contains(&SymbolGroup::Other),
        });

        GenerationRequest {
            length: self.length.unwrap_or(default_length),
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            symbols: !self.no_symbols,
            symbol_groups,
        }
    }
}
