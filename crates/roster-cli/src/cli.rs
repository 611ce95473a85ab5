
use clap::{Parser, Subcommand};

use crate::commands::{Init, Members, Reset, Status};

#[derive(Parser, Debug)]
#[clap(name = "roster", version=env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(long, env = "ROSTER_MEMBERS_DB", default_value = "members.sqlite3")]
    pub members_db: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}


#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the database schema
    #[clap(name = "init")]
    Init(Init),

    /// Show member counts and the last semester reset
    #[clap(name = "status")]
    Status(Status),

    /// Semester reset: clear dues and groups of all members
    #[clap(name = "reset")]
    Reset(Reset),

    /// Manage members
    #[clap(subcommand)]
    Members(Members),
}
