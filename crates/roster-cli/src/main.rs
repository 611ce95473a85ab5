
use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use roster_db::Connection;
use roster_membership::MemberService;
use roster_cli::cli::{Command, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::init();

    let conn = Connection::open(&cli.members_db).await?;
    let members = MemberService::new(conn.clone());
    let result = match cli.command {
        Command::Init(cmd) => cmd.run(&conn).await,
        Command::Status(cmd) => cmd.run(&members).await,
        Command::Reset(cmd) => cmd.run(&members).await,
        Command::Members(cmd) => cmd.run(&members).await,
    };

    drop(members);
    conn.close().await?;
    result
}
