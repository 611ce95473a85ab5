use std::net::SocketAddr;

use clap::Parser;

/// Server configuration, read from the command line with
/// environment variable fallbacks.
#[derive(Parser, Debug, Clone)]
#[clap(name = "roster-api", version = env!("CARGO_PKG_VERSION"))]
pub struct Config {
    /// SQLite database holding the members
    #[clap(long, env = "ROSTER_MEMBERS_DB", default_value = "members.sqlite3")]
    pub members_db: String,

    /// Address the HTTP server binds to
    #[clap(long, env = "ROSTER_LISTEN", default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,
}

impl Config {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["roster-api"]);
        assert_eq!(config.members_db, "members.sqlite3");
        assert_eq!(config.listen.port(), 3000);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "roster-api",
            "--members-db",
            "/var/lib/roster/members.sqlite3",
            "--listen",
            "127.0.0.1:8080",
        ]);
        assert_eq!(config.members_db, "/var/lib/roster/members.sqlite3");
        assert_eq!(config.listen.to_string(), "127.0.0.1:8080");
    }
}
