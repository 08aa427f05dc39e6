//! CLI argument definitions using clap derive API

use clap::Parser;

/// seam - discovers, verifies, and records SQL migrations
#[derive(Parser, Debug)]
#[command(name = "seam")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database connection string (path to the SQLite database)
    #[arg(long, value_name = "DSN", default_value = "")]
    pub conn: String,

    /// Directory containing NN__title.sql migration files
    #[arg(long, value_name = "PATH", default_value = "")]
    pub dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_flags() {
        let cli = Cli::try_parse_from(["seam", "--conn", "state.db", "--dir", "migrations"])
            .unwrap();
        assert_eq!(cli.conn, "state.db");
        assert_eq!(cli.dir, "migrations");
    }

    #[test]
    fn missing_flags_default_to_empty() {
        // Emptiness is checked in main so the exit code is 1, not clap's 2.
        let cli = Cli::try_parse_from(["seam"]).unwrap();
        assert!(cli.conn.is_empty());
        assert!(cli.dir.is_empty());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["seam", "--retries", "3"]).is_err());
    }
}
