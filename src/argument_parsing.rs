use clap::Parser;

/// Report on the news database, either interactively or for a single query
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postgres database name, connected with the default local parameters
    #[arg(short, long, env = "NEWS_DBNAME", default_value = "news")]
    pub dbname: String,

    /// Postgres Db Connection String, takes precedence over --dbname
    #[arg(short, long, env = "NEWS_PG", default_value = None)]
    pub pg: Option<String>,

    /// Sqlite Db file, used instead of Postgres
    #[arg(short, long, env = "NEWS_SQLITE", default_value = None, conflicts_with = "pg")]
    pub sqlite: Option<String>,

    /// Run one report (1, 2 or 3) and exit instead of showing the menu
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub report: Option<u8>,
}
