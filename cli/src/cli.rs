use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage user records on a roster backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the users API (defaults to http://localhost:3001)
    #[arg(long, env = "ROSTER_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users, one page at a time
    List(ListArgs),
    /// Show a single user
    Show {
        /// User ID
        id: String,
    },
    /// Create a new user
    Create(CreateArgs),
    /// Update fields of an existing user
    Update {
        /// User ID
        id: String,

        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, short = 'p', default_value = "1")]
    pub page: usize,

    /// Rows per page: 5, 10, 25 or 50
    #[arg(long, short = 'l', default_value = "5")]
    pub limit: usize,

    /// Field to sort by: name, email, role, status, join-date
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Case-insensitive text matched against name, email, role and status
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only users with this status: Active or Inactive
    #[arg(long)]
    pub status: Option<String>,

    /// Only users with this role
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Developer, Designer, Manager, QA Engineer or Product Manager
    #[arg(long)]
    pub role: String,

    /// Active (default) or Inactive
    #[arg(long)]
    pub status: Option<String>,

    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub join_date: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub join_date: Option<String>,
}
