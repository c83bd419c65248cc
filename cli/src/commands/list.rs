//! List users command.

use anyhow::{Context as _, Result, bail};
use roster_business::users::{Filters, PAGE_SIZES, SortConfig, SortDirection};
use roster_business::{PageResult, User, UserField, UserQuery, UsersApi};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::ListArgs;
use crate::commands::{parse_role, parse_status};
use crate::output::Output;

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Join Date")]
    join_date: String,
}

impl From<&User> for ListRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: truncate_str(&user.name, 24),
            email: truncate_str(&user.email, 32),
            role: user.role.to_string(),
            status: user.status.to_string(),
            join_date: user
                .join_date
                .map_or_else(String::new, |date| date.to_string()),
        }
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

/// Turns command-line arguments into the query the table would send.
pub fn build_query(args: &ListArgs) -> Result<UserQuery> {
    if args.page == 0 {
        bail!("Page numbers start at 1");
    }
    if !PAGE_SIZES.contains(&args.limit) {
        bail!("Page size must be one of {PAGE_SIZES:?}");
    }

    let sort = match &args.sort {
        Some(field) => {
            let field = UserField::parse(field)
                .with_context(|| format!("Unknown sort field '{field}'"))?;
            let direction = match SortDirection::parse(&args.order) {
                Some(SortDirection::None) | None => {
                    bail!("Unknown sort order '{}' (expected asc or desc)", args.order)
                }
                Some(direction) => direction,
            };
            SortConfig::new(field, direction)
        }
        None => SortConfig::default(),
    };

    let status = args.status.as_deref().map(parse_status).transpose()?;
    let role = args.role.as_deref().map(parse_role).transpose()?.flatten();

    Ok(UserQuery {
        page: args.page,
        page_size: args.limit,
        sort,
        search: args.search.clone().unwrap_or_default(),
        filters: Filters { status, role },
    })
}

#[instrument(skip_all, name = "list", fields(page = args.page, limit = args.limit))]
pub async fn run_list(api: &UsersApi, args: &ListArgs) -> Result<PageResult> {
    let out = Output::new();
    let query = build_query(args)?;

    let page = api.list(&query).await.context("Failed to fetch users")?;

    if page.users.is_empty() {
        out.dim("No users found");
    } else {
        let rows: Vec<ListRow> = page.users.iter().map(ListRow::from).collect();
        let mut table = Table::new(&rows);
        table.with(Style::rounded());
        out.newline();
        out.print(table.to_string());
    }
    out.page_footer(page.summary(), page.page_label());

    Ok(page)
}
