use roster_business::{BusinessConfig, UsersApi, UsersTable};

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    /// Users table controller; everything the panel shows comes from here.
    pub users: UsersTable,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let users = UsersTable::new(UsersApi::new(config.clone()));
        Self { config, users }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}
