//! Tab state synchronized with a URL query parameter
//!
//! The selected tab and one query parameter stay consistent in both
//! directions: the URL seeds the state, tab changes rewrite the URL, and
//! back/forward navigation feeds the URL back into the state.

use super::query::QueryParams;

/// Path plus query of the current page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryParams,
}

impl Location {
    /// Parse `/path?query`. A fragment is discarded.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Location {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: QueryParams::parse(query),
        }
    }

    /// Render as a URL; no `?` when there are no parameters
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Browser-style session history
pub trait History {
    /// Current entry
    fn location(&self) -> &Location;

    /// Add a new entry after the current one
    fn push(&mut self, location: Location);

    /// Overwrite the current entry
    fn replace(&mut self, location: Location);
}

/// In-memory history with back/forward navigation
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(url: &str) -> Self {
        MemoryHistory {
            entries: vec![Location::parse(url)],
            index: 0,
        }
    }

    /// Step back. Returns false at the first entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward. Returns false at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    fn push(&mut self, location: Location) {
        // pushing drops the forward entries
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }
}

/// Tab sync configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSyncOptions {
    pub default_tab: String,
    pub valid_tabs: Vec<String>,
    /// Query parameter name
    pub param_name: String,
}

impl TabSyncOptions {
    pub fn new<I, S>(default_tab: &str, valid_tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TabSyncOptions {
            default_tab: default_tab.to_string(),
            valid_tabs: valid_tabs.into_iter().map(Into::into).collect(),
            param_name: "tab".to_string(),
        }
    }

    pub fn with_param_name(mut self, param_name: &str) -> Self {
        self.param_name = param_name.to_string();
        self
    }

    pub fn is_valid(&self, tab: &str) -> bool {
        self.valid_tabs.iter().any(|t| t == tab)
    }
}

/// Keeps the active tab and the URL parameter consistent
#[derive(Debug)]
pub struct TabSync<H: History> {
    history: H,
    options: TabSyncOptions,
    active_tab: String,
}

impl<H: History> TabSync<H> {
    /// Start from the URL: a valid parameter value, else the default tab.
    pub fn new(history: H, options: TabSyncOptions) -> Self {
        let active_tab = Self::tab_from_location(&options, history.location())
            .unwrap_or_else(|| options.default_tab.clone());
        TabSync {
            history,
            options,
            active_tab,
        }
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn options(&self) -> &TabSyncOptions {
        &self.options
    }

    /// Switch tabs and record the change in history.
    ///
    /// Returns false, changing nothing, when `tab` is not a valid tab.
    /// The parameter is removed for the default tab. Nothing is pushed when
    /// the URL would not change.
    pub fn set_active_tab(&mut self, tab: &str) -> bool {
        if !self.options.is_valid(tab) {
            tracing::warn!(
                "Invalid tab requested: {}. Valid tabs: {}",
                tab,
                self.options.valid_tabs.join(", ")
            );
            return false;
        }

        self.active_tab = tab.to_string();

        let current = self.history.location();
        let mut next = current.clone();
        if tab == self.options.default_tab {
            next.query.delete(&self.options.param_name);
        } else {
            next.query.set(&self.options.param_name, tab);
        }

        if next.to_url() != current.to_url() {
            tracing::debug!("Tab {} -> {}", current.to_url(), next.to_url());
            self.history.push(next);
        }
        true
    }

    /// Adopt the URL after back/forward navigation.
    ///
    /// A valid value is adopted and a missing parameter means the default
    /// tab. An invalid value is ignored. Never touches history.
    pub fn sync_from_history(&mut self) {
        let location = self.history.location();
        match location.query.get(&self.options.param_name) {
            None => self.active_tab = self.options.default_tab.clone(),
            Some(value) if self.options.is_valid(value) => self.active_tab = value.to_string(),
            Some(value) => {
                tracing::warn!("Ignoring invalid tab in URL: {}", value);
            }
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn tab_from_location(options: &TabSyncOptions, location: &Location) -> Option<String> {
        location
            .query
            .get(&options.param_name)
            .filter(|value| options.is_valid(value))
            .map(str::to_string)
    }
}
