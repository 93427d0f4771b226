//! Configuration options for rewriting JSON files

/// Default substring searched for in string values
pub const DEFAULT_FROM: &str = "sudo-flix";
/// Default replacement for [`DEFAULT_FROM`]
pub const DEFAULT_TO: &str = "levrx";
/// Default spaces per indentation level in rewritten files
pub const DEFAULT_INDENT: u8 = 4;

/// A literal substring replacement applied to string values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when applying this pair can never change a string
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// True when replaced text still contains the search string, so a second run
    /// would find new matches
    pub fn is_self_reintroducing(&self) -> bool {
        !self.from.is_empty() && self.to.contains(&self.from)
    }
}

impl Default for Substitution {
    fn default() -> Self {
        Self::new(DEFAULT_FROM, DEFAULT_TO)
    }
}

/// What to do with documents whose top-level value is not an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonObjectPolicy {
    /// Leave strings untouched but still rewrite the file with the configured formatting
    Reserialize,
    /// Leave the file on disk exactly as it was
    Skip,
}

/// How rewritten content replaces the original file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a temporary file next to the target and rename it over the original
    Atomic,
    /// Truncate the original and write in place
    Direct,
}

/// Rewrite configuration options
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Substring replacement applied to string values
    pub substitution: Substitution,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Walk subdirectories instead of immediate entries only
    pub recursive: bool,
    /// Handling of non-object top-level documents
    pub non_object: NonObjectPolicy,
    /// File replacement strategy
    pub write_mode: WriteMode,
    /// Skip writing files where no replacement happened
    pub only_changed: bool,
    /// Transform but never write
    pub dry_run: bool,
    /// Keep going after a file fails instead of aborting the run
    pub continue_on_error: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            substitution: Substitution::default(),
            indent_size: DEFAULT_INDENT,
            recursive: false,
            non_object: NonObjectPolicy::Reserialize,
            write_mode: WriteMode::Atomic,
            only_changed: false,
            dry_run: false,
            continue_on_error: false,
        }
    }
}

impl RewriteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that reproduces the one-shot script behavior: direct
    /// overwrite, non-object documents left alone
    pub fn legacy() -> Self {
        Self {
            non_object: NonObjectPolicy::Skip,
            write_mode: WriteMode::Direct,
            ..Default::default()
        }
    }

    /// Set the substitution pair
    pub fn with_substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitution = Substitution::new(from, to);
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_non_object_policy(mut self, policy: NonObjectPolicy) -> Self {
        self.non_object = policy;
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_only_changed(mut self, only_changed: bool) -> Self {
        self.only_changed = only_changed;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        // str::replace with an empty pattern inserts between every character
        if self.substitution.from.is_empty() {
            return Err("Search string must not be empty".to_string());
        }

        Ok(())
    }
}
