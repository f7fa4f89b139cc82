use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wardrobe", version)]
#[command(about = "Outfit catalog, storage and application tool", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Character file used as the live target (overrides config)
    #[arg(long, global = true)]
    pub character: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List catalog groups with their asset counts
    Groups,

    /// Search catalog assets by name or group
    Search {
        text: Option<String>,
        #[arg(long)]
        group: Option<String>,
        /// Only assets with extended options
        #[arg(long)]
        extended: bool,
        /// Only assets that accept a lock
        #[arg(long)]
        lockable: bool,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one catalog entry
    Describe { group: String, asset: String },

    /// List lock kinds and their configurable fields
    Locks,

    /// List stored outfits
    List,

    /// Print a stored outfit
    Show { name: String },

    /// Create (or overwrite) an empty outfit
    Create {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Add or replace the item for one group of a stored outfit
    AddItem(AddItemArgs),

    /// Remove the item of one group from a stored outfit
    RemoveItem { outfit: String, group: String },

    /// Delete a stored outfit
    Delete { name: String },

    /// Rename a stored outfit
    Rename { old_name: String, new_name: String },

    /// Per-group differences between two stored outfits
    Diff { from: String, to: String },

    /// Save the character's current equipment as an outfit
    Capture {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Copy live locks into the outfit
        #[arg(long)]
        include_locks: bool,
    },

    /// Apply a stored outfit to the character file
    Apply {
        name: String,
        /// Keep currently equipped items instead of stripping first
        #[arg(long)]
        no_strip: bool,
        /// Do not apply configured locks
        #[arg(long)]
        no_locks: bool,
        /// Restrict the apply to these groups (comma separated)
        #[arg(long, value_delimiter = ',')]
        groups: Vec<String>,
    },

    /// Run the login hook against the character file
    Login,

    /// Export every outfit and the settings as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Merge outfits and settings from an exported file
    Import { path: String },

    /// Drop every stored outfit and restore default settings
    Reset {
        #[arg(long)]
        yes: bool,
    },

    /// Show all settings, read one, or set one (value parsed as JSON when possible)
    Settings {
        key: Option<String>,
        value: Option<String>,
    },

    /// Print the counters of this invocation in Prometheus format
    Metrics,
}

#[derive(Args, Debug, Clone)]
pub struct AddItemArgs {
    pub outfit: String,
    pub group: String,
    pub asset: String,
    /// Color name, or a JSON array with one color per layer
    #[arg(long)]
    pub color: Option<String>,
    /// Extended option name
    #[arg(long = "type")]
    pub subtype: Option<String>,
    /// Extra property as KEY=VALUE (repeatable)
    #[arg(long = "property")]
    pub properties: Vec<String>,
    /// Effect name (repeatable)
    #[arg(long = "effect")]
    pub effects: Vec<String>,
    /// Lock kind, e.g. CombinationPadlock
    #[arg(long)]
    pub lock: Option<String>,
    /// Lock field override as KEY=VALUE (repeatable)
    #[arg(long = "lock-field")]
    pub lock_fields: Vec<String>,
}
