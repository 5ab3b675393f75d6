use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Enter projects interactively; both lists redraw after every addition
    Session,

    /// Submit one project and print the resulting lists
    Add {
        /// Project title
        #[arg(long)]
        title: String,
        /// Project description
        #[arg(long)]
        description: String,
        /// Team size, as typed into the form
        #[arg(long, allow_hyphen_values = true)]
        people: String,
        /// Print the project snapshot as JSON instead of rendered lists
        #[arg(long)]
        json: bool,
        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },

    /// Check a single value against validation constraints
    Validate {
        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Reject blank values
        #[arg(long)]
        required: bool,
        /// Inclusive lower bound (length for text, value for numbers)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,
        /// Inclusive upper bound (length for text, value for numbers)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,
        /// Coerce the value to a number before checking
        #[arg(long)]
        numeric: bool,
    },
}
