use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storefrontapp::model::DEFAULT_NEW_PRICE;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0 (dev abc1234)"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    bin_name = "storefront",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "A tiny storefront: one cute message and a row of product cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored entries (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the storefront (default)
    #[command(display_order = 1)]
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Replace the message card text
    #[command(alias = "msg", display_order = 2)]
    Message {
        /// Message words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Add a product card
    #[command(display_order = 3)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Price of the new product
        #[arg(short, long, default_value = DEFAULT_NEW_PRICE, allow_hyphen_values = true)]
        price: String,

        /// Image file to embed in the card
        #[arg(long, value_name = "FILE", conflicts_with = "image_ref")]
        image: Option<PathBuf>,

        /// Image path or URL to reference as-is
        #[arg(long, value_name = "HANDLE")]
        image_ref: Option<String>,
    },

    /// Remove a product card
    #[command(alias = "rm", display_order = 4)]
    Remove {
        /// Card number as shown by `show` (1-based)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Change product prices
    #[command(display_order = 5)]
    Prices {
        /// Assignments like `2=12.50` (card number = new price)
        #[arg(required = true, num_args = 1.., value_parser = parse_assignment)]
        assignments: Vec<PriceAssignment>,
    },

    /// Drive a session from JSON-lines events on stdin
    #[command(display_order = 6)]
    Events,

    /// Print the resolved configuration
    #[command(display_order = 7)]
    Config,
}

/// One `N=PRICE` argument of the `prices` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceAssignment {
    /// 1-based card number.
    pub number: usize,
    pub text: String,
}

impl PriceAssignment {
    pub fn index(&self) -> usize {
        self.number - 1
    }
}

fn parse_assignment(raw: &str) -> Result<PriceAssignment, String> {
    let (number, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected N=PRICE, got `{}`", raw))?;
    let number: usize = number
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a card number", number.trim()))?;
    if number == 0 {
        return Err("card numbers start at 1".to_string());
    }
    Ok(PriceAssignment {
        number,
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("storefront").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["show", "--data-dir", "/tmp/shop", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shop")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_show_json() {
        match parse(&["show", "--output", "json"]).command {
            Some(Commands::Show { output }) => assert_eq!(output, OutputFormat::Json),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_defaults_price() {
        match parse(&["add", "Cozy", "Hat", "--image-ref", "/images/hat.png"]).command {
            Some(Commands::Add {
                title,
                price,
                image,
                image_ref,
            }) => {
                assert_eq!(title, vec!["Cozy", "Hat"]);
                assert_eq!(price, "10");
                assert!(image.is_none());
                assert_eq!(image_ref.as_deref(), Some("/images/hat.png"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_accepts_negative_price() {
        match parse(&["add", "Hat", "--price", "-3"]).command {
            Some(Commands::Add { price, .. }) => assert_eq!(price, "-3"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_image_sources_conflict() {
        let result = Cli::try_parse_from([
            "storefront",
            "add",
            "Hat",
            "--image",
            "hat.png",
            "--image-ref",
            "/hat.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_is_one_based() {
        assert!(Cli::try_parse_from(["storefront", "remove", "0"]).is_err());
        match parse(&["rm", "2"]).command {
            Some(Commands::Remove { number }) => assert_eq!(number, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_prices_assignments() {
        match parse(&["prices", "1=4.5", "3=abc"]).command {
            Some(Commands::Prices { assignments }) => {
                assert_eq!(assignments[0].index(), 0);
                assert_eq!(assignments[0].text, "4.5");
                assert_eq!(assignments[1].number, 3);
                assert_eq!(assignments[1].text, "abc");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("12.5").is_err());
        assert!(parse_assignment("x=1").is_err());
        assert!(parse_assignment("0=1").is_err());
        assert_eq!(
            parse_assignment(" 2 =").unwrap(),
            PriceAssignment {
                number: 2,
                text: String::new()
            }
        );
    }
}
