use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boba_core::model::UserProfile;
use services::Clock;
use ui::{App, AppContext};

const DEFAULT_USER: &str = "Boba Lover";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyUser,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyUser => write!(f, "--user cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--user <name>] [--new-member] [--rewards]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --user <name>   display name (default: {DEFAULT_USER})");
    eprintln!("  --new-member    start from a freshly registered profile");
    eprintln!("  --rewards       open the daily rewards on launch");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BOBA_USER, BOBA_NEW_MEMBER, BOBA_OPEN_REWARDS, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    username: String,
    new_member: bool,
    open_rewards: bool,
}

impl Args {
    /// Defaults come from the environment; flags override them.
    fn from_env() -> Self {
        Self {
            username: std::env::var("BOBA_USER")
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            new_member: env_flag("BOBA_NEW_MEMBER"),
            open_rewards: env_flag("BOBA_OPEN_REWARDS"),
        }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--user" => {
                    let value = require_value(args, "--user")?;
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(ArgsError::EmptyUser);
                    }
                    self.username = value.to_string();
                }
                "--new-member" => self.new_member = true,
                "--rewards" => self.open_rewards = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Parsed::Run(self))
    }

    fn profile(&self) -> UserProfile {
        if self.new_member {
            UserProfile::new_member(self.username.clone())
        } else {
            UserProfile::returning_member(self.username.clone())
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::from_env()
        .parse(&mut std::env::args().skip(1))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();

    let profile = args.profile();
    info!(
        user = profile.username(),
        points = profile.points(),
        level = profile.level().title(),
        "starting session"
    );

    let context = AppContext::new(profile, Clock::default()).with_rewards_open(args.open_rewards);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Boba Social")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args {
            username: DEFAULT_USER.to_string(),
            new_member: false,
            open_rewards: false,
        }
    }

    fn parse(argv: &[&str]) -> Result<Parsed, ArgsError> {
        defaults().parse(&mut argv.iter().map(|arg| (*arg).to_string()))
    }

    #[test]
    fn no_flags_keeps_defaults() {
        assert_eq!(parse(&[]).unwrap(), Parsed::Run(defaults()));
    }

    #[test]
    fn flags_override_defaults() {
        let Parsed::Run(args) = parse(&["--user", " Taro ", "--new-member", "--rewards"]).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(args.username, "Taro");
        assert!(args.new_member);
        assert!(args.open_rewards);
        assert_eq!(args.profile().points(), 100);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert_eq!(
            parse(&["--user"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--user" }
        );
        assert_eq!(parse(&["--user", "  "]).unwrap_err(), ArgsError::EmptyUser);
        assert_eq!(
            parse(&["--points"]).unwrap_err(),
            ArgsError::UnknownArg("--points".to_string())
        );
        assert_eq!(parse(&["-h"]).unwrap(), Parsed::Help);
    }

    #[test]
    fn returning_member_profile_by_default() {
        let profile = defaults().profile();
        assert_eq!(profile.points(), 1250);
        assert_eq!(profile.username(), DEFAULT_USER);
    }
}
