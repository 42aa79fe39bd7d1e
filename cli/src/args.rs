use crate::global_settings::GlobalSettings;
use clap::{Arg, ArgMatches, Command};

fn expressions(help: &'static str, min: usize) -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .help(help)
        .required(true)
        .num_args(min..)
}

pub(crate) fn build_cli() -> Command {
    Command::new("intervals")
        .version("0.1")
        .about("Evaluate and combine intervals like [1,5] or ]3,9[")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("eval")
                .about("Show the canonical form of expressions")
                .arg(expressions("The expressions to evaluate", 1)),
        )
        .subcommand(
            Command::new("contains")
                .about("Check whether values belong to an expression")
                .arg(
                    Arg::new("expr")
                        .value_name("EXPR")
                        .help("The expression to test against")
                        .required(true),
                )
                .arg(
                    Arg::new("values")
                        .value_name("VALUE")
                        .help("The values to test")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("union")
                .about("Combine expressions with union, from left to right")
                .arg(expressions("The expressions to combine", 2)),
        )
        .subcommand(
            Command::new("intersect")
                .about(
                    "Combine expressions with intersection, from left to right",
                )
                .arg(expressions("The expressions to combine", 2)),
        )
        .subcommand(
            // Use    eval "$(intervals completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

/// The expressions given to a subcommand
pub(crate) fn get_expressions(args: &ArgMatches) -> Vec<&str> {
    args.get_many::<String>("expr")
        .map(|v| v.map(String::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_eval() {
        let m = build_cli()
            .try_get_matches_from(["intervals", "eval", "[1,2]", "]3,4["])
            .unwrap();
        let Some(("eval", sub)) = m.subcommand() else {
            panic!("expected the eval subcommand");
        };
        assert_eq!(get_expressions(sub), vec!["[1,2]", "]3,4["]);
    }

    #[test]
    fn test_contains() {
        let m = build_cli()
            .try_get_matches_from([
                "intervals", "contains", "[-5,5]", "-3", "2.5", "x",
            ])
            .unwrap();
        let Some(("contains", sub)) = m.subcommand() else {
            panic!("expected the contains subcommand");
        };
        assert_eq!(get_expressions(sub), vec!["[-5,5]"]);
        let values = sub
            .get_many::<String>("values")
            .unwrap()
            .map(String::as_str)
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["-3", "2.5", "x"]);
    }

    #[test]
    fn test_global_settings() {
        let m = build_cli()
            .try_get_matches_from(["intervals", "-vv", "eval", "--json", "[1,2]"])
            .unwrap();
        let settings = GlobalSettings::new(&m);
        assert!(settings.json);
        assert_eq!(settings.verbosity, 2);
        assert_eq!(settings.log_level(), log::LevelFilter::Debug);

        let m = build_cli()
            .try_get_matches_from(["intervals", "eval", "[1,2]"])
            .unwrap();
        let settings = GlobalSettings::new(&m);
        assert!(!settings.json);
        assert_eq!(settings.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_missing_operands() {
        assert!(build_cli()
            .try_get_matches_from(["intervals", "union", "[1,2]"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["intervals", "contains", "[1,2]"])
            .is_err());
        assert!(build_cli().try_get_matches_from(["intervals"]).is_err());
    }
}
